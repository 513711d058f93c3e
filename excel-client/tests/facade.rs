//! End-to-end facade tests against the scripted in-memory server.

use std::rc::Rc;

use automation_core::testing::{FakeObject, FakeSession};
use automation_core::{convert::Rgb, MockSession, ObjectRef, Session, Variant};
use excel_client::{Application, HAlign, LineStyle, SheetVisibility, UnderlineStyle, PROG_ID};

/// An application fake with one workbook, one worksheet and an `A1`
/// range, wired up the way the real object model hands them out.
fn scripted_excel() -> (FakeSession, Rc<FakeObject>) {
    let range = FakeObject::new("Range")
        .with("Value", 42)
        .with("Formula", "=6*7")
        .with("Text", "42")
        .with("Row", 1)
        .with("Column", 1)
        .with("HorizontalAlignment", HAlign::General.raw());
    let sheet = FakeObject::new("Worksheet")
        .with("Name", "Sheet1")
        .with("Index", 1)
        .with("Visible", SheetVisibility::Visible.raw())
        .with_object("Range", range);
    let sheets = FakeObject::collection("Worksheets", "Worksheet");
    sheets.push_item(sheet);
    let workbook = FakeObject::new("Workbook")
        .with("Name", "Book1")
        .with("Saved", true)
        .with_object("Worksheets", sheets);
    let workbooks = FakeObject::collection("Workbooks", "Workbook");
    workbooks.push_item(workbook);
    let app = FakeObject::new("Application")
        .with("Name", "Microsoft Excel")
        .with("Visible", false)
        .with_object("Workbooks", workbooks);

    let session = FakeSession::new();
    session.register(PROG_ID, app.clone());
    (session, app)
}

#[test]
fn walks_the_object_graph_and_reads_through() {
    let (session, _app) = scripted_excel();
    let excel = Application::connect(&session).expect("connect");
    assert_eq!(excel.name(), "Microsoft Excel");
    assert!(!excel.visible());

    let workbooks = excel.workbooks().expect("Workbooks");
    assert_eq!(workbooks.count(), 1);
    let workbook = workbooks.item(1).expect("Book1");
    assert_eq!(workbook.name(), "Book1");
    assert!(workbook.saved());

    let sheets = workbook.worksheets().expect("Worksheets");
    let sheet = sheets.by_name("Sheet1").expect("Sheet1");
    assert_eq!(sheet.index(), 1);
    assert_eq!(sheet.visible(), SheetVisibility::Visible);

    let range = sheet.range("A1").expect("A1");
    assert_eq!(range.value().as_i32(), Some(42));
    assert_eq!(range.formula(), "=6*7");
    assert_eq!(range.horizontal_alignment(), HAlign::General);
}

#[test]
fn writes_pass_through_to_the_server() {
    let (session, app) = scripted_excel();
    let excel = Application::connect(&session).expect("connect");
    excel.set_visible(true);
    assert_eq!(app.property("Visible"), Some(Variant::Bool(true)));

    let sheet = excel
        .workbooks()
        .and_then(|books| books.item(1))
        .and_then(|book| book.worksheets())
        .and_then(|sheets| sheets.item(1))
        .expect("Sheet1");
    sheet.set_name("Budget");
    assert_eq!(sheet.name(), "Budget");
}

#[test]
fn every_facade_releases_its_reference_exactly_once() {
    let (session, app) = scripted_excel();
    {
        let mut excel = Application::connect(&session).expect("connect");
        assert_eq!(app.ref_count(), 1);
        let workbooks = excel.workbooks().expect("Workbooks");
        let _ = workbooks.count();
        excel.release();
        excel.release(); // second release is a no-op
        assert_eq!(app.ref_count(), 0);
        assert_eq!(app.release_count(), 1);
        // `workbooks` still owns its own reference here
    }
    // drop released the collection handle too
    assert_eq!(app.release_count(), 1);
}

#[test]
fn sibling_wrappers_own_independent_references() {
    let (session, _app) = scripted_excel();
    let excel = Application::connect(&session).expect("connect");
    let workbooks = excel.workbooks().expect("Workbooks");

    let first = workbooks.item(1).expect("first wrapper");
    let mut second = workbooks.item(1).expect("second wrapper");
    second.release();
    // the first wrapper is untouched by its sibling's release
    assert_eq!(first.name(), "Book1");
}

#[test]
fn absent_relationships_read_as_none() {
    let sheet = FakeObject::new("Worksheet")
        .with("Name", "Sheet1")
        .with_absent("UsedRange");
    let sheets = FakeObject::collection("Worksheets", "Worksheet");
    sheets.push_item(sheet);
    let workbook = FakeObject::new("Workbook").with_object("Worksheets", sheets);

    let sheet = excel_client::Workbook::attach(workbook.object_ref())
        .expect("attach")
        .worksheets()
        .and_then(|sheets| sheets.item(1))
        .expect("Sheet1");
    assert!(sheet.used_range().is_none());
    // never scripted at all reads the same way
    assert!(sheet.shapes().is_none());
}

#[test]
fn null_root_object_is_rejected_at_connect() {
    let mut session = MockSession::new();
    session
        .expect_create_instance()
        .returning(|_| Ok(ObjectRef::null()));
    let err = Application::connect(&session).expect_err("null root");
    assert!(matches!(
        err,
        automation_core::AutomationError::NullObject
    ));
}

#[test]
fn connect_propagates_activation_failure() {
    let mut session = MockSession::new();
    session.expect_create_instance().returning(|_| {
        Err(automation_core::AutomationError::Internal(
            "server failed to start".into(),
        ))
    });
    assert!(Application::connect(&session).is_err());

    // and the scripted session rejects unknown prog ids outright
    let empty = FakeSession::new();
    assert!(empty.create_instance(PROG_ID).is_err());
}

#[test]
fn batch_sheet_deletion_resolves_indices_descending() {
    let sheets = FakeObject::collection("Worksheets", "Worksheet");
    for name in ["S1", "S2", "S3", "S4", "S5"] {
        sheets.push_item(FakeObject::new("Worksheet").with("Name", name));
    }
    let facade = excel_client::Worksheets::attach(sheets.object_ref()).expect("attach");

    facade.delete_indices(&[1, 4, 2]).expect("batch delete");
    assert_eq!(sheets.delete_log(), vec![4, 2, 1]);

    let remaining: Vec<String> = facade.iter().map(|sheet| sheet.name()).collect();
    assert_eq!(remaining, vec!["S3", "S5"]);
}

#[test]
fn batch_delete_on_a_dead_collection_reports_staleness() {
    let sheets = FakeObject::collection("Worksheets", "Worksheet");
    sheets.push_item(FakeObject::new("Worksheet").with("Name", "S1"));
    let facade = excel_client::Worksheets::attach(sheets.object_ref()).expect("attach");

    sheets.kill_tree();
    let err = facade.delete_indices(&[1]).expect_err("dead server");
    assert!(err.is_stale());
}

#[test]
fn add_keeps_the_sheet_when_rename_is_rejected() {
    let sheets = FakeObject::collection("Worksheets", "Worksheet");
    let fresh = FakeObject::new("Worksheet").with("Name", "Sheet4");
    fresh.fail_put("Name");
    sheets.on_invoke("Add", Variant::Object(ObjectRef::new(fresh)));
    let facade = excel_client::Worksheets::attach(sheets.object_ref()).expect("attach");

    // The rename is a best-effort write; the sheet itself survives.
    let sheet = facade.add(Some("Budget")).expect("add succeeds");
    assert_eq!(sheet.name(), "Sheet4");
}

#[test]
fn iteration_skips_elements_that_fail_to_fetch() {
    let sheets = FakeObject::collection("Worksheets", "Worksheet");
    for name in ["A", "B", "C", "D"] {
        sheets.push_item(FakeObject::new("Worksheet").with("Name", name));
    }
    sheets.poison_item(2);
    let facade = excel_client::Worksheets::attach(sheets.object_ref()).expect("attach");

    let names: Vec<String> = facade.iter().map(|sheet| sheet.name()).collect();
    assert_eq!(names, vec!["A", "C", "D"]);
}

#[test]
fn stale_objects_degrade_reads_and_noop_writes() {
    let (session, app) = scripted_excel();
    let excel = Application::connect(&session).expect("connect");
    let workbook = excel
        .workbooks()
        .and_then(|books| books.item(1))
        .expect("Book1");

    app.kill_tree();

    assert_eq!(workbook.name(), "");
    assert!(!workbook.saved());
    workbook.set_saved(true); // swallowed
    let err = workbook.save().expect_err("mutating call on dead server");
    assert!(err.is_stale());
}

#[test]
fn formatting_values_convert_at_the_boundary() {
    let font = FakeObject::new("Font")
        .with("Size", 11.0)
        .with("Bold", false)
        .with("Underline", UnderlineStyle::None.raw())
        .with("Color", Rgb { r: 0x12, g: 0x34, b: 0x56 }.to_ole());
    let range = FakeObject::new("Range").with_object("Font", font.clone());

    let facade = excel_client::Range::attach(range.object_ref()).expect("attach");
    let font_facade = facade.font().expect("Font");
    assert_eq!(font_facade.color(), Rgb { r: 0x12, g: 0x34, b: 0x56 });
    assert_eq!(font_facade.underline(), UnderlineStyle::None);

    font_facade.set_bold(true);
    font_facade.set_color(Rgb { r: 0xFF, g: 0, b: 0 });
    assert_eq!(font.property("Bold"), Some(Variant::Bool(true)));
    assert_eq!(font.property("Color"), Some(Variant::I32(0x0000_00FF)));
}

#[test]
fn borders_are_keyed_by_edge_constant() {
    // Edge keys are raw Xl constants (5..=12), not positions; the fake
    // serves Item by index, so seed enough slots for every edge.
    let borders = FakeObject::collection("Borders", "Border");
    for _ in 0..12 {
        borders.push_item(FakeObject::new("Border").with("LineStyle", LineStyle::None.raw()));
    }
    let facade = excel_client::Borders::attach(borders.object_ref()).expect("attach");

    let bottom = facade
        .item(excel_client::BorderIndex::EdgeBottom)
        .expect("edge bottom");
    assert_eq!(bottom.line_style(), LineStyle::None);
    bottom.set_line_style(LineStyle::Continuous);
    assert_eq!(bottom.line_style(), LineStyle::Continuous);

    facade.set_line_style(LineStyle::Double);
    assert_eq!(
        borders.property("LineStyle"),
        Some(Variant::I32(LineStyle::Double.raw()))
    );
}

#[test]
fn shape_text_goes_through_the_text_frame() {
    let chars = FakeObject::new("Characters").with("Text", "hello");
    let frame = FakeObject::new("TextFrame").with_object("Characters", chars.clone());
    let shape = FakeObject::new("Shape").with_object("TextFrame", frame);
    let facade = excel_client::Shape::attach(shape.object_ref()).expect("attach");

    assert_eq!(facade.text(), "hello");
    facade.set_text("updated");
    assert_eq!(chars.property("Text"), Some(Variant::Str("updated".into())));

    // a shape without a text frame reads empty and swallows writes
    let bare = FakeObject::new("Shape");
    let bare = excel_client::Shape::attach(bare.object_ref()).expect("attach");
    assert_eq!(bare.text(), "");
    bare.set_text("dropped");
}

#[test]
fn copy_after_rejects_released_target() {
    let sheets = FakeObject::collection("Worksheets", "Worksheet");
    sheets.push_item(FakeObject::new("Worksheet").with("Name", "S1"));
    sheets.push_item(FakeObject::new("Worksheet").with("Name", "S2"));
    let facade = excel_client::Worksheets::attach(sheets.object_ref()).expect("attach");

    let source = facade.item(1).expect("S1");
    let mut target = facade.item(2).expect("S2");
    source.copy_after(&target).expect("copy");

    target.release();
    let err = source.copy_after(&target).expect_err("released target");
    assert!(matches!(
        err,
        automation_core::AutomationError::InvalidArgument(_)
    ));
}

#[test]
fn hyperlink_add_rejects_empty_address() {
    let links = FakeObject::collection("Hyperlinks", "Hyperlink");
    let anchor = FakeObject::new("Range");
    let facade = excel_client::Hyperlinks::attach(links.object_ref()).expect("attach");
    let anchor = excel_client::Range::attach(anchor.object_ref()).expect("attach");

    let err = facade.add(&anchor, "", "home").expect_err("empty address");
    assert!(matches!(
        err,
        automation_core::AutomationError::InvalidArgument(_)
    ));
    assert_eq!(links.item_count(), 0);

    let link = facade
        .add(&anchor, "https://example.org", "home")
        .expect("add");
    link.set_screen_tip("example");
    assert_eq!(links.item_count(), 1);
}
