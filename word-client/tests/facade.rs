//! End-to-end facade tests against the scripted in-memory server.

use std::rc::Rc;

use automation_core::testing::{FakeObject, FakeSession};
use automation_core::{convert::Rgb, Variant};
use word_client::{
    Application, ParagraphAlignment, SaveOptions, ShadingTexture, Underline, WordColor, PROG_ID,
};

/// An application fake with one document, a paragraph and bookmark
/// collections, wired up the way the real object model hands them out.
fn scripted_word() -> (FakeSession, Rc<FakeObject>) {
    let content = FakeObject::new("Range")
        .with("Text", "Hello, Word.\r")
        .with("Start", 0)
        .with("End", 13);
    let paragraph = FakeObject::new("Paragraph")
        .with("Alignment", ParagraphAlignment::Center.raw())
        .with("LineSpacing", 12.0)
        .with_object("Range", content.clone());
    let paragraphs = FakeObject::collection("Paragraphs", "Paragraph");
    paragraphs.push_item(paragraph);
    let bookmarks = FakeObject::collection("Bookmarks", "Bookmark");
    let document = FakeObject::new("Document")
        .with("Name", "Report.docx")
        .with("Saved", true)
        .with_object("Content", content)
        .with_object("Paragraphs", paragraphs)
        .with_object("Bookmarks", bookmarks);
    let documents = FakeObject::collection("Documents", "Document");
    documents.push_item(document);
    let app = FakeObject::new("Application")
        .with("Name", "Microsoft Word")
        .with("Visible", false)
        .with_object("Documents", documents);

    let session = FakeSession::new();
    session.register(PROG_ID, app.clone());
    (session, app)
}

#[test]
fn walks_the_object_graph_and_reads_through() {
    let (session, _app) = scripted_word();
    let word = Application::connect(&session).expect("connect");
    assert_eq!(word.name(), "Microsoft Word");

    let documents = word.documents().expect("Documents");
    assert_eq!(documents.count(), 1);
    let document = documents.by_name("Report.docx").expect("Report.docx");

    let content = document.content().expect("Content");
    assert_eq!(content.text(), "Hello, Word.\r");
    assert_eq!(content.start(), 0);
    assert_eq!(content.end(), 13);

    let paragraph = document
        .paragraphs()
        .and_then(|paragraphs| paragraphs.item(1))
        .expect("first paragraph");
    assert_eq!(paragraph.alignment(), ParagraphAlignment::Center);
    assert!((paragraph.line_spacing() - 12.0).abs() < f64::EPSILON);
}

#[test]
fn quit_passes_the_save_option_through() {
    let (session, app) = scripted_word();
    let word = Application::connect(&session).expect("connect");
    word.quit(SaveOptions::DoNotSave).expect("quit");

    app.kill_tree();
    let err = word.quit(SaveOptions::Save).expect_err("server is gone");
    assert!(err.is_stale());
}

#[test]
fn bookmarks_exist_after_add_and_delete_descending() {
    let (session, _app) = scripted_word();
    let word = Application::connect(&session).expect("connect");
    let document = word
        .documents()
        .and_then(|documents| documents.item(1))
        .expect("Report.docx");
    let bookmarks = document.bookmarks().expect("Bookmarks");
    let content = document.content().expect("Content");

    assert!(!bookmarks.exists("intro"));
    let mark = bookmarks.add("intro", &content).expect("add");
    assert_eq!(mark.name(), "intro");
    assert!(bookmarks.exists("intro"));
    assert!(bookmarks.by_name("intro").is_some());

    let err = bookmarks.add("", &content).expect_err("empty name");
    assert!(matches!(
        err,
        automation_core::AutomationError::InvalidArgument(_)
    ));
}

#[test]
fn batch_bookmark_deletion_resolves_indices_descending() {
    let bookmarks = FakeObject::collection("Bookmarks", "Bookmark");
    for i in 1..=10 {
        bookmarks.push_item(FakeObject::new("Bookmark").with("Name", format!("B{i}").as_str()));
    }
    let facade = word_client::Bookmarks::attach(bookmarks.object_ref()).expect("attach");

    facade.delete_indices(&[2, 4, 6]).expect("batch delete");
    assert_eq!(bookmarks.delete_log(), vec![6, 4, 2]);

    let remaining: Vec<String> = facade.iter().map(|mark| mark.name()).collect();
    assert_eq!(
        remaining,
        vec!["B1", "B3", "B5", "B7", "B8", "B9", "B10"]
    );
}

#[test]
fn table_add_validates_anchor_and_dimensions() {
    let tables = FakeObject::collection("Tables", "Table");
    let anchor = FakeObject::new("Range");
    let facade = word_client::Tables::attach(tables.object_ref()).expect("attach");
    let mut anchor = word_client::Range::attach(anchor.object_ref()).expect("attach");

    let err = facade.add(&anchor, 0, 3).expect_err("zero rows");
    assert!(matches!(
        err,
        automation_core::AutomationError::InvalidArgument(_)
    ));

    facade.add(&anchor, 2, 3).expect("add");
    assert_eq!(facade.count(), 1);

    anchor.release();
    let err = facade.add(&anchor, 2, 3).expect_err("released anchor");
    assert!(matches!(
        err,
        automation_core::AutomationError::InvalidArgument(_)
    ));
}

#[test]
fn table_cells_are_one_based() {
    let cell_range = FakeObject::new("Range").with("Text", "A1\x07");
    let cell = FakeObject::new("Cell")
        .with("RowIndex", 1)
        .with("ColumnIndex", 1)
        .with_object("Range", cell_range);
    let table = FakeObject::new("Table").with_object("Cell", cell);
    let facade = word_client::Table::attach(table.object_ref()).expect("attach");

    let cell = facade.cell(1, 1).expect("cell (1,1)");
    assert_eq!(cell.row_index(), 1);
    assert_eq!(cell.range().expect("cell range").text(), "A1\x07");

    assert!(facade.cell(0, 1).is_none());
    assert!(facade.cell(1, 0).is_none());
}

#[test]
fn font_color_distinguishes_automatic() {
    let font = FakeObject::new("Font")
        .with("Color", WordColor::Automatic.raw())
        .with("Underline", Underline::Single.raw())
        .with("Hidden", false);
    let range = FakeObject::new("Range").with_object("Font", font.clone());
    let facade = word_client::Range::attach(range.object_ref()).expect("attach");

    let font_facade = facade.font().expect("Font");
    assert_eq!(font_facade.color(), WordColor::Automatic);
    assert_eq!(font_facade.underline(), Underline::Single);

    font_facade.set_color(WordColor::Rgb(Rgb { r: 0, g: 0, b: 0xFF }));
    assert_eq!(
        font.property("Color"),
        Some(Variant::I32(0x00FF_0000)) // blue sits in the high byte
    );
}

#[test]
fn shading_converts_texture_and_colors() {
    let shading = FakeObject::new("Shading")
        .with("Texture", ShadingTexture::Percent25.raw())
        .with("BackgroundPatternColor", WordColor::Automatic.raw());
    let range = FakeObject::new("Range").with_object("Shading", shading.clone());
    let facade = word_client::Range::attach(range.object_ref()).expect("attach");

    let shading_facade = facade.shading().expect("Shading");
    assert_eq!(shading_facade.texture(), ShadingTexture::Percent25);
    assert_eq!(
        shading_facade.background_pattern_color(),
        WordColor::Automatic
    );

    shading_facade.set_texture(ShadingTexture::Solid);
    assert_eq!(
        shading.property("Texture"),
        Some(Variant::I32(ShadingTexture::Solid.raw()))
    );
}

#[test]
fn stale_document_degrades_across_the_graph() {
    let (session, app) = scripted_word();
    let word = Application::connect(&session).expect("connect");
    let document = word
        .documents()
        .and_then(|documents| documents.item(1))
        .expect("Report.docx");
    let paragraphs = document.paragraphs().expect("Paragraphs");

    app.kill_tree();

    assert_eq!(document.name(), "");
    assert!(document.content().is_none());
    assert_eq!(paragraphs.count(), 0);
    assert_eq!(paragraphs.iter().count(), 0);
    let err = document.save().expect_err("mutating call on dead server");
    assert!(err.is_stale());
}
