use automation_core::{AutomationResult, ObjectRef, OwnedHandle, Variant};

use crate::borders::Borders;
use crate::enums::{HAlign, VAlign};
use crate::font::Font;
use crate::hyperlink::Hyperlink;
use crate::interior::Interior;

/// A rectangular block of cells.
#[derive(Debug)]
pub struct Range {
    handle: OwnedHandle,
}

impl Range {
    /// # Errors
    /// Fails with `NullObject` for a null reference.
    pub fn attach(object: ObjectRef) -> AutomationResult<Self> {
        Ok(Self {
            handle: OwnedHandle::new(object)?,
        })
    }

    /// Raw cell value; `Variant::Empty` for an empty cell and after the
    /// server is gone.
    pub fn value(&self) -> Variant {
        self.handle.read("Value")
    }

    pub fn set_value(&self, value: impl Into<Variant>) {
        self.handle.write("Value", value.into());
    }

    pub fn formula(&self) -> String {
        self.handle.read_string("Formula")
    }

    pub fn set_formula(&self, formula: &str) {
        self.handle.write("Formula", formula.into());
    }

    /// Displayed text, read-only.
    pub fn text(&self) -> String {
        self.handle.read_string("Text")
    }

    /// 1-based row of the top-left cell.
    pub fn row(&self) -> i32 {
        self.handle.read_i32("Row")
    }

    /// 1-based column of the top-left cell.
    pub fn column(&self) -> i32 {
        self.handle.read_i32("Column")
    }

    pub fn row_count(&self) -> i32 {
        self.axis_count("Rows")
    }

    pub fn column_count(&self) -> i32 {
        self.axis_count("Columns")
    }

    // Rows/Columns are transient sub-objects: fetched, counted, released.
    fn axis_count(&self, member: &str) -> i32 {
        let Some(object) = self.handle.read_object(member) else {
            return 0;
        };
        OwnedHandle::new(object).map_or(0, |axis| axis.read_i32("Count"))
    }

    pub fn font(&self) -> Option<Font> {
        self.handle
            .read_object("Font")
            .and_then(|object| Font::attach(object).ok())
    }

    pub fn interior(&self) -> Option<Interior> {
        self.handle
            .read_object("Interior")
            .and_then(|object| Interior::attach(object).ok())
    }

    pub fn borders(&self) -> Option<Borders> {
        self.handle
            .read_object("Borders")
            .and_then(|object| Borders::attach(object).ok())
    }

    /// The first hyperlink anchored in this range, if any. A range with
    /// no hyperlink reads as `None` — never a facade around nothing.
    pub fn hyperlink(&self) -> Option<Hyperlink> {
        let links = self.handle.read_object("Hyperlinks")?;
        let links = OwnedHandle::new(links).ok()?;
        automation_core::collection::item(&links, 1)
            .and_then(|object| Hyperlink::attach(object).ok())
    }

    pub fn horizontal_alignment(&self) -> HAlign {
        HAlign::from_raw(self.handle.read_i32("HorizontalAlignment"))
    }

    pub fn set_horizontal_alignment(&self, align: HAlign) {
        self.handle.write("HorizontalAlignment", align.raw().into());
    }

    pub fn vertical_alignment(&self) -> VAlign {
        VAlign::from_raw(self.handle.read_i32("VerticalAlignment"))
    }

    pub fn set_vertical_alignment(&self, align: VAlign) {
        self.handle.write("VerticalAlignment", align.raw().into());
    }

    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn merge(&self) -> AutomationResult<()> {
        self.handle.call("Merge", &[]).map(|_| ())
    }

    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn unmerge(&self) -> AutomationResult<()> {
        self.handle.call("UnMerge", &[]).map(|_| ())
    }

    /// Clears values and formatting.
    ///
    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn clear(&self) -> AutomationResult<()> {
        self.handle.call("Clear", &[]).map(|_| ())
    }

    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn select(&self) -> AutomationResult<()> {
        self.handle.call("Select", &[]).map(|_| ())
    }

    /// Copies to the clipboard.
    ///
    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn copy(&self) -> AutomationResult<()> {
        self.handle.call("Copy", &[]).map(|_| ())
    }

    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn cut(&self) -> AutomationResult<()> {
        self.handle.call("Cut", &[]).map(|_| ())
    }

    /// Aliases the underlying reference for use as a call argument.
    pub(crate) fn share_object(&self) -> Option<ObjectRef> {
        self.handle.share()
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}
