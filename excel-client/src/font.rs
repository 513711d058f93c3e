use automation_core::convert::Rgb;
use automation_core::{AutomationResult, ObjectRef, OwnedHandle};

use crate::enums::UnderlineStyle;

/// Character formatting of a range. Reads degrade to defaults once the
/// owning range or its document is gone; writes become no-ops.
#[derive(Debug)]
pub struct Font {
    handle: OwnedHandle,
}

impl Font {
    /// # Errors
    /// Fails with `NullObject` for a null reference.
    pub fn attach(object: ObjectRef) -> AutomationResult<Self> {
        Ok(Self {
            handle: OwnedHandle::new(object)?,
        })
    }

    pub fn name(&self) -> String {
        self.handle.read_string("Name")
    }

    pub fn set_name(&self, name: &str) {
        self.handle.write("Name", name.into());
    }

    pub fn size(&self) -> f64 {
        self.handle.read_f64("Size")
    }

    pub fn set_size(&self, points: f64) {
        self.handle.write("Size", points.into());
    }

    pub fn bold(&self) -> bool {
        self.handle.read_bool("Bold")
    }

    pub fn set_bold(&self, bold: bool) {
        self.handle.write("Bold", bold.into());
    }

    pub fn italic(&self) -> bool {
        self.handle.read_bool("Italic")
    }

    pub fn set_italic(&self, italic: bool) {
        self.handle.write("Italic", italic.into());
    }

    pub fn underline(&self) -> UnderlineStyle {
        UnderlineStyle::from_raw(self.handle.read_i32("Underline"))
    }

    pub fn set_underline(&self, style: UnderlineStyle) {
        self.handle.write("Underline", style.raw().into());
    }

    pub fn strikethrough(&self) -> bool {
        self.handle.read_bool("Strikethrough")
    }

    pub fn set_strikethrough(&self, strikethrough: bool) {
        self.handle.write("Strikethrough", strikethrough.into());
    }

    pub fn subscript(&self) -> bool {
        self.handle.read_bool("Subscript")
    }

    pub fn set_subscript(&self, subscript: bool) {
        self.handle.write("Subscript", subscript.into());
    }

    pub fn superscript(&self) -> bool {
        self.handle.read_bool("Superscript")
    }

    pub fn set_superscript(&self, superscript: bool) {
        self.handle.write("Superscript", superscript.into());
    }

    pub fn color(&self) -> Rgb {
        Rgb::from_ole(self.handle.read_i32("Color"))
    }

    pub fn set_color(&self, color: Rgb) {
        self.handle.write("Color", color.to_ole().into());
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}
