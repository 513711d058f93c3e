use automation_core::{AutomationResult, ObjectRef, OwnedHandle};

use crate::enums::{Underline, WordColor};

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

    pub fn underline(&self) -> Underline {
        Underline::from_raw(self.handle.read_i32("Underline"))
    }

    pub fn set_underline(&self, style: Underline) {
        self.handle.write("Underline", style.raw().into());
    }

    pub fn hidden(&self) -> bool {
        self.handle.read_bool("Hidden")
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.handle.write("Hidden", hidden.into());
    }

    pub fn all_caps(&self) -> bool {
        self.handle.read_bool("AllCaps")
    }

    pub fn set_all_caps(&self, all_caps: bool) {
        self.handle.write("AllCaps", all_caps.into());
    }

    /// Reads as [`WordColor::Automatic`] when the color tracks the theme.
    pub fn color(&self) -> WordColor {
        WordColor::from_raw(self.handle.read_i32("Color"))
    }

    pub fn set_color(&self, color: WordColor) {
        self.handle.write("Color", color.raw().into());
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}
