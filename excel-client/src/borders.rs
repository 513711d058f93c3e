use automation_core::convert::Rgb;
use automation_core::{AutomationResult, ObjectRef, OwnedHandle, Variant};

use crate::enums::{BorderIndex, BorderWeight, LineStyle};

/// The borders collection of a range, keyed by [`BorderIndex`] rather
/// than plain integers.
#[derive(Debug)]
pub struct Borders {
    handle: OwnedHandle,
}

impl Borders {
    /// # Errors
    /// Fails with `NullObject` for a null reference.
    pub fn attach(object: ObjectRef) -> AutomationResult<Self> {
        Ok(Self {
            handle: OwnedHandle::new(object)?,
        })
    }

    pub fn count(&self) -> i32 {
        automation_core::collection::count(&self.handle)
    }

    /// The border on one edge; absent when the server is gone.
    pub fn item(&self, index: BorderIndex) -> Option<Border> {
        self.handle
            .read_object_indexed("Item", &[Variant::I32(index.raw())])
            .and_then(|object| Border::attach(object).ok())
    }

    /// Applies one line style to every border in the collection.
    pub fn set_line_style(&self, style: LineStyle) {
        self.handle.write("LineStyle", style.raw().into());
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}

/// One edge (or diagonal) of a range.
#[derive(Debug)]
pub struct Border {
    handle: OwnedHandle,
}

impl Border {
    /// # Errors
    /// Fails with `NullObject` for a null reference.
    pub fn attach(object: ObjectRef) -> AutomationResult<Self> {
        Ok(Self {
            handle: OwnedHandle::new(object)?,
        })
    }

    pub fn line_style(&self) -> LineStyle {
        LineStyle::from_raw(self.handle.read_i32("LineStyle"))
    }

    pub fn set_line_style(&self, style: LineStyle) {
        self.handle.write("LineStyle", style.raw().into());
    }

    pub fn weight(&self) -> BorderWeight {
        BorderWeight::from_raw(self.handle.read_i32("Weight"))
    }

    pub fn set_weight(&self, weight: BorderWeight) {
        self.handle.write("Weight", weight.raw().into());
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
