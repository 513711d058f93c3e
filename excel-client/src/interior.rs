use automation_core::convert::Rgb;
use automation_core::{AutomationResult, ObjectRef, OwnedHandle};

use crate::enums::InteriorPattern;

/// Cell fill of a range.
#[derive(Debug)]
pub struct Interior {
    handle: OwnedHandle,
}

impl Interior {
    /// # Errors
    /// Fails with `NullObject` for a null reference.
    pub fn attach(object: ObjectRef) -> AutomationResult<Self> {
        Ok(Self {
            handle: OwnedHandle::new(object)?,
        })
    }

    pub fn color(&self) -> Rgb {
        Rgb::from_ole(self.handle.read_i32("Color"))
    }

    pub fn set_color(&self, color: Rgb) {
        self.handle.write("Color", color.to_ole().into());
    }

    pub fn pattern(&self) -> InteriorPattern {
        InteriorPattern::from_raw(self.handle.read_i32("Pattern"))
    }

    pub fn set_pattern(&self, pattern: InteriorPattern) {
        self.handle.write("Pattern", pattern.raw().into());
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}
