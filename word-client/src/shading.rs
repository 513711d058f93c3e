use automation_core::{AutomationResult, ObjectRef, OwnedHandle};

use crate::enums::{ShadingTexture, WordColor};

/// Background shading of a range or paragraph.
#[derive(Debug)]
pub struct Shading {
    handle: OwnedHandle,
}

impl Shading {
    /// # Errors
    /// Fails with `NullObject` for a null reference.
    pub fn attach(object: ObjectRef) -> AutomationResult<Self> {
        Ok(Self {
            handle: OwnedHandle::new(object)?,
        })
    }

    pub fn background_pattern_color(&self) -> WordColor {
        WordColor::from_raw(self.handle.read_i32("BackgroundPatternColor"))
    }

    pub fn set_background_pattern_color(&self, color: WordColor) {
        self.handle
            .write("BackgroundPatternColor", color.raw().into());
    }

    pub fn foreground_pattern_color(&self) -> WordColor {
        WordColor::from_raw(self.handle.read_i32("ForegroundPatternColor"))
    }

    pub fn set_foreground_pattern_color(&self, color: WordColor) {
        self.handle
            .write("ForegroundPatternColor", color.raw().into());
    }

    pub fn texture(&self) -> ShadingTexture {
        ShadingTexture::from_raw(self.handle.read_i32("Texture"))
    }

    pub fn set_texture(&self, texture: ShadingTexture) {
        self.handle.write("Texture", texture.raw().into());
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}
