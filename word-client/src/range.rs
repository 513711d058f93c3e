use automation_core::{AutomationResult, ObjectRef, OwnedHandle, Variant};

use crate::enums::{BreakType, BuiltinStyle, CollapseDirection};
use crate::font::Font;
use crate::hyperlink::Hyperlink;
use crate::shading::Shading;
use crate::style::Style;

/// A contiguous span of document text, addressed by character offsets.
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

    pub fn text(&self) -> String {
        self.handle.read_string("Text")
    }

    /// Replaces the span's text; the range grows or shrinks to cover the
    /// replacement.
    pub fn set_text(&self, text: &str) {
        self.handle.write("Text", text.into());
    }

    /// Character offset of the span's start.
    pub fn start(&self) -> i32 {
        self.handle.read_i32("Start")
    }

    /// Character offset one past the span's end.
    pub fn end(&self) -> i32 {
        self.handle.read_i32("End")
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

    pub fn font(&self) -> Option<Font> {
        self.handle
            .read_object("Font")
            .and_then(|object| Font::attach(object).ok())
    }

    pub fn shading(&self) -> Option<Shading> {
        self.handle
            .read_object("Shading")
            .and_then(|object| Shading::attach(object).ok())
    }

    pub fn style(&self) -> Option<Style> {
        self.handle
            .read_object("Style")
            .and_then(|object| Style::attach(object).ok())
    }

    /// Applies a named style.
    pub fn set_style(&self, name: &str) {
        self.handle.write("Style", name.into());
    }

    pub fn set_builtin_style(&self, style: BuiltinStyle) {
        self.handle.write("Style", style.raw().into());
    }

    /// The first hyperlink anchored in this range, if any. A range with
    /// no hyperlink reads as `None`, never a facade around nothing.
    pub fn hyperlink(&self) -> Option<Hyperlink> {
        let links = self.handle.read_object("Hyperlinks")?;
        let links = OwnedHandle::new(links).ok()?;
        automation_core::collection::item(&links, 1)
            .and_then(|object| Hyperlink::attach(object).ok())
    }

    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn insert_after(&self, text: &str) -> AutomationResult<()> {
        self.handle.call("InsertAfter", &[text.into()]).map(|_| ())
    }

    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn insert_before(&self, text: &str) -> AutomationResult<()> {
        self.handle
            .call("InsertBefore", &[text.into()])
            .map(|_| ())
    }

    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn insert_break(&self, break_type: BreakType) -> AutomationResult<()> {
        self.handle
            .call("InsertBreak", &[Variant::I32(break_type.raw())])
            .map(|_| ())
    }

    /// Collapses the span to a zero-length range at its start or end.
    ///
    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn collapse(&self, direction: CollapseDirection) -> AutomationResult<()> {
        self.handle
            .call("Collapse", &[Variant::I32(direction.raw())])
            .map(|_| ())
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

    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn paste(&self) -> AutomationResult<()> {
        self.handle.call("Paste", &[]).map(|_| ())
    }

    /// Aliases the underlying reference for use as a call argument.
    pub(crate) fn share_object(&self) -> Option<ObjectRef> {
        self.handle.share()
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}
