use automation_core::{collection, AutomationResult, ObjectRef, OwnedHandle};

use crate::enums::ParagraphAlignment;
use crate::range::Range;
use crate::style::Style;

/// The paragraphs of a document or range.
#[derive(Debug)]
pub struct Paragraphs {
    handle: OwnedHandle,
}

impl Paragraphs {
    /// # Errors
    /// Fails with `NullObject` for a null reference.
    pub fn attach(object: ObjectRef) -> AutomationResult<Self> {
        Ok(Self {
            handle: OwnedHandle::new(object)?,
        })
    }

    pub fn count(&self) -> i32 {
        collection::count(&self.handle)
    }

    /// 1-based lookup; absent when out of range or the server is gone.
    pub fn item(&self, index: i32) -> Option<Paragraph> {
        collection::item(&self.handle, index).and_then(|object| Paragraph::attach(object).ok())
    }

    /// Lazy walk; elements that fail to fetch are skipped.
    pub fn iter(&self) -> impl Iterator<Item = Paragraph> + '_ {
        collection::ItemIter::new(&self.handle)
            .filter_map(|object| Paragraph::attach(object).ok())
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}

/// One paragraph.
#[derive(Debug)]
pub struct Paragraph {
    handle: OwnedHandle,
}

impl Paragraph {
    /// # Errors
    /// Fails with `NullObject` for a null reference.
    pub fn attach(object: ObjectRef) -> AutomationResult<Self> {
        Ok(Self {
            handle: OwnedHandle::new(object)?,
        })
    }

    pub fn alignment(&self) -> ParagraphAlignment {
        ParagraphAlignment::from_raw(self.handle.read_i32("Alignment"))
    }

    pub fn set_alignment(&self, alignment: ParagraphAlignment) {
        self.handle.write("Alignment", alignment.raw().into());
    }

    /// Line spacing in points.
    pub fn line_spacing(&self) -> f64 {
        self.handle.read_f64("LineSpacing")
    }

    pub fn set_line_spacing(&self, points: f64) {
        self.handle.write("LineSpacing", points.into());
    }

    pub fn space_before(&self) -> f64 {
        self.handle.read_f64("SpaceBefore")
    }

    pub fn set_space_before(&self, points: f64) {
        self.handle.write("SpaceBefore", points.into());
    }

    pub fn space_after(&self) -> f64 {
        self.handle.read_f64("SpaceAfter")
    }

    pub fn set_space_after(&self, points: f64) {
        self.handle.write("SpaceAfter", points.into());
    }

    /// The text span the paragraph covers.
    pub fn range(&self) -> Option<Range> {
        self.handle
            .read_object("Range")
            .and_then(|object| Range::attach(object).ok())
    }

    pub fn style(&self) -> Option<Style> {
        self.handle
            .read_object("Style")
            .and_then(|object| Style::attach(object).ok())
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}
