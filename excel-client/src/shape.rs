use automation_core::{collection, AutomationResult, ObjectRef, OwnedHandle, Variant};

use crate::enums::ShapeType;

/// The drawing shapes of one worksheet.
#[derive(Debug)]
pub struct Shapes {
    handle: OwnedHandle,
}

impl Shapes {
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
    pub fn item(&self, index: i32) -> Option<Shape> {
        collection::item(&self.handle, index).and_then(|object| Shape::attach(object).ok())
    }

    pub fn by_name(&self, name: &str) -> Option<Shape> {
        collection::item_by_name(&self.handle, name).and_then(|object| Shape::attach(object).ok())
    }

    /// Adds a textbox at the given position (points).
    ///
    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn add_textbox(
        &self,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> AutomationResult<Shape> {
        let object = self.handle.call_object(
            "AddTextbox",
            &[
                Variant::I32(1), // msoTextOrientationHorizontal
                Variant::F64(left),
                Variant::F64(top),
                Variant::F64(width),
                Variant::F64(height),
            ],
        )?;
        Shape::attach(object)
    }

    /// Lazy walk; elements that fail to fetch are skipped.
    pub fn iter(&self) -> impl Iterator<Item = Shape> + '_ {
        collection::ItemIter::new(&self.handle).filter_map(|object| Shape::attach(object).ok())
    }

    /// Deletes shapes at the given 1-based indices, descending.
    ///
    /// # Errors
    /// Propagates native delete failures and unknown indices.
    pub fn delete_indices(&self, indices: &[i32]) -> AutomationResult<()> {
        collection::delete_indices(&self.handle, indices)
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}

/// One drawing shape.
#[derive(Debug)]
pub struct Shape {
    handle: OwnedHandle,
}

impl Shape {
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

    pub fn left(&self) -> f64 {
        self.handle.read_f64("Left")
    }

    pub fn set_left(&self, points: f64) {
        self.handle.write("Left", points.into());
    }

    pub fn top(&self) -> f64 {
        self.handle.read_f64("Top")
    }

    pub fn set_top(&self, points: f64) {
        self.handle.write("Top", points.into());
    }

    pub fn width(&self) -> f64 {
        self.handle.read_f64("Width")
    }

    pub fn set_width(&self, points: f64) {
        self.handle.write("Width", points.into());
    }

    pub fn height(&self) -> f64 {
        self.handle.read_f64("Height")
    }

    pub fn set_height(&self, points: f64) {
        self.handle.write("Height", points.into());
    }

    pub fn rotation(&self) -> f64 {
        self.handle.read_f64("Rotation")
    }

    pub fn set_rotation(&self, degrees: f64) {
        self.handle.write("Rotation", degrees.into());
    }

    pub fn shape_type(&self) -> ShapeType {
        ShapeType::from_raw(self.handle.read_i32("Type"))
    }

    pub fn visible(&self) -> bool {
        self.handle.read_bool("Visible")
    }

    pub fn set_visible(&self, visible: bool) {
        self.handle.write("Visible", visible.into());
    }

    /// Clones the shape on its sheet and returns the new copy.
    ///
    /// # Errors
    /// Propagates the native failure; a null result is rejected.
    pub fn duplicate(&self) -> AutomationResult<Shape> {
        let object = self.handle.call_object("Duplicate", &[])?;
        Shape::attach(object)
    }

    /// Text carried by the shape's text frame; empty for shapes without
    /// one or once the server is gone.
    pub fn text(&self) -> String {
        self.characters()
            .map_or_else(String::new, |chars| chars.read_string("Text"))
    }

    pub fn set_text(&self, text: &str) {
        if let Some(chars) = self.characters() {
            chars.write("Text", text.into());
        }
    }

    // TextFrame and Characters are transient hops on the way to Text.
    fn characters(&self) -> Option<OwnedHandle> {
        let frame = OwnedHandle::new(self.handle.read_object("TextFrame")?).ok()?;
        OwnedHandle::new(frame.read_object("Characters")?).ok()
    }

    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn delete(&self) -> AutomationResult<()> {
        self.handle.call("Delete", &[]).map(|_| ())
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}
