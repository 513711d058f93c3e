use automation_core::{collection, AutomationResult, ObjectRef, OwnedHandle, Variant};

use crate::enums::StyleType;
use crate::font::Font;

/// The styles defined in a document.
#[derive(Debug)]
pub struct Styles {
    handle: OwnedHandle,
}

impl Styles {
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
    pub fn item(&self, index: i32) -> Option<Style> {
        collection::item(&self.handle, index).and_then(|object| Style::attach(object).ok())
    }

    pub fn by_name(&self, name: &str) -> Option<Style> {
        collection::item_by_name(&self.handle, name).and_then(|object| Style::attach(object).ok())
    }

    /// Defines a new style.
    ///
    /// # Errors
    /// Rejects an empty name; propagates native failures.
    pub fn add(&self, name: &str, style_type: StyleType) -> AutomationResult<Style> {
        if name.is_empty() {
            return Err(automation_core::AutomationError::InvalidArgument(
                "style name must not be empty".into(),
            ));
        }
        let object = collection::add(
            &self.handle,
            &[name.into(), Variant::I32(style_type.raw())],
        )?;
        Style::attach(object)
    }

    /// Lazy walk; elements that fail to fetch are skipped.
    pub fn iter(&self) -> impl Iterator<Item = Style> + '_ {
        collection::ItemIter::new(&self.handle).filter_map(|object| Style::attach(object).ok())
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}

/// One style definition.
#[derive(Debug)]
pub struct Style {
    handle: OwnedHandle,
}

impl Style {
    /// # Errors
    /// Fails with `NullObject` for a null reference.
    pub fn attach(object: ObjectRef) -> AutomationResult<Self> {
        Ok(Self {
            handle: OwnedHandle::new(object)?,
        })
    }

    /// Locale-specific display name.
    pub fn name_local(&self) -> String {
        self.handle.read_string("NameLocal")
    }

    pub fn builtin(&self) -> bool {
        self.handle.read_bool("BuiltIn")
    }

    pub fn in_use(&self) -> bool {
        self.handle.read_bool("InUse")
    }

    pub fn font(&self) -> Option<Font> {
        self.handle
            .read_object("Font")
            .and_then(|object| Font::attach(object).ok())
    }

    /// Removes a user-defined style. Built-in styles cannot be deleted;
    /// the server reports a fault.
    ///
    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn delete(&self) -> AutomationResult<()> {
        self.handle.call("Delete", &[]).map(|_| ())
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}
