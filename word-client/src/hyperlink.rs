use automation_core::{
    collection, AutomationError, AutomationResult, ObjectRef, OwnedHandle, Variant,
};

use crate::range::Range;

/// The hyperlinks of a document or range.
#[derive(Debug)]
pub struct Hyperlinks {
    handle: OwnedHandle,
}

impl Hyperlinks {
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
    pub fn item(&self, index: i32) -> Option<Hyperlink> {
        collection::item(&self.handle, index).and_then(|object| Hyperlink::attach(object).ok())
    }

    /// Creates a hyperlink anchored at `anchor` pointing at `address`,
    /// displayed as `text_to_display`.
    ///
    /// # Errors
    /// Rejects an empty address or a released anchor; propagates native
    /// failures.
    pub fn add(
        &self,
        anchor: &Range,
        address: &str,
        text_to_display: &str,
    ) -> AutomationResult<Hyperlink> {
        if address.is_empty() {
            return Err(AutomationError::InvalidArgument(
                "hyperlink address must not be empty".into(),
            ));
        }
        let Some(anchor) = anchor.share_object() else {
            return Err(AutomationError::InvalidArgument(
                "hyperlink anchor range is released".into(),
            ));
        };
        // SubAddress and ScreenTip slots are left empty
        let object = collection::add(
            &self.handle,
            &[
                Variant::Object(anchor),
                address.into(),
                Variant::Empty,
                Variant::Empty,
                text_to_display.into(),
            ],
        )?;
        Hyperlink::attach(object)
    }

    /// Lazy walk; elements that fail to fetch are skipped.
    pub fn iter(&self) -> impl Iterator<Item = Hyperlink> + '_ {
        collection::ItemIter::new(&self.handle)
            .filter_map(|object| Hyperlink::attach(object).ok())
    }

    /// Deletes hyperlinks at the given 1-based indices, descending.
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

/// One hyperlink.
#[derive(Debug)]
pub struct Hyperlink {
    handle: OwnedHandle,
}

impl Hyperlink {
    /// # Errors
    /// Fails with `NullObject` for a null reference.
    pub fn attach(object: ObjectRef) -> AutomationResult<Self> {
        Ok(Self {
            handle: OwnedHandle::new(object)?,
        })
    }

    pub fn address(&self) -> String {
        self.handle.read_string("Address")
    }

    pub fn set_address(&self, address: &str) {
        self.handle.write("Address", address.into());
    }

    pub fn text_to_display(&self) -> String {
        self.handle.read_string("TextToDisplay")
    }

    pub fn set_text_to_display(&self, text: &str) {
        self.handle.write("TextToDisplay", text.into());
    }

    pub fn screen_tip(&self) -> String {
        self.handle.read_string("ScreenTip")
    }

    pub fn set_screen_tip(&self, tip: &str) {
        self.handle.write("ScreenTip", tip.into());
    }

    /// Opens the target in the registered handler.
    ///
    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn follow(&self) -> AutomationResult<()> {
        self.handle.call("Follow", &[]).map(|_| ())
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
