use automation_core::{collection, AutomationError, AutomationResult, ObjectRef, OwnedHandle, Variant};

use crate::range::Range;

/// The named bookmarks of a document.
#[derive(Debug)]
pub struct Bookmarks {
    handle: OwnedHandle,
}

impl Bookmarks {
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
    pub fn item(&self, index: i32) -> Option<Bookmark> {
        collection::item(&self.handle, index).and_then(|object| Bookmark::attach(object).ok())
    }

    pub fn by_name(&self, name: &str) -> Option<Bookmark> {
        collection::item_by_name(&self.handle, name)
            .and_then(|object| Bookmark::attach(object).ok())
    }

    /// `false` when the name is unknown or the server is gone.
    pub fn exists(&self, name: &str) -> bool {
        self.handle
            .call("Exists", &[name.into()])
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }

    /// Defines (or redefines) a bookmark over `range`.
    ///
    /// # Errors
    /// Rejects an empty name or a released range; propagates native
    /// failures.
    pub fn add(&self, name: &str, range: &Range) -> AutomationResult<Bookmark> {
        if name.is_empty() {
            return Err(AutomationError::InvalidArgument(
                "bookmark name must not be empty".into(),
            ));
        }
        let Some(anchor) = range.share_object() else {
            return Err(AutomationError::InvalidArgument(
                "bookmark range is released".into(),
            ));
        };
        let object =
            collection::add(&self.handle, &[name.into(), Variant::Object(anchor)])?;
        Bookmark::attach(object)
    }

    /// Lazy walk; elements that fail to fetch are skipped.
    pub fn iter(&self) -> impl Iterator<Item = Bookmark> + '_ {
        collection::ItemIter::new(&self.handle)
            .filter_map(|object| Bookmark::attach(object).ok())
    }

    /// Deletes bookmarks at the given 1-based indices, descending.
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

/// One bookmark.
#[derive(Debug)]
pub struct Bookmark {
    handle: OwnedHandle,
}

impl Bookmark {
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

    /// The text span the bookmark covers.
    pub fn range(&self) -> Option<Range> {
        self.handle
            .read_object("Range")
            .and_then(|object| Range::attach(object).ok())
    }

    /// Removes the bookmark; the text it covered is untouched.
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
