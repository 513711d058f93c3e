use automation_core::{collection, AutomationResult, ObjectRef, OwnedHandle, Variant};

use crate::bookmark::Bookmarks;
use crate::enums::SaveOptions;
use crate::hyperlink::Hyperlinks;
use crate::paragraph::Paragraphs;
use crate::range::Range;
use crate::style::Styles;
use crate::table::Tables;

/// The open documents of one application instance.
#[derive(Debug)]
pub struct Documents {
    handle: OwnedHandle,
}

impl Documents {
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
    pub fn item(&self, index: i32) -> Option<Document> {
        collection::item(&self.handle, index).and_then(|object| Document::attach(object).ok())
    }

    pub fn by_name(&self, name: &str) -> Option<Document> {
        collection::item_by_name(&self.handle, name)
            .and_then(|object| Document::attach(object).ok())
    }

    /// Creates a new empty document.
    ///
    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn add(&self) -> AutomationResult<Document> {
        let object = collection::add(&self.handle, &[])?;
        Document::attach(object)
    }

    /// Opens a document from disk.
    ///
    /// # Errors
    /// Rejects an empty path; propagates native open failures.
    pub fn open(&self, path: &str) -> AutomationResult<Document> {
        if path.is_empty() {
            return Err(automation_core::AutomationError::InvalidArgument(
                "document path must not be empty".into(),
            ));
        }
        let object = self.handle.call_object("Open", &[path.into()])?;
        Document::attach(object)
    }

    /// Lazy walk over the open documents; elements that fail to fetch are
    /// skipped.
    pub fn iter(&self) -> impl Iterator<Item = Document> + '_ {
        collection::ItemIter::new(&self.handle)
            .filter_map(|object| Document::attach(object).ok())
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}

/// One open document.
#[derive(Debug)]
pub struct Document {
    handle: OwnedHandle,
}

impl Document {
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

    /// Full path on disk; empty for a document that was never saved.
    pub fn full_name(&self) -> String {
        self.handle.read_string("FullName")
    }

    pub fn saved(&self) -> bool {
        self.handle.read_bool("Saved")
    }

    /// Marks the document clean/dirty without writing anything.
    pub fn set_saved(&self, saved: bool) {
        self.handle.write("Saved", saved.into());
    }

    /// The whole-document range.
    pub fn content(&self) -> Option<Range> {
        self.handle
            .read_object("Content")
            .and_then(|object| Range::attach(object).ok())
    }

    pub fn paragraphs(&self) -> Option<Paragraphs> {
        self.handle
            .read_object("Paragraphs")
            .and_then(|object| Paragraphs::attach(object).ok())
    }

    pub fn tables(&self) -> Option<Tables> {
        self.handle
            .read_object("Tables")
            .and_then(|object| Tables::attach(object).ok())
    }

    pub fn styles(&self) -> Option<Styles> {
        self.handle
            .read_object("Styles")
            .and_then(|object| Styles::attach(object).ok())
    }

    pub fn bookmarks(&self) -> Option<Bookmarks> {
        self.handle
            .read_object("Bookmarks")
            .and_then(|object| Bookmarks::attach(object).ok())
    }

    pub fn hyperlinks(&self) -> Option<Hyperlinks> {
        self.handle
            .read_object("Hyperlinks")
            .and_then(|object| Hyperlinks::attach(object).ok())
    }

    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn save(&self) -> AutomationResult<()> {
        self.handle.call("Save", &[]).map(|_| ())
    }

    /// # Errors
    /// Rejects an empty path; propagates native save failures.
    pub fn save_as(&self, path: &str) -> AutomationResult<()> {
        if path.is_empty() {
            return Err(automation_core::AutomationError::InvalidArgument(
                "save path must not be empty".into(),
            ));
        }
        self.handle.call("SaveAs", &[path.into()]).map(|_| ())
    }

    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn close(&self, save: SaveOptions) -> AutomationResult<()> {
        self.handle
            .call("Close", &[Variant::I32(save.raw())])
            .map(|_| ())
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}
