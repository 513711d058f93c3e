use automation_core::{collection, AutomationResult, ObjectRef, OwnedHandle, Variant};

use crate::worksheet::Worksheets;

/// The open workbooks of one application instance.
#[derive(Debug)]
pub struct Workbooks {
    handle: OwnedHandle,
}

impl Workbooks {
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
    pub fn item(&self, index: i32) -> Option<Workbook> {
        collection::item(&self.handle, index).and_then(|object| Workbook::attach(object).ok())
    }

    pub fn by_name(&self, name: &str) -> Option<Workbook> {
        collection::item_by_name(&self.handle, name)
            .and_then(|object| Workbook::attach(object).ok())
    }

    /// Creates a new empty workbook.
    ///
    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn add(&self) -> AutomationResult<Workbook> {
        let object = collection::add(&self.handle, &[])?;
        Workbook::attach(object)
    }

    /// Opens a workbook from disk.
    ///
    /// # Errors
    /// Rejects an empty path; propagates native open failures.
    pub fn open(&self, path: &str) -> AutomationResult<Workbook> {
        if path.is_empty() {
            return Err(automation_core::AutomationError::InvalidArgument(
                "workbook path must not be empty".into(),
            ));
        }
        let object = self.handle.call_object("Open", &[path.into()])?;
        Workbook::attach(object)
    }

    /// Lazy walk over the open workbooks; elements that fail to fetch are
    /// skipped.
    pub fn iter(&self) -> impl Iterator<Item = Workbook> + '_ {
        collection::ItemIter::new(&self.handle)
            .filter_map(|object| Workbook::attach(object).ok())
    }

    /// Closes every open workbook without saving.
    ///
    /// # Errors
    /// Propagates the first native close failure.
    pub fn close_all(&self) -> AutomationResult<()> {
        self.handle.call("Close", &[]).map(|_| ())
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}

/// One open workbook.
#[derive(Debug)]
pub struct Workbook {
    handle: OwnedHandle,
}

impl Workbook {
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

    /// Full path on disk; empty for a workbook that was never saved.
    pub fn full_name(&self) -> String {
        self.handle.read_string("FullName")
    }

    pub fn saved(&self) -> bool {
        self.handle.read_bool("Saved")
    }

    /// Marks the workbook clean/dirty without writing anything.
    pub fn set_saved(&self, saved: bool) {
        self.handle.write("Saved", saved.into());
    }

    pub fn worksheets(&self) -> Option<Worksheets> {
        self.handle
            .read_object("Worksheets")
            .and_then(|object| Worksheets::attach(object).ok())
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
    pub fn close(&self, save_changes: bool) -> AutomationResult<()> {
        self.handle
            .call("Close", &[Variant::Bool(save_changes)])
            .map(|_| ())
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}
