use automation_core::{collection, AutomationResult, ObjectRef, OwnedHandle, Variant};

use crate::enums::SheetVisibility;
use crate::hyperlink::Hyperlinks;
use crate::range::Range;
use crate::shape::Shapes;

/// The worksheets of one workbook.
#[derive(Debug)]
pub struct Worksheets {
    handle: OwnedHandle,
}

impl Worksheets {
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
    pub fn item(&self, index: i32) -> Option<Worksheet> {
        collection::item(&self.handle, index).and_then(|object| Worksheet::attach(object).ok())
    }

    pub fn by_name(&self, name: &str) -> Option<Worksheet> {
        collection::item_by_name(&self.handle, name)
            .and_then(|object| Worksheet::attach(object).ok())
    }

    /// Adds a sheet, optionally renaming it in the same call.
    ///
    /// The rename follows the property write policy: a server-rejected
    /// name (a duplicate, or one Excel considers invalid) is swallowed
    /// and the returned sheet keeps its server-assigned name.
    ///
    /// # Errors
    /// Propagates a native `Add` failure wrapped with context.
    pub fn add(&self, name: Option<&str>) -> AutomationResult<Worksheet> {
        let object = collection::add(&self.handle, &[])?;
        let sheet = Worksheet::attach(object)?;
        if let Some(name) = name {
            sheet.set_name(name);
        }
        Ok(sheet)
    }

    /// Lazy walk; elements that fail to fetch are skipped.
    pub fn iter(&self) -> impl Iterator<Item = Worksheet> + '_ {
        collection::ItemIter::new(&self.handle)
            .filter_map(|object| Worksheet::attach(object).ok())
    }

    /// Deletes the sheets at the given 1-based indices, resolved in
    /// descending order so the batch stays index-stable.
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

/// One worksheet.
#[derive(Debug)]
pub struct Worksheet {
    handle: OwnedHandle,
}

impl Worksheet {
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

    /// 1-based position within the workbook.
    pub fn index(&self) -> i32 {
        self.handle.read_i32("Index")
    }

    pub fn visible(&self) -> SheetVisibility {
        SheetVisibility::from_raw(self.handle.read_i32("Visible"))
    }

    pub fn set_visible(&self, visibility: SheetVisibility) {
        self.handle.write("Visible", visibility.raw().into());
    }

    /// The range named by an A1-style reference; absent if the server
    /// rejects the reference or is gone.
    pub fn range(&self, reference: &str) -> Option<Range> {
        if reference.is_empty() {
            return None;
        }
        self.handle
            .read_object_indexed("Range", &[reference.into()])
            .and_then(|object| Range::attach(object).ok())
    }

    /// Single-cell range by 1-based row/column.
    pub fn cells(&self, row: i32, column: i32) -> Option<Range> {
        if row < 1 || column < 1 {
            return None;
        }
        self.handle
            .read_object_indexed("Cells", &[Variant::I32(row), Variant::I32(column)])
            .and_then(|object| Range::attach(object).ok())
    }

    /// The rectangle of cells in use; absent for a pristine sheet with no
    /// used range, or when the server is gone.
    pub fn used_range(&self) -> Option<Range> {
        self.handle
            .read_object("UsedRange")
            .and_then(|object| Range::attach(object).ok())
    }

    pub fn shapes(&self) -> Option<Shapes> {
        self.handle
            .read_object("Shapes")
            .and_then(|object| Shapes::attach(object).ok())
    }

    pub fn hyperlinks(&self) -> Option<Hyperlinks> {
        self.handle
            .read_object("Hyperlinks")
            .and_then(|object| Hyperlinks::attach(object).ok())
    }

    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn activate(&self) -> AutomationResult<()> {
        self.handle.call("Activate", &[]).map(|_| ())
    }

    /// Copies the sheet, inserting the copy after `target`. The copy is
    /// not returned; the server does not hand it back from this call.
    ///
    /// # Errors
    /// Rejects a released target; propagates the native failure.
    pub fn copy_after(&self, target: &Worksheet) -> AutomationResult<()> {
        let Some(anchor) = target.handle.share() else {
            return Err(automation_core::AutomationError::InvalidArgument(
                "copy target worksheet is released".into(),
            ));
        };
        // first positional slot is the Before anchor, left empty
        self.handle
            .call("Copy", &[Variant::Empty, Variant::Object(anchor)])
            .map(|_| ())
    }

    /// Removes the sheet from its workbook. The facade object keeps its
    /// reference until released; further reads degrade to defaults.
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
