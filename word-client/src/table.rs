use automation_core::{collection, AutomationError, AutomationResult, ObjectRef, OwnedHandle, Variant};

use crate::range::Range;

/// The tables of a document or range.
#[derive(Debug)]
pub struct Tables {
    handle: OwnedHandle,
}

impl Tables {
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
    pub fn item(&self, index: i32) -> Option<Table> {
        collection::item(&self.handle, index).and_then(|object| Table::attach(object).ok())
    }

    /// Inserts a table at `anchor`, replacing its text span.
    ///
    /// # Errors
    /// Rejects non-positive dimensions or a released anchor; propagates
    /// native failures.
    pub fn add(&self, anchor: &Range, rows: i32, columns: i32) -> AutomationResult<Table> {
        if rows < 1 || columns < 1 {
            return Err(AutomationError::InvalidArgument(format!(
                "table dimensions must be positive, got {rows}x{columns}"
            )));
        }
        let Some(anchor) = anchor.share_object() else {
            return Err(AutomationError::InvalidArgument(
                "table anchor range is released".into(),
            ));
        };
        let object = collection::add(
            &self.handle,
            &[
                Variant::Object(anchor),
                Variant::I32(rows),
                Variant::I32(columns),
            ],
        )?;
        Table::attach(object)
    }

    /// Lazy walk; elements that fail to fetch are skipped.
    pub fn iter(&self) -> impl Iterator<Item = Table> + '_ {
        collection::ItemIter::new(&self.handle).filter_map(|object| Table::attach(object).ok())
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}

/// One table.
#[derive(Debug)]
pub struct Table {
    handle: OwnedHandle,
}

impl Table {
    /// # Errors
    /// Fails with `NullObject` for a null reference.
    pub fn attach(object: ObjectRef) -> AutomationResult<Self> {
        Ok(Self {
            handle: OwnedHandle::new(object)?,
        })
    }

    pub fn rows_count(&self) -> i32 {
        self.axis_count("Rows")
    }

    pub fn columns_count(&self) -> i32 {
        self.axis_count("Columns")
    }

    // Rows/Columns are transient sub-objects: fetched, counted, released.
    fn axis_count(&self, member: &str) -> i32 {
        let Some(object) = self.handle.read_object(member) else {
            return 0;
        };
        OwnedHandle::new(object).map_or(0, |axis| axis.read_i32("Count"))
    }

    /// The cell at 1-based row/column; absent when out of range or the
    /// server is gone.
    pub fn cell(&self, row: i32, column: i32) -> Option<Cell> {
        if row < 1 || column < 1 {
            return None;
        }
        self.handle
            .read_object_indexed("Cell", &[Variant::I32(row), Variant::I32(column)])
            .and_then(|object| Cell::attach(object).ok())
    }

    /// Resizes columns to fit their contents.
    ///
    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn auto_fit(&self) -> AutomationResult<()> {
        // wdAutoFitContent
        self.handle
            .call("AutoFitBehavior", &[Variant::I32(1)])
            .map(|_| ())
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

/// One table cell.
#[derive(Debug)]
pub struct Cell {
    handle: OwnedHandle,
}

impl Cell {
    /// # Errors
    /// Fails with `NullObject` for a null reference.
    pub fn attach(object: ObjectRef) -> AutomationResult<Self> {
        Ok(Self {
            handle: OwnedHandle::new(object)?,
        })
    }

    /// 1-based row of the cell.
    pub fn row_index(&self) -> i32 {
        self.handle.read_i32("RowIndex")
    }

    /// 1-based column of the cell.
    pub fn column_index(&self) -> i32 {
        self.handle.read_i32("ColumnIndex")
    }

    /// The text span inside the cell.
    pub fn range(&self) -> Option<Range> {
        self.handle
            .read_object("Range")
            .and_then(|object| Range::attach(object).ok())
    }

    pub fn release(&mut self) {
        self.handle.release();
    }
}
