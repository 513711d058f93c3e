//! Index, name and iteration access over native automation collections.
//!
//! Collections follow the automation convention: 1-based indices,
//! `Count`/`Item`/`Add`/`Delete` members. Elements are fetched fresh from
//! the server on every access and wrapped on demand; nothing is cached.

use crate::errors::{AutomationError, AutomationResult};
use crate::handle::OwnedHandle;
use crate::variant::{ObjectRef, Variant};

/// The native collection's `Count`; 0 when the collection handle is
/// released or stale.
pub fn count(handle: &OwnedHandle) -> i32 {
    handle.read_i32("Count")
}

/// Fetches the element at a 1-based index. Out-of-range indices, fetch
/// failures and null elements all read as absent.
pub fn item(handle: &OwnedHandle, index: i32) -> Option<ObjectRef> {
    if index < 1 {
        return None;
    }
    handle.read_object_indexed("Item", &[Variant::I32(index)])
}

/// Fetches the element with the given name; absent on lookup failure.
pub fn item_by_name(handle: &OwnedHandle, name: &str) -> Option<ObjectRef> {
    if name.is_empty() {
        return None;
    }
    handle.read_object_indexed("Item", &[Variant::from(name)])
}

/// Forwards to the native `Add` and hands back the newly created element.
///
/// # Errors
/// Propagates the native failure wrapped as an operation failure; a null
/// result from `Add` is rejected the same way.
pub fn add(handle: &OwnedHandle, args: &[Variant]) -> AutomationResult<ObjectRef> {
    handle.call_object("Add", args)
}

/// Deletes the elements at the given 1-based indices.
///
/// Deletion shifts every element above the deleted index down by one, so
/// the batch is resolved in descending order; only then does each stored
/// index still denote the element it named when the batch was assembled.
///
/// # Errors
/// Returns `InvalidArgument` if an index has no element, a wrapped stale
/// failure when the collection itself is released or gone, and propagates
/// any native `Delete` failure wrapped with context.
pub fn delete_indices(handle: &OwnedHandle, indices: &[i32]) -> AutomationResult<()> {
    let mut order: Vec<i32> = indices.to_vec();
    order.sort_unstable();
    order.dedup();
    for index in order.into_iter().rev() {
        let Some(element) = item(handle, index) else {
            if handle.is_stale() {
                return Err(AutomationError::operation(
                    format!("{}.Item", handle.class_name()),
                    AutomationError::StaleObject(handle.class_name().to_string()),
                ));
            }
            return Err(AutomationError::InvalidArgument(format!(
                "no element at index {index}"
            )));
        };
        let element = OwnedHandle::new(element)?;
        element.call("Delete", &[])?;
    }
    Ok(())
}

/// Lazy forward-only walk over a native collection.
///
/// The element count is sampled once at construction; each `next` fetches
/// the element at the current index from the server. An element whose
/// fetch fails is skipped rather than aborting the walk. A fresh iterator
/// walks the collection again from the start.
pub struct ItemIter<'a> {
    handle: &'a OwnedHandle,
    index: i32,
    count: i32,
}

impl<'a> ItemIter<'a> {
    pub fn new(handle: &'a OwnedHandle) -> Self {
        Self {
            handle,
            index: 1,
            count: count(handle),
        }
    }
}

impl Iterator for ItemIter<'_> {
    type Item = ObjectRef;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index <= self.count {
            let index = self.index;
            self.index += 1;
            match item(self.handle, index) {
                Some(element) => return Some(element),
                None => {
                    tracing::debug!(index, "skipping collection element that failed to fetch");
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.index + 1).unwrap_or(0);
        (0, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeObject;

    fn sheet_collection(names: &[&str]) -> (std::rc::Rc<FakeObject>, OwnedHandle) {
        let fake = FakeObject::collection("Worksheets", "Worksheet");
        for name in names {
            fake.push_item(FakeObject::new("Worksheet").with("Name", *name));
        }
        let handle = OwnedHandle::new(fake.object_ref()).expect("non-null");
        (fake, handle)
    }

    #[test]
    fn count_degrades_to_zero() {
        let (fake, handle) = sheet_collection(&["A", "B"]);
        assert_eq!(count(&handle), 2);
        fake.kill();
        assert_eq!(count(&handle), 0);
    }

    #[test]
    fn item_is_one_based_and_absent_out_of_range() {
        let (_fake, handle) = sheet_collection(&["A", "B"]);
        assert!(item(&handle, 0).is_none());
        assert!(item(&handle, 1).is_some());
        assert!(item(&handle, 3).is_none());
        assert!(item(&handle, -2).is_none());
    }

    #[test]
    fn item_by_name_matches_element_names() {
        let (_fake, handle) = sheet_collection(&["Data", "Summary"]);
        assert!(item_by_name(&handle, "Summary").is_some());
        assert!(item_by_name(&handle, "Missing").is_none());
        assert!(item_by_name(&handle, "").is_none());
    }

    #[test]
    fn batch_delete_resolves_descending() {
        let names: Vec<String> = (1..=10).map(|i| format!("S{i}")).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (fake, handle) = sheet_collection(&name_refs);

        delete_indices(&handle, &[2, 4, 6]).expect("batch delete succeeds");

        // The log records the order the native deletes were issued in.
        assert_eq!(fake.delete_log(), vec![6, 4, 2]);
        let remaining: Vec<String> = ItemIter::new(&handle)
            .filter_map(|element| {
                OwnedHandle::new(element)
                    .ok()
                    .map(|h| h.read_string("Name"))
            })
            .collect();
        assert_eq!(
            remaining,
            vec!["S1", "S3", "S5", "S7", "S8", "S9", "S10"]
        );
    }

    #[test]
    fn batch_delete_ascending_would_remove_wrong_elements() {
        // Control experiment for the ordering requirement: issuing the
        // same batch ascending shifts the survivors into the deleted
        // slots and removes S5 and S8 instead of S4 and S6.
        let names: Vec<String> = (1..=10).map(|i| format!("S{i}")).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (_fake, handle) = sheet_collection(&name_refs);

        for index in [2, 4, 6] {
            let element = item(&handle, index).expect("element present");
            let element = OwnedHandle::new(element).expect("non-null");
            element.call("Delete", &[]).expect("delete succeeds");
        }

        let remaining: Vec<String> = ItemIter::new(&handle)
            .filter_map(|element| {
                OwnedHandle::new(element)
                    .ok()
                    .map(|h| h.read_string("Name"))
            })
            .collect();
        assert_eq!(
            remaining,
            vec!["S1", "S3", "S4", "S6", "S7", "S9", "S10"]
        );
    }

    #[test]
    fn delete_unknown_index_is_invalid_argument() {
        let (_fake, handle) = sheet_collection(&["A"]);
        let err = delete_indices(&handle, &[5]).unwrap_err();
        assert!(matches!(err, AutomationError::InvalidArgument(_)));
    }

    #[test]
    fn delete_on_dead_collection_fails_as_stale() {
        let (fake, handle) = sheet_collection(&["A", "B"]);
        fake.kill();
        let err = delete_indices(&handle, &[1]).unwrap_err();
        assert!(err.is_stale());
        assert!(!matches!(err, AutomationError::InvalidArgument(_)));
    }

    #[test]
    fn delete_on_released_collection_fails_as_stale() {
        let (_fake, mut handle) = sheet_collection(&["A", "B"]);
        handle.release();
        let err = delete_indices(&handle, &[1]).unwrap_err();
        assert!(err.is_stale());
    }

    #[test]
    fn iteration_skips_failing_elements() {
        let (fake, handle) = sheet_collection(&["A", "B", "C", "D", "E"]);
        fake.poison_item(3);

        let yielded: Vec<String> = ItemIter::new(&handle)
            .filter_map(|element| {
                OwnedHandle::new(element)
                    .ok()
                    .map(|h| h.read_string("Name"))
            })
            .collect();
        assert_eq!(yielded, vec!["A", "B", "D", "E"]);
    }

    #[test]
    fn fresh_iteration_restarts_from_the_beginning() {
        let (_fake, handle) = sheet_collection(&["A", "B"]);
        assert_eq!(ItemIter::new(&handle).count(), 2);
        assert_eq!(ItemIter::new(&handle).count(), 2);
    }

    #[test]
    fn add_propagates_native_failure() {
        let (fake, handle) = sheet_collection(&[]);
        fake.fail_method("Add");
        let err = add(&handle, &[]).unwrap_err();
        assert!(matches!(err, AutomationError::Operation { .. }));
    }
}
