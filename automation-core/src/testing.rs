//! Scriptable in-memory automation server.
//!
//! Stands in for the real COM server in tests: object trees are built by
//! hand, reference counts and release calls are observable, objects can
//! be killed to simulate a closed document, and collection fetches can be
//! poisoned per index. Everything here is test plumbing; nothing is
//! compiled into release builds unless the `test-support` feature is on.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};

use crate::errors::{AutomationError, AutomationResult};
use crate::object::NativeObject;
use crate::session::Session;
use crate::variant::{ObjectRef, Variant};

/// One scripted server object.
///
/// Plain objects serve `get`/`put` from a property map. Collection-mode
/// objects (built with [`FakeObject::collection`]) additionally answer
/// `Count`, `Item` (by 1-based index or by element `Name`), `Add`,
/// `Exists`, and let elements `Delete` themselves out of the collection
/// while logging the 1-based index each delete was issued at.
///
/// Indexed gets other than `Item` (e.g. `Range("A1")`) resolve to the
/// scripted member value, ignoring the arguments.
pub struct FakeObject {
    class: String,
    /// Class given to elements created by `Add`; empty for non-collections.
    element_class: String,
    alive: Cell<bool>,
    refs: Cell<u32>,
    releases: Cell<u32>,
    props: RefCell<HashMap<String, Variant>>,
    items: RefCell<Vec<Rc<FakeObject>>>,
    poisoned: RefCell<HashSet<i32>>,
    failing_methods: RefCell<HashSet<String>>,
    failing_puts: RefCell<HashSet<String>>,
    method_results: RefCell<HashMap<String, Variant>>,
    parent: RefCell<Option<Weak<FakeObject>>>,
    delete_log: RefCell<Vec<i32>>,
    self_weak: Weak<FakeObject>,
}

impl FakeObject {
    pub fn new(class: &str) -> Rc<Self> {
        Self::build(class, "")
    }

    /// A collection whose `Add` creates elements of `element_class`.
    pub fn collection(class: &str, element_class: &str) -> Rc<Self> {
        Self::build(class, element_class)
    }

    fn build(class: &str, element_class: &str) -> Rc<Self> {
        Rc::new_cyclic(|self_weak| Self {
            class: class.to_string(),
            element_class: element_class.to_string(),
            alive: Cell::new(true),
            refs: Cell::new(0),
            releases: Cell::new(0),
            props: RefCell::new(HashMap::new()),
            items: RefCell::new(Vec::new()),
            poisoned: RefCell::new(HashSet::new()),
            failing_methods: RefCell::new(HashSet::new()),
            failing_puts: RefCell::new(HashSet::new()),
            method_results: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
            delete_log: RefCell::new(Vec::new()),
            self_weak: self_weak.clone(),
        })
    }

    // -- scripting --

    pub fn with(self: Rc<Self>, member: &str, value: impl Into<Variant>) -> Rc<Self> {
        self.props.borrow_mut().insert(member.to_string(), value.into());
        self
    }

    pub fn with_object(self: Rc<Self>, member: &str, child: Rc<FakeObject>) -> Rc<Self> {
        let reference = ObjectRef::new(child);
        self.props
            .borrow_mut()
            .insert(member.to_string(), Variant::Object(reference));
        self
    }

    /// Scripts the member as VB's `Nothing`: an explicit null object.
    pub fn with_absent(self: Rc<Self>, member: &str) -> Rc<Self> {
        self.props
            .borrow_mut()
            .insert(member.to_string(), Variant::Object(ObjectRef::null()));
        self
    }

    pub fn push_item(self: &Rc<Self>, child: Rc<FakeObject>) {
        *child.parent.borrow_mut() = Some(self.self_weak.clone());
        self.items.borrow_mut().push(child);
    }

    /// Scripts the result of a method invocation.
    pub fn on_invoke(&self, member: &str, result: Variant) {
        self.method_results
            .borrow_mut()
            .insert(member.to_string(), result);
    }

    /// Makes the named method fail with a simulated server fault.
    pub fn fail_method(&self, member: &str) {
        self.failing_methods.borrow_mut().insert(member.to_string());
    }

    /// Makes writes to the named property fail with a simulated server
    /// fault (e.g. renaming a sheet to a duplicate name).
    pub fn fail_put(&self, member: &str) {
        self.failing_puts.borrow_mut().insert(member.to_string());
    }

    /// Makes `Item` at the given 1-based index fail with a server fault.
    pub fn poison_item(&self, index: i32) {
        self.poisoned.borrow_mut().insert(index);
    }

    /// Simulates the server object going away (document closed, object
    /// deleted out-of-band). Handles stay valid; accesses degrade.
    pub fn kill(&self) {
        self.alive.set(false);
    }

    /// Kills this object and every object reachable through its scripted
    /// properties and collection elements.
    pub fn kill_tree(&self) {
        self.kill();
        for item in self.items.borrow().iter() {
            item.kill_tree();
        }
        for value in self.props.borrow().values() {
            if let Some(child) = as_fake(value) {
                child.kill_tree();
            }
        }
    }

    pub fn revive(&self) {
        self.alive.set(true);
    }

    /// Hands out a counted reference, as an acquisition from the real
    /// server would.
    pub fn object_ref(self: &Rc<Self>) -> ObjectRef {
        self.refs.set(self.refs.get() + 1);
        ObjectRef::new(self.clone())
    }

    // -- observation --

    /// Outstanding external references.
    pub fn ref_count(&self) -> u32 {
        self.refs.get()
    }

    /// Total number of release calls ever made against this object.
    pub fn release_count(&self) -> u32 {
        self.releases.get()
    }

    /// Raw scripted/written value of a property.
    pub fn property(&self, member: &str) -> Option<Variant> {
        self.props.borrow().get(member).cloned()
    }

    /// 1-based indices of native deletes, in the order they were issued.
    pub fn delete_log(&self) -> Vec<i32> {
        self.delete_log.borrow().clone()
    }

    pub fn item_count(&self) -> usize {
        self.items.borrow().len()
    }

    // -- internals --

    fn element_at(&self, index: i32) -> AutomationResult<Rc<FakeObject>> {
        if self.poisoned.borrow().contains(&index) {
            return Err(AutomationError::ServerFault {
                member: "Item".into(),
                description: format!("simulated fetch failure at index {index}"),
            });
        }
        let items = self.items.borrow();
        usize::try_from(index - 1)
            .ok()
            .and_then(|i| items.get(i).cloned())
            .ok_or_else(|| {
                AutomationError::InvalidArgument(format!("index {index} out of range"))
            })
    }

    fn element_named(&self, name: &str) -> AutomationResult<Rc<FakeObject>> {
        self.items
            .borrow()
            .iter()
            .find(|item| {
                item.props.borrow().get("Name") == Some(&Variant::Str(name.to_string()))
            })
            .cloned()
            .ok_or_else(|| AutomationError::InvalidArgument(format!("no element named '{name}'")))
    }

    fn delete_self(&self) {
        if let Some(parent) = self.parent.borrow().as_ref().and_then(Weak::upgrade) {
            let position = parent
                .items
                .borrow()
                .iter()
                .position(|item| std::ptr::eq(Rc::as_ptr(item), self as *const FakeObject));
            if let Some(position) = position {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                parent.delete_log.borrow_mut().push(position as i32 + 1);
                parent.items.borrow_mut().remove(position);
            }
        }
        self.alive.set(false);
    }
}

/// Re-counts an object-valued result before handing it across the
/// boundary, mirroring how COM pre-addrefs returned interface pointers.
fn counted(value: Variant) -> Variant {
    if let Variant::Object(ref reference) = value {
        if let Some(object) = reference.as_object() {
            if let Some(fake) = object.as_any().downcast_ref::<FakeObject>() {
                fake.refs.set(fake.refs.get() + 1);
            }
        }
    }
    value
}

fn as_fake(value: &Variant) -> Option<Rc<FakeObject>> {
    let Variant::Object(reference) = value else {
        return None;
    };
    let object = reference.as_object()?;
    let fake = object.as_any().downcast_ref::<FakeObject>()?;
    fake.self_weak.upgrade()
}

impl NativeObject for FakeObject {
    fn class_name(&self) -> &str {
        &self.class
    }

    fn get(&self, member: &str, args: &[Variant]) -> AutomationResult<Variant> {
        if !self.alive.get() {
            return Err(AutomationError::StaleObject(self.class.clone()));
        }
        let is_collection = !self.element_class.is_empty();
        if is_collection && member == "Count" {
            return Ok(Variant::I32(
                i32::try_from(self.items.borrow().len()).unwrap_or(i32::MAX),
            ));
        }
        if is_collection && member == "Item" {
            let key = args.first().ok_or_else(|| {
                AutomationError::InvalidArgument("Item requires an index or name".into())
            })?;
            let element = match key {
                Variant::Str(name) => self.element_named(name)?,
                other => {
                    let index = other.as_i32().ok_or_else(|| {
                        AutomationError::InvalidArgument(format!("bad Item key: {other}"))
                    })?;
                    self.element_at(index)?
                }
            };
            return Ok(counted(Variant::Object(ObjectRef::new(element))));
        }
        match self.props.borrow().get(member) {
            Some(value) => Ok(counted(value.clone())),
            None => Err(AutomationError::MemberNotFound {
                class: self.class.clone(),
                member: member.to_string(),
            }),
        }
    }

    fn put(&self, member: &str, value: Variant) -> AutomationResult<()> {
        if !self.alive.get() {
            return Err(AutomationError::StaleObject(self.class.clone()));
        }
        if self.failing_puts.borrow().contains(member) {
            return Err(AutomationError::ServerFault {
                member: member.to_string(),
                description: "simulated property rejection".into(),
            });
        }
        self.props.borrow_mut().insert(member.to_string(), value);
        Ok(())
    }

    fn invoke(&self, member: &str, args: &[Variant]) -> AutomationResult<Variant> {
        if !self.alive.get() {
            return Err(AutomationError::StaleObject(self.class.clone()));
        }
        if self.failing_methods.borrow().contains(member) {
            return Err(AutomationError::ServerFault {
                member: member.to_string(),
                description: "simulated method failure".into(),
            });
        }
        if let Some(result) = self.method_results.borrow().get(member) {
            return Ok(counted(result.clone()));
        }
        match member {
            "Delete" => {
                self.delete_self();
                Ok(Variant::Empty)
            }
            "Add" if !self.element_class.is_empty() => {
                let element = FakeObject::new(&self.element_class);
                if let Some(Variant::Str(name)) = args.first() {
                    element
                        .props
                        .borrow_mut()
                        .insert("Name".into(), Variant::Str(name.clone()));
                }
                let parent = self
                    .self_weak
                    .upgrade()
                    .ok_or_else(|| AutomationError::Internal("collection dropped".into()))?;
                parent.push_item(element.clone());
                Ok(counted(Variant::Object(ObjectRef::new(element))))
            }
            "Exists" => {
                let name = args.first().and_then(|arg| arg.as_str()).ok_or_else(|| {
                    AutomationError::InvalidArgument("Exists requires a name".into())
                })?;
                Ok(Variant::Bool(self.element_named(name).is_ok()))
            }
            // Unscripted methods succeed with no result, so facades can
            // exercise Save/Quit/Select without per-test ceremony.
            _ => Ok(Variant::Empty),
        }
    }

    fn release(&self) -> u32 {
        // Releasing a dead object is legal at the native layer; the
        // owned-handle invariant only bounds releases per owner.
        let remaining = self.refs.get().saturating_sub(1);
        self.refs.set(remaining);
        self.releases.set(self.releases.get() + 1);
        remaining
    }

    fn is_alive(&self) -> bool {
        self.alive.get()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// In-memory [`Session`]: prog ids map to scripted root objects.
#[derive(Default)]
pub struct FakeSession {
    roots: RefCell<HashMap<String, Rc<FakeObject>>>,
}

impl FakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, prog_id: &str, object: Rc<FakeObject>) {
        self.roots.borrow_mut().insert(prog_id.to_string(), object);
    }
}

impl Session for FakeSession {
    fn create_instance(&self, prog_id: &str) -> AutomationResult<ObjectRef> {
        self.roots
            .borrow()
            .get(prog_id)
            .map(FakeObject::object_ref)
            .ok_or_else(|| {
                AutomationError::InvalidArgument(format!(
                    "no fake registered for prog id '{prog_id}'"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquisition_counts_and_release_decrements() {
        let fake = FakeObject::new("Workbook");
        let reference = fake.object_ref();
        assert_eq!(fake.ref_count(), 1);
        let object = reference.as_object().expect("non-null").clone();
        assert_eq!(object.release(), 0);
        assert_eq!(fake.release_count(), 1);
    }

    #[test]
    fn property_get_counts_object_results() {
        let font = FakeObject::new("Font");
        let range = FakeObject::new("Range").with_object("Font", font.clone());
        assert_eq!(font.ref_count(), 0);
        let value = range.get("Font", &[]).expect("scripted");
        assert_eq!(font.ref_count(), 1);
        assert!(value.as_object().is_some());
    }

    #[test]
    fn absent_member_reads_as_null_object() {
        let range = FakeObject::new("Range").with_absent("Hyperlink");
        let value = range.get("Hyperlink", &[]).expect("scripted Nothing");
        assert_eq!(value.as_object(), None);
    }

    #[test]
    fn item_by_name_and_exists() {
        let marks = FakeObject::collection("Bookmarks", "Bookmark");
        marks.push_item(FakeObject::new("Bookmark").with("Name", "intro"));
        assert!(marks.element_named("intro").is_ok());
        let exists = marks
            .invoke("Exists", &[Variant::from("intro")])
            .expect("invoke");
        assert_eq!(exists, Variant::Bool(true));
        let missing = marks
            .invoke("Exists", &[Variant::from("outro")])
            .expect("invoke");
        assert_eq!(missing, Variant::Bool(false));
    }

    #[test]
    fn kill_tree_reaches_nested_objects() {
        let font = FakeObject::new("Font");
        let sheet = FakeObject::new("Worksheet").with_object("Font", font.clone());
        let sheets = FakeObject::collection("Worksheets", "Worksheet");
        sheets.push_item(sheet.clone());
        let app = FakeObject::new("Application").with_object("Worksheets", sheets);

        app.kill_tree();
        assert!(!app.is_alive());
        assert!(!sheet.is_alive());
        assert!(!font.is_alive());
    }

    #[test]
    fn unscripted_method_is_a_quiet_success() {
        let workbook = FakeObject::new("Workbook");
        assert_eq!(workbook.invoke("Save", &[]).expect("no-op"), Variant::Empty);
    }
}
