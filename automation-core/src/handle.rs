use std::rc::Rc;

use crate::errors::{AutomationError, AutomationResult};
use crate::object::NativeObject;
use crate::variant::{ObjectRef, Variant};

/// Exclusive owner of one native automation object reference.
///
/// Every facade type composes one `OwnedHandle`. The handle enforces the
/// lifetime discipline of the whole facade layer:
///
/// - construction rejects a null reference ([`AutomationError::NullObject`]);
/// - the external reference count is decremented **exactly once**, on the
///   first of explicit [`release`](Self::release) or `Drop`;
/// - repeated release is a no-op, never a double decrement.
///
/// Access policy after the object is released or has gone stale:
/// scalar reads return the type's default, object reads return `None`,
/// property writes are silently ignored, and [`call`](Self::call) returns
/// a wrapped operation failure. Callers therefore never see a low-level
/// interop fault from a read path.
pub struct OwnedHandle {
    inner: Option<Rc<dyn NativeObject>>,
}

impl std::fmt::Debug for OwnedHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OwnedHandle({})", self.class_name())
    }
}

impl OwnedHandle {
    /// Takes ownership of a non-null object reference.
    ///
    /// # Errors
    /// Returns [`AutomationError::NullObject`] for a null reference; a
    /// facade type can therefore never exist around nothing.
    pub fn new(object: ObjectRef) -> AutomationResult<Self> {
        match object.into_inner() {
            Some(inner) => Ok(Self { inner: Some(inner) }),
            None => Err(AutomationError::NullObject),
        }
    }

    /// Releases the owned reference. Idempotent: the first call (or
    /// `Drop`, whichever comes first) decrements the external count; any
    /// further call does nothing.
    pub fn release(&mut self) {
        if let Some(object) = self.inner.take() {
            let remaining = object.release();
            tracing::debug!(
                class = object.class_name(),
                remaining,
                "released automation object"
            );
        }
    }

    pub fn is_released(&self) -> bool {
        self.inner.is_none()
    }

    /// `true` once the handle is released or the server object has died.
    /// Mutating paths use this to report staleness instead of treating a
    /// degraded read as caller error.
    pub fn is_stale(&self) -> bool {
        self.inner.as_ref().map_or(true, |object| !object.is_alive())
    }

    /// Class name of the owned object, for diagnostics.
    pub fn class_name(&self) -> &str {
        self.inner
            .as_ref()
            .map_or("(released)", |object| object.class_name())
    }

    /// Aliases the owned object for use as a call argument.
    ///
    /// The alias carries no ownership: the external reference count is
    /// untouched and release duty stays with this handle. Returns `None`
    /// once the handle is released.
    pub fn share(&self) -> Option<ObjectRef> {
        self.inner.as_ref().map(|object| ObjectRef::new(object.clone()))
    }

    fn object(&self) -> Option<&Rc<dyn NativeObject>> {
        self.inner.as_ref()
    }

    // -- degrade-on-read accessors --

    /// Raw property read; `Variant::Empty` when released, stale or failing.
    pub fn read(&self, member: &str) -> Variant {
        self.read_indexed(member, &[])
    }

    /// Indexed property read with the same degrade policy.
    pub fn read_indexed(&self, member: &str, args: &[Variant]) -> Variant {
        let Some(object) = self.object() else {
            return Variant::Empty;
        };
        match object.get(member, args) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(member, error = %err, "property read degraded to default");
                Variant::Empty
            }
        }
    }

    pub fn read_bool(&self, member: &str) -> bool {
        self.read(member).as_bool().unwrap_or_default()
    }

    pub fn read_i32(&self, member: &str) -> i32 {
        self.read(member).as_i32().unwrap_or_default()
    }

    pub fn read_f64(&self, member: &str) -> f64 {
        self.read(member).as_f64().unwrap_or_default()
    }

    pub fn read_string(&self, member: &str) -> String {
        match self.read(member) {
            Variant::Str(s) => s,
            _ => String::new(),
        }
    }

    /// OLE date property as a UTC datetime; `None` when the member does
    /// not hold a date or the handle has degraded.
    pub fn read_date(&self, member: &str) -> Option<chrono::NaiveDateTime> {
        match self.read(member) {
            Variant::Date(days) => crate::convert::ole_date_to_datetime(days),
            _ => None,
        }
    }

    /// Sub-object read: `Some` only when the server reports a live,
    /// non-null object. Nothing/Empty/Null and every failure read as
    /// absent.
    pub fn read_object(&self, member: &str) -> Option<ObjectRef> {
        self.read(member).as_object()
    }

    /// Indexed sub-object read (`Item(3)`, `Range("A1")`, ...).
    pub fn read_object_indexed(&self, member: &str, args: &[Variant]) -> Option<ObjectRef> {
        self.read_indexed(member, args).as_object()
    }

    // -- no-op-on-write mutator --

    /// Property write. Silently ignored on a released handle, and a
    /// stale-object rejection from the server is swallowed; callers
    /// holding outdated facade objects stay panic-free.
    pub fn write(&self, member: &str, value: Variant) {
        let Some(object) = self.object() else {
            tracing::debug!(member, "write on released handle ignored");
            return;
        };
        if let Err(err) = object.put(member, value) {
            tracing::debug!(member, error = %err, "property write ignored");
        }
    }

    // -- checked calls --

    /// Method invocation. Unlike reads and writes this always propagates:
    /// failures come back wrapped as [`AutomationError::Operation`] naming
    /// `Class.Member`, with the native failure as cause.
    pub fn call(&self, member: &str, args: &[Variant]) -> AutomationResult<Variant> {
        let Some(object) = self.object() else {
            return Err(AutomationError::operation(
                member,
                AutomationError::StaleObject("handle already released".into()),
            ));
        };
        object.invoke(member, args).map_err(|err| {
            AutomationError::operation(format!("{}.{member}", object.class_name()), err)
        })
    }

    /// Method invocation expected to produce a new object (`Add`,
    /// `Duplicate`, `Open`, ...). A null or non-object result is an
    /// operation failure, never a facade around nothing.
    pub fn call_object(&self, member: &str, args: &[Variant]) -> AutomationResult<ObjectRef> {
        let value = self.call(member, args)?;
        value
            .as_object()
            .ok_or_else(|| AutomationError::operation(member, AutomationError::NullObject))
    }
}

impl Drop for OwnedHandle {
    fn drop(&mut self) {
        self.release();
    }
}
