use std::any::Any;

use crate::errors::AutomationResult;
use crate::variant::Variant;

/// The surface this crate consumes from an automation server object.
///
/// One implementation exists per backend: late-bound IDispatch on Windows
/// ([`crate::DispatchObject`]) and the in-memory fake behind the
/// `test-support` feature. Implementations are single-threaded (STA) and
/// shared through `Rc`, never across threads.
///
/// Reference-count discipline: every method that hands out an object
/// reference (a `Variant::Object` result) returns it already counted.
/// [`release`](Self::release) must tolerate being called while the server
/// object is dead; the owned-handle layer guarantees at most one call per
/// owner.
pub trait NativeObject {
    /// Class name of the underlying server object, for diagnostics only.
    fn class_name(&self) -> &str;

    /// Property read, possibly indexed (`Item`, `Range("A1")`, ...).
    ///
    /// # Errors
    /// Returns `Err` if the object is stale, the member is unknown, or
    /// the server rejects the access.
    fn get(&self, member: &str, args: &[Variant]) -> AutomationResult<Variant>;

    /// Property write.
    ///
    /// # Errors
    /// Returns `Err` if the object is stale or the server rejects the
    /// assignment.
    fn put(&self, member: &str, value: Variant) -> AutomationResult<()>;

    /// Method invocation (`Delete`, `Save`, `Add`, ...).
    ///
    /// # Errors
    /// Returns `Err` if the object is stale or the call fails inside the
    /// server.
    fn invoke(&self, member: &str, args: &[Variant]) -> AutomationResult<Variant>;

    /// Decrements the external reference count once; returns the count
    /// that remains, or 0 when the backend cannot observe it.
    fn release(&self) -> u32;

    /// Whether the underlying server object is still live.
    fn is_alive(&self) -> bool;

    /// Backend downcast seam, used to marshal object-valued arguments.
    fn as_any(&self) -> &dyn Any;
}
