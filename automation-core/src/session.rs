use crate::errors::AutomationResult;
use crate::variant::ObjectRef;

#[cfg(any(test, feature = "test-support"))]
use mockall::automock;

/// A live connection to an automation server process.
///
/// The server is process-wide state with its own lifecycle; modeling it
/// as an explicit capability keeps that dependency visible in type
/// signatures — every top-level facade factory takes a `&dyn Session`
/// instead of reaching for ambient globals.
///
/// On Windows the implementation is [`crate::ComSession`] (COM apartment
/// plus `CoCreateInstance`); the `test-support` feature provides
/// [`crate::testing::FakeSession`] backed by scripted object trees.
#[cfg_attr(any(test, feature = "test-support"), automock)]
pub trait Session {
    /// Starts (or connects to) the automation server registered under the
    /// given prog id (e.g. `"Excel.Application"`) and returns its root
    /// object, already counted.
    ///
    /// # Errors
    /// Returns `Err` if the prog id is unknown or the server process
    /// cannot be started.
    fn create_instance(&self, prog_id: &str) -> AutomationResult<ObjectRef>;
}
