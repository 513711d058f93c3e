//! RAII guard for COM initialization/teardown.
//!
//! Ensures `CoUninitialize` is called exactly once per successful
//! `CoInitializeEx`, even on early returns or panics.

use std::marker::PhantomData;

use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};

use crate::errors::{AutomationError, AutomationResult};

/// Drop guard for COM thread initialization.
///
/// Calling [`ComGuard::new`] initializes COM in Single-Threaded Apartment
/// (STA) mode — Office automation servers are apartment-threaded and must
/// be driven from an STA thread. When the guard is dropped,
/// `CoUninitialize` is called automatically.
///
/// # Thread Safety
///
/// `ComGuard` is intentionally `!Send` and `!Sync`. COM initialization
/// is per-thread — the guard **must** be created and dropped on the same
/// OS thread. This is enforced at compile time.
#[derive(Debug)]
pub struct ComGuard {
    /// Prevents `Send + Sync` auto-derivation. COM init is per-thread.
    _not_send: PhantomData<*mut ()>,
}

impl ComGuard {
    /// Initialize COM in Single-Threaded Apartment (STA) mode.
    ///
    /// Returns `Ok(ComGuard)` on success (including `S_FALSE`, which
    /// means COM was already initialized on this thread).
    ///
    /// # Errors
    ///
    /// Returns `Err` if `CoInitializeEx` fails with a fatal HRESULT, e.g.
    /// `RPC_E_CHANGED_MODE` when the thread already joined the MTA.
    pub fn new() -> AutomationResult<Self> {
        // SAFETY: `CoInitializeEx` is a standard Win32 FFI call. We pass
        // `COINIT_APARTMENTTHREADED` to create/join the STA. The result
        // is checked below, and `CoUninitialize` is guaranteed via Drop.
        let hr = unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) };

        if let Err(e) = hr.ok() {
            tracing::error!(error = ?e, "COM STA initialization failed");
            return Err(AutomationError::Com { source: e });
        }

        tracing::debug!("COM STA initialized");

        Ok(Self {
            _not_send: PhantomData,
        })
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        tracing::debug!("COM STA teardown");
        // SAFETY: Paired with the successful `CoInitializeEx` in `new()`.
        // Construction guarantees COM was initialized, so this call is
        // always balanced. Only runs on the creating thread (!Send).
        unsafe {
            CoUninitialize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn com_guard_constructs_and_drops() {
        let guard = ComGuard::new();
        assert!(guard.is_ok(), "ComGuard::new() should succeed: {guard:?}");
        // Guard drops here — CoUninitialize runs.
    }
}
