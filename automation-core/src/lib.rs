//! # automation-core
//!
//! Lifetime and conversion core for COM automation facades.
//!
//! Office automation servers hand out reference-counted object handles.
//! This crate owns the three concerns every facade type repeats:
//!
//! - [`OwnedHandle`]: exclusive ownership of one native object reference,
//!   with exactly-once release on every exit path (explicit or `Drop`).
//! - [`Variant`]: the loosely-typed value model crossing the automation
//!   boundary, plus the scalar conversions in [`convert`].
//! - [`collection`]: index/name lookup, descending batch deletion and
//!   fault-tolerant iteration over native collections.
//!
//! The automation server itself is reached through the [`Session`] and
//! [`NativeObject`] traits. On Windows the default backend is late-bound
//! IDispatch ([`ComSession`]); everywhere else (and in tests) the
//! `test-support` feature provides a scriptable in-memory server.
//!
//! ## Threading
//!
//! Office servers are apartment-threaded. Every handle type here is
//! `Rc`-based and therefore `!Send` — the whole object graph must be
//! driven from the thread that created the session.

pub mod collection;
pub mod convert;
mod errors;
mod handle;
mod object;
mod session;
mod variant;

#[cfg(windows)]
mod com_guard;
#[cfg(windows)]
mod dispatch;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

// Stable public API
pub use errors::{office_hresult_hint, AutomationError, AutomationResult};
pub use handle::OwnedHandle;
pub use object::NativeObject;
pub use session::Session;
pub use variant::{ObjectRef, Variant};

// Windows backend re-exports (conditional)
#[cfg(windows)]
pub use com_guard::ComGuard;
#[cfg(windows)]
pub use dispatch::{ComSession, DispatchObject};

// Test support re-export
#[cfg(any(test, feature = "test-support"))]
pub use session::MockSession;
