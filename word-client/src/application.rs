use automation_core::{AutomationResult, ObjectRef, OwnedHandle, Session, Variant};

use crate::document::Documents;
use crate::enums::SaveOptions;
use crate::PROG_ID;

/// The Word application itself, the root of the object graph.
///
/// Releasing (or dropping) this facade only drops the client's
/// reference; call [`quit`](Self::quit) first to shut the server down.
#[derive(Debug)]
pub struct Application {
    handle: OwnedHandle,
}

impl Application {
    /// Starts (or connects to) the Word automation server.
    ///
    /// # Errors
    /// Fails if the session cannot activate `Word.Application` or hands
    /// back a null root object.
    pub fn connect(session: &dyn Session) -> AutomationResult<Self> {
        let object = session.create_instance(PROG_ID)?;
        let app = Self::attach(object)?;
        tracing::info!("connected to Word automation server");
        Ok(app)
    }

    /// Wraps an already-acquired application object.
    ///
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

    pub fn visible(&self) -> bool {
        self.handle.read_bool("Visible")
    }

    pub fn set_visible(&self, visible: bool) {
        self.handle.write("Visible", visible.into());
    }

    /// The open documents collection; absent if the server is gone.
    pub fn documents(&self) -> Option<Documents> {
        self.handle
            .read_object("Documents")
            .and_then(|object| Documents::attach(object).ok())
    }

    /// Shuts the server down, saving per `save`.
    ///
    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn quit(&self, save: SaveOptions) -> AutomationResult<()> {
        self.handle
            .call("Quit", &[Variant::I32(save.raw())])
            .map(|_| ())
    }

    /// Releases this client's reference to the application object.
    /// Idempotent; also runs on drop.
    pub fn release(&mut self) {
        self.handle.release();
    }
}
