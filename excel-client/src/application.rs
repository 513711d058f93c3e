use automation_core::{AutomationResult, ObjectRef, OwnedHandle, Session, Variant};

use crate::workbook::Workbooks;
use crate::PROG_ID;

/// The Excel application itself — the root of the object graph.
///
/// Every other facade type is reached from here. The application holds
/// the process-wide server alive; dropping (or releasing) it does **not**
/// quit Excel, it only drops this client's reference — call
/// [`quit`](Self::quit) first to shut the server down.
#[derive(Debug)]
pub struct Application {
    handle: OwnedHandle,
}

impl Application {
    /// Starts (or connects to) the Excel automation server.
    ///
    /// # Errors
    /// Fails if the session cannot activate `Excel.Application` or hands
    /// back a null root object.
    pub fn connect(session: &dyn Session) -> AutomationResult<Self> {
        let object = session.create_instance(PROG_ID)?;
        let app = Self::attach(object)?;
        tracing::info!("connected to Excel automation server");
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

    pub fn display_alerts(&self) -> bool {
        self.handle.read_bool("DisplayAlerts")
    }

    /// Turn off for unattended automation — Excel otherwise blocks on
    /// modal dialogs.
    pub fn set_display_alerts(&self, enabled: bool) {
        self.handle.write("DisplayAlerts", enabled.into());
    }

    pub fn screen_updating(&self) -> bool {
        self.handle.read_bool("ScreenUpdating")
    }

    pub fn set_screen_updating(&self, enabled: bool) {
        self.handle.write("ScreenUpdating", enabled.into());
    }

    /// The open workbooks collection; absent if the server is gone.
    pub fn workbooks(&self) -> Option<Workbooks> {
        self.handle
            .read_object("Workbooks")
            .and_then(|object| Workbooks::attach(object).ok())
    }

    /// Shuts the server process down.
    ///
    /// # Errors
    /// Propagates the native failure wrapped with context.
    pub fn quit(&self) -> AutomationResult<()> {
        self.handle.call("Quit", &[]).map(|_| ())
    }

    /// Evaluates an expression in Excel's name resolution context
    /// (e.g. a formula or a defined name).
    ///
    /// # Errors
    /// Rejects an empty expression; propagates the native failure wrapped
    /// with context.
    pub fn evaluate(&self, expression: &str) -> AutomationResult<Variant> {
        if expression.is_empty() {
            return Err(automation_core::AutomationError::InvalidArgument(
                "expression must not be empty".into(),
            ));
        }
        self.handle.call("Evaluate", &[expression.into()])
    }

    /// Releases this client's reference to the application object.
    /// Idempotent; also runs on drop.
    pub fn release(&mut self) {
        self.handle.release();
    }
}
