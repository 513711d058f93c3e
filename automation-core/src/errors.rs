use thiserror::Error;

/// Result type alias for automation operations.
pub type AutomationResult<T> = Result<T, AutomationError>;

/// Centralized error enum for the automation facade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AutomationError {
    /// A facade type was handed a null object reference at construction.
    #[error("automation object reference is null")]
    NullObject,

    /// A required parameter was missing, empty or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying native object is no longer alive (its document or
    /// application was closed, or the object was deleted).
    #[error("object is no longer alive: {0}")]
    StaleObject(String),

    /// The automation server knows no member by that name.
    #[error("'{class}' has no member '{member}'")]
    MemberNotFound { class: String, member: String },

    /// The automation server itself reported a scripting fault for a
    /// member invocation (DISP_E_EXCEPTION on Windows).
    #[error("automation server fault in '{member}': {description}")]
    ServerFault { member: String, description: String },

    /// A mutating call failed; carries the original failure as cause.
    #[error("'{context}' failed")]
    Operation {
        context: String,
        #[source]
        source: Box<AutomationError>,
    },

    /// Errors during value conversion at the automation boundary.
    #[error("value conversion failed: {0}")]
    Conversion(String),

    /// Standard Windows COM error.
    #[cfg(windows)]
    #[error("COM error: {source} ({})", office_hresult_hint(.source.code().0 as u32).unwrap_or("No hint available"))]
    Com {
        #[from]
        source: windows::core::Error,
    },

    /// Catch-all for unexpected internal failures.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AutomationError {
    /// Wraps a failure from a mutating call with the member that was
    /// being invoked.
    pub fn operation(context: impl Into<String>, source: AutomationError) -> Self {
        Self::Operation {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// `true` if the error means the native object went away, directly or
    /// as the cause of a wrapped operation failure.
    pub fn is_stale(&self) -> bool {
        match self {
            Self::StaleObject(_) => true,
            Self::Operation { source, .. } => source.is_stale(),
            _ => false,
        }
    }
}

impl From<anyhow::Error> for AutomationError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Maps known COM/automation error codes to actionable user hints.
pub fn office_hresult_hint(code: u32) -> Option<&'static str> {
    match code {
        0x8002_0003 => Some("Member not found — the Office version may not expose this property"),
        0x8002_0006 => Some("Unknown member name (DISP_E_UNKNOWNNAME)"),
        0x8002_000E => Some("Invalid parameter count for the automation call"),
        0x8002_0009 => Some("The Office application raised a scripting exception (DISP_E_EXCEPTION)"),
        0x8001_0001 => Some("Server is busy and rejected the call — retry when Office is idle"),
        0x8001_0108 => Some("Object disconnected — the document or application was closed (RPC_E_DISCONNECTED)"),
        0x800A_03EC => Some("Office rejected the operation — often an invalid name, range or protected sheet"),
        0x8008_0005 => Some("Server process failed to start — check if Office is installed and licensed"),
        0x8004_0154 => Some("Application is not registered on this machine (is Office installed?)"),
        0x8007_0005 => Some("Access denied — DCOM activation permissions not configured for this user"),
        0x8000_4003 => Some("Invalid pointer (E_POINTER)"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_known_codes() {
        assert_eq!(
            office_hresult_hint(0x8004_0154),
            Some("Application is not registered on this machine (is Office installed?)")
        );
        assert_eq!(
            office_hresult_hint(0x8001_0108),
            Some("Object disconnected — the document or application was closed (RPC_E_DISCONNECTED)")
        );
        assert_eq!(
            office_hresult_hint(0x800A_03EC),
            Some("Office rejected the operation — often an invalid name, range or protected sheet")
        );
    }

    #[test]
    fn hint_unknown_code() {
        assert_eq!(office_hresult_hint(0xDEAD_BEEF), None);
    }

    #[test]
    fn operation_wraps_cause() {
        let err = AutomationError::operation(
            "Worksheet.Delete",
            AutomationError::StaleObject("Worksheet".into()),
        );
        assert!(err.is_stale());
        assert_eq!(format!("{err}"), "'Worksheet.Delete' failed");
        let source = std::error::Error::source(&err).expect("cause is carried");
        assert_eq!(format!("{source}"), "object is no longer alive: Worksheet");
    }

    #[test]
    fn invalid_argument_is_not_stale() {
        assert!(!AutomationError::InvalidArgument("empty name".into()).is_stale());
    }
}
