//! Error types for mandate-core.
//!
//! The dashboard has almost nothing that can fail: every input comes from a
//! closed enumeration the UI controls. What remains is serialising figures for
//! the charting library and looking up states by name.

use thiserror::Error;

/// Errors raised by the core library.
#[derive(Debug, Clone, Error)]
pub enum MandateError {
    /// A chart figure could not be serialised to JSON
    #[error("Failed to serialise chart: {0}")]
    ChartSerialization(String),
    /// A state name is not in the turnout selector's list
    #[error("Unknown state: {0}")]
    UnknownState(String),
}

impl From<serde_json::Error> for MandateError {
    fn from(err: serde_json::Error) -> Self {
        MandateError::ChartSerialization(err.to_string())
    }
}

impl From<MandateError> for String {
    fn from(err: MandateError) -> String {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_state_message() {
        let err = MandateError::UnknownState("Atlantis".into());
        assert_eq!(err.to_string(), "Unknown state: Atlantis");
    }

    #[test]
    fn test_from_serde_error() {
        let serde_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: MandateError = serde_err.into();
        assert!(matches!(err, MandateError::ChartSerialization(_)));
        let as_string: String = err.into();
        assert!(as_string.starts_with("Failed to serialise chart"));
    }
}
