//! Error types for the settings dialog.

use grblpanel_core::SnapshotError;
use grblpanel_settings::ConfigError;
use thiserror::Error;

/// Errors raised by dialog operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DialogError {
    /// An operation that needs an open dialog was called on a closed one.
    #[error("Settings dialog is not open")]
    NotOpen,

    /// `open` was called twice without accepting or cancelling.
    #[error("Settings dialog is already open")]
    AlreadyOpen,

    /// A user command slot outside the available slots.
    #[error("Unknown user command slot {slot} (slots: {slots})")]
    UnknownSlot { slot: usize, slots: usize },

    /// A category index outside the navigator list.
    #[error("Unknown category {index} (categories: {count})")]
    UnknownCategory { index: usize, count: usize },

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// Values read back from the dialog do not form a valid configuration.
    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] ConfigError),
}

/// Result type alias for dialog operations.
pub type DialogResult<T> = Result<T, DialogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_error_display() {
        let err = DialogError::UnknownSlot { slot: 4, slots: 4 };
        assert_eq!(err.to_string(), "Unknown user command slot 4 (slots: 4)");

        let err: DialogError = SnapshotError::NotCaptured.into();
        assert_eq!(err.to_string(), "No snapshot has been captured");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: DialogError = ConfigError::Empty("dialog.network_test.program".to_string()).into();
        assert!(matches!(err, DialogError::InvalidSettings(_)));
    }
}
