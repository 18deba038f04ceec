//! Errors shared by the dialog layers: snapshot bookkeeping and the
//! network self-test.

use crate::control::ControlKind;
use thiserror::Error;

/// Snapshot error type
///
/// Raised by the rollback engine when a recorded snapshot cannot be applied
/// to the controls currently registered in the dialog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// The number of recorded values for a kind differs from the number of
    /// controls of that kind
    #[error("Snapshot holds {recorded} {kind} values but the dialog has {present} {kind} controls")]
    KindMismatch {
        /// The control kind whose counts differ.
        kind: ControlKind,
        /// Values recorded at capture time.
        recorded: usize,
        /// Controls present at rollback time.
        present: usize,
    },

    /// Rollback was requested without a preceding capture
    #[error("No snapshot has been captured")]
    NotCaptured,
}

/// Network test error type
///
/// Represents the ways a connectivity self-test can fail before it yields a
/// reachable/unreachable verdict.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkTestError {
    /// The address text is not a dotted IPv4 address
    #[error("Invalid IPv4 address: {input}")]
    InvalidAddress {
        /// The rejected address text.
        input: String,
    },

    /// The probe program could not be started
    #[error("Failed to run {program}: {reason}")]
    ProbeFailed {
        /// The program that was invoked.
        program: String,
        /// Why the process could not be run.
        reason: String,
    },
}

/// Any error raised by the core layers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    NetworkTest(#[from] NetworkTestError),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
