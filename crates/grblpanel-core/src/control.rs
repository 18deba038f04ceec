//! Control kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four kinds of interactive control whose values take part in a
/// dialog snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    /// Spinner holding a floating point or integer value
    Numeric,
    /// Check box
    Boolean,
    /// Drop-down list, possibly editable
    Choice,
    /// Color picker
    Color,
}

impl ControlKind {
    /// All kinds in snapshot order
    pub const ALL: [ControlKind; 4] = [
        ControlKind::Numeric,
        ControlKind::Boolean,
        ControlKind::Choice,
        ControlKind::Color,
    ];
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Boolean => write!(f, "boolean"),
            Self::Choice => write!(f, "choice"),
            Self::Color => write!(f, "color"),
        }
    }
}
