//! Measurement units selectable in the machine settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl MeasurementSystem {
    /// Position of this system in the units drop-down
    pub fn index(self) -> usize {
        match self {
            Self::Metric => 0,
            Self::Imperial => 1,
        }
    }

    /// Inverse of [`MeasurementSystem::index`]; out-of-range indices fall back to metric
    pub fn from_index(index: usize) -> Self {
        match index {
            1 => Self::Imperial,
            _ => Self::Metric,
        }
    }
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Metric
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}
