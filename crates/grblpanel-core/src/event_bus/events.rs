//! Events published by the settings dialog.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", content = "event", rename_all = "lowercase")]
pub enum AppEvent {
    Settings(SettingsEvent),
    Ui(UiEvent),
}

impl AppEvent {
    pub fn category(&self) -> EventCategory {
        match self {
            Self::Settings(_) => EventCategory::Settings,
            Self::Ui(_) => EventCategory::Ui,
        }
    }

    /// One-line summary for logs
    pub fn description(&self) -> String {
        match self {
            Self::Settings(SettingsEvent::Opened { recorded }) => {
                format!("Settings opened ({} values recorded)", recorded)
            }
            Self::Settings(SettingsEvent::Committed) => "Settings committed".to_string(),
            Self::Settings(SettingsEvent::RolledBack { restored }) => {
                format!("Settings rolled back ({} values restored)", restored)
            }
            Self::Settings(SettingsEvent::DefaultsRestored) => {
                "Settings reset to defaults".to_string()
            }
            Self::Settings(SettingsEvent::NetworkTested { address, reachable }) => format!(
                "Network test: {} {}",
                address,
                if *reachable { "reachable" } else { "unreachable" }
            ),
            Self::Ui(UiEvent::FontSizeChanged { points }) => format!("Font size: {}pt", points),
            Self::Ui(UiEvent::CategorySelected { index, title }) => {
                format!("Category: {} ({})", title, index)
            }
        }
    }
}

/// Coarse grouping used by [`super::EventFilter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Settings,
    Ui,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Settings => "settings",
            Self::Ui => "ui",
        })
    }
}

/// Dialog lifecycle and actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsEvent {
    /// Dialog opened; `recorded` control values were snapshotted
    Opened { recorded: usize },
    /// Dialog accepted; edited values are ready to be read back
    Committed,
    /// Dialog cancelled; `restored` control values were written back
    RolledBack { restored: usize },
    DefaultsRestored,
    /// A reachability probe finished
    NetworkTested { address: String, reachable: bool },
}

/// Changes other components react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiEvent {
    /// Application font size in points; a theme component applies it
    FontSizeChanged { points: u32 },
    /// Navigator selection moved to the category at `index`
    CategorySelected { index: usize, title: String },
}
