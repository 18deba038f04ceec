//! GrblPanel Settings Crate
//!
//! Persisted configuration mirrored by the settings dialog, its validation,
//! and the location of the configuration file on disk.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{
    ArcApproximation, ColorSettings, Config, ConnectionSettings, ConsoleSettings, ControlSettings,
    DialogSettings, DrawMode, GrayscaleCode, HeightmapSettings, MachineSettings,
    MeasurementSystem, NetworkTestSettings, PanelSettings, ParserSettings, RestoreMode,
    SenderSettings, Smoothing, ToolSettings, ToolType, UiSettings, VisualizerSettings,
    EDITABLE_NUMBER_RANGE, USER_COMMAND_SLOTS,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use manager::SettingsManager;
