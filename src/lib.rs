//! # GrblPanel
//!
//! Settings dialog model for a GRBL CNC sender. Every control of the dialog
//! can be snapshotted when it opens and rolled back on cancel, and the
//! category list stays in sync with the scroll panel in both directions.
//!
//! ## Architecture
//!
//! GrblPanel is organized as a workspace with multiple crates:
//!
//! 1. **grblpanel-core** - Error types, event bus, colors, units
//! 2. **grblpanel-settings** - Persisted configuration, validation, file location
//! 3. **grblpanel-dialog** - Control registry, snapshot/rollback, navigator, facade
//! 4. **grblpanel** - Logging setup and a headless binary driving one session

pub use grblpanel_core::{
    AppEvent, ControlKind, Error, EventBus, EventBusConfig, EventFilter, MeasurementSystem,
    NetworkTestError, Result, Rgb, SettingsEvent, SnapshotError, UiEvent,
};

pub use grblpanel_settings::{Config, ConfigError, SettingsError, SettingsManager};

pub use grblpanel_dialog::{
    Category, CategoryId, DialogError, DialogState, LogNotifier, NetworkTestOutcome, Notifier,
    Pinger, ScrollArea, SettingsBinding, SettingsDialog, Snapshot, StyleConfig, SystemPinger,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with_level(tracing::Level::INFO)
}

/// Initialize logging with an explicit default level; `RUST_LOG` still applies on top
pub fn init_logging_with_level(level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
