//! # GrblPanel Core
//!
//! Core types shared by the GrblPanel crates: the unified error type,
//! control kinds, RGB colors, measurement units and the event bus used to
//! decouple the settings dialog from the components that react to it.

pub mod color;
pub mod control;
pub mod error;
pub mod event_bus;
pub mod units;

pub use color::Rgb;
pub use control::ControlKind;
pub use error::{Error, NetworkTestError, Result, SnapshotError};

// Re-export event bus for convenience
pub use event_bus::{
    AppEvent, EventBus, EventBusConfig, EventBusError, EventCategory, EventFilter, SettingsEvent,
    SubscriptionId, UiEvent,
};

pub use units::MeasurementSystem;
