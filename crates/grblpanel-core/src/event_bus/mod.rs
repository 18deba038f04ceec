//! # Event Bus Module
//!
//! Provides the event bus used to decouple the settings dialog from the
//! components that react to it (theme, main window, logging).
//!
//! ## Overview
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Supports both sync handlers and async receivers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use grblpanel_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, UiEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Ui]),
//!     |event| {
//!         if let AppEvent::Ui(UiEvent::FontSizeChanged { points }) = event {
//!             println!("Font size is now {}", points);
//!         }
//!     },
//! );
//!
//! bus.publish(AppEvent::Ui(UiEvent::FontSizeChanged { points: 11 })).ok();
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
