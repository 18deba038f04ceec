//! # GrblPanel Settings Dialog
//!
//! Headless model of the settings dialog. It owns:
//! - A registry of typed controls built once from the field enums
//! - A snapshot taken when the dialog opens and rolled back on cancel
//! - A category list kept in sync with the scroll panel in both directions
//! - Named accessors and a binding to the persisted [`grblpanel_settings::Config`]
//!
//! Widget toolkits plug in through [`ScrollArea`], [`Notifier`] and [`Pinger`].

pub mod binding;
pub mod controls;
pub mod dialog;
pub mod error;
pub mod facade;
pub mod hotkeys;
pub mod layout;
pub mod navigator;
pub mod network;
pub mod notify;
pub mod registry;
pub mod scroll;
pub mod snapshot;
pub mod style;

pub use binding::SettingsBinding;
pub use controls::{
    BooleanControl, ChoiceControl, ColorControl, NumericControl, TextControl, ValueControl,
};
pub use dialog::{DialogState, SettingsDialog, KEPT_ON_RESTORE, RESTORE_DEFAULTS_PROMPT};
pub use error::{DialogError, DialogResult};
pub use hotkeys::{HotkeyRow, HotkeyTable};
pub use layout::{Category, CategoryId, LayoutMetrics};
pub use navigator::CategoryNavigator;
pub use network::{parse_ipv4, run_network_test, NetworkTestOutcome, Pinger, SystemPinger};
pub use notify::{LogNotifier, Notifier};
pub use registry::{ChoiceField, ColorField, ControlRegistry, FlagField, NumericField, TextField};
pub use scroll::{Region, ScrollArea, StackedScrollArea};
pub use snapshot::Snapshot;
pub use style::StyleConfig;
