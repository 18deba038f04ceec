//! Settings dialog lifecycle
//!
//! Opening the dialog snapshots every control; accepting discards the
//! snapshot and cancelling rolls every control back. The dialog also owns
//! the category navigator and the scroll panel it keeps in sync, and
//! publishes what happens on its [`EventBus`].

use std::sync::Arc;
use std::time::Duration;

use grblpanel_core::{AppEvent, EventBus, SettingsEvent, SnapshotError, UiEvent};
use grblpanel_settings::{Config, DialogSettings, DrawMode, ToolType};

use crate::binding::SettingsBinding;
use crate::controls::ValueControl;
use crate::error::{DialogError, DialogResult};
use crate::hotkeys::HotkeyTable;
use crate::layout::{Category, CategoryId, LayoutMetrics};
use crate::navigator::CategoryNavigator;
use crate::network::{run_network_test, NetworkTestOutcome, Pinger};
use crate::notify::Notifier;
use crate::registry::{ChoiceField, ControlRegistry, FlagField, NumericField, TextField};
use crate::scroll::{ScrollArea, StackedScrollArea};
use crate::snapshot::Snapshot;
use crate::style::StyleConfig;

/// Question asked before resetting every setting
pub const RESTORE_DEFAULTS_PROMPT: &str = "Reset settings to default values?";

/// Flags that keep their value when defaults are restored
pub const KEPT_ON_RESTORE: [FlagField; 8] = [
    FlagField::AutoLine,
    FlagField::UseM6,
    FlagField::UseRotaryAxis,
    FlagField::ResetAfterConnect,
    FlagField::Vsync,
    FlagField::ShowUiCommands,
    FlagField::PanelUserCommands,
    FlagField::CompactLayout,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open,
}

pub struct SettingsDialog {
    pub(crate) registry: ControlRegistry,
    hotkeys: HotkeyTable,
    navigator: CategoryNavigator,
    scroll: StackedScrollArea,
    metrics: LayoutMetrics,
    snapshot: Option<Snapshot>,
    state: DialogState,
    style: StyleConfig,
    settings: DialogSettings,
    events: Arc<EventBus>,
}

impl SettingsDialog {
    /// Build a closed dialog showing default values, with its own event bus
    pub fn new(settings: &DialogSettings) -> Self {
        Self::with_event_bus(settings, Arc::new(EventBus::new()))
    }

    /// Build a closed dialog showing default values, publishing on `events`
    pub fn with_event_bus(settings: &DialogSettings, events: Arc<EventBus>) -> Self {
        let metrics = LayoutMetrics::from(settings);
        let mut dialog = Self {
            registry: ControlRegistry::new(),
            hotkeys: HotkeyTable::default(),
            navigator: CategoryNavigator::new(Category::all()),
            scroll: StackedScrollArea::new(Vec::new(), settings.viewport_height),
            metrics,
            snapshot: None,
            state: DialogState::Closed,
            style: StyleConfig::default(),
            settings: settings.clone(),
            events,
        };
        SettingsBinding::new(Config::default()).populate_dialog(&mut dialog);
        dialog
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub fn registry(&self) -> &ControlRegistry {
        &self.registry
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.events
    }

    pub fn settings(&self) -> &DialogSettings {
        &self.settings
    }

    /// Style last published for the font setting
    pub fn style(&self) -> StyleConfig {
        self.style
    }

    pub fn hotkeys(&self) -> &HotkeyTable {
        &self.hotkeys
    }

    /// Snapshot held while the dialog is open
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Record every control value and show the dialog
    pub fn open(&mut self) -> DialogResult<()> {
        if self.is_open() {
            return Err(DialogError::AlreadyOpen);
        }

        let snapshot = Snapshot::capture(&self.registry);
        let recorded = snapshot.len();
        self.snapshot = Some(snapshot);
        self.state = DialogState::Open;

        if self.navigator.on_first_show(&mut self.scroll) {
            tracing::debug!(
                "First show, minimum width {:?}",
                self.scroll.minimum_width()
            );
        }

        tracing::info!("Settings dialog opened");
        self.publish(AppEvent::Settings(SettingsEvent::Opened { recorded }));
        Ok(())
    }

    /// Keep the edited values and close
    pub fn accept(&mut self) -> DialogResult<()> {
        if !self.is_open() {
            return Err(DialogError::NotOpen);
        }

        self.snapshot = None;
        self.state = DialogState::Closed;

        tracing::info!("Settings accepted");
        self.publish(AppEvent::Settings(SettingsEvent::Committed));
        Ok(())
    }

    /// Restore every control to its value at open and close. Returns the number of values restored.
    pub fn cancel(&mut self) -> DialogResult<usize> {
        if !self.is_open() {
            return Err(DialogError::NotOpen);
        }

        let mut snapshot = self.snapshot.take().ok_or(SnapshotError::NotCaptured)?;
        let restored = match snapshot.rollback(&mut self.registry) {
            Ok(restored) => restored,
            Err(e) => {
                self.snapshot = Some(snapshot);
                return Err(e.into());
            }
        };
        self.refresh_dependents();
        self.state = DialogState::Closed;

        tracing::info!("Settings cancelled, {} values restored", restored);
        self.publish(AppEvent::Settings(SettingsEvent::RolledBack { restored }));
        Ok(restored)
    }

    pub fn categories(&self) -> &[Category] {
        self.navigator.categories()
    }

    pub fn selected_index(&self) -> usize {
        self.navigator.selected()
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.navigator.selected_category()
    }

    pub fn scroll_area(&self) -> &StackedScrollArea {
        &self.scroll
    }

    pub fn scroll_offset(&self) -> i32 {
        self.scroll.offset()
    }

    /// Select a category in the list and scroll its group into view
    pub fn select_category(&mut self, index: usize) -> DialogResult<usize> {
        let before = self.navigator.selected();
        let selected = self.navigator.select(
            index,
            &mut self.scroll,
            self.settings.ensure_visible_margin,
        )?;
        if selected != before {
            self.publish_selection();
        }
        Ok(selected)
    }

    /// Move the scroll panel, as a drag of the scroll bar would. Returns whether the selection changed.
    pub fn scroll_to(&mut self, offset: i32) -> bool {
        if !self.scroll.set_offset(offset) {
            return false;
        }
        self.follow_scroll()
    }

    /// Resize the visible part of the panel. Returns whether the selection changed.
    pub fn resize_viewport(&mut self, height: i32) -> bool {
        if !self.scroll.set_viewport_height(height) {
            return false;
        }
        self.follow_scroll()
    }

    /// Replace the hotkey table; malformed entries become empty rows
    pub fn set_hotkeys<S: AsRef<str>>(&mut self, entries: &[S]) {
        self.hotkeys.set_rows(entries);
        self.relayout();
    }

    /// Ask for confirmation and reset every control to its default value.
    ///
    /// The port, the user command slots, the [`KEPT_ON_RESTORE`] flags and
    /// the hotkey table are kept.
    /// Returns whether the reset happened.
    pub fn restore_defaults(&mut self, notifier: &dyn Notifier) -> bool {
        if !notifier.confirm(RESTORE_DEFAULTS_PROMPT) {
            return false;
        }

        let port = self.registry.numeric(NumericField::Port).value();
        let user_commands: Vec<String> = TextField::USER_COMMANDS
            .iter()
            .map(|field| self.registry.text(*field).text().to_string())
            .collect();
        let flags: Vec<bool> = KEPT_ON_RESTORE
            .iter()
            .map(|field| self.registry.flag(*field).value())
            .collect();

        SettingsBinding::new(Config::default()).populate_values(self);

        self.registry.numeric_mut(NumericField::Port).set_value(port);
        for (field, text) in TextField::USER_COMMANDS.iter().zip(user_commands) {
            self.registry.text_mut(*field).set_text(text);
        }
        for (field, value) in KEPT_ON_RESTORE.iter().zip(flags) {
            self.registry.flag_mut(*field).set_value(value);
        }
        self.refresh_dependents();

        tracing::info!("Settings reset to defaults");
        self.publish(AppEvent::Settings(SettingsEvent::DefaultsRestored));
        true
    }

    /// Check the address field and probe it once, then tell the user the outcome
    pub fn test_network(&self, pinger: &dyn Pinger, notifier: &dyn Notifier) -> NetworkTestOutcome {
        let address = self.registry.text(TextField::IpAddress).text().to_string();
        let timeout = Duration::from_millis(self.settings.network_test.timeout_ms);

        let outcome = run_network_test(&address, pinger, timeout);
        notifier.inform(outcome.message());

        if outcome != NetworkTestOutcome::InvalidAddress {
            self.publish(AppEvent::Settings(SettingsEvent::NetworkTested {
                address: address.trim().to_string(),
                reachable: outcome == NetworkTestOutcome::Reachable,
            }));
        }
        outcome
    }

    /// Recompute enablement and the published style from current values
    pub(crate) fn refresh_dependents(&mut self) {
        let tool_type = ToolType::from_index(self.choice_index(ChoiceField::ToolType));
        let draw_mode = DrawMode::from_index(self.choice_index(ChoiceField::DrawMode));
        let vectors = draw_mode == DrawMode::Vectors;
        let simplify = self.registry.flag(FlagField::Simplify).value();

        self.registry
            .numeric_mut(NumericField::ToolAngle)
            .set_enabled(tool_type == ToolType::Conic);
        self.registry
            .flag_mut(FlagField::Simplify)
            .set_enabled(vectors);
        self.registry
            .numeric_mut(NumericField::SimplifyPrecision)
            .set_enabled(vectors && simplify);

        let points = self.font_size();
        if points != self.style.font_size {
            self.style = StyleConfig::new(points);
            tracing::debug!("Font size changed to {}pt", points);
            self.publish(AppEvent::Ui(UiEvent::FontSizeChanged { points }));
        }
    }

    pub(crate) fn choice_index(&self, field: ChoiceField) -> usize {
        self.registry.choice(field).current_index().unwrap_or(0)
    }

    /// Lay the groups out again after a change in the number of rows
    fn relayout(&mut self) {
        let rows: Vec<(&'static str, usize)> = CategoryId::ALL
            .iter()
            .map(|id| {
                let extra = match id {
                    // Network test button
                    CategoryId::Connection => 1,
                    // Header plus one row per hotkey
                    CategoryId::Hotkeys => self.hotkeys.len() + 1,
                    _ => 0,
                };
                (id.identifier(), self.registry.rows_in(*id) + extra)
            })
            .collect();

        if self.scroll.set_regions(self.metrics.stack(rows)) {
            self.follow_scroll();
        }
    }

    fn follow_scroll(&mut self) -> bool {
        let changed = self.navigator.on_scroll(&self.scroll);
        if changed {
            self.publish_selection();
        }
        changed
    }

    fn publish_selection(&self) {
        if let Some(category) = self.navigator.selected_category() {
            self.publish(AppEvent::Ui(UiEvent::CategorySelected {
                index: category.position,
                title: category.title.clone(),
            }));
        }
    }

    fn publish(&self, event: AppEvent) {
        if let Err(e) = self.events.publish(event) {
            tracing::trace!("Event not delivered: {}", e);
        }
    }
}

impl std::fmt::Debug for SettingsDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsDialog")
            .field("state", &self.state)
            .field("selected", &self.navigator.selected())
            .field("offset", &self.scroll.offset())
            .field("style", &self.style)
            .field("hotkeys", &self.hotkeys.len())
            .finish()
    }
}
