use std::sync::Arc;

use grblpanel_core::{AppEvent, ControlKind, EventBus, EventBusConfig, Rgb, SettingsEvent, UiEvent};
use grblpanel_dialog::{DialogError, DialogState, LogNotifier, NumericField, SettingsDialog};
use grblpanel_settings::{DialogSettings, DrawMode, ToolType};

fn recording_dialog() -> SettingsDialog {
    let bus = Arc::new(EventBus::with_config(EventBusConfig::recording(64)));
    SettingsDialog::with_event_bus(&DialogSettings::default(), bus)
}

#[test]
fn test_open_captures_every_control() {
    let mut dialog = recording_dialog();
    assert_eq!(dialog.state(), DialogState::Closed);

    dialog.open().expect("open");
    assert!(dialog.is_open());

    let snapshot = dialog.snapshot().expect("snapshot");
    assert_eq!(snapshot.pending(ControlKind::Numeric), NumericField::ALL.len());
    assert_eq!(snapshot.len(), 54);

    assert!(matches!(dialog.open(), Err(DialogError::AlreadyOpen)));
}

#[test]
fn test_cancel_rolls_back_edits() {
    let mut dialog = recording_dialog();
    dialog.set_rapid_speed(1500);
    dialog.set_vsync(true);
    dialog.open().expect("open");

    dialog.set_rapid_speed(4000);
    dialog.set_vsync(false);
    dialog.set_tool_color(Rgb::new(1, 2, 3));
    dialog.set_tool_type(ToolType::Flat);
    dialog.set_line_width(3.3);

    let restored = dialog.cancel().expect("cancel");
    assert_eq!(restored, 54);
    assert_eq!(dialog.state(), DialogState::Closed);
    assert!(dialog.snapshot().is_none());

    assert_eq!(dialog.rapid_speed(), 1500);
    assert!(dialog.vsync());
    assert_eq!(dialog.tool_color(), Rgb::new(255, 153, 0));
    assert_eq!(dialog.tool_type(), ToolType::Conic);
    assert_eq!(dialog.line_width(), 1.5);
    // Enablement follows the restored tool type
    assert!(dialog.tool_angle_enabled());
}

#[test]
fn test_cancel_without_edits_changes_nothing() {
    let mut dialog = recording_dialog();
    let before = dialog.registry().clone();

    dialog.open().expect("open");
    dialog.cancel().expect("cancel");

    assert_eq!(dialog.registry(), &before);
}

#[test]
fn test_text_fields_survive_cancel() {
    let mut dialog = recording_dialog();
    dialog.open().expect("open");
    dialog.set_ip_address("10.1.1.1");
    dialog.cancel().expect("cancel");

    assert_eq!(dialog.ip_address(), "10.1.1.1");
}

#[test]
fn test_accept_keeps_edits() {
    let mut dialog = recording_dialog();
    dialog.open().expect("open");
    dialog.set_acceleration(250);
    dialog.accept().expect("accept");

    assert_eq!(dialog.acceleration(), 250);
    assert!(dialog.snapshot().is_none());
    assert!(matches!(dialog.accept(), Err(DialogError::NotOpen)));
    assert!(matches!(dialog.cancel(), Err(DialogError::NotOpen)));
}

#[test]
fn test_lifecycle_events() {
    let mut dialog = recording_dialog();
    dialog.open().expect("open");
    dialog.cancel().expect("cancel");
    dialog.open().expect("open");
    dialog.accept().expect("accept");

    let history = dialog.event_bus().history();
    assert_eq!(
        history,
        vec![
            AppEvent::Settings(SettingsEvent::Opened { recorded: 54 }),
            AppEvent::Settings(SettingsEvent::RolledBack { restored: 54 }),
            AppEvent::Settings(SettingsEvent::Opened { recorded: 54 }),
            AppEvent::Settings(SettingsEvent::Committed),
        ]
    );
}

#[test]
fn test_font_size_change_is_published() {
    let mut dialog = recording_dialog();
    dialog.set_font_size(12);
    assert_eq!(dialog.style().font_size, 12);

    // Unchanged and rejected values publish nothing
    dialog.set_font_size(12);
    dialog.set_font_size(0);
    assert_eq!(dialog.font_size(), 12);

    let font_events: Vec<AppEvent> = dialog
        .event_bus()
        .history()
        .into_iter()
        .filter(|event| matches!(event, AppEvent::Ui(UiEvent::FontSizeChanged { .. })))
        .collect();
    assert_eq!(
        font_events,
        vec![AppEvent::Ui(UiEvent::FontSizeChanged { points: 12 })]
    );
}

#[test]
fn test_restore_defaults_keeps_port_and_user_commands() {
    let mut dialog = recording_dialog();
    dialog.set_port(8080);
    dialog.set_user_command(2, "M3 S1000").expect("slot");
    dialog.set_rapid_speed(5000);
    dialog.set_draw_mode(DrawMode::Raster);
    dialog.set_hotkeys(&["F9:Custom"]);

    assert!(!dialog.restore_defaults(&LogNotifier::new(false)));
    assert_eq!(dialog.rapid_speed(), 5000);

    assert!(dialog.restore_defaults(&LogNotifier::new(true)));
    assert_eq!(dialog.rapid_speed(), 2000);
    assert_eq!(dialog.draw_mode(), DrawMode::Vectors);
    assert_eq!(dialog.port(), 8080);
    assert_eq!(dialog.user_command(2).as_deref(), Some("M3 S1000"));
    assert_eq!(dialog.hotkeys().len(), 1);

    assert!(dialog
        .event_bus()
        .history()
        .contains(&AppEvent::Settings(SettingsEvent::DefaultsRestored)));
}

#[test]
fn test_restore_defaults_keeps_preference_flags() {
    let mut dialog = recording_dialog();
    dialog.set_ignore_errors(true);
    dialog.set_z_buffer(true);
    dialog.set_auto_line(false);
    dialog.set_vsync(true);
    dialog.set_compact_layout(true);

    assert!(dialog.restore_defaults(&LogNotifier::new(true)));

    assert!(!dialog.ignore_errors());
    assert!(!dialog.z_buffer());
    assert!(!dialog.auto_line());
    assert!(dialog.vsync());
    assert!(dialog.compact_layout());
}
