use grblpanel_core::{MeasurementSystem, Rgb};
use grblpanel_dialog::{DialogError, SettingsDialog};
use grblpanel_settings::{ArcApproximation, DialogSettings, GrayscaleCode, Smoothing, ToolType};

fn dialog() -> SettingsDialog {
    SettingsDialog::new(&DialogSettings::default())
}

#[test]
fn test_new_dialog_shows_defaults() {
    let dialog = dialog();
    assert_eq!(dialog.ip_address(), "192.168.1.20");
    assert_eq!(dialog.port(), 23);
    assert_eq!(dialog.query_state_time(), 40);
    assert_eq!(dialog.units(), MeasurementSystem::Metric);
    assert_eq!(dialog.fps(), 60);
    assert_eq!(dialog.font_size(), 9);
    assert_eq!(dialog.tool_type(), ToolType::Conic);
    assert_eq!(dialog.toolpath_end_color(), Rgb::GREEN);
    assert_eq!(dialog.hotkeys().len(), 5);
}

#[test]
fn test_numeric_accessors_clamp() {
    let mut dialog = dialog();
    dialog.set_port(0);
    assert_eq!(dialog.port(), 1);

    dialog.set_arc_length(0.123);
    assert_eq!(dialog.arc_length(), 0.12);

    dialog.set_tool_angle(400.0);
    assert_eq!(dialog.tool_angle(), 180.0);
}

#[test]
fn test_two_option_choices() {
    let mut dialog = dialog();

    assert!(dialog.arc_degree_mode());
    dialog.set_arc_length(0.5);
    dialog.set_arc_degree(7.5);
    assert_eq!(dialog.arc_precision(), 7.5);

    dialog.set_arc_degree_mode(false);
    assert_eq!(dialog.arc_approximation(), ArcApproximation::Length);
    assert_eq!(dialog.arc_precision(), 0.5);

    dialog.set_msaa(false);
    assert_eq!(dialog.smoothing(), Smoothing::SmoothLines);
    assert!(!dialog.msaa());

    dialog.set_grayscale_s_code(false);
    assert_eq!(dialog.grayscale_code(), GrayscaleCode::Z);
    assert!(!dialog.grayscale_s_code());
}

#[test]
fn test_editable_fps() {
    let mut dialog = dialog();
    dialog.set_fps(75);
    assert_eq!(dialog.fps(), 75);

    dialog.set_fps(0);
    dialog.set_fps(1000);
    assert_eq!(dialog.fps(), 75);
}

#[test]
fn test_user_command_slots() {
    let mut dialog = dialog();
    dialog.set_user_command(0, "G0 X0 Y0").expect("slot 0");
    dialog.set_user_command(3, "M5").expect("slot 3");

    assert_eq!(dialog.user_command(0).as_deref(), Some("G0 X0 Y0"));
    assert_eq!(dialog.user_command(3).as_deref(), Some("M5"));
    assert_eq!(dialog.user_command(4), None);

    let err = dialog.set_user_command(4, "M3").unwrap_err();
    assert_eq!(err, DialogError::UnknownSlot { slot: 4, slots: 4 });
}

#[test]
fn test_dependent_enablement() {
    let mut dialog = dialog();
    assert!(dialog.tool_angle_enabled());
    assert!(dialog.simplify_enabled());
    assert!(dialog.simplify_precision_enabled());

    dialog.set_tool_type(ToolType::Flat);
    assert!(!dialog.tool_angle_enabled());

    dialog.set_simplify(false);
    assert!(dialog.simplify_enabled());
    assert!(!dialog.simplify_precision_enabled());

    dialog.set_simplify(true);
    dialog.set_draw_mode_vectors(false);
    assert!(!dialog.simplify_enabled());
    assert!(!dialog.simplify_precision_enabled());
}

#[test]
fn test_hotkey_rows() {
    let mut dialog = dialog();
    dialog.set_hotkeys(&["Ctrl+S", "Ctrl+S:Save"]);

    let rows = dialog.hotkeys().rows();
    assert_eq!(rows[0].key, "");
    assert_eq!(rows[0].function, "");
    assert_eq!(rows[1].key, "Ctrl+S");
    assert_eq!(rows[1].function, "Save");
    assert_eq!(dialog.hotkeys().headers(), ["Key", "Function"]);
}

#[test]
fn test_color_by_key() {
    let mut dialog = dialog();
    dialog.set_visualizer_background_color(Rgb::new(10, 20, 30));

    assert_eq!(
        dialog.color_named("colors.visualizer_background"),
        Some(Rgb::new(10, 20, 30))
    );
    assert_eq!(dialog.color_named("colors.missing"), None);
}
