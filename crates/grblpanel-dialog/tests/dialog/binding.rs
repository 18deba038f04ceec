use grblpanel_core::Rgb;
use grblpanel_dialog::{DialogError, SettingsBinding, SettingsDialog};
use grblpanel_settings::{Config, ConfigError, DrawMode, SettingsManager, ToolType};
use tempfile::TempDir;

fn custom_config() -> Config {
    let mut config = Config::default();
    config.connection.ip_address = "10.0.0.7".to_string();
    config.connection.port = 8080;
    config.machine.rapid_speed = 3500;
    config.control.user_commands[1] = "G28".to_string();
    config.visualizer.fps = 144;
    config.visualizer.draw_mode = DrawMode::Raster;
    config.tool.tool_type = ToolType::Flat;
    config.colors.tool = Rgb::new(0, 128, 255);
    config.ui.font_size = 11;
    config.ui.hotkeys = vec!["F1:Help".to_string()];
    config
}

#[test]
fn test_populate_then_load_preserves_config() {
    let config = custom_config();
    let mut dialog = SettingsDialog::new(&config.dialog);
    SettingsBinding::new(config.clone()).populate_dialog(&mut dialog);

    assert_eq!(dialog.ip_address(), "10.0.0.7");
    assert_eq!(dialog.fps(), 144);
    assert!(!dialog.tool_angle_enabled());
    assert!(!dialog.simplify_enabled());
    assert_eq!(dialog.style().font_size, 11);

    let mut binding = SettingsBinding::new(Config::default());
    binding.load_into_config(&dialog).expect("load");

    let mut expected = config;
    expected.ui.hotkeys = Config::default().ui.hotkeys;
    assert_eq!(binding.config(), &expected);
}

#[test]
fn test_hotkeys_are_not_written_back() {
    let mut config = Config::default();
    config.ui.hotkeys = vec![
        "Ctrl+S".to_string(),
        "F1:Help".to_string(),
        "a:b:c".to_string(),
    ];

    let mut dialog = SettingsDialog::new(&config.dialog);
    let mut binding = SettingsBinding::new(config.clone());
    binding.populate_dialog(&mut dialog);
    assert_eq!(dialog.hotkeys().len(), 3);
    assert!(dialog.hotkeys().rows()[0].key.is_empty());
    assert!(dialog.hotkeys().rows()[2].key.is_empty());

    dialog.open().expect("open");
    dialog.accept().expect("accept");
    binding.load_into_config(&dialog).expect("load");

    assert_eq!(binding.config().ui.hotkeys, config.ui.hotkeys);
}

#[test]
fn test_cancelled_edits_never_reach_config() {
    let config = custom_config();
    let mut dialog = SettingsDialog::new(&config.dialog);
    let mut binding = SettingsBinding::new(config.clone());
    binding.populate_dialog(&mut dialog);

    dialog.open().expect("open");
    dialog.set_rapid_speed(100);
    dialog.set_tool_color(Rgb::BLACK);
    dialog.cancel().expect("cancel");

    binding.load_into_config(&dialog).expect("load");
    assert_eq!(binding.into_config(), config);
}

#[test]
fn test_load_rejects_inverted_range() {
    let mut dialog = SettingsDialog::new(&Config::default().dialog);
    dialog.set_laser_power_min(80);
    dialog.set_laser_power_max(20);

    let mut binding = SettingsBinding::default();
    let err = binding.load_into_config(&dialog).unwrap_err();
    assert!(matches!(
        err,
        DialogError::InvalidSettings(ConfigError::InvertedRange { .. })
    ));
}

#[test]
fn test_accepted_settings_saved_to_disk() {
    let temp_dir = TempDir::new().expect("temp dir");
    let manager = SettingsManager::with_path(temp_dir.path().join("settings.toml"));

    let mut dialog = SettingsDialog::new(&Config::default().dialog);
    let mut binding = SettingsBinding::new(manager.load_or_default().expect("load"));
    binding.populate_dialog(&mut dialog);

    dialog.open().expect("open");
    dialog.set_probing_feed(25);
    dialog.set_user_command(0, "G0 Z5").expect("slot");
    dialog.accept().expect("accept");

    binding.load_into_config(&dialog).expect("load");
    manager.save(binding.config()).expect("save");

    let reloaded = manager.load_or_default().expect("reload");
    assert_eq!(reloaded.heightmap.probing_feed, 25);
    assert_eq!(reloaded.control.user_commands[0], "G0 Z5");
}
