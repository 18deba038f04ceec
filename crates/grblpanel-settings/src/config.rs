//! Configuration for GrblPanel
//!
//! The persisted counterpart of the settings dialog. Each section mirrors one
//! category of the dialog:
//! - Connection (network address and port)
//! - Sender and machine behaviour
//! - Control commands and user command slots
//! - Heightmap, parser, visualizer and tool model preferences
//! - Console, panels, colors and font
//! - Dialog behaviour (layout metrics, network test)
//!
//! Supports JSON and TOML files, chosen by extension.

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use grblpanel_core::units::MeasurementSystem;
use grblpanel_core::Rgb;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of user command slots shown in the dialog
pub const USER_COMMAND_SLOTS: usize = 4;

/// Bounds shared by the editable fps and font size drop-downs
pub const EDITABLE_NUMBER_RANGE: std::ops::RangeInclusive<u32> = 1..=999;

/// Declares a two-way mapping between a settings enum and the option index of
/// the drop-down that edits it.
macro_rules! indexed_choice {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// Drop-down labels in option order
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            const VARIANTS: &'static [$name] = &[$($name::$variant),+];

            /// Position of this value in the drop-down
            pub fn index(self) -> usize {
                Self::VARIANTS
                    .iter()
                    .position(|v| *v == self)
                    .unwrap_or(0)
            }

            /// Value at a drop-down position; out-of-range indices give the first option
            pub fn from_index(index: usize) -> Self {
                Self::VARIANTS.get(index).copied().unwrap_or(Self::VARIANTS[0])
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", Self::LABELS[self.index()])
            }
        }
    };
}

/// Where to move after restoring a paused job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestoreMode {
    #[default]
    Plane,
    PlaneAndZ,
}

indexed_choice!(RestoreMode { Plane => "Plane", PlaneAndZ => "Plane and Z" });

/// How arcs are split into segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcApproximation {
    /// Fixed segment length
    Length,
    /// Fixed segment angle
    #[default]
    Degree,
}

indexed_choice!(ArcApproximation { Length => "By length", Degree => "By angle" });

/// Line smoothing technique used by the visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Smoothing {
    #[default]
    Msaa,
    SmoothLines,
}

indexed_choice!(Smoothing { Msaa => "MSAA", SmoothLines => "Smooth lines" });

/// G-code word carrying grayscale intensity for raster jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrayscaleCode {
    #[default]
    S,
    Z,
}

indexed_choice!(GrayscaleCode { S => "S", Z => "Z" });

/// Toolpath drawing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    #[default]
    Vectors,
    Raster,
}

indexed_choice!(DrawMode { Vectors => "Vectors", Raster => "Raster" });

/// Shape of the tool model drawn in the visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    Flat,
    #[default]
    Conic,
}

indexed_choice!(ToolType { Flat => "Flat", Conic => "Conic" });

/// Network connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Controller IPv4 address
    pub ip_address: String,
    /// Controller TCP port
    pub port: u16,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            ip_address: "192.168.1.20".to_string(),
            port: 23,
        }
    }
}

/// G-code streaming behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderSettings {
    pub ignore_errors: bool,
    /// Append line numbers automatically
    pub auto_line: bool,
    /// Pause on M6 tool changes
    pub use_m6: bool,
    pub use_rotary_axis: bool,
    pub reset_after_connect: bool,
}

impl Default for SenderSettings {
    fn default() -> Self {
        Self {
            ignore_errors: false,
            auto_line: true,
            use_m6: false,
            use_rotary_axis: false,
            reset_after_connect: false,
        }
    }
}

/// Machine limits and polling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineSettings {
    /// Status query interval in milliseconds
    pub query_state_time_ms: u32,
    pub units: MeasurementSystem,
    /// Rapid speed in units/min
    pub rapid_speed: u32,
    /// Acceleration in units/s²
    pub acceleration: u32,
    pub spindle_speed_min: u32,
    pub spindle_speed_max: u32,
    pub laser_power_min: u32,
    pub laser_power_max: u32,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            query_state_time_ms: 40,
            units: MeasurementSystem::Metric,
            rapid_speed: 2000,
            acceleration: 100,
            spindle_speed_min: 0,
            spindle_speed_max: 10000,
            laser_power_min: 0,
            laser_power_max: 100,
        }
    }
}

/// Probe, safe position and user command templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    pub touch_command: String,
    pub safe_position_command: String,
    pub move_on_restore: bool,
    pub restore_mode: RestoreMode,
    pub user_commands: [String; USER_COMMAND_SLOTS],
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            touch_command: "G21G91G38.2Z-30F100; G0Z1; G38.2Z-2F10".to_string(),
            safe_position_command: "G21G90; G53G0Z0".to_string(),
            move_on_restore: false,
            restore_mode: RestoreMode::Plane,
            user_commands: Default::default(),
        }
    }
}

/// Heightmap probing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightmapSettings {
    /// Probing feed rate in units/min
    pub probing_feed: u32,
}

impl Default for HeightmapSettings {
    fn default() -> Self {
        Self { probing_feed: 10 }
    }
}

/// G-code parser arc approximation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    pub arc_approximation: ArcApproximation,
    /// Segment length in mm, used in [`ArcApproximation::Length`] mode
    pub arc_length: f64,
    /// Segment angle in degrees, used in [`ArcApproximation::Degree`] mode
    pub arc_degree: f64,
}

impl ParserSettings {
    /// Precision of whichever approximation mode is active
    pub fn arc_precision(&self) -> f64 {
        match self.arc_approximation {
            ArcApproximation::Length => self.arc_length,
            ArcApproximation::Degree => self.arc_degree,
        }
    }
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            arc_approximation: ArcApproximation::Degree,
            arc_length: 0.0,
            arc_degree: 5.0,
        }
    }
}

/// 3D visualizer preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerSettings {
    pub line_width: f64,
    pub antialiasing: bool,
    pub smoothing: Smoothing,
    pub simplify: bool,
    pub simplify_precision: f64,
    pub fps: u32,
    pub vsync: bool,
    pub z_buffer: bool,
    pub grayscale_segments: bool,
    pub grayscale_code: GrayscaleCode,
    pub draw_mode: DrawMode,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            line_width: 1.5,
            antialiasing: true,
            smoothing: Smoothing::Msaa,
            simplify: true,
            simplify_precision: 0.0,
            fps: 60,
            vsync: false,
            z_buffer: false,
            grayscale_segments: false,
            grayscale_code: GrayscaleCode::S,
            draw_mode: DrawMode::Vectors,
        }
    }
}

/// Tool model drawn in the visualizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub tool_type: ToolType,
    /// Tip angle in degrees (conic tools only)
    pub angle: f64,
    pub diameter: f64,
    pub length: f64,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool_type: ToolType::Conic,
            angle: 15.0,
            diameter: 3.0,
            length: 30.0,
        }
    }
}

/// Console output preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSettings {
    pub show_program_commands: bool,
    pub show_ui_commands: bool,
    pub autocompletion: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            show_program_commands: false,
            show_ui_commands: false,
            autocompletion: true,
        }
    }
}

/// Main window panel visibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    pub user_commands: bool,
    pub heightmap: bool,
    pub spindle: bool,
    pub overriding: bool,
    pub jog: bool,
    pub compact_layout: bool,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            user_commands: true,
            heightmap: true,
            spindle: true,
            overriding: true,
            jog: true,
            compact_layout: false,
        }
    }
}

/// Visualizer colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub tool: Rgb,
    pub visualizer_background: Rgb,
    pub visualizer_text: Rgb,
    pub toolpath_normal: Rgb,
    pub toolpath_drawn: Rgb,
    pub toolpath_highlight: Rgb,
    pub toolpath_z_movement: Rgb,
    pub toolpath_start: Rgb,
    pub toolpath_end: Rgb,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            tool: Rgb::new(255, 153, 0),
            visualizer_background: Rgb::WHITE,
            visualizer_text: Rgb::BLACK,
            toolpath_normal: Rgb::BLACK,
            toolpath_drawn: Rgb::new(217, 217, 217),
            toolpath_highlight: Rgb::new(145, 130, 230),
            toolpath_z_movement: Rgb::RED,
            toolpath_start: Rgb::RED,
            toolpath_end: Rgb::GREEN,
        }
    }
}

/// Application-wide UI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: u32,
    /// Hotkey rows shown in the dialog, encoded as `key:function`
    pub hotkeys: Vec<String>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 9,
            hotkeys: vec![
                "Ctrl+O:Open file".to_string(),
                "Ctrl+S:Save file".to_string(),
                "F5:Send file".to_string(),
                "Esc:Abort".to_string(),
                "Ctrl+H:Home".to_string(),
            ],
        }
    }
}

/// Network reachability test parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkTestSettings {
    /// Probe program, looked up on `PATH`
    pub program: String,
    /// Reply timeout for the single probe
    pub timeout_ms: u64,
}

impl Default for NetworkTestSettings {
    fn default() -> Self {
        Self {
            program: "ping".to_string(),
            timeout_ms: 1500,
        }
    }
}

/// Geometry and behaviour of the settings dialog itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogSettings {
    /// Height of a group box title strip in pixels
    pub title_height: i32,
    /// Height of one settings row in pixels
    pub row_height: i32,
    /// Vertical gap between group boxes in pixels
    pub group_spacing: i32,
    /// Width of a group box in pixels
    pub content_width: i32,
    /// Visible height of the scroll panel in pixels
    pub viewport_height: i32,
    /// Margin kept around a category scrolled into view
    pub ensure_visible_margin: i32,
    pub network_test: NetworkTestSettings,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            title_height: 24,
            row_height: 28,
            group_spacing: 6,
            content_width: 440,
            viewport_height: 480,
            ensure_visible_margin: 50,
            network_test: NetworkTestSettings::default(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub connection: ConnectionSettings,
    pub sender: SenderSettings,
    pub machine: MachineSettings,
    pub control: ControlSettings,
    pub heightmap: HeightmapSettings,
    pub parser: ParserSettings,
    pub visualizer: VisualizerSettings,
    pub tool: ToolSettings,
    pub console: ConsoleSettings,
    pub panels: PanelSettings,
    pub colors: ColorSettings,
    pub ui: UiSettings,
    pub dialog: DialogSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)
            .map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.machine.query_state_time_ms == 0 {
            return Err(out_of_range(
                "machine.query_state_time_ms",
                self.machine.query_state_time_ms,
            ));
        }

        if self.machine.spindle_speed_min > self.machine.spindle_speed_max {
            return Err(ConfigError::InvertedRange {
                key: "machine.spindle_speed".to_string(),
                min: self.machine.spindle_speed_min.to_string(),
                max: self.machine.spindle_speed_max.to_string(),
            });
        }

        if self.machine.laser_power_min > self.machine.laser_power_max {
            return Err(ConfigError::InvertedRange {
                key: "machine.laser_power".to_string(),
                min: self.machine.laser_power_min.to_string(),
                max: self.machine.laser_power_max.to_string(),
            });
        }

        if self.parser.arc_length < 0.0 {
            return Err(out_of_range("parser.arc_length", self.parser.arc_length));
        }

        if self.parser.arc_degree < 0.0 {
            return Err(out_of_range("parser.arc_degree", self.parser.arc_degree));
        }

        if self.visualizer.line_width <= 0.0 {
            return Err(out_of_range(
                "visualizer.line_width",
                self.visualizer.line_width,
            ));
        }

        if !EDITABLE_NUMBER_RANGE.contains(&self.visualizer.fps) {
            return Err(out_of_range("visualizer.fps", self.visualizer.fps));
        }

        if !EDITABLE_NUMBER_RANGE.contains(&self.ui.font_size) {
            return Err(out_of_range("ui.font_size", self.ui.font_size));
        }

        if self.tool.diameter <= 0.0 {
            return Err(out_of_range("tool.diameter", self.tool.diameter));
        }

        if self.dialog.row_height <= 0 || self.dialog.viewport_height <= 0 {
            return Err(out_of_range(
                "dialog.row_height",
                format!("{}/{}", self.dialog.row_height, self.dialog.viewport_height),
            ));
        }

        if self.dialog.network_test.program.trim().is_empty() {
            return Err(ConfigError::Empty(
                "dialog.network_test.program".to_string(),
            ));
        }

        if self.dialog.network_test.timeout_ms == 0 {
            return Err(out_of_range(
                "dialog.network_test.timeout_ms",
                self.dialog.network_test.timeout_ms,
            ));
        }

        Ok(())
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
