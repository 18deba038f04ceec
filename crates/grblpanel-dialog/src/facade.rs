//! Named accessors over the dialog's controls
//!
//! The owning application reads and writes settings through these pairs and
//! never touches controls directly. Every write recomputes dependent
//! enablement and the published font style.

use grblpanel_core::{MeasurementSystem, Rgb};
use grblpanel_settings::{
    ArcApproximation, DrawMode, GrayscaleCode, RestoreMode, Smoothing, ToolType,
    USER_COMMAND_SLOTS,
};

use crate::controls::ValueControl;
use crate::dialog::SettingsDialog;
use crate::error::{DialogError, DialogResult};
use crate::registry::{ChoiceField, ColorField, FlagField, NumericField, TextField};
use crate::style::DEFAULT_FONT_SIZE;

const DEFAULT_FPS: u32 = 60;

macro_rules! flag_accessors {
    ($($getter:ident, $setter:ident => $field:ident;)+) => {
        $(
            pub fn $getter(&self) -> bool {
                self.registry.flag(FlagField::$field).value()
            }

            pub fn $setter(&mut self, value: bool) {
                self.registry.flag_mut(FlagField::$field).set_value(value);
                self.refresh_dependents();
            }
        )+
    };
}

macro_rules! number_accessors {
    ($ty:ty: $($getter:ident, $setter:ident => $field:ident;)+) => {
        $(
            pub fn $getter(&self) -> $ty {
                self.registry.numeric(NumericField::$field).value() as $ty
            }

            pub fn $setter(&mut self, value: $ty) {
                self.registry
                    .numeric_mut(NumericField::$field)
                    .set_value(f64::from(value));
                self.refresh_dependents();
            }
        )+
    };
}

macro_rules! choice_accessors {
    ($($getter:ident, $setter:ident => $field:ident: $ty:ty;)+) => {
        $(
            pub fn $getter(&self) -> $ty {
                <$ty>::from_index(self.choice_index(ChoiceField::$field))
            }

            pub fn $setter(&mut self, value: $ty) {
                self.registry
                    .choice_mut(ChoiceField::$field)
                    .set_current_index(value.index());
                self.refresh_dependents();
            }
        )+
    };
}

macro_rules! color_accessors {
    ($($getter:ident, $setter:ident => $field:ident;)+) => {
        $(
            pub fn $getter(&self) -> Rgb {
                self.registry.color(ColorField::$field).value()
            }

            pub fn $setter(&mut self, value: Rgb) {
                self.registry.color_mut(ColorField::$field).set_value(value);
            }
        )+
    };
}

macro_rules! text_accessors {
    ($($getter:ident, $setter:ident => $field:ident;)+) => {
        $(
            pub fn $getter(&self) -> String {
                self.registry.text(TextField::$field).text().to_string()
            }

            pub fn $setter(&mut self, value: impl Into<String>) {
                self.registry.text_mut(TextField::$field).set_text(value);
            }
        )+
    };
}

impl SettingsDialog {
    text_accessors! {
        ip_address, set_ip_address => IpAddress;
        touch_command, set_touch_command => TouchCommand;
        safe_position_command, set_safe_position_command => SafePositionCommand;
    }

    number_accessors! { u16:
        port, set_port => Port;
    }

    number_accessors! { u32:
        query_state_time, set_query_state_time => QueryStateTime;
        rapid_speed, set_rapid_speed => RapidSpeed;
        acceleration, set_acceleration => Acceleration;
        spindle_speed_min, set_spindle_speed_min => SpindleSpeedMin;
        spindle_speed_max, set_spindle_speed_max => SpindleSpeedMax;
        laser_power_min, set_laser_power_min => LaserPowerMin;
        laser_power_max, set_laser_power_max => LaserPowerMax;
        probing_feed, set_probing_feed => ProbingFeed;
    }

    number_accessors! { f64:
        arc_length, set_arc_length => ArcLength;
        arc_degree, set_arc_degree => ArcDegree;
        line_width, set_line_width => LineWidth;
        simplify_precision, set_simplify_precision => SimplifyPrecision;
        tool_angle, set_tool_angle => ToolAngle;
        tool_diameter, set_tool_diameter => ToolDiameter;
        tool_length, set_tool_length => ToolLength;
    }

    flag_accessors! {
        ignore_errors, set_ignore_errors => IgnoreErrors;
        auto_line, set_auto_line => AutoLine;
        use_m6, set_use_m6 => UseM6;
        use_rotary_axis, set_use_rotary_axis => UseRotaryAxis;
        reset_after_connect, set_reset_after_connect => ResetAfterConnect;
        move_on_restore, set_move_on_restore => MoveOnRestore;
        antialiasing, set_antialiasing => Antialiasing;
        simplify, set_simplify => Simplify;
        vsync, set_vsync => Vsync;
        z_buffer, set_z_buffer => ZBuffer;
        grayscale_segments, set_grayscale_segments => GrayscaleSegments;
        show_program_commands, set_show_program_commands => ShowProgramCommands;
        show_ui_commands, set_show_ui_commands => ShowUiCommands;
        autocompletion, set_autocompletion => Autocompletion;
        panel_user_commands, set_panel_user_commands => PanelUserCommands;
        panel_heightmap, set_panel_heightmap => PanelHeightmap;
        panel_spindle, set_panel_spindle => PanelSpindle;
        panel_overriding, set_panel_overriding => PanelOverriding;
        panel_jog, set_panel_jog => PanelJog;
        compact_layout, set_compact_layout => CompactLayout;
    }

    choice_accessors! {
        units, set_units => Units: MeasurementSystem;
        restore_mode, set_restore_mode => RestoreMode: RestoreMode;
        arc_approximation, set_arc_approximation => ArcApproximation: ArcApproximation;
        smoothing, set_smoothing => Smoothing: Smoothing;
        grayscale_code, set_grayscale_code => GrayscaleCode: GrayscaleCode;
        draw_mode, set_draw_mode => DrawMode: DrawMode;
        tool_type, set_tool_type => ToolType: ToolType;
    }

    color_accessors! {
        tool_color, set_tool_color => Tool;
        visualizer_background_color, set_visualizer_background_color => VisualizerBackground;
        visualizer_text_color, set_visualizer_text_color => VisualizerText;
        toolpath_normal_color, set_toolpath_normal_color => ToolpathNormal;
        toolpath_drawn_color, set_toolpath_drawn_color => ToolpathDrawn;
        toolpath_highlight_color, set_toolpath_highlight_color => ToolpathHighlight;
        toolpath_z_movement_color, set_toolpath_z_movement_color => ToolpathZMovement;
        toolpath_start_color, set_toolpath_start_color => ToolpathStart;
        toolpath_end_color, set_toolpath_end_color => ToolpathEnd;
    }

    /// Arcs are split by angle rather than by length
    pub fn arc_degree_mode(&self) -> bool {
        self.arc_approximation() == ArcApproximation::Degree
    }

    pub fn set_arc_degree_mode(&mut self, degree: bool) {
        self.set_arc_approximation(if degree {
            ArcApproximation::Degree
        } else {
            ArcApproximation::Length
        });
    }

    /// Segment length or angle, whichever mode is active
    pub fn arc_precision(&self) -> f64 {
        if self.arc_degree_mode() {
            self.arc_degree()
        } else {
            self.arc_length()
        }
    }

    pub fn msaa(&self) -> bool {
        self.smoothing() == Smoothing::Msaa
    }

    pub fn set_msaa(&mut self, msaa: bool) {
        self.set_smoothing(if msaa {
            Smoothing::Msaa
        } else {
            Smoothing::SmoothLines
        });
    }

    pub fn grayscale_s_code(&self) -> bool {
        self.grayscale_code() == GrayscaleCode::S
    }

    pub fn set_grayscale_s_code(&mut self, s_code: bool) {
        self.set_grayscale_code(if s_code {
            GrayscaleCode::S
        } else {
            GrayscaleCode::Z
        });
    }

    pub fn draw_mode_vectors(&self) -> bool {
        self.draw_mode() == DrawMode::Vectors
    }

    pub fn set_draw_mode_vectors(&mut self, vectors: bool) {
        self.set_draw_mode(if vectors {
            DrawMode::Vectors
        } else {
            DrawMode::Raster
        });
    }

    pub fn fps(&self) -> u32 {
        self.registry
            .choice(ChoiceField::Fps)
            .value()
            .parse()
            .unwrap_or(DEFAULT_FPS)
    }

    /// Values outside 1..=999 are ignored
    pub fn set_fps(&mut self, fps: u32) {
        self.registry
            .choice_mut(ChoiceField::Fps)
            .set_value(fps.to_string());
        self.refresh_dependents();
    }

    /// Font size in points
    pub fn font_size(&self) -> u32 {
        self.registry
            .choice(ChoiceField::FontSize)
            .value()
            .parse()
            .unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Values outside 1..=999 are ignored
    pub fn set_font_size(&mut self, points: u32) {
        self.registry
            .choice_mut(ChoiceField::FontSize)
            .set_value(points.to_string());
        self.refresh_dependents();
    }

    /// Color picker by its dotted key, e.g. `colors.tool`
    pub fn color_named(&self, key: &str) -> Option<Rgb> {
        ColorField::ALL
            .iter()
            .find(|field| field.key() == key)
            .map(|field| self.registry.color(*field).value())
    }

    /// Command template of a user command slot; `None` outside the slots
    pub fn user_command(&self, slot: usize) -> Option<String> {
        TextField::USER_COMMANDS
            .get(slot)
            .map(|field| self.registry.text(*field).text().to_string())
    }

    pub fn set_user_command(&mut self, slot: usize, command: impl Into<String>) -> DialogResult<()> {
        let field = TextField::USER_COMMANDS
            .get(slot)
            .copied()
            .ok_or(DialogError::UnknownSlot {
                slot,
                slots: USER_COMMAND_SLOTS,
            })?;
        self.registry.text_mut(field).set_text(command);
        Ok(())
    }

    /// Whether the tool angle spin box is editable
    pub fn tool_angle_enabled(&self) -> bool {
        self.registry.numeric(NumericField::ToolAngle).is_enabled()
    }

    pub fn simplify_enabled(&self) -> bool {
        self.registry.flag(FlagField::Simplify).is_enabled()
    }

    pub fn simplify_precision_enabled(&self) -> bool {
        self.registry
            .numeric(NumericField::SimplifyPrecision)
            .is_enabled()
    }
}
