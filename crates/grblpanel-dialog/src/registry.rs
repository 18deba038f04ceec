//! Control registry
//!
//! Every control in the dialog is named by a variant of one of the field
//! enums below. The registry builds one control per variant, in declaration
//! order, and never adds or removes controls afterwards. That order is the
//! order the snapshot engine records and restores values in.

use std::ops::RangeInclusive;

use grblpanel_settings::{
    ArcApproximation, DrawMode, GrayscaleCode, RestoreMode, Smoothing, ToolType,
    EDITABLE_NUMBER_RANGE,
};

use crate::controls::{BooleanControl, ChoiceControl, ColorControl, NumericControl, TextControl};
use crate::layout::CategoryId;

macro_rules! fields {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($key:literal, $category:ident)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every field in registry order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Position of the control within its kind
            pub fn index(self) -> usize {
                self as usize
            }

            /// Stable dotted key, matching the persisted setting
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Category whose group holds the control
            pub fn category(self) -> CategoryId {
                match self {
                    $($name::$variant => CategoryId::$category),+
                }
            }
        }
    };
}

fields! {
    /// Spin boxes
    NumericField {
        Port => ("connection.port", Connection),
        QueryStateTime => ("machine.query_state_time_ms", Machine),
        RapidSpeed => ("machine.rapid_speed", Machine),
        Acceleration => ("machine.acceleration", Machine),
        SpindleSpeedMin => ("machine.spindle_speed_min", Machine),
        SpindleSpeedMax => ("machine.spindle_speed_max", Machine),
        LaserPowerMin => ("machine.laser_power_min", Machine),
        LaserPowerMax => ("machine.laser_power_max", Machine),
        ProbingFeed => ("heightmap.probing_feed", Heightmap),
        ArcLength => ("parser.arc_length", Parser),
        ArcDegree => ("parser.arc_degree", Parser),
        LineWidth => ("visualizer.line_width", Visualizer),
        SimplifyPrecision => ("visualizer.simplify_precision", Visualizer),
        ToolAngle => ("tool.angle", ToolModel),
        ToolDiameter => ("tool.diameter", ToolModel),
        ToolLength => ("tool.length", ToolModel),
    }
}

impl NumericField {
    /// Accepted range and number of decimals
    pub fn bounds(self) -> (RangeInclusive<f64>, u32) {
        match self {
            Self::Port => (1.0..=65535.0, 0),
            Self::QueryStateTime => (1.0..=10000.0, 0),
            Self::RapidSpeed => (0.0..=100000.0, 0),
            Self::Acceleration => (0.0..=100000.0, 0),
            Self::SpindleSpeedMin | Self::SpindleSpeedMax => (0.0..=100000.0, 0),
            Self::LaserPowerMin | Self::LaserPowerMax => (0.0..=100000.0, 0),
            Self::ProbingFeed => (0.0..=100000.0, 0),
            Self::ArcLength => (0.0..=99.0, 2),
            Self::ArcDegree => (0.0..=180.0, 2),
            Self::LineWidth => (0.1..=99.0, 1),
            Self::SimplifyPrecision => (0.0..=99.0, 2),
            Self::ToolAngle => (0.0..=180.0, 1),
            Self::ToolDiameter => (0.01..=100.0, 2),
            Self::ToolLength => (0.0..=1000.0, 1),
        }
    }
}

fields! {
    /// Check boxes
    FlagField {
        IgnoreErrors => ("sender.ignore_errors", Sender),
        AutoLine => ("sender.auto_line", Sender),
        UseM6 => ("sender.use_m6", Sender),
        UseRotaryAxis => ("sender.use_rotary_axis", Sender),
        ResetAfterConnect => ("sender.reset_after_connect", Sender),
        MoveOnRestore => ("control.move_on_restore", Control),
        Antialiasing => ("visualizer.antialiasing", Visualizer),
        Simplify => ("visualizer.simplify", Visualizer),
        Vsync => ("visualizer.vsync", Visualizer),
        ZBuffer => ("visualizer.z_buffer", Visualizer),
        GrayscaleSegments => ("visualizer.grayscale_segments", Visualizer),
        ShowProgramCommands => ("console.show_program_commands", Console),
        ShowUiCommands => ("console.show_ui_commands", Console),
        Autocompletion => ("console.autocompletion", Console),
        PanelUserCommands => ("panels.user_commands", Panels),
        PanelHeightmap => ("panels.heightmap", Panels),
        PanelSpindle => ("panels.spindle", Panels),
        PanelOverriding => ("panels.overriding", Panels),
        PanelJog => ("panels.jog", Panels),
        CompactLayout => ("panels.compact_layout", Panels),
    }
}

fields! {
    /// Drop-down lists, including the two-option selectors
    ChoiceField {
        Units => ("machine.units", Machine),
        RestoreMode => ("control.restore_mode", Control),
        ArcApproximation => ("parser.arc_approximation", Parser),
        Smoothing => ("visualizer.smoothing", Visualizer),
        Fps => ("visualizer.fps", Visualizer),
        GrayscaleCode => ("visualizer.grayscale_code", Visualizer),
        DrawMode => ("visualizer.draw_mode", Visualizer),
        ToolType => ("tool.tool_type", ToolModel),
        FontSize => ("ui.font_size", Font),
    }
}

const UNIT_LABELS: &[&str] = &["Metric", "Imperial"];
const FPS_OPTIONS: &[&str] = &["30", "60", "120"];
const FONT_SIZE_OPTIONS: &[&str] = &["8", "9", "10", "11", "12", "14"];

impl ChoiceField {
    fn build(self) -> ChoiceControl {
        let key = self.key();
        match self {
            Self::Units => ChoiceControl::new(key, UNIT_LABELS),
            Self::RestoreMode => ChoiceControl::new(key, RestoreMode::LABELS),
            Self::ArcApproximation => ChoiceControl::new(key, ArcApproximation::LABELS),
            Self::Smoothing => ChoiceControl::new(key, Smoothing::LABELS),
            Self::Fps => ChoiceControl::editable(key, FPS_OPTIONS, EDITABLE_NUMBER_RANGE),
            Self::GrayscaleCode => ChoiceControl::new(key, GrayscaleCode::LABELS),
            Self::DrawMode => ChoiceControl::new(key, DrawMode::LABELS),
            Self::ToolType => ChoiceControl::new(key, ToolType::LABELS),
            Self::FontSize => {
                ChoiceControl::editable(key, FONT_SIZE_OPTIONS, EDITABLE_NUMBER_RANGE)
            }
        }
    }
}

fields! {
    /// Color pickers
    ColorField {
        Tool => ("colors.tool", Colors),
        VisualizerBackground => ("colors.visualizer_background", Colors),
        VisualizerText => ("colors.visualizer_text", Colors),
        ToolpathNormal => ("colors.toolpath_normal", Colors),
        ToolpathDrawn => ("colors.toolpath_drawn", Colors),
        ToolpathHighlight => ("colors.toolpath_highlight", Colors),
        ToolpathZMovement => ("colors.toolpath_z_movement", Colors),
        ToolpathStart => ("colors.toolpath_start", Colors),
        ToolpathEnd => ("colors.toolpath_end", Colors),
    }
}

fields! {
    /// Free-text entries, kept out of the snapshot
    TextField {
        IpAddress => ("connection.ip_address", Connection),
        TouchCommand => ("control.touch_command", Control),
        SafePositionCommand => ("control.safe_position_command", Control),
        UserCommand1 => ("control.user_commands.0", UserCommands),
        UserCommand2 => ("control.user_commands.1", UserCommands),
        UserCommand3 => ("control.user_commands.2", UserCommands),
        UserCommand4 => ("control.user_commands.3", UserCommands),
    }
}

impl TextField {
    /// User command slots in slot order
    pub const USER_COMMANDS: [TextField; 4] = [
        TextField::UserCommand1,
        TextField::UserCommand2,
        TextField::UserCommand3,
        TextField::UserCommand4,
    ];
}

/// Owns every control of the dialog
#[derive(Debug, Clone, PartialEq)]
pub struct ControlRegistry {
    numerics: Vec<NumericControl>,
    flags: Vec<BooleanControl>,
    choices: Vec<ChoiceControl>,
    colors: Vec<ColorControl>,
    texts: Vec<TextControl>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        let numerics = NumericField::ALL
            .iter()
            .map(|field| {
                let (range, decimals) = field.bounds();
                NumericControl::new(field.key(), range, decimals)
            })
            .collect();
        let flags = FlagField::ALL
            .iter()
            .map(|field| BooleanControl::new(field.key()))
            .collect();
        let choices = ChoiceField::ALL.iter().map(|field| field.build()).collect();
        let colors = ColorField::ALL
            .iter()
            .map(|field| ColorControl::new(field.key()))
            .collect();
        let texts = TextField::ALL
            .iter()
            .map(|field| TextControl::new(field.key()))
            .collect();

        let registry = Self {
            numerics,
            flags,
            choices,
            colors,
            texts,
        };
        tracing::debug!(
            "Built control registry: {} numeric, {} boolean, {} choice, {} color, {} text",
            registry.numerics.len(),
            registry.flags.len(),
            registry.choices.len(),
            registry.colors.len(),
            registry.texts.len()
        );
        registry
    }

    pub fn numeric(&self, field: NumericField) -> &NumericControl {
        &self.numerics[field.index()]
    }

    pub fn numeric_mut(&mut self, field: NumericField) -> &mut NumericControl {
        &mut self.numerics[field.index()]
    }

    pub fn flag(&self, field: FlagField) -> &BooleanControl {
        &self.flags[field.index()]
    }

    pub fn flag_mut(&mut self, field: FlagField) -> &mut BooleanControl {
        &mut self.flags[field.index()]
    }

    pub fn choice(&self, field: ChoiceField) -> &ChoiceControl {
        &self.choices[field.index()]
    }

    pub fn choice_mut(&mut self, field: ChoiceField) -> &mut ChoiceControl {
        &mut self.choices[field.index()]
    }

    pub fn color(&self, field: ColorField) -> &ColorControl {
        &self.colors[field.index()]
    }

    pub fn color_mut(&mut self, field: ColorField) -> &mut ColorControl {
        &mut self.colors[field.index()]
    }

    pub fn text(&self, field: TextField) -> &TextControl {
        &self.texts[field.index()]
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut TextControl {
        &mut self.texts[field.index()]
    }

    pub fn numerics(&self) -> &[NumericControl] {
        &self.numerics
    }

    pub fn numerics_mut(&mut self) -> &mut [NumericControl] {
        &mut self.numerics
    }

    pub fn flags(&self) -> &[BooleanControl] {
        &self.flags
    }

    pub fn flags_mut(&mut self) -> &mut [BooleanControl] {
        &mut self.flags
    }

    pub fn choices(&self) -> &[ChoiceControl] {
        &self.choices
    }

    pub fn choices_mut(&mut self) -> &mut [ChoiceControl] {
        &mut self.choices
    }

    pub fn colors(&self) -> &[ColorControl] {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut [ColorControl] {
        &mut self.colors
    }

    /// Number of control rows shown in a category's group
    pub fn rows_in(&self, category: CategoryId) -> usize {
        let numerics = NumericField::ALL.iter().filter(|f| f.category() == category).count();
        let flags = FlagField::ALL.iter().filter(|f| f.category() == category).count();
        let choices = ChoiceField::ALL.iter().filter(|f| f.category() == category).count();
        let colors = ColorField::ALL.iter().filter(|f| f.category() == category).count();
        let texts = TextField::ALL.iter().filter(|f| f.category() == category).count();
        numerics + flags + choices + colors + texts
    }
}

impl Default for ControlRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::ValueControl;

    #[test]
    fn test_one_control_per_field_in_order() {
        let registry = ControlRegistry::new();
        assert_eq!(registry.numerics().len(), NumericField::ALL.len());
        assert_eq!(registry.flags().len(), 20);
        assert_eq!(registry.choices().len(), 9);
        assert_eq!(registry.colors().len(), 9);

        for (control, field) in registry.numerics().iter().zip(NumericField::ALL) {
            assert_eq!(control.key(), field.key());
        }
        for (control, field) in registry.choices().iter().zip(ChoiceField::ALL) {
            assert_eq!(control.key(), field.key());
        }
    }

    #[test]
    fn test_typed_access() {
        let mut registry = ControlRegistry::new();
        registry.numeric_mut(NumericField::Port).set_value(8080.0);
        assert_eq!(registry.numeric(NumericField::Port).value(), 8080.0);

        registry.choice_mut(ChoiceField::DrawMode).set_value("Raster".to_string());
        assert_eq!(registry.choice(ChoiceField::DrawMode).current_index(), Some(1));

        registry.text_mut(TextField::IpAddress).set_text("10.0.0.2");
        assert_eq!(registry.text(TextField::IpAddress).text(), "10.0.0.2");
    }

    #[test]
    fn test_editable_choices() {
        let registry = ControlRegistry::new();
        assert!(registry.choice(ChoiceField::Fps).is_editable());
        assert!(registry.choice(ChoiceField::FontSize).is_editable());
        assert!(!registry.choice(ChoiceField::Units).is_editable());
    }

    #[test]
    fn test_rows_per_category() {
        let registry = ControlRegistry::new();
        assert_eq!(registry.rows_in(CategoryId::Sender), 5);
        assert_eq!(registry.rows_in(CategoryId::UserCommands), 4);
        assert_eq!(registry.rows_in(CategoryId::Font), 1);
        assert_eq!(registry.rows_in(CategoryId::Hotkeys), 0);
    }
}
