//! Settings binding
//!
//! Bridges [`SettingsDialog`] (the controls) with [`Config`] (the persisted
//! settings): fills the dialog from a configuration before it opens and reads
//! the edited values back after it is accepted.

use grblpanel_settings::{Config, USER_COMMAND_SLOTS};

use crate::dialog::SettingsDialog;
use crate::error::DialogResult;

/// Settings binding layer
#[derive(Debug, Clone, Default)]
pub struct SettingsBinding {
    config: Config,
}

impl SettingsBinding {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    /// Populate every control and the hotkey table from the config
    pub fn populate_dialog(&self, dialog: &mut SettingsDialog) {
        self.populate_values(dialog);
        dialog.set_hotkeys(&self.config.ui.hotkeys);
    }

    /// Populate every control, leaving the hotkey table alone
    pub(crate) fn populate_values(&self, dialog: &mut SettingsDialog) {
        self.add_connection_settings(dialog);
        self.add_machine_settings(dialog);
        self.add_control_settings(dialog);
        self.add_visualizer_settings(dialog);
        self.add_color_settings(dialog);
        self.add_ui_settings(dialog);
        tracing::debug!("Populated settings dialog from config");
    }

    /// Read the dialog back into the config and validate the result
    pub fn load_into_config(&mut self, dialog: &SettingsDialog) -> DialogResult<()> {
        self.update_connection_settings(dialog);
        self.update_machine_settings(dialog);
        self.update_control_settings(dialog);
        self.update_visualizer_settings(dialog);
        self.update_color_settings(dialog);
        self.update_ui_settings(dialog);

        self.config.validate()?;
        Ok(())
    }

    fn add_connection_settings(&self, dialog: &mut SettingsDialog) {
        let connection = &self.config.connection;
        dialog.set_ip_address(connection.ip_address.clone());
        dialog.set_port(connection.port);
    }

    fn add_machine_settings(&self, dialog: &mut SettingsDialog) {
        let sender = &self.config.sender;
        dialog.set_ignore_errors(sender.ignore_errors);
        dialog.set_auto_line(sender.auto_line);
        dialog.set_use_m6(sender.use_m6);
        dialog.set_use_rotary_axis(sender.use_rotary_axis);
        dialog.set_reset_after_connect(sender.reset_after_connect);

        let machine = &self.config.machine;
        dialog.set_query_state_time(machine.query_state_time_ms);
        dialog.set_units(machine.units);
        dialog.set_rapid_speed(machine.rapid_speed);
        dialog.set_acceleration(machine.acceleration);
        dialog.set_spindle_speed_min(machine.spindle_speed_min);
        dialog.set_spindle_speed_max(machine.spindle_speed_max);
        dialog.set_laser_power_min(machine.laser_power_min);
        dialog.set_laser_power_max(machine.laser_power_max);

        dialog.set_probing_feed(self.config.heightmap.probing_feed);
    }

    fn add_control_settings(&self, dialog: &mut SettingsDialog) {
        let control = &self.config.control;
        dialog.set_touch_command(control.touch_command.clone());
        dialog.set_safe_position_command(control.safe_position_command.clone());
        dialog.set_move_on_restore(control.move_on_restore);
        dialog.set_restore_mode(control.restore_mode);

        for (slot, command) in control.user_commands.iter().enumerate() {
            if let Err(e) = dialog.set_user_command(slot, command.clone()) {
                tracing::warn!("{}", e);
            }
        }
    }

    fn add_visualizer_settings(&self, dialog: &mut SettingsDialog) {
        let parser = &self.config.parser;
        dialog.set_arc_approximation(parser.arc_approximation);
        dialog.set_arc_length(parser.arc_length);
        dialog.set_arc_degree(parser.arc_degree);

        let visualizer = &self.config.visualizer;
        dialog.set_line_width(visualizer.line_width);
        dialog.set_antialiasing(visualizer.antialiasing);
        dialog.set_smoothing(visualizer.smoothing);
        dialog.set_simplify(visualizer.simplify);
        dialog.set_simplify_precision(visualizer.simplify_precision);
        dialog.set_fps(visualizer.fps);
        dialog.set_vsync(visualizer.vsync);
        dialog.set_z_buffer(visualizer.z_buffer);
        dialog.set_grayscale_segments(visualizer.grayscale_segments);
        dialog.set_grayscale_code(visualizer.grayscale_code);
        dialog.set_draw_mode(visualizer.draw_mode);

        let tool = &self.config.tool;
        dialog.set_tool_type(tool.tool_type);
        dialog.set_tool_angle(tool.angle);
        dialog.set_tool_diameter(tool.diameter);
        dialog.set_tool_length(tool.length);

        let console = &self.config.console;
        dialog.set_show_program_commands(console.show_program_commands);
        dialog.set_show_ui_commands(console.show_ui_commands);
        dialog.set_autocompletion(console.autocompletion);

        let panels = &self.config.panels;
        dialog.set_panel_user_commands(panels.user_commands);
        dialog.set_panel_heightmap(panels.heightmap);
        dialog.set_panel_spindle(panels.spindle);
        dialog.set_panel_overriding(panels.overriding);
        dialog.set_panel_jog(panels.jog);
        dialog.set_compact_layout(panels.compact_layout);
    }

    fn add_color_settings(&self, dialog: &mut SettingsDialog) {
        let colors = &self.config.colors;
        dialog.set_tool_color(colors.tool);
        dialog.set_visualizer_background_color(colors.visualizer_background);
        dialog.set_visualizer_text_color(colors.visualizer_text);
        dialog.set_toolpath_normal_color(colors.toolpath_normal);
        dialog.set_toolpath_drawn_color(colors.toolpath_drawn);
        dialog.set_toolpath_highlight_color(colors.toolpath_highlight);
        dialog.set_toolpath_z_movement_color(colors.toolpath_z_movement);
        dialog.set_toolpath_start_color(colors.toolpath_start);
        dialog.set_toolpath_end_color(colors.toolpath_end);
    }

    fn add_ui_settings(&self, dialog: &mut SettingsDialog) {
        dialog.set_font_size(self.config.ui.font_size);
    }

    fn update_connection_settings(&mut self, dialog: &SettingsDialog) {
        let connection = &mut self.config.connection;
        connection.ip_address = dialog.ip_address().trim().to_string();
        connection.port = dialog.port();
    }

    fn update_machine_settings(&mut self, dialog: &SettingsDialog) {
        let sender = &mut self.config.sender;
        sender.ignore_errors = dialog.ignore_errors();
        sender.auto_line = dialog.auto_line();
        sender.use_m6 = dialog.use_m6();
        sender.use_rotary_axis = dialog.use_rotary_axis();
        sender.reset_after_connect = dialog.reset_after_connect();

        let machine = &mut self.config.machine;
        machine.query_state_time_ms = dialog.query_state_time();
        machine.units = dialog.units();
        machine.rapid_speed = dialog.rapid_speed();
        machine.acceleration = dialog.acceleration();
        machine.spindle_speed_min = dialog.spindle_speed_min();
        machine.spindle_speed_max = dialog.spindle_speed_max();
        machine.laser_power_min = dialog.laser_power_min();
        machine.laser_power_max = dialog.laser_power_max();

        self.config.heightmap.probing_feed = dialog.probing_feed();
    }

    fn update_control_settings(&mut self, dialog: &SettingsDialog) {
        let control = &mut self.config.control;
        control.touch_command = dialog.touch_command();
        control.safe_position_command = dialog.safe_position_command();
        control.move_on_restore = dialog.move_on_restore();
        control.restore_mode = dialog.restore_mode();

        for slot in 0..USER_COMMAND_SLOTS {
            if let Some(command) = dialog.user_command(slot) {
                control.user_commands[slot] = command;
            }
        }
    }

    fn update_visualizer_settings(&mut self, dialog: &SettingsDialog) {
        let parser = &mut self.config.parser;
        parser.arc_approximation = dialog.arc_approximation();
        parser.arc_length = dialog.arc_length();
        parser.arc_degree = dialog.arc_degree();

        let visualizer = &mut self.config.visualizer;
        visualizer.line_width = dialog.line_width();
        visualizer.antialiasing = dialog.antialiasing();
        visualizer.smoothing = dialog.smoothing();
        visualizer.simplify = dialog.simplify();
        visualizer.simplify_precision = dialog.simplify_precision();
        visualizer.fps = dialog.fps();
        visualizer.vsync = dialog.vsync();
        visualizer.z_buffer = dialog.z_buffer();
        visualizer.grayscale_segments = dialog.grayscale_segments();
        visualizer.grayscale_code = dialog.grayscale_code();
        visualizer.draw_mode = dialog.draw_mode();

        let tool = &mut self.config.tool;
        tool.tool_type = dialog.tool_type();
        tool.angle = dialog.tool_angle();
        tool.diameter = dialog.tool_diameter();
        tool.length = dialog.tool_length();

        let console = &mut self.config.console;
        console.show_program_commands = dialog.show_program_commands();
        console.show_ui_commands = dialog.show_ui_commands();
        console.autocompletion = dialog.autocompletion();

        let panels = &mut self.config.panels;
        panels.user_commands = dialog.panel_user_commands();
        panels.heightmap = dialog.panel_heightmap();
        panels.spindle = dialog.panel_spindle();
        panels.overriding = dialog.panel_overriding();
        panels.jog = dialog.panel_jog();
        panels.compact_layout = dialog.compact_layout();
    }

    fn update_color_settings(&mut self, dialog: &SettingsDialog) {
        let colors = &mut self.config.colors;
        colors.tool = dialog.tool_color();
        colors.visualizer_background = dialog.visualizer_background_color();
        colors.visualizer_text = dialog.visualizer_text_color();
        colors.toolpath_normal = dialog.toolpath_normal_color();
        colors.toolpath_drawn = dialog.toolpath_drawn_color();
        colors.toolpath_highlight = dialog.toolpath_highlight_color();
        colors.toolpath_z_movement = dialog.toolpath_z_movement_color();
        colors.toolpath_start = dialog.toolpath_start_color();
        colors.toolpath_end = dialog.toolpath_end_color();
    }

    fn update_ui_settings(&mut self, dialog: &SettingsDialog) {
        // Hotkeys are display-only and stay as configured
        self.config.ui.font_size = dialog.font_size();
    }
}
