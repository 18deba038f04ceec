//! Static layout of the settings panel
//!
//! The dialog shows every category as a titled group stacked vertically in
//! one scrollable panel. Categories are fixed; their heights follow from the
//! number of rows each group holds.

use grblpanel_settings::DialogSettings;

use crate::scroll::Region;

/// Settings categories in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryId {
    Connection,
    Sender,
    Machine,
    Control,
    UserCommands,
    Heightmap,
    Parser,
    Visualizer,
    ToolModel,
    Console,
    Panels,
    Colors,
    Font,
    Hotkeys,
}

impl CategoryId {
    pub const ALL: [CategoryId; 14] = [
        CategoryId::Connection,
        CategoryId::Sender,
        CategoryId::Machine,
        CategoryId::Control,
        CategoryId::UserCommands,
        CategoryId::Heightmap,
        CategoryId::Parser,
        CategoryId::Visualizer,
        CategoryId::ToolModel,
        CategoryId::Console,
        CategoryId::Panels,
        CategoryId::Colors,
        CategoryId::Font,
        CategoryId::Hotkeys,
    ];

    /// Group box title
    pub fn title(self) -> &'static str {
        match self {
            Self::Connection => "Connection",
            Self::Sender => "Sender",
            Self::Machine => "Machine information",
            Self::Control => "Control",
            Self::UserCommands => "User commands",
            Self::Heightmap => "Heightmap",
            Self::Parser => "Parser",
            Self::Visualizer => "Visualizer",
            Self::ToolModel => "Tool model",
            Self::Console => "Console",
            Self::Panels => "Panels",
            Self::Colors => "Colors",
            Self::Font => "Font",
            Self::Hotkeys => "Hotkeys",
        }
    }

    /// Stable key used to locate the category's region
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Connection => "connection",
            Self::Sender => "sender",
            Self::Machine => "machine",
            Self::Control => "control",
            Self::UserCommands => "user_commands",
            Self::Heightmap => "heightmap",
            Self::Parser => "parser",
            Self::Visualizer => "visualizer",
            Self::ToolModel => "tool_model",
            Self::Console => "console",
            Self::Panels => "panels",
            Self::Colors => "colors",
            Self::Font => "font",
            Self::Hotkeys => "hotkeys",
        }
    }
}

/// One entry of the navigator list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub identifier: String,
    /// Index in the list, equal to the vertical order of the region
    pub position: usize,
}

impl Category {
    /// All categories in display order
    pub fn all() -> Vec<Category> {
        CategoryId::ALL
            .iter()
            .enumerate()
            .map(|(position, id)| Category {
                id: *id,
                title: id.title().to_string(),
                identifier: id.identifier().to_string(),
                position,
            })
            .collect()
    }
}

/// Pixel metrics used to stack the groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub title_height: i32,
    pub row_height: i32,
    pub group_spacing: i32,
    pub content_width: i32,
}

impl From<&DialogSettings> for LayoutMetrics {
    fn from(settings: &DialogSettings) -> Self {
        Self {
            title_height: settings.title_height,
            row_height: settings.row_height,
            group_spacing: settings.group_spacing,
            content_width: settings.content_width,
        }
    }
}

impl LayoutMetrics {
    /// Stack one region per `(identifier, rows)` pair from the top of the panel
    pub fn stack<'a>(
        &self,
        groups: impl IntoIterator<Item = (&'a str, usize)>,
    ) -> Vec<(String, Region)> {
        let mut top = 0;
        let mut regions = Vec::new();
        for (identifier, rows) in groups {
            let height = self.title_height + self.row_height * rows as i32;
            regions.push((
                identifier.to_string(),
                Region {
                    top,
                    height,
                    width: self.content_width,
                },
            ));
            top += height + self.group_spacing;
        }
        regions
    }
}
