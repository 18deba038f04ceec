//! Style derived from the dialog's font setting.
//!
//! Font changes are published as [`grblpanel_core::UiEvent::FontSizeChanged`];
//! a theme component subscribes and applies them. This value object is what
//! the dialog last published.

/// Font size applied when nothing else has been chosen
pub const DEFAULT_FONT_SIZE: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleConfig {
    /// Font size in points
    pub font_size: u32,
}

impl StyleConfig {
    pub fn new(font_size: u32) -> Self {
        Self { font_size }
    }

    /// Stylesheet fragment for toolkits that take one
    pub fn stylesheet(&self) -> String {
        format!("font-size: {}pt", self.font_size)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE)
    }
}
