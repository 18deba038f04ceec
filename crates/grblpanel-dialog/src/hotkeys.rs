//! Read-only hotkey table shown in the last category.

/// Column headers of the table
pub const HEADERS: [&str; 2] = ["Key", "Function"];

/// One displayed row; both columns are empty when the source text is malformed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotkeyRow {
    pub key: String,
    pub function: String,
}

impl HotkeyRow {
    /// Parse `"<key>:<function>"`. Anything that does not split into exactly two parts yields an empty row.
    pub fn parse(text: &str) -> Self {
        let parts: Vec<&str> = text.split(':').collect();
        match parts.as_slice() {
            [key, function] => Self {
                key: key.to_string(),
                function: function.to_string(),
            },
            _ => {
                tracing::debug!("Malformed hotkey entry {:?}", text);
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotkeyTable {
    rows: Vec<HotkeyRow>,
}

impl HotkeyTable {
    pub fn headers(&self) -> [&'static str; 2] {
        HEADERS
    }

    pub fn rows(&self) -> &[HotkeyRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace the table contents
    pub fn set_rows<S: AsRef<str>>(&mut self, entries: &[S]) {
        self.rows = entries.iter().map(|e| HotkeyRow::parse(e.as_ref())).collect();
    }
}
