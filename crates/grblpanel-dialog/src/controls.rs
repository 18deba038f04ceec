//! Typed controls
//!
//! Headless counterparts of the widgets placed in the settings dialog. Each
//! control kind that takes part in a snapshot implements [`ValueControl`], so
//! the rollback engine can record and restore any of them without knowing
//! which setting a control edits.

use grblpanel_core::{ControlKind, Rgb};
use std::fmt::Debug;
use std::ops::RangeInclusive;

/// Uniform get/set shape shared by every snapshot-able control kind
pub trait ValueControl {
    /// Value type held by this kind of control
    type Value: Clone + PartialEq + Debug;

    /// Kind reported in snapshot diagnostics
    const KIND: ControlKind;

    /// Stable key of the control
    fn key(&self) -> &'static str;

    /// Current value
    fn value(&self) -> Self::Value;

    /// Assign a value, applying the control's own constraints
    fn set_value(&mut self, value: Self::Value);
}

/// Spin box holding a bounded number
#[derive(Debug, Clone, PartialEq)]
pub struct NumericControl {
    key: &'static str,
    value: f64,
    range: RangeInclusive<f64>,
    decimals: u32,
    enabled: bool,
}

impl NumericControl {
    pub fn new(key: &'static str, range: RangeInclusive<f64>, decimals: u32) -> Self {
        Self {
            key,
            value: *range.start(),
            range,
            decimals,
            enabled: true,
        }
    }

    pub fn range(&self) -> &RangeInclusive<f64> {
        &self.range
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn constrain(&self, value: f64) -> f64 {
        let clamped = value.clamp(*self.range.start(), *self.range.end());
        let scale = 10f64.powi(self.decimals as i32);
        (clamped * scale).round() / scale
    }
}

impl ValueControl for NumericControl {
    type Value = f64;
    const KIND: ControlKind = ControlKind::Numeric;

    fn key(&self) -> &'static str {
        self.key
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64) {
        if !value.is_finite() {
            tracing::warn!("Ignoring non-finite value for {}", self.key);
            return;
        }
        self.value = self.constrain(value);
    }
}

/// Check box
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanControl {
    key: &'static str,
    checked: bool,
    enabled: bool,
}

impl BooleanControl {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            checked: false,
            enabled: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl ValueControl for BooleanControl {
    type Value = bool;
    const KIND: ControlKind = ControlKind::Boolean;

    fn key(&self) -> &'static str {
        self.key
    }

    fn value(&self) -> bool {
        self.checked
    }

    fn set_value(&mut self, value: bool) {
        self.checked = value;
    }
}

/// Drop-down list
///
/// The value is the current text. A fixed list only accepts one of its
/// options; an editable list also accepts free text that passes its
/// validator.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceControl {
    key: &'static str,
    options: Vec<String>,
    text: String,
    editable: Option<RangeInclusive<u32>>,
    enabled: bool,
}

impl ChoiceControl {
    /// Fixed list; starts on the first option
    pub fn new(key: &'static str, options: &[&str]) -> Self {
        Self {
            key,
            options: options.iter().map(|o| o.to_string()).collect(),
            text: options.first().map(|o| o.to_string()).unwrap_or_default(),
            editable: None,
            enabled: true,
        }
    }

    /// Editable list accepting integers within `accepted`
    pub fn editable(key: &'static str, options: &[&str], accepted: RangeInclusive<u32>) -> Self {
        Self {
            editable: Some(accepted),
            ..Self::new(key, options)
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_editable(&self) -> bool {
        self.editable.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Index of the current text among the options
    pub fn current_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.text)
    }

    /// Select an option by position; out-of-range positions are ignored
    pub fn set_current_index(&mut self, index: usize) {
        match self.options.get(index) {
            Some(option) => self.text = option.clone(),
            None => tracing::warn!(
                "Option {} out of range for {} ({} options)",
                index,
                self.key,
                self.options.len()
            ),
        }
    }

    fn accepts(&self, text: &str) -> bool {
        if self.options.iter().any(|o| o == text) {
            return true;
        }
        match &self.editable {
            Some(accepted) => text
                .trim()
                .parse::<u32>()
                .is_ok_and(|n| accepted.contains(&n)),
            None => false,
        }
    }
}

impl ValueControl for ChoiceControl {
    type Value = String;
    const KIND: ControlKind = ControlKind::Choice;

    fn key(&self) -> &'static str {
        self.key
    }

    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_value(&mut self, value: String) {
        if self.accepts(&value) {
            self.text = value.trim().to_string();
        } else {
            tracing::warn!("{} rejected value {:?}", self.key, value);
        }
    }
}

/// Color picker
#[derive(Debug, Clone, PartialEq)]
pub struct ColorControl {
    key: &'static str,
    color: Rgb,
}

impl ColorControl {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            color: Rgb::BLACK,
        }
    }
}

impl ValueControl for ColorControl {
    type Value = Rgb;
    const KIND: ControlKind = ControlKind::Color;

    fn key(&self) -> &'static str {
        self.key
    }

    fn value(&self) -> Rgb {
        self.color
    }

    fn set_value(&mut self, value: Rgb) {
        self.color = value;
    }
}

/// Single-line text entry. Not part of the snapshot set.
#[derive(Debug, Clone, PartialEq)]
pub struct TextControl {
    key: &'static str,
    text: String,
}

impl TextControl {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            text: String::new(),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}
