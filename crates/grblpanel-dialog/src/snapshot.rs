//! Snapshot and rollback of control values
//!
//! A [`Snapshot`] holds one FIFO queue per control kind. Capturing walks the
//! registry in order and pushes every value to the back of its kind's queue;
//! rolling back walks the same order and pops from the front. Nothing here
//! knows which setting a control edits.

use std::collections::VecDeque;

use grblpanel_core::{ControlKind, Rgb, SnapshotError};

use crate::controls::ValueControl;
use crate::registry::ControlRegistry;

/// Values recorded when the dialog opened
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    numerics: VecDeque<f64>,
    flags: VecDeque<bool>,
    choices: VecDeque<String>,
    colors: VecDeque<Rgb>,
}

impl Snapshot {
    /// Record the current value of every snapshot-able control. Controls are left untouched.
    pub fn capture(registry: &ControlRegistry) -> Self {
        let snapshot = Self {
            numerics: record(registry.numerics()),
            flags: record(registry.flags()),
            choices: record(registry.choices()),
            colors: record(registry.colors()),
        };
        tracing::debug!("Captured {} control values", snapshot.len());
        snapshot
    }

    /// Restore every recorded value in capture order, draining the queues.
    ///
    /// Queue lengths are checked against the registry before anything is
    /// written; on a mismatch no control changes. Returns the number of
    /// values restored.
    pub fn rollback(&mut self, registry: &mut ControlRegistry) -> Result<usize, SnapshotError> {
        check(&self.numerics, registry.numerics())?;
        check(&self.flags, registry.flags())?;
        check(&self.choices, registry.choices())?;
        check(&self.colors, registry.colors())?;

        let restored = self.len();
        restore(&mut self.numerics, registry.numerics_mut());
        restore(&mut self.flags, registry.flags_mut());
        restore(&mut self.choices, registry.choices_mut());
        restore(&mut self.colors, registry.colors_mut());

        tracing::debug!("Rolled back {} control values", restored);
        Ok(restored)
    }

    /// Values still waiting to be restored for a kind
    pub fn pending(&self, kind: ControlKind) -> usize {
        match kind {
            ControlKind::Numeric => self.numerics.len(),
            ControlKind::Boolean => self.flags.len(),
            ControlKind::Choice => self.choices.len(),
            ControlKind::Color => self.colors.len(),
        }
    }

    /// Total number of recorded values
    pub fn len(&self) -> usize {
        ControlKind::ALL.iter().map(|kind| self.pending(*kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn record<C: ValueControl>(controls: &[C]) -> VecDeque<C::Value> {
    controls.iter().map(ValueControl::value).collect()
}

fn check<C: ValueControl>(queue: &VecDeque<C::Value>, controls: &[C]) -> Result<(), SnapshotError> {
    if queue.len() == controls.len() {
        Ok(())
    } else {
        Err(SnapshotError::KindMismatch {
            kind: C::KIND,
            recorded: queue.len(),
            present: controls.len(),
        })
    }
}

fn restore<C: ValueControl>(queue: &mut VecDeque<C::Value>, controls: &mut [C]) {
    for control in controls.iter_mut() {
        if let Some(value) = queue.pop_front() {
            control.set_value(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ChoiceField, ColorField, FlagField, NumericField};

    #[test]
    fn test_capture_records_every_control() {
        let registry = ControlRegistry::new();
        let snapshot = Snapshot::capture(&registry);

        assert_eq!(snapshot.pending(ControlKind::Numeric), NumericField::ALL.len());
        assert_eq!(snapshot.pending(ControlKind::Boolean), FlagField::ALL.len());
        assert_eq!(snapshot.pending(ControlKind::Choice), ChoiceField::ALL.len());
        assert_eq!(snapshot.pending(ControlKind::Color), ColorField::ALL.len());
    }

    #[test]
    fn test_fifo_order() {
        let fields = [
            NumericField::RapidSpeed,
            NumericField::Acceleration,
            NumericField::ProbingFeed,
        ];
        let mut registry = ControlRegistry::new();
        for (value, field) in [1.0, 2.0, 3.0].into_iter().zip(fields) {
            registry.numeric_mut(field).set_value(value);
        }

        let mut snapshot = Snapshot::capture(&registry);
        for field in fields {
            registry.numeric_mut(field).set_value(9.0);
        }
        snapshot.rollback(&mut registry).expect("rollback");

        let restored: Vec<f64> = fields
            .iter()
            .map(|field| registry.numeric(*field).value())
            .collect();
        assert_eq!(restored, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_round_trip_restores_every_kind() {
        let mut registry = ControlRegistry::new();
        registry.flag_mut(FlagField::Vsync).set_value(true);
        registry
            .choice_mut(ChoiceField::ToolType)
            .set_value("Conic".to_string());
        let before = registry.clone();

        let mut snapshot = Snapshot::capture(&registry);
        registry.flag_mut(FlagField::Vsync).set_value(false);
        registry
            .choice_mut(ChoiceField::ToolType)
            .set_value("Flat".to_string());
        registry.color_mut(ColorField::Tool).set_value(Rgb::RED);
        registry.numeric_mut(NumericField::LineWidth).set_value(4.2);

        let restored = snapshot.rollback(&mut registry).expect("rollback");
        assert_eq!(restored, 54);
        assert_eq!(registry, before);
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_rollback_without_edits_is_a_no_op() {
        let mut registry = ControlRegistry::new();
        let before = registry.clone();

        let mut snapshot = Snapshot::capture(&registry);
        snapshot.rollback(&mut registry).expect("rollback");

        assert_eq!(registry, before);
        for kind in ControlKind::ALL {
            assert_eq!(snapshot.pending(kind), 0);
        }
    }

    #[test]
    fn test_mismatch_leaves_controls_untouched() {
        let mut registry = ControlRegistry::new();
        let mut snapshot = Snapshot::capture(&registry);
        snapshot.colors.pop_back();

        registry.numeric_mut(NumericField::Port).set_value(8080.0);
        let err = snapshot.rollback(&mut registry).unwrap_err();

        assert_eq!(
            err,
            SnapshotError::KindMismatch {
                kind: ControlKind::Color,
                recorded: ColorField::ALL.len() - 1,
                present: ColorField::ALL.len(),
            }
        );
        assert_eq!(registry.numeric(NumericField::Port).value(), 8080.0);
        assert_eq!(snapshot.pending(ControlKind::Numeric), NumericField::ALL.len());
    }
}
