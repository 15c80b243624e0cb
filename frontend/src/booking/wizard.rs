use super::form::{BookingForm, FieldRecord};
use super::validation::{validate_step, ValidationError};

/// Display state of one progress marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerState {
    pub active: bool,
    pub completed: bool,
}

/// Step cursor of the booking wizard. `current_step` stays in
/// `1..=total_steps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardState {
    current_step: usize,
    total_steps: usize,
}

impl WizardState {
    pub fn new(total_steps: usize) -> Self {
        Self {
            current_step: 1,
            total_steps: total_steps.max(1),
        }
    }

    pub fn for_form(form: &BookingForm) -> Self {
        Self::new(form.total_steps())
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn is_first(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last(&self) -> bool {
        self.current_step == self.total_steps
    }

    pub fn reset(&mut self) {
        self.current_step = 1;
    }

    /// Moves forward one step once the current step validates. On failure the
    /// cursor is untouched.
    pub fn advance(
        &mut self,
        form: &BookingForm,
        record: &FieldRecord,
    ) -> Result<(), ValidationError> {
        validate_step(form, self.current_step, record)?;
        if self.current_step < self.total_steps {
            self.current_step += 1;
        }
        Ok(())
    }

    /// Moves back one step, stopping at the first.
    pub fn retreat(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
    }

    /// Jumps to `step`, clamped to the valid range. No validation.
    pub fn go_to(&mut self, step: usize) {
        self.current_step = step.clamp(1, self.total_steps);
    }

    pub fn is_step_active(&self, step: usize) -> bool {
        step == self.current_step
    }

    /// One marker per step: earlier steps active and completed, the current
    /// step active only, later steps neither.
    pub fn progress_markers(&self) -> Vec<MarkerState> {
        (1..=self.total_steps)
            .map(|step| MarkerState {
                active: step <= self.current_step,
                completed: step < self.current_step,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> FieldRecord {
        let mut record = BookingForm::consultation().blank_record();
        for (name, value) in [
            ("full_name", "Jane Doe"),
            ("email", "jane@corp.io"),
            ("phone", "+1 (555) 123-4567"),
            ("project_type", "ai_ml"),
            ("budget", "10k-25k"),
            ("timeline", "flexible"),
            ("message", "We need a recommender."),
            ("preferred_date", "2026-11-02"),
            ("preferred_time", "10:30"),
        ] {
            record.set(name, value);
        }
        record
    }

    #[test]
    fn markers_follow_cursor_for_every_step() {
        for current in 1..=3 {
            let mut wizard = WizardState::new(3);
            let form = BookingForm::consultation();
            let record = complete_record();
            while wizard.current_step() < current {
                wizard.advance(&form, &record).unwrap();
            }

            let active_steps = (1..=3).filter(|s| wizard.is_step_active(*s)).count();
            assert_eq!(active_steps, 1);

            for (idx, marker) in wizard.progress_markers().iter().enumerate() {
                let step = idx + 1;
                if step < current {
                    assert_eq!(*marker, MarkerState { active: true, completed: true });
                } else if step == current {
                    assert_eq!(*marker, MarkerState { active: true, completed: false });
                } else {
                    assert_eq!(*marker, MarkerState { active: false, completed: false });
                }
            }
        }
    }

    #[test]
    fn advance_is_noop_when_step_invalid() {
        let form = BookingForm::consultation();
        let mut record = complete_record();
        record.set("phone", "");
        let mut wizard = WizardState::for_form(&form);

        assert!(wizard.advance(&form, &record).is_err());
        assert_eq!(wizard.current_step(), 1);

        record.set("phone", "12345");
        assert!(wizard.advance(&form, &record).is_err());
        assert_eq!(wizard.current_step(), 1);

        record.set("phone", "5551234567");
        assert!(wizard.advance(&form, &record).is_ok());
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn cursor_never_leaves_bounds() {
        let form = BookingForm::consultation();
        let record = complete_record();
        let mut wizard = WizardState::for_form(&form);

        wizard.retreat();
        wizard.retreat();
        assert_eq!(wizard.current_step(), 1);

        for _ in 0..5 {
            wizard.advance(&form, &record).unwrap();
        }
        assert_eq!(wizard.current_step(), 3);
        assert!(wizard.is_last());
    }

    #[test]
    fn go_to_clamps_into_range() {
        let mut wizard = WizardState::new(3);
        wizard.go_to(2);
        assert_eq!(wizard.current_step(), 2);
        wizard.go_to(0);
        assert_eq!(wizard.current_step(), 1);
        wizard.go_to(7);
        assert_eq!(wizard.current_step(), 3);
    }

    #[test]
    fn step_navigation_keeps_entered_values() {
        let form = BookingForm::consultation();
        let record = complete_record();
        let snapshot = record.clone();
        let mut wizard = WizardState::for_form(&form);

        wizard.advance(&form, &record).unwrap();
        wizard.advance(&form, &record).unwrap();
        wizard.retreat();
        wizard.retreat();
        wizard.advance(&form, &record).unwrap();

        assert_eq!(record, snapshot);
        assert_eq!(wizard.current_step(), 2);
    }
}
