use super::form::{BookingForm, FieldRecord};
use super::validation::ValidationError;
use super::wizard::WizardState;

/// Everything the booking modal owns while it is on screen: visibility, the
/// step cursor and the entered values.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSession {
    form: BookingForm,
    open: bool,
    wizard: WizardState,
    record: FieldRecord,
}

impl BookingSession {
    pub fn new(form: BookingForm) -> Self {
        let wizard = WizardState::for_form(&form);
        let record = form.blank_record();
        Self {
            form,
            open: false,
            wizard,
            record,
        }
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn record(&self) -> &FieldRecord {
        &self.record
    }

    pub fn open(&mut self) {
        self.open = true;
        self.reset();
    }

    /// Hides the modal. The reset happens later in [`finish_close`] once the
    /// closing transition is over.
    ///
    /// [`finish_close`]: BookingSession::finish_close
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Delayed half of `close`. Skipped if the modal was reopened meanwhile.
    pub fn finish_close(&mut self) {
        if !self.open {
            self.reset();
        }
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.record.set(name, value);
    }

    pub fn advance(&mut self) -> Result<(), ValidationError> {
        self.wizard.advance(&self.form, &self.record)
    }

    pub fn retreat(&mut self) {
        self.wizard.retreat();
    }

    /// Moves the cursor to a step already validated elsewhere.
    pub fn show_step(&mut self, step: usize) {
        self.wizard.go_to(step);
    }

    fn reset(&mut self) {
        self.wizard.reset();
        self.record = self.form.blank_record();
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new(BookingForm::consultation())
    }
}
