use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::form::{BookingForm, FieldKind, FieldRecord};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

// 3-digit area code, 3-digit exchange, 4-6 digit subscriber number. An
// international prefix like "+1 " may precede the area code.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+[0-9]{1,3}[-\s.]?|\+)?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$")
        .expect("phone pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Email,
    Phone,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{field}` is empty")]
    MissingField { field: String },
    #[error("field `{field}` is not a valid {format:?}")]
    InvalidFormat { field: String, format: Format },
}

impl ValidationError {
    /// Name of the field that should receive focus.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField { field } => field,
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "Please fill in all required fields",
            ValidationError::InvalidFormat { format: Format::Email, .. } => {
                "Please enter a valid email address"
            }
            ValidationError::InvalidFormat { format: Format::Phone, .. } => {
                "Please enter a valid phone number"
            }
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Checks the required fields of one step in declaration order and stops at
/// the first failure.
pub fn validate_step(
    form: &BookingForm,
    step: usize,
    record: &FieldRecord,
) -> Result<(), ValidationError> {
    for field in form.fields_in_step(step).iter().filter(|f| f.required) {
        let value = record.value(field.name);
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: field.name.to_string(),
            });
        }

        let format = match field.kind {
            FieldKind::Email if !is_valid_email(value) => Some(Format::Email),
            FieldKind::Tel if !is_valid_phone(value) => Some(Format::Phone),
            _ => None,
        };
        if let Some(format) = format {
            return Err(ValidationError::InvalidFormat {
                field: field.name.to_string(),
                format,
            });
        }
    }
    Ok(())
}
