use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Input kind of a form field. Decides which format rule applies and how the
/// field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Time,
    TextArea,
    Select(&'static [(&'static str, &'static str)]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: &'static str,
    pub placeholder: &'static str,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            default: "",
            placeholder: "",
        }
    }

    fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn with_default(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }

    fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepSpec {
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
}

pub const PROJECT_TYPES: &[(&str, &str)] = &[
    ("web_development", "Web Development"),
    ("mobile_app", "Mobile App"),
    ("ai_ml", "AI/ML Solution"),
    ("ecommerce", "E-commerce Platform"),
    ("enterprise", "Enterprise Software"),
    ("consulting", "Technical Consulting"),
    ("other", "Other"),
];

pub const BUDGET_RANGES: &[(&str, &str)] = &[
    ("5k-10k", "$5,000 - $10,000"),
    ("10k-25k", "$10,000 - $25,000"),
    ("25k-50k", "$25,000 - $50,000"),
    ("50k-100k", "$50,000 - $100,000"),
    ("100k+", "$100,000+"),
];

pub const TIMELINES: &[(&str, &str)] = &[
    ("urgent", "Urgent (1-2 weeks)"),
    ("1-3_months", "1-3 months"),
    ("3-6_months", "3-6 months"),
    ("6+_months", "6+ months"),
    ("flexible", "Flexible"),
];

pub const TIMEZONES: &[(&str, &str)] = &[
    ("IST", "IST (India)"),
    ("GMT", "GMT (London)"),
    ("CET", "CET (Central Europe)"),
    ("EST", "EST (New York)"),
    ("PST", "PST (Los Angeles)"),
];

/// Step layout of the consultation booking form.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    steps: Vec<StepSpec>,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::consultation()
    }
}

impl BookingForm {
    pub fn new(steps: Vec<StepSpec>) -> Self {
        Self { steps }
    }

    pub fn consultation() -> Self {
        Self::new(vec![
            StepSpec {
                title: "Your details",
                fields: vec![
                    FieldSpec::new("full_name", "Full name", FieldKind::Text)
                        .with_placeholder("Jane Doe"),
                    FieldSpec::new("email", "Email", FieldKind::Email)
                        .with_placeholder("jane@company.com"),
                    FieldSpec::new("phone", "Phone", FieldKind::Tel)
                        .with_placeholder("+1 (555) 123-4567"),
                    FieldSpec::new("company", "Company", FieldKind::Text).optional(),
                ],
            },
            StepSpec {
                title: "Your project",
                fields: vec![
                    FieldSpec::new("project_type", "Project type", FieldKind::Select(PROJECT_TYPES)),
                    FieldSpec::new("budget", "Budget", FieldKind::Select(BUDGET_RANGES)),
                    FieldSpec::new("timeline", "Timeline", FieldKind::Select(TIMELINES)),
                    FieldSpec::new("message", "Tell us about it", FieldKind::TextArea),
                ],
            },
            StepSpec {
                title: "Pick a time",
                fields: vec![
                    FieldSpec::new("preferred_date", "Preferred date", FieldKind::Date),
                    FieldSpec::new("preferred_time", "Preferred time", FieldKind::Time),
                    FieldSpec::new("timezone", "Timezone", FieldKind::Select(TIMEZONES))
                        .with_default("IST"),
                ],
            },
        ])
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[StepSpec] {
        &self.steps
    }

    /// Fields of a 1-based step. Out of range steps have no fields.
    pub fn fields_in_step(&self, step: usize) -> &[FieldSpec] {
        step.checked_sub(1)
            .and_then(|idx| self.steps.get(idx))
            .map(|s| s.fields.as_slice())
            .unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.steps.iter().flat_map(|s| s.fields.iter())
    }

    /// Every field present and set to its declared default.
    pub fn blank_record(&self) -> FieldRecord {
        let mut record = FieldRecord::default();
        for field in self.fields() {
            record.set(field.name, field.default);
        }
        record
    }
}

/// Flat snapshot of every form value, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRecord(BTreeMap<String, String>);

impl FieldRecord {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// The reduced payload used to request a confirmation email.
    pub fn confirmation_subset(&self) -> ConfirmationRequest {
        ConfirmationRequest {
            email: self.value("email").to_string(),
            full_name: self.value("full_name").to_string(),
            date: self.value("preferred_date").to_string(),
            time: self.value("preferred_time").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationRequest {
    pub email: String,
    pub full_name: String,
    pub date: String,
    pub time: String,
}

/// Earliest date the schedule step offers, as `YYYY-MM-DD`.
pub fn min_booking_date() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consultation_form_has_three_steps() {
        let form = BookingForm::consultation();
        assert_eq!(form.total_steps(), 3);
        assert_eq!(form.fields_in_step(1)[0].name, "full_name");
        assert!(form.fields_in_step(0).is_empty());
        assert!(form.fields_in_step(4).is_empty());
    }

    #[test]
    fn blank_record_holds_every_field_with_defaults() {
        let form = BookingForm::consultation();
        let record = form.blank_record();
        for field in form.fields() {
            assert!(record.get(field.name).is_some(), "{} missing", field.name);
        }
        assert_eq!(record.get("timezone"), Some("IST"));
        assert_eq!(record.get("company"), Some(""));
    }

    #[test]
    fn record_serializes_flat() {
        let mut record = FieldRecord::default();
        record.set("email", "a@b.co");
        record.set("budget", "5k-10k");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "a@b.co", "budget": "5k-10k" }));
    }

    #[test]
    fn confirmation_subset_maps_schedule_fields() {
        let mut record = BookingForm::consultation().blank_record();
        record.set("email", "jane@corp.io");
        record.set("full_name", "Jane");
        record.set("preferred_date", "2026-11-02");
        record.set("preferred_time", "10:30");
        record.set("message", "not part of it");

        let json = serde_json::to_value(record.confirmation_subset()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "jane@corp.io",
                "full_name": "Jane",
                "date": "2026-11-02",
                "time": "10:30",
            })
        );
    }
}
