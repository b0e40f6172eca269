//! Declarative field schemas
//!
//! Each form declares its fields once as data; `FormSchema::check` runs the
//! baseline constraints (required, max length, choice membership, numeric
//! shape) and the per-form modules layer domain validators on top.

use super::report::ErrorReport;
use super::submission::RawSubmission;

/// Raw type of a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    /// Value must be one of the listed choices
    Choice(Vec<&'static str>),
    Checkbox,
    /// File fields carry an uploaded filename
    File,
}

/// Static description of a single field
#[derive(Debug, Clone)]
pub struct FieldSchema {
    name: &'static str,
    kind: FieldKind,
    required: bool,
    max_length: Option<usize>,
    required_message: Option<&'static str>,
}

impl FieldSchema {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            max_length: None,
            required_message: None,
        }
    }

    pub fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn email(name: &'static str) -> Self {
        Self::new(name, FieldKind::Email)
    }

    pub fn password(name: &'static str) -> Self {
        Self::new(name, FieldKind::Password)
    }

    pub fn number(name: &'static str) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn choice(name: &'static str, choices: Vec<&'static str>) -> Self {
        Self::new(name, FieldKind::Choice(choices))
    }

    pub fn checkbox(name: &'static str) -> Self {
        Self::new(name, FieldKind::Checkbox)
    }

    pub fn file(name: &'static str) -> Self {
        Self::new(name, FieldKind::File)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn max_length(mut self, limit: usize) -> Self {
        self.max_length = Some(limit);
        self
    }

    /// Override the default required-field message
    pub fn required_message(mut self, message: &'static str) -> Self {
        self.required_message = Some(message);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    fn check(&self, submission: &RawSubmission, report: &mut ErrorReport) {
        let value = submission.trimmed(self.name);

        if value.is_empty() {
            if self.required && !matches!(self.kind, FieldKind::Checkbox) {
                let message = self
                    .required_message
                    .unwrap_or("This field is required");
                report.add(self.name, message);
            }
            return;
        }

        if let Some(limit) = self.max_length {
            if value.chars().count() > limit {
                report.add(
                    self.name,
                    format!("Ensure this value has at most {limit} characters"),
                );
                return;
            }
        }

        match &self.kind {
            FieldKind::Choice(choices) => {
                if !choices.contains(&value) {
                    report.add(self.name, "Select a valid choice");
                }
            }
            FieldKind::Number => {
                if value.parse::<f64>().is_err() {
                    report.add(self.name, "Enter a number");
                }
            }
            _ => {}
        }
    }
}

/// Static description of a whole form
#[derive(Debug, Clone)]
pub struct FormSchema {
    name: &'static str,
    fields: Vec<FieldSchema>,
}

impl FormSchema {
    pub fn new(name: &'static str, fields: Vec<FieldSchema>) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Run the baseline constraints over a submission
    pub fn check(&self, submission: &RawSubmission) -> ErrorReport {
        let mut report = ErrorReport::new();

        for field in &self.fields {
            field.check(submission, &mut report);
        }

        report
    }
}
