//! Field-level error reports
//!
//! A submission yields exactly one of a validated record or a non-empty
//! error report. Messages keep their insertion order per field; fields are
//! kept sorted for stable serialization.

use std::collections::BTreeMap;

use serde::Serialize;

/// Field name to ordered error messages
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ErrorReport {
    errors: BTreeMap<String, Vec<String>>,
}

impl ErrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a message to a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: ErrorReport) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether a field already has errors
    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Messages for a field
    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of fields with errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = ErrorReport::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn test_add_preserves_message_order() {
        let mut report = ErrorReport::new();
        report.add("phone", "first");
        report.add("phone", "second");

        assert_eq!(report.messages("phone"), &["first", "second"]);
        assert!(report.has("phone"));
        assert!(!report.has("email"));
    }

    #[test]
    fn test_merge() {
        let mut a = ErrorReport::new();
        a.add("email", "taken");

        let mut b = ErrorReport::new();
        b.add("email", "invalid");
        b.add("phone", "required");

        a.merge(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.messages("email"), &["taken", "invalid"]);
    }

    #[test]
    fn test_serialization_shape() {
        let mut report = ErrorReport::new();
        report.add("phone", "The phone number must have exactly 9 digits");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "phone": ["The phone number must have exactly 9 digits"]
            })
        );
    }
}
