//! Raw form submissions
//!
//! A submission is the untyped field-name to values mapping as it arrives
//! from an HTTP form post. One instance per request; validation never
//! mutates it.

use std::collections::HashMap;

/// Raw key-value input from a form post
#[derive(Debug, Clone, Default)]
pub struct RawSubmission {
    values: HashMap<String, Vec<String>>,
}

impl RawSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from ordered urlencoded pairs; repeated names accumulate
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut submission = Self::new();
        for (name, value) in pairs {
            submission.append(name, value);
        }
        submission
    }

    /// Build from a JSON object; arrays become multi-value fields
    pub fn from_json(value: &serde_json::Value) -> Self {
        let mut submission = Self::new();

        if let Some(object) = value.as_object() {
            for (name, value) in object {
                match value {
                    serde_json::Value::Array(items) => {
                        for item in items {
                            submission.append(name.clone(), json_scalar(item));
                        }
                    }
                    other => submission.append(name.clone(), json_scalar(other)),
                }
            }
        }

        submission
    }

    /// Append a value for a field
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_default().push(value.into());
    }

    /// First value for a field, if submitted
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// All values for a field
    pub fn values(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First value for a field, trimmed; empty string when absent
    pub fn trimmed(&self, name: &str) -> &str {
        self.value(name).unwrap_or("").trim()
    }

    /// Checkbox interpretation: present and truthy
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.trimmed(name), "on" | "true" | "1")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

fn json_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_pairs_accumulates_repeats() {
        let submission = RawSubmission::from_pairs(vec![
            ("tag".to_string(), "a".to_string()),
            ("tag".to_string(), "b".to_string()),
        ]);

        assert_eq!(submission.values("tag"), &["a", "b"]);
        assert_eq!(submission.value("tag"), Some("a"));
    }

    #[test]
    fn test_trimmed_missing_field() {
        let submission = RawSubmission::new();
        assert_eq!(submission.trimmed("anything"), "");
        assert!(!submission.contains("anything"));
    }

    #[test]
    fn test_trimmed_strips_whitespace() {
        let mut submission = RawSubmission::new();
        submission.append("name", "  Maria  ");
        assert_eq!(submission.trimmed("name"), "Maria");
    }

    #[test]
    fn test_flag() {
        let mut submission = RawSubmission::new();
        submission.append("active", "on");
        submission.append("promo", "false");

        assert!(submission.flag("active"));
        assert!(!submission.flag("promo"));
        assert!(!submission.flag("missing"));
    }

    #[test]
    fn test_from_json() {
        let submission = RawSubmission::from_json(&json!({
            "name": "Empanada",
            "price": 2.5,
            "active": true,
            "tags": ["a", "b"],
        }));

        assert_eq!(submission.value("name"), Some("Empanada"));
        assert_eq!(submission.value("price"), Some("2.5"));
        assert_eq!(submission.value("active"), Some("true"));
        assert_eq!(submission.values("tags").len(), 2);
    }
}
