//! Rendered form reports.
//!
//! A [`Form`] is the flattened, render-only view of a validation result:
//! attribute key to message list, with duplicate messages suppressed. It is
//! what web handlers hand to templates or serialize into API responses once
//! rule-level detail (codes, params) is no longer needed.

use indexmap::IndexMap;
use serde::Serialize;

use crate::foundation::ErrorBag;

/// A rendered validation report for form-style flows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Form {
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
    messages: IndexMap<String, Vec<String>>,
}

impl Form {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a report from a validation result, rendering every message.
    #[must_use]
    pub fn from_bag(bag: &ErrorBag) -> Self {
        let mut form = Self::new();
        for (key, messages) in bag.messages() {
            for message in messages {
                form.add_error(&key, &message);
            }
        }
        form
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = Some(locale.into());
    }

    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// True when no attribute has messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.values().all(Vec::is_empty)
    }

    /// True when any attribute has messages.
    #[must_use]
    pub fn fails(&self) -> bool {
        !self.is_empty()
    }

    /// All messages, keyed by attribute.
    #[must_use]
    pub fn errors(&self) -> &IndexMap<String, Vec<String>> {
        &self.messages
    }

    /// Adds a message under a key, trimming whitespace and dropping exact
    /// duplicates.
    pub fn add_error(&mut self, key: &str, message: &str) {
        let message = message.trim();
        let messages = self.messages.entry(key.to_string()).or_default();
        if !messages.iter().any(|existing| existing == message) {
            messages.push(message.to_string());
        }
    }
}

impl From<&ErrorBag> for Form {
    fn from(bag: &ErrorBag) -> Self {
        Self::from_bag(bag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Error;

    #[test]
    fn test_empty_form() {
        let form = Form::new();
        assert!(form.is_empty());
        assert!(!form.fails());
    }

    #[test]
    fn test_add_error_dedups() {
        let mut form = Form::new();
        form.add_error("name", "required ");
        form.add_error("name", "required");
        form.add_error("name", "too short");
        assert_eq!(form.errors()["name"], vec!["required", "too short"]);
    }

    #[test]
    fn test_from_bag() {
        let mut bag = ErrorBag::new();
        bag.add("name", Error::new("is_not_blank", "{attribute} required").with_param("attribute", "name"));
        let form = Form::from_bag(&bag);
        assert!(form.fails());
        assert_eq!(form.errors()["name"], vec!["name required"]);
    }

    #[test]
    fn test_locale() {
        let mut form = Form::new();
        assert_eq!(form.locale(), None);
        form.set_locale("de");
        assert_eq!(form.locale(), Some("de"));
    }

    #[test]
    fn test_serialize() {
        let mut form = Form::new();
        form.add_error("name", "required");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["messages"]["name"][0], "required");
    }
}
