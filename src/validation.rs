//! The top-level validation surface.
//!
//! A [`Validator`] carries rendering configuration (translator, default
//! locale, global message overrides). A [`Validation`] is one run: it binds
//! attribute names to values and rules, and collects failures into an
//! [`ErrorBag`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity::prelude::*;
//!
//! let validator = Validator::new();
//! let bag = validator.validate(|v| {
//!     v.attribute("name", form.name.as_str(), rules![not_empty(), min_length(2)]);
//!     v.attribute("age", &form.age, greater_than_or_equal(18));
//!     v.each("tags", &form.tags, max_length(16));
//! });
//!
//! if bag.fails() {
//!     for (key, messages) in bag.messages() {
//!         eprintln!("{key}: {}", messages.join(", "));
//!     }
//! }
//! ```

use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use tracing::trace;

use crate::combinators::Each;
use crate::foundation::{ATTRIBUTE_PARAM, ErrorBag, RuleError, Validatable, Validate};
use crate::message::Translator;

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validation configuration: translator, default locale and global
/// code-to-template message overrides.
///
/// Cheap to clone (the translator is shared); build once and reuse.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    translator: Arc<Translator>,
    default_locale: Option<String>,
    overrides: IndexMap<Cow<'static, str>, Cow<'static, str>>,
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given translator for message rendering.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_translator(mut self, translator: impl Into<Arc<Translator>>) -> Self {
        self.translator = translator.into();
        self
    }

    /// Locale used when a run does not set one.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    /// Overrides the message template for a failure code, for every run of
    /// this validator. Rule-level custom messages still win.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(
        mut self,
        code: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.overrides.insert(code.into(), template.into());
        self
    }

    /// Bulk form of [`Validator::with_message`].
    #[must_use = "builder methods must be chained or built"]
    pub fn with_messages(
        mut self,
        messages: impl IntoIterator<
            Item = (Cow<'static, str>, Cow<'static, str>),
        >,
    ) -> Self {
        self.overrides.extend(messages);
        self
    }

    /// Runs a validation, collecting failures into an [`ErrorBag`].
    pub fn validate(&self, build: impl FnOnce(&mut Validation)) -> ErrorBag {
        let mut run = Validation::new();
        build(&mut run);
        self.finish(run)
    }

    /// Validates a single anonymous value under the key `value`.
    pub fn validate_value<T: ?Sized>(
        &self,
        value: &T,
        rule: impl Validate<Input = T>,
    ) -> ErrorBag {
        self.validate_attribute("value", value, rule)
    }

    /// Validates a single named attribute.
    pub fn validate_attribute<T: ?Sized>(
        &self,
        name: &str,
        value: &T,
        rule: impl Validate<Input = T>,
    ) -> ErrorBag {
        self.validate(|run| {
            run.attribute(name, value, rule);
        })
    }

    /// Validates a self-validating value, rendering through this validator.
    pub fn validate_it(&self, value: &impl Validatable) -> ErrorBag {
        let mut run = Validation::new();
        if let Err(bag) = value.validate() {
            run.bag.merge(bag);
        }
        self.finish(run)
    }

    fn finish(&self, run: Validation) -> ErrorBag {
        let Validation { mut bag, locale } = run;
        bag.apply_code_overrides(&self.overrides);
        bag.bind(
            Arc::clone(&self.translator),
            locale.or_else(|| self.default_locale.clone()),
        );
        trace!(failed = bag.failed().len(), "validation run finished");
        bag
    }
}

// ============================================================================
// VALIDATION RUN
// ============================================================================

/// One validation run: attributes, values and their rules.
///
/// Rules run as they are attached; the run only collects the failures.
/// Rendering configuration comes from the [`Validator`] that finishes the
/// run, or stays at built-in defaults for a standalone run.
#[derive(Debug, Default)]
pub struct Validation {
    bag: ErrorBag,
    locale: Option<String>,
}

impl Validation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders this run's messages in the given locale.
    pub fn locale(&mut self, locale: impl Into<String>) -> &mut Self {
        self.locale = Some(locale.into());
        self
    }

    /// Validates an attribute; failures are keyed by the attribute name.
    pub fn attribute<T: ?Sized>(
        &mut self,
        name: &str,
        value: &T,
        rule: impl Validate<Input = T>,
    ) -> &mut Self {
        self.record(name, name, rule.validate(value));
        self
    }

    /// Validates an attribute under an explicit hierarchical path.
    ///
    /// The key is the dot-joined path; the attribute name still renders in
    /// messages. Use for values that live inside containers:
    /// `attribute_at(&["users", "2"], "password", ...)` keys failures under
    /// `users.2.password`.
    pub fn attribute_at<T: ?Sized>(
        &mut self,
        path: &[&str],
        name: &str,
        value: &T,
        rule: impl Validate<Input = T>,
    ) -> &mut Self {
        let key = if path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", path.join("."))
        };
        self.record(&key, name, rule.validate(value));
        self
    }

    /// Validates every element of a slice; failures are keyed by
    /// `name.<index>`.
    pub fn each<T>(
        &mut self,
        name: &str,
        values: &[T],
        rule: impl Validate<Input = T>,
    ) -> &mut Self {
        self.record(name, name, Each::new(rule).validate(values));
        self
    }

    /// Like [`Validation::each`] for string collections, so `str` rules
    /// apply directly to `Vec<String>` or `&[&str]`.
    pub fn each_str(
        &mut self,
        name: &str,
        values: &[impl AsRef<str>],
        rule: impl Validate<Input = str>,
    ) -> &mut Self {
        let mut bag = ErrorBag::new();
        for (index, value) in values.iter().enumerate() {
            if let Err(error) = rule.validate(value.as_ref()) {
                bag.add(&index.to_string(), error);
            }
        }
        if bag.fails() {
            self.record(name, name, Err(RuleError::Nested(bag)));
        }
        self
    }

    /// Validates a self-validating value; its failure keys flatten under
    /// the attribute name.
    pub fn nested(&mut self, name: &str, value: &impl Validatable) -> &mut Self {
        self.record(name, name, value.validate().map_err(RuleError::Nested));
        self
    }

    /// Finishes a standalone run (no validator): `Err` with the bag when
    /// anything failed. This is the shape [`Validatable`] wants.
    pub fn into_result(self) -> Result<(), ErrorBag> {
        if self.bag.fails() { Err(self.bag) } else { Ok(()) }
    }

    /// Finishes a standalone run, always returning the bag.
    #[must_use]
    pub fn into_bag(self) -> ErrorBag {
        self.bag
    }

    fn record(&mut self, key: &str, attribute: &str, outcome: Result<(), RuleError>) {
        if let Err(mut failure) = outcome {
            // Nested runs already stamped their own attribute names.
            failure.fill_param(ATTRIBUTE_PARAM, attribute);
            self.bag.add(key, failure);
        }
    }
}

// ============================================================================
// DEFAULT INSTANCE
// ============================================================================

fn default_validator() -> &'static Validator {
    static DEFAULT: OnceLock<Validator> = OnceLock::new();
    DEFAULT.get_or_init(Validator::new)
}

/// Runs a validation against the process-wide default [`Validator`].
pub fn validate(build: impl FnOnce(&mut Validation)) -> ErrorBag {
    default_validator().validate(build)
}

/// Validates one anonymous value against the default [`Validator`].
pub fn validate_value<T: ?Sized>(value: &T, rule: impl Validate<Input = T>) -> ErrorBag {
    default_validator().validate_value(value, rule)
}

/// Validates one named attribute against the default [`Validator`].
pub fn validate_attribute<T: ?Sized>(
    name: &str,
    value: &T,
    rule: impl Validate<Input = T>,
) -> ErrorBag {
    default_validator().validate_attribute(name, value, rule)
}

/// Validates a self-validating value against the default [`Validator`].
pub fn validate_it(value: &impl Validatable) -> ErrorBag {
    default_validator().validate_it(value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;
    use crate::validators::generic::greater_than_or_equal;
    use crate::validators::length::{min_length, not_empty};

    #[test]
    fn test_validate_attribute_records_failure() {
        let bag = validate_attribute("name", "", not_empty());
        assert!(bag.fails());
        assert!(bag.failed_at("name", &[codes::IS_NOT_BLANK]));
        assert_eq!(
            bag.message("name"),
            vec!["name should not be blank.".to_string()]
        );
    }

    #[test]
    fn test_validate_value_uses_value_key() {
        let bag = validate_value("", not_empty());
        assert!(bag.has("value"));
    }

    #[test]
    fn test_multiple_attributes() {
        let bag = validate(|v| {
            v.attribute("name", "ok", not_empty());
            v.attribute("age", &15, greater_than_or_equal(18));
        });
        assert!(!bag.has("name"));
        assert!(bag.failed_at("age", &[codes::IS_GREATER_THAN_OR_EQUAL_TO]));
    }

    #[test]
    fn test_attribute_at_builds_path() {
        let bag = validate(|v| {
            v.attribute_at(&["users", "2"], "password", "short", min_length(8));
        });
        assert!(bag.has("users.2.password"));
        // the attribute param stays the bare name for rendering
        let error = bag
            .error("users.2.password", codes::IS_MIN_LENGTH)
            .unwrap();
        assert_eq!(error.param("attribute"), Some("password"));
    }

    #[test]
    fn test_each_keys_by_index() {
        let values = [10, 3, 20];
        let bag = validate(|v| {
            v.each("scores", &values, greater_than_or_equal(5));
        });
        assert!(!bag.has("scores.0"));
        assert!(bag.has("scores.1"));
        assert!(!bag.has("scores.2"));
    }

    #[test]
    fn test_each_str() {
        let tags = vec!["ok".to_string(), String::new()];
        let bag = validate(|v| {
            v.each_str("tags", &tags, not_empty());
        });
        assert!(!bag.has("tags.0"));
        assert!(bag.failed_at("tags.1", &[codes::IS_NOT_BLANK]));
    }

    #[test]
    fn test_success_is_empty_bag() {
        let bag = validate(|v| {
            v.attribute("name", "fine", not_empty());
        });
        assert!(!bag.fails());
        assert!(bag.is_empty());
    }
}
