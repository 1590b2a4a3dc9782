//! The error aggregation core.
//!
//! Three layers, mirrored by the public API:
//!
//! - [`Error`] — one predicate failure: code, default message template,
//!   stringified params, optional custom-message override.
//! - [`Errors`] — failures for one attribute, keyed by code. At most one
//!   error per code; the first one recorded wins.
//! - [`ErrorBag`] — the full validation result, keyed by hierarchical
//!   attribute path (`users.2.password`). Nested bags flatten into the
//!   parent by dot-joining keys.
//!
//! Codes and messages use `Cow<'static, str>` so the common case of static
//! rule-defined strings never allocates.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use tracing::trace;

use crate::message::{Template, Translator};

/// Ordered error params; replace-by-key, typically 0-3 entries.
pub type Params = SmallVec<[(Cow<'static, str>, String); 3]>;

/// Param key under which the attribute name is injected.
pub const ATTRIBUTE_PARAM: &str = "attribute";

// ============================================================================
// ERROR
// ============================================================================

/// A single validation failure.
///
/// # Examples
///
/// ```rust,ignore
/// let error = Error::new(codes::IS_MIN_LENGTH, templates::IS_MIN_LENGTH)
///     .with_param("min", 8);
/// assert_eq!(error.code(), "is_min_length");
/// ```
#[derive(Debug, Clone)]
pub struct Error {
    code: Cow<'static, str>,
    /// Default message template, rendered when no catalog entry or custom
    /// message applies.
    message: Cow<'static, str>,
    params: Params,
    custom_message: Option<Cow<'static, str>>,
    rendered: OnceLock<String>,
}

impl Error {
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Params::new(),
            custom_message: None,
            rendered: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The default message template (not rendered).
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn custom_message(&self) -> Option<&str> {
        self.custom_message.as_deref()
    }

    #[must_use]
    pub fn params(&self) -> &[(Cow<'static, str>, String)] {
        &self.params
    }

    /// Looks up a param value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Adds a param, replacing any existing value under the same key.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: impl Into<Cow<'static, str>>, value: impl fmt::Display) -> Self {
        self.set_param(key, value);
        self
    }

    /// In-place variant of [`Error::with_param`].
    pub fn set_param(&mut self, key: impl Into<Cow<'static, str>>, value: impl fmt::Display) {
        let key = key.into();
        let value = value.to_string();
        if let Some(slot) = self.params.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.params.push((key, value));
        }
        self.rendered = OnceLock::new();
    }

    /// Adds a param only when no value exists under the key yet.
    pub(crate) fn fill_param(&mut self, key: &'static str, value: &str) {
        if self.param(key).is_none() {
            self.set_param(key, value);
        }
    }

    /// Overrides the message template for this failure.
    ///
    /// A custom message wins over catalog lookups; params still substitute.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.set_message(message);
        self
    }

    /// In-place variant of [`Error::with_message`].
    pub fn set_message(&mut self, message: impl Into<Cow<'static, str>>) {
        self.custom_message = Some(message.into());
        self.rendered = OnceLock::new();
    }

    /// Replaces the failure code, keeping message and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self.rendered = OnceLock::new();
        self
    }

    /// Renders the message without a translator: custom message if set,
    /// otherwise the default template, with raw params substituted.
    #[must_use]
    pub fn to_message(&self) -> String {
        let source = self.custom_message.as_deref().unwrap_or(&self.message);
        Template::parse(source).render(&self.params)
    }

    /// Renders the message through a translator, caching the result.
    ///
    /// Resolution order: custom message, catalog template for the code,
    /// the error's own default template. The `attribute` param is passed
    /// through the translator's display-name lookup first.
    pub fn rendered(&self, translator: &Translator, locale: Option<&str>) -> &str {
        self.rendered.get_or_init(|| {
            let params = self.localized_params(translator, locale);
            if let Some(custom) = self.custom_message.as_deref() {
                Template::parse(custom).render(&params)
            } else if let Some(out) = translator.translate(locale, &self.code, &params) {
                out
            } else {
                Template::parse(&self.message).render(&params)
            }
        })
    }

    fn localized_params(&self, translator: &Translator, locale: Option<&str>) -> Params {
        let mut params = self.params.clone();
        if let Some(slot) = params.iter_mut().find(|(k, _)| k == ATTRIBUTE_PARAM) {
            slot.1 = translator.attribute_name(locale, &slot.1);
        }
        params
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.message == other.message
            && self.params == other.params
            && self.custom_message == other.custom_message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_message())
    }
}

impl std::error::Error for Error {}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("code", self.code())?;
        map.serialize_entry("message", &self.to_message())?;
        map.end()
    }
}

// ============================================================================
// ERRORS (per attribute, keyed by code)
// ============================================================================

/// The failures recorded for one attribute, deduplicated by code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Errors {
    inner: IndexMap<Cow<'static, str>, Error>,
}

impl Errors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure. If the code is already present the existing error
    /// is kept and the new one dropped.
    pub fn add(&mut self, error: Error) {
        self.inner
            .entry(Cow::Owned(error.code().to_string()))
            .or_insert(error);
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Error> {
        self.inner.get(code)
    }

    #[must_use]
    pub fn has(&self, code: &str) -> bool {
        self.inner.contains_key(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(AsRef::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        self.inner.values()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Error> {
        self.inner.values_mut()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = indexmap::map::Values<'a, Cow<'static, str>, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.values()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(Error::to_message)
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

impl Serialize for Errors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for error in self {
            seq.serialize_element(error)?;
        }
        seq.end()
    }
}

// ============================================================================
// RULE ERROR
// ============================================================================

/// What a failed rule reports: either one failure, or a bag of keyed
/// failures produced by a nested run (`Each`, `Group`, `Validatable`).
#[derive(Debug, Clone, PartialEq)]
pub enum RuleError {
    Single(Error),
    Nested(ErrorBag),
}

impl RuleError {
    /// Sets a param on the failure; for nested bags, on every inner error.
    pub fn set_param(&mut self, key: &'static str, value: &str) {
        match self {
            Self::Single(error) => error.set_param(key, value),
            Self::Nested(bag) => {
                for errors in bag.errors.values_mut() {
                    for error in errors.iter_mut() {
                        error.set_param(key, value);
                    }
                }
            }
        }
    }

    /// Sets a param only where no value exists yet. Nested errors keep the
    /// attribute names stamped by their own run.
    pub(crate) fn fill_param(&mut self, key: &'static str, value: &str) {
        match self {
            Self::Single(error) => error.fill_param(key, value),
            Self::Nested(bag) => {
                for errors in bag.errors.values_mut() {
                    for error in errors.iter_mut() {
                        error.fill_param(key, value);
                    }
                }
            }
        }
    }
}

impl From<Error> for RuleError {
    fn from(error: Error) -> Self {
        Self::Single(error)
    }
}

impl From<ErrorBag> for RuleError {
    fn from(bag: ErrorBag) -> Self {
        Self::Nested(bag)
    }
}

// ============================================================================
// ERROR BAG
// ============================================================================

/// The full validation result, keyed by attribute path.
///
/// Adding a nested bag under a key re-keys every entry by dot-joining the
/// parent key with the entry's sub-key, trimming empty segments, so element
/// and struct failures surface as `users.2.password`-style paths.
#[derive(Debug, Clone, Default)]
pub struct ErrorBag {
    errors: IndexMap<String, Errors>,
    translator: Option<Arc<Translator>>,
    locale: Option<String>,
}

impl ErrorBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure under an attribute key, flattening nested bags.
    pub fn add(&mut self, key: &str, error: impl Into<RuleError>) {
        match error.into() {
            RuleError::Single(error) => {
                self.errors.entry(key.to_string()).or_default().add(error);
            }
            RuleError::Nested(bag) => {
                trace!(parent = key, entries = bag.errors.len(), "flattening nested error bag");
                for (sub_key, errors) in bag.errors {
                    let joined = join_key(key, &sub_key);
                    for error in errors.inner.into_values() {
                        self.add(&joined, error);
                    }
                }
            }
        }
    }

    /// Merges another bag into this one, keys unchanged.
    pub fn merge(&mut self, other: ErrorBag) {
        self.add("", RuleError::Nested(other));
    }

    /// True when any attribute has at least one failure.
    #[must_use]
    pub fn fails(&self) -> bool {
        self.errors.values().any(|errors| !errors.is_empty())
    }

    /// The attribute keys that have failures, in insertion order.
    #[must_use]
    pub fn failed(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|(_, errors)| !errors.is_empty())
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// True when the key failed; with codes given, when it failed with any
    /// of those codes.
    #[must_use]
    pub fn failed_at(&self, key: &str, codes: &[&str]) -> bool {
        match self.errors.get(key) {
            None => false,
            Some(errors) if codes.is_empty() => !errors.is_empty(),
            Some(errors) => codes.iter().any(|code| errors.has(code)),
        }
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.errors.get(key).is_some_and(|errors| !errors.is_empty())
    }

    #[must_use]
    pub fn errors(&self, key: &str) -> Option<&Errors> {
        self.errors.get(key)
    }

    #[must_use]
    pub fn error(&self, key: &str, code: &str) -> Option<&Error> {
        self.errors.get(key).and_then(|errors| errors.get(code))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Errors)> {
        self.errors.iter().map(|(key, errors)| (key.as_str(), errors))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.fails()
    }

    /// Overrides the message for one key/code pair.
    pub fn override_message(
        &mut self,
        key: &str,
        code: &str,
        message: impl Into<Cow<'static, str>>,
    ) {
        if let Some(error) = self
            .errors
            .get_mut(key)
            .and_then(|errors| errors.inner.get_mut(code))
        {
            error.set_message(message);
        }
    }

    /// Applies per-key, per-code message overrides in bulk.
    pub fn set_messages<'a>(
        &mut self,
        messages: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    ) {
        for (key, code, message) in messages {
            self.override_message(key, code, message.to_string());
        }
    }

    /// Applies validator-global code overrides. Rule-level custom messages
    /// are more specific and kept.
    pub(crate) fn apply_code_overrides(
        &mut self,
        overrides: &IndexMap<Cow<'static, str>, Cow<'static, str>>,
    ) {
        if overrides.is_empty() {
            return;
        }
        for errors in self.errors.values_mut() {
            for error in errors.iter_mut() {
                if error.custom_message().is_none()
                    && let Some(template) = overrides.get(error.code())
                {
                    error.set_message(template.clone());
                }
            }
        }
    }

    /// Binds the translator and locale used for rendering.
    pub(crate) fn bind(&mut self, translator: Arc<Translator>, locale: Option<String>) {
        self.translator = Some(translator);
        self.locale = locale;
    }

    /// Rendered messages for one key.
    #[must_use]
    pub fn message(&self, key: &str) -> Vec<String> {
        self.errors.get(key).map_or_else(Vec::new, |errors| {
            errors.iter().map(|error| self.render(error)).collect()
        })
    }

    /// Rendered messages for all keys, in insertion order.
    #[must_use]
    pub fn messages(&self) -> IndexMap<String, Vec<String>> {
        self.errors
            .keys()
            .map(|key| (key.clone(), self.message(key)))
            .collect()
    }

    fn render(&self, error: &Error) -> String {
        match &self.translator {
            Some(translator) => error
                .rendered(translator, self.locale.as_deref())
                .to_string(),
            None => error.to_message(),
        }
    }
}

impl PartialEq for ErrorBag {
    fn eq(&self, other: &Self) -> bool {
        self.errors == other.errors
    }
}

impl fmt::Display for ErrorBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, messages) in self.messages() {
            for message in messages {
                writeln!(f, "{key}: {message}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ErrorBag {}

impl Serialize for ErrorBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            code: &'a str,
            message: String,
        }

        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (key, errors) in &self.errors {
            let rendered: Vec<Entry<'_>> = errors
                .iter()
                .map(|error| Entry {
                    code: error.code(),
                    message: self.render(error),
                })
                .collect();
            map.serialize_entry(key, &rendered)?;
        }
        map.end()
    }
}

/// Dot-joins a parent key with a nested sub-key, trimming empty segments.
fn join_key(parent: &str, child: &str) -> String {
    format!("{parent}.{child}")
        .trim_matches('.')
        .to_string()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    fn min_length_error() -> Error {
        Error::new(codes::IS_MIN_LENGTH, crate::message::templates::IS_MIN_LENGTH)
            .with_param("min", 8)
            .with_param(ATTRIBUTE_PARAM, "password")
    }

    #[test]
    fn test_param_replace_by_key() {
        let error = Error::new("code", "{value}")
            .with_param("value", 1)
            .with_param("value", 2);
        assert_eq!(error.param("value"), Some("2"));
        assert_eq!(error.params().len(), 1);
    }

    #[test]
    fn test_to_message_renders_default_template() {
        let error = min_length_error();
        assert_eq!(
            error.to_message(),
            "password should have length greater than or equal to 8."
        );
    }

    #[test]
    fn test_custom_message_wins() {
        let error = min_length_error().with_message("{attribute}: at least {min} chars");
        assert_eq!(error.to_message(), "password: at least 8 chars");
    }

    #[test]
    fn test_errors_dedup_first_wins() {
        let mut errors = Errors::new();
        errors.add(Error::new("is_blank", "first"));
        errors.add(Error::new("is_blank", "second"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("is_blank").unwrap().message(), "first");
    }

    #[test]
    fn test_bag_add_and_query() {
        let mut bag = ErrorBag::new();
        bag.add("name", Error::new("is_not_blank", "m"));
        assert!(bag.fails());
        assert!(bag.has("name"));
        assert!(!bag.has("email"));
        assert!(bag.failed_at("name", &[]));
        assert!(bag.failed_at("name", &["is_not_blank"]));
        assert!(!bag.failed_at("name", &["is_min_length"]));
        assert_eq!(bag.failed(), vec!["name"]);
    }

    #[test]
    fn test_nested_bag_flattens_with_dot_joined_keys() {
        let mut inner = ErrorBag::new();
        inner.add("password", Error::new("is_min_length", "m"));
        inner.add("name", Error::new("is_not_blank", "m"));

        let mut outer = ErrorBag::new();
        outer.add("users.2", inner);

        assert!(outer.has("users.2.password"));
        assert!(outer.has("users.2.name"));
        assert!(!outer.has("users.2"));
    }

    #[test]
    fn test_nested_bag_empty_subkey_keeps_parent_key() {
        let mut inner = ErrorBag::new();
        inner.add("", Error::new("is_not_blank", "m"));

        let mut outer = ErrorBag::new();
        outer.add("name", inner);

        assert!(outer.has("name"));
        assert_eq!(outer.failed(), vec!["name"]);
    }

    #[test]
    fn test_doubly_nested_bags_flatten_recursively() {
        let mut level2 = ErrorBag::new();
        level2.add("street", Error::new("is_not_blank", "m"));

        let mut level1 = ErrorBag::new();
        level1.add("address", level2);

        let mut root = ErrorBag::new();
        root.add("users.0", level1);

        assert!(root.has("users.0.address.street"));
    }

    #[test]
    fn test_flatten_dedups_by_code() {
        let mut inner = ErrorBag::new();
        inner.add("", Error::new("is_not_blank", "from nested"));

        let mut outer = ErrorBag::new();
        outer.add("name", Error::new("is_not_blank", "direct"));
        outer.add("name", inner);

        let errors = outer.errors("name").unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("is_not_blank").unwrap().message(), "direct");
    }

    #[test]
    fn test_merge_preserves_keys() {
        let mut other = ErrorBag::new();
        other.add("email", Error::new("is_match", "m"));

        let mut bag = ErrorBag::new();
        bag.add("name", Error::new("is_not_blank", "m"));
        bag.merge(other);

        assert!(bag.has("name"));
        assert!(bag.has("email"));
    }

    #[test]
    fn test_override_message() {
        let mut bag = ErrorBag::new();
        bag.add("name", min_length_error());
        bag.override_message("name", codes::IS_MIN_LENGTH, "too short!");
        assert_eq!(bag.message("name"), vec!["too short!".to_string()]);
    }

    #[test]
    fn test_set_messages_bulk() {
        let mut bag = ErrorBag::new();
        bag.add("name", Error::new("is_not_blank", "{attribute} missing"));
        bag.add("age", Error::new("is_number", "{attribute} not a number"));
        bag.set_messages([
            ("name", "is_not_blank", "name required"),
            ("age", "is_number", "age must be numeric"),
            ("age", "is_blank", "never matches"),
        ]);
        assert_eq!(bag.message("name"), vec!["name required".to_string()]);
        assert_eq!(bag.message("age"), vec!["age must be numeric".to_string()]);
    }

    #[test]
    fn test_serialize_shape() {
        let mut bag = ErrorBag::new();
        bag.add("name", min_length_error());
        let json = serde_json::to_value(&bag).unwrap();
        assert_eq!(
            json["name"][0]["code"],
            serde_json::Value::String("is_min_length".into())
        );
        assert!(
            json["name"][0]["message"]
                .as_str()
                .unwrap()
                .contains("greater than or equal to 8")
        );
    }

    #[test]
    fn test_join_key_trims_empty_segments() {
        assert_eq!(join_key("users", "2"), "users.2");
        assert_eq!(join_key("", "name"), "name");
        assert_eq!(join_key("users", ""), "users");
        assert_eq!(join_key("", ""), "");
        assert_eq!(join_key("a.b", "c"), "a.b.c");
    }
}
