//! String pattern and character-class rules.

use crate::codes;
use crate::foundation::Error;
use crate::message::templates;

/// Error raised when a rule is built from an invalid regular expression.
#[derive(Debug, thiserror::Error)]
#[error("invalid pattern: {0}")]
pub struct PatternError(#[from] regex::Error);

fn quote(value: &str) -> String {
    format!("\"{value}\"")
}

fn quote_join(values: &[String]) -> String {
    values
        .iter()
        .map(|value| quote(value))
        .collect::<Vec<_>>()
        .join(", ")
}

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

// ============================================================================
// PREFIX / SUFFIX
// ============================================================================

crate::rule! {
    /// Validates that a string starts with a prefix.
    pub StartsWith { prefix: String } for str;
    check(self, input) { input.starts_with(&self.prefix) }
    fail(self, input) {
        Error::new(codes::IS_STARTS_WITH, templates::IS_STARTS_WITH)
            .with_param("prefix", quote(&self.prefix))
    }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
    fn starts_with(prefix: impl Into<String>);
}

crate::rule! {
    /// Validates that a string starts with one of the given prefixes.
    pub StartsWithAny { prefixes: Vec<String> } for str;
    check(self, input) { self.prefixes.iter().any(|prefix| input.starts_with(prefix)) }
    fail(self, input) {
        Error::new(codes::IS_STARTS_WITH_ANY, templates::IS_STARTS_WITH_ANY)
            .with_param("prefixes", quote_join(&self.prefixes))
    }
    new(prefixes: &[&str]) { Self { prefixes: to_owned_list(prefixes) } }
    fn starts_with_any(prefixes: &[&str]);
}

crate::rule! {
    /// Validates that a string does not start with a prefix.
    pub NotStartsWith { prefix: String } for str;
    check(self, input) { !input.starts_with(&self.prefix) }
    fail(self, input) {
        Error::new(codes::IS_NOT_STARTS_WITH, templates::IS_NOT_STARTS_WITH)
            .with_param("prefix", quote(&self.prefix))
    }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
    fn not_starts_with(prefix: impl Into<String>);
}

crate::rule! {
    /// Validates that a string starts with none of the given prefixes.
    pub NotStartsWithAny { prefixes: Vec<String> } for str;
    check(self, input) { !self.prefixes.iter().any(|prefix| input.starts_with(prefix)) }
    fail(self, input) {
        Error::new(codes::IS_NOT_STARTS_WITH_ANY, templates::IS_NOT_STARTS_WITH_ANY)
            .with_param("prefixes", quote_join(&self.prefixes))
    }
    new(prefixes: &[&str]) { Self { prefixes: to_owned_list(prefixes) } }
    fn not_starts_with_any(prefixes: &[&str]);
}

crate::rule! {
    /// Validates that a string ends with a suffix.
    pub EndsWith { suffix: String } for str;
    check(self, input) { input.ends_with(&self.suffix) }
    fail(self, input) {
        Error::new(codes::IS_ENDS_WITH, templates::IS_ENDS_WITH)
            .with_param("suffix", quote(&self.suffix))
    }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
    fn ends_with(suffix: impl Into<String>);
}

crate::rule! {
    /// Validates that a string ends with one of the given suffixes.
    pub EndsWithAny { suffixes: Vec<String> } for str;
    check(self, input) { self.suffixes.iter().any(|suffix| input.ends_with(suffix)) }
    fail(self, input) {
        Error::new(codes::IS_ENDS_WITH_ANY, templates::IS_ENDS_WITH_ANY)
            .with_param("suffixes", quote_join(&self.suffixes))
    }
    new(suffixes: &[&str]) { Self { suffixes: to_owned_list(suffixes) } }
    fn ends_with_any(suffixes: &[&str]);
}

crate::rule! {
    /// Validates that a string does not end with a suffix.
    pub NotEndsWith { suffix: String } for str;
    check(self, input) { !input.ends_with(&self.suffix) }
    fail(self, input) {
        Error::new(codes::IS_NOT_ENDS_WITH, templates::IS_NOT_ENDS_WITH)
            .with_param("suffix", quote(&self.suffix))
    }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
    fn not_ends_with(suffix: impl Into<String>);
}

crate::rule! {
    /// Validates that a string ends with none of the given suffixes.
    pub NotEndsWithAny { suffixes: Vec<String> } for str;
    check(self, input) { !self.suffixes.iter().any(|suffix| input.ends_with(suffix)) }
    fail(self, input) {
        Error::new(codes::IS_NOT_ENDS_WITH_ANY, templates::IS_NOT_ENDS_WITH_ANY)
            .with_param("suffixes", quote_join(&self.suffixes))
    }
    new(suffixes: &[&str]) { Self { suffixes: to_owned_list(suffixes) } }
    fn not_ends_with_any(suffixes: &[&str]);
}

// ============================================================================
// SUBSTRING
// ============================================================================

crate::rule! {
    /// Validates that a string contains a substring.
    pub Contains { substring: String } for str;
    check(self, input) { input.contains(&self.substring) }
    fail(self, input) {
        Error::new(codes::IS_CONTAINS, templates::IS_CONTAINS)
            .with_param("substring", quote(&self.substring))
    }
    new(substring: impl Into<String>) { Self { substring: substring.into() } }
    fn contains(substring: impl Into<String>);
}

crate::rule! {
    /// Validates that a string does not contain a substring.
    pub NotContains { substring: String } for str;
    check(self, input) { !input.contains(&self.substring) }
    fail(self, input) {
        Error::new(codes::IS_NOT_CONTAINS, templates::IS_NOT_CONTAINS)
            .with_param("substring", quote(&self.substring))
    }
    new(substring: impl Into<String>) { Self { substring: substring.into() } }
    fn not_contains(substring: impl Into<String>);
}

// ============================================================================
// REGEX
// ============================================================================

crate::rule! {
    /// Validates that a string matches a regular expression.
    pub Matches { pattern: regex::Regex } for str;
    check(self, input) { self.pattern.is_match(input) }
    fail(self, input) {
        Error::new(codes::IS_MATCH, templates::IS_MATCH)
            .with_param("pattern", quote(self.pattern.as_str()))
    }
    new(pattern: &str) -> PatternError {
        Ok(Self { pattern: regex::Regex::new(pattern)? })
    }
    fn matches(pattern: &str) -> PatternError;
}

crate::rule! {
    /// Validates that a string does not match a regular expression.
    pub NotMatches { pattern: regex::Regex } for str;
    check(self, input) { !self.pattern.is_match(input) }
    fail(self, input) {
        Error::new(codes::IS_NOT_MATCH, templates::IS_NOT_MATCH)
            .with_param("pattern", quote(self.pattern.as_str()))
    }
    new(pattern: &str) -> PatternError {
        Ok(Self { pattern: regex::Regex::new(pattern)? })
    }
    fn not_matches(pattern: &str) -> PatternError;
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::rule! {
    /// Validates that a string contains no lowercase letters.
    pub Uppercase for str;
    check(input) { !input.chars().any(char::is_lowercase) }
    fail(input) { Error::new(codes::IS_UPPER, templates::IS_UPPER) }
    fn uppercase();
}

crate::rule! {
    /// Validates that a string contains no uppercase letters.
    pub Lowercase for str;
    check(input) { !input.chars().any(char::is_uppercase) }
    fail(input) { Error::new(codes::IS_LOWER, templates::IS_LOWER) }
    fn lowercase();
}

crate::rule! {
    /// Validates that a string contains only letters.
    pub Alphabetic for str;
    check(input) { input.chars().all(char::is_alphabetic) }
    fail(input) { Error::new(codes::IS_ALPHA, templates::IS_ALPHA) }
    fn alphabetic();
}

crate::rule! {
    /// Validates that a string contains only letters and digits.
    pub Alphanumeric for str;
    check(input) { input.chars().all(char::is_alphanumeric) }
    fail(input) { Error::new(codes::IS_ALPHA_NUMERIC, templates::IS_ALPHA_NUMERIC) }
    fn alphanumeric();
}

crate::rule! {
    /// Validates that a string contains only letters, digits, `-` and `_`.
    pub AlphaDash for str;
    check(input) { input.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') }
    fail(input) { Error::new(codes::IS_ALPHA_DASH, templates::IS_ALPHA_DASH) }
    fn alpha_dash();
}

crate::rule! {
    /// Validates that a string contains only ASCII letters.
    pub Ascii for str;
    check(input) { input.chars().all(|c| c.is_ascii_alphabetic()) }
    fail(input) { Error::new(codes::IS_ASCII, templates::IS_ASCII) }
    fn ascii();
}

crate::rule! {
    /// Validates that a string contains only ASCII letters and digits.
    pub AsciiNumeric for str;
    check(input) { input.chars().all(|c| c.is_ascii_alphanumeric()) }
    fail(input) { Error::new(codes::IS_ASCII_NUMERIC, templates::IS_ASCII_NUMERIC) }
    fn ascii_numeric();
}

crate::rule! {
    /// Validates that a string contains only ASCII letters, digits, `-` and `_`.
    pub AsciiDash for str;
    check(input) { input.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') }
    fail(input) { Error::new(codes::IS_ASCII_DASH, templates::IS_ASCII_DASH) }
    fn ascii_dash();
}

// ============================================================================
// TESTS
// ============================================================================
