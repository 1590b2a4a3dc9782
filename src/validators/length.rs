//! String length rules.
//!
//! Length is measured in Unicode scalar values, not bytes.

use crate::codes;
use crate::foundation::Error;
use crate::message::templates;

crate::rule! {
    /// Validates that a string is not empty.
    pub NotEmpty for str;
    check(input) { !input.is_empty() }
    fail(input) { Error::new(codes::IS_NOT_BLANK, templates::IS_NOT_BLANK) }
    fn not_empty();
}

crate::rule! {
    /// Validates that a string has an exact length.
    #[derive(Copy, PartialEq, Eq)]
    pub Length { length: usize } for str;
    check(self, input) { input.chars().count() == self.length }
    fail(self, input) {
        Error::new(codes::IS_LENGTH, templates::IS_LENGTH).with_param("length", self.length)
    }
    fn length(length: usize);
}

crate::rule! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq)]
    pub MinLength { min: usize } for str;
    check(self, input) { input.chars().count() >= self.min }
    fail(self, input) {
        Error::new(codes::IS_MIN_LENGTH, templates::IS_MIN_LENGTH).with_param("min", self.min)
    }
    fn min_length(min: usize);
}

crate::rule! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq)]
    pub MaxLength { max: usize } for str;
    check(self, input) { input.chars().count() <= self.max }
    fail(self, input) {
        Error::new(codes::IS_MAX_LENGTH, templates::IS_MAX_LENGTH).with_param("max", self.max)
    }
    fn max_length(max: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{RuleError, Validate};

    fn single(failure: RuleError) -> crate::foundation::Error {
        match failure {
            RuleError::Single(error) => error,
            RuleError::Nested(_) => panic!("expected single failure"),
        }
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty().validate("x").is_ok());
        assert!(not_empty().validate(" ").is_ok());
        assert!(not_empty().validate("").is_err());
    }

    #[test]
    fn test_length() {
        assert!(length(5).validate("hello").is_ok());
        assert!(length(5).validate("hell").is_err());
        assert!(length(5).validate("hello!").is_err());
    }

    #[test]
    fn test_min_length() {
        assert!(min_length(5).validate("hello").is_ok());
        let error = single(min_length(5).validate("hi").unwrap_err());
        assert_eq!(error.code(), codes::IS_MIN_LENGTH);
        assert_eq!(error.param("min"), Some("5"));
    }

    #[test]
    fn test_max_length() {
        assert!(max_length(5).validate("hello").is_ok());
        assert!(max_length(5).validate("hello!").is_err());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // two scalar values, eight bytes
        assert!(length(2).validate("\u{1f44b}\u{1f30d}").is_ok());
        assert!(min_length(3).validate("\u{1f44b}\u{1f30d}").is_err());
        assert!(max_length(2).validate("\u{1f44b}\u{1f30d}").is_ok());
    }
}
