//! Generic value rules: blank checks, membership and comparisons.

use std::fmt::Display;

use crate::codes;
use crate::foundation::{Error, RuleError, Validate};
use crate::message::templates;

fn quote_join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|value| format!("\"{value}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// BLANK / NOT BLANK
// ============================================================================

/// Validates that a value equals its type's default ("zero value").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blank<T> {
    _marker: std::marker::PhantomData<fn(&T)>,
}

impl<T> Validate for Blank<T>
where
    T: Default + PartialEq,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), RuleError> {
        if *input == T::default() {
            Ok(())
        } else {
            Err(Error::new(codes::IS_BLANK, templates::IS_BLANK).into())
        }
    }
}

/// Validates that a value does not equal its type's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotBlank<T> {
    _marker: std::marker::PhantomData<fn(&T)>,
}

impl<T> Validate for NotBlank<T>
where
    T: Default + PartialEq,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), RuleError> {
        if *input == T::default() {
            Err(Error::new(codes::IS_NOT_BLANK, templates::IS_NOT_BLANK).into())
        } else {
            Ok(())
        }
    }
}

/// Value should be its type's default.
#[must_use]
pub const fn blank<T: Default + PartialEq>() -> Blank<T> {
    Blank {
        _marker: std::marker::PhantomData,
    }
}

/// Value should not be its type's default.
#[must_use]
pub const fn not_blank<T: Default + PartialEq>() -> NotBlank<T> {
    NotBlank {
        _marker: std::marker::PhantomData,
    }
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

/// Validates that a value is one of a fixed set.
#[derive(Debug, Clone)]
pub struct OneOf<T> {
    values: Vec<T>,
}

impl<T> Validate for OneOf<T>
where
    T: PartialEq + Display,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), RuleError> {
        if self.values.contains(input) {
            Ok(())
        } else {
            Err(Error::new(codes::IS_IN, templates::IS_IN)
                .with_param("values", quote_join(&self.values))
                .into())
        }
    }
}

/// Validates that a value is none of a fixed set.
#[derive(Debug, Clone)]
pub struct NotOneOf<T> {
    values: Vec<T>,
}

impl<T> Validate for NotOneOf<T>
where
    T: PartialEq + Display,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), RuleError> {
        if self.values.contains(input) {
            Err(Error::new(codes::IS_NOT_IN, templates::IS_NOT_IN)
                .with_param("values", quote_join(&self.values))
                .into())
        } else {
            Ok(())
        }
    }
}

/// Value should be one of `values`.
pub fn one_of<T: PartialEq + Display>(values: impl Into<Vec<T>>) -> OneOf<T> {
    OneOf {
        values: values.into(),
    }
}

/// Value should not be one of `values`.
pub fn not_one_of<T: PartialEq + Display>(values: impl Into<Vec<T>>) -> NotOneOf<T> {
    NotOneOf {
        values: values.into(),
    }
}

// ============================================================================
// EQUALITY
// ============================================================================

/// Validates that a value equals another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equals<T> {
    other: T,
}

impl<T> Validate for Equals<T>
where
    T: PartialEq + Display,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), RuleError> {
        if *input == self.other {
            Ok(())
        } else {
            Err(Error::new(codes::IS_EQUAL, templates::IS_EQUAL)
                .with_param("value", &self.other)
                .into())
        }
    }
}

/// Validates that a value differs from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotEquals<T> {
    other: T,
}

impl<T> Validate for NotEquals<T>
where
    T: PartialEq + Display,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), RuleError> {
        if *input == self.other {
            Err(Error::new(codes::IS_NOT_EQUAL, templates::IS_NOT_EQUAL)
                .with_param("value", &self.other)
                .into())
        } else {
            Ok(())
        }
    }
}

/// Value should equal `other`.
pub fn equals<T: PartialEq + Display>(other: T) -> Equals<T> {
    Equals { other }
}

/// Value should not equal `other`.
pub fn not_equals<T: PartialEq + Display>(other: T) -> NotEquals<T> {
    NotEquals { other }
}

// ============================================================================
// ORDERING
// ============================================================================

macro_rules! ordering_rule {
    (
        $(#[$meta:meta])*
        $name:ident, $factory:ident, $code:expr, $template:expr, $holds:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<T> {
            other: T,
        }

        impl<T> Validate for $name<T>
        where
            T: PartialOrd + Display,
        {
            type Input = T;

            fn validate(&self, input: &T) -> Result<(), RuleError> {
                let holds: fn(&T, &T) -> bool = $holds;
                if holds(input, &self.other) {
                    Ok(())
                } else {
                    Err(Error::new($code, $template)
                        .with_param("value", &self.other)
                        .into())
                }
            }
        }

        #[doc = concat!("Builds a [`", stringify!($name), "`] rule.")]
        pub fn $factory<T: PartialOrd + Display>(other: T) -> $name<T> {
            $name { other }
        }
    };
}

ordering_rule!(
    /// Validates that a value is strictly less than a bound.
    LessThan,
    less_than,
    codes::IS_LESS_THAN,
    templates::IS_LESS_THAN,
    |input, other| input < other
);

ordering_rule!(
    /// Validates that a value is at most a bound.
    LessThanOrEqual,
    less_than_or_equal,
    codes::IS_LESS_THAN_OR_EQUAL_TO,
    templates::IS_LESS_THAN_OR_EQUAL_TO,
    |input, other| input <= other
);

ordering_rule!(
    /// Validates that a value is strictly greater than a bound.
    GreaterThan,
    greater_than,
    codes::IS_GREATER_THAN,
    templates::IS_GREATER_THAN,
    |input, other| input > other
);

ordering_rule!(
    /// Validates that a value is at least a bound.
    GreaterThanOrEqual,
    greater_than_or_equal,
    codes::IS_GREATER_THAN_OR_EQUAL_TO,
    templates::IS_GREATER_THAN_OR_EQUAL_TO,
    |input, other| input >= other
);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of(failure: RuleError) -> String {
        match failure {
            RuleError::Single(error) => error.code().to_string(),
            RuleError::Nested(_) => panic!("expected single failure"),
        }
    }

    #[test]
    fn test_blank() {
        assert!(blank().validate(&0_i64).is_ok());
        assert!(blank().validate(&String::new()).is_ok());
        assert!(blank().validate(&7_i64).is_err());
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank().validate(&"x".to_string()).is_ok());
        let err = not_blank().validate(&String::new()).unwrap_err();
        assert_eq!(code_of(err), codes::IS_NOT_BLANK);
    }

    #[test]
    fn test_one_of() {
        let rule = one_of(vec!["red", "green", "blue"]);
        assert!(rule.validate(&"red").is_ok());
        let err = rule.validate(&"pink").unwrap_err();
        match err {
            RuleError::Single(error) => {
                assert_eq!(error.code(), codes::IS_IN);
                assert_eq!(error.param("values"), Some("\"red\", \"green\", \"blue\""));
            }
            RuleError::Nested(_) => panic!("expected single failure"),
        }
    }

    #[test]
    fn test_not_one_of() {
        let rule = not_one_of(vec![1, 2, 3]);
        assert!(rule.validate(&4).is_ok());
        assert_eq!(code_of(rule.validate(&2).unwrap_err()), codes::IS_NOT_IN);
    }

    #[test]
    fn test_equals() {
        assert!(equals(42).validate(&42).is_ok());
        assert_eq!(code_of(equals(42).validate(&41).unwrap_err()), codes::IS_EQUAL);
    }

    #[test]
    fn test_not_equals() {
        assert!(not_equals(42).validate(&41).is_ok());
        assert!(not_equals(42).validate(&42).is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(less_than(10).validate(&9).is_ok());
        assert!(less_than(10).validate(&10).is_err());
        assert!(less_than_or_equal(10).validate(&10).is_ok());
        assert!(less_than_or_equal(10).validate(&11).is_err());
        assert!(greater_than(10).validate(&11).is_ok());
        assert!(greater_than(10).validate(&10).is_err());
        assert!(greater_than_or_equal(10).validate(&10).is_ok());
        assert!(greater_than_or_equal(10).validate(&9).is_err());
    }

    #[test]
    fn test_ordering_reports_bound_param() {
        let err = greater_than(18).validate(&7).unwrap_err();
        match err {
            RuleError::Single(error) => {
                assert_eq!(error.code(), codes::IS_GREATER_THAN);
                assert_eq!(error.param("value"), Some("18"));
            }
            RuleError::Nested(_) => panic!("expected single failure"),
        }
    }
}
