//! Slice rules: membership, uniqueness and element counts.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::marker::PhantomData;

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
// MEMBERSHIP
// ============================================================================

/// Validates that a slice contains every one of the given elements.
#[derive(Debug, Clone)]
pub struct Includes<T> {
    elements: Vec<T>,
}

impl<T> Validate for Includes<T>
where
    T: PartialEq + Display,
{
    type Input = [T];

    fn validate(&self, input: &[T]) -> Result<(), RuleError> {
        if self.elements.iter().all(|element| input.contains(element)) {
            Ok(())
        } else {
            Err(Error::new(codes::IS_INCLUDES, templates::IS_INCLUDES)
                .with_param("values", quote_join(&self.elements))
                .into())
        }
    }
}

/// Validates that a slice contains none of the given elements.
#[derive(Debug, Clone)]
pub struct Excludes<T> {
    elements: Vec<T>,
}

impl<T> Validate for Excludes<T>
where
    T: PartialEq + Display,
{
    type Input = [T];

    fn validate(&self, input: &[T]) -> Result<(), RuleError> {
        if self.elements.iter().any(|element| input.contains(element)) {
            Err(Error::new(codes::IS_EXCLUDES, templates::IS_EXCLUDES)
                .with_param("values", quote_join(&self.elements))
                .into())
        } else {
            Ok(())
        }
    }
}

/// Slice should include every one of `elements`.
pub fn includes<T: PartialEq + Display>(elements: impl Into<Vec<T>>) -> Includes<T> {
    Includes {
        elements: elements.into(),
    }
}

/// Slice should include none of `elements`.
pub fn excludes<T: PartialEq + Display>(elements: impl Into<Vec<T>>) -> Excludes<T> {
    Excludes {
        elements: elements.into(),
    }
}

// ============================================================================
// UNIQUENESS
// ============================================================================

/// Validates that a slice contains no duplicate elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unique<T> {
    _marker: PhantomData<fn(&T)>,
}

impl<T> Validate for Unique<T>
where
    T: Eq + Hash,
{
    type Input = [T];

    fn validate(&self, input: &[T]) -> Result<(), RuleError> {
        let mut seen = HashSet::with_capacity(input.len());
        for element in input {
            if !seen.insert(element) {
                return Err(Error::new(codes::IS_UNIQUE, templates::IS_UNIQUE).into());
            }
        }
        Ok(())
    }
}

/// Slice should contain no duplicates.
#[must_use]
pub const fn unique<T: Eq + Hash>() -> Unique<T> {
    Unique {
        _marker: PhantomData,
    }
}

// ============================================================================
// COUNTS
// ============================================================================

macro_rules! count_rule {
    (
        $(#[$meta:meta])*
        $name:ident, $factory:ident, $code:expr, $template:expr, $holds:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<T> {
            count: usize,
            _marker: PhantomData<fn(&T)>,
        }

        impl<T> Validate for $name<T> {
            type Input = [T];

            fn validate(&self, input: &[T]) -> Result<(), RuleError> {
                let holds: fn(usize, usize) -> bool = $holds;
                if holds(input.len(), self.count) {
                    Ok(())
                } else {
                    Err(Error::new($code, $template)
                        .with_param("count", self.count)
                        .into())
                }
            }
        }

        #[doc = concat!("Builds a [`", stringify!($name), "`] rule.")]
        #[must_use]
        pub const fn $factory<T>(count: usize) -> $name<T> {
            $name {
                count,
                _marker: PhantomData,
            }
        }
    };
}

count_rule!(
    /// Validates that a slice has exactly `count` elements.
    Count,
    count,
    codes::IS_COUNT,
    templates::IS_COUNT,
    |len, count| len == count
);

count_rule!(
    /// Validates that a slice has at least `count` elements.
    MinCount,
    min_count,
    codes::IS_MIN_COUNT,
    templates::IS_MIN_COUNT,
    |len, count| len >= count
);

count_rule!(
    /// Validates that a slice has at most `count` elements.
    MaxCount,
    max_count,
    codes::IS_MAX_COUNT,
    templates::IS_MAX_COUNT,
    |len, count| len <= count
);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_includes() {
        let rule = includes(vec!["a", "b"]);
        assert!(rule.validate(&["a", "b", "c"][..]).is_ok());
        let err = rule.validate(&["a", "c"][..]).unwrap_err();
        match err {
            RuleError::Single(error) => {
                assert_eq!(error.code(), codes::IS_INCLUDES);
                assert_eq!(error.param("values"), Some("\"a\", \"b\""));
            }
            RuleError::Nested(_) => panic!("expected single failure"),
        }
    }

    #[test]
    fn test_excludes() {
        let rule = excludes(vec![0, 13]);
        assert!(rule.validate(&[1, 2, 3][..]).is_ok());
        assert!(rule.validate(&[1, 13][..]).is_err());
    }

    #[test]
    fn test_unique() {
        assert!(unique::<i32>().validate(&[1, 2, 3][..]).is_ok());
        assert!(unique::<i32>().validate(&[1, 2, 1][..]).is_err());
        assert!(unique::<i32>().validate(&[][..]).is_ok());
    }

    #[test]
    fn test_count() {
        assert!(count::<i32>(3).validate(&[1, 2, 3][..]).is_ok());
        assert!(count::<i32>(3).validate(&[1, 2][..]).is_err());
    }

    #[test]
    fn test_min_count() {
        assert!(min_count::<i32>(2).validate(&[1, 2][..]).is_ok());
        let err = min_count::<i32>(2).validate(&[1][..]).unwrap_err();
        match err {
            RuleError::Single(error) => assert_eq!(error.param("count"), Some("2")),
            RuleError::Nested(_) => panic!("expected single failure"),
        }
    }

    #[test]
    fn test_max_count() {
        assert!(max_count::<i32>(2).validate(&[1, 2][..]).is_ok());
        assert!(max_count::<i32>(2).validate(&[1, 2, 3][..]).is_err());
    }
}
