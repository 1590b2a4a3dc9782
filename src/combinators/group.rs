//! GROUP combinator - runs a whole rule set against one value.

use std::fmt;

use crate::foundation::{ErrorBag, RuleError, Validate};

/// Runs every rule in a set against one value, collecting all failures.
///
/// Unlike [`And`](crate::combinators::And), a group never short-circuits:
/// each rule runs and each failure is recorded. Failures land in a nested
/// bag under the empty key, so they flatten onto the parent attribute key
/// (deduplicated by code) when the group is attached to an attribute.
///
/// The [`rules!`](crate::rules) macro is the usual way to build one:
///
/// ```rust,ignore
/// use verity::prelude::*;
///
/// let password = rules![not_empty(), min_length(8), max_length(64)];
/// let err = password.validate("").unwrap_err();
/// // both `is_not_blank` and `is_min_length` are reported
/// ```
pub struct Group<I: ?Sized> {
    rules: Vec<Box<dyn Validate<Input = I>>>,
}

impl<I: ?Sized> Group<I> {
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Validate<Input = I>>>) -> Self {
        Self { rules }
    }

    /// Appends another rule to the set.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, rule: impl Validate<Input = I> + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<I: ?Sized> Default for Group<I> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<I: ?Sized> fmt::Debug for Group<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group").field("rules", &self.rules.len()).finish()
    }
}

impl<I: ?Sized> Validate for Group<I> {
    type Input = I;

    fn validate(&self, input: &I) -> Result<(), RuleError> {
        let mut bag = ErrorBag::new();
        for rule in &self.rules {
            if let Err(error) = rule.validate(input) {
                bag.add("", error);
            }
        }
        if bag.fails() {
            Err(RuleError::Nested(bag))
        } else {
            Ok(())
        }
    }
}

/// Creates an empty group; chain `.rule(...)` to populate it.
#[must_use]
pub fn group<I: ?Sized>() -> Group<I> {
    Group::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;
    use crate::validators::length::{min_length, not_empty};
    use crate::validators::pattern::contains;

    #[test]
    fn test_group_all_pass() {
        let rule = group().rule(not_empty()).rule(min_length(3));
        assert!(rule.validate("hello").is_ok());
    }

    #[test]
    fn test_group_collects_all_failures() {
        let rule = group()
            .rule(not_empty())
            .rule(min_length(3))
            .rule(contains("@"));
        let err = rule.validate("").unwrap_err();
        match err {
            RuleError::Nested(bag) => {
                let errors = bag.errors("").unwrap();
                assert!(errors.has(codes::IS_NOT_BLANK));
                assert!(errors.has(codes::IS_MIN_LENGTH));
                assert!(errors.has(codes::IS_CONTAINS));
            }
            RuleError::Single(_) => panic!("expected nested failures"),
        }
    }

    #[test]
    fn test_group_does_not_short_circuit() {
        let rule = group().rule(min_length(5)).rule(contains("x"));
        let err = rule.validate("hi").unwrap_err();
        match err {
            RuleError::Nested(bag) => {
                assert_eq!(bag.errors("").unwrap().len(), 2);
            }
            RuleError::Single(_) => panic!("expected nested failures"),
        }
    }

    #[test]
    fn test_empty_group_passes() {
        let rule: Group<str> = group();
        assert!(rule.validate("anything").is_ok());
    }
}
