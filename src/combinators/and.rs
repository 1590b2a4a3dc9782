//! AND combinator - logical conjunction of rules.

use crate::foundation::{RuleError, Validate};

/// Combines two rules with logical AND.
///
/// Both rules must pass; the failure of the first failing rule is reported.
///
/// # Examples
///
/// ```rust,ignore
/// use verity::prelude::*;
///
/// let rule = min_length(5).and(max_length(10));
/// assert!(rule.validate("hello").is_ok());
/// assert!(rule.validate("hi").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two rules.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
