//! OR combinator - logical disjunction of rules.

use crate::foundation::{RuleError, Validate};

/// Combines two rules with logical OR.
///
/// Passes as soon as either rule passes. When both fail, the right rule's
/// failure is reported.
///
/// # Examples
///
/// ```rust,ignore
/// use verity::prelude::*;
///
/// let rule = length(5).or(length(10));
/// assert!(rule.validate("hello").is_ok());
/// assert!(rule.validate("hi").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleError> {
        if self.left.validate(input).is_ok() {
            return Ok(());
        }
        self.right.validate(input)
    }
}

/// Creates an `Or` combinator from two rules.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
