//! NOT combinator - inverts a rule.

use crate::codes;
use crate::foundation::{Error, RuleError, Validate};
use crate::message::templates;

/// Inverts a rule: passes when the inner rule fails.
///
/// # Examples
///
/// ```rust,ignore
/// use verity::prelude::*;
///
/// let rule = contains("test").not();
/// assert!(rule.validate("hello world").is_ok());
/// assert!(rule.validate("test string").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleError> {
        match self.inner.validate(input) {
            Ok(()) => Err(Error::new(codes::IS_NOT, templates::IS_NOT).into()),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator.
pub fn not<V: Validate>(rule: V) -> Not<V> {
    Not::new(rule)
}
