//! WHEN combinator - conditional rule application.

use crate::foundation::{RuleError, Validate};

/// Applies a rule only when a condition held at build time.
///
/// The condition is a plain `bool` captured when the rule chain is built,
/// which keeps conditional chains data-driven: compute the condition from
/// the input being validated, then assemble the chain.
///
/// # Examples
///
/// ```rust,ignore
/// use verity::prelude::*;
///
/// let requires_company = form.account_type == "business";
/// let rule = not_empty().when(requires_company);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct When<V> {
    condition: bool,
    inner: V,
}

impl<V> When<V> {
    pub fn new(condition: bool, inner: V) -> Self {
        Self { condition, inner }
    }

    pub fn condition(&self) -> bool {
        self.condition
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for When<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleError> {
        if self.condition {
            self.inner.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Applies the rule only when the condition holds.
pub fn when<V: Validate>(condition: bool, rule: V) -> When<V> {
    When::new(condition, rule)
}
