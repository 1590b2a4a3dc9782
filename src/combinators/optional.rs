//! OPTIONAL combinator - lifts a rule over `Option`.

use crate::foundation::{RuleError, Validate};

/// Makes a rule accept `Option` input: `None` always passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Validate for Optional<V>
where
    V: Validate<Input = T>,
{
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleError> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value),
        }
    }
}

/// Creates an `Optional` combinator.
pub fn optional<V: Validate>(rule: V) -> Optional<V> {
    Optional::new(rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::generic::greater_than;

    #[test]
    fn test_optional_none() {
        let rule = optional(greater_than(0));
        assert!(rule.validate(&None).is_ok());
    }

    #[test]
    fn test_optional_some_valid() {
        let rule = optional(greater_than(0));
        assert!(rule.validate(&Some(3)).is_ok());
    }

    #[test]
    fn test_optional_some_invalid() {
        let rule = optional(greater_than(0));
        assert!(rule.validate(&Some(-1)).is_err());
    }
}
