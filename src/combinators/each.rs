//! EACH combinator - validates every element of a slice.

use crate::foundation::{ErrorBag, RuleError, Validate};

/// Applies a rule to every element of a slice.
///
/// Failures are collected into a nested bag keyed by element index, so a
/// failing element surfaces as `attribute.<index>` after flattening.
///
/// # Examples
///
/// ```rust,ignore
/// use verity::prelude::*;
///
/// let rule = each(rules![not_empty(), min_length(2)]);
/// let err = rule.validate(&["ok", ""][..]).unwrap_err();
/// // index "1" carries both failures
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Each<V> {
    inner: V,
}

impl<V> Each<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Validate for Each<V>
where
    V: Validate<Input = T>,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), RuleError> {
        let mut bag = ErrorBag::new();
        for (index, element) in input.iter().enumerate() {
            if let Err(error) = self.inner.validate(element) {
                bag.add(&index.to_string(), error);
            }
        }
        if bag.fails() {
            Err(RuleError::Nested(bag))
        } else {
            Ok(())
        }
    }
}

/// Creates an `Each` combinator.
pub fn each<V: Validate>(rule: V) -> Each<V> {
    Each::new(rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;
    use crate::validators::generic::greater_than;

    #[test]
    fn test_each_all_valid() {
        let rule = each(greater_than(0));
        assert!(rule.validate(&[1, 2, 3][..]).is_ok());
    }

    #[test]
    fn test_each_collects_failures_by_index() {
        let rule = each(greater_than(0));
        let err = rule.validate(&[1, -2, -3][..]).unwrap_err();
        match err {
            RuleError::Nested(bag) => {
                assert!(!bag.has("0"));
                assert!(bag.failed_at("1", &[codes::IS_GREATER_THAN]));
                assert!(bag.failed_at("2", &[codes::IS_GREATER_THAN]));
            }
            RuleError::Single(_) => panic!("expected nested failures"),
        }
    }

    #[test]
    fn test_each_empty_slice_passes() {
        let rule = each(greater_than(0));
        let empty: [i32; 0] = [];
        assert!(rule.validate(&empty[..]).is_ok());
    }
}
