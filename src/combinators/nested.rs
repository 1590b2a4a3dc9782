//! NESTED combinator - delegates to a type's own validation.

use std::marker::PhantomData;

use crate::foundation::{RuleError, Validatable, Validate};

/// Validates a value through its [`Validatable`] implementation.
///
/// The value's error bag becomes a nested failure, so its keys flatten
/// under the attribute this rule is attached to: a `street` failure inside
/// a `Validatable` address attached to `shipping` surfaces as
/// `shipping.street`.
///
/// # Examples
///
/// ```rust,ignore
/// use verity::prelude::*;
///
/// let rule = nested::<Address>();
/// assert!(rule.validate(&address).is_ok());
/// ```
pub struct Nested<T> {
    _marker: PhantomData<fn(&T)>,
}

impl<T> Nested<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Nested<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Nested<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Nested").finish()
    }
}

impl<T> Validate for Nested<T>
where
    T: Validatable,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), RuleError> {
        input.validate().map_err(RuleError::Nested)
    }
}

/// Creates a rule that delegates to the type's own validation.
#[must_use]
pub fn nested<T: Validatable>() -> Nested<T> {
    Nested::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;
    use crate::foundation::{Error, ErrorBag};
    use crate::message::templates;

    struct Address {
        street: String,
    }

    impl Validatable for Address {
        fn validate(&self) -> Result<(), ErrorBag> {
            let mut bag = ErrorBag::new();
            if self.street.is_empty() {
                bag.add(
                    "street",
                    Error::new(codes::IS_NOT_BLANK, templates::IS_NOT_BLANK),
                );
            }
            if bag.fails() { Err(bag) } else { Ok(()) }
        }
    }

    #[test]
    fn test_nested_valid() {
        let address = Address {
            street: "Main St".into(),
        };
        assert!(nested::<Address>().validate(&address).is_ok());
    }

    #[test]
    fn test_nested_failure_keeps_inner_keys() {
        let address = Address { street: String::new() };
        let err = nested::<Address>().validate(&address).unwrap_err();
        match err {
            RuleError::Nested(bag) => assert!(bag.has("street")),
            RuleError::Single(_) => panic!("expected nested failures"),
        }
    }
}
