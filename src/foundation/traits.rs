//! Core traits of the rule system.

use crate::foundation::error::{ErrorBag, RuleError};

// ============================================================================
// VALIDATE TRAIT
// ============================================================================

/// The core trait every rule implements.
///
/// Rules are generic over their input type, giving compile-time type safety.
/// A rule reports either a single failure or, for nested runs, a bag of
/// keyed failures (see [`RuleError`]).
///
/// # Examples
///
/// ```rust,ignore
/// use verity::foundation::{Error, RuleError, Validate};
///
/// struct MinLength { min: usize }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), RuleError> {
///         if input.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(Error::new("is_min_length", "{attribute} too short").into())
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type being validated. `?Sized` so rules can target `str`, `[T]`
    /// and other DSTs directly.
    type Input: ?Sized;

    /// Runs the rule against a value.
    fn validate(&self, input: &Self::Input) -> Result<(), RuleError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATE EXTENSION TRAIT
// ============================================================================

/// Fluent combinators, implemented for every rule.
///
/// # Examples
///
/// ```rust,ignore
/// use verity::prelude::*;
///
/// let username = not_empty().and(min_length(3)).and(max_length(20));
/// assert!(username.validate("alice").is_ok());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both rules must pass; short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one rule must pass; short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the rule: passes when the inner rule fails.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Applies the rule only when the condition holds; skipped otherwise.
    fn when(self, condition: bool) -> When<Self> {
        When::new(condition, self)
    }

    /// Lifts the rule over `Option`: `None` always passes.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Overrides the failure's message template.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Overrides the failure's code, keeping the message.
    fn with_code(self, code: impl Into<String>) -> WithMessage<Self> {
        WithMessage::code_only(self, code)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// VALIDATABLE
// ============================================================================

/// Types that validate themselves into an [`ErrorBag`].
///
/// Implementors typically run a [`Validation`](crate::validation::Validation)
/// over their fields; the resulting bag flattens under the parent attribute
/// key when consumed through `Validation::nested` or the
/// [`nested`](crate::combinators::nested) combinator.
///
/// # Examples
///
/// ```rust,ignore
/// impl Validatable for Profile {
///     fn validate(&self) -> Result<(), ErrorBag> {
///         let mut run = Validation::new();
///         run.attribute("name", self.name.as_str(), not_empty());
///         run.attribute("age", &self.age, greater_than(0));
///         run.into_result()
///     }
/// }
/// ```
pub trait Validatable {
    /// Validates the instance, reporting all failures keyed by field.
    fn validate(&self) -> Result<(), ErrorBag>;
}

// Combinator types referenced by the extension trait.
pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;
pub use crate::combinators::not::Not;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;
pub use crate::combinators::when::When;

// ============================================================================
// TESTS
// ============================================================================
