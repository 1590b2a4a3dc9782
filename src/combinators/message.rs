//! MESSAGE combinator - per-rule message and code overrides.

use crate::foundation::{RuleError, Validate};

/// Overrides the message template (and optionally the code) of a failure.
///
/// The override is recorded as the error's custom message, which wins over
/// catalog lookups at render time; params still substitute. Nested failures
/// (from `Each`/`Group`) pass through untouched.
///
/// # Examples
///
/// ```rust,ignore
/// use verity::prelude::*;
///
/// let rule = min_length(8).with_message("{attribute} needs {min}+ characters");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Option<String>,
    code: Option<String>,
}

impl<V> WithMessage<V> {
    /// Overrides the message, keeping the original code.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: Some(message.into()),
            code: None,
        }
    }

    /// Overrides only the code, keeping the original message.
    pub fn code_only(inner: V, code: impl Into<String>) -> Self {
        Self {
            inner,
            message: None,
            code: Some(code.into()),
        }
    }

    /// Also overrides the code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleError> {
        self.inner.validate(input).map_err(|failure| match failure {
            RuleError::Single(mut error) => {
                if let Some(message) = &self.message {
                    error.set_message(message.clone());
                }
                if let Some(code) = &self.code {
                    error = error.with_code(code.clone());
                }
                RuleError::Single(error)
            }
            nested @ RuleError::Nested(_) => nested,
        })
    }
}

/// Overrides a rule's failure message.
pub fn with_message<V: Validate>(rule: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(rule, message)
}

/// Overrides a rule's failure code.
pub fn with_code<V: Validate>(rule: V, code: impl Into<String>) -> WithMessage<V> {
    WithMessage::code_only(rule, code)
}
