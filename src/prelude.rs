//! Prelude module for convenient imports.
//!
//! A single `use verity::prelude::*;` brings in the core traits, the error
//! types, every built-in rule factory and the combinators.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity::prelude::*;
//!
//! let bag = validate(|v| {
//!     v.attribute("username", name, rules![not_empty(), min_length(3)]);
//! });
//! ```

// ============================================================================
// FOUNDATION: core traits and error types
// ============================================================================

pub use crate::foundation::{
    ATTRIBUTE_PARAM, Error, ErrorBag, Errors, RuleError, Validatable, Validate, ValidateExt,
};

// ============================================================================
// VALIDATION: validator, runs and free functions
// ============================================================================

pub use crate::validation::{
    Validation, Validator, validate, validate_attribute, validate_it, validate_value,
};

// ============================================================================
// RULES AND COMBINATORS
// ============================================================================

#[allow(ambiguous_glob_reexports)]
pub use crate::validators::*;

pub use crate::combinators::{
    And, Each, Group, Nested, Not, Optional, Or, When, WithMessage, and, each, group, nested,
    not, optional, or, when, with_code, with_message,
};

// ============================================================================
// RENDERING
// ============================================================================

pub use crate::form::Form;
pub use crate::message::{Translator, TranslatorBuilder};
pub use crate::rules;
