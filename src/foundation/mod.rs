//! Core validation types and traits.
//!
//! The foundation is two things:
//!
//! - the **error aggregation core** ([`Error`], [`Errors`], [`ErrorBag`],
//!   [`RuleError`]) — failures keyed by code and by hierarchical attribute
//!   path, with nested-bag flattening and dedup-by-code;
//! - the **rule traits** ([`Validate`], [`ValidateExt`], [`Validatable`])
//!   that every built-in and user-defined rule implements.

pub mod error;
pub mod traits;

pub use error::{ATTRIBUTE_PARAM, Error, ErrorBag, Errors, Params, RuleError};
pub use traits::{Validatable, Validate, ValidateExt};
