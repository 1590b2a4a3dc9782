//! # verity
//!
//! A composable, type-safe data-validation library. Attach named rules to
//! attribute values and get back a structured bag of failures keyed by
//! hierarchical attribute path, with localizable, templated messages.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verity::prelude::*;
//!
//! let bag = validate(|v| {
//!     v.attribute("username", username, rules![not_empty(), min_length(3)]);
//!     v.attribute("email", email, matches(r"^\S+@\S+$").unwrap());
//!     v.each("tags", &tags, max_length(16));
//! });
//!
//! if bag.fails() {
//!     for (key, messages) in bag.messages() {
//!         eprintln!("{key}: {}", messages.join(", "));
//!     }
//! }
//! ```
//!
//! ## Composing Rules
//!
//! Rules compose with `.and()` / `.or()` / `.not()` / `.when()`, and the
//! [`rules!`] macro builds an all-failures set (no short-circuit). Nested
//! values report under dot-joined paths: element 2 of `users` failing its
//! `password` rule surfaces as `users.2.password`.
//!
//! ## Localization
//!
//! Failures carry a stable code and stringified params. A
//! [`Translator`](message::Translator) maps codes to message templates per
//! locale with a fallback chain, supports attribute display names, and every
//! template and message stays overridable per validator, per rule and per
//! key/code pair.

// RuleError embeds a full ErrorBag for nested runs; boxing it would add
// indirection to every rule call for no practical benefit.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex
// types that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod codes;
pub mod combinators;
pub mod form;
pub mod foundation;
mod macros;
pub mod message;
pub mod prelude;
pub mod validation;
pub mod validators;

pub use foundation::{Error, ErrorBag, Errors, RuleError, Validatable, Validate, ValidateExt};
pub use validation::{
    Validation, Validator, validate, validate_attribute, validate_it, validate_value,
};
