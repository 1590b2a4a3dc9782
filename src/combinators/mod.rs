//! Rule combinators.
//!
//! Combinators compose rules into richer ones: logical composition
//! ([`And`], [`Or`], [`Not`]), conditional and optional application
//! ([`When`], [`Optional`]), aggregation over rule sets and collections
//! ([`Group`], [`Each`]), delegation to self-validating types ([`Nested`])
//! and per-rule message overrides ([`WithMessage`]).

pub mod and;
pub mod each;
pub mod group;
pub mod message;
pub mod nested;
pub mod not;
pub mod optional;
pub mod or;
pub mod when;

pub use and::{And, and};
pub use each::{Each, each};
pub use group::{Group, group};
pub use message::{WithMessage, with_code, with_message};
pub use nested::{Nested, nested};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, or};
pub use when::{When, when};
