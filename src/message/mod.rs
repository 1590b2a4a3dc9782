//! Message rendering: templates, catalogs and locale-aware translation.
//!
//! Failures carry a code plus stringified params; this module turns them
//! into human-readable text. [`Template`] handles placeholder substitution,
//! [`Catalog`] maps codes to templates for one locale, and [`Translator`]
//! walks the locale fallback chain.

pub mod template;
pub mod templates;
pub mod translator;

pub use template::Template;
pub use translator::{ATTRIBUTE_PREFIX, Catalog, Translator, TranslatorBuilder, builtin};
