//! Locale-aware template lookup.
//!
//! A [`Translator`] owns one [`Catalog`] per locale and resolves a failure
//! code through a fallback chain: requested locale, then the translator's
//! default locale, then the built-in English catalog. Catalogs are built once
//! through [`TranslatorBuilder`] and immutable afterwards.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::codes;
use crate::message::template::Template;
use crate::message::templates;

/// Prefix under which attribute display names are registered.
///
/// Registering `attribute.email => "e-mail address"` makes every message for
/// the `email` attribute substitute the display name instead of the raw key.
pub const ATTRIBUTE_PREFIX: &str = "attribute.";

// ============================================================================
// CATALOG
// ============================================================================

/// A code-to-template map for a single locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: HashMap<Cow<'static, str>, Template>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template source under a code, replacing any previous entry.
    pub fn register(&mut self, code: impl Into<Cow<'static, str>>, source: &str) {
        self.templates.insert(code.into(), Template::parse(source));
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Template> {
        self.templates.get(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// The built-in English catalog covering every built-in failure code.
///
/// Built lazily on first use and shared process-wide.
pub fn builtin() -> &'static Catalog {
    static BUILTIN: OnceLock<Catalog> = OnceLock::new();
    BUILTIN.get_or_init(|| {
        let mut catalog = Catalog::new();
        for (code, template) in DEFAULT_TEMPLATES {
            catalog.register(*code, template);
        }
        catalog
    })
}

#[rustfmt::skip]
static DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    (codes::IS_BLANK, templates::IS_BLANK),
    (codes::IS_NOT_BLANK, templates::IS_NOT_BLANK),
    (codes::IS_IN, templates::IS_IN),
    (codes::IS_NOT_IN, templates::IS_NOT_IN),
    (codes::IS_EQUAL, templates::IS_EQUAL),
    (codes::IS_NOT_EQUAL, templates::IS_NOT_EQUAL),
    (codes::IS_LESS_THAN, templates::IS_LESS_THAN),
    (codes::IS_LESS_THAN_OR_EQUAL_TO, templates::IS_LESS_THAN_OR_EQUAL_TO),
    (codes::IS_GREATER_THAN, templates::IS_GREATER_THAN),
    (codes::IS_GREATER_THAN_OR_EQUAL_TO, templates::IS_GREATER_THAN_OR_EQUAL_TO),
    (codes::IS_LENGTH, templates::IS_LENGTH),
    (codes::IS_MIN_LENGTH, templates::IS_MIN_LENGTH),
    (codes::IS_MAX_LENGTH, templates::IS_MAX_LENGTH),
    (codes::IS_STARTS_WITH, templates::IS_STARTS_WITH),
    (codes::IS_STARTS_WITH_ANY, templates::IS_STARTS_WITH_ANY),
    (codes::IS_NOT_STARTS_WITH, templates::IS_NOT_STARTS_WITH),
    (codes::IS_NOT_STARTS_WITH_ANY, templates::IS_NOT_STARTS_WITH_ANY),
    (codes::IS_ENDS_WITH, templates::IS_ENDS_WITH),
    (codes::IS_ENDS_WITH_ANY, templates::IS_ENDS_WITH_ANY),
    (codes::IS_NOT_ENDS_WITH, templates::IS_NOT_ENDS_WITH),
    (codes::IS_NOT_ENDS_WITH_ANY, templates::IS_NOT_ENDS_WITH_ANY),
    (codes::IS_MATCH, templates::IS_MATCH),
    (codes::IS_NOT_MATCH, templates::IS_NOT_MATCH),
    (codes::IS_CONTAINS, templates::IS_CONTAINS),
    (codes::IS_NOT_CONTAINS, templates::IS_NOT_CONTAINS),
    (codes::IS_UPPER, templates::IS_UPPER),
    (codes::IS_LOWER, templates::IS_LOWER),
    (codes::IS_ALPHA, templates::IS_ALPHA),
    (codes::IS_ALPHA_NUMERIC, templates::IS_ALPHA_NUMERIC),
    (codes::IS_ALPHA_DASH, templates::IS_ALPHA_DASH),
    (codes::IS_ASCII, templates::IS_ASCII),
    (codes::IS_ASCII_NUMERIC, templates::IS_ASCII_NUMERIC),
    (codes::IS_ASCII_DASH, templates::IS_ASCII_DASH),
    (codes::IS_NUMBER, templates::IS_NUMBER),
    (codes::IS_POSITIVE_NUMBER, templates::IS_POSITIVE_NUMBER),
    (codes::IS_NEGATIVE_NUMBER, templates::IS_NEGATIVE_NUMBER),
    (codes::IS_INTEGER, templates::IS_INTEGER),
    (codes::IS_POSITIVE_INTEGER, templates::IS_POSITIVE_INTEGER),
    (codes::IS_NEGATIVE_INTEGER, templates::IS_NEGATIVE_INTEGER),
    (codes::IS_BINARY, templates::IS_BINARY),
    (codes::IS_OCTAL, templates::IS_OCTAL),
    (codes::IS_HEXADECIMAL, templates::IS_HEXADECIMAL),
    (codes::IS_DECIMAL, templates::IS_DECIMAL),
    (codes::IS_INCLUDES, templates::IS_INCLUDES),
    (codes::IS_EXCLUDES, templates::IS_EXCLUDES),
    (codes::IS_UNIQUE, templates::IS_UNIQUE),
    (codes::IS_COUNT, templates::IS_COUNT),
    (codes::IS_MIN_COUNT, templates::IS_MIN_COUNT),
    (codes::IS_MAX_COUNT, templates::IS_MAX_COUNT),
    (codes::IS_CONTAINS_KEY, templates::IS_CONTAINS_KEY),
    (codes::IS_NOT_CONTAINS_KEY, templates::IS_NOT_CONTAINS_KEY),
    (codes::IS_TIME, templates::IS_TIME),
    (codes::IS_DURATION, templates::IS_DURATION),
    (codes::IS_TIMEZONE, templates::IS_TIMEZONE),
    (codes::IS_BEFORE, templates::IS_BEFORE),
    (codes::IS_BEFORE_OR_EQUAL_TO, templates::IS_BEFORE_OR_EQUAL_TO),
    (codes::IS_AFTER, templates::IS_AFTER),
    (codes::IS_AFTER_OR_EQUAL_TO, templates::IS_AFTER_OR_EQUAL_TO),
    (codes::IS_BEFORE_TZ, templates::IS_BEFORE_TZ),
    (codes::IS_BEFORE_OR_EQUAL_TO_TZ, templates::IS_BEFORE_OR_EQUAL_TO_TZ),
    (codes::IS_AFTER_TZ, templates::IS_AFTER_TZ),
    (codes::IS_AFTER_OR_EQUAL_TO_TZ, templates::IS_AFTER_OR_EQUAL_TO_TZ),
    (codes::IS_JSON, templates::IS_JSON),
    (codes::IS_JSON_ARRAY, templates::IS_JSON_ARRAY),
    (codes::IS_JSON_OBJECT, templates::IS_JSON_OBJECT),
    (codes::IS_JSON_STRING, templates::IS_JSON_STRING),
    (codes::IS_UUID, templates::IS_UUID),
    (codes::IS_UUID_V1, templates::IS_UUID_V1),
    (codes::IS_UUID_V2, templates::IS_UUID_V2),
    (codes::IS_UUID_V3, templates::IS_UUID_V3),
    (codes::IS_UUID_V4, templates::IS_UUID_V4),
    (codes::IS_UUID_V5, templates::IS_UUID_V5),
    (codes::IS_ULID, templates::IS_ULID),
    (codes::IS_BASE64, templates::IS_BASE64),
    (codes::IS_BASE32, templates::IS_BASE32),
    (codes::IS_IP, templates::IS_IP),
    (codes::IS_IPV4, templates::IS_IPV4),
    (codes::IS_IPV6, templates::IS_IPV6),
    (codes::IS_URL, templates::IS_URL),
    (codes::IS_URL_WITH_SCHEME, templates::IS_URL_WITH_SCHEME),
    (codes::IS_REQUEST_URI, templates::IS_REQUEST_URI),
    (codes::IS_URL_QUERY, templates::IS_URL_QUERY),
    (codes::IS_PATH_EXISTS, templates::IS_PATH_EXISTS),
    (codes::IS_PATH_NOT_EXISTS, templates::IS_PATH_NOT_EXISTS),
    (codes::IS_PATH_DIR, templates::IS_PATH_DIR),
    (codes::IS_PATH_FILE, templates::IS_PATH_FILE),
    (codes::IS_PATH_ABSOLUTE, templates::IS_PATH_ABSOLUTE),
    (codes::IS_PATH_RELATIVE, templates::IS_PATH_RELATIVE),
    (codes::IS_NOT, templates::IS_NOT),
];

// ============================================================================
// TRANSLATOR
// ============================================================================

/// Resolves failure codes to message templates across locales.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    locales: HashMap<String, Catalog>,
    default_locale: Option<String>,
}

impl Translator {
    /// A translator with no custom catalogs; every lookup falls through to
    /// the built-in English catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::default()
    }

    #[must_use]
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    /// Looks up the template for a code.
    ///
    /// Fallback chain: requested locale, default locale, built-in catalog.
    /// A total miss is logged and reported as `None`; the caller then renders
    /// the failure's own default template.
    #[must_use]
    pub fn template(&self, locale: Option<&str>, code: &str) -> Option<&Template> {
        let found = self
            .locale_catalog(locale)
            .and_then(|catalog| catalog.get(code))
            .or_else(|| {
                self.locale_catalog(self.default_locale.as_deref())
                    .and_then(|catalog| catalog.get(code))
            })
            .or_else(|| builtin().get(code));
        if found.is_none() {
            debug!(code, ?locale, "no template registered for code");
        }
        found
    }

    /// Resolves the display name for an attribute.
    ///
    /// Looks up `attribute.<name>` through the same fallback chain; without a
    /// registered display name, the raw attribute name is used as-is.
    #[must_use]
    pub fn attribute_name(&self, locale: Option<&str>, name: &str) -> String {
        let key = format!("{ATTRIBUTE_PREFIX}{name}");
        self.locale_catalog(locale)
            .and_then(|catalog| catalog.get(&key))
            .or_else(|| {
                self.locale_catalog(self.default_locale.as_deref())
                    .and_then(|catalog| catalog.get(&key))
            })
            .map_or_else(|| name.to_string(), |template| template.render(&[]))
    }

    /// Renders the template for a code with the given params, if one exists.
    #[must_use]
    pub fn translate(
        &self,
        locale: Option<&str>,
        code: &str,
        params: &[(Cow<'static, str>, String)],
    ) -> Option<String> {
        self.template(locale, code)
            .map(|template| template.render(params))
    }

    fn locale_catalog(&self, locale: Option<&str>) -> Option<&Catalog> {
        locale.and_then(|locale| self.locales.get(locale))
    }
}

/// Builder for [`Translator`].
///
/// # Examples
///
/// ```rust,ignore
/// let translator = Translator::builder()
///     .template("de", codes::IS_NOT_BLANK, "{attribute} darf nicht leer sein.")
///     .attribute("de", "email", "E-Mail-Adresse")
///     .default_locale("de")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct TranslatorBuilder {
    locales: HashMap<String, Catalog>,
    default_locale: Option<String>,
}

impl TranslatorBuilder {
    /// Registers a message template for a code under a locale.
    #[must_use]
    pub fn template(
        mut self,
        locale: impl Into<String>,
        code: impl Into<Cow<'static, str>>,
        source: &str,
    ) -> Self {
        self.locales
            .entry(locale.into())
            .or_default()
            .register(code, source);
        self
    }

    /// Registers a display name for an attribute under a locale.
    #[must_use]
    pub fn attribute(
        mut self,
        locale: impl Into<String>,
        name: &str,
        display: &str,
    ) -> Self {
        self.locales
            .entry(locale.into())
            .or_default()
            .register(format!("{ATTRIBUTE_PREFIX}{name}"), display);
        self
    }

    /// Sets the locale consulted when the requested one has no entry.
    #[must_use]
    pub fn default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Translator {
        Translator {
            locales: self.locales,
            default_locale: self.default_locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_all_codes() {
        let catalog = builtin();
        assert!(catalog.get(codes::IS_NOT_BLANK).is_some());
        assert!(catalog.get(codes::IS_URL_QUERY).is_some());
        assert!(catalog.get(codes::IS_PATH_RELATIVE).is_some());
        assert!(catalog.get("no_such_code").is_none());
    }

    #[test]
    fn test_fallback_to_builtin() {
        let translator = Translator::new();
        let out = translator
            .translate(
                Some("de"),
                codes::IS_NOT_BLANK,
                &[("attribute".into(), "name".to_string())],
            )
            .unwrap();
        assert_eq!(out, "name should not be blank.");
    }

    #[test]
    fn test_locale_overrides_builtin() {
        let translator = Translator::builder()
            .template("de", codes::IS_NOT_BLANK, "{attribute} darf nicht leer sein.")
            .build();
        let out = translator
            .translate(
                Some("de"),
                codes::IS_NOT_BLANK,
                &[("attribute".into(), "name".to_string())],
            )
            .unwrap();
        assert_eq!(out, "name darf nicht leer sein.");
    }

    #[test]
    fn test_default_locale_fallback() {
        let translator = Translator::builder()
            .template("fr", codes::IS_NOT_BLANK, "{attribute} ne doit pas \u{ea}tre vide.")
            .default_locale("fr")
            .build();
        // "de" has no catalog; the default locale ("fr") is consulted next.
        let out = translator
            .translate(
                Some("de"),
                codes::IS_NOT_BLANK,
                &[("attribute".into(), "nom".to_string())],
            )
            .unwrap();
        assert_eq!(out, "nom ne doit pas \u{ea}tre vide.");
    }

    #[test]
    fn test_attribute_display_name() {
        let translator = Translator::builder()
            .attribute("de", "email", "E-Mail-Adresse")
            .build();
        assert_eq!(
            translator.attribute_name(Some("de"), "email"),
            "E-Mail-Adresse"
        );
        assert_eq!(translator.attribute_name(Some("de"), "name"), "name");
        assert_eq!(translator.attribute_name(None, "email"), "email");
    }

    #[test]
    fn test_unknown_code_is_none() {
        let translator = Translator::new();
        assert!(translator.translate(None, "bespoke_code", &[]).is_none());
    }
}
