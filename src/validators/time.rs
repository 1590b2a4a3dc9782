//! Temporal rules: datetime formats, durations, timezones and ordering.
//!
//! Format strings use chrono's strftime syntax (`%Y-%m-%d %H:%M:%S`).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone as _, Utc};
use chrono_tz::Tz;

use crate::codes;
use crate::foundation::{Error, RuleError, Validate};
use crate::message::templates;

fn quote(value: impl std::fmt::Display) -> String {
    format!("\"{value}\"")
}

fn layout_error(layout: &str) -> Error {
    Error::new(codes::IS_TIME, templates::IS_TIME).with_param("layout", quote(layout))
}

// ============================================================================
// FORMAT CHECKS
// ============================================================================

crate::rule! {
    /// Validates that a string parses as a datetime in the given format.
    pub DateTimeFormat { layout: String } for str;
    check(self, input) { NaiveDateTime::parse_from_str(input, &self.layout).is_ok() }
    fail(self, input) { layout_error(&self.layout) }
    new(layout: impl Into<String>) { Self { layout: layout.into() } }
    fn datetime(layout: impl Into<String>);
}

crate::rule! {
    /// Validates that a string parses as a date in the given format.
    pub DateFormat { layout: String } for str;
    check(self, input) { NaiveDate::parse_from_str(input, &self.layout).is_ok() }
    fail(self, input) { layout_error(&self.layout) }
    new(layout: impl Into<String>) { Self { layout: layout.into() } }
    fn date(layout: impl Into<String>);
}

crate::rule! {
    /// Validates that a string parses as a time of day in the given format.
    pub TimeFormat { layout: String } for str;
    check(self, input) { NaiveTime::parse_from_str(input, &self.layout).is_ok() }
    fail(self, input) { layout_error(&self.layout) }
    new(layout: impl Into<String>) { Self { layout: layout.into() } }
    fn time_of_day(layout: impl Into<String>);
}

crate::rule! {
    /// Validates that a string is an RFC 3339 datetime.
    pub Rfc3339 for str;
    check(input) { DateTime::parse_from_rfc3339(input).is_ok() }
    fail(input) {
        Error::new(codes::IS_TIME, templates::IS_TIME).with_param("layout", quote("RFC 3339"))
    }
    fn rfc3339();
}

crate::rule! {
    /// Validates that a string is an RFC 2822 datetime.
    pub Rfc2822 for str;
    check(input) { DateTime::parse_from_rfc2822(input).is_ok() }
    fail(input) {
        Error::new(codes::IS_TIME, templates::IS_TIME).with_param("layout", quote("RFC 2822"))
    }
    fn rfc2822();
}

crate::rule! {
    /// Validates that a string is a human-readable duration ("1h 30m").
    pub Duration for str;
    check(input) { humantime::parse_duration(input).is_ok() }
    fail(input) { Error::new(codes::IS_DURATION, templates::IS_DURATION) }
    fn duration();
}

crate::rule! {
    /// Validates that a string is an IANA timezone name.
    pub Timezone for str;
    check(input) { input.parse::<Tz>().is_ok() }
    fail(input) { Error::new(codes::IS_TIMEZONE, templates::IS_TIMEZONE) }
    fn timezone();
}

// ============================================================================
// ORDERING AGAINST A REFERENCE INSTANT
// ============================================================================

macro_rules! ordering_time_rule {
    (
        $(#[$meta:meta])*
        $name:ident, $factory:ident, $code:expr, $template:expr, $holds:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            layout: String,
            other: NaiveDateTime,
        }

        impl $name {
            #[must_use]
            pub fn new(layout: impl Into<String>, other: NaiveDateTime) -> Self {
                Self {
                    layout: layout.into(),
                    other,
                }
            }
        }

        impl Validate for $name {
            type Input = str;

            fn validate(&self, input: &str) -> Result<(), RuleError> {
                let Ok(parsed) = NaiveDateTime::parse_from_str(input, &self.layout) else {
                    return Err(layout_error(&self.layout).into());
                };
                let holds: fn(&NaiveDateTime, &NaiveDateTime) -> bool = $holds;
                if holds(&parsed, &self.other) {
                    Ok(())
                } else {
                    Err(Error::new($code, $template)
                        .with_param("time", quote(self.other.format(&self.layout)))
                        .into())
                }
            }
        }

        #[doc = concat!("Builds a [`", stringify!($name), "`] rule.")]
        pub fn $factory(layout: impl Into<String>, other: NaiveDateTime) -> $name {
            $name::new(layout, other)
        }
    };
}

ordering_time_rule!(
    /// Validates that a datetime string is strictly before a reference.
    Before,
    before,
    codes::IS_BEFORE,
    templates::IS_BEFORE,
    |parsed, other| parsed < other
);

ordering_time_rule!(
    /// Validates that a datetime string is at or before a reference.
    BeforeOrEqual,
    before_or_equal,
    codes::IS_BEFORE_OR_EQUAL_TO,
    templates::IS_BEFORE_OR_EQUAL_TO,
    |parsed, other| parsed <= other
);

ordering_time_rule!(
    /// Validates that a datetime string is strictly after a reference.
    After,
    after,
    codes::IS_AFTER,
    templates::IS_AFTER,
    |parsed, other| parsed > other
);

ordering_time_rule!(
    /// Validates that a datetime string is at or after a reference.
    AfterOrEqual,
    after_or_equal,
    codes::IS_AFTER_OR_EQUAL_TO,
    templates::IS_AFTER_OR_EQUAL_TO,
    |parsed, other| parsed >= other
);

// ============================================================================
// TIMEZONE-AWARE ORDERING
// ============================================================================

macro_rules! ordering_tz_rule {
    (
        $(#[$meta:meta])*
        $name:ident, $factory:ident, $code:expr, $template:expr, $holds:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            layout: String,
            tz: Tz,
            other: DateTime<Utc>,
        }

        impl $name {
            #[must_use]
            pub fn new(layout: impl Into<String>, tz: Tz, other: DateTime<Utc>) -> Self {
                Self {
                    layout: layout.into(),
                    tz,
                    other,
                }
            }
        }

        impl Validate for $name {
            type Input = str;

            fn validate(&self, input: &str) -> Result<(), RuleError> {
                let Ok(naive) = NaiveDateTime::parse_from_str(input, &self.layout) else {
                    return Err(layout_error(&self.layout).into());
                };
                // Ambiguous local times (DST transitions) resolve to the
                // earlier instant; nonexistent ones fail as unparseable.
                let Some(parsed) = self.tz.from_local_datetime(&naive).earliest() else {
                    return Err(layout_error(&self.layout).into());
                };
                let holds: fn(&DateTime<Utc>, &DateTime<Utc>) -> bool = $holds;
                if holds(&parsed.with_timezone(&Utc), &self.other) {
                    Ok(())
                } else {
                    Err(Error::new($code, $template)
                        .with_param(
                            "time",
                            quote(self.other.with_timezone(&self.tz).format(&self.layout)),
                        )
                        .with_param("timezone", quote(self.tz.name()))
                        .into())
                }
            }
        }

        #[doc = concat!("Builds a [`", stringify!($name), "`] rule.")]
        pub fn $factory(layout: impl Into<String>, tz: Tz, other: DateTime<Utc>) -> $name {
            $name::new(layout, tz, other)
        }
    };
}

ordering_tz_rule!(
    /// Validates that a datetime string, read in a timezone, is strictly
    /// before a reference instant.
    BeforeTz,
    before_tz,
    codes::IS_BEFORE_TZ,
    templates::IS_BEFORE_TZ,
    |parsed, other| parsed < other
);

ordering_tz_rule!(
    /// Validates that a datetime string, read in a timezone, is at or
    /// before a reference instant.
    BeforeOrEqualTz,
    before_or_equal_tz,
    codes::IS_BEFORE_OR_EQUAL_TO_TZ,
    templates::IS_BEFORE_OR_EQUAL_TO_TZ,
    |parsed, other| parsed <= other
);

ordering_tz_rule!(
    /// Validates that a datetime string, read in a timezone, is strictly
    /// after a reference instant.
    AfterTz,
    after_tz,
    codes::IS_AFTER_TZ,
    templates::IS_AFTER_TZ,
    |parsed, other| parsed > other
);

ordering_tz_rule!(
    /// Validates that a datetime string, read in a timezone, is at or
    /// after a reference instant.
    AfterOrEqualTz,
    after_or_equal_tz,
    codes::IS_AFTER_OR_EQUAL_TO_TZ,
    templates::IS_AFTER_OR_EQUAL_TO_TZ,
    |parsed, other| parsed >= other
);

// ============================================================================
// TESTS
// ============================================================================
