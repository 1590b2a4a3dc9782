//! Built-in rules.
//!
//! Every rule reports a stable failure code from [`crate::codes`] and a
//! default English template from [`crate::message::templates`].
//!
//! # Categories
//!
//! - **Generic**: blank checks, membership, equality, ordering
//! - **String**: length, prefixes/suffixes, regex, character classes
//! - **String-numeric**: integer/decimal/radix parsing checks
//! - **Collection**: membership, uniqueness, counts; map key presence
//! - **Formats**: JSON, UUID/ULID, base64/base32
//! - **Temporal** (`temporal` feature): datetime formats, durations,
//!   timezones, ordering against reference instants
//! - **Network** (`network` feature): IP addresses, URLs, query strings
//! - **Filesystem**: path existence, kind, absoluteness

pub mod collection;
pub mod encoding;
pub mod filepath;
pub mod generic;
pub mod ident;
pub mod json;
pub mod length;
pub mod numeric;
pub mod pattern;
pub mod structure;

#[cfg(feature = "network")]
pub mod network;

#[cfg(feature = "temporal")]
pub mod time;

pub use collection::{
    Count, Excludes, Includes, MaxCount, MinCount, Unique, count, excludes, includes, max_count,
    min_count, unique,
};
pub use encoding::{Base32, Base64, base32, base64};
pub use filepath::{
    PathAbsolute, PathDir, PathExists, PathFile, PathNotExists, PathRelative, path_absolute,
    path_dir, path_exists, path_file, path_not_exists, path_relative,
};
pub use generic::{
    Blank, Equals, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, NotBlank,
    NotEquals, NotOneOf, OneOf, blank, equals, greater_than, greater_than_or_equal, less_than,
    less_than_or_equal, not_blank, not_equals, not_one_of, one_of,
};
pub use ident::{
    Ulid, Uuid, UuidVersion, ulid, uuid_any, uuid_v1, uuid_v2, uuid_v3, uuid_v4, uuid_v5,
};
pub use json::{Json, JsonArray, JsonObject, JsonString, json, json_array, json_object, json_string};
pub use length::{Length, MaxLength, MinLength, NotEmpty, length, max_length, min_length, not_empty};
pub use numeric::{
    Binary, Decimal, Hexadecimal, Integer, NegativeInteger, NegativeNumber, Number, Octal,
    PositiveInteger, PositiveNumber, binary, decimal, hexadecimal, integer, negative_integer,
    negative_number, number, octal, positive_integer, positive_number,
};
pub use pattern::{
    AlphaDash, Alphabetic, Alphanumeric, Ascii, AsciiDash, AsciiNumeric, Contains, EndsWith,
    EndsWithAny, Lowercase, Matches, NotContains, NotEndsWith, NotEndsWithAny, NotMatches,
    NotStartsWith, NotStartsWithAny, PatternError, StartsWith, StartsWithAny, Uppercase,
    alpha_dash, alphabetic, alphanumeric, ascii, ascii_dash, ascii_numeric, contains, ends_with,
    ends_with_any, lowercase, matches, not_contains, not_ends_with, not_ends_with_any,
    not_matches, not_starts_with, not_starts_with_any, starts_with, starts_with_any, uppercase,
};
pub use structure::{HasKey, KeyedCollection, NotHasKey, has_key, not_has_key};

#[cfg(feature = "network")]
pub use network::{
    Ip, Ipv4, Ipv6, RequestUri, UrlQuery, UrlStr, UrlWithScheme, ip, ipv4, ipv6, request_uri,
    url_query, url_str, url_with_scheme,
};

#[cfg(feature = "temporal")]
pub use time::{
    After, AfterOrEqual, AfterOrEqualTz, AfterTz, Before, BeforeOrEqual, BeforeOrEqualTz,
    BeforeTz, DateFormat, DateTimeFormat, Duration, Rfc2822, Rfc3339, TimeFormat, Timezone,
    after, after_or_equal, after_or_equal_tz, after_tz, before, before_or_equal,
    before_or_equal_tz, before_tz, date, datetime, duration, rfc2822, rfc3339, time_of_day,
    timezone,
};
