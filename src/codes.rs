//! Failure code constants.
//!
//! Every built-in rule reports one of these codes. Codes are the stable,
//! machine-readable identity of a failure: deduplication inside an
//! [`Errors`](crate::foundation::Errors) collection, catalog lookups and
//! message overrides are all keyed by code, never by message text.

// Generic value codes
pub const IS_BLANK: &str = "is_blank";
pub const IS_NOT_BLANK: &str = "is_not_blank";
pub const IS_IN: &str = "is_in";
pub const IS_NOT_IN: &str = "is_not_in";
pub const IS_EQUAL: &str = "is_equal";
pub const IS_NOT_EQUAL: &str = "is_not_equal";
pub const IS_LESS_THAN: &str = "is_less_than";
pub const IS_LESS_THAN_OR_EQUAL_TO: &str = "is_less_than_or_equal_to";
pub const IS_GREATER_THAN: &str = "is_greater_than";
pub const IS_GREATER_THAN_OR_EQUAL_TO: &str = "is_greater_than_or_equal_to";

// String codes
pub const IS_LENGTH: &str = "is_length";
pub const IS_MIN_LENGTH: &str = "is_min_length";
pub const IS_MAX_LENGTH: &str = "is_max_length";
pub const IS_STARTS_WITH: &str = "is_starts_with";
pub const IS_STARTS_WITH_ANY: &str = "is_starts_with_any";
pub const IS_NOT_STARTS_WITH: &str = "is_not_starts_with";
pub const IS_NOT_STARTS_WITH_ANY: &str = "is_not_starts_with_any";
pub const IS_ENDS_WITH: &str = "is_ends_with";
pub const IS_ENDS_WITH_ANY: &str = "is_ends_with_any";
pub const IS_NOT_ENDS_WITH: &str = "is_not_ends_with";
pub const IS_NOT_ENDS_WITH_ANY: &str = "is_not_ends_with_any";
pub const IS_MATCH: &str = "is_match";
pub const IS_NOT_MATCH: &str = "is_not_match";
pub const IS_CONTAINS: &str = "is_contains";
pub const IS_NOT_CONTAINS: &str = "is_not_contains";
pub const IS_UPPER: &str = "is_upper";
pub const IS_LOWER: &str = "is_lower";
pub const IS_ALPHA: &str = "is_alpha";
pub const IS_ALPHA_NUMERIC: &str = "is_alpha_numeric";
pub const IS_ALPHA_DASH: &str = "is_alpha_dash";
pub const IS_ASCII: &str = "is_ascii";
pub const IS_ASCII_NUMERIC: &str = "is_ascii_numeric";
pub const IS_ASCII_DASH: &str = "is_ascii_dash";

// String-numeric codes
pub const IS_NUMBER: &str = "is_number";
pub const IS_POSITIVE_NUMBER: &str = "is_positive_number";
pub const IS_NEGATIVE_NUMBER: &str = "is_negative_number";
pub const IS_INTEGER: &str = "is_integer";
pub const IS_POSITIVE_INTEGER: &str = "is_positive_integer";
pub const IS_NEGATIVE_INTEGER: &str = "is_negative_integer";
pub const IS_BINARY: &str = "is_binary";
pub const IS_OCTAL: &str = "is_octal";
pub const IS_HEXADECIMAL: &str = "is_hexadecimal";
pub const IS_DECIMAL: &str = "is_decimal";

// Slice codes
pub const IS_INCLUDES: &str = "is_includes";
pub const IS_EXCLUDES: &str = "is_excludes";
pub const IS_UNIQUE: &str = "is_unique";
pub const IS_COUNT: &str = "is_count";
pub const IS_MIN_COUNT: &str = "is_min_count";
pub const IS_MAX_COUNT: &str = "is_max_count";

// Map codes
pub const IS_CONTAINS_KEY: &str = "is_contains_key";
pub const IS_NOT_CONTAINS_KEY: &str = "is_not_contains_key";

// Temporal codes
pub const IS_TIME: &str = "is_time";
pub const IS_DURATION: &str = "is_duration";
pub const IS_TIMEZONE: &str = "is_timezone";
pub const IS_BEFORE: &str = "is_before";
pub const IS_BEFORE_OR_EQUAL_TO: &str = "is_before_or_equal_to";
pub const IS_AFTER: &str = "is_after";
pub const IS_AFTER_OR_EQUAL_TO: &str = "is_after_or_equal_to";
pub const IS_BEFORE_TZ: &str = "is_before_tz";
pub const IS_BEFORE_OR_EQUAL_TO_TZ: &str = "is_before_or_equal_to_tz";
pub const IS_AFTER_TZ: &str = "is_after_tz";
pub const IS_AFTER_OR_EQUAL_TO_TZ: &str = "is_after_or_equal_to_tz";

// Data format codes
pub const IS_JSON: &str = "is_json";
pub const IS_JSON_ARRAY: &str = "is_json_array";
pub const IS_JSON_OBJECT: &str = "is_json_object";
pub const IS_JSON_STRING: &str = "is_json_string";
pub const IS_UUID: &str = "is_uuid";
pub const IS_UUID_V1: &str = "is_uuid_v1";
pub const IS_UUID_V2: &str = "is_uuid_v2";
pub const IS_UUID_V3: &str = "is_uuid_v3";
pub const IS_UUID_V4: &str = "is_uuid_v4";
pub const IS_UUID_V5: &str = "is_uuid_v5";
pub const IS_ULID: &str = "is_ulid";
pub const IS_BASE64: &str = "is_base64";
pub const IS_BASE32: &str = "is_base32";

// Network codes
pub const IS_IP: &str = "is_ip";
pub const IS_IPV4: &str = "is_ipv4";
pub const IS_IPV6: &str = "is_ipv6";
pub const IS_URL: &str = "is_url";
pub const IS_URL_WITH_SCHEME: &str = "is_url_with_schema";
pub const IS_REQUEST_URI: &str = "is_request_uri";
pub const IS_URL_QUERY: &str = "is_url_query";

// Filesystem codes
pub const IS_PATH_EXISTS: &str = "is_path_exists";
pub const IS_PATH_NOT_EXISTS: &str = "is_path_not_exists";
pub const IS_PATH_DIR: &str = "is_path_dir";
pub const IS_PATH_FILE: &str = "is_path_file";
pub const IS_PATH_ABSOLUTE: &str = "is_path_absolute";
pub const IS_PATH_RELATIVE: &str = "is_path_relative";

// Combinator codes
pub const IS_NOT: &str = "is_not";
