//! Default English message templates.
//!
//! One template per failure code, shared by the built-in rules (as their
//! default message) and the built-in catalog (as the fallback locale). The
//! constant names mirror [`crate::codes`].

// Generic value templates
pub const IS_BLANK: &str = "{attribute} should be blank.";
pub const IS_NOT_BLANK: &str = "{attribute} should not be blank.";
pub const IS_IN: &str = "{attribute} should be one of {values}.";
pub const IS_NOT_IN: &str = "{attribute} should not be one of {values}.";
pub const IS_EQUAL: &str = "{attribute} should be equal to {value}.";
pub const IS_NOT_EQUAL: &str = "{attribute} should not be equal to {value}.";
pub const IS_LESS_THAN: &str = "{attribute} should be less than {value}.";
pub const IS_LESS_THAN_OR_EQUAL_TO: &str = "{attribute} should be less than or equal to {value}.";
pub const IS_GREATER_THAN: &str = "{attribute} should be greater than {value}.";
pub const IS_GREATER_THAN_OR_EQUAL_TO: &str =
    "{attribute} should be greater than or equal to {value}.";

// String templates
pub const IS_LENGTH: &str = "{attribute} should have length {length}.";
pub const IS_MIN_LENGTH: &str = "{attribute} should have length greater than or equal to {min}.";
pub const IS_MAX_LENGTH: &str = "{attribute} should have length less than or equal to {max}.";
pub const IS_STARTS_WITH: &str = "{attribute} should start with {prefix}.";
pub const IS_STARTS_WITH_ANY: &str = "{attribute} should start with one of {prefixes}.";
pub const IS_NOT_STARTS_WITH: &str = "{attribute} should not start with {prefix}.";
pub const IS_NOT_STARTS_WITH_ANY: &str = "{attribute} should not start with any of {prefixes}.";
pub const IS_ENDS_WITH: &str = "{attribute} should end with {suffix}.";
pub const IS_ENDS_WITH_ANY: &str = "{attribute} should end with one of {suffixes}.";
pub const IS_NOT_ENDS_WITH: &str = "{attribute} should not end with {suffix}.";
pub const IS_NOT_ENDS_WITH_ANY: &str = "{attribute} should not end with any of {suffixes}.";
pub const IS_MATCH: &str = "{attribute} should match {pattern}.";
pub const IS_NOT_MATCH: &str = "{attribute} should not match {pattern}.";
pub const IS_CONTAINS: &str = "{attribute} should contain {substring}.";
pub const IS_NOT_CONTAINS: &str = "{attribute} should not contain {substring}.";
pub const IS_UPPER: &str = "{attribute} should be uppercase.";
pub const IS_LOWER: &str = "{attribute} should be lowercase.";
pub const IS_ALPHA: &str = "{attribute} should only contain letter.";
pub const IS_ALPHA_NUMERIC: &str = "{attribute} should only contain letter and number.";
pub const IS_ALPHA_DASH: &str = "{attribute} should only contain letter, number and dash (-, _).";
pub const IS_ASCII: &str = "{attribute} should only contain ascii letter (a-z, A-Z).";
pub const IS_ASCII_NUMERIC: &str =
    "{attribute} should only contain ascii letter (a-z, A-Z) and number.";
pub const IS_ASCII_DASH: &str =
    "{attribute} should only contain ascii letter (a-z, A-Z), number and dash (-, _).";

// String-numeric templates
pub const IS_NUMBER: &str = "{attribute} should be a number.";
pub const IS_POSITIVE_NUMBER: &str = "{attribute} should be a positive number.";
pub const IS_NEGATIVE_NUMBER: &str = "{attribute} should be a negative number.";
pub const IS_INTEGER: &str = "{attribute} should be an integer.";
pub const IS_POSITIVE_INTEGER: &str = "{attribute} should be a positive integer.";
pub const IS_NEGATIVE_INTEGER: &str = "{attribute} should be a negative integer.";
pub const IS_BINARY: &str = "{attribute} should be a binary number.";
pub const IS_OCTAL: &str = "{attribute} should be an octal number.";
pub const IS_HEXADECIMAL: &str = "{attribute} should be a hexadecimal number.";
pub const IS_DECIMAL: &str = "{attribute} should be a decimal number.";

// Slice templates
pub const IS_INCLUDES: &str = "{attribute} should include {values}.";
pub const IS_EXCLUDES: &str = "{attribute} should exclude {values}.";
pub const IS_UNIQUE: &str = "{attribute} should not contain duplicate elements.";
pub const IS_COUNT: &str = "{attribute} should contain {count} element(s).";
pub const IS_MIN_COUNT: &str = "{attribute} should contain at least {count} element(s).";
pub const IS_MAX_COUNT: &str = "{attribute} should contain at most {count} element(s).";

// Map templates
pub const IS_CONTAINS_KEY: &str = "{attribute} should contain key {key}.";
pub const IS_NOT_CONTAINS_KEY: &str = "{attribute} should not contain key {key}.";

// Temporal templates
pub const IS_TIME: &str = "{attribute} should be a valid time in format {layout}.";
pub const IS_DURATION: &str = "{attribute} should be a valid duration.";
pub const IS_TIMEZONE: &str = "{attribute} should be a valid timezone.";
pub const IS_BEFORE: &str = "{attribute} should be before {time}.";
pub const IS_BEFORE_OR_EQUAL_TO: &str = "{attribute} should be before or equal to {time}.";
pub const IS_AFTER: &str = "{attribute} should be after {time}.";
pub const IS_AFTER_OR_EQUAL_TO: &str = "{attribute} should be after or equal to {time}.";
pub const IS_BEFORE_TZ: &str = "{attribute} in timezone {timezone} should be before {time}.";
pub const IS_BEFORE_OR_EQUAL_TO_TZ: &str =
    "{attribute} in timezone {timezone} should be before or equal to {time}.";
pub const IS_AFTER_TZ: &str = "{attribute} in timezone {timezone} should be after {time}.";
pub const IS_AFTER_OR_EQUAL_TO_TZ: &str =
    "{attribute} in timezone {timezone} should be after or equal to {time}.";

// Data format templates
pub const IS_JSON: &str = "{attribute} should be a valid JSON.";
pub const IS_JSON_ARRAY: &str = "{attribute} should be a valid JSON array.";
pub const IS_JSON_OBJECT: &str = "{attribute} should be a valid JSON object.";
pub const IS_JSON_STRING: &str = "{attribute} should be a valid JSON string.";
pub const IS_UUID: &str = "{attribute} should be a valid UUID.";
pub const IS_UUID_V1: &str = "{attribute} should be a valid version 1 UUID.";
pub const IS_UUID_V2: &str = "{attribute} should be a valid version 2 UUID.";
pub const IS_UUID_V3: &str = "{attribute} should be a valid version 3 UUID.";
pub const IS_UUID_V4: &str = "{attribute} should be a valid version 4 UUID.";
pub const IS_UUID_V5: &str = "{attribute} should be a valid version 5 UUID.";
pub const IS_ULID: &str = "{attribute} should be a valid ULID.";
pub const IS_BASE64: &str = "{attribute} should be a valid base64 string.";
pub const IS_BASE32: &str = "{attribute} should be a valid base32 string.";

// Network templates
pub const IS_IP: &str = "{attribute} should be a valid IP address.";
pub const IS_IPV4: &str = "{attribute} should be a valid IPv4 address.";
pub const IS_IPV6: &str = "{attribute} should be a valid IPv6 address.";
pub const IS_URL: &str = "{attribute} should be a valid URL.";
pub const IS_URL_WITH_SCHEME: &str = "{attribute} should be a valid URL with scheme {scheme}.";
pub const IS_REQUEST_URI: &str = "{attribute} should be a valid request URI.";
pub const IS_URL_QUERY: &str = "{attribute} should be a valid URL query string.";

// Filesystem templates
pub const IS_PATH_EXISTS: &str = "{attribute} should be an existing path.";
pub const IS_PATH_NOT_EXISTS: &str = "{attribute} should not be an existing path.";
pub const IS_PATH_DIR: &str = "{attribute} should be a directory.";
pub const IS_PATH_FILE: &str = "{attribute} should be a file.";
pub const IS_PATH_ABSOLUTE: &str = "{attribute} should be an absolute path.";
pub const IS_PATH_RELATIVE: &str = "{attribute} should be a relative path.";

// Combinator templates
pub const IS_NOT: &str = "{attribute} should not satisfy the inverted constraint.";
