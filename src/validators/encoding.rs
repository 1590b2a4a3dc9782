//! Text encoding rules: base64 and base32.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::codes;
use crate::foundation::Error;
use crate::message::templates;

/// RFC 4648 base32: A-Z and 2-7 data characters, `=` padding to an
/// 8-character quantum. Valid pad lengths are 0, 1, 3, 4 and 6.
fn is_base32(input: &str) -> bool {
    if input.is_empty() || !input.len().is_multiple_of(8) {
        return false;
    }
    let trimmed = input.trim_end_matches('=');
    let padding = input.len() - trimmed.len();
    matches!(padding, 0 | 1 | 3 | 4 | 6)
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_uppercase() || (b'2'..=b'7').contains(&b))
}

crate::rule! {
    /// Validates that a string is standard base64 (padded).
    pub Base64 for str;
    check(input) { STANDARD.decode(input).is_ok() }
    fail(input) { Error::new(codes::IS_BASE64, templates::IS_BASE64) }
    fn base64();
}

crate::rule! {
    /// Validates that a string is RFC 4648 base32 (padded, upper-case).
    pub Base32 for str;
    check(input) { is_base32(input) }
    fail(input) { Error::new(codes::IS_BASE32, templates::IS_BASE32) }
    fn base32();
}
