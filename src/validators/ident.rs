//! Identifier format rules: UUID and ULID.

use crate::codes;
use crate::foundation::Error;
use crate::message::templates;

fn parse_uuid(input: &str) -> Option<uuid::Uuid> {
    uuid::Uuid::parse_str(input).ok()
}

/// Crockford base32, the ULID alphabet (no I, L, O, U).
fn is_ulid_char(c: u8) -> bool {
    c.is_ascii_digit()
        || matches!(
            c.to_ascii_uppercase(),
            b'A'..=b'H' | b'J' | b'K' | b'M' | b'N' | b'P'..=b'T' | b'V'..=b'Z'
        )
}

fn is_ulid(input: &str) -> bool {
    let bytes = input.as_bytes();
    // 26 chars, 128 bits; the top timestamp char is capped at 7.
    bytes.len() == 26
        && bytes.iter().copied().all(is_ulid_char)
        && bytes[0].to_ascii_uppercase() <= b'7'
}

crate::rule! {
    /// Validates that a string is a UUID of any version.
    pub Uuid for str;
    check(input) { parse_uuid(input).is_some() }
    fail(input) { Error::new(codes::IS_UUID, templates::IS_UUID) }
    fn uuid_any();
}

/// Validates that a string is a UUID of one specific version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UuidVersion {
    version: usize,
}

impl UuidVersion {
    #[must_use]
    pub fn new(version: usize) -> Self {
        debug_assert!((1..=5).contains(&version));
        Self { version }
    }

    fn code(self) -> &'static str {
        match self.version {
            1 => codes::IS_UUID_V1,
            2 => codes::IS_UUID_V2,
            3 => codes::IS_UUID_V3,
            4 => codes::IS_UUID_V4,
            _ => codes::IS_UUID_V5,
        }
    }

    fn template(self) -> &'static str {
        match self.version {
            1 => templates::IS_UUID_V1,
            2 => templates::IS_UUID_V2,
            3 => templates::IS_UUID_V3,
            4 => templates::IS_UUID_V4,
            _ => templates::IS_UUID_V5,
        }
    }
}

impl crate::foundation::Validate for UuidVersion {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), crate::foundation::RuleError> {
        match parse_uuid(input) {
            Some(parsed) if parsed.get_version_num() == self.version => Ok(()),
            _ => Err(Error::new(self.code(), self.template()).into()),
        }
    }
}

/// String should be a version 1 UUID.
#[must_use]
pub fn uuid_v1() -> UuidVersion {
    UuidVersion::new(1)
}

/// String should be a version 2 UUID.
#[must_use]
pub fn uuid_v2() -> UuidVersion {
    UuidVersion::new(2)
}

/// String should be a version 3 UUID.
#[must_use]
pub fn uuid_v3() -> UuidVersion {
    UuidVersion::new(3)
}

/// String should be a version 4 UUID.
#[must_use]
pub fn uuid_v4() -> UuidVersion {
    UuidVersion::new(4)
}

/// String should be a version 5 UUID.
#[must_use]
pub fn uuid_v5() -> UuidVersion {
    UuidVersion::new(5)
}

crate::rule! {
    /// Validates that a string is a ULID.
    pub Ulid for str;
    check(input) { is_ulid(input) }
    fail(input) { Error::new(codes::IS_ULID, templates::IS_ULID) }
    fn ulid();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    const V4: &str = "936da01f-9abd-4d9d-80c7-02af85c822a8";
    const V1: &str = "c232ab00-9414-11ec-b3c8-9f68deced846";

    #[rstest]
    #[case(V4, true)]
    #[case(V1, true)]
    #[case("not-a-uuid", false)]
    #[case("936da01f9abd4d9d80c702af85c822a", false)]
    fn test_uuid_any(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(uuid_any().validate(input).is_ok(), ok);
    }

    #[test]
    fn test_uuid_versions() {
        assert!(uuid_v4().validate(V4).is_ok());
        assert!(uuid_v1().validate(V1).is_ok());
        assert!(uuid_v1().validate(V4).is_err());
        assert!(uuid_v4().validate(V1).is_err());
    }

    #[test]
    fn test_uuid_version_codes() {
        let err = uuid_v4().validate(V1).unwrap_err();
        match err {
            crate::foundation::RuleError::Single(error) => {
                assert_eq!(error.code(), codes::IS_UUID_V4);
            }
            crate::foundation::RuleError::Nested(_) => panic!("expected single failure"),
        }
    }

    #[rstest]
    #[case("01ARZ3NDEKTSV4RRFFQ69G5FAV", true)]
    #[case("01arz3ndektsv4rrffq69g5fav", true)]
    #[case("01ARZ3NDEKTSV4RRFFQ69G5FA", false)] // 25 chars
    #[case("01ARZ3NDEKTSV4RRFFQ69G5FAL", false)] // L not in alphabet
    #[case("81ARZ3NDEKTSV4RRFFQ69G5FAV", false)] // timestamp overflow
    fn test_ulid(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(ulid().validate(input).is_ok(), ok);
    }
}
