//! JSON format rules.

use serde_json::Value;

use crate::codes;
use crate::foundation::Error;
use crate::message::templates;

fn parse(input: &str) -> Option<Value> {
    serde_json::from_str(input).ok()
}

crate::rule! {
    /// Validates that a string is well-formed JSON.
    pub Json for str;
    check(input) { parse(input).is_some() }
    fail(input) { Error::new(codes::IS_JSON, templates::IS_JSON) }
    fn json();
}

crate::rule! {
    /// Validates that a string is a JSON array.
    pub JsonArray for str;
    check(input) { matches!(parse(input), Some(Value::Array(_))) }
    fail(input) { Error::new(codes::IS_JSON_ARRAY, templates::IS_JSON_ARRAY) }
    fn json_array();
}

crate::rule! {
    /// Validates that a string is a JSON object.
    pub JsonObject for str;
    check(input) { matches!(parse(input), Some(Value::Object(_))) }
    fail(input) { Error::new(codes::IS_JSON_OBJECT, templates::IS_JSON_OBJECT) }
    fn json_object();
}

crate::rule! {
    /// Validates that a string is a JSON string literal.
    pub JsonString for str;
    check(input) { matches!(parse(input), Some(Value::String(_))) }
    fail(input) { Error::new(codes::IS_JSON_STRING, templates::IS_JSON_STRING) }
    fn json_string();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"a": 1}"#, true)]
    #[case("[1, 2]", true)]
    #[case("42", true)]
    #[case("null", true)]
    #[case("{broken", false)]
    #[case("", false)]
    fn test_json(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(json().validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case("[1, 2]", true)]
    #[case(r#"{"a": 1}"#, false)]
    #[case("42", false)]
    fn test_json_array(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(json_array().validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case(r#"{"a": 1}"#, true)]
    #[case("[1, 2]", false)]
    fn test_json_object(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(json_object().validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case(r#""hello""#, true)]
    #[case("hello", false)]
    #[case("42", false)]
    fn test_json_string(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(json_string().validate(input).is_ok(), ok);
    }
}
