//! End-to-end validation flows: runs, nesting, rendering and overrides.

use pretty_assertions::assert_eq;

use verity::codes;
use verity::prelude::*;

struct SignupForm {
    username: String,
    email: String,
    age: i64,
    tags: Vec<String>,
}

fn sample_form() -> SignupForm {
    SignupForm {
        username: String::new(),
        email: "not-an-email".to_string(),
        age: 15,
        tags: vec!["ok".to_string(), "this tag is far too long to keep".to_string()],
    }
}

fn check_form(form: &SignupForm) -> ErrorBag {
    validate(|v| {
        v.attribute(
            "username",
            form.username.as_str(),
            rules![not_empty(), min_length(3), alpha_dash()],
        );
        v.attribute("email", form.email.as_str(), contains("@"));
        v.attribute("age", &form.age, greater_than_or_equal(18));
        v.each_str("tags", &form.tags, max_length(16));
    })
}

#[test]
fn collects_failures_across_attributes() {
    let bag = check_form(&sample_form());

    assert!(bag.fails());
    assert_eq!(bag.failed(), vec!["username", "email", "age", "tags.1"]);
}

#[test]
fn rule_sets_report_every_failed_rule() {
    let bag = check_form(&sample_form());

    let username = bag.errors("username").unwrap();
    assert!(username.has(codes::IS_NOT_BLANK));
    assert!(username.has(codes::IS_MIN_LENGTH));
    // empty string trivially satisfies alpha_dash
    assert!(!username.has(codes::IS_ALPHA_DASH));
}

#[test]
fn messages_render_with_attribute_and_params() {
    let bag = check_form(&sample_form());

    assert_eq!(
        bag.message("age"),
        vec!["age should be greater than or equal to 18.".to_string()]
    );
    assert_eq!(
        bag.message("tags.1"),
        vec!["tags should have length less than or equal to 16.".to_string()]
    );
}

#[test]
fn valid_input_produces_empty_bag() {
    let form = SignupForm {
        username: "alice_1".to_string(),
        email: "alice@example.com".to_string(),
        age: 30,
        tags: vec!["ok".to_string()],
    };
    let bag = check_form(&form);
    assert!(!bag.fails());
    assert!(bag.messages().is_empty());
}

// ============================================================================
// NESTED VALIDATABLES
// ============================================================================

struct Address {
    street: String,
    zip: String,
}

impl Validatable for Address {
    fn validate(&self) -> Result<(), ErrorBag> {
        let mut run = Validation::new();
        run.attribute("street", self.street.as_str(), not_empty());
        run.attribute("zip", self.zip.as_str(), rules![not_empty(), ascii_numeric()]);
        run.into_result()
    }
}

struct Account {
    name: String,
    shipping: Address,
}

impl Validatable for Account {
    fn validate(&self) -> Result<(), ErrorBag> {
        let mut run = Validation::new();
        run.attribute("name", self.name.as_str(), not_empty());
        run.nested("shipping", &self.shipping);
        run.into_result()
    }
}

#[test]
fn nested_failures_flatten_under_dot_joined_paths() {
    let account = Account {
        name: "acme".to_string(),
        shipping: Address {
            street: String::new(),
            zip: "12a".to_string(),
        },
    };

    let bag = validate_it(&account);

    assert!(!bag.has("name"));
    assert!(bag.failed_at("shipping.street", &[codes::IS_NOT_BLANK]));
    assert!(bag.failed_at("shipping.zip", &[codes::IS_ASCII_NUMERIC]));
}

#[test]
fn nested_attribute_params_survive_flattening() {
    let account = Account {
        name: "acme".to_string(),
        shipping: Address {
            street: String::new(),
            zip: "1".to_string(),
        },
    };

    let bag = validate_it(&account);
    let error = bag.error("shipping.street", codes::IS_NOT_BLANK).unwrap();
    // the inner run stamped "street"; flattening must not overwrite it
    assert_eq!(error.param("attribute"), Some("street"));
}

#[test]
fn doubly_nested_validatables() {
    struct Company {
        hq: Account,
    }
    impl Validatable for Company {
        fn validate(&self) -> Result<(), ErrorBag> {
            let mut run = Validation::new();
            run.nested("hq", &self.hq);
            run.into_result()
        }
    }

    let company = Company {
        hq: Account {
            name: String::new(),
            shipping: Address {
                street: String::new(),
                zip: "x".to_string(),
            },
        },
    };

    let bag = validate_it(&company);
    assert!(bag.has("hq.name"));
    assert!(bag.has("hq.shipping.street"));
    assert!(bag.has("hq.shipping.zip"));
}

// ============================================================================
// OVERRIDES
// ============================================================================

#[test]
fn validator_global_override_applies_by_code() {
    let validator = Validator::new().with_message(codes::IS_MIN_LENGTH, "{attribute}: too short");
    let bag = validator.validate(|v| {
        v.attribute("password", "abc", min_length(8));
    });
    assert_eq!(bag.message("password"), vec!["password: too short".to_string()]);
}

#[test]
fn bag_level_override_wins_over_global() {
    let validator = Validator::new().with_message(codes::IS_MIN_LENGTH, "global override");
    let mut bag = validator.validate(|v| {
        v.attribute("password", "abc", min_length(8));
        v.attribute("pin", "1", min_length(4));
    });
    bag.override_message("password", codes::IS_MIN_LENGTH, "password specifically");

    assert_eq!(
        bag.message("password"),
        vec!["password specifically".to_string()]
    );
    // the other key keeps the global override
    assert_eq!(bag.message("pin"), vec!["global override".to_string()]);
}

#[test]
fn rule_level_message_wins_over_global() {
    let validator = Validator::new().with_message(codes::IS_MIN_LENGTH, "global override");
    let bag = validator.validate(|v| {
        v.attribute(
            "password",
            "abc",
            min_length(8).with_message("rule-level message"),
        );
    });
    assert_eq!(
        bag.message("password"),
        vec!["rule-level message".to_string()]
    );
}

#[test]
fn with_code_renames_failure() {
    let bag = validate(|v| {
        v.attribute("password", "abc", min_length(8).with_code("password_weak"));
    });
    assert!(bag.failed_at("password", &["password_weak"]));
    assert!(!bag.failed_at("password", &[codes::IS_MIN_LENGTH]));
}

// ============================================================================
// LOCALIZATION
// ============================================================================

fn german_validator() -> Validator {
    let translator = Translator::builder()
        .template(
            "de",
            codes::IS_NOT_BLANK,
            "{attribute} darf nicht leer sein.",
        )
        .attribute("de", "email", "E-Mail-Adresse")
        .build();
    Validator::new().with_translator(translator)
}

#[test]
fn run_locale_selects_catalog() {
    let bag = german_validator().validate(|v| {
        v.locale("de");
        v.attribute("email", "", not_empty());
    });
    assert_eq!(
        bag.message("email"),
        vec!["E-Mail-Adresse darf nicht leer sein.".to_string()]
    );
}

#[test]
fn unknown_locale_falls_back_to_builtin_english() {
    let bag = german_validator().validate(|v| {
        v.locale("fr");
        v.attribute("name", "", not_empty());
    });
    assert_eq!(
        bag.message("name"),
        vec!["name should not be blank.".to_string()]
    );
}

#[test]
fn default_locale_applies_when_run_sets_none() {
    let validator = german_validator().with_default_locale("de");
    let bag = validator.validate(|v| {
        v.attribute("email", "", not_empty());
    });
    assert_eq!(
        bag.message("email"),
        vec!["E-Mail-Adresse darf nicht leer sein.".to_string()]
    );
}

// ============================================================================
// RENDERED REPORTS
// ============================================================================

#[test]
fn form_report_from_bag() {
    let bag = check_form(&sample_form());
    let form = Form::from_bag(&bag);
    assert!(form.fails());
    assert!(form.errors().contains_key("username"));
    assert_eq!(form.errors()["age"].len(), 1);
}

#[test]
fn bag_serializes_to_keyed_error_objects() {
    let bag = validate(|v| {
        v.attribute("age", &3, greater_than_or_equal(18));
    });
    let json = serde_json::to_value(&bag).unwrap();
    assert_eq!(json["age"][0]["code"], "is_greater_than_or_equal_to");
    assert_eq!(
        json["age"][0]["message"],
        "age should be greater than or equal to 18."
    );
}
