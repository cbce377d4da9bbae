//! Tests for the rules module
//!
//! These tests cover:
//! - Built-in username and password predicates
//! - Registry registration, lookup and naming policy
//! - Field and record validation order
//! - Predicate properties over generated inputs

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::{ValidationErrorKind, ValidationResult, Validator};
    use proptest::prelude::*;

    const NAME: FieldDescriptor = FieldDescriptor {
        id: "Name",
        form_alias: Some("name"),
        json_alias: None,
        constraint: FieldConstraint {
            required: true,
            max_length: 8,
            rule_name: USERNAME_VALID,
        },
    };

    const CODE: FieldDescriptor = FieldDescriptor {
        id: "Code",
        form_alias: None,
        json_alias: None,
        constraint: FieldConstraint {
            required: true,
            max_length: 8,
            rule_name: PASSWORD_VALID,
        },
    };

    static PAIR_FIELDS: [FieldDescriptor; 2] = [NAME, CODE];

    #[derive(Debug, Clone, PartialEq)]
    struct Pair {
        name: String,
        code: String,
    }

    impl Record for Pair {
        fn descriptors() -> &'static [FieldDescriptor] {
            &PAIR_FIELDS
        }

        fn value(&self, id: &str) -> Option<&str> {
            match id {
                "Name" => Some(&self.name),
                "Code" => Some(&self.code),
                _ => None,
            }
        }
    }

    fn pair(name: &str, code: &str) -> Pair {
        Pair {
            name: name.to_string(),
            code: code.to_string(),
        }
    }

    // ------------------------------------------------------------------------
    // Built-in rules
    // ------------------------------------------------------------------------

    #[test]
    fn test_username_rule_accepts_ascii_letters() {
        for value in ["a", "alice", "Alice", "ZZZ", "abcdefghijklmnopqrstuvwxyz"] {
            assert!(UsernameRule.check(value), "{} should pass", value);
        }
    }

    #[test]
    fn test_username_rule_rejects_non_letters() {
        for value in ["", "alice1", "al ice", "alice!", "élise", "a_b", "1"] {
            assert!(!UsernameRule.check(value), "{} should fail", value);
        }
    }

    #[test]
    fn test_password_rule_accepts_letters_digits_symbols() {
        let rule = PasswordRule::default();
        for value in ["abc123!", "a1#", "Pass99?!", "x0-", "ab12@$%^&*", "Q7#?!@$%^&*-"] {
            assert!(rule.check(value), "{} should pass", value);
        }
    }

    #[test]
    fn test_password_rule_rejects_missing_or_reordered_runs() {
        let rule = PasswordRule::default();
        for value in [
            "",
            "abcdef",
            "abc123",
            "abc!",
            "123!",
            "123abc!",
            "abc!123",
            "!abc123",
            "abc123!a",
            "abc123~",
        ] {
            assert!(!rule.check(value), "{} should fail", value);
        }
    }

    #[test]
    fn test_password_length_gate_never_rejects_known_defect() {
        // The gate requires len < 6 and len > 12 simultaneously, so lengths
        // outside 6..=12 still pass when the format matches.
        let rule = PasswordRule::default();
        assert!(rule.check("a1!"));
        assert!(rule.check("abcdefghijk123456!"));
    }

    // ------------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------------

    #[test]
    fn test_builtin_registry_resolves_both_rules() {
        let registry = RuleRegistry::with_builtin_rules();
        assert_eq!(registry.rule_names(), vec![PASSWORD_VALID, USERNAME_VALID]);
        assert!(registry.resolve(USERNAME_VALID).unwrap().check("bob"));
        assert!(registry.resolve(PASSWORD_VALID).unwrap().check("bob1!"));
    }

    #[test]
    fn test_resolve_unknown_rule_fails() {
        let registry = RuleRegistry::with_builtin_rules();
        let err = registry.resolve("emailvalid").err().unwrap();
        assert_eq!(err, RegistryError::RuleNotFound("emailvalid".to_string()));
    }

    #[test]
    fn test_register_same_name_replaces_rule() {
        let mut registry = RuleRegistry::new();
        registry.register("short", |v: &str| v.len() < 3);
        registry.register("short", |v: &str| v.len() < 10);

        assert_eq!(registry.rule_names(), vec!["short"]);
        assert!(registry.resolve("short").unwrap().check("hello"));
    }

    #[test]
    fn test_self_check_reports_unregistered_rule() {
        let mut registry = RuleRegistry::new();
        registry.register(USERNAME_VALID, UsernameRule);

        let result = registry.self_check(&PAIR_FIELDS);
        assert_eq!(
            result,
            Err(RegistryError::RuleNotFound(PASSWORD_VALID.to_string()))
        );
        assert!(RuleRegistry::with_builtin_rules()
            .self_check(&PAIR_FIELDS)
            .is_ok());
    }

    #[test]
    fn test_wire_name_policy_precedence() {
        let mut field = CODE;
        assert_eq!(wire_name_policy(&field), "Code");

        field.json_alias = Some("code_json");
        assert_eq!(wire_name_policy(&field), "code_json");

        field.form_alias = Some("code_form");
        assert_eq!(wire_name_policy(&field), "code_form");

        field.form_alias = Some("");
        assert_eq!(wire_name_policy(&field), "code_json");
    }

    #[test]
    fn test_naming_policy_can_be_replaced() {
        let mut registry = RuleRegistry::with_builtin_rules();
        registry.set_field_naming_policy(|f: &FieldDescriptor| f.id.to_uppercase());
        assert_eq!(registry.field_name(&NAME), "NAME");
    }

    // ------------------------------------------------------------------------
    // Field validation
    // ------------------------------------------------------------------------

    #[test]
    fn test_field_check_order() {
        let registry = RuleRegistry::with_builtin_rules();
        let validator = FieldValidator::new(&registry);
        let constraint = NAME.constraint;

        assert_eq!(validator.check("bob", &constraint), Ok(()));
        assert_eq!(
            validator.check("", &constraint),
            Err(FieldError::Rejected(ValidationErrorKind::MissingField))
        );
        // Too long wins over a format mismatch
        assert_eq!(
            validator.check("bob123456789", &constraint),
            Err(FieldError::Rejected(ValidationErrorKind::TooLong))
        );
        assert_eq!(
            validator.check("bob1", &constraint),
            Err(FieldError::Rejected(ValidationErrorKind::FormatMismatch))
        );
    }

    #[test]
    fn test_field_max_length_counts_characters() {
        let mut registry = RuleRegistry::new();
        registry.register("any", |_: &str| true);
        let validator = FieldValidator::new(&registry);
        let constraint = FieldConstraint {
            required: true,
            max_length: 3,
            rule_name: "any",
        };

        assert_eq!(validator.check("äöü", &constraint), Ok(()));
        assert_eq!(
            validator.check("äöüß", &constraint),
            Err(FieldError::Rejected(ValidationErrorKind::TooLong))
        );
    }

    #[test]
    fn test_optional_empty_field_still_fails() {
        let mut registry = RuleRegistry::new();
        registry.register("any", |_: &str| true);
        let validator = FieldValidator::new(&registry);
        let constraint = FieldConstraint {
            required: false,
            max_length: 3,
            rule_name: "any",
        };

        assert_eq!(validator.passes("", &constraint), Ok(false));
        assert_eq!(validator.passes("x", &constraint), Ok(true));
    }

    #[test]
    fn test_field_check_unknown_rule_is_config_error() {
        let registry = RuleRegistry::new();
        let validator = FieldValidator::new(&registry);

        let result = validator.passes("bob", &NAME.constraint);
        assert_eq!(
            result,
            Err(RegistryError::RuleNotFound(USERNAME_VALID.to_string()))
        );
    }

    // ------------------------------------------------------------------------
    // Record validation
    // ------------------------------------------------------------------------

    #[test]
    fn test_record_valid_returns_record_unchanged() {
        let registry = RuleRegistry::with_builtin_rules();
        let validator = RecordValidator::new(&registry);

        let result = validator.validate(pair("Bob", "ab1!")).unwrap();
        assert_eq!(result, ValidationResult::Valid(pair("Bob", "ab1!")));
    }

    #[test]
    fn test_record_validation_is_fail_fast_in_declaration_order() {
        let registry = RuleRegistry::with_builtin_rules();
        let validator = RecordValidator::new(&registry);

        let result = validator.validate(pair("bob1", "nope")).unwrap();
        let error = result.error().unwrap();
        assert_eq!(error.field, "name");
        assert_eq!(error.kind, ValidationErrorKind::FormatMismatch);
        assert_eq!(error.rule, USERNAME_VALID);
    }

    #[test]
    fn test_record_error_uses_naming_policy() {
        let registry = RuleRegistry::with_builtin_rules();
        let validator = RecordValidator::new(&registry);

        // `Code` has no alias, so its identifier is reported
        let result = validator.validate(pair("bob", "")).unwrap();
        let error = result.error().unwrap();
        assert_eq!(error.field, "Code");
        assert_eq!(error.kind, ValidationErrorKind::MissingField);
        assert_eq!(
            error.message,
            "Field validation for 'Code' failed on the 'required' tag"
        );
    }

    #[test]
    fn test_record_validation_is_idempotent() {
        let registry = RuleRegistry::with_builtin_rules();
        let validator = RecordValidator::new(&registry);

        let first = validator.validate(pair("bob", "abc")).unwrap();
        let second = validator.validate(pair("bob", "abc")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_record_with_unregistered_rule_errors() {
        let mut registry = RuleRegistry::new();
        registry.register(USERNAME_VALID, UsernameRule);
        let validator = RecordValidator::new(&registry);

        let result = validator.validate(pair("bob", "ab1!"));
        assert_eq!(
            result,
            Err(RegistryError::RuleNotFound(PASSWORD_VALID.to_string()))
        );
    }

    // ------------------------------------------------------------------------
    // Generated inputs
    // ------------------------------------------------------------------------

    fn letters() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-zA-Z]{1,12}").expect("valid regex")
    }

    fn digits() -> impl Strategy<Value = String> {
        prop::string::string_regex("[0-9]{1,12}").expect("valid regex")
    }

    fn symbols() -> impl Strategy<Value = String> {
        prop::string::string_regex("[#?!@$%^&*-]{1,12}").expect("valid regex")
    }

    /// Every ordering of the three runs except letters, digits, symbols
    fn misordered(l: &str, d: &str, s: &str) -> Vec<String> {
        vec![
            format!("{l}{s}{d}"),
            format!("{d}{l}{s}"),
            format!("{d}{s}{l}"),
            format!("{s}{l}{d}"),
            format!("{s}{d}{l}"),
        ]
    }

    /// The runs with at least one of them left out, order kept
    fn incomplete(l: &str, d: &str, s: &str) -> Vec<String> {
        vec![
            format!("{l}{d}"),
            format!("{l}{s}"),
            format!("{d}{s}"),
            l.to_string(),
            d.to_string(),
            s.to_string(),
        ]
    }

    proptest! {
        #[test]
        fn test_letters_always_pass_username_rule(value in "[a-zA-Z]{1,32}") {
            prop_assert!(UsernameRule.check(&value));
        }

        #[test]
        fn test_any_non_letter_fails_username_rule(
            head in "[a-zA-Z]{0,8}",
            bad in "[^a-zA-Z]",
            tail in "[a-zA-Z]{0,8}",
        ) {
            let value = format!("{head}{bad}{tail}");
            prop_assert!(!UsernameRule.check(&value), "{} should fail", value);
        }

        #[test]
        fn test_ordered_runs_pass_password_rule(l in letters(), d in digits(), s in symbols()) {
            let value = format!("{l}{d}{s}");
            prop_assert!(PasswordRule::default().check(&value), "{} should pass", value);
        }

        #[test]
        fn test_misordered_runs_fail_password_rule(l in letters(), d in digits(), s in symbols()) {
            let rule = PasswordRule::default();
            for value in misordered(&l, &d, &s) {
                prop_assert!(!rule.check(&value), "{} should fail", value);
            }
        }

        #[test]
        fn test_missing_run_fails_password_rule(l in letters(), d in digits(), s in symbols()) {
            let rule = PasswordRule::default();
            for value in incomplete(&l, &d, &s) {
                prop_assert!(!rule.check(&value), "{} should fail", value);
            }
        }

        #[test]
        fn test_record_validation_is_idempotent_for_any_input(
            name in ".{0,12}",
            code in ".{0,12}",
        ) {
            let registry = RuleRegistry::with_builtin_rules();
            let validator = RecordValidator::new(&registry);

            let first = validator.validate(pair(&name, &code)).unwrap();
            let second = validator.validate(pair(&name, &code)).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
