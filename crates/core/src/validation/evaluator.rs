//! Rule evaluator. Pure logic, no I/O.
//!
//! Rules run in table order and every rule is evaluated, including rules
//! that follow a failed rule on the same field.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use super::rules::{
    AssetField, FieldViolation, ValidationResult, NAME_MIN_LENGTH, NAME_REQUIRED, NAME_TOO_SHORT,
    PRECISION_NEGATIVE, SYMBOL_REQUIRED,
};
use crate::asset::AssetInput;
use crate::error::CoreError;

struct Rule {
    field: AssetField,
    rule_type: &'static str,
    message: &'static str,
    passes: fn(&AssetInput) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        field: AssetField::Name,
        rule_type: "required",
        message: NAME_REQUIRED,
        passes: name_present,
    },
    Rule {
        field: AssetField::Name,
        rule_type: "length",
        message: NAME_TOO_SHORT,
        passes: name_long_enough,
    },
    Rule {
        field: AssetField::Symbol,
        rule_type: "required",
        message: SYMBOL_REQUIRED,
        passes: symbol_present,
    },
    Rule {
        field: AssetField::Precision,
        rule_type: "range",
        message: PRECISION_NEGATIVE,
        passes: precision_non_negative,
    },
];

fn name_present(input: &AssetInput) -> bool {
    !input.name.is_empty()
}

fn name_long_enough(input: &AssetInput) -> bool {
    input.name.chars().count() >= NAME_MIN_LENGTH
}

fn symbol_present(input: &AssetInput) -> bool {
    !input.symbol.is_empty()
}

fn precision_non_negative(input: &AssetInput) -> bool {
    input.precision >= 0
}

impl Rule {
    fn evaluate(&self, input: &AssetInput) -> Option<FieldViolation> {
        if (self.passes)(input) {
            None
        } else {
            Some(FieldViolation {
                field: self.field,
                rule_type: self.rule_type,
                message: self.message,
            })
        }
    }
}

/// Validator for the asset creation form.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetInputValidator;

impl AssetInputValidator {
    /// Evaluate all rules against `input` and collect every violation.
    pub fn validate(input: &AssetInput) -> ValidationResult {
        let errors: Vec<FieldViolation> =
            RULES.iter().filter_map(|rule| rule.evaluate(input)).collect();

        if !errors.is_empty() {
            let fields: Vec<&str> = errors.iter().map(|v| v.field.as_str()).collect();
            tracing::debug!(
                violations = errors.len(),
                fields = ?fields,
                "Asset input failed validation"
            );
        }

        ValidationResult::from_violations(errors)
    }

    /// Messages for a single field, in rule order. Used by form inputs to
    /// show inline errors as the user edits one value.
    pub fn validate_field(input: &AssetInput, field: AssetField) -> Vec<&'static str> {
        RULES
            .iter()
            .filter(|rule| rule.field == field)
            .filter_map(|rule| rule.evaluate(input))
            .map(|v| v.message)
            .collect()
    }

    /// Same as [`validate_field`](Self::validate_field), addressed by
    /// property name.
    pub fn validate_property(
        input: &AssetInput,
        property: &str,
    ) -> Result<Vec<&'static str>, CoreError> {
        let field: AssetField = property.parse()?;
        Ok(Self::validate_field(input, field))
    }

    /// Submit guard: fails with every violation message joined by `"; "`.
    pub fn ensure_valid(input: &AssetInput) -> Result<(), CoreError> {
        let result = Self::validate(input);
        if result.is_valid {
            return Ok(());
        }
        let messages: Vec<&str> = result.messages().collect();
        Err(CoreError::Validation(messages.join("; ")))
    }
}

impl Validate for AssetInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let result = AssetInputValidator::validate(self);
        if result.is_valid {
            return Ok(());
        }

        let mut errors = ValidationErrors::new();
        for violation in result.errors {
            let mut error = ValidationError::new(violation.rule_type);
            error.message = Some(Cow::Borrowed(violation.message));
            errors.add(violation.field.as_str(), error);
        }
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn messages(input: &AssetInput) -> Vec<&'static str> {
        AssetInputValidator::validate(input).messages().collect()
    }

    #[test]
    fn empty_input_reports_every_field_except_type() {
        let result = AssetInputValidator::validate(&AssetInput::default());
        assert!(!result.is_valid);
        let fields: Vec<AssetField> = result.errors.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![AssetField::Name, AssetField::Name, AssetField::Symbol]
        );
    }

    #[test]
    fn empty_name_reports_required_and_length() {
        let input = AssetInput::new("", "coin", "AU", 2);
        assert_eq!(messages(&input), vec![NAME_REQUIRED, NAME_TOO_SHORT]);
    }

    #[test]
    fn short_name_reports_length_only() {
        for name in ["A", "Ag", " "] {
            let input = AssetInput::new(name, "coin", "AG", 0);
            assert_eq!(messages(&input), vec![NAME_TOO_SHORT], "name = {name:?}");
        }
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let input = AssetInput::new("Öre", "coin", "SEK", 2);
        assert!(AssetInputValidator::validate(&input).is_valid);

        let input = AssetInput::new("Ör", "coin", "SEK", 2);
        assert_eq!(messages(&input), vec![NAME_TOO_SHORT]);
    }

    #[test]
    fn precision_boundary() {
        let zero = AssetInput::new("Gold", "", "AU", 0);
        assert!(AssetInputValidator::validate(&zero).is_valid);

        let negative = AssetInput::new("Gold", "", "AU", -1);
        assert_eq!(messages(&negative), vec![PRECISION_NEGATIVE]);

        let min = AssetInput::new("Gold", "", "AU", i32::MIN);
        assert_eq!(messages(&min), vec![PRECISION_NEGATIVE]);
    }

    #[test]
    fn type_is_unconstrained() {
        let messages = AssetInputValidator::validate_field(&AssetInput::default(), AssetField::Type);
        assert!(messages.is_empty());
    }

    #[test]
    fn validate_field_only_reports_that_field() {
        let input = AssetInput::new("", "", "", -3);
        assert_eq!(
            AssetInputValidator::validate_field(&input, AssetField::Name),
            vec![NAME_REQUIRED, NAME_TOO_SHORT]
        );
        assert_eq!(
            AssetInputValidator::validate_field(&input, AssetField::Symbol),
            vec![SYMBOL_REQUIRED]
        );
        assert_eq!(
            AssetInputValidator::validate_field(&input, AssetField::Precision),
            vec![PRECISION_NEGATIVE]
        );
    }

    #[test]
    fn validate_property_resolves_names() {
        let input = AssetInput::new("Ag", "", "", 0);
        assert_eq!(
            AssetInputValidator::validate_property(&input, "Name").unwrap(),
            vec![NAME_TOO_SHORT]
        );
        assert_matches!(
            AssetInputValidator::validate_property(&input, "Ticker"),
            Err(CoreError::UnknownField(_))
        );
    }

    #[test]
    fn ensure_valid_joins_messages() {
        let input = AssetInput::new("Gold", "coin", "", -1);
        assert_matches!(
            AssetInputValidator::ensure_valid(&input),
            Err(CoreError::Validation(msg))
                if msg == "Symbol is required; Precision must be zero or positive"
        );
        let valid = AssetInput::new("Gold", "coin", "AU", 2);
        assert!(AssetInputValidator::ensure_valid(&valid).is_ok());
    }

    #[test]
    fn validator_trait_keys_errors_by_wire_name() {
        let input = AssetInput::new("Ag", "", "", 0);
        let errors = Validate::validate(&input).unwrap_err();
        let field_errors = errors.field_errors();

        assert_eq!(field_errors.len(), 2);
        let name = field_errors.get("name").expect("name errors");
        assert_eq!(name.len(), 1);
        assert_eq!(name[0].code, "length");
        assert_eq!(name[0].message.as_deref(), Some(NAME_TOO_SHORT));
        assert!(field_errors.contains_key("symbol"));
        assert!(!field_errors.contains_key("type"));
    }

    #[test]
    fn validator_trait_passes_valid_input() {
        assert!(Validate::validate(&AssetInput::new("Gold", "coin", "AU", 2)).is_ok());
    }
}
