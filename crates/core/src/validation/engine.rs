//! Rule evaluation for task descriptions

use serde::Serialize;
use tracing::debug;

use super::rules::ValidationRules;
use crate::ValidationIssue;

/// Accept/reject verdict for a description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Human-readable messages, in check order
    pub errors: Vec<String>,
    #[serde(skip)]
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        Self {
            is_valid: issues.is_empty(),
            errors: issues.iter().map(ToString::to_string).collect(),
            issues,
        }
    }
}

/// Live feedback snapshot for the description field.
///
/// Every flag is evaluated independently, so several may be set at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationState {
    pub is_empty: bool,
    pub is_too_short: bool,
    pub is_too_long: bool,
    pub has_invalid_chars: bool,
    pub has_prohibited_words: bool,
    pub character_count: usize,
    pub character_limit: usize,
}

/// Validate a description against the default rules
pub fn validate_description(description: &str) -> ValidationResult {
    validate(description, &ValidationRules::default())
}

/// Validate a description.
///
/// Checks run on the trimmed text in the order required, minimum length,
/// maximum length, character pattern, prohibited words. A blank description
/// stops after the first check; otherwise every failing check is reported.
pub fn validate(description: &str, rules: &ValidationRules) -> ValidationResult {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        debug!("Rejected blank description");
        return ValidationResult::from_issues(vec![ValidationIssue::RequiredFieldMissing]);
    }

    let length = trimmed.chars().count();
    let mut issues = Vec::new();

    if length < rules.min_length() {
        issues.push(ValidationIssue::TooShort {
            min: rules.min_length(),
        });
    }

    if length > rules.max_length() {
        issues.push(ValidationIssue::TooLong {
            max: rules.max_length(),
        });
    }

    if let Some(pattern) = rules.required_pattern() {
        if !pattern.matches(trimmed) {
            issues.push(ValidationIssue::InvalidCharacters);
        }
    }

    let words = rules.prohibited_words_in(trimmed);
    if !words.is_empty() {
        issues.push(ValidationIssue::ProhibitedWordsFound { words });
    }

    if !issues.is_empty() {
        debug!("Rejected description with {} issue(s): {:?}", issues.len(), issues);
    }

    ValidationResult::from_issues(issues)
}

/// Feedback state for a description against the default rules
pub fn description_state(description: &str) -> ValidationState {
    validation_state(description, &ValidationRules::default())
}

/// Compute the feedback state for a description
pub fn validation_state(description: &str, rules: &ValidationRules) -> ValidationState {
    let trimmed = description.trim();
    let length = trimmed.chars().count();

    ValidationState {
        is_empty: length == 0,
        is_too_short: length > 0 && length < rules.min_length(),
        is_too_long: length > rules.max_length(),
        has_invalid_chars: rules
            .required_pattern()
            .is_some_and(|pattern| !pattern.matches(trimmed)),
        has_prohibited_words: !rules.prohibited_words_in(trimmed).is_empty(),
        character_count: length,
        character_limit: rules.max_length(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RulesOverride;

    #[test]
    fn test_valid_description() {
        let result = validate_description("Buy groceries");
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_blank_description_short_circuits() {
        for input in ["", "   ", "\t\n"] {
            let result = validate_description(input);
            assert!(!result.is_valid);
            assert_eq!(result.errors, vec!["Task description is required"]);
            assert_eq!(result.issues, vec![ValidationIssue::RequiredFieldMissing]);
        }
    }

    #[test]
    fn test_too_short() {
        let result = validate_description("AB");
        assert!(!result.is_valid);
        assert!(result
            .errors
            .contains(&"Task description must be at least 3 characters long".to_string()));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        assert!(validate_description("abc").is_valid);
        assert!(validate_description(&"A".repeat(100)).is_valid);

        let result = validate_description(&"A".repeat(101));
        assert!(!result.is_valid);
        assert!(result
            .errors
            .contains(&"Task description cannot exceed 100 characters".to_string()));
    }

    #[test]
    fn test_length_is_measured_after_trim() {
        assert!(validate_description("   abc   ").is_valid);
        assert!(!validate_description("  ab  ").is_valid);
    }

    #[test]
    fn test_invalid_characters() {
        let result = validate_description("Pay rent @ office #3");
        assert_eq!(
            result.errors,
            vec!["Task description contains invalid characters"]
        );
    }

    #[test]
    fn test_prohibited_words_case_insensitive() {
        let result = validate_description("This is SPAM content");
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("prohibited words"));
        assert!(result.errors[0].contains("spam"));
    }

    #[test]
    fn test_errors_accumulate_in_order() {
        let description = format!("spam {} todo123 $", "x".repeat(100));
        let result = validate_description(&description);
        assert_eq!(
            result.errors,
            vec![
                "Task description cannot exceed 100 characters",
                "Task description contains invalid characters",
                "Task description cannot contain prohibited words: spam, todo123",
            ]
        );
    }

    #[test]
    fn test_custom_rules() {
        let rules = ValidationRules::with_overrides(RulesOverride {
            min_length: Some(10),
            prohibited_words: Some(vec!["urgent".to_string()]),
            required_pattern: Some(None),
            ..Default::default()
        })
        .unwrap();

        let result = validate("URGENT: €", &rules);
        assert_eq!(
            result.errors,
            vec![
                "Task description must be at least 10 characters long",
                "Task description cannot contain prohibited words: urgent",
            ]
        );
        assert!(validate("spam is fine here", &rules).is_valid);
    }

    #[test]
    fn test_state_flags_are_independent() {
        let state = description_state(&format!("spam!{}@", "a".repeat(100)));
        assert!(!state.is_empty);
        assert!(!state.is_too_short);
        assert!(state.is_too_long);
        assert!(state.has_invalid_chars);
        assert!(state.has_prohibited_words);
        assert_eq!(state.character_count, 106);
        assert_eq!(state.character_limit, 100);
    }

    #[test]
    fn test_empty_is_not_too_short() {
        let state = description_state("   ");
        assert!(state.is_empty);
        assert!(!state.is_too_short);
        assert_eq!(state.character_count, 0);

        let state = description_state(" ab ");
        assert!(!state.is_empty);
        assert!(state.is_too_short);
        assert_eq!(state.character_count, 2);
    }

    #[test]
    fn test_state_without_pattern_never_flags_chars() {
        let rules = ValidationRules::with_overrides(RulesOverride {
            required_pattern: Some(None),
            ..Default::default()
        })
        .unwrap();
        assert!(!validation_state("@@@ ###", &rules).has_invalid_chars);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let json = serde_json::to_value(validate_description("")).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["errors"][0], "Task description is required");
        assert!(json.get("issues").is_none());
    }
}
