//! Validation rule configuration

use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::{Error, Result};

pub const DEFAULT_MIN_LENGTH: usize = 3;
pub const DEFAULT_MAX_LENGTH: usize = 100;
pub const DEFAULT_PROHIBITED_WORDS: [&str; 3] = ["spam", "test123", "todo123"];

/// Symbols accepted by [`CharacterPattern::Standard`] besides letters, digits and whitespace.
const STANDARD_SYMBOLS: [char; 8] = ['-', '_', '.', ',', '!', '?', '(', ')'];

/// Character set a description must be drawn from
#[derive(Debug, Clone)]
pub enum CharacterPattern {
    /// ASCII letters and digits, whitespace, and `- _ . , ! ? ( )`
    Standard,
    /// A caller-supplied regular expression, matched against the whole trimmed text
    Custom(Regex),
}

impl CharacterPattern {
    /// Compile a custom pattern
    pub fn custom(pattern: &str) -> Result<Self> {
        Ok(Self::Custom(Regex::new(pattern)?))
    }

    /// Whether `text` satisfies the pattern.
    ///
    /// The standard set needs at least one character, so empty text never matches.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Standard => !text.is_empty() && text.chars().all(is_standard_char),
            Self::Custom(regex) => regex.is_match(text),
        }
    }
}

fn is_standard_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || STANDARD_SYMBOLS.contains(&c)
}

/// Rules a task description is checked against.
///
/// Built through [`ValidationRules::new`] or [`ValidationRules::with_overrides`],
/// both of which reject inconsistent settings up front so that validation
/// itself never fails.
#[derive(Debug, Clone)]
pub struct ValidationRules {
    min_length: usize,
    max_length: usize,
    prohibited_words: Vec<String>,
    required_pattern: Option<CharacterPattern>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            prohibited_words: DEFAULT_PROHIBITED_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            required_pattern: Some(CharacterPattern::Standard),
        }
    }
}

impl ValidationRules {
    /// Create a rule set from explicit values
    pub fn new(
        min_length: usize,
        max_length: usize,
        prohibited_words: Vec<String>,
        required_pattern: Option<CharacterPattern>,
    ) -> Result<Self> {
        if max_length == 0 {
            return Err(Error::InvalidRules(
                "maximum length must be greater than zero".to_string(),
            ));
        }
        if min_length > max_length {
            return Err(Error::InvalidRules(format!(
                "minimum length {} exceeds maximum length {}",
                min_length, max_length
            )));
        }
        if prohibited_words.iter().any(|w| w.trim().is_empty()) {
            return Err(Error::InvalidRules(
                "prohibited words cannot be blank".to_string(),
            ));
        }

        Ok(Self {
            min_length,
            max_length,
            prohibited_words,
            required_pattern,
        })
    }

    /// Merge a partial override over the defaults
    pub fn with_overrides(overrides: RulesOverride) -> Result<Self> {
        let defaults = Self::default();

        let required_pattern = match overrides.required_pattern {
            None => defaults.required_pattern,
            Some(None) => None,
            Some(Some(pattern)) => Some(CharacterPattern::custom(&pattern)?),
        };

        Self::new(
            overrides.min_length.unwrap_or(defaults.min_length),
            overrides.max_length.unwrap_or(defaults.max_length),
            overrides
                .prohibited_words
                .unwrap_or(defaults.prohibited_words),
            required_pattern,
        )
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn prohibited_words(&self) -> &[String] {
        &self.prohibited_words
    }

    pub fn required_pattern(&self) -> Option<&CharacterPattern> {
        self.required_pattern.as_ref()
    }

    /// Prohibited words contained in `text`, compared case-insensitively,
    /// in rule order.
    pub fn prohibited_words_in(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.prohibited_words
            .iter()
            .filter(|word| lowered.contains(&word.to_lowercase()))
            .cloned()
            .collect()
    }
}

/// Partial rule configuration; unset fields fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesOverride {
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub prohibited_words: Option<Vec<String>>,
    /// `None` keeps the default pattern, `Some(None)` disables the check
    #[serde(default, deserialize_with = "explicit_option")]
    pub required_pattern: Option<Option<String>>,
}

/// Distinguishes an explicit `null` from an absent field.
fn explicit_option<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
