//! Environment-driven shell configuration

use todo_core::validation::{RulesOverride, ValidationRules};

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub seed_samples: bool,
    pub rules: RulesOverride,
}

impl ShellConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let prohibited_words = lookup("TODO_PROHIBITED_WORDS").map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(String::from)
                .collect()
        });

        let required_pattern = if flag(lookup("TODO_DISABLE_PATTERN"), false) {
            Some(None)
        } else {
            None
        };

        Self {
            seed_samples: flag(lookup("TODO_SEED_SAMPLES"), true),
            rules: RulesOverride {
                min_length: number(lookup("TODO_MIN_LENGTH")),
                max_length: number(lookup("TODO_MAX_LENGTH")),
                prohibited_words,
                required_pattern,
            },
        }
    }

    pub fn validation_rules(&self) -> todo_core::Result<ValidationRules> {
        ValidationRules::with_overrides(self.rules.clone())
    }
}

fn flag(raw: Option<String>, default: bool) -> bool {
    match raw {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}

fn number(raw: Option<String>) -> Option<usize> {
    raw.and_then(|raw| raw.trim().parse().ok())
}
