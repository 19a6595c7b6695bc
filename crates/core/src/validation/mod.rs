//! Task description validation
//!
//! Evaluates a candidate description against a [`ValidationRules`] set,
//! producing either a strict verdict ([`ValidationResult`]) or a live
//! feedback snapshot ([`ValidationState`]) for the form.

mod engine;
mod rules;

pub use engine::*;
pub use rules::*;
