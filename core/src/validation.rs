//! Length rules applied to request bodies before they reach the orchestrator.
//!
//! Lengths are counted in chars. Values are never trimmed: a title made of
//! spaces is accepted.

use thiserror::Error;

use crate::types::TodoRepresentation;

pub const TITLE_MAX_CHARS: usize = 150;
pub const CONTENT_MAX_CHARS: usize = 10_000;

/// A bound on the char length of one representation field.
#[derive(Debug, Clone, Copy)]
pub struct LengthRule {
    pub field: &'static str,
    pub min: usize,
    pub max: usize,
    value: fn(&TodoRepresentation) -> &str,
}

impl LengthRule {
    pub fn check(&self, input: &TodoRepresentation) -> Result<(), ValidationError> {
        let actual = (self.value)(input).chars().count();
        if (self.min..=self.max).contains(&actual) {
            Ok(())
        } else {
            Err(ValidationError::Length {
                field: self.field,
                min: self.min,
                max: self.max,
                actual,
            })
        }
    }
}

fn title(r: &TodoRepresentation) -> &str {
    &r.title
}

fn content(r: &TodoRepresentation) -> &str {
    &r.content
}

/// Rules for create and update bodies, checked in order.
pub const TODO_RULES: [LengthRule; 2] = [
    LengthRule {
        field: "title",
        min: 1,
        max: TITLE_MAX_CHARS,
        value: title,
    },
    LengthRule {
        field: "content",
        min: 0,
        max: CONTENT_MAX_CHARS,
        value: content,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max} characters, got {actual}")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Length { field, .. } => field,
        }
    }
}

/// Checks `input` against `TODO_RULES`, reporting the first violation.
pub fn validate(input: &TodoRepresentation) -> Result<(), ValidationError> {
    TODO_RULES.iter().try_for_each(|rule| rule.check(input))
}
