//! Field validation for the registration wizard and the admin edit flow
//!
//! One table keyed by [`Field`], used identically by both flows: the wizard
//! validates each step's answer, the edit sub-flow validates the replacement
//! value. All validators are pure and synchronous.

use thiserror::Error;

use crate::core::types::{Field, FieldValue};

/// Minimum participant age
pub const MIN_AGE: u32 = 16;

/// Minimum number of digits in a Steam ID
pub const MIN_STEAM_ID_DIGITS: usize = 8;

/// Sentinel the comments step accepts as "nothing to add"
pub const NO_COMMENTS_SENTINEL: &str = "-";

/// Normalized form stored when the sentinel is used
pub const NO_COMMENTS: &str = "Без коментарів";

/// A rejected field value. The `Display` text is the exact re-prompt line
/// sent back to the user, so the state machine can reply with the error and
/// stay on the same step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("❌ Введіть число. Спробуйте ще раз:")]
    AgeNotANumber,

    #[error("❌ Вік має бути від 16 років. Спробуйте ще раз:")]
    AgeBelowMinimum,

    #[error("❌ Steam ID має містити тільки цифри (мінімум 8)\nСпробуйте ще раз:")]
    MalformedSteamId,

    #[error("❌ Тег має бути 2-5 символів:")]
    TagLengthOutOfRange,

    #[error("❌ Значення не може бути порожнім. Спробуйте ще раз:")]
    Empty,
}

/// True iff `s` is decimal digits only and at least [`MIN_STEAM_ID_DIGITS`]
/// of them.
pub fn is_valid_steam_id(s: &str) -> bool {
    s.len() >= MIN_STEAM_ID_DIGITS && s.chars().all(|c| c.is_ascii_digit())
}

/// Parses an age answer: base-10 integer, at least [`MIN_AGE`].
pub fn validate_age(s: &str) -> Result<u32, ValidationError> {
    let age: i64 = s.trim().parse().map_err(|_| ValidationError::AgeNotANumber)?;
    if age < MIN_AGE as i64 {
        return Err(ValidationError::AgeBelowMinimum);
    }
    u32::try_from(age).map_err(|_| ValidationError::AgeNotANumber)
}

/// Validates a team tag: trimmed length 2–5 characters, normalized to
/// uppercase. Idempotent on accepted values.
pub fn validate_tag(s: &str) -> Result<String, ValidationError> {
    let tag = s.trim();
    let len = tag.chars().count();
    if !(2..=5).contains(&len) {
        return Err(ValidationError::TagLengthOutOfRange);
    }
    Ok(tag.to_uppercase())
}

/// The shared per-field validator table.
///
/// Returns the normalized value to store, or the re-prompt error.
pub fn validate_field(field: Field, input: &str) -> Result<FieldValue, ValidationError> {
    match field {
        Field::TeamTag => validate_tag(input).map(FieldValue::Text),
        Field::CapAge | Field::P2Age | Field::P3Age | Field::P4Age | Field::P5Age => {
            validate_age(input).map(FieldValue::Age)
        }
        Field::CapSteam | Field::P2Steam | Field::P3Steam | Field::P4Steam | Field::P5Steam => {
            if is_valid_steam_id(input) {
                Ok(FieldValue::Text(input.to_string()))
            } else {
                Err(ValidationError::MalformedSteamId)
            }
        }
        Field::Comments => {
            let trimmed = input.trim();
            if trimmed == NO_COMMENTS_SENTINEL {
                Ok(FieldValue::Text(NO_COMMENTS.to_string()))
            } else if trimmed.is_empty() {
                Err(ValidationError::Empty)
            } else {
                Ok(FieldValue::Text(input.to_string()))
            }
        }
        // Free-text fields: anything non-empty
        _ => {
            if input.trim().is_empty() {
                Err(ValidationError::Empty)
            } else {
                Ok(FieldValue::Text(input.to_string()))
            }
        }
    }
}
