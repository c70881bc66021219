//! Field validation and normalization.
//!
//! Every function here is pure: it takes a raw slot value and returns a
//! decision. Applying that decision to conversation state is the caller's job.
//!
//! # Rules
//!
//! | Field          | Accepts                                   | Stored as            |
//! |----------------|-------------------------------------------|----------------------|
//! | `freight_cost` | digits with optional `$`, `.`, `,`        | integer amount       |
//! | `weight`       | real number with optional unit suffix     | the original text    |
//! | everything else| any non-empty text                        | the trimmed text     |

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::directive::HostDirective;
use super::field::{FieldKind, FieldName, FieldStatus};
use super::slot_value::SlotValue;

/// Unit suffixes stripped from weight input before parsing.
pub const WEIGHT_UNITS: &[&str] = &[
    "kg",
    "kgs",
    "kilo",
    "kilos",
    "kilogramo",
    "kilogramos",
    "t",
    "ton",
    "tons",
    "tonelada",
    "toneladas",
];

/// A field value after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NormalizedValue {
    /// Whole currency units (pesos).
    Amount(u64),
    Text(String),
}

impl NormalizedValue {
    pub fn as_amount(&self) -> Option<u64> {
        match self {
            NormalizedValue::Amount(amount) => Some(*amount),
            NormalizedValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            NormalizedValue::Text(text) => Some(text),
            NormalizedValue::Amount(_) => None,
        }
    }
}

impl fmt::Display for NormalizedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizedValue::Amount(amount) => write!(f, "{}", amount),
            NormalizedValue::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<NormalizedValue> for Value {
    fn from(value: NormalizedValue) -> Self {
        match value {
            NormalizedValue::Amount(amount) => Value::from(amount),
            NormalizedValue::Text(text) => Value::String(text),
        }
    }
}

/// Why a correction prompt was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    /// Nothing usable was supplied; ask again.
    Missing,
    /// Something was supplied but it fails the field's rule; show an example.
    Invalid,
}

/// Message the host relays to the user after a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionPrompt {
    pub field: FieldName,
    pub kind: PromptKind,
    pub text: String,
}

impl CorrectionPrompt {
    pub fn missing(field: FieldName) -> Self {
        let text = match field.kind() {
            FieldKind::Currency => "Please tell me the freight cost.".to_string(),
            FieldKind::Weight => "Please tell me the cargo weight.".to_string(),
            FieldKind::Text => format!("Please tell me the {}.", field.label()),
        };
        Self {
            field,
            kind: PromptKind::Missing,
            text,
        }
    }

    pub fn invalid(field: FieldName) -> Self {
        let text = match field.kind() {
            FieldKind::Currency => "That doesn't look like a valid freight cost. \
                 Please send only the amount, for example 150000 or $150,000."
                .to_string(),
            FieldKind::Weight => "That doesn't look like a valid weight. \
                 Please send a number, for example 500 kg or 1.5."
                .to_string(),
            FieldKind::Text => format!(
                "I couldn't read the {}. Please send it as plain text.",
                field.label()
            ),
        };
        Self {
            field,
            kind: PromptKind::Invalid,
            text,
        }
    }
}

impl fmt::Display for CorrectionPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Outcome of validating one raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidation {
    Valid(NormalizedValue),
    Rejected(CorrectionPrompt),
}

impl FieldValidation {
    pub fn status(&self) -> FieldStatus {
        match self {
            FieldValidation::Valid(_) => FieldStatus::Valid,
            FieldValidation::Rejected(_) => FieldStatus::Rejected,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, FieldValidation::Valid(_))
    }

    pub fn normalized_value(&self) -> Option<&NormalizedValue> {
        match self {
            FieldValidation::Valid(value) => Some(value),
            FieldValidation::Rejected(_) => None,
        }
    }

    pub fn correction_prompt(&self) -> Option<&CorrectionPrompt> {
        match self {
            FieldValidation::Valid(_) => None,
            FieldValidation::Rejected(prompt) => Some(prompt),
        }
    }

    /// The state change the host should apply for `field`.
    pub fn directive(&self, field: FieldName) -> HostDirective {
        HostDirective::SetField {
            field,
            value: self.normalized_value().cloned(),
        }
    }
}

/// Why a raw string failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    Empty,
    Malformed,
}

/// Validates a raw value for `field`.
pub fn validate_field(field: FieldName, raw: &SlotValue) -> FieldValidation {
    match field.kind() {
        FieldKind::Currency => validate_currency(field, raw),
        FieldKind::Weight => validate_weight(field, raw),
        FieldKind::Text => validate_text(field, raw),
    }
}

fn validate_currency(field: FieldName, raw: &SlotValue) -> FieldValidation {
    let parsed = match raw {
        SlotValue::Empty => Err(ParseFailure::Empty),
        SlotValue::Text(text) => parse_amount(text),
        SlotValue::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().and_then(whole_amount))
            .ok_or(ParseFailure::Malformed),
        SlotValue::Other(_) => Err(ParseFailure::Malformed),
    };

    match parsed {
        Ok(amount) => FieldValidation::Valid(NormalizedValue::Amount(amount)),
        Err(ParseFailure::Empty) => FieldValidation::Rejected(CorrectionPrompt::missing(field)),
        Err(ParseFailure::Malformed) => {
            FieldValidation::Rejected(CorrectionPrompt::invalid(field))
        }
    }
}

fn validate_weight(field: FieldName, raw: &SlotValue) -> FieldValidation {
    let parsed = match raw {
        SlotValue::Empty => Err(ParseFailure::Empty),
        SlotValue::Text(text) => parse_weight(text).map(|_| text.trim().to_string()),
        SlotValue::Number(number) => Ok(number.to_string()),
        SlotValue::Other(_) => Err(ParseFailure::Malformed),
    };

    match parsed {
        Ok(display) => FieldValidation::Valid(NormalizedValue::Text(display)),
        Err(ParseFailure::Empty) => FieldValidation::Rejected(CorrectionPrompt::missing(field)),
        Err(ParseFailure::Malformed) => {
            FieldValidation::Rejected(CorrectionPrompt::invalid(field))
        }
    }
}

fn validate_text(field: FieldName, raw: &SlotValue) -> FieldValidation {
    match raw {
        SlotValue::Empty => FieldValidation::Rejected(CorrectionPrompt::missing(field)),
        SlotValue::Text(text) => {
            FieldValidation::Valid(NormalizedValue::Text(text.trim().to_string()))
        }
        SlotValue::Number(number) => {
            FieldValidation::Valid(NormalizedValue::Text(number.to_string()))
        }
        SlotValue::Other(_) => FieldValidation::Rejected(CorrectionPrompt::invalid(field)),
    }
}

/// Parses a peso amount.
///
/// `.` and `,` are grouping noise, never decimal points, so `"150.000"` is
/// one hundred fifty thousand. An input made only of separators is malformed,
/// not zero.
pub fn parse_amount(raw: &str) -> Result<u64, ParseFailure> {
    if raw.trim().is_empty() {
        return Err(ParseFailure::Empty);
    }

    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | '.' | ','))
        .collect();
    let digits = cleaned.trim();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseFailure::Malformed);
    }

    digits.parse::<u64>().map_err(|_| ParseFailure::Malformed)
}

/// Parses a weight, ignoring a trailing unit from [`WEIGHT_UNITS`].
///
/// No range check is applied; negative and zero weights parse.
pub fn parse_weight(raw: &str) -> Result<f64, ParseFailure> {
    let lowered = raw.trim().to_lowercase();
    if lowered.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let number_part = lowered.trim_end_matches(char::is_alphabetic);
    let unit = &lowered[number_part.len()..];
    if !unit.is_empty() && !WEIGHT_UNITS.contains(&unit) {
        return Err(ParseFailure::Malformed);
    }

    match number_part.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseFailure::Malformed),
    }
}

fn whole_amount(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}
