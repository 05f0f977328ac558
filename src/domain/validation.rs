//! Field checks for the registration payload.
//!
//! Each rule inspects the raw JSON object and reports the first offending
//! field. Rules run in declaration order and the first failure wins, so a
//! payload always yields the same error.

use serde_json::{Map, Value};

use crate::domain::error::ValidationError;

pub type Payload = Map<String, Value>;
pub type Rule = fn(&Payload) -> Option<ValidationError>;

/// Fields every registration must carry, in reporting order
pub const REQUIRED_FIELDS: [&str; 4] = ["firstName", "lastName", "username", "password"];

/// Length bounds measured in UTF-16 code units on the trimmed value
#[derive(Debug, Clone, Copy)]
pub struct LengthBound {
    pub field: &'static str,
    pub min: Option<usize>,
    pub max: Option<usize>,
}

pub const SIZED_FIELDS: [LengthBound; 2] = [
    LengthBound {
        field: "username",
        min: Some(6),
        max: None,
    },
    LengthBound {
        field: "password",
        min: Some(10),
        max: Some(72),
    },
];

pub const REGISTRATION_RULES: [Rule; 4] = [
    missing_field,
    non_string_field,
    untrimmed_field,
    out_of_bounds_field,
];

/// Run `rules` in order, stopping at the first failure
pub fn run_rules(payload: &Payload, rules: &[Rule]) -> Result<(), ValidationError> {
    match rules.iter().find_map(|rule| rule(payload)) {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

fn string_field<'a>(payload: &'a Payload, field: &str) -> Option<&'a str> {
    payload.get(field).and_then(Value::as_str)
}

/// Whitespace as stripped by ECMAScript `String.prototype.trim`: Unicode
/// `White_Space` minus U+0085, plus the byte order mark U+FEFF
fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

pub fn trim(value: &str) -> &str {
    value.trim_matches(is_trimmable)
}

/// Length as clients measure it in JavaScript, so characters outside the
/// BMP count twice
fn trimmed_len(payload: &Payload, field: &str) -> Option<usize> {
    string_field(payload, field).map(|value| trim(value).encode_utf16().count())
}

pub fn missing_field(payload: &Payload) -> Option<ValidationError> {
    REQUIRED_FIELDS
        .iter()
        .find(|field| !payload.contains_key(**field))
        .map(|field| ValidationError::missing_field(field))
}

pub fn non_string_field(payload: &Payload) -> Option<ValidationError> {
    REQUIRED_FIELDS
        .iter()
        .find(|field| payload.get(**field).is_some_and(|value| !value.is_string()))
        .map(|field| ValidationError::not_a_string(field))
}

pub fn untrimmed_field(payload: &Payload) -> Option<ValidationError> {
    REQUIRED_FIELDS
        .iter()
        .find(|field| string_field(payload, field).is_some_and(|value| trim(value) != value))
        .map(|field| ValidationError::surrounding_whitespace(field))
}

/// A too-short field anywhere is reported before a too-long one
pub fn out_of_bounds_field(payload: &Payload) -> Option<ValidationError> {
    let too_short = SIZED_FIELDS.iter().find_map(|bound| {
        let min = bound.min?;
        let len = trimmed_len(payload, bound.field)?;
        (len < min).then(|| ValidationError::too_short(bound.field, min))
    });
    if too_short.is_some() {
        return too_short;
    }

    SIZED_FIELDS.iter().find_map(|bound| {
        let max = bound.max?;
        let len = trimmed_len(payload, bound.field)?;
        (len > max).then(|| ValidationError::too_long(bound.field, max))
    })
}
