use serde_json::Value;
use std::fmt;

use crate::domain::{
    error::ValidationError,
    validation::{REGISTRATION_RULES, run_rules},
};

/// Registration payload that has passed every field check
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

impl TryFrom<&Value> for RegistrationRequest {
    type Error = ValidationError;

    fn try_from(payload: &Value) -> Result<Self, Self::Error> {
        // Anything other than an object has none of the required fields
        let empty = serde_json::Map::new();
        let fields = payload.as_object().unwrap_or(&empty);

        run_rules(fields, &REGISTRATION_RULES)?;

        let take = |field: &str| {
            fields
                .get(field)
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or_else(|| ValidationError::missing_field(field))
        };

        Ok(Self {
            first_name: take("firstName")?,
            last_name: take("lastName")?,
            username: take("username")?,
            password: take("password")?,
        })
    }
}
