use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
}

/// Client-caused rejection, always tied to one request field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {message}")]
pub struct ValidationError {
    message: String,
    location: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: location.into(),
        }
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new("Missing field", field)
    }

    pub fn not_a_string(field: &str) -> Self {
        Self::new("Incorrect field type: expected string", field)
    }

    pub fn surrounding_whitespace(field: &str) -> Self {
        Self::new("Cannot start or end with whitespace", field)
    }

    pub fn too_short(field: &str, min: usize) -> Self {
        Self::new(format!("Must be at least {min} characters long"), field)
    }

    pub fn too_long(field: &str, max: usize) -> Self {
        Self::new(format!("Must be at most {max} characters long"), field)
    }

    pub fn username_taken() -> Self {
        Self::new("Username already taken", "username")
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
