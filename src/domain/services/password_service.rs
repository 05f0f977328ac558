use crate::domain::{error::DomainError, models::password::HashedPassword};

/// Service for hashing passwords
pub trait PasswordHasher: Clone {
    /// Hash a plain text password
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError>;
}
