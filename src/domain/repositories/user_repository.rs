use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::user::{NewUser, User},
};

#[async_trait]
pub trait UserRepository {
    /// Number of stored users whose username matches exactly
    async fn count_by_username(&self, username: &str) -> Result<u64, RepositoryError>;

    /// Persist a new user.
    ///
    /// A clash on the unique username constraint is reported as
    /// [`RepositoryError::UniqueViolation`].
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError>;
}
