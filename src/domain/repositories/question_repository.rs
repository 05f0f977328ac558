use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::question::Question};

#[async_trait]
pub trait QuestionRepository {
    /// Whole catalog in catalog order
    async fn list_all(&self) -> Result<Vec<Question>, RepositoryError>;
}
