use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    domain::{
        error::RepositoryError, models::question::Question,
        repositories::question_repository::QuestionRepository,
    },
    infrastructure::entity::questions,
};

#[derive(Clone)]
pub struct PostgresQuestionRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresQuestionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<questions::Model> for Question {
    fn from(model: questions::Model) -> Self {
        Self {
            id: model.id,
            question: model.question,
            answer: model.answer,
        }
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn list_all(&self) -> Result<Vec<Question>, RepositoryError> {
        let models = questions::Entity::find()
            .order_by_asc(questions::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(Question::from).collect())
    }
}
