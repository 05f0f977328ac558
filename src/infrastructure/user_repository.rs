use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, SqlErr,
};
use uuid::Uuid;

use crate::{
    domain::{
        error::RepositoryError,
        models::user::{NewUser, User, UserId},
        repositories::user_repository::UserRepository,
    },
    infrastructure::entity::users,
};

#[derive(Clone)]
pub struct PostgresUserRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_insert_error(err: DbErr) -> RepositoryError {
    classify_insert_error(err.sql_err(), err.to_string())
}

/// Unique violations stay distinct so callers can report a taken username
fn classify_insert_error(sql_err: Option<SqlErr>, detail: String) -> RepositoryError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(constraint)) => {
            RepositoryError::UniqueViolation(constraint)
        }
        _ => RepositoryError::DatabaseError(detail),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn count_by_username(&self, username: &str) -> Result<u64, RepositoryError> {
        users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .count(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let questions = serde_json::to_value(&new_user.questions)
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let user_model = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(new_user.first_name.clone()),
            last_name: Set(new_user.last_name.clone()),
            username: Set(new_user.username.clone()),
            password: Set(new_user.password_hash.as_str().to_string()),
            questions: Set(questions),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = user_model.insert(self.db.as_ref()).await.map_err(map_insert_error)?;

        Ok(User::reconstruct(
            UserId::from_uuid(inserted.id),
            new_user,
            inserted.created_at.with_timezone(&Utc),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    use super::*;
    use crate::domain::models::{
        password::HashedPassword,
        question::{Question, seed_user_questions},
    };

    const TEST_ID: &str = "00000000-0000-0000-0000-000000000001";

    fn new_user() -> NewUser {
        NewUser {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            username: "annlee1".to_string(),
            password_hash: HashedPassword::new("$argon2id$mock".to_string()),
            questions: seed_user_questions(vec![Question {
                id: 1,
                question: "hola".to_string(),
                answer: "hello".to_string(),
            }]),
        }
    }

    #[tokio::test]
    async fn count_by_username_reads_count_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([("num_items", Value::BigInt(Some(1)))])]])
            .into_connection();
        let repository = PostgresUserRepository::new(Arc::new(db));

        let count = repository.count_by_username("annlee1").await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn create_returns_user_with_store_assigned_id() {
        let user = new_user();
        let stored = users::Model {
            id: Uuid::parse_str(TEST_ID).unwrap(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
            password: user.password_hash.as_str().to_string(),
            questions: serde_json::to_value(&user.questions).unwrap(),
            created_at: Utc::now().fixed_offset(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored]])
            .into_connection();
        let repository = PostgresUserRepository::new(Arc::new(db));

        let created = repository.create(user).await.unwrap();
        assert_eq!(created.id().to_string(), TEST_ID);
        assert_eq!(created.username(), "annlee1");
        assert_eq!(created.questions().len(), 1);
    }

    #[test]
    fn unique_violation_is_kept_distinct() {
        let err = classify_insert_error(
            Some(SqlErr::UniqueConstraintViolation(
                "duplicate key value violates unique constraint \"users_username_key\"".to_string(),
            )),
            "insert failed".to_string(),
        );

        match err {
            RepositoryError::UniqueViolation(detail) => assert!(detail.contains("users_username_key")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn other_constraint_failures_are_database_errors() {
        let err = classify_insert_error(
            Some(SqlErr::ForeignKeyConstraintViolation("fk".to_string())),
            "insert failed".to_string(),
        );
        assert!(matches!(err, RepositoryError::DatabaseError(ref detail) if detail == "insert failed"));

        let err = map_insert_error(DbErr::Custom("connection reset".to_string()));
        assert!(matches!(err, RepositoryError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn create_surfaces_database_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repository = PostgresUserRepository::new(Arc::new(db));

        let err = repository.create(new_user()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::DatabaseError(_)));
    }
}
