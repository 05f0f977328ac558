use tracing::{debug, info};

use crate::domain::{
    error::{DomainError, RepositoryError, ValidationError},
    models::{
        question::seed_user_questions,
        registration::RegistrationRequest,
        user::{NewUser, User},
    },
    repositories::{question_repository::QuestionRepository, user_repository::UserRepository},
    services::password_service::PasswordHasher,
};

pub struct RegisterUserUsecase<U: UserRepository, Q: QuestionRepository, P: PasswordHasher> {
    user_repository: U,
    question_repository: Q,
    password_hasher: P,
}

impl<U: UserRepository, Q: QuestionRepository, P: PasswordHasher> RegisterUserUsecase<U, Q, P> {
    pub fn new(user_repository: U, question_repository: Q, password_hasher: P) -> Self {
        Self {
            user_repository,
            question_repository,
            password_hasher,
        }
    }

    /// Create a user from an already validated request.
    ///
    /// Steps run strictly one after another: catalog snapshot, duplicate
    /// check, hashing, insert.
    pub async fn create_user(&self, request: RegistrationRequest) -> Result<User, DomainError>
    where
        U: Send + Sync,
        Q: Send + Sync,
        P: Send + Sync + 'static,
    {
        let RegistrationRequest {
            first_name,
            last_name,
            username,
            password,
        } = request;

        let catalog = self.question_repository.list_all().await?;
        let questions = seed_user_questions(catalog);
        debug!(%username, questions = questions.len(), "seeded question list");

        let existing = self.user_repository.count_by_username(&username).await?;
        if existing > 0 {
            return Err(ValidationError::username_taken().into());
        }

        // Argon2 is CPU bound, keep it off the async workers
        let hasher = self.password_hasher.clone();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::Internal(format!("hashing task failed: {e}")))??;

        let new_user = NewUser {
            first_name,
            last_name,
            username,
            password_hash,
            questions,
        };

        // The pre-check above races with concurrent registrations; the
        // store's unique constraint is authoritative.
        let user = match self.user_repository.create(new_user).await {
            Ok(user) => user,
            Err(RepositoryError::UniqueViolation(_)) => {
                return Err(ValidationError::username_taken().into());
            }
            Err(e) => return Err(e.into()),
        };

        info!(user_id = %user.id(), username = user.username(), "registered user");
        Ok(user)
    }
}
