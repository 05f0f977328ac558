use std::sync::Arc;

use crate::{
    domain::{
        models::{question::UserQuestion, registration::RegistrationRequest, user::User},
        repositories::{question_repository::QuestionRepository, user_repository::UserRepository},
        services::password_service::PasswordHasher,
    },
    presentation::error::ApiError,
    usecase::register_user_usecase::RegisterUserUsecase,
};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

// Response

/// json for a created user, the password digest is never exposed
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub questions: Vec<UserQuestion>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            username: user.username().to_string(),
            questions: user.questions().to_vec(),
            created_at: user.created_at(),
        }
    }
}

/* Router Function and Handler Function */

// User Router

/// function return Router object
/// Suppose to be nested by main router under `base_path`,
/// which also prefixes the `Location` of created users
pub fn create_user_router<
    U: UserRepository + Send + Sync + 'static,
    Q: QuestionRepository + Send + Sync + 'static,
    P: PasswordHasher + Send + Sync + 'static,
>(
    register_service: RegisterUserUsecase<U, Q, P>,
    base_path: &str,
) -> Router {
    let state = AppState {
        register_service: Arc::new(register_service),
        base_path: Arc::from(base_path.trim_end_matches('/')),
    };

    Router::new()
        .route("/", post(register::<U, Q, P>))
        .with_state(state)
}

pub struct AppState<U: UserRepository, Q: QuestionRepository, P: PasswordHasher> {
    pub register_service: Arc<RegisterUserUsecase<U, Q, P>>,
    pub base_path: Arc<str>,
}

impl<U: UserRepository, Q: QuestionRepository, P: PasswordHasher> Clone for AppState<U, Q, P> {
    fn clone(&self) -> Self {
        Self {
            register_service: Arc::clone(&self.register_service),
            base_path: Arc::clone(&self.base_path),
        }
    }
}

// handler function

/// Body as seen by the field checks.
///
/// A request without a JSON content type carries no fields, so it falls
/// through to the "Missing field" error like an empty object.
fn payload_from(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    match body {
        Ok(Json(payload)) => Ok(payload),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Object(Default::default())),
        Err(rejection) => {
            debug!(error = %rejection, "rejected request body");
            Err(ApiError::malformed_body())
        }
    }
}

/// handler function for register
///
/// The raw body is inspected field by field so missing and mistyped
/// fields get their own error messages.
async fn register<
    U: UserRepository + Send + Sync + 'static,
    Q: QuestionRepository + Send + Sync + 'static,
    P: PasswordHasher + Send + Sync + 'static,
>(
    State(state): State<AppState<U, Q, P>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let payload = match payload_from(body) {
        Ok(payload) => payload,
        Err(e) => return e.into_response(),
    };
    let request = match RegistrationRequest::try_from(&payload) {
        Ok(request) => request,
        Err(e) => return ApiError::from(e).into_response(),
    };

    match state.register_service.create_user(request).await {
        Ok(user) => {
            let location = format!("{}/{}", state.base_path, user.id());
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(UserResponse::from(&user)),
            )
                .into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
