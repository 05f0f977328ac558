mod config;
mod domain;
mod infrastructure;
mod logging;
mod presentation;
mod usecase;

use std::sync::Arc;

use axum::Router;
use sea_orm::{ConnectOptions, Database};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{
    config::AppConfig,
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher,
        question_repository::PostgresQuestionRepository, user_repository::PostgresUserRepository,
    },
    logging::{LogFormat, init_tracing},
    presentation::handlers::user_handler::create_user_router,
    usecase::register_user_usecase::RegisterUserUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    init_tracing(LogFormat::from_env());

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .sqlx_logging(true);

    let db = Arc::new(Database::connect(opt).await?);
    let user_repository = PostgresUserRepository::new(Arc::clone(&db));
    let question_repository = PostgresQuestionRepository::new(db);
    let password_hasher = Argon2PasswordHasher::new();
    let register_user_usecase =
        RegisterUserUsecase::new(user_repository, question_repository, password_hasher);

    let app = Router::new()
        .nest(
            &config.users_base_path,
            create_user_router(register_user_usecase, &config.users_base_path),
        )
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, base_path = %config.users_base_path, "listening");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutting down");
}
