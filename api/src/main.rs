use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use gk_api::app::create_app;
use gk_api::routes::user::AppState;
use gk_api::telemetry::init_tracing;
use gk_core::services::{
    SessionService, SessionServiceConfig, TokenServiceConfig, TokenSigner, UserService,
};
use gk_infra::{BcryptPasswordHasher, DatabasePool, PgTokenRepository, PgUserRepository};
use gk_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    info!(environment = %config.environment, "Starting Gatekeep API Server");

    let pool = DatabasePool::new(&config.database)
        .await
        .context("Failed to connect to the database")?;
    if config.database.run_migrations {
        pool.run_migrations()
            .await
            .context("Failed to run database migrations")?;
    }
    if !pool.health_check().await.context("Database health check failed")? {
        anyhow::bail!("Database health check returned an unexpected value");
    }

    let user_repo = Arc::new(PgUserRepository::new(pool.get_pool().clone()));
    let token_repo = Arc::new(PgTokenRepository::new(pool.get_pool().clone()));
    let hasher = Arc::new(BcryptPasswordHasher::new());

    let signer = Arc::new(TokenSigner::new(&TokenServiceConfig::from(&config.auth.jwt)));
    let session_service = Arc::new(SessionService::new(
        user_repo.clone(),
        token_repo,
        hasher.clone(),
        signer,
        SessionServiceConfig::from(&config.auth.jwt),
    ));
    let user_service = Arc::new(UserService::new(user_repo, hasher));

    let app_state = web::Data::new(AppState {
        session_service,
        user_service,
    });

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind to address");

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    Ok(())
}
