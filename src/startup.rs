//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{
    AccountService, AccountServiceImpl, PasswordHasher, TokenService,
};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgAccountQueryProcessor, PgAccountRepository};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountService>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(accounts: Arc<dyn AccountService>, tokens: Arc<TokenService>) -> Self {
        Self { accounts, tokens }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    ///
    /// Fails if the signing key or hash cost is unusable; the process must
    /// not start in that case.
    pub async fn build(settings: Settings) -> Result<Self> {
        let tokens = Arc::new(
            TokenService::from_settings(&settings.jwt).context("invalid JWT signing key")?,
        );
        let hasher = PasswordHasher::new(settings.password.hash_cost)
            .context("invalid password hash cost")?;
        tracing::info!(hash_cost = hasher.cost(), "Credential services initialized");

        // Create database pool
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        database::run_migrations(&db).await?;
        tracing::info!("Database migrations applied");

        let accounts = AccountServiceImpl::new(
            Arc::new(PgAccountRepository::new(db.clone())),
            Arc::new(PgAccountQueryProcessor::new(db)),
            hasher,
            tokens.clone(),
        );
        let state = AppState::new(Arc::new(accounts), tokens);

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address
        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
