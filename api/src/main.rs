//! CourseGate API Server
//!
//! Server-side content entitlement checks for the learning platform's web and
//! mobile front ends. Uses hexagonal (ports & adapters) architecture: the rules
//! live in `coursegate-core`, this binary supplies PostgreSQL adapters and HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coursegate_core::domain::ports::{ContentRepository, FactsProvider, RoleRepository};
use coursegate_core::AccessService;

mod adapters;
mod auth;
mod config;
mod entity;
mod error;
mod handlers;


use adapters::{PostgresContentRepository, PostgresFactsProvider, PostgresRoleRepository};
use config::Config;

/// Application state shared across all handlers
pub struct AppState<FP, RR, CR>
where
    FP: FactsProvider,
    RR: RoleRepository,
    CR: ContentRepository,
{
    pub access_service: Arc<AccessService<FP, RR, CR>>,
    pub config: Config,
}

impl<FP, RR, CR> Clone for AppState<FP, RR, CR>
where
    FP: FactsProvider,
    RR: RoleRepository,
    CR: ContentRepository,
{
    fn clone(&self) -> Self {
        Self {
            access_service: self.access_service.clone(),
            config: self.config.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for any set of port implementations
pub fn build_router<FP, RR, CR>(state: AppState<FP, RR, CR>) -> Router
where
    FP: FactsProvider + 'static,
    RR: RoleRepository + 'static,
    CR: ContentRepository + 'static,
{
    let protected_routes = Router::new()
        .route(
            "/check-live-access",
            post(handlers::check_live_access::<FP, RR, CR>),
        )
        .route(
            "/check-video-access",
            post(handlers::check_video_access::<FP, RR, CR>),
        )
        .route(
            "/users/:user_id/can-manage-live-sessions",
            get(handlers::can_manage_live_sessions::<FP, RR, CR>),
        )
        .layer(middleware::from_fn_with_state(
            state.config.clone(),
            auth::service_key_middleware,
        ));

    Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        .merge(protected_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,coursegate_api=debug,coursegate_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CourseGate API...");

    let config = Config::from_env()?;
    if !config.service_key_required() {
        tracing::warn!("SERVICE_API_KEY not set; any Bearer token will be accepted");
    }

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let facts_provider = Arc::new(PostgresFactsProvider::new(db.clone()));
    let role_repo = Arc::new(PostgresRoleRepository::new(db.clone()));
    let content_repo = Arc::new(PostgresContentRepository::new(db.clone()));

    let access_service = Arc::new(AccessService::new(facts_provider, role_repo, content_repo));

    let state = AppState {
        access_service,
        config: config.clone(),
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
