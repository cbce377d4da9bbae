// src/main.rs
use axum::{extract::Extension, middleware, Router};
use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod accounts;
mod common;
mod logging_middleware;
mod rules;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use accounts::ACCOUNT_FIELDS;
use common::{AppConfig, AppState};
use rules::RuleRegistry;

// ============================================================================
// ROUTER COMPOSITION
// ============================================================================

pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        // ====================================================================
        // ACCOUNT ROUTES
        // ====================================================================
        .merge(accounts::accounts_routes())
        // ====================================================================
        // MIDDLEWARE AND LAYERS
        // ====================================================================
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(state))
        .layer(
            CorsLayer::new()
                .allow_origin(config.cors_origins.clone())
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
}

/// Builds the rule registry and checks every account field resolves
/// to a registered rule.
pub fn init_registry() -> anyhow::Result<RuleRegistry> {
    let registry = RuleRegistry::with_builtin_rules();
    registry.self_check(&ACCOUNT_FIELDS)?;
    info!(rules = ?registry.rule_names(), "Validation rules registered");
    Ok(registry)
}

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = AppConfig::from_env();

    // ========================================================================
    // VALIDATION RULES
    // ========================================================================

    let state = AppState::new(init_registry()?);

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let router = app(state, &config);

    let addr = config.socket_addr();
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
