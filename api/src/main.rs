//! Storefront API Server
//!
//! Read-only reporting over a storefront database: merchants, items and the
//! revenue recorded on their invoices.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::{ConnectOptions, Database};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod document;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresInvoiceRepository, PostgresItemRepository, PostgresMerchantRepository,
    PostgresRevenueRepository,
};
use app::{ItemService, MerchantService, RevenueService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub merchant_service: Arc<MerchantService>,
    pub item_service: Arc<ItemService>,
    pub revenue_service: Arc<RevenueService>,
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

/// All routes and middleware except rate limiting, which needs the peer address
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Merchants
        .route("/merchants", get(handlers::list_merchants))
        .route("/merchants/find_all", get(handlers::find_all_merchants))
        .route("/merchants/:id", get(handlers::get_merchant))
        .route("/merchants/:id/items", get(handlers::merchant_items))
        // Items
        .route("/items", get(handlers::list_items))
        .route("/items/find", get(handlers::find_item))
        .route("/items/:id", get(handlers::get_item))
        .route("/items/:id/merchant", get(handlers::item_merchant))
        .route(
            "/items/:id/sole_item_invoices",
            get(handlers::sole_item_invoices),
        )
        // Revenue
        .route("/revenue/merchants", get(handlers::top_merchants))
        .route("/revenue/merchants/:id", get(handlers::merchant_revenue))
        .route("/revenue/items", get(handlers::top_items))
        .route(
            "/revenue/unshipped",
            get(handlers::unshipped_potential_revenue),
        );

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .fallback(handlers::route_not_found)
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
                .unwrap_or_else(|_| "info,storefront_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Storefront API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!(
        max_connections = config.db_max_connections,
        "Connecting to database..."
    );
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.max_connections(config.db_max_connections);
    let db = Database::connect(options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let merchant_repo = Arc::new(PostgresMerchantRepository::new(db.clone()));
    let item_repo = Arc::new(PostgresItemRepository::new(db.clone()));
    let invoice_repo = Arc::new(PostgresInvoiceRepository::new(db.clone()));
    let revenue_repo = Arc::new(PostgresRevenueRepository::new(db));

    // Create application services
    let state = AppState {
        merchant_service: Arc::new(MerchantService::new(
            merchant_repo.clone(),
            item_repo.clone(),
        )),
        item_service: Arc::new(ItemService::new(
            item_repo.clone(),
            merchant_repo.clone(),
            invoice_repo.clone(),
        )),
        revenue_service: Arc::new(RevenueService::new(
            revenue_repo,
            merchant_repo,
            item_repo,
            invoice_repo,
        )),
    };

    // Uses PeerIpKeyExtractor to get client IP from socket connection
    // (SmartIpKeyExtractor requires X-Forwarded-For headers from reverse proxy)
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    let app = build_router(state).layer(GovernorLayer {
        config: governor_config,
    });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
