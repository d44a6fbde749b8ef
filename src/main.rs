use std::sync::Arc;

use axum::{
    routing::{any, get, patch},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::{info, Level};

mod config;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::store::Store;

/// Shared application state — cheap to clone (the store sits behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,catalog_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("=== Catalog Service ===");

    let store = Arc::new(Store::new());

    if config.seed_demo {
        seed::seed_demo_products(&store);
        info!("{}", seed::render_catalog(&store.list()));
    }

    if config.demo_only {
        seed::simulate_operations(&store);
        info!("Demo completed.");
        return Ok(());
    }

    let app = build_router(AppState { store });

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);
    info!("  GET    /products             - List all products");
    info!("  POST   /products             - Add new product");
    info!("  GET    /products/:id         - Fetch one product");
    info!("  PATCH  /products/:id/stock   - Adjust stock by delta");
    info!("  ANY    /health               - Health check");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", any(handlers::health))

        // ── Products ────────────────────────────────────────────────────────
        .route(
            "/products",
            get(handlers::products::list_products)
                .post(handlers::products::create_product)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/products/:id",
            get(handlers::products::get_product).fallback(handlers::method_not_allowed),
        )
        .route(
            "/products/:id/stock",
            patch(handlers::products::update_stock).fallback(handlers::method_not_allowed),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(state)
}
