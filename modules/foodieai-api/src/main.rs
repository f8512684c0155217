use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use foodieai_catalog::PgCatalog;
use foodieai_common::Config;
use gemini_client::GeminiClient;

mod rest;

pub struct AppState {
    pub catalog: PgCatalog,
    pub generator: Option<GeminiClient>,
    pub city: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("foodieai_api=info".parse()?)
                .add_directive("foodieai_chat=info".parse()?),
        )
        .init();

    let config = Config::from_env();

    let pool = PgPool::connect(&config.database_url).await?;
    let catalog = PgCatalog::new(pool);
    catalog.migrate().await?;

    let generator = config.gemini_api_key.as_deref().map(GeminiClient::new);
    if generator.is_none() {
        warn!("GEMINI_API_KEY not set; chat requests will return a configuration error");
    }

    let state = Arc::new(AppState {
        catalog,
        generator,
        city: config.city,
    });

    let app = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // AI chat
        .route("/api/ai/chat", post(rest::chat::api_chat))
        // Discovery
        .route(
            "/api/restaurant/list/external",
            get(rest::restaurants::api_external_restaurants),
        )
        .route(
            "/api/restaurant/external/{id}",
            get(rest::restaurants::api_external_restaurant_detail),
        )
        .route(
            "/api/restaurant/deals/external",
            get(rest::restaurants::api_external_deals),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!(%addr, "FoodieAI API listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
