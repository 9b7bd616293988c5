use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{build_http_client, ViaCepDirectory, WeatherApiProvider};
use application::WeatherService;
use config::ResolverConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<WeatherService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    service: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        service: "cepweather-resolver".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full router: process route, health check and API docs
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::process::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cepweather_resolver=debug,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    init_tracing();

    match dotenv {
        Ok(path) => tracing::info!("📄 Loaded environment from {}", path.display()),
        Err(_) => tracing::debug!("No .env file found, using process environment"),
    }

    tracing::info!("🌡️ Resolver initializing...");

    let config = ResolverConfig::from_env().context("Invalid resolver configuration")?;
    tracing::debug!("{:?}", config);

    if config.weather_api_key.is_none() {
        tracing::warn!("⚠️  No WEATHERAPI_KEY set - weather lookups will fail with 500");
    }

    let client =
        build_http_client(config.outbound_timeout).context("Failed to build HTTP client")?;
    let directory = Arc::new(ViaCepDirectory::new(
        client.clone(),
        config.viacep_base_url.clone(),
    ));
    let weather = Arc::new(WeatherApiProvider::new(
        client,
        config.weatherapi_base_url.clone(),
        config.weather_api_key.clone(),
    ));

    let state = AppState {
        weather_service: Arc::new(WeatherService::new(directory, weather)),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Resolver ready on {}", config.bind_addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
