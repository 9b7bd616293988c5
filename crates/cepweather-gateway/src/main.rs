use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use cepweather::CepResolver;

mod adapters;
mod config;
mod error;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{build_http_client, HttpCepResolver};
use config::GatewayConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<dyn CepResolver>,
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
        service: "cepweather-gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full router: CEP route, health check and API docs
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::cep::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cepweather_gateway=debug,tower_http=debug"));
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

    tracing::info!("🚪 Gateway initializing...");

    let config = GatewayConfig::from_env().context("Invalid gateway configuration")?;
    tracing::debug!("{:?}", config);

    let client =
        build_http_client(config.outbound_timeout).context("Failed to build HTTP client")?;
    let resolver = Arc::new(HttpCepResolver::new(client, &config.resolver_url));

    tracing::info!("🔗 Forwarding to Resolver at {}", config.resolver_url);

    let state = AppState { resolver };

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Gateway ready on {}", config.bind_addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
