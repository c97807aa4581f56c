mod api_doc;
mod config;
mod error;
mod handlers;
mod routes;
mod state;
mod upstream;

use std::sync::Arc;

use anyhow::Context;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use state::AppState;
use upstream::UpstreamClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("bookstore-gateway starting");

    let config = Config::from_env()?;
    config.log_startup();

    let bind_addr = format!("{}:{}", config.service_host, config.service_port);

    let upstream = UpstreamClient::from_config(&config)?;
    let state = AppState {
        upstream,
        config: Arc::new(config),
    };

    let app = routes::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {bind_addr}"))?;

    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
