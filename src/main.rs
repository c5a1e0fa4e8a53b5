use listing::{CmsConfig, CmsFetcher};
use spacetraveling::app;
use spacetraveling::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CmsConfig {
        api_url: std::env::var("CMS_API_URL")
            .unwrap_or_else(|_| "https://spacetraveling.cdn.prismic.io/api/v2".to_string()),
        content_type: std::env::var("CMS_CONTENT_TYPE").unwrap_or_else(|_| "posts".to_string()),
        // Page size 1 matches the original listing; raise it via env for real use.
        page_size: std::env::var("CMS_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1),
    };

    tracing::info!(
        "Using CMS at {} (type={})",
        config.api_url,
        config.content_type
    );

    let http_client = reqwest::Client::builder()
        .user_agent("spacetraveling/0.1")
        .build()
        .expect("Failed to build HTTP client");

    let app_state = AppState {
        fetcher: Arc::new(CmsFetcher::new(http_client, config)),
    };

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("spacetraveling listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let router = app(app_state);
    axum::serve(listener, router).await?;

    Ok(())
}
