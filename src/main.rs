use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use youtube_summarizer::{
    config::Config,
    api::routes::create_router,
    youtube::TranscriptFetcher,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;

    // Shared HTTP client for the completion API. Completion calls are slow,
    // so the overall timeout is generous; connecting is not.
    let http = reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(120))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()?;

    let transcripts = TranscriptFetcher::new()?;

    // Create application state
    let app_state = AppState {
        config: Arc::new(config),
        http,
        transcripts,
    };

    // Build the router with routes
    let app = create_router(app_state);

    // Create the listener
    let listener = TcpListener::bind(server_addr).await?;

    // Start the server
    tracing::info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
