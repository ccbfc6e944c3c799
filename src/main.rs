use tmdb_similar_streams::{
    api::{create_router, AppState},
    config::Config,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Missing configuration is the only fatal error
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration, exiting");
            std::process::exit(1);
        }
    };

    tracing::info!(
        min_vote_count = config.min_vote_count,
        max_recommendations = config.max_recommendations,
        tmdb_max_retries = config.tmdb_max_retries,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Add-on listening, manifest at /manifest.json");
    axum::serve(listener, app).await?;

    Ok(())
}
