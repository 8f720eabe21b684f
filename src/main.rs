use shufflestream::api::{create_router, AppState};
use shufflestream::config::Config;
use shufflestream::services::InMemoryCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shufflestream=debug,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => InMemoryCatalog::from_seed_file(path)?,
        None => InMemoryCatalog::demo(),
    };
    tracing::info!(
        items = catalog.content().len(),
        platforms = catalog.platforms().len(),
        "catalog loaded"
    );

    let state = AppState::with_settings(catalog, config.history_window, config.alternate_count);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
