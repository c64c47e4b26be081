use roledash_server::{app::build_router, config::Config, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roledash_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        static_dir = %config.static_dir.display(),
        backend_url = %config.backend_url,
        "Loaded configuration from environment/.env"
    );
    if !config.index_file().is_file() {
        tracing::warn!(
            index = %config.index_file().display(),
            "index.html not found; build the frontend before serving"
        );
    }

    let addr = config.bind_addr;
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
