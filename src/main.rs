use katch_api::api::{cors_layer, create_router, AppState};
use katch_api::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("katch_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let state = AppState::from_config(&config);

    tracing::info!(
        min_ratio = state.matcher.diversity().min_ratio,
        min_count = state.matcher.diversity().min_count,
        default_match_count = state.default_match_count,
        "Matcher configured"
    );

    let app = create_router(state).layer(cors_layer(&config.origins()));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Katch backend listening");
    tracing::info!("  POST /api/result  - save a new result");
    tracing::info!("  GET  /api/result  - get the latest result");
    tracing::info!("  POST /api/matches - rank groups for liked artists");

    axum::serve(listener, app).await?;
    Ok(())
}
