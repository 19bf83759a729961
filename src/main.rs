use std::sync::Arc;

use anyhow::Context;
use chatbot_api::{config::Config, routes, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chatbot_api=debug".into()),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;
    info!(
        bind_addr = %config.bind_addr,
        cors_origins = ?config.cors_origins,
        delay_min = ?config.reply_delay.min,
        delay_max = ?config.reply_delay.max,
        "configuration loaded"
    );
    if config.cors_origins.is_empty() {
        tracing::warn!("CORS allows every origin; set CORS_ALLOWED_ORIGINS in production");
    }

    let state = Arc::new(AppState::new(config.reply_delay));

    let app = routes::create_router()
        .with_state(state)
        .layer(config.cors_layer());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    let local = listener.local_addr()?;
    info!("🚀 chatbot running at http://{local}");
    info!("📡 chat API at http://{local}/api/chat");
    axum::serve(listener, app).await?;

    Ok(())
}
