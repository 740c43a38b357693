use anyhow::Context;
use callstatus::{
    chat::{MatrixClient, StatusRenderer},
    AppState, Config, RoomRegistry, TrackedRooms,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "callstatus=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!(
        user_id = %config.user_id,
        room_id = %config.room_id,
        tracked_rooms = ?config.jitsi_rooms,
        "Starting call status bridge"
    );

    let chat_client = MatrixClient::new(
        &config.homeserver_url,
        config.access_token.clone(),
        config.room_id.clone(),
    )
    .context("failed to create matrix client")?;

    let tracked_rooms = TrackedRooms::new(config.jitsi_rooms.iter().cloned());
    if tracked_rooms.is_empty() {
        warn!("JITSI_ROOMS lists no rooms, every webhook will be ignored");
    }
    info!(room_count = tracked_rooms.len(), "Tracking conference rooms");

    let app_state = AppState::new(
        Arc::new(RoomRegistry::new()),
        Arc::new(chat_client),
        Arc::new(tracked_rooms),
        StatusRenderer::new(config.jitsi_server.clone()),
    );

    let listener = tokio::net::TcpListener::bind(&config.listen_address)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_address))?;
    info!("Server running on {}", config.listen_address);
    axum::serve(listener, callstatus::app(app_state)).await?;

    Ok(())
}
