// Start of file: src/main.rs

use axum::{Router, serve};
use tokio::net::TcpListener;

use greeting_service::config::state::AppState;
use greeting_service::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let state: AppState = AppState::from_env()?;
    let protocol: String = state.environment.protocol.to_string();

    tracing::info!(environment = %state.environment.environment, "Starting greeting service");

    let listener: TcpListener = server::setup_listener(&state.environment).await?;
    let app: Router = server::create_app(state);

    tracing::info!("Server listening on: {}://{}", protocol, listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
