// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    http::StatusCode,
    middleware::from_fn,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
    response::IntoResponse,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::Result;

use crate::api::api_routes;
use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::utils::{
    error_handler::handle_global_error,
    response_handler::response_wrapper,
};

/// Answers every request that matches no route
pub async fn fallback_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "The requested route does not exist")
}

/// Creates and configures the application router with all middleware layers
pub fn create_app(state: AppState) -> Router {
    let env: &EnvironmentVariables = &state.environment;
    let timeout: Duration = Duration::from_secs(env.default_timeout_seconds);
    let max_body_size: usize = env.max_request_body_size;

    Router::new()
        .merge(api_routes())
        .fallback(fallback_handler)
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(response_wrapper))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(timeout))
                .layer(DefaultBodyLimit::max(max_body_size))
        )
        .with_state(state)
}

/// Takes the socket handed over by listenfd, or binds HOST:PORT
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => TcpListener::bind(env.bind_address()).await?,
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
