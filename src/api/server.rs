use std::net::SocketAddr;

use axum::{Router, body::Body, http::Request};
use tokio::net::TcpListener;
use tower_http::{decompression::RequestDecompressionLayer, trace::TraceLayer};
use tracing::{info, info_span};
use uuid::Uuid;

use super::{services::receive_submission, state::AppState};
use crate::board::{BoardClient, BoardCredentials};
use crate::config::Config;
use crate::normalize::TransformRegistry;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every path and method is routed to the webhook handler
pub fn router(state: AppState) -> Router {
    Router::new()
        .fallback(receive_submission)
        .with_state(state)
        .layer(RequestDecompressionLayer::new())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                info_span!(
                    "webhook",
                    request_id = %Uuid::now_v7(),
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}

pub async fn run(address: Option<SocketAddr>) -> Result<(), AnyError> {
    info!("Loading configuration");
    let mut config =
        Config::load().map_err(|e| format!("Failed to load config: {}", e))?;

    if let Some(address) = address {
        config.server.bind_addr = address;
    }

    info!(base_url = %config.board.base_url, "Initializing board client");
    let credentials = BoardCredentials::from_config(&config.board);
    let board = BoardClient::new(&config.board, credentials)
        .map_err(|e| format!("Failed to build board client: {}", e))?;

    let registry = TransformRegistry::with_defaults();

    let bind_addr = config.server.bind_addr;
    let state = AppState::new(config, board, registry);
    let app = router(state);

    let listener = TcpListener::bind(bind_addr).await?;
    info!(address = %bind_addr, "cardhook listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
