use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config, types::AuthState};

/// Runs the local callback server until the surrounding flow aborts it.
///
/// Bind and serve failures are pushed through the auth channel so the
/// foreground wait fails fast instead of running out the deadline.
pub async fn start_api_server(state: AuthState) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route(
            "/callback",
            get(api::callback).layer(Extension(Arc::clone(&state))),
        );

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => {
            fail_auth(&state, format!("failed to parse server address: {e}")).await;
            return;
        }
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            fail_auth(&state, format!("failed to bind {addr}: {e}")).await;
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        fail_auth(&state, format!("callback server error: {e}")).await;
    }
}

async fn fail_auth(state: &AuthState, reason: String) {
    if let Some(sender) = state.lock().await.take() {
        let _ = sender.send(Err(reason));
    }
}
