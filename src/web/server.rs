//! Web console server.
//!
//! Serves the console page and the active profile. The browser opens the
//! WebSocket itself; nothing is proxied through this server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use tokio::task::JoinHandle;

use super::html::CONSOLE_HTML;
use crate::config::Profile;

/// Shared state for the web console handlers.
#[derive(Clone)]
pub struct WebConsoleState {
    pub profile: Arc<Profile>,
}

/// Build the router without binding it.
///
/// No CORS headers are sent: the page fetches `/profile` from its own origin,
/// and the profile's templates must not be readable from other sites.
pub fn router(profile: Profile) -> Router {
    Router::new()
        .route("/", get(console_handler))
        .route("/profile", get(profile_handler))
        .with_state(WebConsoleState {
            profile: Arc::new(profile),
        })
}

/// Start the web console on `127.0.0.1:port`.
pub async fn start_web_console(
    port: u16,
    profile: Profile,
) -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    start_web_console_on(SocketAddr::from(([127, 0, 0, 1], port)), profile).await
}

/// Start the web console on a specific address.
///
/// Returns the server task and the address actually bound, so tests can
/// pass port 0.
pub async fn start_web_console_on(
    addr: SocketAddr,
    profile: Profile,
) -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    let profile_name = profile.name.clone();
    let app = router(profile);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tracing::info!(
        "Web console for profile {} listening on http://{}",
        profile_name,
        actual_addr
    );

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Web console error: {}", e);
        }
    });

    Ok((handle, actual_addr))
}

async fn console_handler() -> impl IntoResponse {
    Html(CONSOLE_HTML)
}

async fn profile_handler(State(state): State<WebConsoleState>) -> impl IntoResponse {
    Json(state.profile.as_ref().clone())
}
