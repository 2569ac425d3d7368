//! # Spotify Integration Module
//!
//! The integration layer between the CLI and Spotify's services. It covers
//! the two surfaces this tool needs:
//!
//! - [`auth`] - OAuth 2.0 authorization-code flow: building the authorization
//!   URL, launching the browser, capturing the redirect through the local
//!   callback server, and exchanging codes or refresh tokens for access
//!   tokens at the token endpoint.
//! - [`tracks`] - Bearer-authenticated calls against the player and library
//!   resources: currently-playing lookup, saving a track, and the
//!   saved-tracks containment check.
//!
//! ## Endpoints consumed
//!
//! - `GET /authorize` (browser redirect) and `POST /api/token` on the
//!   accounts service
//! - `GET /me/player/currently-playing`
//! - `PUT /me/tracks` and `GET /me/tracks/contains`
//!
//! All base URLs come from [`crate::config`], so tests and alternative
//! deployments can point the client elsewhere.

use std::time::Duration;

use reqwest::Client;

pub mod auth;
pub mod tracks;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client with the crate-wide request timeout applied.
pub(crate) fn http_client() -> Client {
    Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}
