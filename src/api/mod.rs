//! # API Module
//!
//! HTTP endpoints for the short-lived local server that backs the OAuth
//! authorization flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the redirect from Spotify's authorization
//!   server and hands the authorization code (or the failure reason) to the
//!   waiting flow. Exactly one code is consumed per flow.
//! - [`health`] - Status endpoint for checking that the listener is up.
//!
//! The module is built on [Axum](https://docs.rs/axum); the shared auth
//! state reaches the callback handler through an `Extension` layer.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
