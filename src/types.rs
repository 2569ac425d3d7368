use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, oneshot};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
}

impl Token {
    /// Both token fields are present. An incomplete token cannot be
    /// refreshed and forces a full re-authorization.
    pub fn is_complete(&self) -> bool {
        !self.access_token.is_empty() && !self.refresh_token.is_empty()
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }

    pub fn is_valid(&self) -> bool {
        self.is_complete() && !self.is_expired()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentlyPlaying {
    pub item: Option<Track>,
    #[serde(default)]
    pub is_playing: bool,
}

/// Error object the Spotify API nests under an `error` key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<ErrorBody>,
}

/// Token endpoint response, shared by both grant types. The token fields
/// default to empty so an error payload still deserializes.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: i64,
    pub error: Option<ErrorBody>,
}

/// One-shot channel the callback handler resolves with either the
/// authorization code or the reason the redirect was unusable.
pub type AuthCodeSender = oneshot::Sender<Result<String, String>>;

/// Shared between the authorization flow and the callback server. The
/// handler takes the sender out, so at most one code is ever delivered.
pub type AuthState = Arc<Mutex<Option<AuthCodeSender>>>;
