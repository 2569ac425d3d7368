//! Configuration management for the Spotify track CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files, plus the user-provided client
//! credentials. The configuration system follows a hierarchical approach:
//!
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory or the local data directory
//! 3. Documented Spotify defaults (endpoints, scope, redirect target)
//!
//! Client credentials are deliberately never baked into the binary: they come
//! from `SPOTIFY_CLIENT_ID`/`SPOTIFY_CLIENT_SECRET` or from a user-provided
//! `credentials.json` in the local data directory.

use std::{env, path::PathBuf};

use dotenv;

use crate::{Res, error::Error, types::ClientCredentials};

/// Platform-specific application data directory.
///
/// - Linux: `~/.local/share/sptrackcli`
/// - macOS: `~/Library/Application Support/sptrackcli`
/// - Windows: `%LOCALAPPDATA%/sptrackcli`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sptrackcli");
    path
}

/// Loads environment variables from `.env` files.
///
/// Reads a `.env` in the current working directory first, then one in the
/// local data directory (`sptrackcli/.env`), creating the data directory if
/// it does not exist yet. Both files are optional; a missing file is not an
/// error, so a bare environment falls through to the endpoint defaults.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    dotenv::dotenv().ok();

    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Loads the Spotify application credentials.
///
/// `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` take precedence when both
/// are set and non-empty. Otherwise the credentials are read from
/// `credentials.json` in the data directory, a user-provided file of the form
/// `{"client_id": "...", "client_secret": "..."}`.
///
/// # Errors
///
/// Returns [`Error::CredentialsUnavailable`] when neither source yields a
/// usable id/secret pair.
pub async fn client_credentials() -> Res<ClientCredentials> {
    if let (Ok(client_id), Ok(client_secret)) =
        (env::var("SPOTIFY_CLIENT_ID"), env::var("SPOTIFY_CLIENT_SECRET"))
    {
        if !client_id.is_empty() && !client_secret.is_empty() {
            return Ok(ClientCredentials {
                client_id,
                client_secret,
            });
        }
    }

    let path = credentials_path();
    let content = async_fs::read_to_string(&path).await.map_err(|e| {
        Error::CredentialsUnavailable(format!("failed to read {}: {}", path.display(), e))
    })?;
    let creds: ClientCredentials = serde_json::from_str(&content).map_err(|e| {
        Error::CredentialsUnavailable(format!("failed to parse {}: {}", path.display(), e))
    })?;

    if creds.client_id.is_empty() || creds.client_secret.is_empty() {
        return Err(Error::CredentialsUnavailable(format!(
            "{} is missing client_id or client_secret",
            path.display()
        )));
    }
    Ok(creds)
}

/// Location of the user-provided credentials file.
pub fn credentials_path() -> PathBuf {
    data_dir().join("credentials.json")
}

/// Address the local OAuth callback server binds to.
///
/// Must match the host and port of the registered redirect URI.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| String::from("127.0.0.1:3000"))
}

/// OAuth redirect URI registered with the Spotify application.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI")
        .unwrap_or_else(|_| String::from("http://127.0.0.1:3000/callback"))
}

/// Permission scopes requested during authorization.
///
/// The defaults cover everything the registered commands touch: reading the
/// player state and reading/modifying the saved-tracks library.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|_| {
        String::from("user-read-currently-playing user-library-modify user-library-read")
    })
}

/// Spotify OAuth authorization endpoint (browser redirect target).
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL")
        .unwrap_or_else(|_| String::from("https://accounts.spotify.com/authorize"))
}

/// Spotify OAuth token endpoint (both grant types).
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| String::from("https://accounts.spotify.com/api/token"))
}

/// Spotify Web API base URL.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| String::from("https://api.spotify.com/v1"))
}
