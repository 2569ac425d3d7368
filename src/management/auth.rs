use std::path::PathBuf;

use crate::{Res, config, error::Error, info, spotify, types::Token, warning};

/// Owns the on-disk token and its lifecycle.
///
/// The token file is re-read on every invocation; there is no in-memory
/// cache across runs. A token is only persisted after a fully successful
/// exchange, and persistence must succeed before the token is handed to
/// callers.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    /// Reads the stored token. `None` when the file is missing, unreadable,
    /// or unparsable; all three mean the full authorization flow runs.
    pub async fn load() -> Option<Self> {
        let content = async_fs::read_to_string(Self::token_path()).await.ok()?;
        let token: Token = serde_json::from_str(&content).ok()?;
        Some(Self { token })
    }

    /// Produces a currently-valid token, running whatever part of the
    /// lifecycle that takes:
    ///
    /// - stored token still valid: returned as-is, no network call
    /// - stored token complete but expired: refresh, falling back to the
    ///   full authorization flow when the refresh is rejected
    /// - no usable stored token: full authorization flow
    ///
    /// Every path that obtains a new token persists it before returning.
    pub async fn get_valid_token() -> Res<Token> {
        match Self::load().await {
            Some(manager) if manager.token.is_valid() => Ok(manager.token),
            Some(manager) if manager.token.is_complete() => {
                info!("Access token expired, refreshing...");
                let creds = config::client_credentials().await?;
                match spotify::auth::refresh_token(&creds, &manager.token.refresh_token).await {
                    Ok(token) => {
                        let manager = Self::new(token);
                        manager.persist().await?;
                        Ok(manager.token)
                    }
                    Err(e) => {
                        warning!("Refresh failed ({}), re-authorizing...", e);
                        Self::reauthorize().await
                    }
                }
            }
            _ => {
                info!("No valid tokens found, initiating authorization...");
                Self::reauthorize().await
            }
        }
    }

    async fn reauthorize() -> Res<Token> {
        let token = spotify::auth::authorize().await?;
        let manager = Self::new(token);
        manager.persist().await?;
        Ok(manager.token)
    }

    /// Writes the token file, owner read/write only.
    pub async fn persist(&self) -> Res<()> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::PersistenceFailed(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(&self.token)
            .map_err(|e| Error::PersistenceFailed(e.to_string()))?;
        async_fs::write(&path, json)
            .await
            .map_err(|e| Error::PersistenceFailed(e.to_string()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            async_fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))
                .await
                .map_err(|e| Error::PersistenceFailed(e.to_string()))?;
        }

        Ok(())
    }

    pub fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
