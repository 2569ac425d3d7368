use thiserror::Error;

/// Terminal failure kinds for a single invocation. Nothing here is retried
/// beyond the refresh-then-reauthorize fallback in the token manager; every
/// variant propagates to `main`, is printed to stderr, and exits non-zero.
#[derive(Debug, Error)]
pub enum Error {
    /// The client credentials file is missing or unreadable and no
    /// environment override is set.
    #[error("credentials unavailable: {0}")]
    CredentialsUnavailable(String),

    /// The user declined, the redirect was malformed, or the authorization
    /// wait timed out.
    #[error("authorization failed: {0}")]
    AuthorizationFailed(String),

    /// The token endpoint rejected the code or refresh token, or the
    /// request failed at the transport level.
    #[error("token exchange failed: {0}")]
    TokenExchangeFailed(String),

    /// The token file could not be written after a successful exchange.
    #[error("failed to persist token: {0}")]
    PersistenceFailed(String),

    /// A track endpoint answered with a non-success status.
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),

    /// 204 or `is_playing=false` from the currently-playing endpoint.
    /// Distinct from a transport error: the API worked, the player is idle.
    #[error("no track is currently playing")]
    NoTrackPlaying,

    #[error("unknown command: {0}")]
    CommandNotFound(String),
}
