use std::{sync::Arc, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::{Url, header::AUTHORIZATION};
use tokio::sync::{Mutex, oneshot};

use crate::{
    Res, config,
    error::Error,
    server::start_api_server,
    spotify::http_client,
    types::{AuthState, ClientCredentials, Token, TokenResponse},
    warning,
};

/// How long the flow waits for the user to finish authorizing in the
/// browser before giving up and releasing the listener.
const AUTH_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Safety margin subtracted from the provider's `expires_in`, so a token is
/// treated as expired slightly before the provider would reject it.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Runs the complete OAuth 2.0 authorization-code flow.
///
/// This function orchestrates the whole interactive authentication process:
///
/// 1. Starts the local callback server that will receive the redirect
/// 2. Opens the authorization URL in the user's default browser
/// 3. Waits for the callback to deliver the authorization code
/// 4. Exchanges the code for an access/refresh token pair
///
/// The wait is a single rendezvous: the callback handler resolves a one-shot
/// channel with the code or an error, and the flow blocks on that channel
/// under a 5-minute deadline. Whichever way the wait ends, the listener task
/// is shut down before the function returns, and at most one authorization
/// code is consumed per invocation.
///
/// # Errors
///
/// - [`Error::CredentialsUnavailable`] when no client credentials are
///   configured
/// - [`Error::AuthorizationFailed`] when the user declines, the redirect
///   carries no code, the listener cannot bind, or the deadline passes
/// - [`Error::TokenExchangeFailed`] when the code exchange is rejected
///
/// # Browser Handling
///
/// If the default browser cannot be launched, the flow prints the
/// authorization URL so the user can open it manually; the wait continues
/// unchanged.
pub async fn authorize() -> Res<Token> {
    let creds = config::client_credentials().await?;

    let (tx, rx) = oneshot::channel();
    let shared_state: AuthState = Arc::new(Mutex::new(Some(tx)));

    let server = tokio::spawn(start_api_server(Arc::clone(&shared_state)));

    let redirect_uri = config::spotify_redirect_uri();
    let scope = config::spotify_scope();
    let auth_url = Url::parse_with_params(
        &config::spotify_apiauth_url(),
        [
            ("client_id", creds.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri.as_str()),
            ("scope", scope.as_str()),
        ],
    )
    .map_err(|e| Error::AuthorizationFailed(format!("invalid authorization URL: {e}")))?;

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        );
    }

    let outcome = tokio::time::timeout(AUTH_TIMEOUT, rx).await;
    server.abort();

    let code = match outcome {
        Ok(Ok(Ok(code))) => code,
        Ok(Ok(Err(reason))) => return Err(Error::AuthorizationFailed(reason)),
        Ok(Err(_)) => {
            return Err(Error::AuthorizationFailed(String::from(
                "callback listener closed before a code arrived",
            )));
        }
        Err(_) => {
            return Err(Error::AuthorizationFailed(format!(
                "timed out after {} seconds waiting for authorization",
                AUTH_TIMEOUT.as_secs()
            )));
        }
    };

    exchange_code(&creds, &code).await
}

/// Exchanges an authorization code for the initial token pair.
///
/// POSTs the `authorization_code` grant to the token endpoint with the
/// client credentials in the form body, as the provider documents for
/// confidential clients.
///
/// # Errors
///
/// [`Error::TokenExchangeFailed`] for provider rejections (carrying the
/// provider's message and status) and for transport failures.
pub async fn exchange_code(creds: &ClientCredentials, code: &str) -> Res<Token> {
    let res = http_client()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config::spotify_redirect_uri()),
            ("client_id", &creds.client_id),
            ("client_secret", &creds.client_secret),
        ])
        .send()
        .await
        .map_err(|e| Error::TokenExchangeFailed(format!("token request failed: {e}")))?;

    let body: TokenResponse = res
        .json()
        .await
        .map_err(|e| Error::TokenExchangeFailed(format!("malformed token response: {e}")))?;

    token_from_response(body, None)
}

/// Exchanges a refresh token for a fresh access token.
///
/// POSTs the `refresh_token` grant with the client credentials sent as an
/// HTTP Basic `Authorization` header instead of in the body. When the
/// provider omits `refresh_token` in the response, the previous refresh
/// token is retained.
///
/// # Errors
///
/// [`Error::TokenExchangeFailed`], as for [`exchange_code`]. An expired or
/// revoked refresh token lands here too; the token manager reacts by
/// falling back to the full authorization flow.
pub async fn refresh_token(creds: &ClientCredentials, refresh_token: &str) -> Res<Token> {
    let basic = STANDARD.encode(format!("{}:{}", creds.client_id, creds.client_secret));

    let res = http_client()
        .post(config::spotify_apitoken_url())
        .header(AUTHORIZATION, format!("Basic {basic}"))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await
        .map_err(|e| Error::TokenExchangeFailed(format!("refresh request failed: {e}")))?;

    let body: TokenResponse = res
        .json()
        .await
        .map_err(|e| Error::TokenExchangeFailed(format!("malformed refresh response: {e}")))?;

    token_from_response(body, Some(refresh_token))
}

/// Maps a token endpoint response to a [`Token`].
///
/// `prior_refresh_token` is the refresh token to keep when the response
/// omits one; `None` for the initial code exchange.
fn token_from_response(body: TokenResponse, prior_refresh_token: Option<&str>) -> Res<Token> {
    if let Some(err) = &body.error {
        if !err.message.is_empty() {
            return Err(Error::TokenExchangeFailed(format!(
                "{} (status: {})",
                err.message, err.status
            )));
        }
    }
    if body.access_token.is_empty() {
        return Err(Error::TokenExchangeFailed(String::from(
            "token response is missing an access token",
        )));
    }

    let refresh_token = if body.refresh_token.is_empty() {
        prior_refresh_token.unwrap_or_default().to_string()
    } else {
        body.refresh_token
    };

    Ok(Token {
        access_token: body.access_token,
        refresh_token,
        expires_at: Utc::now().timestamp() + body.expires_in - EXPIRY_MARGIN_SECS,
    })
}
