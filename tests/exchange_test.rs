use chrono::Utc;
use mockito::Matcher;
use serial_test::serial;

use sptrackcli::error::Error;
use sptrackcli::spotify::auth::{exchange_code, refresh_token};
use sptrackcli::types::ClientCredentials;

// The exchange functions read the token endpoint from the environment, so
// every test points it at its own mock server and runs serially.
fn set_var(key: &str, value: &str) {
    unsafe { std::env::set_var(key, value) };
}

fn test_creds() -> ClientCredentials {
    ClientCredentials {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
    }
}

#[tokio::test]
#[serial]
async fn test_code_exchange_computes_buffered_expiry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
            Matcher::UrlEncoded("code".into(), "auth-code".into()),
            Matcher::UrlEncoded("client_id".into(), "test-client".into()),
            Matcher::UrlEncoded("client_secret".into(), "test-secret".into()),
        ]))
        .with_body(r#"{"access_token":"new-access","refresh_token":"new-refresh","expires_in":3600}"#)
        .create_async()
        .await;
    set_var("SPOTIFY_API_TOKEN_URL", &format!("{}/api/token", server.url()));

    let before = Utc::now().timestamp();
    let token = exchange_code(&test_creds(), "auth-code").await.unwrap();
    let after = Utc::now().timestamp();

    assert_eq!(token.access_token, "new-access");
    assert_eq!(token.refresh_token, "new-refresh");

    // expires_at = issued_at + expires_in - 60
    assert!(token.expires_at >= before + 3600 - 60);
    assert!(token.expires_at <= after + 3600 - 60);

    mock.assert_async().await;
}

#[tokio::test]
#[serial]
async fn test_refresh_sends_basic_auth_and_keeps_prior_refresh_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .match_header("authorization", Matcher::Regex("^Basic ".into()))
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
            Matcher::UrlEncoded("refresh_token".into(), "old-refresh".into()),
        ]))
        // No refresh_token in the response: the old one must be retained
        .with_body(r#"{"access_token":"rotated-access","expires_in":3600}"#)
        .create_async()
        .await;
    set_var("SPOTIFY_API_TOKEN_URL", &format!("{}/api/token", server.url()));

    let token = refresh_token(&test_creds(), "old-refresh").await.unwrap();

    assert_eq!(token.access_token, "rotated-access");
    assert_eq!(token.refresh_token, "old-refresh");

    mock.assert_async().await;
}

#[tokio::test]
#[serial]
async fn test_refresh_replaces_refresh_token_when_provided() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/token")
        .with_body(
            r#"{"access_token":"rotated-access","refresh_token":"rotated-refresh","expires_in":3600}"#,
        )
        .create_async()
        .await;
    set_var("SPOTIFY_API_TOKEN_URL", &format!("{}/api/token", server.url()));

    let token = refresh_token(&test_creds(), "old-refresh").await.unwrap();

    assert_eq!(token.refresh_token, "rotated-refresh");
}

#[tokio::test]
#[serial]
async fn test_provider_error_payload_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/token")
        .with_status(400)
        .with_body(r#"{"error":{"status":400,"message":"Invalid authorization code"}}"#)
        .create_async()
        .await;
    set_var("SPOTIFY_API_TOKEN_URL", &format!("{}/api/token", server.url()));

    let err = exchange_code(&test_creds(), "bad-code").await.unwrap_err();

    match err {
        Error::TokenExchangeFailed(msg) => {
            assert!(msg.contains("Invalid authorization code"));
            assert!(msg.contains("400"));
        }
        other => panic!("expected TokenExchangeFailed, got {other:?}"),
    }
}

#[tokio::test]
#[serial]
async fn test_missing_access_token_fails() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/token")
        .with_body(r#"{"expires_in":3600}"#)
        .create_async()
        .await;
    set_var("SPOTIFY_API_TOKEN_URL", &format!("{}/api/token", server.url()));

    let err = refresh_token(&test_creds(), "old-refresh").await.unwrap_err();
    assert!(matches!(err, Error::TokenExchangeFailed(_)));
}

#[tokio::test]
#[serial]
async fn test_transport_failure_is_token_exchange_failed() {
    // Nothing listens on port 1, so the connection is refused
    set_var("SPOTIFY_API_TOKEN_URL", "http://127.0.0.1:1/api/token");

    let err = exchange_code(&test_creds(), "auth-code").await.unwrap_err();
    assert!(matches!(err, Error::TokenExchangeFailed(_)));
}
