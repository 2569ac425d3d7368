use chrono::Utc;
use sptrackcli::cli;
use sptrackcli::types::Token;

// Helper function to create a token expiring the given number of seconds
// from now (negative for already expired)
fn create_test_token(expires_in: i64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        expires_at: Utc::now().timestamp() + expires_in,
    }
}

#[test]
fn test_token_validity() {
    // A complete token with a future expiry is valid
    let token = create_test_token(3600);
    assert!(token.is_complete());
    assert!(!token.is_expired());
    assert!(token.is_valid());

    // A complete token with a past expiry is expired, not valid
    let token = create_test_token(-1);
    assert!(token.is_complete());
    assert!(token.is_expired());
    assert!(!token.is_valid());
}

#[test]
fn test_token_missing_fields_is_incomplete() {
    let mut token = create_test_token(3600);
    token.access_token = String::new();
    assert!(!token.is_complete());
    assert!(!token.is_valid());

    let mut token = create_test_token(3600);
    token.refresh_token = String::new();
    assert!(!token.is_complete());
    assert!(!token.is_valid());
}

#[test]
fn test_token_file_field_names() {
    // The on-disk contract: access_token, refresh_token, expires_at
    let json = r#"{"access_token":"a","refresh_token":"r","expires_at":1234567890}"#;
    let token: Token = serde_json::from_str(json).unwrap();
    assert_eq!(token.access_token, "a");
    assert_eq!(token.refresh_token, "r");
    assert_eq!(token.expires_at, 1234567890);

    let out = serde_json::to_value(&token).unwrap();
    assert!(out.get("access_token").is_some());
    assert!(out.get("refresh_token").is_some());
    assert!(out.get("expires_at").is_some());
}

#[test]
fn test_registry_lists_all_commands() {
    let listing = cli::available_commands();
    let names: Vec<&str> = listing.lines().collect();

    assert_eq!(names.len(), cli::COMMANDS.len());
    assert!(names.contains(&"get_current_track"));
    assert!(names.contains(&"like_current_track"));
    assert!(names.contains(&"is_current_track_liked"));
}

#[test]
fn test_registry_lookup() {
    for &(name, _) in cli::COMMANDS {
        assert!(cli::find_command(name).is_some(), "missing handler: {name}");
    }

    // Unrecognized names resolve to nothing, so no handler (and no network
    // call) can ever run for them
    assert!(cli::find_command("unknown_command").is_none());
    assert!(cli::find_command("").is_none());
}
