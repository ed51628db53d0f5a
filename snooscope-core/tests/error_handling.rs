use snooscope_core::{ConfigError, CoreError, ErrorExt, FetchError};

#[test]
fn test_error_codes() {
    let blocked = CoreError::Fetch(FetchError::AccessBlocked);
    assert_eq!(blocked.error_code(), "ACCESS_BLOCKED");

    let failed = CoreError::Fetch(FetchError::FetchFailed { status: 500 });
    assert_eq!(failed.error_code(), "FETCH_FAILED");

    let not_found = CoreError::Fetch(FetchError::NotFound {
        username: "spez".to_string(),
    });
    assert_eq!(not_found.error_code(), "NOT_FOUND");

    let config = CoreError::Config(ConfigError::InvalidValue {
        field: "page_limit".to_string(),
        value: "0".to_string(),
    });
    assert_eq!(config.error_code(), "CONFIG");

    let input = CoreError::InvalidInput {
        message: "Please enter a username.".to_string(),
    };
    assert_eq!(input.error_code(), "INVALID_INPUT");
}

#[test]
fn test_blocked_and_not_found_stay_distinct() {
    // The dashboard surfaces blocked and missing users as separate
    // notices, so the codes and messages must differ.
    let blocked = CoreError::Fetch(FetchError::AccessBlocked);
    let not_found = CoreError::Fetch(FetchError::NotFound {
        username: "ghost".to_string(),
    });

    assert_ne!(blocked.error_code(), not_found.error_code());
    assert_ne!(
        blocked.user_friendly_message(),
        not_found.user_friendly_message()
    );
}

#[test]
fn test_user_friendly_messages() {
    let blocked = CoreError::Fetch(FetchError::AccessBlocked);
    assert!(blocked.user_friendly_message().contains("blocking"));

    let failed = CoreError::Fetch(FetchError::FetchFailed { status: 502 });
    assert!(failed.user_friendly_message().contains("502"));

    let input = CoreError::InvalidInput {
        message: "Please enter a username.".to_string(),
    };
    assert_eq!(input.user_friendly_message(), "Please enter a username.");
}

#[test]
fn test_fetch_error_display() {
    let failed = FetchError::FetchFailed { status: 429 };
    assert_eq!(failed.to_string(), "Request failed with status 429");

    let not_found = FetchError::NotFound {
        username: "spez".to_string(),
    };
    assert_eq!(not_found.to_string(), "No comment data found for u/spez");
}

#[test]
fn test_fetch_error_conversion() {
    let core: CoreError = FetchError::Timeout.into();
    assert!(matches!(core, CoreError::Fetch(FetchError::Timeout)));
    assert_eq!(core.error_code(), "TIMEOUT");
}
