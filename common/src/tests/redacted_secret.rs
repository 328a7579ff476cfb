use crate::RedactedSecret;

/// **VALUE**: Verifies the secret never appears in Debug or Display output.
///
/// **WHY THIS MATTERS**: Debug formatting is the most common way secrets
/// leak into logs. The whole point of the wrapper is that `{:?}` anywhere
/// in the workspace is safe.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug impl replacing the
/// manual redacting one during refactoring.
#[test]
fn given_secret_when_formatted_then_value_is_redacted() {
    let secret = RedactedSecret::new(String::from("5baa61e4c9b93f3f"));

    let debug = format!("{:?}", secret);
    let display = format!("{}", secret);

    assert!(!debug.contains("5baa61e4"));
    assert!(!display.contains("5baa61e4"));
    assert_eq!(debug, "RedactedSecret([REDACTED])");
}

/// **VALUE**: Verifies serde serialization is refused outright.
///
/// **WHY THIS MATTERS**: Config structs and error payloads in this
/// workspace derive Serialize; a secret embedded in one must poison the
/// serialization instead of silently writing itself to disk or wire.
#[test]
fn given_secret_when_serialized_then_returns_error() {
    let secret = RedactedSecret::new(String::from("topsecret"));

    let result = serde_json::to_string(&secret);

    assert!(result.is_err());
}

#[test]
fn given_secret_when_accessed_explicitly_then_exposes_value() {
    let secret = RedactedSecret::new(String::from("topsecret"));

    assert_eq!(secret.as_str(), "topsecret");
    assert_eq!(secret.len(), 9);
    assert!(!secret.is_empty());
}
