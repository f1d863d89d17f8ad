use crate::{CoreError, CredentialField, DEFAULT_PORT, ServerSettings};

#[test]
fn test_default_settings() {
    let settings = ServerSettings::default();

    assert_eq!(settings.port, DEFAULT_PORT);
    assert!(!settings.has_credentials());
}

#[test]
fn test_with_port_accepts_valid_port() {
    let settings = ServerSettings::default().with_port(9000).unwrap();
    assert_eq!(settings.port, 9000);
}

#[test]
fn test_with_port_rejects_reserved_port() {
    let result = ServerSettings::default().with_port(1337);
    assert!(matches!(result, Err(CoreError::InvalidPort { .. })));
}

#[test]
fn test_with_credentials_trims_values() {
    let settings = ServerSettings::default()
        .with_credentials("  admin ", "secret1")
        .unwrap();

    assert_eq!(settings.username, "admin");
    assert_eq!(settings.password, "secret1");
    assert!(settings.has_credentials());
}

#[test]
fn test_with_credentials_reports_failing_field() {
    let result = ServerSettings::default().with_credentials("admin", "a$b$c");

    match result {
        Err(CoreError::InvalidCredential { field, .. }) => {
            assert_eq!(field, CredentialField::Password)
        }
        other => panic!("expected credential error, got {other:?}"),
    }
}

#[test]
fn test_with_username_keeps_port_and_password() {
    let settings = ServerSettings::default()
        .with_port(9000)
        .unwrap()
        .with_username("deck")
        .unwrap();

    assert_eq!(settings.port, 9000);
    assert_eq!(settings.username, "deck");
    assert!(settings.password.is_empty());
}

#[test]
fn test_debug_redacts_password() {
    let settings = ServerSettings::default()
        .with_credentials("admin", "hunter22")
        .unwrap();

    let debug = format!("{settings:?}");

    assert!(debug.contains("admin"));
    assert!(!debug.contains("hunter22"));
}
