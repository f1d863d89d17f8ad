use crate::{
    CredentialField, CredentialRejection, MAX_CREDENTIAL_LENGTH, check_credential,
    check_credential_pair,
};

const USERNAME: CredentialField = CredentialField::Username;
const PASSWORD: CredentialField = CredentialField::Password;

#[test]
fn test_credential_length_rules() {
    assert_eq!(
        check_credential(USERNAME, "ab").result,
        Err(CredentialRejection::TooShort(USERNAME))
    );
    assert!(check_credential(USERNAME, "abcd").is_accepted());
    assert!(check_credential(USERNAME, &"a".repeat(20)).is_accepted());
}

#[test]
fn test_credential_too_short_message() {
    let outcome = check_credential(PASSWORD, "abc").outcome();
    assert_eq!(
        outcome.message,
        "The password length can't be less than 4 characters."
    );
}

#[test]
fn test_credential_is_trimmed_before_length_check() {
    let check = check_credential(USERNAME, "  abc  ");
    assert_eq!(check.value, "abc");
    assert_eq!(check.result, Err(CredentialRejection::TooShort(USERNAME)));

    let check = check_credential(USERNAME, "  abcd  ");
    assert_eq!(check.value, "abcd");
    assert!(check.is_accepted());
}

#[test]
fn test_every_shell_metacharacter_rejected() {
    for c in crate::SHELL_METACHARACTERS {
        let value = format!("abc{c}def");
        let check = check_credential(USERNAME, &value);
        assert_eq!(
            check.result,
            Err(CredentialRejection::ForbiddenCharacter {
                field: USERNAME,
                found: c
            }),
            "character {c:?}"
        );
    }
}

#[test]
fn test_forbidden_character_message_names_field() {
    let outcome = check_credential(PASSWORD, "abc;def").outcome();

    assert!(!outcome.accepted);
    assert!(outcome.message.starts_with("The password cannot have"));
}

#[test]
fn test_long_credential_truncated_then_revalidated() {
    let check = check_credential(USERNAME, &"a".repeat(25));

    assert!(check.truncated);
    assert_eq!(check.value.chars().count(), MAX_CREDENTIAL_LENGTH);
    assert!(check.is_accepted());
}

#[test]
fn test_truncation_does_not_hide_forbidden_characters() {
    let raw = format!("{}$bbbbbbbbbb", "a".repeat(10));
    let check = check_credential(USERNAME, &raw);

    assert!(check.truncated);
    assert!(!check.is_accepted());
}

#[test]
fn test_forbidden_character_past_limit_is_cut_away() {
    let raw = format!("{};", "a".repeat(20));
    let check = check_credential(USERNAME, &raw);

    assert!(check.truncated);
    assert_eq!(check.value, "a".repeat(20));
    assert!(check.is_accepted());
}

#[test]
fn test_pair_both_empty() {
    assert_eq!(
        check_credential_pair("", "  "),
        Err(CredentialRejection::BothEmpty)
    );
}

#[test]
fn test_pair_missing_username_names_only_username() {
    let result = check_credential_pair("", "goodpass");

    assert_eq!(result, Err(CredentialRejection::Empty(USERNAME)));
    assert_eq!(
        result.unwrap_err().to_string(),
        "The username field cannot be empty."
    );
}

#[test]
fn test_pair_missing_password() {
    assert_eq!(
        check_credential_pair("admin", ""),
        Err(CredentialRejection::Empty(PASSWORD))
    );
}

#[test]
fn test_pair_accepts_and_cleans_both() {
    assert_eq!(
        check_credential_pair(" admin ", "goodpass"),
        Ok(("admin".to_string(), "goodpass".to_string()))
    );
}
