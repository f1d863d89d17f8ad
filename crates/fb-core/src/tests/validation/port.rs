use crate::{PortRejection, accept_port, check_port};

#[test]
fn test_port_boundaries() {
    assert_eq!(check_port("1025").result, Ok(1025));
    assert_eq!(check_port("8082").result, Ok(8082));
    assert_eq!(check_port("65535").result, Ok(65535));
    assert_eq!(check_port("1024").result, Err(PortRejection::TooLow));
    assert_eq!(check_port("65536").result, Err(PortRejection::TooHigh));
    assert_eq!(check_port("1337").result, Err(PortRejection::Reserved));
}

#[test]
fn test_accept_port_matches_rule_for_every_value() {
    for value in 0..=70_000_i64 {
        let expected = value > 1024 && value <= 65535 && value != 1337;
        assert_eq!(accept_port(value).is_ok(), expected, "port {value}");
    }
}

#[test]
fn test_empty_port_rejected() {
    let check = check_port("");

    assert_eq!(check.result, Err(PortRejection::Empty));
    assert_eq!(check.outcome().message, "The field cannot be empty.");
}

#[test]
fn test_non_numeric_port_rejected() {
    assert_eq!(check_port("80a0").result, Err(PortRejection::NotNumeric));
    assert_eq!(check_port(" 9000").result, Err(PortRejection::NotNumeric));
    assert_eq!(check_port("-9000").result, Err(PortRejection::NotNumeric));
    assert_eq!(check_port("1e4").result, Err(PortRejection::NotNumeric));
}

#[test]
fn test_long_input_truncated_before_checks() {
    let check = check_port("90001234");

    assert_eq!(check.input, "90001");
    assert_eq!(check.result, Err(PortRejection::TooHigh));

    let check = check_port("900012");
    assert_eq!(check.input, "90001");
    assert_eq!(check.port(), None);

    let check = check_port("123456");
    assert_eq!(check.input, "12345");
    assert_eq!(check.port(), Some(12345));
}

#[test]
fn test_reserved_port_message_names_conflict() {
    let outcome = check_port("1337").outcome();

    assert!(!outcome.accepted);
    assert!(outcome.message.contains("1337"));
    assert!(outcome.message.contains("plugin host"));
}

#[test]
fn test_accepted_port_outcome_has_no_message() {
    let outcome = check_port("9000").outcome();

    assert!(outcome.accepted);
    assert!(outcome.message.is_empty());
}
