use crate::RunState;

#[test]
fn test_run_state_as_str() {
    assert_eq!(RunState::Stopped.as_str(), "stopped");
    assert_eq!(RunState::Starting.as_str(), "starting");
    assert_eq!(RunState::Running.as_str(), "running");
    assert_eq!(RunState::Stopping.as_str(), "stopping");
    assert_eq!(
        RunState::Error {
            reason: "boom".into()
        }
        .as_str(),
        "error"
    );
}

#[test]
fn test_run_state_default_is_stopped() {
    assert_eq!(RunState::default(), RunState::Stopped);
}

#[test]
fn test_run_state_transitional() {
    assert!(RunState::Starting.is_transitional());
    assert!(RunState::Stopping.is_transitional());
    assert!(!RunState::Running.is_transitional());
    assert!(!RunState::Stopped.is_transitional());
}

#[test]
fn test_run_state_error_display_includes_reason() {
    let state = RunState::Error {
        reason: "address already in use".into(),
    };

    assert_eq!(state.to_string(), "error: address already in use");
    assert_eq!(state.error_reason(), Some("address already in use"));
    assert_eq!(RunState::Running.error_reason(), None);
}

#[test]
fn test_run_state_serializes_with_tag() {
    let json = serde_json::to_string(&RunState::Error {
        reason: "nope".into(),
    })
    .unwrap();

    assert_eq!(json, r#"{"state":"error","reason":"nope"}"#);
}
