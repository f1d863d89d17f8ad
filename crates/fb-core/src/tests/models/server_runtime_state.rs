use crate::{DEFAULT_PORT, ServerRuntimeState, StatusReport};

fn online(port: Option<u16>, pid: Option<u32>) -> StatusReport {
    StatusReport {
        online: true,
        port,
        process_id: pid,
        ipv4_address: Some("192.168.1.20".into()),
    }
}

#[test]
fn given_default_snapshot_then_inactive_on_default_port() {
    let state = ServerRuntimeState::default();

    assert!(!state.is_running());
    assert_eq!(state.port(), Some(DEFAULT_PORT));
    assert_eq!(state.process_id(), None);
    assert_eq!(state.ipv4_address(), None);
}

#[test]
fn given_online_report_with_pid_when_observe_then_running() {
    let state = ServerRuntimeState::default().observe(online(Some(9000), Some(4242)));

    assert!(state.is_running());
    assert_eq!(state.port(), Some(9000));
    assert_eq!(state.process_id(), Some(4242));
    assert_eq!(state.ipv4_address(), Some("192.168.1.20"));
}

#[test]
fn given_online_flag_without_pid_when_observe_then_not_running() {
    let state = ServerRuntimeState::default().observe(online(Some(9000), None));

    assert!(!state.is_running());
    assert_eq!(state.process_id(), None);
    assert_eq!(state.ipv4_address(), None);
    assert_eq!(state.port(), Some(9000));
}

#[test]
fn given_online_flag_with_zero_pid_when_observe_then_not_running() {
    let state = ServerRuntimeState::default().observe(online(Some(9000), Some(0)));

    assert!(!state.is_running());
    assert_eq!(state.process_id(), None);
}

#[test]
fn given_offline_report_without_port_when_observe_then_port_kept() {
    let running = ServerRuntimeState::default().observe(online(Some(9000), Some(7)));

    let state = running.observe(StatusReport::default());

    assert!(!state.is_running());
    assert_eq!(state.port(), Some(9000));
    assert_eq!(state.process_id(), None);
}

#[test]
fn given_same_report_twice_when_observe_then_unchanged() {
    let first = ServerRuntimeState::default().observe(online(Some(9000), Some(7)));
    let second = first.observe(online(Some(9000), Some(7)));

    assert_eq!(first, second);
}

#[test]
fn given_running_when_stopped_then_pid_and_address_cleared() {
    let state = ServerRuntimeState::default()
        .observe(online(Some(9000), Some(7)))
        .stopped();

    assert!(!state.is_running());
    assert_eq!(state.process_id(), None);
    assert_eq!(state.ipv4_address(), None);
    assert_eq!(state.port(), Some(9000));
}

#[test]
fn given_running_then_url_uses_https_address_and_port() {
    let state = ServerRuntimeState::default().observe(online(Some(9000), Some(7)));

    assert_eq!(state.url().as_deref(), Some("https://192.168.1.20:9000"));
    assert_eq!(ServerRuntimeState::default().url(), None);
}
