use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use fb_core::DEFAULT_PORT;
use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.default_port, eq(DEFAULT_PORT));
    assert_that!(config.server.port_setting_key.as_str(), eq("port"));
    assert_that!(
        config.server.username_setting_key.as_str(),
        eq("currentUsername")
    );
    assert_that!(config.timeouts.status_secs, eq(5));
    assert_that!(config.feedback.success_display_ms, eq(3000));
    assert_that!(config.feedback.notice_display_ms, eq(4000));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_created() {
    // Given
    let (temp, _dir) = setup_config_dir();
    let nested = temp.path().join("nested").join("fb");
    let _guard = EnvGuard::set("FB_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [server]
              default_port = 9000

              [timeouts]
              lifecycle_secs = 45

              [logging]
              level = "debug"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.default_port, eq(9000));
    assert_that!(config.timeouts.lifecycle_secs, eq(45));
    assert_that!(config.timeouts.status_secs, eq(5));
    assert_that!(config.logging.level.directive(), eq("debug"));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[server]\ndefault_port = 9000",
    )
    .unwrap();
    let _port = EnvGuard::set("FB_DEFAULT_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.default_port, eq(8888));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _status = EnvGuard::set("FB_STATUS_TIMEOUT_SECS", "3");
    let _success = EnvGuard::set("FB_SUCCESS_DISPLAY_MS", "3500");
    let _console = EnvGuard::set("FB_LOG_CONSOLE", "false");
    let _dir = EnvGuard::set("FB_LOG_DIRECTORY", "diagnostics");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.timeouts.status_secs, eq(3));
    assert_that!(config.feedback.success_display_ms, eq(3500));
    assert_that!(config.logging.console, eq(false));
    assert_that!(config.logging.directory.as_str(), eq("diagnostics"));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_keeps_default() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("FB_DEFAULT_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.default_port, eq(DEFAULT_PORT));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\ndefault_port = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    assert!(result.unwrap_err().to_string().contains("TOML parse error"));
}
