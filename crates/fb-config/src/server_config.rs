use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PORT_SETTING_KEY, DEFAULT_USERNAME_SETTING_KEY,
};

use fb_core::{DEFAULT_PORT, accept_port};
use serde::Deserialize;

/// What the manager assumes about the remote file server before it has asked.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port used for the inactive snapshot and the first start
    pub default_port: u16,
    /// Remote setting key holding the persisted port
    pub port_setting_key: String,
    /// Remote setting key holding the current username
    pub username_setting_key: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_port: DEFAULT_PORT,
            port_setting_key: DEFAULT_PORT_SETTING_KEY.into(),
            username_setting_key: DEFAULT_USERNAME_SETTING_KEY.into(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Err(reason) = accept_port(i64::from(self.default_port)) {
            return Err(ConfigError::server(format!(
                "server.default_port {} is not usable: {reason}",
                self.default_port
            )));
        }

        if self.port_setting_key.trim().is_empty() {
            return Err(ConfigError::server("server.port_setting_key cannot be empty"));
        }

        if self.username_setting_key.trim().is_empty() {
            return Err(ConfigError::server(
                "server.username_setting_key cannot be empty",
            ));
        }

        Ok(())
    }
}
