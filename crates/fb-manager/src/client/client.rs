use crate::client::reply::{self, StartReply, StatusReply, StopReply};
use crate::{DIAGNOSTIC_PREFIX, ManagerError, ManagerResult, Procedure, RemoteChannel};

use std::sync::Arc;

use fb_config::TimeoutConfig;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, warn};

/// Typed, timed access to the remote procedures.
pub struct ControlClient<C: ?Sized> {
    channel: Arc<C>,
    timeouts: TimeoutConfig,
}

impl<C: ?Sized> Clone for ControlClient<C> {
    fn clone(&self) -> Self {
        Self {
            channel: Arc::clone(&self.channel),
            timeouts: self.timeouts.clone(),
        }
    }
}

impl<C: RemoteChannel + ?Sized> ControlClient<C> {
    pub fn new(channel: Arc<C>, timeouts: TimeoutConfig) -> Self {
        Self { channel, timeouts }
    }

    /// Call a procedure under its category timeout.
    async fn execute(&self, procedure: Procedure, args: Value) -> ManagerResult<Value> {
        let limit = procedure.category().timeout(&self.timeouts);
        debug!(method = procedure.method_name(), "Calling remote procedure");

        match tokio::time::timeout(limit, self.channel.call(procedure.method_name(), args)).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(source)) => Err(ManagerError::channel(procedure, source)),
            Err(_) => Err(ManagerError::timeout(procedure, limit)),
        }
    }

    /// Decode a reply; `null` decodes to the default shape
    fn decode<T: DeserializeOwned + Default>(procedure: Procedure, value: Value) -> ManagerResult<T> {
        if value.is_null() {
            return Ok(T::default());
        }

        serde_json::from_value(value).map_err(|e| ManagerError::protocol(procedure, e.to_string()))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    pub async fn status(&self) -> ManagerResult<StatusReply> {
        let value = self.execute(Procedure::Status, json!({})).await?;
        Self::decode(Procedure::Status, value)
    }

    pub async fn start(&self, port: u16) -> ManagerResult<StartReply> {
        let value = self.execute(Procedure::Start, json!({ "port": port })).await?;
        Self::decode(Procedure::Start, value)
    }

    pub async fn stop(&self) -> ManagerResult<StopReply> {
        let value = self.execute(Procedure::Stop, json!({})).await?;
        Self::decode(Procedure::Stop, value)
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Read a stored setting; `None` when the key has no value.
    pub async fn get_setting(&self, key: &str) -> ManagerResult<Option<Value>> {
        let value = self
            .execute(Procedure::GetSetting, json!({ "key": key }))
            .await?;

        Ok(Some(value).filter(|value| !value.is_null()))
    }

    /// Store a setting and return the raw reply.
    pub async fn save_setting(&self, key: &str, value: Value) -> ManagerResult<Value> {
        self.execute(Procedure::SaveSetting, json!({ "key": key, "value": value }))
            .await
    }

    /// Store both credentials; `true` when the remote confirmed the change.
    pub async fn save_credentials(&self, username: &str, password: &str) -> ManagerResult<bool> {
        let value = self
            .execute(
                Procedure::SaveCredentials,
                json!({ "username": username, "password": password }),
            )
            .await?;

        Ok(reply::credentials_saved(&value))
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    pub async fn log_info(&self, message: &str) {
        self.forward(Procedure::LogInfo, message).await;
    }

    pub async fn log_error(&self, message: &str) {
        self.forward(Procedure::LogError, message).await;
    }

    async fn forward(&self, procedure: Procedure, message: &str) {
        let msg = format!("{DIAGNOSTIC_PREFIX}{message}");
        if let Err(e) = self.execute(procedure, json!({ "msg": msg })).await {
            warn!("Could not forward log message to host: {e}");
        }
    }
}
