
use crate::{ChannelError, LifecycleController, RemoteChannel, SettingsStore};

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use fb_config::Config;
use serde_json::{Value, json};

pub(crate) const STATUS: &str = "getFileBrowserStatus";
pub(crate) const START: &str = "startFileBrowser";
pub(crate) const STOP: &str = "stopFileBrowser";
pub(crate) const GET_SETTING: &str = "get_setting";
pub(crate) const SAVE_SETTING: &str = "save_user_settings";
pub(crate) const SAVE_CREDENTIALS: &str = "save_username_password";
pub(crate) const LOG_ERROR: &str = "logError";

pub(crate) enum Scripted {
    Reply(Value),
    Fail(String),
    Delayed(Duration, Value),
    Hang,
}

/// In-memory channel answering from per-method queues and recording every call.
///
/// Methods without a queued answer reply `null`.
#[derive(Default)]
pub(crate) struct ScriptedChannel {
    script: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl ScriptedChannel {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, method: &str, scripted: Scripted) {
        self.script
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push_back(scripted);
    }

    pub(crate) fn reply(&self, method: &str, value: Value) {
        self.push(method, Scripted::Reply(value));
    }

    pub(crate) fn fail(&self, method: &str, message: &str) {
        self.push(method, Scripted::Fail(message.to_string()));
    }

    pub(crate) fn delayed(&self, method: &str, delay: Duration, value: Value) {
        self.push(method, Scripted::Delayed(delay, value));
    }

    pub(crate) fn hang(&self, method: &str) {
        self.push(method, Scripted::Hang);
    }

    /// Arguments of every call made to `method`, in order.
    pub(crate) fn calls_to(&self, method: &str) -> Vec<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == method)
            .map(|(_, args)| args.clone())
            .collect()
    }
}

#[async_trait]
impl RemoteChannel for ScriptedChannel {
    async fn call(&self, method: &str, args: Value) -> Result<Value, ChannelError> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), args));
        let next = self
            .script
            .lock()
            .unwrap()
            .get_mut(method)
            .and_then(VecDeque::pop_front);

        match next {
            Some(Scripted::Reply(value)) => Ok(value),
            Some(Scripted::Fail(message)) => Err(ChannelError::transport(message)),
            Some(Scripted::Delayed(delay, value)) => {
                tokio::time::sleep(delay).await;
                Ok(value)
            }
            Some(Scripted::Hang) => std::future::pending().await,
            None => Ok(Value::Null),
        }
    }
}

pub(crate) fn online_status(port: u16, pid: &str) -> Value {
    json!({
        "status": "online",
        "port": port,
        "ipv4_address": "192.168.1.20",
        "pid": pid,
    })
}

pub(crate) fn offline_status(port: u16) -> Value {
    json!({
        "status": "offline",
        "port": port,
        "ipv4_address": "192.168.1.20",
        "pid": null,
    })
}

pub(crate) fn controller(channel: &Arc<ScriptedChannel>) -> LifecycleController<ScriptedChannel> {
    LifecycleController::new(Arc::clone(channel), &Config::default())
}

/// Controller that has already observed a running server on 8082 with pid 4242.
pub(crate) async fn running_controller(
    channel: &Arc<ScriptedChannel>,
) -> LifecycleController<ScriptedChannel> {
    let controller = controller(channel);
    channel.reply(STATUS, online_status(8082, "4242"));
    controller.refresh_status().await.unwrap();
    controller
}

pub(crate) fn store(channel: &Arc<ScriptedChannel>) -> SettingsStore<ScriptedChannel> {
    SettingsStore::new(Arc::clone(channel), &Config::default())
}
