use crate::{ControlClient, LifecycleController, ManagerResult, RemoteChannel, SettingsStore};

use std::sync::Arc;

use fb_config::Config;
use tracing::{info, warn};

/// The file server manager a host UI drives.
///
/// Owns one lifecycle controller and one settings store over the same
/// channel. Lifecycle calls take `&self` so the UI can read state while a
/// call is in flight; settings edits take `&mut self`.
pub struct FileBrowserManager<C: ?Sized> {
    lifecycle: LifecycleController<C>,
    settings: SettingsStore<C>,
}

impl<C: RemoteChannel + ?Sized> FileBrowserManager<C> {
    pub fn new(channel: Arc<C>, config: &Config) -> Self {
        let client = ControlClient::new(channel, config.timeouts.clone());

        Self {
            lifecycle: LifecycleController::with_client(client.clone(), config),
            settings: SettingsStore::with_client(client, config),
        }
    }

    /// Load the server status and the stored settings.
    ///
    /// Both are attempted even when the first fails; the first error is returned.
    pub async fn initialize(&mut self) -> ManagerResult<()> {
        let status = self.lifecycle.refresh_status().await;
        let defaults = self.settings.load_defaults().await;

        match &status {
            Ok(runtime) if runtime.is_running() => {}
            _ if defaults.is_ok() => self
                .lifecycle
                .set_start_port(self.settings.accepted().port),
            _ => warn!("Settings unavailable, next start uses port {}", self.lifecycle.start_port()),
        }

        status?;
        defaults?;
        info!(
            "File browser manager ready (running: {}, port: {})",
            self.lifecycle.is_running(),
            self.lifecycle.start_port()
        );
        Ok(())
    }

    /// Save the port draft and use it for the next start.
    pub async fn save_port(&mut self) -> ManagerResult<u16> {
        let port = self.settings.save_port().await?;
        self.lifecycle.set_start_port(port);
        Ok(port)
    }

    pub async fn save_credentials(&mut self) -> ManagerResult<()> {
        self.settings.save_credentials().await
    }

    pub async fn refresh_status(&self) -> ManagerResult<()> {
        self.lifecycle.refresh_status().await.map(|_| ())
    }

    pub async fn start(&self) -> ManagerResult<()> {
        self.lifecycle.start().await
    }

    pub async fn stop(&self) -> ManagerResult<()> {
        self.lifecycle.stop().await
    }

    pub async fn toggle(&self) -> ManagerResult<()> {
        self.lifecycle.toggle().await
    }

    pub fn lifecycle(&self) -> &LifecycleController<C> {
        &self.lifecycle
    }

    pub fn settings(&self) -> &SettingsStore<C> {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsStore<C> {
        &mut self.settings
    }
}
