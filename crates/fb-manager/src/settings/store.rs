//! Port and credential forms: validation on every change, explicit saves.

use crate::client::reply;
use crate::settings::{
    CREDENTIALS_SAVE_FAILED_MESSAGE, CREDENTIALS_SAVED_MESSAGE, FieldDraft, LOAD_FAILED_MESSAGE,
    PORT_SAVE_FAILED_MESSAGE, PORT_SAVED_MESSAGE,
};
use crate::{ControlClient, Feedback, ManagerError, ManagerResult, RemoteChannel};

use std::sync::Arc;

use fb_config::{Config, ServerConfig};
use fb_core::{
    CredentialField, CredentialRejection, ServerSettings, ValidationOutcome, check_credential,
    check_credential_pair, check_port,
};
use serde_json::{Value, json};
use tracing::{debug, error, info, warn};

/// Accepted settings plus the drafts the settings form echoes.
///
/// Rejected input only ever lands in a draft; `accepted()` changes only after
/// the remote side confirmed a save.
pub struct SettingsStore<C: ?Sized> {
    client: ControlClient<C>,
    server: ServerConfig,
    accepted: ServerSettings,
    port: FieldDraft,
    username: FieldDraft,
    password: FieldDraft,
    port_feedback: Feedback,
    credentials_feedback: Feedback,
}

impl<C: RemoteChannel + ?Sized> SettingsStore<C> {
    pub fn new(channel: Arc<C>, config: &Config) -> Self {
        Self::with_client(ControlClient::new(channel, config.timeouts.clone()), config)
    }

    pub(crate) fn with_client(client: ControlClient<C>, config: &Config) -> Self {
        let accepted = ServerSettings::default()
            .with_port(i64::from(config.server.default_port))
            .unwrap_or_default();
        let success_window = config.feedback.success_display();

        Self {
            client,
            server: config.server.clone(),
            port: FieldDraft::accepted(accepted.port.to_string()),
            accepted,
            username: FieldDraft::default(),
            password: FieldDraft::default(),
            port_feedback: Feedback::for_field(success_window),
            credentials_feedback: Feedback::for_field(success_window),
        }
    }

    // =========================================================================
    // Bootstrap
    // =========================================================================

    /// Fill the form from the stored port and username.
    ///
    /// Stored values that break the rules are ignored with a warning.
    pub async fn load_defaults(&mut self) -> ManagerResult<()> {
        let port_key = self.server.port_setting_key.clone();
        match self.client.get_setting(&port_key).await {
            Ok(Some(value)) => self.adopt_stored_port(&value),
            Ok(None) => debug!("No stored port, keeping {}", self.accepted.port),
            Err(e) => return Err(self.load_failed(e).await),
        }

        let username_key = self.server.username_setting_key.clone();
        match self.client.get_setting(&username_key).await {
            Ok(Some(Value::String(username))) => self.adopt_stored_username(&username),
            Ok(Some(other)) => warn!("Ignoring stored username that is not text: {other}"),
            Ok(None) => debug!("No stored username"),
            Err(e) => return Err(self.load_failed(e).await),
        }

        Ok(())
    }

    fn adopt_stored_port(&mut self, value: &Value) {
        let Some(number) = reply::lenient_number(value) else {
            warn!("Ignoring stored port that is not a number: {value}");
            return;
        };

        match self
            .accepted
            .with_port(i64::try_from(number).unwrap_or(i64::MAX))
        {
            Ok(settings) => {
                self.port = FieldDraft::accepted(settings.port.to_string());
                self.accepted = settings;
            }
            Err(e) => warn!("Ignoring stored port: {e}"),
        }
    }

    fn adopt_stored_username(&mut self, username: &str) {
        match self.accepted.with_username(username) {
            Ok(settings) => {
                self.username = FieldDraft::accepted(settings.username.clone());
                self.accepted = settings;
            }
            Err(e) => warn!("Ignoring stored username: {e}"),
        }
    }

    async fn load_failed(&mut self, error: ManagerError) -> ManagerError {
        error!("{LOAD_FAILED_MESSAGE} {error}");
        self.client
            .log_error(&format!("Loading settings failed: {error}"))
            .await;
        self.port_feedback.show_error(LOAD_FAILED_MESSAGE);
        error
    }

    // =========================================================================
    // Port
    // =========================================================================

    /// Validate a port as typed. The draft keeps at most five characters.
    pub fn on_port_change(&mut self, raw: &str) -> &ValidationOutcome {
        let check = check_port(raw);
        self.port_feedback.clear();
        if let Err(reason) = &check.result {
            self.port_feedback.show_error(reason.to_string());
        }

        self.port = FieldDraft {
            outcome: check.outcome(),
            value: check.input,
        };
        &self.port.outcome
    }

    /// Re-check the port draft and store it as an integer.
    pub async fn save_port(&mut self) -> ManagerResult<u16> {
        let check = check_port(&self.port.value);
        self.port.outcome = check.outcome();
        let port = match check.result {
            Ok(port) => port,
            Err(reason) => {
                self.port_feedback.show_error(reason.to_string());
                return Err(ManagerError::validation("port", reason.to_string()));
            }
        };

        let key = self.server.port_setting_key.clone();
        let response = match self.client.save_setting(&key, json!(port)).await {
            Ok(response) if reply::setting_saved(&response) => response,
            Ok(response) => {
                debug!("Save setting reply: {response}");
                let error = ManagerError::save_rejected("port");
                return Err(self.port_save_failed(error).await);
            }
            Err(e) => return Err(self.port_save_failed(e).await),
        };

        let settings = match reply::stored_port(&response)
            .and_then(|stored| self.accepted.with_port(i64::from(stored)).ok())
        {
            Some(settings) => settings,
            None => self
                .accepted
                .with_port(i64::from(port))
                .map_err(|e| ManagerError::validation("port", e.to_string()))?,
        };

        let stored = settings.port;
        self.accepted = settings;
        self.port = FieldDraft::accepted(stored.to_string());
        self.port_feedback.show_success(PORT_SAVED_MESSAGE);
        info!("Port {stored} saved");
        Ok(stored)
    }

    async fn port_save_failed(&mut self, error: ManagerError) -> ManagerError {
        error!("Saving port failed: {error}");
        self.client
            .log_error(&format!("Saving port failed: {error}"))
            .await;
        self.port_feedback.show_error(PORT_SAVE_FAILED_MESSAGE);
        error
    }

    // =========================================================================
    // Credentials
    // =========================================================================

    pub fn on_username_change(&mut self, raw: &str) -> &ValidationOutcome {
        self.on_credential_change(CredentialField::Username, raw)
    }

    pub fn on_password_change(&mut self, raw: &str) -> &ValidationOutcome {
        self.on_credential_change(CredentialField::Password, raw)
    }

    /// Emptying a field clears the messages; emptiness is only reported on save.
    fn on_credential_change(&mut self, field: CredentialField, raw: &str) -> &ValidationOutcome {
        self.credentials_feedback.clear();
        if raw.trim().is_empty() {
            let draft = self.draft_mut(field);
            *draft = FieldDraft {
                value: raw.to_string(),
                outcome: ValidationOutcome::default(),
            };
            return &draft.outcome;
        }

        let check = check_credential(field, raw);
        if let Err(reason) = &check.result {
            self.credentials_feedback.show_error(reason.to_string());
        }

        // Echo what was typed, unless it had to be cut.
        let value = if check.truncated {
            check.value.clone()
        } else {
            raw.to_string()
        };

        let draft = self.draft_mut(field);
        *draft = FieldDraft {
            value,
            outcome: check.outcome(),
        };
        &draft.outcome
    }

    /// Save both credentials in one call, after both pass the rules.
    pub async fn save_credentials(&mut self) -> ManagerResult<()> {
        let (username, password) =
            match check_credential_pair(&self.username.value, &self.password.value) {
                Ok(pair) => pair,
                Err(reason) => {
                    self.reject_credentials(reason);
                    return Err(ManagerError::validation("credentials", reason.to_string()));
                }
            };

        match self.client.save_credentials(&username, &password).await {
            Ok(true) => {}
            Ok(false) => {
                let error = ManagerError::save_rejected("credentials");
                return Err(self.credentials_save_failed(error).await);
            }
            Err(e) => return Err(self.credentials_save_failed(e).await),
        }

        self.accepted = self
            .accepted
            .with_credentials(&username, &password)
            .map_err(|e| ManagerError::validation("credentials", e.to_string()))?;
        self.username = FieldDraft::accepted(username);
        self.password = FieldDraft::accepted(password);
        self.credentials_feedback
            .show_success(CREDENTIALS_SAVED_MESSAGE);
        info!("Credentials changed");
        Ok(())
    }

    fn reject_credentials(&mut self, reason: CredentialRejection) {
        let outcome = ValidationOutcome::rejected(reason.to_string());
        match reason.field() {
            Some(field) => self.draft_mut(field).outcome = outcome,
            None => {
                self.username.outcome = outcome.clone();
                self.password.outcome = outcome;
            }
        }
        self.credentials_feedback.show_error(reason.to_string());
    }

    async fn credentials_save_failed(&mut self, error: ManagerError) -> ManagerError {
        error!("Saving credentials failed: {error}");
        self.client
            .log_error(&format!("Saving credentials failed: {error}"))
            .await;
        self.credentials_feedback
            .show_error(CREDENTIALS_SAVE_FAILED_MESSAGE);
        error
    }

    fn draft_mut(&mut self, field: CredentialField) -> &mut FieldDraft {
        match field {
            CredentialField::Username => &mut self.username,
            CredentialField::Password => &mut self.password,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Last values the remote side confirmed.
    pub fn accepted(&self) -> &ServerSettings {
        &self.accepted
    }

    pub fn port_draft(&self) -> &FieldDraft {
        &self.port
    }

    pub fn username_draft(&self) -> &FieldDraft {
        &self.username
    }

    pub fn password_draft(&self) -> &FieldDraft {
        &self.password
    }

    pub fn port_feedback(&self) -> &Feedback {
        &self.port_feedback
    }

    pub fn credentials_feedback(&self) -> &Feedback {
        &self.credentials_feedback
    }
}
