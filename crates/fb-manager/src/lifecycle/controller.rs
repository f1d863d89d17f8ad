//! Start/stop/status control of the remote file server.

use crate::client::reply::{STATUS_ERROR, STATUS_OFFLINE, STATUS_ONLINE};
use crate::lifecycle::busy_guard::BusyGuard;
use crate::lifecycle::{
    LifecycleSnapshot, START_FAILED_MESSAGE, STATUS_FAILED_MESSAGE, STOP_FAILED_MESSAGE,
};
use crate::{ControlClient, Feedback, ManagerError, ManagerResult, Procedure, RemoteChannel};

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicU16, AtomicU64, AtomicUsize, Ordering};

use error_location::ErrorLocation;
use fb_config::Config;
use fb_core::{RunState, ServerRuntimeState};
use tokio::sync::watch;
use tracing::{debug, error, info};

/// Why a status query is being made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settle {
    /// Plain refresh: the reply decides the phase.
    Refresh,
    /// Confirmation after a start; a missing process is left to the caller.
    AfterStart,
}

/// Owns the observed runtime state of the file server.
///
/// Every lifecycle call takes a generation token. A call whose token is no
/// longer the latest when its reply arrives does not touch the state and
/// returns [`ManagerError::Superseded`].
pub struct LifecycleController<C: ?Sized> {
    client: ControlClient<C>,
    state_tx: watch::Sender<LifecycleSnapshot>,
    notice_tx: watch::Sender<Feedback>,
    start_port: AtomicU16,
    generation: AtomicU64,
    in_flight: AtomicUsize,
}

impl<C: RemoteChannel + ?Sized> LifecycleController<C> {
    pub fn new(channel: Arc<C>, config: &Config) -> Self {
        Self::with_client(ControlClient::new(channel, config.timeouts.clone()), config)
    }

    pub(crate) fn with_client(client: ControlClient<C>, config: &Config) -> Self {
        let port = config.server.default_port;
        let (state_tx, _) = watch::channel(LifecycleSnapshot::new(ServerRuntimeState::inactive(
            port,
        )));
        let (notice_tx, _) = watch::channel(Feedback::for_panel(config.feedback.notice_display()));

        Self {
            client,
            state_tx,
            notice_tx,
            start_port: AtomicU16::new(port),
            generation: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Query the remote status and reconcile the local snapshot with it.
    pub async fn refresh_status(&self) -> ManagerResult<ServerRuntimeState> {
        let _busy = BusyGuard::enter(&self.in_flight);
        let token = self.next_token();
        self.query_status(token, Settle::Refresh).await
    }

    /// Start the server on the current start port. Does nothing when running.
    pub async fn start(&self) -> ManagerResult<()> {
        if self.is_running() {
            debug!("File server already running, start skipped");
            return Ok(());
        }

        let _busy = BusyGuard::enter(&self.in_flight);
        let token = self.next_token();
        let port = self.start_port();

        if !self.publish(token, |snapshot| snapshot.phase = RunState::Starting) {
            return Err(ManagerError::superseded(Procedure::Start));
        }
        info!("Starting file server on port {port}");

        let reply = match self.client.start(port).await {
            Ok(reply) => reply,
            Err(e) => return Err(self.fail_start(token, e, START_FAILED_MESSAGE).await),
        };

        match reply.status.as_deref() {
            Some(STATUS_ONLINE) => {
                let runtime = match self.query_status(token, Settle::AfterStart).await {
                    Ok(runtime) => runtime,
                    Err(ManagerError::Superseded { .. }) => {
                        return Err(ManagerError::superseded(Procedure::Start));
                    }
                    Err(e) => return Err(e),
                };
                if !runtime.is_running() {
                    let error = ManagerError::StartUnconfirmed {
                        location: ErrorLocation::from(Location::caller()),
                    };
                    return Err(self.fail_start(token, error, START_FAILED_MESSAGE).await);
                }

                let message = format!(
                    "File server started on port {} (pid {})",
                    runtime.port().unwrap_or(port),
                    runtime.process_id().unwrap_or_default()
                );
                info!("{message}");
                self.client.log_info(&message).await;
                Ok(())
            }
            Some(STATUS_ERROR) => {
                let output = reply.message().unwrap_or(START_FAILED_MESSAGE).to_string();
                let error = ManagerError::StartRejected {
                    output: output.clone(),
                    location: ErrorLocation::from(Location::caller()),
                };
                Err(self.fail_start(token, error, &output).await)
            }
            other => {
                let error = ManagerError::StartFailed {
                    status: other.unwrap_or("none").to_string(),
                    location: ErrorLocation::from(Location::caller()),
                };
                Err(self.fail_start(token, error, START_FAILED_MESSAGE).await)
            }
        }
    }

    /// Stop the server. On failure the previous phase is restored.
    pub async fn stop(&self) -> ManagerResult<()> {
        let _busy = BusyGuard::enter(&self.in_flight);
        let token = self.next_token();
        let previous = self.settled_phase();

        if !self.publish(token, |snapshot| snapshot.phase = RunState::Stopping) {
            return Err(ManagerError::superseded(Procedure::Stop));
        }
        info!("Stopping file server");

        let reply = match self.client.stop().await {
            Ok(reply) => reply,
            Err(e) => return Err(self.fail_stop(token, e, previous).await),
        };

        if reply.status.as_deref() != Some(STATUS_OFFLINE) {
            let error = ManagerError::StopFailed {
                status: reply.status.unwrap_or_else(|| "none".to_string()),
                output: reply.output.unwrap_or_default(),
                location: ErrorLocation::from(Location::caller()),
            };
            return Err(self.fail_stop(token, error, previous).await);
        }

        let stopped = self.publish(token, |snapshot| {
            snapshot.runtime = snapshot.runtime.stopped();
            snapshot.phase = RunState::Stopped;
        });
        if !stopped {
            return Err(ManagerError::superseded(Procedure::Stop));
        }

        info!("File server stopped");
        self.client.log_info("File server stopped").await;
        Ok(())
    }

    /// Stop when running, start otherwise.
    pub async fn toggle(&self) -> ManagerResult<()> {
        if self.is_running() {
            self.stop().await
        } else {
            self.start().await
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn is_running(&self) -> bool {
        self.state_tx.borrow().runtime.is_running()
    }

    pub fn port(&self) -> Option<u16> {
        self.state_tx.borrow().runtime.port()
    }

    pub fn process_id(&self) -> Option<u32> {
        self.state_tx.borrow().runtime.process_id()
    }

    pub fn address(&self) -> Option<String> {
        self.state_tx
            .borrow()
            .runtime
            .ipv4_address()
            .map(str::to_string)
    }

    /// `https://{address}:{port}` while the server runs.
    pub fn server_url(&self) -> Option<String> {
        self.state_tx.borrow().runtime.url()
    }

    pub fn run_state(&self) -> RunState {
        self.state_tx.borrow().phase.clone()
    }

    pub fn snapshot(&self) -> LifecycleSnapshot {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LifecycleSnapshot> {
        self.state_tx.subscribe()
    }

    pub fn subscribe_notices(&self) -> watch::Receiver<Feedback> {
        self.notice_tx.subscribe()
    }

    /// Whether a lifecycle call is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Panel error message, while its display window lasts.
    pub fn notice(&self) -> Option<String> {
        self.notice_tx.borrow().error().map(str::to_string)
    }

    pub fn start_port(&self) -> u16 {
        self.start_port.load(Ordering::SeqCst)
    }

    /// Use `port` for the next start without touching the observed state.
    pub fn set_start_port(&self, port: u16) {
        debug!("Next start will use port {port}");
        self.start_port.store(port, Ordering::SeqCst);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn query_status(&self, token: u64, settle: Settle) -> ManagerResult<ServerRuntimeState> {
        let reply = match self.client.status().await {
            Ok(reply) => reply,
            Err(e) => {
                let error = self
                    .report(token, Procedure::Status, e, STATUS_FAILED_MESSAGE)
                    .await;
                // Settle a phase left pending by a superseded call.
                self.publish(token, |snapshot| match settle {
                    Settle::AfterStart => {
                        snapshot.phase = RunState::Error {
                            reason: STATUS_FAILED_MESSAGE.to_string(),
                        }
                    }
                    Settle::Refresh => snapshot.phase = snapshot.settled_phase(),
                });
                return Err(error);
            }
        };

        let report = reply.into_report();
        let reported_port = report.port;
        let current = self.publish(token, |snapshot| {
            snapshot.runtime = snapshot.runtime.observe(report);
            if snapshot.runtime.is_running() {
                snapshot.phase = RunState::Running;
            } else if settle == Settle::Refresh {
                snapshot.phase = RunState::Stopped;
            }
        });
        if !current {
            debug!("Dropping status reply of a superseded call");
            return Err(ManagerError::superseded(Procedure::Status));
        }

        if let Some(port) = reported_port {
            self.start_port.store(port, Ordering::SeqCst);
        }

        let runtime = self.state_tx.borrow().runtime.clone();
        debug!(
            running = runtime.is_running(),
            port = ?runtime.port(),
            pid = ?runtime.process_id(),
            "File server status refreshed"
        );
        Ok(runtime)
    }

    async fn fail_start(&self, token: u64, error: ManagerError, message: &str) -> ManagerError {
        let error = self.report(token, Procedure::Start, error, message).await;
        self.publish(token, |snapshot| {
            snapshot.phase = RunState::Error {
                reason: message.to_string(),
            }
        });
        error
    }

    async fn fail_stop(&self, token: u64, error: ManagerError, previous: RunState) -> ManagerError {
        let error = self
            .report(token, Procedure::Stop, error, STOP_FAILED_MESSAGE)
            .await;
        self.publish(token, |snapshot| snapshot.phase = previous);
        error
    }

    /// Surface a failure on the panel and in the host log, unless superseded.
    async fn report(
        &self,
        token: u64,
        procedure: Procedure,
        error: ManagerError,
        message: &str,
    ) -> ManagerError {
        if !self.is_current(token) {
            debug!("Dropping failure of a superseded {procedure} call: {error}");
            return ManagerError::superseded(procedure);
        }

        error!("{message}: {error}");
        self.notice_tx.send_modify(|notice| notice.show_error(message));
        self.client.log_error(&format!("{message}: {error}")).await;
        error
    }

    /// Apply `update` if `token` is still the latest. Returns whether it was.
    fn publish<F: FnOnce(&mut LifecycleSnapshot)>(&self, token: u64, update: F) -> bool {
        let mut current = false;
        self.state_tx.send_if_modified(|snapshot| {
            if !self.is_current(token) {
                return false;
            }
            current = true;
            let before = snapshot.clone();
            update(snapshot);
            *snapshot != before
        });
        current
    }

    fn next_token(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }

    fn settled_phase(&self) -> RunState {
        self.state_tx.borrow().settled_phase()
    }
}
