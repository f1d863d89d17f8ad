//! Observed state of the remote file server.

use crate::DEFAULT_PORT;

use serde::Serialize;

const URL_SCHEME: &str = "https";

/// Normalized content of a status reply, independent of its wire shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    /// Remote run status flag (`status == "online"`)
    pub online: bool,
    pub port: Option<u16>,
    pub process_id: Option<u32>,
    pub ipv4_address: Option<String>,
}

/// Live cache of what the remote process last reported.
///
/// `running` is never taken from a single field: it is recomputed from the
/// run status flag and the process id on every observation, so a stale
/// "online" flag without a live process reads as stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerRuntimeState {
    running: bool,
    port: Option<u16>,
    process_id: Option<u32>,
    ipv4_address: Option<String>,
}

impl ServerRuntimeState {
    /// Inactive placeholder used before the first status query.
    pub fn inactive(port: u16) -> Self {
        Self {
            running: false,
            port: Some(port),
            process_id: None,
            ipv4_address: None,
        }
    }

    /// Apply a status report on top of this snapshot.
    ///
    /// The port is taken from the report when present and kept otherwise.
    /// Process id and address only survive when the server is running.
    pub fn observe(&self, report: StatusReport) -> Self {
        let port = report.port.or(self.port);
        let process_id = report.process_id.filter(|pid| *pid > 0);

        match (report.online, process_id, port) {
            (true, Some(process_id), Some(port)) => Self {
                running: true,
                port: Some(port),
                process_id: Some(process_id),
                ipv4_address: report.ipv4_address,
            },
            _ => Self {
                running: false,
                port,
                process_id: None,
                ipv4_address: None,
            },
        }
    }

    /// Snapshot after a confirmed stop.
    pub fn stopped(&self) -> Self {
        Self {
            running: false,
            port: self.port,
            process_id: None,
            ipv4_address: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn process_id(&self) -> Option<u32> {
        self.process_id
    }

    pub fn ipv4_address(&self) -> Option<&str> {
        self.ipv4_address.as_deref()
    }

    /// Address clients use to reach the file server, while it runs.
    pub fn url(&self) -> Option<String> {
        if !self.running {
            return None;
        }

        match (self.ipv4_address.as_deref(), self.port) {
            (Some(address), Some(port)) => Some(format!("{URL_SCHEME}://{address}:{port}")),
            _ => None,
        }
    }
}

impl Default for ServerRuntimeState {
    fn default() -> Self {
        Self::inactive(DEFAULT_PORT)
    }
}
