use fb_core::{RunState, ServerRuntimeState};

use serde::Serialize;

/// Runtime state and phase, published together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LifecycleSnapshot {
    pub runtime: ServerRuntimeState,
    pub phase: RunState,
}

impl LifecycleSnapshot {
    pub fn new(runtime: ServerRuntimeState) -> Self {
        Self {
            runtime,
            phase: RunState::Stopped,
        }
    }

    /// Current phase, with a transitional phase resolved from the runtime.
    pub fn settled_phase(&self) -> RunState {
        match &self.phase {
            phase if !phase.is_transitional() => phase.clone(),
            _ if self.runtime.is_running() => RunState::Running,
            _ => RunState::Stopped,
        }
    }
}
