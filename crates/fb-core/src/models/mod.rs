pub mod run_state;
pub mod server_runtime_state;
pub mod server_settings;
pub mod validation_outcome;
