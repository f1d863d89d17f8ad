mod run_state;
mod server_runtime_state;
mod server_settings;
