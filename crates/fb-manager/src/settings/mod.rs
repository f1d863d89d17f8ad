mod field_draft;
mod store;

pub use field_draft::FieldDraft;
pub use store::SettingsStore;

pub(crate) const PORT_SAVED_MESSAGE: &str = "Port number saved successfully.";
pub(crate) const PORT_SAVE_FAILED_MESSAGE: &str =
    "Could not save the port number, check the logs for more details.";
pub(crate) const CREDENTIALS_SAVED_MESSAGE: &str = "Credentials changed successfully.";
pub(crate) const CREDENTIALS_SAVE_FAILED_MESSAGE: &str =
    "Could not save credentials, check the logs for more details.";
pub(crate) const LOAD_FAILED_MESSAGE: &str =
    "Could not load the saved settings, check the logs for more details.";
