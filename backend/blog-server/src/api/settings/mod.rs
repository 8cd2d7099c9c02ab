pub mod settings;
pub mod update_settings_request;
