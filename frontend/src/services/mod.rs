pub mod apply_state;
pub mod config_service;
pub mod session_storage;
pub mod submission;
