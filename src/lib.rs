/// MUST Admissions - application funnel core
///
/// Core library providing the multi-step apply wizard state machine,
/// its per-tab session persistence protocol, the degree catalog, and
/// validation for the application, contact and newsletter forms.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub use crate::config::{AdmissionsConfig, ConfigError};
pub use crate::core::apply::{
    ApplicantType, ApplicationForm, ApplyStep, ApplyWizard, Degree, DegreeCatalog, Faculty,
    FormContext, MemoryStore, SessionStore, StorageError, SystemClock, TeachingLanguage,
    WizardSession,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
