//! Apply Wizard
//!
//! Four-step application funnel: applicant type, degree, faculty and
//! teaching language, then the terminal form for the chosen applicant type.
//!
//! # Architecture
//! - `ApplyStep` - ordered step enum with completion gating
//! - `ApplyWizard` - controller owning the session, writing through a `SessionStore`
//! - `WizardSession` - the persisted JSON document and its expiry rule
//! - `ApplicationForm` - terminal forms dispatched by `ApplicantType`

pub mod applicant;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod forms;
pub mod session;
pub mod step;
pub mod storage;

pub use applicant::ApplicantType;
pub use catalog::{Degree, DegreeCatalog, Faculty, TeachingLanguage};
pub use controller::{ApplyWizard, Clock, SystemClock};
pub use error::{NavigationError, SelectionError, StorageError};
pub use forms::{
    AgencyApplication, ApplicationForm, FormContext, StudentApplication, TransferApplication,
};
pub use session::{WizardSession, SESSION_TTL_MS, STORAGE_KEY};
pub use step::ApplyStep;
pub use storage::{MemoryStore, SessionStore};
