//! Apply Wizard Components
//!
//! Four-step application funnel: applicant type, degree, faculty and
//! teaching language, then the form for the chosen applicant type.
//!
//! # Components
//! - `ApplyPage` - Main container with navigation and step progress
//! - `StepProgress` - Clickable step indicator rail
//! - Step components for each selection step
//! - `TerminalForm` - Student, agency or transfer application form

pub mod apply_page;
pub mod forms;
pub mod step_progress;
pub mod steps;

pub use apply_page::ApplyPage;
pub use forms::TerminalForm;
pub use step_progress::StepProgress;
pub use steps::*;
