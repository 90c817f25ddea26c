//! Error types for the apply wizard.

use thiserror::Error;

use super::catalog::TeachingLanguage;
use super::step::ApplyStep;

/// Persistence port failures. Always recovered inside the controller.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage missing, disabled, or refusing writes (quota, privacy mode).
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    /// Stored document could not be read back.
    #[error("Session JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Refused step transitions. State is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Step '{0}' is not complete")]
    StepIncomplete(ApplyStep),

    #[error("Step '{to}' cannot be reached from '{from}'")]
    StepLocked { from: ApplyStep, to: ApplyStep },

    #[error("Already at the first step")]
    AtFirstStep,

    #[error("The application form is the last step")]
    AtTerminalStep,
}

/// Refused selections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Select a degree first")]
    NoDegreeSelected,

    #[error("Select a faculty first")]
    NoFacultySelected,

    #[error("Faculty {faculty_id} is not offered by degree {degree_id}")]
    FacultyNotInDegree { faculty_id: u32, degree_id: u32 },

    #[error("Faculty {faculty_id} does not teach in {language}")]
    LanguageNotOffered {
        language: TeachingLanguage,
        faculty_id: u32,
    },
}
