use serde::{Deserialize, Serialize};

/// Who is filling in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicantType {
    Student,
    Agency,
    Transfer,
}

impl ApplicantType {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicantType::Student => "Student",
            ApplicantType::Agency => "Agency",
            ApplicantType::Transfer => "Transfer Student",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ApplicantType::Student => "Applying for yourself as a new student",
            ApplicantType::Agency => "Applying on behalf of a student as a recruitment agency",
            ApplicantType::Transfer => "Moving from another university to MUST",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            ApplicantType::Student,
            ApplicantType::Agency,
            ApplicantType::Transfer,
        ]
    }
}
