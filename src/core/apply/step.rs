use serde::{Deserialize, Serialize};

/// Apply wizard step, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplyStep {
    #[default]
    Type,
    Degree,
    Faculty,
    Form,
}

impl ApplyStep {
    pub fn label(&self) -> &'static str {
        match self {
            ApplyStep::Type => "Applicant Type",
            ApplyStep::Degree => "Degree",
            ApplyStep::Faculty => "Faculty",
            ApplyStep::Form => "Application",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ApplyStep::Type => "Student, agency or transfer",
            ApplyStep::Degree => "Bachelor, master or doctorate",
            ApplyStep::Faculty => "Faculty and teaching language",
            ApplyStep::Form => "Your details",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ApplyStep::Type => 0,
            ApplyStep::Degree => 1,
            ApplyStep::Faculty => 2,
            ApplyStep::Form => 3,
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            ApplyStep::Type,
            ApplyStep::Degree,
            ApplyStep::Faculty,
            ApplyStep::Form,
        ]
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            ApplyStep::Type => Some(ApplyStep::Degree),
            ApplyStep::Degree => Some(ApplyStep::Faculty),
            ApplyStep::Faculty => Some(ApplyStep::Form),
            ApplyStep::Form => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            ApplyStep::Type => None,
            ApplyStep::Degree => Some(ApplyStep::Type),
            ApplyStep::Faculty => Some(ApplyStep::Degree),
            ApplyStep::Form => Some(ApplyStep::Faculty),
        }
    }

    /// The terminal step only accepts a submission, never an advance
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplyStep::Form)
    }
}

impl std::fmt::Display for ApplyStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ApplyStep::Type => "type",
            ApplyStep::Degree => "degree",
            ApplyStep::Faculty => "faculty",
            ApplyStep::Form => "form",
        };
        f.write_str(tag)
    }
}
