//! Wizard Session
//!
//! The persisted wizard document and the pure rules over it: step
//! completion, step reachability, expiry and sanitizing a restored copy.

use serde::{Deserialize, Serialize};

use super::applicant::ApplicantType;
use super::catalog::{Degree, Faculty, TeachingLanguage};
use super::step::ApplyStep;

/// Storage slot holding the serialized session
pub const STORAGE_KEY: &str = "apply_form_state";

/// Sessions idle longer than this are discarded on load
pub const SESSION_TTL_MS: i64 = 30 * 60 * 1000;

/// Complete wizard state, mirrored to the per-tab storage slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WizardSession {
    pub current_step: ApplyStep,
    pub applicant_type: Option<ApplicantType>,
    pub selected_degree: Option<Degree>,
    pub selected_faculty: Option<Faculty>,
    pub selected_language: Option<TeachingLanguage>,
    /// Last write, epoch milliseconds
    pub timestamp: i64,
}

impl WizardSession {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// `true` once more than `ttl_ms` has passed since the last write
    pub fn is_expired_at(&self, now_ms: i64, ttl_ms: i64) -> bool {
        now_ms.saturating_sub(self.timestamp) > ttl_ms
    }

    /// Whether the selections a step asks for are all present.
    /// The form step is submitted, never completed.
    pub fn is_step_completed(&self, step: ApplyStep) -> bool {
        match step {
            ApplyStep::Type => self.applicant_type.is_some(),
            ApplyStep::Degree => self.selected_degree.is_some(),
            ApplyStep::Faculty => {
                self.selected_faculty.is_some() && self.selected_language.is_some()
            }
            ApplyStep::Form => false,
        }
    }

    /// Direct navigation rule: any step up to the current one, or the next
    /// one when the current step is complete.
    pub fn is_step_accessible(&self, step: ApplyStep) -> bool {
        let target = step.index();
        let current = self.current_step.index();

        if target <= current {
            return true;
        }
        target == current + 1 && self.is_step_completed(self.current_step)
    }

    /// First step whose own selections are missing. Every step after it is
    /// unreachable.
    pub fn furthest_reachable_step(&self) -> ApplyStep {
        ApplyStep::all()
            .into_iter()
            .find(|step| !self.is_step_completed(*step))
            .unwrap_or(ApplyStep::Form)
    }

    /// Repair a restored session so the invariants hold again: the faculty
    /// belongs to the degree, the language is taught by the faculty, and
    /// the step is reachable.
    pub fn sanitized(mut self) -> Self {
        let faculty_fits = match (&self.selected_degree, &self.selected_faculty) {
            (Some(degree), Some(faculty)) => degree.offers_faculty(faculty),
            (_, None) => true,
            (None, Some(_)) => false,
        };
        if !faculty_fits {
            self.selected_faculty = None;
        }

        let language_fits = match (&self.selected_faculty, self.selected_language) {
            (Some(faculty), Some(language)) => faculty.offers(language),
            (_, None) => true,
            (None, Some(_)) => false,
        };
        if !language_fits {
            self.selected_language = None;
        }

        let reachable = self.furthest_reachable_step();
        if self.current_step > reachable {
            self.current_step = reachable;
        }
        self
    }
}
