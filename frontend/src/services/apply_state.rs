//! Apply Wizard State Management
//!
//! Wraps the core `ApplyWizard` in a Leptos signal and exposes it to the
//! component tree through context. Every action goes through the core
//! controller, which writes the session to `sessionStorage` itself.
//!
//! # Architecture
//! - `ApplyContext` - reactive container shared by the wizard components
//! - Context provider pattern for component tree access

use leptos::prelude::*;
use must_admissions::config::AdmissionsConfig;
use must_admissions::core::apply::{
    ApplicantType, ApplicationForm, ApplyStep, ApplyWizard, Degree, DegreeCatalog, Faculty,
    FormContext, SystemClock, TeachingLanguage,
};

use super::session_storage::BrowserSessionStore;

pub type BrowserApplyWizard = ApplyWizard<BrowserSessionStore>;

// ============================================================================
// Apply Context - Reactive State Management
// ============================================================================

/// Reactive context for the apply wizard
#[derive(Clone, Copy)]
pub struct ApplyContext {
    pub wizard: RwSignal<BrowserApplyWizard>,
    pub catalog: StoredValue<DegreeCatalog>,
    pub config: StoredValue<AdmissionsConfig>,
    /// Last rejected action, shown above the current step
    pub error: RwSignal<Option<String>>,
    /// Set after a successful submission until the banner times out
    pub submitted: RwSignal<bool>,
}

impl ApplyContext {
    /// Restore the tab's saved session (or start fresh) with `config`
    pub fn new(config: AdmissionsConfig) -> Self {
        let wizard = ApplyWizard::restore_with(BrowserSessionStore, SystemClock, &config.session);
        Self {
            wizard: RwSignal::new(wizard),
            catalog: StoredValue::new(DegreeCatalog::builtin()),
            config: StoredValue::new(config),
            error: RwSignal::new(None),
            submitted: RwSignal::new(false),
        }
    }

    pub fn current_step(&self) -> ApplyStep {
        self.wizard.with(|w| w.current_step())
    }

    pub fn applicant_type(&self) -> Option<ApplicantType> {
        self.wizard.with(|w| w.applicant_type())
    }

    pub fn selected_degree_id(&self) -> Option<u32> {
        self.wizard.with(|w| w.selected_degree().map(|d| d.id))
    }

    pub fn selected_faculty_id(&self) -> Option<u32> {
        self.wizard.with(|w| w.selected_faculty().map(|f| f.id))
    }

    pub fn selected_language(&self) -> Option<TeachingLanguage> {
        self.wizard.with(|w| w.selected_language())
    }

    pub fn degrees(&self) -> Vec<Degree> {
        self.catalog.with_value(|c| c.degrees().to_vec())
    }

    pub fn faculty_options(&self) -> Vec<Faculty> {
        self.wizard.with(|w| w.faculty_options().to_vec())
    }

    pub fn language_options(&self) -> Vec<TeachingLanguage> {
        self.wizard.with(|w| w.language_options())
    }

    pub fn is_step_completed(&self, step: ApplyStep) -> bool {
        self.wizard.with(|w| w.is_step_completed(step))
    }

    pub fn is_step_accessible(&self, step: ApplyStep) -> bool {
        self.wizard.with(|w| w.is_step_accessible(step))
    }

    pub fn can_advance(&self) -> bool {
        self.wizard.with(|w| w.can_advance())
    }

    pub fn can_retreat(&self) -> bool {
        self.wizard.with(|w| w.can_retreat())
    }

    pub fn form_context(&self) -> Option<FormContext> {
        self.wizard.with(|w| w.form_context())
    }

    pub fn terminal_form(&self) -> Option<ApplicationForm> {
        self.wizard.with(|w| w.terminal_form())
    }

    /// Progress through the wizard, 0 to 100
    pub fn progress_percent(&self) -> u8 {
        let steps = ApplyStep::all().len() as f32;
        (((self.current_step().index() + 1) as f32 / steps) * 100.0) as u8
    }

    pub fn set_error(&self, msg: String) {
        self.error.set(Some(msg));
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    // ========================================================================
    // Actions
    // ========================================================================

    pub fn select_applicant_type(&self, applicant_type: ApplicantType) {
        self.clear_error();
        self.submitted.set(false);
        self.wizard.update(|w| w.select_applicant_type(applicant_type));
    }

    pub fn select_degree(&self, degree: Degree) {
        self.clear_error();
        self.wizard.update(|w| w.select_degree(degree));
    }

    pub fn select_faculty(&self, faculty: Faculty) {
        let result = self.wizard.try_update(|w| w.select_faculty(faculty));
        self.report(result);
    }

    pub fn select_language(&self, language: TeachingLanguage) {
        let result = self.wizard.try_update(|w| w.select_language(language));
        self.report(result);
    }

    pub fn advance(&self) {
        let result = self.wizard.try_update(|w| w.advance().map(|_| ()));
        self.report(result);
    }

    pub fn retreat(&self) {
        let result = self.wizard.try_update(|w| w.retreat().map(|_| ()));
        self.report(result);
    }

    pub fn go_to(&self, step: ApplyStep) {
        let result = self.wizard.try_update(|w| w.go_to(step).map(|_| ()));
        self.report(result);
    }

    /// Called by the terminal form once its submission succeeded
    pub fn complete_submission(&self) {
        self.clear_error();
        self.wizard.update(|w| w.complete_submission());
        self.submitted.set(true);
    }

    fn report<E: std::fmt::Display>(&self, result: Option<Result<(), E>>) {
        match result {
            Some(Ok(())) => self.clear_error(),
            Some(Err(e)) => {
                log::debug!("Apply wizard rejected action: {}", e);
                self.set_error(e.to_string());
            }
            None => {}
        }
    }
}

/// Provide apply context to the component tree
pub fn provide_apply_context(config: AdmissionsConfig) -> ApplyContext {
    let ctx = ApplyContext::new(config);
    provide_context(ctx);
    ctx
}

/// Use the apply context from anywhere in the tree
pub fn use_apply_context() -> ApplyContext {
    expect_context::<ApplyContext>()
}
