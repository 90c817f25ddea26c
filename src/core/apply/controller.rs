//! Apply Wizard Controller
//!
//! Owns the `WizardSession`, applies the selection side effects and the
//! navigation gates, and mirrors every change to a `SessionStore`.
//!
//! Storage is best effort. A store that fails to read or write switches
//! the wizard to in-memory operation for the rest of its life; nothing is
//! surfaced to the applicant.

use chrono::Utc;
use log::{debug, info, warn};

use super::applicant::ApplicantType;
use super::catalog::{Degree, Faculty, TeachingLanguage};
use super::error::{NavigationError, SelectionError, StorageError};
use super::forms::{ApplicationForm, FormContext};
use super::session::WizardSession;
use super::step::ApplyStep;
use super::storage::SessionStore;
use crate::config::SessionConfig;

/// Time source for session timestamps
pub trait Clock {
    /// Epoch milliseconds
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Four-step apply wizard bound to a persistence port
#[derive(Debug)]
pub struct ApplyWizard<S: SessionStore, C: Clock = SystemClock> {
    session: WizardSession,
    store: S,
    clock: C,
    storage_key: String,
    ttl_ms: i64,
    persistence_degraded: bool,
}

impl<S: SessionStore> ApplyWizard<S, SystemClock> {
    /// Resume the saved session from `store`, or start fresh
    pub fn restore(store: S) -> Self {
        Self::restore_with(store, SystemClock, &SessionConfig::default())
    }
}

impl<S: SessionStore, C: Clock> ApplyWizard<S, C> {
    /// Read the storage slot once, keep it if it is readable and within
    /// the TTL, then write the resulting state back with a fresh timestamp.
    pub fn restore_with(store: S, clock: C, config: &SessionConfig) -> Self {
        let mut wizard = Self {
            session: WizardSession::default(),
            store,
            clock,
            storage_key: config.storage_key.clone(),
            ttl_ms: config.ttl_millis(),
            persistence_degraded: false,
        };
        wizard.session = wizard.load();
        wizard.persist();
        wizard
    }

    fn load(&mut self) -> WizardSession {
        let raw = match self.store.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return WizardSession::default(),
            Err(e) => {
                self.degrade(&e);
                return WizardSession::default();
            }
        };

        let saved = match WizardSession::from_json(&raw) {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Discarding unreadable apply session: {}", e);
                self.discard();
                return WizardSession::default();
            }
        };

        if saved.is_expired_at(self.clock.now_millis(), self.ttl_ms) {
            debug!("Apply session expired, starting fresh");
            self.discard();
            return WizardSession::default();
        }

        let restored = saved.clone().sanitized();
        if restored != saved {
            warn!(
                "Restored apply session was inconsistent, resuming at step '{}'",
                restored.current_step
            );
        } else {
            debug!("Restored apply session at step '{}'", restored.current_step);
        }
        restored
    }

    fn persist(&mut self) {
        self.session.timestamp = self.clock.now_millis();
        if self.persistence_degraded {
            return;
        }

        let result = self
            .session
            .to_json()
            .map_err(StorageError::from)
            .and_then(|json| self.store.set(&self.storage_key, &json));
        if let Err(e) = result {
            self.degrade(&e);
        }
    }

    fn discard(&mut self) {
        if self.persistence_degraded {
            return;
        }
        if let Err(e) = self.store.remove(&self.storage_key) {
            self.degrade(&e);
        }
    }

    fn degrade(&mut self, error: &StorageError) {
        if !self.persistence_degraded {
            warn!("Apply session will not be persisted: {}", error);
            self.persistence_degraded = true;
        }
    }

    /// A cleared selection can leave the current step ahead of what is reachable
    fn pull_back_to_reachable(&mut self) {
        let reachable = self.session.furthest_reachable_step();
        if self.session.current_step > reachable {
            debug!(
                "Selection change moved apply wizard back from '{}' to '{}'",
                self.session.current_step, reachable
            );
            self.session.current_step = reachable;
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn current_step(&self) -> ApplyStep {
        self.session.current_step
    }

    pub fn applicant_type(&self) -> Option<ApplicantType> {
        self.session.applicant_type
    }

    pub fn selected_degree(&self) -> Option<&Degree> {
        self.session.selected_degree.as_ref()
    }

    pub fn selected_faculty(&self) -> Option<&Faculty> {
        self.session.selected_faculty.as_ref()
    }

    pub fn selected_language(&self) -> Option<TeachingLanguage> {
        self.session.selected_language
    }

    /// Faculties of the selected degree, for the faculty step
    pub fn faculty_options(&self) -> &[Faculty] {
        self.session
            .selected_degree
            .as_ref()
            .map(|d| d.faculties.as_slice())
            .unwrap_or(&[])
    }

    /// Teaching languages of the selected faculty, for the faculty step
    pub fn language_options(&self) -> Vec<TeachingLanguage> {
        self.session
            .selected_faculty
            .as_ref()
            .map(Faculty::language_options)
            .unwrap_or_default()
    }

    pub fn is_step_completed(&self, step: ApplyStep) -> bool {
        self.session.is_step_completed(step)
    }

    pub fn is_step_accessible(&self, step: ApplyStep) -> bool {
        self.session.is_step_accessible(step)
    }

    pub fn can_advance(&self) -> bool {
        let current = self.session.current_step;
        !current.is_terminal() && self.session.is_step_completed(current)
    }

    pub fn can_retreat(&self) -> bool {
        self.session.current_step.previous().is_some()
    }

    pub fn is_persistence_degraded(&self) -> bool {
        self.persistence_degraded
    }

    /// Read-only program context for the terminal form
    pub fn form_context(&self) -> Option<FormContext> {
        let degree = self.session.selected_degree.as_ref()?;
        let faculty = self.session.selected_faculty.as_ref()?;
        let language = self.session.selected_language?;

        Some(FormContext {
            faculty_id: faculty.id,
            faculty_name: faculty.name.clone(),
            degree_id: degree.id,
            degree_name: degree.name.clone(),
            teaching_language: language,
        })
    }

    /// Terminal form for the current applicant type, once on the form step
    pub fn terminal_form(&self) -> Option<ApplicationForm> {
        if self.session.current_step != ApplyStep::Form {
            return None;
        }
        let applicant_type = self.session.applicant_type?;
        ApplicationForm::for_applicant(applicant_type, self.form_context()?)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ------------------------------------------------------------------
    // Selections
    // ------------------------------------------------------------------

    /// Degree, faculty and language survive a change of applicant type
    pub fn select_applicant_type(&mut self, applicant_type: ApplicantType) {
        self.session.applicant_type = Some(applicant_type);
        self.persist();
    }

    /// Faculty and language depend on the degree and are cleared
    pub fn select_degree(&mut self, degree: Degree) {
        self.session.selected_degree = Some(degree);
        self.session.selected_faculty = None;
        self.session.selected_language = None;
        self.pull_back_to_reachable();
        self.persist();
    }

    /// Language depends on the faculty and is cleared
    pub fn select_faculty(&mut self, faculty: Faculty) -> Result<(), SelectionError> {
        let degree = self
            .session
            .selected_degree
            .as_ref()
            .ok_or(SelectionError::NoDegreeSelected)?;
        let offered = degree
            .faculty(faculty.id)
            .cloned()
            .ok_or(SelectionError::FacultyNotInDegree {
                faculty_id: faculty.id,
                degree_id: degree.id,
            })?;

        self.session.selected_faculty = Some(offered);
        self.session.selected_language = None;
        self.pull_back_to_reachable();
        self.persist();
        Ok(())
    }

    pub fn select_language(&mut self, language: TeachingLanguage) -> Result<(), SelectionError> {
        let faculty = self
            .session
            .selected_faculty
            .as_ref()
            .ok_or(SelectionError::NoFacultySelected)?;
        if !faculty.offers(language) {
            return Err(SelectionError::LanguageNotOffered {
                language,
                faculty_id: faculty.id,
            });
        }

        self.session.selected_language = Some(language);
        self.persist();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Move one step forward if the current step is complete
    pub fn advance(&mut self) -> Result<ApplyStep, NavigationError> {
        let current = self.session.current_step;
        let next = current.next().ok_or(NavigationError::AtTerminalStep)?;
        if !self.session.is_step_completed(current) {
            return Err(NavigationError::StepIncomplete(current));
        }

        self.session.current_step = next;
        self.persist();
        Ok(next)
    }

    /// Move one step back. Selections are kept.
    pub fn retreat(&mut self) -> Result<ApplyStep, NavigationError> {
        let previous = self
            .session
            .current_step
            .previous()
            .ok_or(NavigationError::AtFirstStep)?;

        self.session.current_step = previous;
        self.persist();
        Ok(previous)
    }

    /// Step indicator click
    pub fn go_to(&mut self, step: ApplyStep) -> Result<ApplyStep, NavigationError> {
        let current = self.session.current_step;
        if !self.session.is_step_accessible(step) {
            return Err(NavigationError::StepLocked {
                from: current,
                to: step,
            });
        }
        if step != current {
            self.session.current_step = step;
            self.persist();
        }
        Ok(step)
    }

    /// Terminal form reported success: drop the slot and start over
    pub fn complete_submission(&mut self) {
        info!(
            "Application submitted ({:?}), resetting wizard",
            self.session.applicant_type
        );
        self.session = WizardSession::default();
        self.discard();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::apply::session::SESSION_TTL_MS;
    use crate::core::apply::storage::{MemoryStore, MockSessionStore};
    use std::cell::Cell;

    const KEY: &str = "apply_form_state";

    struct FixedClock(Cell<i64>);

    impl FixedClock {
        fn at(ms: i64) -> Self {
            Self(Cell::new(ms))
        }
    }

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.0.get()
        }
    }

    impl Clock for &FixedClock {
        fn now_millis(&self) -> i64 {
            self.0.get()
        }
    }

    fn bachelor() -> Degree {
        Degree::new(
            1,
            "Bachelor's Degree",
            vec![
                Faculty::new(101, "Computer Science", vec![TeachingLanguage::En, TeachingLanguage::Pl]),
                Faculty::new(102, "Business Administration", vec![TeachingLanguage::En]),
            ],
        )
    }

    fn master() -> Degree {
        Degree::new(2, "Master's Degree", vec![Faculty::new(201, "Data Science", vec![])])
    }

    fn fresh<'a>(
        store: &'a MemoryStore,
        clock: &'a FixedClock,
    ) -> ApplyWizard<&'a MemoryStore, &'a FixedClock> {
        ApplyWizard::restore_with(store, clock, &SessionConfig::default())
    }

    fn at_faculty_step<'a>(
        store: &'a MemoryStore,
        clock: &'a FixedClock,
    ) -> ApplyWizard<&'a MemoryStore, &'a FixedClock> {
        let mut wizard = fresh(store, clock);
        wizard.select_applicant_type(ApplicantType::Student);
        wizard.advance().unwrap();
        wizard.select_degree(bachelor());
        wizard.advance().unwrap();
        wizard
    }

    #[test]
    fn test_fresh_wizard_defaults() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let wizard = fresh(&store, &clock);
        assert_eq!(wizard.session(), &WizardSession::default());
        assert!(!wizard.can_advance());
        assert!(!wizard.can_retreat());
        assert!(!wizard.is_persistence_degraded());
    }

    #[test]
    fn test_advance_refused_when_incomplete() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = fresh(&store, &clock);
        assert_eq!(
            wizard.advance(),
            Err(NavigationError::StepIncomplete(ApplyStep::Type))
        );
        assert_eq!(wizard.current_step(), ApplyStep::Type);
    }

    #[test]
    fn test_faculty_step_needs_language_to_advance() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = at_faculty_step(&store, &clock);
        wizard.select_faculty(bachelor().faculties[0].clone()).unwrap();
        assert_eq!(
            wizard.advance(),
            Err(NavigationError::StepIncomplete(ApplyStep::Faculty))
        );

        wizard.select_language(TeachingLanguage::En).unwrap();
        assert_eq!(wizard.advance(), Ok(ApplyStep::Form));
    }

    #[test]
    fn test_no_advance_from_form() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = at_faculty_step(&store, &clock);
        wizard.select_faculty(bachelor().faculties[1].clone()).unwrap();
        wizard.select_language(TeachingLanguage::En).unwrap();
        wizard.advance().unwrap();

        assert!(!wizard.can_advance());
        assert_eq!(wizard.advance(), Err(NavigationError::AtTerminalStep));
        assert_eq!(wizard.current_step(), ApplyStep::Form);
    }

    #[test]
    fn test_retreat_is_unconditional() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = at_faculty_step(&store, &clock);
        assert_eq!(wizard.retreat(), Ok(ApplyStep::Degree));
        assert_eq!(wizard.retreat(), Ok(ApplyStep::Type));
        assert_eq!(wizard.retreat(), Err(NavigationError::AtFirstStep));
        assert!(wizard.selected_degree().is_some());
    }

    #[test]
    fn test_degree_change_clears_faculty_and_language() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = at_faculty_step(&store, &clock);
        wizard.select_faculty(bachelor().faculties[0].clone()).unwrap();
        wizard.select_language(TeachingLanguage::Pl).unwrap();

        wizard.select_degree(master());
        assert!(wizard.selected_faculty().is_none());
        assert!(wizard.selected_language().is_none());
        assert_eq!(wizard.faculty_options().len(), 1);
    }

    #[test]
    fn test_faculty_change_clears_language() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = at_faculty_step(&store, &clock);
        wizard.select_faculty(bachelor().faculties[0].clone()).unwrap();
        wizard.select_language(TeachingLanguage::En).unwrap();

        wizard.select_faculty(bachelor().faculties[1].clone()).unwrap();
        assert!(wizard.selected_language().is_none());
    }

    #[test]
    fn test_degree_change_on_form_step_pulls_back_to_faculty() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = at_faculty_step(&store, &clock);
        wizard.select_faculty(bachelor().faculties[0].clone()).unwrap();
        wizard.select_language(TeachingLanguage::En).unwrap();
        wizard.advance().unwrap();
        assert_eq!(wizard.current_step(), ApplyStep::Form);

        wizard.select_degree(master());
        assert_eq!(wizard.current_step(), ApplyStep::Faculty);
        assert!(wizard.terminal_form().is_none());

        let saved = WizardSession::from_json(&store.get(KEY).unwrap().unwrap()).unwrap();
        assert_eq!(saved.current_step, ApplyStep::Faculty);
    }

    #[test]
    fn test_faculty_change_on_form_step_pulls_back_to_faculty() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = at_faculty_step(&store, &clock);
        wizard.select_faculty(bachelor().faculties[0].clone()).unwrap();
        wizard.select_language(TeachingLanguage::En).unwrap();
        wizard.advance().unwrap();

        wizard.select_faculty(bachelor().faculties[1].clone()).unwrap();
        assert_eq!(wizard.current_step(), ApplyStep::Faculty);
        assert!(!wizard.can_advance());
    }

    #[test]
    fn test_degree_change_on_faculty_step_stays_put() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = at_faculty_step(&store, &clock);

        wizard.select_degree(master());
        assert_eq!(wizard.current_step(), ApplyStep::Faculty);
    }

    #[test]
    fn test_type_change_keeps_downstream_selections() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = at_faculty_step(&store, &clock);
        wizard.select_faculty(bachelor().faculties[0].clone()).unwrap();
        wizard.select_language(TeachingLanguage::En).unwrap();

        wizard.select_applicant_type(ApplicantType::Agency);
        assert_eq!(wizard.selected_degree().map(|d| d.id), Some(1));
        assert_eq!(wizard.selected_faculty().map(|f| f.id), Some(101));
        assert_eq!(wizard.selected_language(), Some(TeachingLanguage::En));
    }

    #[test]
    fn test_faculty_must_belong_to_degree() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = fresh(&store, &clock);
        assert_eq!(
            wizard.select_faculty(bachelor().faculties[0].clone()),
            Err(SelectionError::NoDegreeSelected)
        );

        wizard.select_degree(bachelor());
        assert_eq!(
            wizard.select_faculty(Faculty::new(201, "Data Science", vec![])),
            Err(SelectionError::FacultyNotInDegree {
                faculty_id: 201,
                degree_id: 1
            })
        );
    }

    #[test]
    fn test_language_must_be_taught() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = at_faculty_step(&store, &clock);
        assert_eq!(
            wizard.select_language(TeachingLanguage::En),
            Err(SelectionError::NoFacultySelected)
        );

        wizard.select_faculty(bachelor().faculties[1].clone()).unwrap();
        assert!(matches!(
            wizard.select_language(TeachingLanguage::Ru),
            Err(SelectionError::LanguageNotOffered { .. })
        ));
        assert_eq!(wizard.language_options(), vec![TeachingLanguage::En]);
    }

    #[test]
    fn test_go_to_rules() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = fresh(&store, &clock);
        assert_eq!(wizard.go_to(ApplyStep::Type), Ok(ApplyStep::Type));
        assert!(matches!(
            wizard.go_to(ApplyStep::Degree),
            Err(NavigationError::StepLocked { .. })
        ));

        wizard.select_applicant_type(ApplicantType::Transfer);
        wizard.select_degree(bachelor());
        assert!(wizard.go_to(ApplyStep::Faculty).is_err());
        assert_eq!(wizard.go_to(ApplyStep::Degree), Ok(ApplyStep::Degree));
        assert_eq!(wizard.go_to(ApplyStep::Faculty), Ok(ApplyStep::Faculty));
        assert_eq!(wizard.go_to(ApplyStep::Type), Ok(ApplyStep::Type));
    }

    #[test]
    fn test_every_change_is_persisted_with_timestamp() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(5_000);
        let mut wizard = fresh(&store, &clock);
        clock.0.set(6_000);
        wizard.select_applicant_type(ApplicantType::Student);

        let saved = WizardSession::from_json(&store.get(KEY).unwrap().unwrap()).unwrap();
        assert_eq!(saved.applicant_type, Some(ApplicantType::Student));
        assert_eq!(saved.timestamp, 6_000);
    }

    #[test]
    fn test_restore_within_ttl() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = at_faculty_step(&store, &clock);
        wizard.select_faculty(bachelor().faculties[0].clone()).unwrap();
        wizard.select_language(TeachingLanguage::Pl).unwrap();
        let before = wizard.session().clone();
        drop(wizard);

        clock.0.set(SESSION_TTL_MS);
        let resumed = fresh(&store, &clock);
        assert_eq!(resumed.current_step(), ApplyStep::Faculty);
        assert_eq!(resumed.session().applicant_type, before.applicant_type);
        assert_eq!(resumed.session().selected_degree, before.selected_degree);
        assert_eq!(resumed.session().selected_faculty, before.selected_faculty);
        assert_eq!(resumed.session().selected_language, before.selected_language);
    }

    #[test]
    fn test_restore_after_ttl_starts_fresh() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        drop(at_faculty_step(&store, &clock));

        clock.0.set(SESSION_TTL_MS + 1);
        let wizard = fresh(&store, &clock);
        assert_eq!(wizard.session().current_step, ApplyStep::Type);
        assert!(wizard.applicant_type().is_none());
        assert!(wizard.selected_degree().is_none());
    }

    #[test]
    fn test_corrupt_entry_starts_fresh() {
        let store = MemoryStore::with_entry(KEY, "{not json");
        let clock = FixedClock::at(0);
        let wizard = fresh(&store, &clock);
        assert_eq!(wizard.session().current_step, ApplyStep::Type);
        assert!(!wizard.is_persistence_degraded());

        let rewritten = store.get(KEY).unwrap().unwrap();
        assert!(WizardSession::from_json(&rewritten).is_ok());
    }

    #[test]
    fn test_complete_submission_resets_and_clears_slot() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = at_faculty_step(&store, &clock);
        wizard.complete_submission();

        assert_eq!(wizard.session().current_step, ApplyStep::Type);
        assert!(wizard.applicant_type().is_none());
        assert!(wizard.selected_degree().is_none());
        assert!(!store.contains(KEY));
    }

    #[test]
    fn test_terminal_form_dispatch() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(0);
        let mut wizard = at_faculty_step(&store, &clock);
        wizard.select_faculty(bachelor().faculties[0].clone()).unwrap();
        wizard.select_language(TeachingLanguage::En).unwrap();
        assert!(wizard.terminal_form().is_none());

        wizard.advance().unwrap();
        let form = wizard.terminal_form().unwrap();
        assert_eq!(form.applicant_type(), ApplicantType::Student);
        assert_eq!(form.context().faculty_name, "Computer Science");
        assert_eq!(form.context().degree_id, 1);

        wizard.select_applicant_type(ApplicantType::Agency);
        assert_eq!(
            wizard.terminal_form().map(|f| f.applicant_type()),
            Some(ApplicantType::Agency)
        );
    }

    #[test]
    fn test_unreadable_store_degrades_to_memory() {
        let mut store = MockSessionStore::new();
        store
            .expect_get()
            .returning(|_| Err(StorageError::Unavailable("disabled".to_string())));
        store.expect_set().never();
        store.expect_remove().never();

        let mut wizard = ApplyWizard::restore_with(store, FixedClock::at(0), &SessionConfig::default());
        assert!(wizard.is_persistence_degraded());

        wizard.select_applicant_type(ApplicantType::Student);
        assert_eq!(wizard.advance(), Ok(ApplyStep::Degree));
        wizard.complete_submission();
        assert_eq!(wizard.current_step(), ApplyStep::Type);
    }

    #[test]
    fn test_failed_write_degrades_once() {
        let mut store = MockSessionStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_set()
            .times(1)
            .returning(|_, _| Err(StorageError::Unavailable("quota exceeded".to_string())));
        store.expect_remove().never();

        let mut wizard = ApplyWizard::restore_with(store, FixedClock::at(0), &SessionConfig::default());
        assert!(wizard.is_persistence_degraded());

        wizard.select_applicant_type(ApplicantType::Agency);
        wizard.select_degree(bachelor());
        assert_eq!(wizard.advance(), Ok(ApplyStep::Degree));
    }

    #[test]
    fn test_custom_storage_key() {
        let store = MemoryStore::new();
        let config = SessionConfig {
            storage_key: "must_apply".to_string(),
            ttl_minutes: 5,
        };
        let mut wizard = ApplyWizard::restore_with(&store, FixedClock::at(0), &config);
        wizard.select_applicant_type(ApplicantType::Student);
        assert!(store.contains("must_apply"));
        assert!(!store.contains(KEY));
    }
}
