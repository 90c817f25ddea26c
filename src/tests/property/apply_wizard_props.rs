//! Property-based tests for the apply wizard controller
//!
//! Tests invariants:
//! - Every step before the current one is complete
//! - Faculty belongs to the selected degree
//! - Language is taught by the selected faculty
//! - Advancing never leaves an incomplete step
//! - Direct navigation never skips ahead more than one step
//! - The storage slot always mirrors the in-memory session

use proptest::prelude::*;

use crate::core::apply::{
    ApplicantType, ApplyStep, ApplyWizard, DegreeCatalog, Faculty, MemoryStore, NavigationError,
    SessionStore, TeachingLanguage, WizardSession, STORAGE_KEY,
};

// ============================================================================
// Strategies for generating applicant actions
// ============================================================================

#[derive(Debug, Clone)]
enum Action {
    SelectType(usize),
    SelectDegree(usize),
    /// Index into every faculty of the catalog, not only the selected degree's
    SelectFaculty(usize),
    SelectLanguage(usize),
    Advance,
    Retreat,
    GoTo(usize),
    Submit,
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0usize..3).prop_map(Action::SelectType),
        3 => (0usize..3).prop_map(Action::SelectDegree),
        3 => (0usize..16).prop_map(Action::SelectFaculty),
        3 => (0usize..4).prop_map(Action::SelectLanguage),
        4 => Just(Action::Advance),
        2 => Just(Action::Retreat),
        2 => (0usize..4).prop_map(Action::GoTo),
        1 => Just(Action::Submit),
    ]
}

fn arb_actions() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(arb_action(), 0..40)
}

fn all_faculties(catalog: &DegreeCatalog) -> Vec<Faculty> {
    catalog
        .degrees()
        .iter()
        .flat_map(|d| d.faculties.iter().cloned())
        .collect()
}

fn apply(wizard: &mut ApplyWizard<&MemoryStore>, catalog: &DegreeCatalog, action: &Action) {
    let faculties = all_faculties(catalog);
    match action {
        Action::SelectType(i) => wizard.select_applicant_type(ApplicantType::all()[*i]),
        Action::SelectDegree(i) => wizard.select_degree(catalog.degrees()[*i].clone()),
        Action::SelectFaculty(i) => {
            let _ = wizard.select_faculty(faculties[*i % faculties.len()].clone());
        }
        Action::SelectLanguage(i) => {
            let _ = wizard.select_language(TeachingLanguage::all()[*i]);
        }
        Action::Advance => {
            let _ = wizard.advance();
        }
        Action::Retreat => {
            let _ = wizard.retreat();
        }
        Action::GoTo(i) => {
            let _ = wizard.go_to(ApplyStep::all()[*i]);
        }
        Action::Submit => wizard.complete_submission(),
    }
}

fn assert_consistent(session: &WizardSession) -> Result<(), TestCaseError> {
    for step in ApplyStep::all() {
        if step >= session.current_step {
            break;
        }
        prop_assert!(
            session.is_step_completed(step),
            "Step '{}' is behind '{}' but incomplete",
            step,
            session.current_step
        );
    }

    if let Some(faculty) = &session.selected_faculty {
        let degree = session.selected_degree.as_ref();
        prop_assert!(degree.is_some(), "Faculty selected without a degree");
        prop_assert!(degree.map(|d| d.offers_faculty(faculty)).unwrap_or(false));
    }

    if let Some(language) = session.selected_language {
        let faculty = session.selected_faculty.as_ref();
        prop_assert!(faculty.is_some(), "Language selected without a faculty");
        prop_assert!(faculty.map(|f| f.offers(language)).unwrap_or(false));
    }
    Ok(())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Session invariants hold after every action
    #[test]
    fn prop_invariants_hold_after_any_sequence(actions in arb_actions()) {
        let catalog = DegreeCatalog::builtin();
        let store = MemoryStore::new();
        let mut wizard = ApplyWizard::restore(&store);

        for action in &actions {
            apply(&mut wizard, &catalog, action);
            assert_consistent(wizard.session())?;
        }
    }

    /// Property: Advance succeeds exactly when the current step is complete
    #[test]
    fn prop_advance_gated_by_completion(actions in arb_actions()) {
        let catalog = DegreeCatalog::builtin();
        let store = MemoryStore::new();
        let mut wizard = ApplyWizard::restore(&store);

        for action in &actions {
            apply(&mut wizard, &catalog, action);
        }

        let before = wizard.current_step();
        let could_advance = wizard.can_advance();
        match wizard.advance() {
            Ok(next) => {
                prop_assert!(could_advance);
                prop_assert_eq!(Some(next), before.next());
            }
            Err(NavigationError::AtTerminalStep) => {
                prop_assert_eq!(before, ApplyStep::Form);
                prop_assert_eq!(wizard.current_step(), before);
            }
            Err(e) => {
                prop_assert!(!could_advance, "advance failed with {} despite can_advance", e);
                prop_assert_eq!(wizard.current_step(), before);
            }
        }
    }

    /// Property: Direct navigation never lands two or more steps ahead
    #[test]
    fn prop_go_to_never_skips(actions in arb_actions(), target in 0usize..4) {
        let catalog = DegreeCatalog::builtin();
        let store = MemoryStore::new();
        let mut wizard = ApplyWizard::restore(&store);

        for action in &actions {
            apply(&mut wizard, &catalog, action);
        }

        let before = wizard.current_step().index();
        let target = ApplyStep::all()[target];
        let result = wizard.go_to(target);
        if target.index() >= before + 2 {
            prop_assert!(result.is_err());
            prop_assert_eq!(wizard.current_step().index(), before);
        }
        if target.index() <= before {
            prop_assert_eq!(result, Ok(target));
        }
    }

    /// Property: The storage slot mirrors the session, and restoring it
    /// yields the same selections
    #[test]
    fn prop_storage_mirrors_session(actions in arb_actions()) {
        let catalog = DegreeCatalog::builtin();
        let store = MemoryStore::new();
        let mut wizard = ApplyWizard::restore(&store);

        for action in &actions {
            apply(&mut wizard, &catalog, action);
        }
        let live = wizard.session().clone();
        drop(wizard);

        if let Some(raw) = store.get(STORAGE_KEY).unwrap() {
            let saved = WizardSession::from_json(&raw).unwrap();
            prop_assert_eq!(&saved, &live);
        }

        let resumed = ApplyWizard::restore(&store);
        let restored = resumed.session();
        prop_assert_eq!(restored.current_step, live.current_step);
        prop_assert_eq!(restored.applicant_type, live.applicant_type);
        prop_assert_eq!(&restored.selected_degree, &live.selected_degree);
        prop_assert_eq!(&restored.selected_faculty, &live.selected_faculty);
        prop_assert_eq!(restored.selected_language, live.selected_language);
    }
}
