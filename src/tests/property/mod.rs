//! Property-based tests for the apply wizard
//!
//! Property tests verify invariants that should hold for every sequence of
//! applicant actions, rather than for hand-picked walkthroughs.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `apply_wizard_props`: random action sequences against `ApplyWizard`
//!   - Every step before the current one is complete
//!   - Faculty belongs to the degree, language is taught by the faculty
//!   - Advancing never leaves an incomplete step
//!   - Direct navigation never skips ahead more than one step
//!   - The storage slot always mirrors the in-memory session
//!
//! - `validation_props`: field validators
//!   - Whitespace-padded input validates like the trimmed input
//!   - Strings without `@` are never emails
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod apply_wizard_props;
mod validation_props;
