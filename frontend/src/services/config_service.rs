//! Admissions configuration, embedded at build time.

use leptos::prelude::*;
use must_admissions::config::AdmissionsConfig;

const ADMISSIONS_TOML: &str = include_str!("../../admissions.toml");

/// Parsed embedded config, or defaults if it fails to parse
pub fn load_admissions_config() -> AdmissionsConfig {
    AdmissionsConfig::load_or_default(ADMISSIONS_TOML)
}

pub fn provide_admissions_config() {
    provide_context(load_admissions_config());
}

/// Falls back to the embedded file when no provider is mounted
pub fn use_admissions_config() -> AdmissionsConfig {
    use_context::<AdmissionsConfig>().unwrap_or_else(load_admissions_config)
}
