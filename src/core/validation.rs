//! Field validation shared by the application, contact and newsletter forms.
//!
//! Each field reports at most one error, the first rule it fails.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Matches `local@domain.tld` with no whitespace
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});

/// Digits, spaces, `+ - ( )`; optional leading plus
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9 ()\-]+$").expect("Invalid phone regex")
});

/// Length bounds of a phone number, leading plus included
const PHONE_LEN: std::ops::RangeInclusive<usize> = 7..=20;

/// One failed field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All failed fields of one form
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for one field, if it failed
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.message_for(field).is_some()
    }
}

/// Accumulates field errors for one form
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    fn fail(&mut self, field: &'static str, message: impl Into<String>) {
        if !self.has_error(field) {
            self.errors.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    pub fn required(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.fail(field, "This field is required");
        }
        self
    }

    pub fn min_chars(&mut self, field: &'static str, value: &str, min: usize) -> &mut Self {
        if value.trim().chars().count() < min {
            self.fail(field, format!("Must be at least {} characters", min));
        }
        self
    }

    pub fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if !is_valid_email(value) {
            self.fail(field, "Enter a valid email address");
        }
        self
    }

    pub fn phone(&mut self, field: &'static str, value: &str) -> &mut Self {
        if !is_valid_phone(value) {
            self.fail(field, "Enter a valid phone number");
        }
        self
    }

    /// `YYYY-MM-DD`, strictly before `today`
    pub fn past_date(&mut self, field: &'static str, value: &str, today: NaiveDate) -> &mut Self {
        match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
            Ok(date) if date < today => {}
            Ok(_) => self.fail(field, "Date must be in the past"),
            Err(_) => self.fail(field, "Use the format YYYY-MM-DD"),
        }
        self
    }

    pub fn range(&mut self, field: &'static str, value: u32, min: u32, max: u32) -> &mut Self {
        if value < min || value > max {
            self.fail(field, format!("Must be between {} and {}", min, max));
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    PHONE_LEN.contains(&value.chars().count()) && PHONE_PATTERN.is_match(value)
}
