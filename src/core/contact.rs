//! Contact and newsletter forms

use serde::{Deserialize, Serialize};

use super::validation::{ValidationErrors, Validator};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.required("name", &self.name)
            .min_chars("name", &self.name, 2)
            .required("email", &self.email)
            .email("email", &self.email)
            .required("subject", &self.subject)
            .min_chars("subject", &self.subject, 3)
            .required("message", &self.message)
            .min_chars("message", &self.message, 10);
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,
}

impl NewsletterSignup {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.required("email", &self.email).email("email", &self.email);
        v.finish()
    }
}
