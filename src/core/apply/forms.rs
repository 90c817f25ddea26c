//! Terminal Application Forms
//!
//! One form per applicant type. All three receive the same read-only
//! `FormContext` from the wizard and keep their own field sets.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::applicant::ApplicantType;
use super::catalog::TeachingLanguage;
use crate::core::validation::{ValidationErrors, Validator};

/// Bounds for `TransferApplication::completed_semesters`
pub const MIN_COMPLETED_SEMESTERS: u32 = 1;
pub const MAX_COMPLETED_SEMESTERS: u32 = 12;

/// Program the applicant picked in the earlier steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormContext {
    pub faculty_id: u32,
    pub faculty_name: String,
    pub degree_id: u32,
    pub degree_name: String,
    pub teaching_language: TeachingLanguage,
}

impl FormContext {
    /// "Computer Science, Bachelor's Degree (EN)"
    pub fn program_label(&self) -> String {
        format!(
            "{}, {} ({})",
            self.faculty_name, self.degree_name, self.teaching_language
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentApplication {
    pub context: FormContext,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub previous_education: String,
    pub message: Option<String>,
}

impl StudentApplication {
    pub fn new(context: FormContext) -> Self {
        Self {
            context,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            nationality: String::new(),
            date_of_birth: String::new(),
            previous_education: String::new(),
            message: None,
        }
    }

    pub fn validate_at(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.required("firstName", &self.first_name)
            .min_chars("firstName", &self.first_name, 2)
            .required("lastName", &self.last_name)
            .min_chars("lastName", &self.last_name, 2)
            .required("email", &self.email)
            .email("email", &self.email)
            .required("phone", &self.phone)
            .phone("phone", &self.phone)
            .required("nationality", &self.nationality)
            .required("dateOfBirth", &self.date_of_birth)
            .past_date("dateOfBirth", &self.date_of_birth, today)
            .required("previousEducation", &self.previous_education);
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyApplication {
    pub context: FormContext,
    pub agency_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub student_name: String,
    pub student_email: String,
    pub message: Option<String>,
}

impl AgencyApplication {
    pub fn new(context: FormContext) -> Self {
        Self {
            context,
            agency_name: String::new(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            country: String::new(),
            student_name: String::new(),
            student_email: String::new(),
            message: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.required("agencyName", &self.agency_name)
            .min_chars("agencyName", &self.agency_name, 2)
            .required("contactPerson", &self.contact_person)
            .min_chars("contactPerson", &self.contact_person, 2)
            .required("email", &self.email)
            .email("email", &self.email)
            .required("phone", &self.phone)
            .phone("phone", &self.phone)
            .required("country", &self.country)
            .required("studentName", &self.student_name)
            .min_chars("studentName", &self.student_name, 2)
            .required("studentEmail", &self.student_email)
            .email("studentEmail", &self.student_email);
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferApplication {
    pub context: FormContext,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub current_university: String,
    pub current_program: String,
    pub completed_semesters: u32,
    pub message: Option<String>,
}

impl TransferApplication {
    pub fn new(context: FormContext) -> Self {
        Self {
            context,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            current_university: String::new(),
            current_program: String::new(),
            completed_semesters: MIN_COMPLETED_SEMESTERS,
            message: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.required("firstName", &self.first_name)
            .min_chars("firstName", &self.first_name, 2)
            .required("lastName", &self.last_name)
            .min_chars("lastName", &self.last_name, 2)
            .required("email", &self.email)
            .email("email", &self.email)
            .required("phone", &self.phone)
            .phone("phone", &self.phone)
            .required("currentUniversity", &self.current_university)
            .required("currentProgram", &self.current_program)
            .range(
                "completedSemesters",
                self.completed_semesters,
                MIN_COMPLETED_SEMESTERS,
                MAX_COMPLETED_SEMESTERS,
            );
        v.finish()
    }
}

/// Terminal form, tagged by applicant type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "applicantType", rename_all = "lowercase")]
pub enum ApplicationForm {
    Student(StudentApplication),
    Agency(AgencyApplication),
    Transfer(TransferApplication),
}

type FormBuilder = fn(FormContext) -> ApplicationForm;

fn build_student(context: FormContext) -> ApplicationForm {
    ApplicationForm::Student(StudentApplication::new(context))
}

fn build_agency(context: FormContext) -> ApplicationForm {
    ApplicationForm::Agency(AgencyApplication::new(context))
}

fn build_transfer(context: FormContext) -> ApplicationForm {
    ApplicationForm::Transfer(TransferApplication::new(context))
}

/// Applicant type to form constructor
const FORM_BUILDERS: [(ApplicantType, FormBuilder); 3] = [
    (ApplicantType::Student, build_student),
    (ApplicantType::Agency, build_agency),
    (ApplicantType::Transfer, build_transfer),
];

impl ApplicationForm {
    /// Empty form for `applicant_type`, pre-filled with the program context
    pub fn for_applicant(applicant_type: ApplicantType, context: FormContext) -> Option<Self> {
        FORM_BUILDERS
            .iter()
            .find(|(kind, _)| *kind == applicant_type)
            .map(|(_, build)| build(context))
    }

    pub fn applicant_type(&self) -> ApplicantType {
        match self {
            ApplicationForm::Student(_) => ApplicantType::Student,
            ApplicationForm::Agency(_) => ApplicantType::Agency,
            ApplicationForm::Transfer(_) => ApplicantType::Transfer,
        }
    }

    pub fn context(&self) -> &FormContext {
        match self {
            ApplicationForm::Student(form) => &form.context,
            ApplicationForm::Agency(form) => &form.context,
            ApplicationForm::Transfer(form) => &form.context,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_at(Utc::now().date_naive())
    }

    pub fn validate_at(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        match self {
            ApplicationForm::Student(form) => form.validate_at(today),
            ApplicationForm::Agency(form) => form.validate(),
            ApplicationForm::Transfer(form) => form.validate(),
        }
    }

    /// JSON body handed to the submission handler
    pub fn payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
