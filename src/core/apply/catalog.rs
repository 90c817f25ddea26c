//! Degree Catalog
//!
//! Degrees, the faculties each one offers, and the teaching languages a
//! faculty runs its programs in. The wizard stores these by value so a
//! restored session does not depend on the catalog that produced it.

use serde::{Deserialize, Serialize};

/// Language a program is taught in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TeachingLanguage {
    En,
    Pl,
    Ru,
    Tr,
}

impl TeachingLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            TeachingLanguage::En => "EN",
            TeachingLanguage::Pl => "PL",
            TeachingLanguage::Ru => "RU",
            TeachingLanguage::Tr => "TR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeachingLanguage::En => "English",
            TeachingLanguage::Pl => "Polish",
            TeachingLanguage::Ru => "Russian",
            TeachingLanguage::Tr => "Turkish",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            TeachingLanguage::En,
            TeachingLanguage::Pl,
            TeachingLanguage::Ru,
            TeachingLanguage::Tr,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl std::fmt::Display for TeachingLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Faculty within a degree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: u32,
    pub name: String,
    /// Empty means the faculty accepts every teaching language
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<TeachingLanguage>,
}

impl Faculty {
    pub fn new(id: u32, name: impl Into<String>, languages: Vec<TeachingLanguage>) -> Self {
        Self {
            id,
            name: name.into(),
            languages,
        }
    }

    pub fn offers(&self, language: TeachingLanguage) -> bool {
        self.languages.is_empty() || self.languages.contains(&language)
    }

    /// Languages to present in the selector
    pub fn language_options(&self) -> Vec<TeachingLanguage> {
        if self.languages.is_empty() {
            TeachingLanguage::all()
        } else {
            self.languages.clone()
        }
    }
}

/// Degree level with its faculties, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    pub id: u32,
    pub name: String,
    pub faculties: Vec<Faculty>,
}

impl Degree {
    pub fn new(id: u32, name: impl Into<String>, faculties: Vec<Faculty>) -> Self {
        Self {
            id,
            name: name.into(),
            faculties,
        }
    }

    pub fn faculty(&self, faculty_id: u32) -> Option<&Faculty> {
        self.faculties.iter().find(|f| f.id == faculty_id)
    }

    pub fn offers_faculty(&self, faculty: &Faculty) -> bool {
        self.faculty(faculty.id).is_some()
    }
}

/// Ordered degree list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DegreeCatalog {
    degrees: Vec<Degree>,
}

impl DegreeCatalog {
    pub fn new(degrees: Vec<Degree>) -> Self {
        Self { degrees }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn degrees(&self) -> &[Degree] {
        &self.degrees
    }

    pub fn degree(&self, degree_id: u32) -> Option<&Degree> {
        self.degrees.iter().find(|d| d.id == degree_id)
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Programs currently open for admission
    pub fn builtin() -> Self {
        use TeachingLanguage::{En, Pl, Ru, Tr};

        Self::new(vec![
            Degree::new(
                1,
                "Bachelor's Degree",
                vec![
                    Faculty::new(101, "Computer Science", vec![En, Pl]),
                    Faculty::new(102, "Business Administration", vec![En, Pl, Ru]),
                    Faculty::new(103, "International Relations", vec![En, Tr]),
                    Faculty::new(104, "Psychology", vec![En, Pl]),
                    Faculty::new(105, "Architecture", vec![En]),
                ],
            ),
            Degree::new(
                2,
                "Master's Degree",
                vec![
                    Faculty::new(201, "Data Science", vec![En]),
                    Faculty::new(202, "Management", vec![En, Pl, Ru]),
                    Faculty::new(203, "International Relations", vec![En, Tr]),
                    Faculty::new(204, "Finance and Accounting", vec![En, Pl]),
                ],
            ),
            Degree::new(
                3,
                "Doctoral Degree (PhD)",
                vec![
                    Faculty::new(301, "Economics", vec![En]),
                    Faculty::new(302, "Computer Science", vec![En, Pl]),
                ],
            ),
        ])
    }
}
