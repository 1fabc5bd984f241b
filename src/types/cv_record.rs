// src/types/cv_record.rs
//! CV record model shared by the API layer and the text report

use anyhow::Result;
use serde_json::{Map, Value};
use std::fmt;

/// The fixed vocabulary of CV sections, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Personal,
    CoreCompetencies,
    ProfessionalExperience,
    PersonalProjects,
    Education,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Personal,
        Section::CoreCompetencies,
        Section::ProfessionalExperience,
        Section::PersonalProjects,
        Section::Education,
    ];

    /// Key of the section inside a CV document
    pub fn key(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::CoreCompetencies => "Core Competencies",
            Self::ProfessionalExperience => "Professional Experience",
            Self::PersonalProjects => "Personal Projects",
            Self::Education => "Education",
        }
    }

    /// Path segment the section is served under
    pub fn route(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::CoreCompetencies => "competencies",
            Self::ProfessionalExperience => "experience",
            Self::PersonalProjects => "projects",
            Self::Education => "education",
        }
    }

    pub fn not_found_message(&self) -> String {
        match self {
            Self::Personal => "KeyError: Personal data not found".to_string(),
            other => format!("KeyError: {} not found", other.key()),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Read-only CV document.
///
/// Section content stays as loosely typed JSON: the report pipeline has to
/// see non-text values in order to reject them, and the API serves each
/// section exactly as stored. Key order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CvRecord {
    sections: Map<String, Value>,
}

impl CvRecord {
    pub fn new(sections: Map<String, Value>) -> Self {
        Self { sections }
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(sections) => Ok(Self::new(sections)),
            other => anyhow::bail!(
                "CV data must be a JSON object, got {}",
                json_type_name(&other)
            ),
        }
    }

    pub fn get(&self, section: Section) -> Option<&Value> {
        self.sections.get(section.key())
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.sections
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
