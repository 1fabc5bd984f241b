// src/report/validator.rs
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;
use tracing::error;

use crate::types::{CvRecord, Section};

/// Why a section or an entry was left out of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingSection(&'static str),
    EmptySection(&'static str),
    WrongShape(&'static str),
    NotARecord,
    MissingField(&'static str),
    NonTextField(&'static str),
    NonTextElements(&'static str),
}

impl SkipReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSection(_) => "SECTION_NOT_FOUND",
            Self::EmptySection(_) => "SECTION_EMPTY",
            Self::WrongShape(_) => "SECTION_WRONG_SHAPE",
            Self::NotARecord => "ENTRY_NOT_A_RECORD",
            Self::MissingField(_) => "FIELD_MISSING",
            Self::NonTextField(_) => "FIELD_NOT_TEXT",
            Self::NonTextElements(_) => "LIST_NOT_TEXT",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSection(key) => write!(f, "{} key not found in input", key),
            Self::EmptySection(key) => write!(f, "No {} found, skipping", key),
            Self::WrongShape(key) => write!(f, "{} has an unexpected shape, skipping", key),
            Self::NotARecord => write!(f, "Entry is not a record, skipping"),
            Self::MissingField(field) => write!(f, "Missing {}, skipping entry", field),
            Self::NonTextField(field) => write!(f, "{} is not text, skipping entry", field),
            Self::NonTextElements(field) => write!(f, "Not all {} are strings", field),
        }
    }
}

impl std::error::Error for SkipReason {}

/// Null, false, zero and empty strings/lists/objects all count as "no data"
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Fetch a section's content if it is present and not blank.
/// Failures are logged here so every formatter reports them the same way.
pub fn validate_section(record: &CvRecord, section: Section) -> Result<&Value, SkipReason> {
    let result = match record.get(section) {
        None => Err(SkipReason::MissingSection(section.key())),
        Some(value) if is_blank(value) => Err(SkipReason::EmptySection(section.key())),
        Some(value) => Ok(value),
    };

    if let Err(reason) = &result {
        error!(section = section.key(), code = reason.code(), "{}", reason);
    }
    result
}

/// True when every element is text. Absent or blank input is vacuously true.
pub fn all_strings(elements: Option<&Value>) -> bool {
    match elements {
        None => true,
        Some(Value::Array(items)) => items.iter().all(Value::is_string),
        Some(other) => is_blank(other),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry<'a> {
    pub company: Cow<'a, str>,
    pub job_title: Cow<'a, str>,
    pub date: Cow<'a, str>,
    pub description: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry<'a> {
    pub name: Cow<'a, str>,
    pub description: Cow<'a, str>,
    pub skills: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationEntry<'a> {
    pub institution: Cow<'a, str>,
    pub description: Cow<'a, str>,
    pub date: Cow<'a, str>,
    pub skills: Vec<&'a str>,
}

pub fn validate_experience(entry: &Value) -> Result<ExperienceEntry<'_>, SkipReason> {
    let fields = as_record(entry)?;
    let company = required_text(fields, "company_name")?;
    let job_title = required_text(fields, "job_title")?;
    let date = required_text(fields, "date")?;
    let description = optional_text_list(fields, "job description")?;

    Ok(ExperienceEntry {
        company,
        job_title,
        date,
        description,
    })
}

pub fn validate_project(entry: &Value) -> Result<ProjectEntry<'_>, SkipReason> {
    let fields = as_record(entry)?;
    let skills = optional_text_list(fields, "skills")?;
    let name = required_text(fields, "name")?;
    let description = required_text(fields, "description")?;

    Ok(ProjectEntry {
        name,
        description,
        skills,
    })
}

pub fn validate_education(entry: &Value) -> Result<EducationEntry<'_>, SkipReason> {
    let fields = as_record(entry)?;
    let skills = optional_text_list(fields, "skills")?;
    let institution = required_text(fields, "institution_name")?;
    let description = required_text(fields, "description")?;
    let date = required_text(fields, "date")?;

    Ok(EducationEntry {
        institution,
        description,
        date,
        skills,
    })
}

fn as_record(entry: &Value) -> Result<&Map<String, Value>, SkipReason> {
    entry.as_object().ok_or(SkipReason::NotARecord)
}

/// Text is borrowed; numbers and `true` render with their display string.
/// Lists and objects are not scalar and reject the entry.
fn required_text<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<Cow<'a, str>, SkipReason> {
    match fields.get(field) {
        None => Err(SkipReason::MissingField(field)),
        Some(value) if is_blank(value) => Err(SkipReason::MissingField(field)),
        Some(Value::String(text)) => Ok(Cow::Borrowed(text.as_str())),
        Some(Value::Number(number)) => Ok(Cow::Owned(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Cow::Owned(flag.to_string())),
        Some(_) => Err(SkipReason::NonTextField(field)),
    }
}

fn optional_text_list<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<Vec<&'a str>, SkipReason> {
    let value = fields.get(field);
    if !all_strings(value) {
        return Err(SkipReason::NonTextElements(field));
    }

    Ok(value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> CvRecord {
        CvRecord::from_value(value).unwrap()
    }

    #[test]
    fn test_validate_section_missing_and_empty() {
        let cv = record(json!({"Core Competencies": [], "Personal": null}));

        assert_eq!(
            validate_section(&cv, Section::Education),
            Err(SkipReason::MissingSection("Education"))
        );
        assert_eq!(
            validate_section(&cv, Section::CoreCompetencies),
            Err(SkipReason::EmptySection("Core Competencies"))
        );
        assert_eq!(
            validate_section(&cv, Section::Personal),
            Err(SkipReason::EmptySection("Personal"))
        );
    }

    #[test]
    fn test_validate_section_returns_content() {
        let cv = record(json!({"Core Competencies": ["Rust"]}));
        assert_eq!(
            validate_section(&cv, Section::CoreCompetencies),
            Ok(&json!(["Rust"]))
        );
    }

    #[test]
    fn test_all_strings() {
        assert!(all_strings(None));
        assert!(all_strings(Some(&json!(null))));
        assert!(all_strings(Some(&json!([]))));
        assert!(all_strings(Some(&json!(["a", "b"]))));
        assert!(!all_strings(Some(&json!(["a", 2, "c"]))));
        assert!(!all_strings(Some(&json!([null]))));
        assert!(!all_strings(Some(&json!(42))));
    }

    #[test]
    fn test_validate_experience_reports_first_missing_field() {
        let entry = json!({"company_name": "Acme", "job_title": "Dev"});
        assert_eq!(
            validate_experience(&entry),
            Err(SkipReason::MissingField("date"))
        );

        let entry = json!({"company_name": "", "job_title": "Dev", "date": "2020"});
        assert_eq!(
            validate_experience(&entry),
            Err(SkipReason::MissingField("company_name"))
        );
    }

    #[test]
    fn test_validate_experience_optional_description() {
        let entry = json!({"company_name": "Acme", "job_title": "Dev", "date": "2020"});
        let parsed = validate_experience(&entry).unwrap();
        assert!(parsed.description.is_empty());

        let entry = json!({
            "company_name": "Acme",
            "job_title": "Dev",
            "date": "2020",
            "job description": ["Ship", 3]
        });
        assert_eq!(
            validate_experience(&entry),
            Err(SkipReason::NonTextElements("job description"))
        );
    }

    #[test]
    fn test_validate_project_checks_skills_before_fields() {
        let entry = json!({"skills": ["Rust", false]});
        assert_eq!(
            validate_project(&entry),
            Err(SkipReason::NonTextElements("skills"))
        );

        let entry = json!({"name": "Tool", "description": ["A", "tool"]});
        assert_eq!(
            validate_project(&entry),
            Err(SkipReason::NonTextField("description"))
        );
    }

    #[test]
    fn test_validate_education() {
        let entry = json!({
            "institution_name": "Uni",
            "description": "BSc",
            "date": "2015 - 2019",
            "skills": ["Math"]
        });
        let parsed = validate_education(&entry).unwrap();
        assert_eq!(parsed.institution, "Uni");
        assert_eq!(parsed.skills, vec!["Math"]);

        assert_eq!(validate_education(&json!("Uni")), Err(SkipReason::NotARecord));
    }

    #[test]
    fn test_scalar_mandatory_fields_use_display_string() {
        let entry = json!({"company_name": "Acme", "job_title": "Dev", "date": 2020});
        let parsed = validate_experience(&entry).unwrap();
        assert_eq!(parsed.date, "2020");

        let entry = json!({"institution_name": "Uni", "description": true, "date": 2019.5});
        let parsed = validate_education(&entry).unwrap();
        assert_eq!(parsed.description, "true");
        assert_eq!(parsed.date, "2019.5");

        let entry = json!({"company_name": {"name": "Acme"}, "job_title": "Dev", "date": "2020"});
        assert_eq!(
            validate_experience(&entry),
            Err(SkipReason::NonTextField("company_name"))
        );
    }

    #[test]
    fn test_missing_mandatory_fields_per_entry_kind() {
        let entry = json!({"company_name": "Acme", "date": "2020"});
        assert_eq!(
            validate_experience(&entry),
            Err(SkipReason::MissingField("job_title"))
        );

        assert_eq!(
            validate_project(&json!({"description": "A tool"})),
            Err(SkipReason::MissingField("name"))
        );
        assert_eq!(
            validate_project(&json!({"name": "Tool", "description": ""})),
            Err(SkipReason::MissingField("description"))
        );

        assert_eq!(
            validate_education(&json!({"description": "BSc", "date": "2019"})),
            Err(SkipReason::MissingField("institution_name"))
        );
        assert_eq!(
            validate_education(&json!({
                "institution_name": "Uni",
                "description": "BSc",
                "date": "2019",
                "skills": ["Math", 1]
            })),
            Err(SkipReason::NonTextElements("skills"))
        );
    }

    #[test]
    fn test_skip_reason_messages() {
        assert_eq!(
            SkipReason::MissingField("date").to_string(),
            "Missing date, skipping entry"
        );
        assert_eq!(
            SkipReason::NonTextElements("skills").to_string(),
            "Not all skills are strings"
        );
        assert_eq!(SkipReason::EmptySection("Education").code(), "SECTION_EMPTY");
    }
}
