// src/report/sections.rs
//! One text formatter per CV section

use serde_json::Value;
use tracing::error;

use crate::report::validator::{
    all_strings, validate_education, validate_experience, validate_project, validate_section,
    EducationEntry, ExperienceEntry, ProjectEntry, SkipReason,
};
use crate::types::{CvRecord, Section};

pub const PERSONAL_BANNER: &str = "-------------------- Personal info --------------------";
pub const COMPETENCIES_BANNER: &str = "-------------------- Core Competencies --------------------";
pub const EXPERIENCE_BANNER: &str = "-------------------- Professional Experience --------------------";
pub const PROJECTS_BANNER: &str = "--------------------Personal Projects--------------------";
pub const EDUCATION_BANNER: &str = "-------------------- Education --------------------";

const INLINE_SEPARATOR: &str = " | ";
const BULLET_SEPARATOR: &str = "\n - ";

pub fn format_section(record: &CvRecord, section: Section) -> String {
    match section {
        Section::Personal => format_personal(record),
        Section::CoreCompetencies => format_competencies(record),
        Section::ProfessionalExperience => format_experience(record),
        Section::PersonalProjects => format_projects(record),
        Section::Education => format_education(record),
    }
}

pub fn format_personal(record: &CvRecord) -> String {
    let Ok(personal) = validate_section(record, Section::Personal) else {
        return String::new();
    };

    let Some(fields) = personal.as_object() else {
        log_skip(Section::Personal, &SkipReason::WrongShape(Section::Personal.key()));
        return String::new();
    };

    let mut values = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        match value.as_str() {
            Some(text) => values.push(text),
            None => {
                error!("Error joining personal values: {} is not text", key);
                return String::new();
            }
        }
    }

    format!("{} \n{}\n\n", PERSONAL_BANNER, values.join(INLINE_SEPARATOR))
}

pub fn format_competencies(record: &CvRecord) -> String {
    let Ok(competencies) = validate_section(record, Section::CoreCompetencies) else {
        return String::new();
    };

    let Some(items) = competencies.as_array() else {
        log_skip(
            Section::CoreCompetencies,
            &SkipReason::WrongShape(Section::CoreCompetencies.key()),
        );
        return String::new();
    };

    if !all_strings(Some(competencies)) {
        error!("Not all competencies are strings");
        return String::new();
    }

    let joined = items
        .iter()
        .filter_map(Value::as_str)
        .collect::<Vec<_>>()
        .join(INLINE_SEPARATOR);

    format!("{} \n{}\n", COMPETENCIES_BANNER, joined)
}

pub fn format_experience(record: &CvRecord) -> String {
    wrap_entries(
        Section::ProfessionalExperience,
        EXPERIENCE_BANNER,
        render_experience_entries(record),
    )
}

pub fn format_projects(record: &CvRecord) -> String {
    wrap_entries(
        Section::PersonalProjects,
        PROJECTS_BANNER,
        render_project_entries(record),
    )
}

pub fn format_education(record: &CvRecord) -> String {
    wrap_entries(
        Section::Education,
        EDUCATION_BANNER,
        render_education_entries(record),
    )
}

/// Rendered experience entries in document order, or the reason each one was skipped
pub fn render_experience_entries(record: &CvRecord) -> Vec<Result<String, SkipReason>> {
    section_entries(record, Section::ProfessionalExperience)
        .iter()
        .map(|entry| validate_experience(entry).map(|exp| render_experience(&exp)))
        .collect()
}

pub fn render_project_entries(record: &CvRecord) -> Vec<Result<String, SkipReason>> {
    section_entries(record, Section::PersonalProjects)
        .iter()
        .map(|entry| validate_project(entry).map(|project| render_project(&project)))
        .collect()
}

pub fn render_education_entries(record: &CvRecord) -> Vec<Result<String, SkipReason>> {
    section_entries(record, Section::Education)
        .iter()
        .map(|entry| validate_education(entry).map(|education| render_education(&education)))
        .collect()
}

fn render_experience(entry: &ExperienceEntry<'_>) -> String {
    if entry.description.is_empty() {
        format!("\n{} | {} \n{} \n", entry.company, entry.job_title, entry.date)
    } else {
        format!(
            "\n{} | {} \n{} \n - {}\n",
            entry.company,
            entry.job_title,
            entry.date,
            entry.description.join(BULLET_SEPARATOR)
        )
    }
}

fn render_project(entry: &ProjectEntry<'_>) -> String {
    if entry.skills.is_empty() {
        format!("\n{} \n- {}\n", entry.name, entry.description)
    } else {
        format!(
            "\n{} \n- {}\n- {}\n",
            entry.name,
            entry.description,
            entry.skills.join(INLINE_SEPARATOR)
        )
    }
}

fn render_education(entry: &EducationEntry<'_>) -> String {
    if entry.skills.is_empty() {
        format!(
            "\n{}\n{}  \n- {}\n",
            entry.institution, entry.date, entry.description
        )
    } else {
        format!(
            "\n{}\n{} \n- {}\n- {}\n",
            entry.institution,
            entry.date,
            entry.description,
            entry.skills.join(INLINE_SEPARATOR)
        )
    }
}

fn section_entries(record: &CvRecord, section: Section) -> &[Value] {
    let Ok(content) = validate_section(record, section) else {
        return &[];
    };

    match content.as_array() {
        Some(entries) => entries.as_slice(),
        None => {
            log_skip(section, &SkipReason::WrongShape(section.key()));
            &[]
        }
    }
}

fn wrap_entries(
    section: Section,
    banner: &str,
    rendered: Vec<Result<String, SkipReason>>,
) -> String {
    let mut body = String::new();
    for entry in rendered {
        match entry {
            Ok(text) => body.push_str(&text),
            Err(reason) => log_skip(section, &reason),
        }
    }

    if body.is_empty() {
        return String::new();
    }
    format!("\n{} {}", banner, body)
}

fn log_skip(section: Section, reason: &SkipReason) {
    error!(section = section.key(), code = reason.code(), "{}", reason);
}
