// src/report/mod.rs
//! Plain-text rendering of a CV record

pub mod sections;
pub mod validator;

use std::fmt;
use tracing::info;

use crate::types::{CvRecord, Section};

pub use sections::format_section;
pub use validator::{all_strings, validate_section, SkipReason};

pub const REPORT_HEADER: &str =
    "====================================  CV IN FLASK  ====================================";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    EmptyCv,
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCv => f.write_str("No CV found or CV is empty"),
        }
    }
}

impl std::error::Error for ReportError {}

/// Render the whole CV as text.
///
/// Only an empty record is an error. A record missing some sections is
/// still valid; those sections just render as nothing.
pub fn assemble(record: &CvRecord) -> Result<String, ReportError> {
    if record.is_empty() {
        return Err(ReportError::EmptyCv);
    }

    let mut report = format!("\n{}\n\n", REPORT_HEADER);
    for section in Section::ALL {
        report.push_str(&format_section(record, section));
    }

    info!("Assembled CV report ({} bytes)", report.len());
    Ok(report)
}
