pub mod cli;
pub mod config;
pub mod fixture;
pub mod report;
pub mod store;
pub mod types;
pub mod web;

pub use config::AppConfig;
pub use report::{assemble, ReportError, REPORT_HEADER};
pub use store::CvStore;
pub use types::{CvRecord, Section};
pub use web::{build_rocket, start_web_server};
