// src/cli.rs
use crate::config::AppConfig;
use crate::report::{assemble, format_section};
use crate::store::CvStore;
use crate::types::Section;
use crate::web::start_web_server;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "cvserve")]
#[command(about = "Serve a CV over HTTP or print it as formatted text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: CvCommand,

    /// YAML configuration file (defaults to ./config.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// CV document (.json, .yaml or .yml) to use instead of the configured one
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum CvCommand {
    /// Start the HTTP API
    Serve {
        #[arg(long)]
        port: Option<u16>,
        #[arg(long)]
        address: Option<String>,
    },
    /// Print the CV as formatted text
    PrintCv {
        /// Print a single section instead of the whole report
        #[arg(long, value_enum)]
        section: Option<SectionArg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionArg {
    Personal,
    Competencies,
    Experience,
    Projects,
    Education,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Personal => Section::Personal,
            SectionArg::Competencies => Section::CoreCompetencies,
            SectionArg::Experience => Section::ProfessionalExperience,
            SectionArg::Projects => Section::PersonalProjects,
            SectionArg::Education => Section::Education,
        }
    }
}

/// Resolve the effective configuration, with command line flags applied last
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref())?;

    if let Some(data) = &cli.data {
        config.cv_data_path = Some(data.clone());
    }
    if let CvCommand::Serve { port, address } = &cli.command {
        if let Some(port) = port {
            config.port = *port;
        }
        if let Some(address) = address {
            config.address = address.clone();
        }
    }

    Ok(config)
}

/// Text printed by `print-cv`
pub fn render_cv(store: &CvStore, section: Option<Section>) -> Result<String> {
    match section {
        Some(section) => Ok(format_section(store.record(), section)),
        None => Ok(assemble(store.record())?),
    }
}

pub async fn handle_command(cli: Cli, config: AppConfig) -> Result<()> {
    let store = CvStore::from_config(&config)?;

    match cli.command {
        CvCommand::Serve { .. } => start_web_server(store, &config).await,
        CvCommand::PrintCv { section } => {
            let text = render_cv(&store, section.map(Section::from))?;
            info!("Printing CV ({} bytes)", text.len());
            println!("{}", text);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CvRecord;
    use serde_json::json;

    #[test]
    fn test_parse_print_cv_with_section() {
        let cli = Cli::try_parse_from(["cvserve", "print-cv", "--section", "competencies"]).unwrap();
        match cli.command {
            CvCommand::PrintCv { section } => {
                assert_eq!(section.map(Section::from), Some(Section::CoreCompetencies))
            }
            CvCommand::Serve { .. } => panic!("expected print-cv"),
        }
    }

    #[test]
    fn test_parse_serve_with_global_data_flag() {
        let cli = Cli::try_parse_from(["cvserve", "serve", "--port", "9001", "--data", "cv.yaml"])
            .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("cv.yaml")));
        assert!(matches!(cli.command, CvCommand::Serve { port: Some(9001), .. }));
    }

    #[test]
    fn test_render_cv_empty_record_fails() {
        let store = CvStore::new(CvRecord::default());
        let err = render_cv(&store, None).unwrap_err();
        assert_eq!(err.to_string(), "No CV found or CV is empty");
    }

    #[test]
    fn test_render_single_section() {
        let record = CvRecord::from_value(json!({"Core Competencies": ["Rust", "Go"]})).unwrap();
        let store = CvStore::new(record);

        let text = render_cv(&store, Some(Section::CoreCompetencies)).unwrap();
        assert!(text.ends_with("\nRust | Go\n"));
    }
}
