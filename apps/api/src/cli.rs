//! Command-line entry points. With no subcommand the binary serves HTTP.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::analysis::report::analyze;
use crate::extraction::extract_text;

#[derive(Parser)]
#[command(name = "resume-intel")]
#[command(about = "Resume evaluation against target job roles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Score a PDF resume offline and print the deterministic analysis as JSON
    Score {
        /// Path to the resume PDF
        #[arg(short, long)]
        file: PathBuf,
        /// Target job role, free text
        #[arg(short, long)]
        role: String,
    },
}

/// Extracts `file` and returns the pretty-printed deterministic analysis.
/// Never calls the LLM, so no API key is needed.
pub fn score_file(file: &Path, role: &str) -> Result<String> {
    let text = extract_text(file)?;
    info!("Extracted {} chars from {}", text.len(), file.display());
    let analysis = analyze(&text, role);
    serde_json::to_string_pretty(&analysis).context("Failed to serialize analysis")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::pdf::testing::pdf_with_pages;
    use crate::extraction::ExtractionError;

    #[test]
    fn test_score_file_prints_analysis() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, pdf_with_pages(&["Jane Doe rest api sql"])).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&score_file(&path, "Backend Engineer").unwrap()).unwrap();
        assert_eq!(json["resolved_profile"], "backend_engineer");
        assert!(json["score"].is_u64());
    }

    #[test]
    fn test_score_file_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = score_file(&dir.path().join("absent.pdf"), "generic").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtractionError>(),
            Some(ExtractionError::Io { .. })
        ));
    }

    #[test]
    fn test_cli_parses_score_subcommand() {
        let cli = Cli::try_parse_from(["resume-intel", "score", "-f", "cv.pdf", "-r", "Data Scientist"])
            .unwrap();
        match cli.command {
            Some(Command::Score { file, role }) => {
                assert_eq!(file, PathBuf::from("cv.pdf"));
                assert_eq!(role, "Data Scientist");
            }
            _ => panic!("expected score subcommand"),
        }
        assert!(Cli::try_parse_from(["resume-intel"]).unwrap().command.is_none());
    }
}
