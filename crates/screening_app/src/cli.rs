use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use screening_logging::LogDestination;

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(
    name = "screening_app",
    about = "Rank PDF resumes against a job description using a remote scoring service",
    version
)]
pub struct Cli {
    /// Job description text
    #[arg(short = 'j', long, required_unless_present = "job_description_file")]
    pub job_description: Option<String>,
    /// Read the job description from a file (wins over --job-description)
    #[arg(long, value_name = "PATH")]
    pub job_description_file: Option<PathBuf>,
    /// Base URL of the scoring service
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Request timeout in seconds (at least 1)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
    /// RON config file; ignored when absent
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// Write the ranking as JSON into this directory
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,
    /// Log destination: terminal, file or both
    #[arg(long, default_value = "terminal", value_parser = parse_log_destination)]
    pub log: LogDestination,
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
    /// Resume files to rank, in submission order
    #[arg(required = true, value_name = "RESUME")]
    pub resumes: Vec<PathBuf>,
}

impl Cli {
    pub fn job_description_text(&self) -> Result<String> {
        if let Some(path) = &self.job_description_file {
            return fs::read_to_string(path)
                .with_context(|| format!("failed to read job description from {}", path.display()));
        }
        Ok(self.job_description.clone().unwrap_or_default())
    }
}

fn parse_log_destination(value: &str) -> Result<LogDestination, String> {
    LogDestination::from_name(value)
        .ok_or_else(|| format!("unknown log destination '{value}' (terminal, file, both)"))
}
