mod cli;
mod config;
mod files;
mod notifier;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use log::LevelFilter;
use screening_engine::{
    export_results, Notifier, ReqwestTransport, SubmissionController, SubmitOutcome, Transport,
};
use screening_logging::{screening_error, screening_info};

use crate::cli::Cli;
use crate::notifier::TerminalNotifier;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    screening_logging::initialize(cli.log, level);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            screening_error!("{:#}", err);
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = config::load_config(&cli.config);
    let settings = config.transport_settings(cli.endpoint.clone(), cli.timeout_secs);
    screening_info!(
        "Scoring endpoint {} (timeout {:?})",
        settings.endpoint,
        settings.request_timeout
    );

    let outcome = run_with(
        cli,
        Arc::new(ReqwestTransport::new(settings)),
        Arc::new(TerminalNotifier),
        &mut io::stdout().lock(),
    )?;
    Ok(ExitCode::from(exit_status(&outcome)))
}

/// Loads the inputs, runs one submission and writes the ranking to `out`.
fn run_with(
    cli: &Cli,
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
    out: &mut dyn Write,
) -> Result<SubmitOutcome> {
    let job_description = cli.job_description_text()?;
    let candidates = files::load_resumes(&cli.resumes)?;

    let controller = SubmissionController::new(transport, notifier);
    controller.set_job_description(job_description);
    controller.select_files(candidates);

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let outcome = runtime.block_on(controller.submit());

    let SubmitOutcome::Ranked(count) = outcome else {
        return Ok(outcome);
    };
    write!(out, "{}", render::render_results(&controller.view()))?;

    if let Some(dir) = &cli.export {
        let now = Utc::now();
        let path = export_results(
            dir,
            &export_filename(now),
            &controller.results(),
            &now.to_rfc3339(),
        )
        .with_context(|| format!("failed to export {count} results to {}", dir.display()))?;
        writeln!(out, "Saved ranking to {}", path.display())?;
    }

    Ok(outcome)
}

/// Process exit status: 0 only when the service ranked the resumes.
fn exit_status(outcome: &SubmitOutcome) -> u8 {
    match outcome {
        SubmitOutcome::Ranked(_) => 0,
        SubmitOutcome::Busy | SubmitOutcome::Invalid(_) | SubmitOutcome::Failed(_) => 1,
    }
}

fn export_filename(now: DateTime<Utc>) -> String {
    format!("ranking-{}.json", now.format("%Y%m%dT%H%M%SZ"))
}
