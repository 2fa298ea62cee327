//! lms-report binary.
//!
//! One subcommand per generated artifact:
//! - schema / summary: the database schema documents
//! - chapter: the interface chapter with every screenshot
//! - rename / readme: screenshot housekeeping and the README
//! - check: consistency checks over the tables

use anyhow::Result;
use clap::Parser;
use report_app::cli::{Cli, Commands, SchemaFormat};
use report_app::pipeline::{self, CHAPTER_FILE, README_FILE, SUMMARY_FILE};
use report_content::{CheckStatus, summarize};
use report_core::{ReportConfig, logging};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn created(path: &Path) {
    println!("Đã tạo file {} thành công!", path.display());
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = ReportConfig::load(cli.config.as_deref())?;
    if let Some(images) = cli.command.images_override() {
        config.images_dir = images.clone();
    }
    if let Commands::Chapter { omit_excluded: true, .. } = cli.command {
        config.omit_excluded = true;
    }

    let _log_guard = logging::init_logging(&config, cli.verbose)?;
    info!("Starting lms-report v{}", env!("CARGO_PKG_VERSION"));

    // Logged here so the file writer is flushed before the guard drops.
    dispatch(cli.command, &config).inspect_err(|e| error!("{e:#}"))
}

fn dispatch(command: Commands, config: &ReportConfig) -> Result<ExitCode> {
    let output = |given: Option<PathBuf>, default: &str| {
        given.unwrap_or_else(|| config.output_path(default))
    };

    match command {
        Commands::Schema { format, output: out } => {
            let path = output(out, format.default_file_name());
            pipeline::write_schema(&path, format)?;
            created(&path);
        }

        Commands::Summary { output: out } => {
            let path = output(out, SUMMARY_FILE);
            pipeline::write_summary(&path)?;
            created(&path);
        }

        Commands::Chapter { output: out, .. } => {
            let path = output(out, CHAPTER_FILE);
            pipeline::write_chapter(config, &path)?;
            created(&path);
        }

        Commands::Rename { roles, dry_run, .. } => {
            let report = pipeline::run_rename(config, &roles, dry_run)?;
            let verb = if dry_run { "Would rename" } else { "Renamed" };
            println!(
                "{verb} {} file(s); {} unchanged, {} skipped, {} failed",
                report.renamed(),
                report.unchanged(),
                report.skipped(),
                report.failed()
            );
        }

        Commands::Readme { output: out, .. } => {
            let path = output(out, README_FILE);
            pipeline::write_readme(config, &path)?;
            created(&path);
        }

        Commands::Check { .. } => {
            let results = pipeline::run_check(config)?;
            for result in &results {
                println!("[{}] {}: {}", result.status, result.name, result.message);
                if let Some(fix) = &result.fix_suggestion {
                    if result.status != CheckStatus::Pass {
                        println!("       fix: {fix}");
                    }
                }
            }

            let summary = summarize(&results);
            println!(
                "{} checks: {} passed, {} warnings, {} failed",
                summary.total, summary.pass, summary.warn, summary.fail
            );
            if !summary.is_ok() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::All { .. } => {
            let path = output(None, SchemaFormat::Docx.default_file_name());
            pipeline::write_schema(&path, SchemaFormat::Docx)?;
            created(&path);

            let path = output(None, SUMMARY_FILE);
            pipeline::write_summary(&path)?;
            created(&path);

            let path = output(None, CHAPTER_FILE);
            pipeline::write_chapter(config, &path)?;
            created(&path);

            let path = output(None, README_FILE);
            pipeline::write_readme(config, &path)?;
            created(&path);
        }
    }

    Ok(ExitCode::SUCCESS)
}
