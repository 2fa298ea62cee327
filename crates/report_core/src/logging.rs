use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::ReportConfig;

/// Crates whose events are let through at the requested level.
const REPORT_TARGETS: &[&str] = &[
    "report_core",
    "report_content",
    "report_docs",
    "report_fs",
    "report_app",
    "lms_report",
];

/// Build the default filter directive: our crates at `level`, everything else at `warn`.
pub fn default_filter(level: &str) -> String {
    let mut directives = vec!["warn".to_string()];
    directives.extend(REPORT_TARGETS.iter().map(|t| format!("{t}={level}")));
    directives.join(",")
}

/// Initializes the logging system with file + console output.
/// Returns a guard that must be kept alive for the duration of the run.
pub fn init_logging(config: &ReportConfig, verbose: bool) -> Result<WorkerGuard> {
    let logs_dir = config.logs_dir()?;
    std::fs::create_dir_all(&logs_dir)?;

    // File appender: daily rotation
    let file_appender = tracing_appender::rolling::daily(&logs_dir, "lms-report");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_all_crates() {
        let filter = default_filter("debug");
        assert!(filter.starts_with("warn,"));
        for target in REPORT_TARGETS {
            assert!(filter.contains(&format!("{target}=debug")), "missing {target}");
        }
        // Must parse as a valid directive set.
        drop(EnvFilter::new(filter));
    }

    #[test]
    fn test_init_logging_uses_configured_dir() {
        let tmp = tempfile::tempdir().expect("Failed to create tempdir");
        let config = ReportConfig {
            log_dir: Some(tmp.path().join("run-logs")),
            ..ReportConfig::default()
        };

        let result = init_logging(&config, false);
        assert!(tmp.path().join("run-logs").exists());
        if let Err(e) = result {
            assert!(e.to_string().contains("logging"), "unexpected error: {e}");
        }
    }
}
