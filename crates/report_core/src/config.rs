use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::ReportError;

/// Config file picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "lms-report.json";

/// Generator configuration, read from `lms-report.json`.
///
/// Every field has a default, so a partial file (or no file at all) is fine.
/// Command-line flags are applied on top of whatever is loaded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Root of the screenshot folders (one sub-folder per role).
    pub images_dir: PathBuf,
    /// Directory the generated documents are written to.
    pub output_dir: PathBuf,
    /// Chapter number used for the screenshot chapter and its section codes.
    pub chapter_number: u32,
    /// Rendered width of each screenshot, in inches.
    pub image_width_inches: f64,
    /// Drop excluded ordering entries from the chapter instead of appending them.
    pub omit_excluded: bool,
    /// Log directory. `None` means `<data dir>/lms-report/logs`.
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
    /// Path prefix used for image links in the generated README.
    pub readme_image_prefix: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("images"),
            output_dir: PathBuf::from("."),
            chapter_number: 5,
            image_width_inches: 5.5,
            omit_excluded: false,
            log_dir: None,
            log_level: "info".into(),
            readme_image_prefix: "document/images".into(),
        }
    }
}

impl ReportConfig {
    /// Returns the per-user data directory: `<data dir>/lms-report/`
    pub fn base_dir() -> Result<PathBuf> {
        let data = dirs::data_local_dir().context("Could not determine data directory")?;
        Ok(data.join("lms-report"))
    }

    /// Returns the logs directory, honouring `log_dir` when set.
    pub fn logs_dir(&self) -> Result<PathBuf> {
        match &self.log_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::base_dir()?.join("logs")),
        }
    }

    /// Loads config from `explicit` if given, else from `./lms-report.json`
    /// if present, else falls back to defaults.
    ///
    /// An explicit path that does not exist is an error; the implicit one is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load_from_path(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)?
                } else {
                    debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Load config from a specific file path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to a specific file path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Reject values the generators cannot work with.
    pub fn validate(&self) -> Result<(), ReportError> {
        if !(self.image_width_inches.is_finite() && self.image_width_inches > 0.0) {
            return Err(ReportError::Config(format!(
                "image_width_inches must be positive, got {}",
                self.image_width_inches
            )));
        }
        if self.chapter_number == 0 {
            return Err(ReportError::Config("chapter_number must be at least 1".into()));
        }
        Ok(())
    }

    /// Resolve an output file name against `output_dir`.
    pub fn output_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.output_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_report_layout() {
        let config = ReportConfig::default();
        assert_eq!(config.images_dir, PathBuf::from("images"));
        assert_eq!(config.chapter_number, 5);
        assert!((config.image_width_inches - 5.5).abs() < f64::EPSILON);
        assert!(!config.omit_excluded);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lms-report.json");
        std::fs::write(&path, r#"{ "chapter_number": 3, "omit_excluded": true }"#).unwrap();

        let config = ReportConfig::load(Some(&path)).unwrap();
        assert_eq!(config.chapter_number, 3);
        assert!(config.omit_excluded);
        assert_eq!(config.readme_image_prefix, "document/images");
    }

    #[test]
    fn test_save_and_reload() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cfg.json");
        let config = ReportConfig {
            output_dir: PathBuf::from("out"),
            log_dir: Some(PathBuf::from("logs")),
            ..ReportConfig::default()
        };
        config.save_to_path(&path).unwrap();

        let loaded = ReportConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let result = ReportConfig::load(Some(&tmp.path().join("nope.json")));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = ReportConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_validate_rejects_bad_width() {
        let config = ReportConfig {
            image_width_inches: 0.0,
            ..ReportConfig::default()
        };
        assert!(matches!(config.validate(), Err(ReportError::Config(_))));

        let config = ReportConfig {
            image_width_inches: f64::NAN,
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_chapter() {
        let config = ReportConfig {
            chapter_number: 0,
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_path_joins_output_dir() {
        let config = ReportConfig {
            output_dir: PathBuf::from("build"),
            ..ReportConfig::default()
        };
        assert_eq!(
            config.output_path("database_schema.docx"),
            PathBuf::from("build").join("database_schema.docx")
        );
    }

    #[test]
    fn test_logs_dir_prefers_explicit() {
        let config = ReportConfig {
            log_dir: Some(PathBuf::from("/tmp/report-logs")),
            ..ReportConfig::default()
        };
        assert_eq!(config.logs_dir().unwrap(), PathBuf::from("/tmp/report-logs"));
    }
}
