//! Runtime configuration (JSON, upper-case keys).
//!
//! JSON shape (every key optional):
//! {
//!   "REPORT_SIZE": 10,
//!   "REPORT_DIR": "./reports",
//!   "LOG_DIR": "./log",
//!   "DATA_DIR": "./data",
//!   "STRUCT_LOG_FILE": "./app.log"   // null logs to stdout
//! }

use crate::Result;
use crate::error::AnalyzeError;
use anyhow::{Context, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "REPORT_SIZE")]
    pub report_size: i64,

    #[serde(rename = "REPORT_DIR")]
    pub report_dir: PathBuf,

    #[serde(rename = "LOG_DIR")]
    pub log_dir: PathBuf,

    #[serde(rename = "DATA_DIR")]
    pub data_dir: PathBuf,

    #[serde(rename = "STRUCT_LOG_FILE")]
    pub struct_log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_size: 10,
            report_dir: PathBuf::from("./reports"),
            log_dir: PathBuf::from("./log"),
            data_dir: PathBuf::from("./data"),
            struct_log_file: Some(PathBuf::from("./app.log")),
        }
    }
}

impl Config {
    /// Load a config file, keeping defaults for any key the file omits.
    /// A blank file means "all defaults"; a missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("config file does not exist: {}", path.display());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;

        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(text).with_context(|| format!("parse config file {}", path.display()))
    }

    /// `REPORT_SIZE` as a positive row limit.
    pub fn report_limit(&self) -> std::result::Result<usize, AnalyzeError> {
        match usize::try_from(self.report_size) {
            Ok(limit) if limit > 0 => Ok(limit),
            _ => Err(AnalyzeError::InvalidLimit(self.report_size)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn overrides_only_given_keys() {
        let f = config_file(r#"{"REPORT_SIZE": 5, "LOG_DIR": "/var/log/nginx"}"#);
        let config = Config::load(f.path()).unwrap();
        assert_eq!(
            config,
            Config {
                report_size: 5,
                log_dir: PathBuf::from("/var/log/nginx"),
                ..Config::default()
            }
        );
    }

    #[test]
    fn blank_file_means_defaults() {
        let f = config_file("  \n");
        assert_eq!(Config::load(f.path()).unwrap(), Config::default());
    }

    #[test]
    fn ignores_unknown_keys_and_accepts_null_log_file() {
        let f = config_file(r#"{"EXTRA": true, "STRUCT_LOG_FILE": null}"#);
        let config = Config::load(f.path()).unwrap();
        assert_eq!(config.struct_log_file, None);
        assert_eq!(config.report_size, 10);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load(Path::new("/non/existent/path.json")).is_err());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let f = config_file("{invalid_json");
        assert!(Config::load(f.path()).is_err());
    }

    #[test]
    fn report_limit_must_be_positive() {
        let mut config = Config::default();
        assert_eq!(config.report_limit().unwrap(), 10);

        config.report_size = 0;
        assert!(matches!(
            config.report_limit(),
            Err(AnalyzeError::InvalidLimit(0))
        ));

        config.report_size = -3;
        assert!(matches!(
            config.report_limit(),
            Err(AnalyzeError::InvalidLimit(-3))
        ));
    }
}
