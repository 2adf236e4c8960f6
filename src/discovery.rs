//! Locate the newest nginx access log in a directory by the date in its name.

use crate::Result;
use anyhow::Context;
use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

const LOG_FILE_RE: &str = r"^nginx-access-ui\.log-(\d{8})(?:\.gz)?$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestLog {
    pub path: PathBuf,
    pub date: NaiveDate,
}

impl LatestLog {
    /// File name of the report for this log, e.g. `report-2017.06.30.html`.
    pub fn report_name(&self) -> String {
        format!("report-{}.html", self.date.format("%Y.%m.%d"))
    }
}

/// Scan `dir` for `nginx-access-ui.log-YYYYMMDD[.gz]` and return the newest.
///
/// Names that do not follow the scheme are ignored. A name that follows it
/// but carries an impossible date is an error. On equal dates the smaller
/// file name wins, so a plain log is preferred over its `.gz` twin.
pub fn find_latest_log(dir: &Path) -> Result<Option<LatestLog>> {
    let re = Regex::new(LOG_FILE_RE)?;

    let entries =
        fs::read_dir(dir).with_context(|| format!("read log dir {}", dir.display()))?;

    let mut latest: Option<(LatestLog, String)> = None;
    for entry in entries {
        let entry = entry.with_context(|| format!("read log dir {}", dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(caps) = re.captures(name) else {
            continue;
        };

        let date = NaiveDate::parse_from_str(&caps[1], "%Y%m%d")
            .with_context(|| format!("bad date in log file name {}", name))?;

        let newer = match &latest {
            None => true,
            Some((best, best_name)) => {
                date > best.date || (date == best.date && name < best_name.as_str())
            }
        };
        if newer {
            let candidate = LatestLog {
                path: entry.path(),
                date,
            };
            latest = Some((candidate, name.to_string()));
        }
    }

    Ok(latest.map(|(log, _)| log))
}
