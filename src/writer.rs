//! Output files: `index.html` plus one dated archive per calendar day.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::BriefError;

/// File name of the always-current report.
pub const CURRENT_FILE: &str = "index.html";

/// Paths written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub current: PathBuf,
    pub archive: PathBuf,
}

/// Create `dir` if needed, then write `html` to `index.html` and `{date_stem}.html`.
///
/// Both files are overwritten when they already exist.
///
/// # Errors
///
/// Any directory or file failure is returned as `BriefError::Io` with the path.
pub fn write_report(dir: &Path, date_stem: &str, html: &str) -> Result<WrittenReport, BriefError> {
    fs::create_dir_all(dir).map_err(|e| BriefError::io(dir, e))?;

    let current = dir.join(CURRENT_FILE);
    let archive = dir.join(format!("{date_stem}.html"));

    for path in [&current, &archive] {
        fs::write(path, html).map_err(|e| BriefError::io(path.as_path(), e))?;
    }

    Ok(WrittenReport { current, archive })
}
