//! Saved analysis reports
//!
//! Each save appends a local timestamp line, the snapshot as pretty JSON and a
//! blank separator line, so one file accumulates a history of saved windows.

use crate::constants::datetime::REPORT_TIMESTAMP_FORMAT;
use crate::error::Result;
use crate::state::Snapshot;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub fn save_report(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    writeln!(file, "{}", Local::now().format(REPORT_TIMESTAMP_FORMAT))?;
    let body = serde_json::to_string_pretty(snapshot)?;
    writeln!(file, "{}\n", body)?;

    tracing::info!(path = %path.display(), "report saved");
    Ok(())
}
