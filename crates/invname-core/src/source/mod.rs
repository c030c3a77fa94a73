//! Filesystem collaborators: listing candidate PDFs and persisting the report.
//!
//! The analyzer itself never touches the filesystem; these helpers are the
//! glue on either side of it.

use std::fs;
use std::path::Path;

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

use crate::error::{InvnameError, Result};
use crate::filename::PDF_SUFFIX;

/// List the names of regular files in `dir` ending in `.pdf`.
///
/// The suffix match is case-sensitive, so `SCAN.PDF` is not a candidate.
/// Names are returned without the directory prefix, sorted. A name that is
/// not valid UTF-8 is kept in lossy form so it still counts as a candidate
/// and shows up as a failed parse.
pub fn list_pdf_filenames(dir: &Path) -> Result<Vec<String>> {
    let pattern = Pattern::new(&format!("*{}", Pattern::escape(PDF_SUFFIX)))?;
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let raw_name = entry.file_name();
        let name = match raw_name.to_str() {
            Some(name) => name.to_string(),
            None => {
                let lossy = raw_name.to_string_lossy().into_owned();
                warn!("Non UTF-8 filename listed as {:?}", lossy);
                lossy
            }
        };

        if !pattern.matches_with(&name, options) || !entry.path().is_file() {
            continue;
        }

        names.push(name);
    }

    names.sort();
    debug!("Found {} PDF files in {}", names.len(), dir.display());
    Ok(names)
}

/// Write the rendered report, replacing any previous one.
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    fs::write(path, report).map_err(|source| InvnameError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote report to {}", path.display());
    Ok(())
}
