//! Configuration structures for directory analysis.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{InvnameError, Result};

/// Main configuration for an analysis run.
///
/// Defaults reproduce the fixed behaviour of the bare `invname` command, so a
/// config file only needs the keys it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvnameConfig {
    /// Where invoice PDFs are read from.
    pub input: InputConfig,

    /// Where and how the report is emitted.
    pub report: ReportConfig,
}

/// Input discovery configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Directory holding the invoice PDFs, relative to the working directory
    /// unless absolute.
    pub directory: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("emails-project"),
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Report file name, written inside the input directory.
    pub file_name: String,

    /// Echo the full report to standard output.
    pub print_to_stdout: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            file_name: "pdf_pattern_analysis.md".to_string(),
            print_to_stdout: true,
        }
    }
}

impl InvnameConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| InvnameError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| InvnameError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings that would write the report outside the input directory.
    pub fn validate(&self) -> Result<()> {
        let name = Path::new(&self.report.file_name);
        let is_plain_name = name.file_name().is_some_and(|n| n == name.as_os_str());
        if self.report.file_name.is_empty() || !is_plain_name {
            return Err(InvnameError::Config(format!(
                "report.file_name must be a plain file name, got {:?}",
                self.report.file_name
            )));
        }
        Ok(())
    }

    /// Full path of the report file.
    pub fn report_path(&self) -> PathBuf {
        self.input.directory.join(&self.report.file_name)
    }
}
