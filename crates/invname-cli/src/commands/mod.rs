//! Subcommands.

pub mod analyze;
pub mod config;
pub mod parse;

use std::path::Path;

use tracing::debug;

use invname_core::InvnameConfig;

/// Resolve the configuration for a run.
///
/// An explicit `--config` path must exist. Otherwise the user config file is
/// used when present, and the built-in defaults when not.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<InvnameConfig> {
    if let Some(path) = config_path {
        debug!("Loading config from {}", path);
        return Ok(InvnameConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        return Ok(InvnameConfig::from_file(&default_path)?);
    }

    Ok(InvnameConfig::default())
}
