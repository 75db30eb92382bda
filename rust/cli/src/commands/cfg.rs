//! Resolved-configuration display.

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let doc = serde_json::json!({
        "config": resolved.config,
        "sources": resolved.sources,
    });
    let pretty = serde_json::to_string_pretty(&doc).map_err(std::io::Error::other)?;
    writeln!(out, "{}", pretty)?;
    Ok(())
}
