//! Config command implementation.

use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::{MscanError, Result};

/// Execute the config command.
///
/// Prints `config` as TOML, or saves it to `write` when given.
pub fn run_config(write: Option<&Path>, config: &Config) -> Result<()> {
    match write {
        Some(path) => {
            config.save_to_path(path)?;
            info!(path = %path.display(), "configuration written");
        },
        None => {
            let text = render_config(config)?;
            let mut out = io::stdout().lock();
            out.write_all(text.as_bytes())?;
            out.flush()?;
        },
    }
    Ok(())
}

/// Renders `config` as pretty TOML.
pub fn render_config(config: &Config) -> Result<String> {
    toml::to_string_pretty(config)
        .map_err(|e| MscanError::Config(format!("Failed to serialize configuration: {}", e)))
}
