//! Configuration module for the mscan CLI.
//!
//! This module handles loading and saving `mscan.toml`, which holds the
//! scanner settings and the default output format.

use dirs::{config_dir, home_dir};
use minic_lex::ScannerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{MscanError, Result};

/// File name looked up by [`Config::load`].
pub const CONFIG_FILE_NAME: &str = "mscan.toml";

/// Everything `mscan.toml` can set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Scanner settings.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-specific configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// How tokens are written.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Token output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-column listing lines
    #[default]
    Listing,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    /// Parses a format name, ignoring case. `text` and `jsonl` are accepted
    /// as aliases.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "listing" | "text" => Some(Self::Listing),
            "json" | "jsonl" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Config {
    /// Loads `mscan.toml` from the first place it exists: the working
    /// directory, `~/.config/mscan/`, then the platform config directory.
    /// Falls back to defaults when there is none.
    pub fn load() -> Result<Self> {
        match search_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => {
                debug!(path = %path.display(), "using configuration file");
                Self::load_from_path(&path)
            },
            None => Ok(Self::default()),
        }
    }

    /// Loads an explicit configuration file. A missing file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MscanError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| MscanError::Config(format!("Invalid {}: {}", path.display(), e)))
    }

    /// Writes this configuration as TOML, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            MscanError::Config(format!("Cannot serialize configuration: {}", e))
        })?;

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Candidate locations for `mscan.toml`, in lookup order.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    paths.extend(home_dir().map(|home| home.join(".config").join("mscan").join(CONFIG_FILE_NAME)));
    paths.extend(config_dir().map(|dir| dir.join("mscan").join(CONFIG_FILE_NAME)));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn custom_config() -> Config {
        Config {
            scanner: ScannerConfig {
                max_identifier_len: 31,
                max_string_len: 4096,
                max_comment_len: 4096,
                strict_exponent_suffix: false,
                skip_comments: true,
            },
            output: OutputConfig {
                format: OutputFormat::Json,
            },
        }
    }

    #[test]
    fn test_defaults_list_with_classic_limits() {
        let config = Config::default();
        assert_eq!(config.scanner, ScannerConfig::default());
        assert_eq!(config.output.format, OutputFormat::Listing);
    }

    #[test]
    fn test_saved_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("mscan.toml");

        let config = custom_config();
        config.save_to_path(&path).unwrap();

        assert_eq!(Config::load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("mscan.toml");
        std::fs::write(&config_path, "[scanner]\nskip_comments = true\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.scanner.skip_comments);
        assert_eq!(config.scanner.max_identifier_len, 11);
        assert_eq!(config.output.format, OutputFormat::Listing);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("mscan.toml");
        std::fs::write(&config_path, "[output]\nformat = \"xml\"\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(MscanError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/mscan.toml"));
        assert!(matches!(result, Err(MscanError::Config(_))));
    }

    #[test]
    fn test_search_starts_in_working_directory() {
        let paths = search_paths();
        assert_eq!(paths[0], PathBuf::from(CONFIG_FILE_NAME));
        assert!(paths.iter().all(|p| p.ends_with(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("LISTING"), Some(OutputFormat::Listing));
        assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("xml"), None);
    }
}
