//! Configuration file handling.
//!
//! Configuration is read from a TOML file. Every field is optional and
//! falls back to its default.
//!
//! # Configuration Location
//!
//! - Linux: `~/.config/chainaudit/config.toml`
//! - macOS: `~/Library/Application Support/chainaudit/config.toml`
//! - Windows: `%APPDATA%\chainaudit\config.toml`
//!
//! A different file can be passed with `--config`.
//!
//! # Example Configuration
//!
//! ```toml
//! default_paths = ["~/work/web", "~/work/web/functions"]
//! report_file = "chainaudit-report.txt"
//! default_format = "text"
//!
//! [ignore]
//! packages = ["@internal/*", "debug"]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project roots audited when none are given on the command line.
    ///
    /// Default: empty, meaning the current directory
    pub default_paths: Vec<PathBuf>,

    /// Where the rendered report is written.
    ///
    /// Default: `chainaudit-report.txt`
    pub report_file: PathBuf,

    /// Output format when no `--format` flag is provided.
    ///
    /// Valid values: "text", "json", "table"
    /// Default: "text"
    pub default_format: String,

    /// Suppression list for accepted findings.
    pub ignore: IgnoreConfig,
}

/// Packages whose findings are dropped before tallying.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Exact package ids, or patterns with a single `*` such as `@types/*`.
    pub packages: Vec<String>,
}

impl IgnoreConfig {
    pub fn should_ignore_package(&self, package_id: &str) -> bool {
        self.packages
            .iter()
            .any(|pattern| pattern_matches(pattern, package_id))
    }
}

fn pattern_matches(pattern: &str, package_id: &str) -> bool {
    match pattern.split_once('*') {
        Some((prefix, suffix)) => {
            package_id.len() >= prefix.len() + suffix.len()
                && package_id.starts_with(prefix)
                && package_id.ends_with(suffix)
        }
        None => pattern == package_id,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_paths: Vec::new(),
            report_file: PathBuf::from("chainaudit-report.txt"),
            default_format: "text".to_string(),
            ignore: IgnoreConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from [`Config::config_path`]
    /// when no path is given.
    ///
    /// A missing default config file yields the defaults. An explicitly
    /// requested file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        if !explicit && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Saves the configuration to `path`, creating the parent directory if
    /// needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chainaudit")
            .join("config.toml")
    }

    pub fn generate_default_config() -> String {
        toml::to_string_pretty(&Config::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_pattern_matches() {
        assert!(pattern_matches("debug", "debug"));
        assert!(!pattern_matches("debug", "debug-js"));
        assert!(pattern_matches("@ctrl/*", "@ctrl/tinycolor"));
        assert!(!pattern_matches("@ctrl/*", "@nativescript-community/text"));
        assert!(pattern_matches("*-ansi", "strip-ansi"));
        assert!(!pattern_matches("*-ansi", "ansi-regex"));
        assert!(pattern_matches("*", "anything"));
        assert!(!pattern_matches("ab*ba", "aba"));
    }

    #[test]
    fn test_ignore_config_packages() {
        let ignore = IgnoreConfig {
            packages: vec!["chalk".to_string(), "@ctrl/*".to_string()],
        };

        assert!(ignore.should_ignore_package("chalk"));
        assert!(ignore.should_ignore_package("@ctrl/deluge"));
        assert!(!ignore.should_ignore_package("chalk-template"));
        assert!(!IgnoreConfig::default().should_ignore_package("chalk"));
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert!(config.default_paths.is_empty());
        assert_eq!(config.report_file, PathBuf::from("chainaudit-report.txt"));
        assert_eq!(config.default_format, "text");
        assert!(config.ignore.packages.is_empty());
    }

    #[test]
    fn test_config_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "default_format = \"json\"\n\n[ignore]\npackages = [\"debug\"]\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.default_format, "json");
        assert_eq!(config.ignore.packages, vec!["debug".to_string()]);
        assert_eq!(config.report_file, PathBuf::from("chainaudit-report.txt"));
    }

    #[test]
    fn test_config_load_explicit_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(Config::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.default_paths = vec![PathBuf::from("web"), PathBuf::from("web/functions")];
        config.save_to(&path).unwrap();

        assert_eq!(Config::load(Some(path.as_path())).unwrap(), config);
    }

    #[test]
    fn test_default_config_round_trips() {
        let generated = Config::generate_default_config();
        let parsed: Config = toml::from_str(&generated).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
