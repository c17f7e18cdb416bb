//! Configuration for the inventory reporter
//!
//! Every section is optional. A config file only needs the values it
//! changes:
//!
//! ```toml
//! [paths]
//! input = "~/.vscode/extensions/extensions.json"
//! listing = "reports/extensions.txt"
//!
//! [thresholds]
//! theme = 5
//!
//! [labels]
//! title = "VS Code Extension List"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, io};

/// Top-level reporter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub paths: PathsConfig,
    pub thresholds: Thresholds,
    pub labels: ReportLabels,
}

impl InventoryConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file is missing and
    /// [`Error::ConfigParse`] if it is not valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = io::read_text(path)?;
        Self::parse(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve configured paths to the ones a run will touch.
    ///
    /// `~/` expands to the home directory. Relative output paths are placed
    /// under `output_dir`; a relative input path is left as given.
    pub fn resolve_paths(&self, output_dir: &Path) -> ResolvedPaths {
        let place = |path: &Path| {
            let expanded = expand_home(path);
            if expanded.is_absolute() {
                expanded
            } else {
                output_dir.join(expanded)
            }
        };

        ResolvedPaths {
            input: expand_home(&self.paths.input),
            listing: place(&self.paths.listing),
            analysis: place(&self.paths.analysis),
            error_log: place(&self.paths.error_log),
        }
    }
}

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Inventory file to read.
    pub input: PathBuf,
    /// Full listing report.
    pub listing: PathBuf,
    /// Cleanup analysis report.
    pub analysis: PathBuf,
    /// Written only when a run fails.
    pub error_log: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input_path(),
            listing: PathBuf::from("cursor-extensions-list.txt"),
            analysis: PathBuf::from("extension-analysis.txt"),
            error_log: PathBuf::from("extension-error.txt"),
        }
    }
}

/// Category sizes above which the analysis suggests pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub theme: usize,
    pub language: usize,
    pub format: usize,
    pub git: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            theme: 3,
            language: 10,
            format: 5,
            git: 3,
        }
    }
}

/// Display strings embedded in the reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLabels {
    /// First line of the listing document.
    pub title: String,
    /// Status cell for enabled extensions.
    pub enabled: String,
    /// Status cell for disabled extensions.
    pub disabled: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            title: "Cursor Extension List".to_string(),
            enabled: "Enabled".to_string(),
            disabled: "Disabled".to_string(),
        }
    }
}

/// Concrete paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    pub listing: PathBuf,
    pub analysis: PathBuf,
    pub error_log: PathBuf,
}

/// Where the editor keeps its extension inventory.
pub fn default_input_path() -> PathBuf {
    let relative = Path::new(".cursor").join("extensions").join("extensions.json");
    match dirs::home_dir() {
        Some(home) => home.join(relative),
        None => relative,
    }
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = InventoryConfig::parse("").unwrap();
        assert_eq!(config, InventoryConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = InventoryConfig::parse(
            r#"
[thresholds]
theme = 7

[labels]
disabled = "Off"
"#,
        )
        .unwrap();

        assert_eq!(config.thresholds.theme, 7);
        assert_eq!(config.thresholds.language, 10);
        assert_eq!(config.labels.disabled, "Off");
        assert_eq!(config.labels.enabled, "Enabled");
        assert_eq!(config.paths, PathsConfig::default());
    }

    #[test]
    fn test_wrong_type_fails() {
        assert!(InventoryConfig::parse("[thresholds]\ntheme = \"many\"\n").is_err());
    }

    #[test]
    fn test_resolve_relative_outputs_under_output_dir() {
        let config = InventoryConfig::default();
        let out = Path::new("/srv/reports");

        let paths = config.resolve_paths(out);

        assert_eq!(paths.listing, out.join("cursor-extensions-list.txt"));
        assert_eq!(paths.analysis, out.join("extension-analysis.txt"));
        assert_eq!(paths.error_log, out.join("extension-error.txt"));
    }

    #[test]
    fn test_resolve_keeps_absolute_outputs() {
        let mut config = InventoryConfig::default();
        config.paths.listing = PathBuf::from("/var/tmp/list.txt");

        let paths = config.resolve_paths(Path::new("/srv/reports"));

        assert_eq!(paths.listing, PathBuf::from("/var/tmp/list.txt"));
    }

    #[test]
    fn test_expand_home() {
        let plain = Path::new("relative/file.json");
        assert_eq!(expand_home(plain), plain.to_path_buf());

        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                expand_home(Path::new("~/.cursor/extensions.json")),
                home.join(".cursor/extensions.json")
            );
        }
    }
}
