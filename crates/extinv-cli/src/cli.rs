//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use extinv_core::InventoryConfig;

use crate::error::Result;

/// Extension Inventory - Report on installed editor extensions
///
/// Reads the editor's extensions.json and writes a full listing plus a
/// cleanup analysis. With no options, everything runs on built-in defaults.
///
/// Examples:
///   ext-inventory                          # Default input, reports in current directory
///   ext-inventory -i ./extensions.json     # Explicit inventory file
///   ext-inventory -o reports/ -c inv.toml  # Custom output directory and config
#[derive(Parser, Debug)]
#[command(name = "ext-inventory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// TOML config file with paths, thresholds and labels
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Inventory file to read (overrides the config)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory for relative report paths
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

impl Cli {
    /// Build the effective configuration from the config file and flags.
    pub fn load_config(&self) -> Result<InventoryConfig> {
        let mut config = match &self.config {
            Some(path) => InventoryConfig::load(path)?,
            None => InventoryConfig::default(),
        };

        if let Some(input) = &self.input {
            config.paths.input = input.clone();
        }

        tracing::debug!(?config, "effective configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["ext-inventory"]).unwrap();

        assert!(!cli.verbose);
        assert!(cli.config.is_none());
        assert!(cli.input.is_none());
        assert_eq!(cli.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_input_overrides_default() {
        let cli = Cli::try_parse_from(["ext-inventory", "--input", "/data/ext.json"]).unwrap();

        let config = cli.load_config().unwrap();

        assert_eq!(config.paths.input, Path::new("/data/ext.json"));
    }

    #[test]
    fn test_missing_config_file_fails() {
        let cli = Cli::try_parse_from(["ext-inventory", "-c", "/definitely/not/here.toml"]).unwrap();

        assert!(cli.load_config().is_err());
    }
}
