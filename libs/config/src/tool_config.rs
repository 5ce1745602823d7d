//! Tool Configuration Module
//!
//! Loads tool settings from layered sources: built-in defaults, then an
//! optional TOML file, then `FPGA_PART_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_NAME: &str = "fpga-part";

/// Prefix for environment overrides, e.g. `FPGA_PART_LOG_LEVEL=debug`
pub const ENV_PREFIX: &str = "FPGA_PART";

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Tool settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToolConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub output: OutputFormat,

    /// User parts file; `~` and `$VAR` are expanded
    #[serde(default)]
    pub parts_file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputFormat::default(),
            parts_file: None,
        }
    }
}

impl ToolConfig {
    /// Load configuration with environment overrides
    ///
    /// An explicit `path` must exist; otherwise `fpga-part.toml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("log_level", default_log_level())
            .context("Failed to set default log level")?
            .set_default("output", "text")
            .context("Failed to set default output format")?;

        builder = match path {
            Some(path) => {
                info!("Loading tool config: {:?}", path);
                builder.add_source(File::from(path).required(true))
            }
            None => {
                debug!("Looking for optional {}.toml", DEFAULT_CONFIG_NAME);
                builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false))
            }
        };

        // Override with environment variables (FPGA_PART_ prefix)
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Parts file path with `~` and environment variables expanded
    pub fn parts_path(&self) -> Result<Option<PathBuf>> {
        match &self.parts_file {
            None => Ok(None),
            Some(raw) => {
                let expanded = shellexpand::full(raw).context("Failed to expand parts file path")?;
                Ok(Some(PathBuf::from(expanded.as_ref())))
            }
        }
    }
}

/// Convenience function to load configuration with defaults
pub fn load_config(path: Option<&Path>) -> Result<ToolConfig> {
    ToolConfig::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::tempdir;

    // Loading reads the process environment and working directory
    static PROCESS_STATE: Mutex<()> = Mutex::new(());

    fn lock_process_state() -> MutexGuard<'static, ()> {
        PROCESS_STATE.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn test_load_explicit_file() {
        let _guard = lock_process_state();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("tool.toml");

        let config_content = r#"
log_level = "debug"
output = "json"
parts_file = "/opt/boards/parts.toml"
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = ToolConfig::load(Some(&config_path)).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(
            config.parts_path().unwrap(),
            Some(PathBuf::from("/opt/boards/parts.toml"))
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let _guard = lock_process_state();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("tool.toml");
        fs::write(&config_path, "output = \"json\"\n").unwrap();

        let config = ToolConfig::load(Some(&config_path)).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.parts_file, None);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let _guard = lock_process_state();
        let dir = tempdir().unwrap();
        let result = ToolConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_output_format() {
        let _guard = lock_process_state();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("tool.toml");
        fs::write(&config_path, "output = \"yaml\"\n").unwrap();

        assert!(ToolConfig::load(Some(&config_path)).is_err());
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = lock_process_state();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("tool.toml");
        fs::write(&config_path, "log_level = \"info\"\noutput = \"text\"\n").unwrap();

        env::set_var("FPGA_PART_LOG_LEVEL", "debug");
        env::set_var("FPGA_PART_OUTPUT", "json");
        let result = ToolConfig::load(Some(&config_path));
        env::remove_var("FPGA_PART_LOG_LEVEL");
        env::remove_var("FPGA_PART_OUTPUT");

        let config = result.unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Json);

        // Back to the file value once the variable is gone
        let config = ToolConfig::load(Some(&config_path)).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_default_file_in_working_directory() {
        let _guard = lock_process_state();
        let dir = tempdir().unwrap();
        let previous = env::current_dir().unwrap();

        env::set_current_dir(dir.path()).unwrap();
        let without_file = ToolConfig::load(None);
        fs::write(
            dir.path().join(format!("{}.toml", DEFAULT_CONFIG_NAME)),
            "log_level = \"trace\"\nparts_file = \"boards.toml\"\n",
        )
        .unwrap();
        let with_file = ToolConfig::load(None);
        env::set_current_dir(previous).unwrap();

        assert_eq!(without_file.unwrap(), ToolConfig::default());

        let config = with_file.unwrap();
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.parts_file.as_deref(), Some("boards.toml"));
    }

    #[test]
    fn test_parts_path_expands_home() {
        let config = ToolConfig {
            parts_file: Some("~/parts.toml".to_string()),
            ..ToolConfig::default()
        };
        let path = config.parts_path().unwrap().unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("parts.toml"));
    }
}
