//! Configuration management for sampledox.
//!
//! Parses `sampledox.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! Paths are used exactly as written in the config file or on the command
//! line, interpreted relative to the working directory: the sample source
//! paths appear verbatim in the rendered `\include` directives, so they are
//! never resolved to absolute paths.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sampledox.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override sample root directory.
    pub sample_dir: Option<PathBuf>,
    /// Override output file path.
    pub output_file: Option<PathBuf>,
    /// Override sample source extension.
    pub extension: Option<String>,
}

/// Application configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Sample discovery configuration.
    pub samples: SamplesConfig,
    /// Output configuration.
    pub output: OutputConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Sample discovery configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SamplesConfig {
    /// Root directory scanned for sample subdirectories.
    pub source_dir: PathBuf,
    /// Extension of the per-sample source file, without the leading dot.
    pub extension: String,
}

impl Default for SamplesConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("samples"),
            extension: "cpp".to_owned(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination file; its base name seeds the index page id and title.
    pub file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("docs/Samples.dox"),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sampledox.toml` in the current directory and
    /// parents, falling back to defaults when none exists.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values. Validation runs last and covers
    /// the overridden values.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, parsing
    /// fails, or the effective configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(sample_dir) = &settings.sample_dir {
            self.samples.source_dir.clone_from(sample_dir);
        }
        if let Some(output_file) = &settings.output_file {
            self.output.file.clone_from(output_file);
        }
        if let Some(extension) = &settings.extension {
            self.samples.extension.clone_from(extension);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extension = &self.samples.extension;
        if extension.is_empty() {
            return Err(ConfigError::Validation(
                "samples.extension cannot be empty".to_owned(),
            ));
        }
        if extension.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "samples.extension must not include the leading dot: {extension}"
            )));
        }

        // The index page id is derived from the output base name, so the
        // path must carry one
        let stem = self.output.file.file_stem().and_then(|s| s.to_str());
        if stem.is_none_or(str::is_empty) {
            return Err(ConfigError::Validation(format!(
                "output.file has no usable base name: {}",
                self.output.file.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.samples.source_dir, PathBuf::from("samples"));
        assert_eq!(config.samples.extension, "cpp");
        assert_eq!(config.output.file, PathBuf::from("docs/Samples.dox"));
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.samples.source_dir, PathBuf::from("samples"));
        assert_eq!(config.output.file, PathBuf::from("docs/Samples.dox"));
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[samples]
source_dir = "RAII_Samples"
extension = "cpp"

[output]
file = "docs/RAII_Samples.dox"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.samples.source_dir, PathBuf::from("RAII_Samples"));
        assert_eq!(config.output.file, PathBuf::from("docs/RAII_Samples.dox"));
    }

    #[test]
    fn test_apply_cli_settings_sample_dir() {
        let mut config = Config::default();
        let overrides = CliSettings {
            sample_dir: Some(PathBuf::from("other_samples")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.samples.source_dir, PathBuf::from("other_samples"));
        assert_eq!(config.output.file, PathBuf::from("docs/Samples.dox")); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_multiple() {
        let mut config = Config::default();
        let overrides = CliSettings {
            sample_dir: Some(PathBuf::from("demos")),
            output_file: Some(PathBuf::from("docs/Demos.dox")),
            extension: Some("rs".to_owned()),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.samples.source_dir, PathBuf::from("demos"));
        assert_eq!(config.output.file, PathBuf::from("docs/Demos.dox"));
        assert_eq!(config.samples.extension, "rs");
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.samples.source_dir, PathBuf::from("samples"));
        assert_eq!(config.samples.extension, "cpp");
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");

        let result = Config::load(Some(&missing), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sampledox.toml");
        std::fs::write(&path, "[samples]\nsource_dir = \"demos\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.samples.source_dir, PathBuf::from("demos"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_applies_cli_settings_over_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sampledox.toml");
        std::fs::write(&path, "[samples]\nsource_dir = \"demos\"\n").unwrap();

        let overrides = CliSettings {
            sample_dir: Some(PathBuf::from("cli_demos")),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&overrides)).unwrap();

        assert_eq!(config.samples.source_dir, PathBuf::from("cli_demos"));
    }

    #[test]
    fn test_load_parse_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sampledox.toml");
        std::fs::write(&path, "[samples\n").unwrap();

        let result = Config::load(Some(&path), None);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_empty_extension() {
        let mut config = Config::default();
        config.samples.extension = String::new();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("samples.extension"));
    }

    #[test]
    fn test_validate_extension_with_leading_dot() {
        let mut config = Config::default();
        config.samples.extension = ".cpp".to_owned();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("leading dot"));
    }

    #[test]
    fn test_validate_output_without_base_name() {
        let mut config = Config::default();
        config.output.file = PathBuf::from("..");

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("output.file"));
    }

    #[test]
    fn test_load_validates_overridden_values() {
        let overrides = CliSettings {
            extension: Some(".cpp".to_owned()),
            ..Default::default()
        };
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sampledox.toml");
        std::fs::write(&path, "").unwrap();

        let result = Config::load(Some(&path), Some(&overrides));

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
