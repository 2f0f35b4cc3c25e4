//! Reporter configuration: project root, editor catalog, persisted
//! preferred opener, and stack display options.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::types::{EditorOption, PreferredOpener, StackDisplayConfig, default_available_editors};

/// Top-level reporter configuration.
///
/// All fields have defaults so a partial YAML file is accepted; unknown
/// fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Project root used to resolve relative stack frame paths.
    pub project_root: PathBuf,
    /// Catalog of editors offered when no preferred opener is set.
    pub available_editors: Vec<EditorOption>,
    /// The confirmed opener, reused without re-prompting. `None` until the
    /// user picks one.
    pub preferred_opener: Option<PreferredOpener>,
    /// Stack trace display options.
    pub stack: StackDisplayConfig,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            available_editors: default_available_editors(),
            preferred_opener: None,
            stack: StackDisplayConfig::default(),
        }
    }
}

impl ReporterConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project root.
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    /// Path of the config file inside the platform config directory.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spec-reporter")
            .join("config.yaml")
    }

    /// Load configuration from the default path, creating a default file if
    /// none exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            log::info!("Loading existing config from {:?}", config_path);
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save_to(&config_path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            Ok(config)
        }
    }

    /// Load and validate configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        let config: ReporterConfig =
            serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }
        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;
        fs::write(path, yaml).map_err(ConfigError::from)?;
        log::info!("Config saved to {:?}", path);
        Ok(())
    }

    /// Semantic validation of the editor catalog.
    ///
    /// Rejects duplicate ids and more than one "Other" entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for editor in &self.available_editors {
            if !seen.insert(editor.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate editor id: {}",
                    editor.id
                )));
            }
        }
        let other_count = self.available_editors.iter().filter(|e| e.is_other).count();
        if other_count > 1 {
            return Err(ConfigError::Validation(format!(
                "at most one editor may have is_other = true, found {other_count}"
            )));
        }
        Ok(())
    }

    /// Record the opener the user confirmed. Callers decide when to persist.
    pub fn set_preferred_opener(&mut self, opener: PreferredOpener) {
        log::info!("Preferred opener set: {:?}", opener);
        self.preferred_opener = Some(opener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ReporterConfig::default();
        assert_eq!(config.project_root, PathBuf::from("."));
        assert_eq!(config.available_editors.len(), 6);
        assert!(config.preferred_opener.is_none());
        assert_eq!(config.stack.max_visible_frames, 5);
        assert_eq!(config.stack.keep_tail_frames, 1);
    }

    #[test]
    fn test_with_project_root() {
        let config = ReporterConfig::new().with_project_root("/me/dev");
        assert_eq!(config.project_root, PathBuf::from("/me/dev"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("config.yaml");

        let mut config = ReporterConfig::new().with_project_root("/me/dev");
        config.set_preferred_opener(PreferredOpener::Custom {
            path: "/usr/local/bin/subl".to_string(),
        });
        config.save_to(&path).expect("save");

        let loaded = ReporterConfig::load_from(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_yaml_accepts_defaults() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "project_root: /foo/bar\n").expect("write");

        let loaded = ReporterConfig::load_from(&path).expect("load");
        assert_eq!(loaded.project_root, PathBuf::from("/foo/bar"));
        assert_eq!(loaded.available_editors.len(), 6);
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut config = ReporterConfig::default();
        config
            .available_editors
            .push(EditorOption::new("vim", "Vim Again", "vim"));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("duplicate editor id"));
    }

    #[test]
    fn test_validate_rejects_two_other_entries() {
        let mut config = ReporterConfig::default();
        config.available_editors.push(EditorOption::other("Other2"));
        // Second "other" entry collides on id as well, so give it a unique id
        // to exercise the is_other check specifically.
        config.available_editors.last_mut().unwrap().id = "other2".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("is_other"));
    }

    #[test]
    fn test_load_from_invalid_yaml_is_parse_error() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "available_editors: {not a list}\n").expect("write");

        let err = ReporterConfig::load_from(&path).unwrap_err();
        let cfg_err = err.downcast_ref::<ConfigError>().expect("ConfigError");
        assert!(matches!(cfg_err, ConfigError::Parse(_)));
    }
}
