use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::config::Config;

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "taskmark.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the config for a run.
///
/// An explicit path must exist. Otherwise `taskmark.toml` in `dir` is used if
/// present, and defaults if not.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading config");
        return read_config(path);
    }
    let path = dir.join(CONFIG_FILE);
    if path.is_file() {
        debug!(path = %path.display(), "loading config");
        read_config(&path)
    } else {
        debug!("no config file, using defaults");
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r#"[markup]
emphasis = false
max_tag_width = 12

[edit]
bold = "__"

[[lists]]
name = "Grocery"
full_path = "Shopping/Grocery"
task_count = 4
depth = 1
color = "green"
"#
    }

    #[test]
    fn test_read_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, sample_config()).unwrap();

        let config = read_config(&path).unwrap();
        assert!(!config.markup.emphasis);
        assert!(config.markup.hashtags);
        assert_eq!(config.markup.max_tag_width, 12);
        assert_eq!(config.edit.bold, "__");
        assert_eq!(config.edit.italic, "*");
        assert_eq!(config.lists[0].full_path, "Shopping/Grocery");
        assert_eq!(config.lists[0].color.as_deref(), Some("green"));
    }

    #[test]
    fn test_load_from_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), sample_config()).unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.lists.len(), 1);
    }

    #[test]
    fn test_missing_default_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path), tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "[markup\nhashtags = ").unwrap();
        let err = load_config(None, tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }
}
