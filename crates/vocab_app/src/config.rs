//! Run configuration loaded from a RON file.
//!
//! Input and output paths live in `vocab.ron` next to the working
//! directory, with positional CLI overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vocab_logging::{vocab_info, vocab_warn};

pub const DEFAULT_CONFIG_FILENAME: &str = "vocab.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Plain-text corpus to harvest.
    pub input_path: PathBuf,
    /// Directory receiving the artifact and manifest.
    pub output_dir: PathBuf,
    /// Fixed artifact name; derived from the input path when absent.
    pub artifact_filename: Option<String>,
    /// Manifest sidecar name; skipped entirely when absent.
    pub manifest_filename: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("corpus.txt"),
            output_dir: PathBuf::from("out"),
            artifact_filename: None,
            manifest_filename: Some("manifest.json".to_string()),
        }
    }
}

/// Load configuration from `path`. A missing file means defaults; a file
/// that fails to parse is reported and also falls back to defaults, so a
/// broken config never aborts a run before the input is even opened.
pub fn load_config(path: &Path) -> RunConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return RunConfig::default();
        }
        Err(err) => {
            vocab_warn!("Failed to read config from {:?}: {}", path, err);
            return RunConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            vocab_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            vocab_warn!("Failed to parse config from {:?}: {}", path, err);
            RunConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{load_config, RunConfig};

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("nowhere.ron"));
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.ron");
        fs::write(&path, "(input_path: ").unwrap();
        assert_eq!(load_config(&path), RunConfig::default());
    }

    #[test]
    fn written_config_loads_back_identically() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vocab.ron");
        let config = RunConfig {
            input_path: "texts/kjv.txt".into(),
            output_dir: "artifacts".into(),
            artifact_filename: Some("kjv.words.mpk".to_string()),
            manifest_filename: None,
        };
        let pretty = ron::ser::PrettyConfig::new();
        fs::write(&path, ron::ser::to_string_pretty(&config, pretty).unwrap()).unwrap();
        assert_eq!(load_config(&path), config);
    }

    #[test]
    fn partial_config_fills_remaining_fields_from_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vocab.ron");
        fs::write(&path, "(input_path: \"bible.txt\")").unwrap();
        let config = load_config(&path);
        assert_eq!(config.input_path, std::path::PathBuf::from("bible.txt"));
        assert_eq!(config.output_dir, RunConfig::default().output_dir);
    }
}
