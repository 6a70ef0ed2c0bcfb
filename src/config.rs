use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AlignmentError;

/// Tunables of the token aligner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Exclusive bound on the re-synchronization search: shifts of
    /// `1..window_size` are tried in each direction.
    pub window_size: usize,
    /// Characters stripped from both ends of a token before comparison.
    pub punctuation: String,
}

impl MatchConfig {
    pub const DEFAULT_WINDOW_SIZE: usize = 10;
    pub const DEFAULT_PUNCTUATION: &'static str = ".,;:!?‘’'[]()/\"-—–“”«»„…*";

    pub fn load(path: &Path) -> Result<Self, AlignmentError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| AlignmentError::io(format!("read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&data)
            .map_err(|e| AlignmentError::json("parse match config", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AlignmentError> {
        if self.window_size == 0 {
            return Err(AlignmentError::invalid_input(
                "window_size must be at least 1",
            ));
        }
        if self.punctuation.is_empty() {
            return Err(AlignmentError::invalid_input(
                "punctuation set must not be empty",
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            window_size: Self::DEFAULT_WINDOW_SIZE,
            punctuation: Self::DEFAULT_PUNCTUATION.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyserConfig {
    pub truth_dir: PathBuf,
    pub predicted_dir: PathBuf,
    /// Tokenize the truth `<body>` on whitespace instead of reading its tags.
    pub truth_plaintext: bool,
    pub matching: MatchConfig,
}

impl AnalyserConfig {
    pub const DEFAULT_TRUTH_DIR: &'static str = "truth";
    pub const DEFAULT_PREDICTED_DIR: &'static str = "galahad";
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            truth_dir: PathBuf::from(Self::DEFAULT_TRUTH_DIR),
            predicted_dir: PathBuf::from(Self::DEFAULT_PREDICTED_DIR),
            truth_plaintext: false,
            matching: MatchConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_config_default() {
        let config = MatchConfig::default();
        assert_eq!(config.window_size, 10);
        assert_eq!(config.punctuation, MatchConfig::DEFAULT_PUNCTUATION);
        assert!(config.punctuation.contains('…'));
        assert!(config.punctuation.contains('„'));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn analyser_config_default() {
        let config = AnalyserConfig::default();
        assert_eq!(config.truth_dir, PathBuf::from("truth"));
        assert_eq!(config.predicted_dir, PathBuf::from("galahad"));
        assert!(!config.truth_plaintext);
        assert_eq!(config.matching, MatchConfig::default());
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{ "window_size": 4 }"#)
            .expect("valid match config json");
        assert_eq!(config.window_size, 4);
        assert_eq!(config.punctuation, MatchConfig::DEFAULT_PUNCTUATION);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<MatchConfig, _> = serde_json::from_str(r#"{ "window": 4 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn load_validates_window_size() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("match.json");
        std::fs::write(&path, r#"{ "window_size": 0 }"#).expect("write config");
        let err = MatchConfig::load(&path).unwrap_err();
        assert!(matches!(err, AlignmentError::InvalidInput { .. }));
    }

    #[test]
    fn load_reads_custom_punctuation() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("match.json");
        std::fs::write(&path, r#"{ "punctuation": ".,", "window_size": 3 }"#)
            .expect("write config");
        let config = MatchConfig::load(&path).expect("config loads");
        assert_eq!(config.punctuation, ".,");
        assert_eq!(config.window_size, 3);
    }

    #[test]
    fn load_fails_on_missing_file() {
        let result = MatchConfig::load(Path::new("/nonexistent/match.json"));
        assert!(matches!(result, Err(AlignmentError::Io { .. })));
    }
}
