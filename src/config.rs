use std::path::Path;

use serde::Deserialize;

use crate::error::ReadAlongError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReadAlongConfig {
    /// Minimum spacing between two wheel-driven line transitions.
    pub wheel_throttle_ms: u64,
    /// Automatic restarts granted when the recognition channel drops out.
    pub max_channel_restarts: u32,
    /// Per-word pronunciation score below which a word is marked for review.
    pub word_score_threshold: f32,
    pub pass_accuracy: f32,
    pub language: String,
    pub speech_rate: f32,
}

impl ReadAlongConfig {
    pub const DEFAULT_WHEEL_THROTTLE_MS: u64 = 400;
    pub const DEFAULT_SCORE_THRESHOLD: f32 = 80.0;

    pub fn load(path: &Path) -> Result<Self, ReadAlongError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| ReadAlongError::io("read read-along config", e))?;
        let config: Self = serde_json::from_str(&data)
            .map_err(|e| ReadAlongError::json("parse read-along config", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReadAlongError> {
        if !self.speech_rate.is_finite() || self.speech_rate <= 0.0 {
            return Err(ReadAlongError::invalid_input(format!(
                "speech_rate must be a positive number, got {}",
                self.speech_rate
            )));
        }
        for (name, value) in [
            ("word_score_threshold", self.word_score_threshold),
            ("pass_accuracy", self.pass_accuracy),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ReadAlongError::invalid_input(format!(
                    "{name} must be within [0, 100], got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ReadAlongConfig {
    fn default() -> Self {
        Self {
            wheel_throttle_ms: Self::DEFAULT_WHEEL_THROTTLE_MS,
            max_channel_restarts: 1,
            word_score_threshold: Self::DEFAULT_SCORE_THRESHOLD,
            pass_accuracy: Self::DEFAULT_SCORE_THRESHOLD,
            language: "vi-VN".to_string(),
            speech_rate: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_along_config_default() {
        let config = ReadAlongConfig::default();
        assert_eq!(config.wheel_throttle_ms, 400);
        assert_eq!(config.max_channel_restarts, 1);
        assert_eq!(config.word_score_threshold, 80.0);
        assert_eq!(config.language, "vi-VN");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ReadAlongConfig =
            serde_json::from_str(r#"{ "wheel_throttle_ms": 250 }"#).expect("valid config json");
        assert_eq!(config.wheel_throttle_ms, 250);
        assert_eq!(config.max_channel_restarts, 1);
        assert_eq!(config.speech_rate, 1.0);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = ReadAlongConfig {
            speech_rate: 0.0,
            ..ReadAlongConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ReadAlongConfig {
            pass_accuracy: 120.0,
            ..ReadAlongConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_file_and_reports_missing() {
        let path = std::env::temp_dir().join("readalong_rs_config_load.json");
        std::fs::write(&path, r#"{ "language": "en-US", "speech_rate": 0.8 }"#)
            .expect("write config");
        let config = ReadAlongConfig::load(&path).expect("load config");
        assert_eq!(config.language, "en-US");
        assert!((config.speech_rate - 0.8).abs() < 1e-6);
        let _ = std::fs::remove_file(&path);

        let missing = ReadAlongConfig::load(Path::new("/nonexistent/readalong.json"));
        assert!(matches!(missing, Err(ReadAlongError::Io { .. })));
    }
}
