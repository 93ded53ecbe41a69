//! Configuration loaded from TOML.
//!
//! Every key is optional; missing sections fall back to defaults.
//!
//! ```toml
//! [train]
//! learning_rate = 1
//!
//! [evaluate]
//! record_items = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{LernmatrixError, Result};
use crate::trainer::{Trainer, LEARNING_RATE};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LernmatrixConfig {
    pub train: TrainConfig,
    pub evaluate: EvaluateConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Hebbian step ε.
    pub learning_rate: i64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: LEARNING_RATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateConfig {
    /// Keep per-item results in the evaluation report.
    pub record_items: bool,
}

impl Default for EvaluateConfig {
    fn default() -> Self {
        Self { record_items: true }
    }
}

impl LernmatrixConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(&path)?;
        Self::from_str(&contents)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|err| LernmatrixError::Config(err.to_string()))?;
        config.trainer()?;
        Ok(config)
    }

    /// Trainer configured with this learning rate.
    pub fn trainer(&self) -> Result<Trainer> {
        Trainer::with_learning_rate(self.train.learning_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_sections_missing() {
        let config = LernmatrixConfig::from_str("").unwrap();
        assert_eq!(config, LernmatrixConfig::default());
        assert_eq!(config.train.learning_rate, 1);
        assert!(config.evaluate.record_items);
    }

    #[test]
    fn parses_custom_values() {
        let toml = "[train]\nlearning_rate = 2\n\n[evaluate]\nrecord_items = false";
        let config = LernmatrixConfig::from_str(toml).unwrap();
        assert_eq!(config.train.learning_rate, 2);
        assert!(!config.evaluate.record_items);
        assert_eq!(config.trainer().unwrap().learning_rate(), 2);
    }

    #[test]
    fn rejects_non_positive_learning_rate() {
        let err = LernmatrixConfig::from_str("[train]\nlearning_rate = -1").unwrap_err();
        assert!(matches!(err, LernmatrixError::InvalidLearningRate(-1)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = LernmatrixConfig::from_str("[train\nlearning_rate = 1").unwrap_err();
        assert!(matches!(err, LernmatrixError::Config(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = LernmatrixConfig::load_from_file("/nonexistent/lernmatrix.toml").unwrap_err();
        assert!(matches!(err, LernmatrixError::Io(_)));
    }
}
