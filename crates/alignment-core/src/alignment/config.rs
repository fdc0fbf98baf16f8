//! Calculator configuration

use crate::error::{AlignmentError, Result, ResultExt};
use serde::Deserialize;
use std::path::Path;

/// Default sensitivity parameter
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Configuration for an [`AlignmentCalculator`](super::AlignmentCalculator)
///
/// Loaded from TOML:
///
/// ```
/// use alignment_core::alignment::AlignmentConfig;
///
/// let config = AlignmentConfig::from_toml_str("alpha = 0.75").unwrap();
/// assert_eq!(config.alpha, 0.75);
///
/// // Missing keys fall back to defaults
/// let config = AlignmentConfig::from_toml_str("").unwrap();
/// assert_eq!(config.alpha, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Sensitivity parameter scaling the alignment threshold
    pub alpha: f64,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl AlignmentConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set alpha
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Alpha must be finite and strictly positive
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(AlignmentError::InvalidAlpha(self.alpha));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(AlignmentError::from)
            .with_context(|| format!("Reading config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Parsing config {}", path.display()))
    }
}
