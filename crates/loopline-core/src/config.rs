//! Runtime configuration for sampling and editing.
//!
//! The `const` values are the defaults used when a field is absent.

use serde::{Deserialize, Serialize};

use crate::error::{LoopError, Result};
use crate::traits::Validate;

/// Parameter step used for arc-length integration and closest-point scans.
pub const DEFAULT_SAMPLE_STEP: f64 = 0.005;
/// Distance a selected control point moves per nudge command.
pub const DEFAULT_NUDGE_STEP: f64 = 1.0;

/// How offsets beyond the total path length are mapped to a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetPolicy {
    /// Wrap the offset modulo the total length.
    #[default]
    Wrap,
    /// Reject offsets outside `[0, total]` with `OffsetOutOfRange`.
    Reject,
}

/// Sampling configuration of the curve engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    #[serde(default = "default_step")]
    pub step: f64,
    #[serde(default)]
    pub offset_policy: OffsetPolicy,
}

fn default_step() -> f64 {
    DEFAULT_SAMPLE_STEP
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_SAMPLE_STEP,
            offset_policy: OffsetPolicy::default(),
        }
    }
}

impl SamplingConfig {
    pub fn with_step(step: f64) -> Result<Self> {
        let config = Self {
            step,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_offset_policy(mut self, policy: OffsetPolicy) -> Self {
        self.offset_policy = policy;
        self
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LoopError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        log::debug!("Loaded sampling config: {:?}", config);
        Ok(config)
    }

    /// Number of samples covering one unit of `t`: `round(1 / step)`.
    ///
    /// Arc-length integration steps by `1 / samples_per_segment()`, which
    /// equals `step` only when `step` divides 1 evenly. The closest-point scan
    /// uses `step` as given.
    pub fn samples_per_segment(&self) -> usize {
        (1.0 / self.step).round().max(1.0) as usize
    }
}

impl Validate for SamplingConfig {
    fn validate(&self) -> Result<()> {
        if !self.step.is_finite() || self.step <= 0.0 || self.step > 1.0 {
            log::warn!("Rejecting sampling step {}", self.step);
            return Err(LoopError::InvalidConfig(format!(
                "sampling step must be in (0, 1], got {}",
                self.step
            )));
        }
        Ok(())
    }
}

/// Configuration of the track editor commands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_nudge_step")]
    pub nudge_step: f64,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

fn default_nudge_step() -> f64 {
    DEFAULT_NUDGE_STEP
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            nudge_step: DEFAULT_NUDGE_STEP,
            sampling: SamplingConfig::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LoopError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        log::debug!("Loaded editor config: {:?}", config);
        Ok(config)
    }
}

impl Validate for EditorConfig {
    fn validate(&self) -> Result<()> {
        if !self.nudge_step.is_finite() || self.nudge_step <= 0.0 {
            log::warn!("Rejecting nudge step {}", self.nudge_step);
            return Err(LoopError::InvalidConfig(format!(
                "nudge step must be positive, got {}",
                self.nudge_step
            )));
        }
        self.sampling.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sampling() {
        let config = SamplingConfig::default();
        assert_eq!(config.step, 0.005);
        assert_eq!(config.offset_policy, OffsetPolicy::Wrap);
        assert_eq!(config.samples_per_segment(), 200);
    }

    #[test]
    fn test_samples_per_segment_rounds() {
        assert_eq!(SamplingConfig::with_step(0.3).unwrap().samples_per_segment(), 3);
        assert_eq!(SamplingConfig::with_step(0.25).unwrap().samples_per_segment(), 4);
        assert_eq!(SamplingConfig::with_step(1.0).unwrap().samples_per_segment(), 1);
    }

    #[test]
    fn test_sampling_from_json_defaults_missing_fields() {
        let config = SamplingConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SamplingConfig::default());

        let config = SamplingConfig::from_json_str(r#"{"step": 0.01, "offset_policy": "reject"}"#)
            .unwrap();
        assert_eq!(config.step, 0.01);
        assert_eq!(config.offset_policy, OffsetPolicy::Reject);
    }

    #[test]
    fn test_sampling_rejects_bad_step() {
        assert!(SamplingConfig::with_step(0.0).is_err());
        assert!(SamplingConfig::with_step(-0.1).is_err());
        assert!(SamplingConfig::with_step(2.0).is_err());
        assert!(SamplingConfig::with_step(f64::NAN).is_err());
        assert!(matches!(
            SamplingConfig::from_json_str(r#"{"step": 0}"#),
            Err(LoopError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_sampling_rejects_malformed_json() {
        assert!(matches!(
            SamplingConfig::from_json_str("{step"),
            Err(LoopError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_editor_config() {
        let config = EditorConfig::from_json_str(r#"{"nudge_step": 2.5}"#).unwrap();
        assert_eq!(config.nudge_step, 2.5);
        assert_eq!(config.sampling, SamplingConfig::default());

        assert!(EditorConfig::from_json_str(r#"{"nudge_step": -1.0}"#).is_err());
        assert!(
            EditorConfig::from_json_str(r#"{"sampling": {"step": 5.0}}"#).is_err()
        );
    }
}
