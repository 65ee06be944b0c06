//! Graticule configuration
//!
//! A flat, immutable value owned by the host. The engine reads it once per
//! invocation; out-of-range steps are clamped rather than rejected so a
//! half-typed value in an input box never stalls a frame.

use crate::core::constants::{MAX_STEP, MIN_STEP, STANDARD_STEP};
use crate::{GraticuleError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraticuleConfig {
    /// Spacing of parallels, in degrees
    pub latitudes_step: f64,
    /// Spacing of meridians, in degrees
    pub longitudes_step: f64,
    /// Parallel spacing at tile zoom 0, used by auto-step
    pub latitudes_step_standard: f64,
    /// Meridian spacing at tile zoom 0, used by auto-step
    pub longitudes_step_standard: f64,
    pub min_step: f64,
    pub max_step: f64,
    /// Whether the grid is drawn at all
    pub show: bool,
    /// Whether the host rescales steps on zoom
    pub auto_step: bool,
}

impl Default for GraticuleConfig {
    fn default() -> Self {
        Self {
            latitudes_step: STANDARD_STEP,
            longitudes_step: STANDARD_STEP,
            latitudes_step_standard: STANDARD_STEP,
            longitudes_step_standard: STANDARD_STEP,
            min_step: MIN_STEP,
            max_step: MAX_STEP,
            show: true,
            auto_step: true,
        }
    }
}

impl GraticuleConfig {
    pub fn with_steps(mut self, latitudes_step: f64, longitudes_step: f64) -> Self {
        self.latitudes_step = latitudes_step;
        self.longitudes_step = longitudes_step;
        self
    }

    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn with_auto_step(mut self, auto_step: bool) -> Self {
        self.auto_step = auto_step;
        self
    }

    fn step_bounds(&self) -> (f64, f64) {
        let min = if self.min_step.is_finite() && self.min_step > 0.0 {
            self.min_step.max(MIN_STEP)
        } else {
            MIN_STEP
        };
        let max = if self.max_step.is_finite() && self.max_step >= min {
            self.max_step
        } else {
            MAX_STEP.max(min)
        };
        (min, max)
    }

    /// Clamp a step into `[min_step, max_step]`; NaN and non-positive
    /// values fall back to `min_step`. `min_step` never goes below
    /// [`MIN_STEP`].
    pub fn clamp_step(&self, step: f64) -> f64 {
        let (min, max) = self.step_bounds();
        if step.is_nan() || step <= 0.0 {
            min
        } else {
            step.clamp(min, max)
        }
    }

    /// Copy with both steps clamped
    pub fn clamped(&self) -> Self {
        let clamped = Self {
            latitudes_step: self.clamp_step(self.latitudes_step),
            longitudes_step: self.clamp_step(self.longitudes_step),
            ..self.clone()
        };
        if clamped.latitudes_step != self.latitudes_step
            || clamped.longitudes_step != self.longitudes_step
        {
            log::warn!(
                "graticule steps ({}, {}) clamped to ({}, {})",
                self.latitudes_step,
                self.longitudes_step,
                clamped.latitudes_step,
                clamped.longitudes_step
            );
        }
        clamped
    }

    /// Rejects bounds that cannot be clamped against
    pub fn validate(&self) -> Result<()> {
        if !self.min_step.is_finite() || self.min_step < MIN_STEP {
            return Err(GraticuleError::Config(format!(
                "min_step must be at least {}, got {}",
                MIN_STEP, self.min_step
            )));
        }
        if !self.max_step.is_finite() || self.max_step < self.min_step {
            return Err(GraticuleError::Config(format!(
                "max_step must be at least min_step ({}), got {}",
                self.min_step, self.max_step
            )));
        }
        for (name, value) in [
            ("latitudes_step_standard", self.latitudes_step_standard),
            ("longitudes_step_standard", self.longitudes_step_standard),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraticuleError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GraticuleConfig::default();
        assert_eq!(config.latitudes_step, 120.0);
        assert_eq!(config.longitudes_step_standard, 120.0);
        assert_eq!(config.min_step, 0.001);
        assert_eq!(config.max_step, 180.0);
        assert!(config.show);
        assert!(config.auto_step);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp_step() {
        let config = GraticuleConfig::default();
        assert_eq!(config.clamp_step(0.0), 0.001);
        assert_eq!(config.clamp_step(-5.0), 0.001);
        assert_eq!(config.clamp_step(f64::NAN), 0.001);
        assert_eq!(config.clamp_step(f64::INFINITY), 180.0);
        assert_eq!(config.clamp_step(f64::NEG_INFINITY), 0.001);
        assert_eq!(config.clamp_step(1000.0), 180.0);
        assert_eq!(config.clamp_step(0.0001), 0.001);
        assert_eq!(config.clamp_step(15.0), 15.0);
    }

    #[test]
    fn test_clamp_step_with_broken_bounds() {
        let config = GraticuleConfig {
            min_step: -1.0,
            max_step: f64::NAN,
            ..Default::default()
        };
        assert_eq!(config.clamp_step(0.0), MIN_STEP);
        assert_eq!(config.clamp_step(500.0), MAX_STEP);
    }

    #[test]
    fn test_min_step_has_a_floor() {
        let config = GraticuleConfig {
            min_step: 1e-4,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GraticuleError::Config(_))));
        assert_eq!(config.clamp_step(1e-6), MIN_STEP);

        let config = GraticuleConfig {
            min_step: 1e-12,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.clamp_step(1e-9), MIN_STEP);
    }

    #[test]
    fn test_clamped() {
        let config = GraticuleConfig::default().with_steps(0.0, 720.0).clamped();
        assert_eq!(config.latitudes_step, 0.001);
        assert_eq!(config.longitudes_step, 180.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GraticuleConfig::from_json(r#"{ "latitudes_step": 30, "show": false }"#).unwrap();
        assert_eq!(config.latitudes_step, 30.0);
        assert_eq!(config.longitudes_step, 120.0);
        assert!(!config.show);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GraticuleConfig::default().with_steps(10.0, 15.0).with_auto_step(false);
        let json = config.to_json().unwrap();
        assert_eq!(GraticuleConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            GraticuleConfig::from_json("{ not json"),
            Err(GraticuleError::Serialization(_))
        ));
        assert!(matches!(
            GraticuleConfig::from_json(r#"{ "min_step": 0 }"#),
            Err(GraticuleError::Config(_))
        ));
        assert!(matches!(
            GraticuleConfig::from_json(r#"{ "min_step": 5, "max_step": 1 }"#),
            Err(GraticuleError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            GraticuleConfig::from_file("/definitely/not/here.json"),
            Err(GraticuleError::Io(_))
        ));
    }
}
