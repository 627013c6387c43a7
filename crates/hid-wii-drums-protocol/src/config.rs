//! Decoder configuration.

use crate::{DEFAULT_DIGITAL_THRESHOLD, DrumsError, DrumsResult};
use serde::{Deserialize, Serialize};
use wii_calibration::JoystickCalibration;

/// Tunables for a [`Drums`](crate::Drums) decoder.
///
/// Every field has a default, so a host config only needs to name what it
/// overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrumsConfig {
    /// Normalized stick displacement needed before directions are emitted.
    pub digital_threshold: f32,
    /// Stick calibration applied at construction and on every preset change.
    pub calibration: JoystickCalibration,
}

impl Default for DrumsConfig {
    fn default() -> Self {
        Self {
            digital_threshold: DEFAULT_DIGITAL_THRESHOLD,
            calibration: JoystickCalibration::GUITAR_DEFAULT,
        }
    }
}

impl DrumsConfig {
    /// # Errors
    ///
    /// Returns [`DrumsError::InvalidConfig`] when the threshold is not a
    /// finite positive number.
    pub fn validate(&self) -> DrumsResult<()> {
        if !self.digital_threshold.is_finite() || self.digital_threshold <= 0.0 {
            return Err(DrumsError::InvalidConfig(format!(
                "digital_threshold must be a finite, positive number, got {}",
                self.digital_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DrumsConfig::default();
        assert!((config.digital_threshold - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.calibration, JoystickCalibration::GUITAR_DEFAULT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_threshold() {
        for digital_threshold in [-0.1, 0.0, f32::NAN, f32::INFINITY] {
            let config = DrumsConfig {
                digital_threshold,
                ..DrumsConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(DrumsError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_deserialize_partial() -> Result<(), serde_json::Error> {
        let config: DrumsConfig = serde_json::from_str(
            r#"{"digital_threshold": 0.7, "calibration": {"dead_x": 6}}"#,
        )?;
        assert!((config.digital_threshold - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.calibration.dead_x, 6);
        assert_eq!(config.calibration.center_y, 32);
        Ok(())
    }

    #[test]
    fn test_deserialize_empty() -> Result<(), serde_json::Error> {
        let config: DrumsConfig = serde_json::from_str("{}")?;
        assert_eq!(config, DrumsConfig::default());
        Ok(())
    }
}
