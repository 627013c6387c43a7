//! Calibration type definitions

use serde::{Deserialize, Serialize};

/// Per-axis calibration parameters for a two-axis stick.
///
/// `min_*`/`max_*` double as the running extrema: [`Joystick`](crate::Joystick)
/// widens them whenever a sample falls outside, so a configured range is the
/// starting envelope rather than a hard limit.
///
/// # Examples
///
/// ```
/// use wii_calibration::JoystickCalibration;
///
/// let calib = JoystickCalibration::GUITAR_DEFAULT;
/// assert_eq!(calib.center_x, 32);
/// assert!(!calib.is_empty());
/// assert!(JoystickCalibration::EMPTY.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoystickCalibration {
    /// Raw X reading at rest.
    pub center_x: i32,
    /// Lowest raw X reading seen or configured.
    pub min_x: i32,
    /// Highest raw X reading seen or configured.
    pub max_x: i32,
    /// Half-width of the X dead band around `center_x`, in raw units.
    pub dead_x: i32,
    /// Raw Y reading at rest.
    pub center_y: i32,
    /// Lowest raw Y reading seen or configured.
    pub min_y: i32,
    /// Highest raw Y reading seen or configured.
    pub max_y: i32,
    /// Half-width of the Y dead band around `center_y`, in raw units.
    pub dead_y: i32,
}

impl JoystickCalibration {
    /// All-zero calibration, as held by a controller nobody has calibrated.
    pub const EMPTY: Self = Self {
        center_x: 0,
        min_x: 0,
        max_x: 0,
        dead_x: 0,
        center_y: 0,
        min_y: 0,
        max_y: 0,
        dead_y: 0,
    };

    /// Stock calibration for the 6-bit stick found on guitar and drum
    /// extensions.
    pub const GUITAR_DEFAULT: Self = Self {
        center_x: 32,
        min_x: 0,
        max_x: 63,
        dead_x: 4,
        center_y: 32,
        min_y: 0,
        max_y: 63,
        dead_y: 4,
    };

    /// Whether this calibration was never set (both maxima are zero).
    pub fn is_empty(&self) -> bool {
        self.max_x == 0 && self.max_y == 0
    }

    /// Collapse both ranges onto their centers so auto-expansion can rebuild
    /// them from fresh samples. Centers and dead bands are kept.
    pub fn reset_range(&mut self) {
        self.min_x = self.center_x;
        self.max_x = self.center_x;
        self.min_y = self.center_y;
        self.max_y = self.center_y;
    }
}

impl Default for JoystickCalibration {
    fn default() -> Self {
        Self::GUITAR_DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_guitar_stick() {
        let calib = JoystickCalibration::default();
        assert_eq!(calib, JoystickCalibration::GUITAR_DEFAULT);
        assert_eq!((calib.min_x, calib.max_x), (0, 63));
        assert_eq!(calib.dead_y, 4);
    }

    #[test]
    fn test_empty_detection() {
        let mut calib = JoystickCalibration::EMPTY;
        assert!(calib.is_empty());

        calib.max_y = 10;
        assert!(!calib.is_empty());
    }

    #[test]
    fn test_reset_range() {
        let mut calib = JoystickCalibration::GUITAR_DEFAULT;
        calib.reset_range();
        assert_eq!((calib.min_x, calib.max_x), (32, 32));
        assert_eq!((calib.min_y, calib.max_y), (32, 32));
        assert_eq!(calib.dead_x, 4);
    }

    #[test]
    fn test_serde_partial_fields_use_defaults() -> Result<(), serde_json::Error> {
        let calib: JoystickCalibration = serde_json::from_str(r#"{"dead_x": 2, "dead_y": 3}"#)?;
        assert_eq!(calib.dead_x, 2);
        assert_eq!(calib.dead_y, 3);
        assert_eq!(calib.center_x, 32);
        assert_eq!(calib.max_y, 63);
        Ok(())
    }
}
