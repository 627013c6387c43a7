//! Self-expanding stick envelope and normalization

use crate::JoystickCalibration;

/// Mask applied to the stick bytes of guitar-style extensions.
pub const RAW_AXIS_MASK: u8 = 0x3F;

/// A two-axis stick: latest raw sample, its calibration envelope and the
/// normalized position derived from both.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Joystick {
    pub raw_x: u8,
    pub raw_y: u8,
    pub calibration: JoystickCalibration,
    /// Normalized X in `[-1.0, 1.0]`.
    pub x: f32,
    /// Normalized Y in `[-1.0, 1.0]`.
    pub y: f32,
}

impl Joystick {
    pub fn new(calibration: JoystickCalibration) -> Self {
        Self {
            calibration,
            ..Self::default()
        }
    }

    /// Replace the calibration. The raw sample and normalized output are kept
    /// until the next [`sample`](Self::sample).
    pub fn calibrate(&mut self, calibration: JoystickCalibration) {
        self.calibration = calibration;
    }

    /// Record a raw sample, widen the envelope to contain it and recompute
    /// the normalized position.
    pub fn sample(&mut self, raw_x: u8, raw_y: u8) {
        self.raw_x = raw_x;
        self.raw_y = raw_y;

        let calib = &mut self.calibration;
        expand(i32::from(raw_x), &mut calib.min_x, &mut calib.max_x);
        expand(i32::from(raw_y), &mut calib.min_y, &mut calib.max_y);

        self.normalize();
    }

    /// Recompute `x`/`y` from the current raw sample and calibration.
    pub fn normalize(&mut self) {
        let c = &self.calibration;
        self.x = normalize_axis(i32::from(self.raw_x), c.center_x, c.min_x, c.max_x, c.dead_x);
        self.y = normalize_axis(i32::from(self.raw_y), c.center_y, c.min_y, c.max_y, c.dead_y);
    }
}

/// Widen `[min, max]` to contain `raw`. Both bounds are checked, so an
/// inverted range is repaired rather than left half-open.
fn expand(raw: i32, min: &mut i32, max: &mut i32) {
    if raw > *max {
        *max = raw;
    }
    if raw < *min {
        *min = raw;
    }
}

/// Map one raw axis reading to `[-1.0, 1.0]`.
///
/// Readings within `dead` of `center` map to 0. Above the band the reading is
/// interpolated over `[center + dead, max]` onto `[0, 1]`, below it over
/// `[min, center - dead]` onto `[-1, 0]`. An empty half-range maps to 0.
pub fn normalize_axis(raw: i32, center: i32, min: i32, max: i32, dead: i32) -> f32 {
    let raw = f64::from(raw);
    let center = f64::from(center);
    let dead = f64::from(dead.max(0));

    let value = if (raw - center).abs() <= dead {
        0.0
    } else if raw > center {
        let lower = center + dead;
        let span = f64::from(max) - lower;
        if span <= 0.0 { 0.0 } else { (raw - lower) / span }
    } else {
        let upper = center - dead;
        let span = upper - f64::from(min);
        if span <= 0.0 { 0.0 } else { -((upper - raw) / span) }
    };

    value.clamp(-1.0, 1.0) as f32
}
