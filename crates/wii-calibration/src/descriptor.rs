//! Compact text descriptors for persisted stick calibrations.
//!
//! A descriptor looks like `-drm:joy|32|0|63|4|32|0|63|4`: a device tag, then
//! `:`-separated segments. The `joy` segment lists center, min, max and dead
//! for X, then the same four values for Y, each preceded by `|`.

use crate::{CalibrationError, CalibrationResult, JoystickCalibration};
use std::str::FromStr;
use tracing::debug;

/// Prefix of the joystick segment.
pub const JOYSTICK_SEGMENT: &str = "joy";

/// Descriptors containing more than this many `'0'` characters are taken to
/// be placeholders for an unset calibration.
pub const ZERO_SENTINEL_LIMIT: usize = 5;

/// What [`apply_descriptor`] did with a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorOutcome {
    /// The descriptor was parsed; `fields` joystick values were written.
    Applied { fields: usize },
    /// The descriptor looked unset and nothing was written.
    Ignored,
}

/// Render `calibration` as a descriptor for the device tagged `device_tag`.
///
/// # Examples
///
/// ```
/// use wii_calibration::{JoystickCalibration, encode_descriptor};
///
/// let token = encode_descriptor("drm", &JoystickCalibration::GUITAR_DEFAULT);
/// assert_eq!(token, "-drm:joy|32|0|63|4|32|0|63|4");
/// ```
pub fn encode_descriptor(device_tag: &str, calibration: &JoystickCalibration) -> String {
    let c = calibration;
    format!(
        "-{device_tag}:{JOYSTICK_SEGMENT}|{}|{}|{}|{}|{}|{}|{}|{}",
        c.center_x, c.min_x, c.max_x, c.dead_x, c.center_y, c.min_y, c.max_y, c.dead_y
    )
}

/// Write the joystick values found in `descriptor` into `calibration`.
///
/// Fields are positional; a field that does not parse as an integer is
/// skipped and the rest still apply. Descriptors with more than
/// [`ZERO_SENTINEL_LIMIT`] zero digits are ignored entirely.
pub fn apply_descriptor(
    calibration: &mut JoystickCalibration,
    descriptor: &str,
) -> DescriptorOutcome {
    if descriptor.matches('0').count() > ZERO_SENTINEL_LIMIT {
        debug!(descriptor, "ignoring unset calibration descriptor");
        return DescriptorOutcome::Ignored;
    }

    let mut fields = 0;
    for segment in descriptor.split(':') {
        if !segment.starts_with(JOYSTICK_SEGMENT) {
            continue;
        }

        for (index, field) in segment.split('|').enumerate().skip(1) {
            let Ok(value) = field.trim().parse::<i32>() else {
                debug!(index, field, "skipping unparseable calibration field");
                continue;
            };
            let slot = match index {
                1 => &mut calibration.center_x,
                2 => &mut calibration.min_x,
                3 => &mut calibration.max_x,
                4 => &mut calibration.dead_x,
                5 => &mut calibration.center_y,
                6 => &mut calibration.min_y,
                7 => &mut calibration.max_y,
                8 => &mut calibration.dead_y,
                _ => continue,
            };
            *slot = value;
            fields += 1;
        }
    }

    DescriptorOutcome::Applied { fields }
}

/// The device tag a descriptor starts with (`"drm"` for `-drm:joy|…`).
pub fn descriptor_device_tag(descriptor: &str) -> Option<&str> {
    let head = descriptor.split(':').next()?;
    head.strip_prefix('-').filter(|tag| !tag.is_empty())
}

impl FromStr for JoystickCalibration {
    type Err = CalibrationError;

    /// Parse a descriptor onto an empty calibration. Unlike
    /// [`apply_descriptor`] this rejects placeholders and descriptors without
    /// a single usable joystick field.
    fn from_str(descriptor: &str) -> CalibrationResult<Self> {
        let mut calibration = Self::EMPTY;
        match apply_descriptor(&mut calibration, descriptor) {
            DescriptorOutcome::Ignored => Err(CalibrationError::EmptyDescriptor),
            DescriptorOutcome::Applied { fields: 0 } => {
                Err(CalibrationError::MissingJoystickSegment)
            }
            DescriptorOutcome::Applied { .. } => Ok(calibration),
        }
    }
}
