//! Stick calibration for Wii Remote extensions
//!
//! This crate provides the calibration envelope used by extension decoders:
//! per-axis center/min/max/dead-zone parameters, the running min/max that
//! widens as samples arrive, normalization to `[-1.0, 1.0]`, and the compact
//! text descriptor hosts use to persist a calibration.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod descriptor;
pub mod joystick;
pub mod types;

pub use descriptor::*;
pub use joystick::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalibrationError {
    #[error("Calibration descriptor is empty or unset")]
    EmptyDescriptor,

    #[error("Calibration descriptor has no usable joystick segment")]
    MissingJoystickSegment,
}

pub type CalibrationResult<T> = Result<T, CalibrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let err = CalibrationError::EmptyDescriptor;
        assert_eq!(format!("{err}"), "Calibration descriptor is empty or unset");

        let err = CalibrationError::MissingJoystickSegment;
        assert_eq!(
            format!("{err}"),
            "Calibration descriptor has no usable joystick segment"
        );
    }
}
