//! Wii drum-kit extension protocol: report decoding, stick digitization and
//! input enumeration.
//!
//! This crate is I/O-free and allocation-free on the decode path. It turns
//! one raw Wii Remote input report into one [`DrumsState`] snapshot.
//!
//! # Payload layout
//!
//! The drum payload starts at the extension offset of the report tag (see
//! [`wiimote_report::InputReport::extension_offset`]). All button bits are
//! active-low.
//!
//! | Byte | Bits | Meaning |
//! |------|------|---------|
//! | 0 | 5:0 | stick X |
//! | 1 | 5:0 | stick Y |
//! | 2 | 5:1 | strike "which pad" code |
//! | 3 | 7:5 | strike softness (0 hardest, 7 none) |
//! | 4 | 2, 4, 6 | plus, minus, digital down |
//! | 5 | 0, 2–7 | digital up, bass, blue, green, yellow, red, orange |
//!
//! # Sources
//! - WiiBrew, "Wiimote/Extension Controllers/Guitar Hero World Tour (Wii) Drums"

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod direction;
pub mod drums;
pub mod ids;
pub mod input;
pub mod merge;
pub mod state;

pub use config::DrumsConfig;
pub use direction::{DEFAULT_DIGITAL_THRESHOLD, Directions, digitize};
pub use drums::{Drums, UpdateOutcome};
pub use ids::{DEVICE_TAG, PAYLOAD_LEN, input_names};
pub use input::{DrumPad, DrumsPayload, Pads, Strike, decode_strike, parse_payload};
pub use merge::{CoreOverlay, merge_core_buttons};
pub use state::DrumsState;

use thiserror::Error;
use wiimote_report::ReportError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrumsError {
    #[error("Empty input report")]
    EmptyReport,

    #[error("Report too short: expected at least {expected} bytes, got {actual}")]
    ReportTooShort { expected: usize, actual: usize },

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type DrumsResult<T> = Result<T, DrumsError>;

impl From<ReportError> for DrumsError {
    fn from(e: ReportError) -> Self {
        match e {
            ReportError::Empty => DrumsError::EmptyReport,
            ReportError::TooShort { expected, actual } => {
                DrumsError::ReportTooShort { expected, actual }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_error_conversion() {
        assert_eq!(DrumsError::from(ReportError::Empty), DrumsError::EmptyReport);
        assert_eq!(
            DrumsError::from(ReportError::TooShort {
                expected: 9,
                actual: 2
            }),
            DrumsError::ReportTooShort {
                expected: 9,
                actual: 2
            }
        );
    }

    #[test]
    fn test_error_display() {
        let err = DrumsError::Unsupported("named lookup".to_string());
        assert_eq!(err.to_string(), "Unsupported operation: named lookup");
    }
}
