//! Drum-kit extension payload parsing.
//!
//! All functions are pure and allocation-free.

use crate::ids::{
    PAYLOAD_LEN, SOFTNESS_NO_HIT, button_masks, pad_masks, payload_bytes, strike_codes,
};
use crate::{DrumsError, DrumsResult};
use serde::{Deserialize, Serialize};
use wii_calibration::RAW_AXIS_MASK;
use wiimote_report::ensure_len;

/// The six strike surfaces of the kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrumPad {
    Green,
    Red,
    Yellow,
    Blue,
    Orange,
    Bass,
}

impl DrumPad {
    /// Classify a strike "which pad" code.
    pub fn from_strike_code(code: u8) -> Option<Self> {
        match code {
            strike_codes::GREEN => Some(Self::Green),
            strike_codes::RED => Some(Self::Red),
            strike_codes::YELLOW => Some(Self::Yellow),
            strike_codes::BLUE => Some(Self::Blue),
            strike_codes::ORANGE => Some(Self::Orange),
            strike_codes::BASS => Some(Self::Bass),
            _ => None,
        }
    }
}

/// Pad contact flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pads {
    pub green: bool,
    pub red: bool,
    pub yellow: bool,
    pub blue: bool,
    pub orange: bool,
    pub bass: bool,
}

impl Pads {
    /// Decode the active-low pad byte.
    pub fn from_byte(byte: u8) -> Self {
        let held = |mask: u8| byte & mask == 0;
        Self {
            green: held(pad_masks::GREEN),
            red: held(pad_masks::RED),
            yellow: held(pad_masks::YELLOW),
            blue: held(pad_masks::BLUE),
            orange: held(pad_masks::ORANGE),
            bass: held(pad_masks::BASS),
        }
    }

    pub fn is_hit(&self, pad: DrumPad) -> bool {
        match pad {
            DrumPad::Green => self.green,
            DrumPad::Red => self.red,
            DrumPad::Yellow => self.yellow,
            DrumPad::Blue => self.blue,
            DrumPad::Orange => self.orange,
            DrumPad::Bass => self.bass,
        }
    }

    pub fn hit_count(&self) -> usize {
        [
            self.green,
            self.red,
            self.yellow,
            self.blue,
            self.orange,
            self.bass,
        ]
        .iter()
        .filter(|&&hit| hit)
        .count()
    }
}

/// A single strike as reported by the kit's velocity bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strike {
    pub pad: DrumPad,
    /// 0 is the hardest hit, 6 the softest.
    pub softness: u8,
}

impl Strike {
    /// Strike strength in `(0.0, 1.0]`, 1.0 for the hardest hit.
    pub fn velocity(&self) -> f32 {
        f32::from(SOFTNESS_NO_HIT.saturating_sub(self.softness)) / f32::from(SOFTNESS_NO_HIT)
    }
}

/// Decode the strike code and softness bytes. `None` when no strike is
/// reported this frame.
pub fn decode_strike(code_byte: u8, softness_byte: u8) -> Option<Strike> {
    let pad = DrumPad::from_strike_code((code_byte >> 1) & 0x1F)?;
    let softness = (softness_byte >> 5) & 0x07;
    (softness < SOFTNESS_NO_HIT).then_some(Strike { pad, softness })
}

/// Everything the decoder reads out of one extension payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrumsPayload {
    pub pads: Pads,
    pub plus: bool,
    pub minus: bool,
    pub digital_up: bool,
    pub digital_down: bool,
    /// Masked raw stick sample, `None` when both stick bytes read zero.
    pub stick: Option<(u8, u8)>,
    pub strike: Option<Strike>,
}

/// Parse the drum payload starting at `offset` in `data`.
///
/// # Errors
///
/// Returns [`DrumsError::ReportTooShort`] when `data` ends before
/// `offset + PAYLOAD_LEN`.
pub fn parse_payload(data: &[u8], offset: usize) -> DrumsResult<DrumsPayload> {
    let expected = offset.saturating_add(PAYLOAD_LEN);
    ensure_len(data, expected)?;
    let bytes: [u8; PAYLOAD_LEN] = data
        .get(offset..expected)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(DrumsError::ReportTooShort {
            expected,
            actual: data.len(),
        })?;

    let stick_x = bytes[payload_bytes::STICK_X];
    let stick_y = bytes[payload_bytes::STICK_Y];
    let buttons = bytes[payload_bytes::BUTTONS];
    let pads = bytes[payload_bytes::PADS];

    // Only the unmasked bytes decide whether the stick reported at all.
    let stick = (stick_x != 0 || stick_y != 0)
        .then_some((stick_x & RAW_AXIS_MASK, stick_y & RAW_AXIS_MASK));

    Ok(DrumsPayload {
        pads: Pads::from_byte(pads),
        plus: buttons & button_masks::PLUS == 0,
        minus: buttons & button_masks::MINUS == 0,
        digital_up: pads & pad_masks::DIGITAL_UP == 0,
        digital_down: buttons & button_masks::DIGITAL_DOWN == 0,
        stick,
        strike: decode_strike(
            bytes[payload_bytes::STRIKE_CODE],
            bytes[payload_bytes::STRIKE_SOFTNESS],
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiimote_report::ReportError;

    fn report(offset: usize, payload: [u8; PAYLOAD_LEN]) -> Vec<u8> {
        let mut data = vec![0u8; offset];
        data.extend_from_slice(&payload);
        data
    }

    #[test]
    fn test_all_bits_set_means_nothing_held() -> Result<(), DrumsError> {
        let data = report(3, [0x20, 0x20, 0xFF, 0xFF, 0xFF, 0xFF]);
        let payload = parse_payload(&data, 3)?;
        assert_eq!(payload.pads, Pads::default());
        assert!(!payload.plus);
        assert!(!payload.minus);
        assert!(!payload.digital_up);
        assert!(!payload.digital_down);
        assert_eq!(payload.strike, None);
        Ok(())
    }

    #[test]
    fn test_all_bits_clear_means_everything_held() -> Result<(), DrumsError> {
        let data = report(1, [0x20, 0x20, 0x00, 0x00, 0x00, 0x00]);
        let payload = parse_payload(&data, 1)?;
        assert_eq!(payload.pads.hit_count(), 6);
        assert!(payload.plus);
        assert!(payload.minus);
        assert!(payload.digital_up);
        assert!(payload.digital_down);
        Ok(())
    }

    #[test]
    fn test_pad_bit_table() {
        let cases = [
            (pad_masks::GREEN, DrumPad::Green),
            (pad_masks::RED, DrumPad::Red),
            (pad_masks::YELLOW, DrumPad::Yellow),
            (pad_masks::BLUE, DrumPad::Blue),
            (pad_masks::ORANGE, DrumPad::Orange),
            (pad_masks::BASS, DrumPad::Bass),
        ];
        for (mask, pad) in cases {
            let pads = Pads::from_byte(!mask);
            assert!(pads.is_hit(pad), "{pad:?}");
            assert_eq!(pads.hit_count(), 1, "{pad:?}");
        }
    }

    #[test]
    fn test_stick_masked_to_six_bits() -> Result<(), DrumsError> {
        let data = report(3, [0xFF, 0xC1, 0, 0, 0xFF, 0xFF]);
        let payload = parse_payload(&data, 3)?;
        assert_eq!(payload.stick, Some((0x3F, 0x01)));
        Ok(())
    }

    #[test]
    fn test_stick_absent_when_both_zero() -> Result<(), DrumsError> {
        let data = report(3, [0, 0, 0, 0, 0xFF, 0xFF]);
        assert_eq!(parse_payload(&data, 3)?.stick, None);
        Ok(())
    }

    #[test]
    fn test_stick_present_when_only_high_bits_set() -> Result<(), DrumsError> {
        let data = report(3, [0xC0, 0, 0, 0, 0xFF, 0xFF]);
        assert_eq!(parse_payload(&data, 3)?.stick, Some((0, 0)));
        Ok(())
    }

    #[test]
    fn test_short_report_matches_framing_error() {
        let data = [0x37u8; 20];
        assert_eq!(
            parse_payload(&data, 16),
            Err(DrumsError::from(ReportError::TooShort {
                expected: 22,
                actual: 20
            }))
        );
    }

    #[test]
    fn test_short_report() {
        let data = vec![0u8; 8];
        assert_eq!(
            parse_payload(&data, 3),
            Err(DrumsError::ReportTooShort {
                expected: 9,
                actual: 8
            })
        );
    }

    #[test]
    fn test_strike_table() {
        let cases = [
            (strike_codes::GREEN, DrumPad::Green),
            (strike_codes::RED, DrumPad::Red),
            (strike_codes::YELLOW, DrumPad::Yellow),
            (strike_codes::BLUE, DrumPad::Blue),
            (strike_codes::ORANGE, DrumPad::Orange),
            (strike_codes::BASS, DrumPad::Bass),
        ];
        for (code, pad) in cases {
            let strike = decode_strike(code << 1, 0x00);
            assert_eq!(strike, Some(Strike { pad, softness: 0 }));
        }
        assert_eq!(decode_strike(0x00, 0x00), None);
    }

    #[test]
    fn test_strike_softness() {
        let strike = decode_strike(strike_codes::RED << 1, 0b0110_0000);
        assert_eq!(
            strike,
            Some(Strike {
                pad: DrumPad::Red,
                softness: 3
            })
        );
        assert_eq!(decode_strike(strike_codes::RED << 1, 0xE0), None);
    }

    #[test]
    fn test_strike_velocity() {
        let hardest = Strike {
            pad: DrumPad::Blue,
            softness: 0,
        };
        let softest = Strike {
            pad: DrumPad::Blue,
            softness: 6,
        };
        assert!((hardest.velocity() - 1.0).abs() < f32::EPSILON);
        assert!((softest.velocity() - 1.0 / 7.0).abs() < 1e-6);
    }
}
