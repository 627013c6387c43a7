//! Core button state carried in bytes 1–2 of most input reports.

use serde::{Deserialize, Serialize};

/// Bit masks for the two core button bytes (active-high).
pub mod masks {
    pub const LEFT: u8 = 0x01;
    pub const RIGHT: u8 = 0x02;
    pub const DOWN: u8 = 0x04;
    pub const UP: u8 = 0x08;
    pub const PLUS: u8 = 0x10;

    pub const TWO: u8 = 0x01;
    pub const ONE: u8 = 0x02;
    pub const B: u8 = 0x04;
    pub const A: u8 = 0x08;
    pub const MINUS: u8 = 0x10;
    pub const HOME: u8 = 0x80;
}

/// Names under which the core buttons are enumerated.
pub mod input_names {
    pub const A: &str = "wmA";
    pub const B: &str = "wmB";
    pub const ONE: &str = "wmONE";
    pub const TWO: &str = "wmTWO";
    pub const UP: &str = "wmUP";
    pub const DOWN: &str = "wmDOWN";
    pub const LEFT: &str = "wmLEFT";
    pub const RIGHT: &str = "wmRIGHT";
    pub const PLUS: &str = "wmPLUS";
    pub const MINUS: &str = "wmMINUS";
    pub const HOME: &str = "wmHOME";
}

/// Wii Remote core buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreButtons {
    pub a: bool,
    pub b: bool,
    pub one: bool,
    pub two: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub plus: bool,
    pub minus: bool,
    pub home: bool,
}

impl CoreButtons {
    /// Decode the two core button bytes.
    pub fn from_bytes(first: u8, second: u8) -> Self {
        Self {
            left: first & masks::LEFT != 0,
            right: first & masks::RIGHT != 0,
            down: first & masks::DOWN != 0,
            up: first & masks::UP != 0,
            plus: first & masks::PLUS != 0,
            two: second & masks::TWO != 0,
            one: second & masks::ONE != 0,
            b: second & masks::B != 0,
            a: second & masks::A != 0,
            minus: second & masks::MINUS != 0,
            home: second & masks::HOME != 0,
        }
    }

    /// Number of buttons currently held.
    pub fn pressed_count(&self) -> usize {
        [
            self.a, self.b, self.one, self.two, self.up, self.down, self.left, self.right,
            self.plus, self.minus, self.home,
        ]
        .iter()
        .filter(|&&pressed| pressed)
        .count()
    }

    /// Enumerate the buttons as `(name, value)` pairs, 1.0 when held.
    pub fn inputs(&self) -> impl Iterator<Item = (&'static str, f32)> + use<> {
        let flag = |pressed: bool| if pressed { 1.0 } else { 0.0 };
        [
            (input_names::A, flag(self.a)),
            (input_names::B, flag(self.b)),
            (input_names::ONE, flag(self.one)),
            (input_names::TWO, flag(self.two)),
            (input_names::UP, flag(self.up)),
            (input_names::DOWN, flag(self.down)),
            (input_names::LEFT, flag(self.left)),
            (input_names::RIGHT, flag(self.right)),
            (input_names::PLUS, flag(self.plus)),
            (input_names::MINUS, flag(self.minus)),
            (input_names::HOME, flag(self.home)),
        ]
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_buttons() {
        let buttons = CoreButtons::from_bytes(0, 0);
        assert_eq!(buttons, CoreButtons::default());
        assert_eq!(buttons.pressed_count(), 0);
    }

    #[test]
    fn test_dpad_bits() {
        let buttons = CoreButtons::from_bytes(masks::UP | masks::LEFT, 0);
        assert!(buttons.up);
        assert!(buttons.left);
        assert!(!buttons.down);
        assert!(!buttons.right);
    }

    #[test]
    fn test_second_byte_bits() {
        let buttons = CoreButtons::from_bytes(0, masks::A | masks::HOME);
        assert!(buttons.a);
        assert!(buttons.home);
        assert!(!buttons.minus);
        assert_eq!(buttons.pressed_count(), 2);
    }

    #[test]
    fn test_all_buttons() {
        let buttons = CoreButtons::from_bytes(0x1F, 0x9F);
        assert_eq!(buttons.pressed_count(), 11);
    }

    #[test]
    fn test_inputs_order_and_values() {
        let buttons = CoreButtons::from_bytes(masks::RIGHT, 0);
        let inputs: Vec<_> = buttons.inputs().collect();
        assert_eq!(inputs.len(), 11);
        assert_eq!(inputs.first().map(|(name, _)| *name), Some(input_names::A));
        assert!(inputs.contains(&(input_names::RIGHT, 1.0)));
        assert!(inputs.contains(&(input_names::LEFT, 0.0)));
    }
}
