//! Decoded drum-kit state.

use crate::ids::input_names;
use crate::{Directions, Pads, Strike};
use wii_calibration::Joystick;

/// Snapshot of every logical drum input after the most recent report.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrumsState {
    pub pads: Pads,
    pub directions: Directions,
    pub plus: bool,
    pub minus: bool,
    pub joystick: Joystick,
    /// Most recent strike reported by the velocity bytes.
    pub strike: Option<Strike>,
}

impl DrumsState {
    /// Start is the kit's plus button.
    pub fn start(&self) -> bool {
        self.plus
    }

    pub fn set_start(&mut self, pressed: bool) {
        self.plus = pressed;
    }

    /// Select is the kit's minus button.
    pub fn select(&self) -> bool {
        self.minus
    }

    pub fn set_select(&mut self, pressed: bool) {
        self.minus = pressed;
    }

    /// Enumerate the drum inputs as `(name, value)` pairs, 1.0 when set.
    pub fn inputs(&self) -> impl Iterator<Item = (&'static str, f32)> + use<> {
        let flag = |set: bool| if set { 1.0 } else { 0.0 };
        [
            (input_names::GREEN, flag(self.pads.green)),
            (input_names::RED, flag(self.pads.red)),
            (input_names::YELLOW, flag(self.pads.yellow)),
            (input_names::BLUE, flag(self.pads.blue)),
            (input_names::ORANGE, flag(self.pads.orange)),
            (input_names::BASS, flag(self.pads.bass)),
            (input_names::UP, flag(self.directions.up)),
            (input_names::DOWN, flag(self.directions.down)),
            (input_names::LEFT, flag(self.directions.left)),
            (input_names::RIGHT, flag(self.directions.right)),
            (input_names::START, flag(self.start())),
            (input_names::SELECT, flag(self.select())),
        ]
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_select_alias_plus_minus() {
        let mut state = DrumsState::default();
        state.set_start(true);
        assert!(state.plus);
        state.set_select(true);
        assert!(state.minus);

        state.plus = false;
        assert!(!state.start());
        assert!(state.select());
    }

    #[test]
    fn test_inputs_order() {
        let names: Vec<_> = DrumsState::default().inputs().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            [
                "drmG", "drmR", "drmY", "drmB", "drmO", "drmBASS", "drmUP", "drmDOWN", "drmLEFT",
                "drmRIGHT", "drmSTART", "drmSELECT",
            ]
        );
    }

    #[test]
    fn test_inputs_values() {
        let mut state = DrumsState::default();
        state.pads.orange = true;
        state.directions.left = true;
        state.set_select(true);

        let set: Vec<_> = state
            .inputs()
            .filter(|(_, value)| *value > 0.5)
            .map(|(name, _)| name)
            .collect();
        assert_eq!(set, ["drmO", "drmLEFT", "drmSELECT"]);
    }
}
