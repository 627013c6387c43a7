//! The transport an extension decoder is plugged into.

use crate::{CoreButtons, InputReport};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Calibration presets a host can select for a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CalibrationPreset {
    #[default]
    Default,
    Modest,
    Extra,
    Minimum,
    None,
}

/// A Wii Remote as seen by an extension decoder.
///
/// The extension decoder calls [`update`](CoreController::update) once per
/// report it decodes and then reads [`buttons`](CoreController::buttons).
/// `&mut T` is itself a controller, so a decoder can either own its transport
/// or borrow one whose lifecycle is managed elsewhere.
pub trait CoreController {
    /// Feed one raw input report.
    fn update(&mut self, data: &[u8]);

    /// Most recently decoded core buttons.
    fn buttons(&self) -> CoreButtons;

    /// All inputs this controller exposes, as `(name, value)` pairs.
    fn inputs(&self) -> impl Iterator<Item = (&'static str, f32)> + '_;

    /// Apply a calibration preset.
    fn set_calibration(&mut self, preset: CalibrationPreset);
}

impl<T: CoreController> CoreController for &mut T {
    fn update(&mut self, data: &[u8]) {
        (**self).update(data);
    }

    fn buttons(&self) -> CoreButtons {
        (**self).buttons()
    }

    fn inputs(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        (**self).inputs()
    }

    fn set_calibration(&mut self, preset: CalibrationPreset) {
        (**self).set_calibration(preset);
    }
}

/// Core-button-only Wii Remote.
///
/// Decodes bytes 1–2 of every report that carries them; accelerometer and IR
/// data are not interpreted.
#[derive(Debug, Clone, Default)]
pub struct Wiimote {
    buttons: CoreButtons,
    preset: CalibrationPreset,
}

impl Wiimote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset most recently applied through [`CoreController::set_calibration`].
    pub fn preset(&self) -> CalibrationPreset {
        self.preset
    }
}

impl CoreController for Wiimote {
    fn update(&mut self, data: &[u8]) {
        let Some(report) = data.first().copied().and_then(InputReport::from_tag) else {
            return;
        };
        if !report.has_core_buttons() {
            return;
        }
        if let (Some(&first), Some(&second)) = (data.get(1), data.get(2)) {
            self.buttons = CoreButtons::from_bytes(first, second);
            trace!(?report, first, second, "decoded core buttons");
        }
    }

    fn buttons(&self) -> CoreButtons {
        self.buttons
    }

    fn inputs(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        self.buttons.inputs()
    }

    fn set_calibration(&mut self, preset: CalibrationPreset) {
        self.preset = preset;
    }
}
