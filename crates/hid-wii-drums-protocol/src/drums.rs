//! The drum-kit decoder.

use crate::ids::DEVICE_TAG;
use crate::{
    Directions, DrumsConfig, DrumsError, DrumsResult, DrumsState, digitize, merge_core_buttons,
    parse_payload,
};
use std::fmt;
use tracing::{debug, trace, warn};
use wii_calibration::{
    DescriptorOutcome, Joystick, JoystickCalibration, apply_descriptor, descriptor_device_tag,
    encode_descriptor,
};
use wiimote_report::{CalibrationPreset, CoreController, resolve_extension_offset};

/// Result of feeding one report to [`Drums::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The report carried drum data and the state was updated.
    Applied,
    /// The report carried no extension data; nothing changed.
    Skipped,
}

type DumpHook = Box<dyn FnMut(&[u8]) + Send>;

/// Decoder for a drum kit plugged into a Wii Remote.
///
/// Owns the decoded [`DrumsState`] and drives the remote through `C`, which
/// may be an owned controller or a `&mut` borrow of one.
pub struct Drums<C> {
    core: C,
    state: DrumsState,
    config: DrumsConfig,
    dump_hook: Option<DumpHook>,
    home_held: bool,
}

impl<C: CoreController> Drums<C> {
    /// Create a decoder with the default configuration.
    pub fn new(core: C) -> Self {
        Self::build(core, DrumsConfig::default())
    }

    /// Create a decoder with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DrumsError::InvalidConfig`] when `config` does not validate.
    pub fn with_config(core: C, config: DrumsConfig) -> DrumsResult<Self> {
        config.validate()?;
        Ok(Self::build(core, config))
    }

    fn build(core: C, config: DrumsConfig) -> Self {
        debug!(?config, "created drums decoder");
        Self {
            core,
            state: DrumsState {
                joystick: Joystick::new(config.calibration),
                ..DrumsState::default()
            },
            config,
            dump_hook: None,
            home_held: false,
        }
    }

    /// Decode one raw input report.
    ///
    /// Reports without extension data leave everything, including the
    /// remote, untouched and return [`UpdateOutcome::Skipped`].
    ///
    /// # Errors
    ///
    /// Returns [`DrumsError::EmptyReport`] for an empty buffer and
    /// [`DrumsError::ReportTooShort`] when the buffer ends inside the drum
    /// payload. The state is unchanged in both cases.
    pub fn update(&mut self, data: &[u8]) -> DrumsResult<UpdateOutcome> {
        let Some(offset) = resolve_extension_offset(data)? else {
            debug!(tag = ?data.first(), "report carries no extension data");
            return Ok(UpdateOutcome::Skipped);
        };

        let payload = parse_payload(data, offset).inspect_err(|err| {
            warn!(%err, offset, "dropping drums report");
        })?;

        let state = &mut self.state;
        state.pads = payload.pads;
        state.plus = payload.plus;
        state.minus = payload.minus;
        state.strike = payload.strike;

        // Digital left/right are not wired on the kit.
        state.directions = Directions {
            up: payload.digital_up,
            down: payload.digital_down,
            left: false,
            right: false,
        };

        if let Some((raw_x, raw_y)) = payload.stick {
            state.joystick.sample(raw_x, raw_y);
            state.directions |= digitize(
                state.joystick.x,
                state.joystick.y,
                self.config.digital_threshold,
            );
        }

        self.core.update(data);
        let buttons = self.core.buttons();
        let overlay = merge_core_buttons(&buttons);
        self.state.directions |= overlay.directions;
        if overlay.select {
            self.state.set_select(true);
        }

        if buttons.home && !self.home_held {
            if let Some(hook) = self.dump_hook.as_mut() {
                hook(data);
            }
        }
        self.home_held = buttons.home;

        if let Some(strike) = self.state.strike {
            trace!(pad = ?strike.pad, softness = strike.softness, "strike");
        }
        trace!(offset, state = ?self.state, "decoded drums report");

        Ok(UpdateOutcome::Applied)
    }

    /// All inputs, the remote's first, then the drum inputs.
    pub fn inputs(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        self.core.inputs().chain(self.state.inputs())
    }

    /// Named lookup is not supported; use [`inputs`](Self::inputs).
    ///
    /// # Errors
    ///
    /// Always returns [`DrumsError::Unsupported`].
    pub fn value(&self, name: &str) -> DrumsResult<f32> {
        Err(DrumsError::Unsupported(format!(
            "lookup of input {name:?}; enumerate inputs instead"
        )))
    }

    /// Forward `preset` to the remote and restore the configured stick
    /// calibration. The kit has one stick calibration whatever the preset.
    pub fn set_calibration(&mut self, preset: CalibrationPreset) {
        self.core.set_calibration(preset);
        self.state.joystick.calibrate(self.config.calibration);
        debug!(?preset, "applied calibration preset");
    }

    /// Apply a persisted calibration descriptor to the stick.
    pub fn set_calibration_descriptor(&mut self, descriptor: &str) -> DescriptorOutcome {
        if let Some(tag) = descriptor_device_tag(descriptor) {
            if tag != DEVICE_TAG {
                debug!(tag, "calibration descriptor was written for another device");
            }
        }
        let outcome = apply_descriptor(&mut self.state.joystick.calibration, descriptor);
        debug!(?outcome, "applied calibration descriptor");
        outcome
    }

    /// Descriptor for the current stick calibration.
    pub fn calibration_descriptor(&self) -> String {
        encode_descriptor(DEVICE_TAG, &self.state.joystick.calibration)
    }

    /// Collapse the stick range onto its center so the envelope is rebuilt
    /// from the samples that follow. Centers and dead bands are kept.
    pub fn restart_auto_calibration(&mut self) {
        self.state.joystick.calibration.reset_range();
        debug!(
            calibration = ?self.state.joystick.calibration,
            "restarted stick auto-calibration"
        );
    }

    pub fn calibration(&self) -> &JoystickCalibration {
        &self.state.joystick.calibration
    }

    /// Whether the stick calibration was never set.
    pub fn calibration_empty(&self) -> bool {
        self.state.joystick.calibration.is_empty()
    }

    /// Install a callback that receives the raw report whenever the remote's
    /// Home button is pressed. Holding Home fires it once.
    pub fn set_dump_hook(&mut self, hook: impl FnMut(&[u8]) + Send + 'static) {
        self.dump_hook = Some(Box::new(hook));
    }

    pub fn clear_dump_hook(&mut self) {
        self.dump_hook = None;
    }

    pub fn state(&self) -> &DrumsState {
        &self.state
    }

    pub fn config(&self) -> &DrumsConfig {
        &self.config
    }

    pub fn core(&self) -> &C {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut C {
        &mut self.core
    }

    pub fn into_core(self) -> C {
        self.core
    }
}

impl<C: fmt::Debug> fmt::Debug for Drums<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drums")
            .field("core", &self.core)
            .field("state", &self.state)
            .field("config", &self.config)
            .field("dump_hook", &self.dump_hook.is_some())
            .finish_non_exhaustive()
    }
}
