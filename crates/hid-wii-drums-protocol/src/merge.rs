//! Overlay of the Wii Remote's own buttons onto the drum inputs.
//!
//! The remote sits sideways in the kit, so its d-pad is rotated 90° before it
//! is folded into the drum directions.

use crate::Directions;
use wiimote_report::CoreButtons;

/// What the remote's buttons add to a frame. Only ever sets flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoreOverlay {
    pub directions: Directions,
    pub select: bool,
}

/// Rotate the remote's d-pad and pick up its A button as select.
///
/// Up/down and right/left are each resolved with the first of the pair
/// taking precedence.
pub fn merge_core_buttons(buttons: &CoreButtons) -> CoreOverlay {
    let mut directions = Directions::NONE;

    if buttons.up {
        directions.left = true;
    } else if buttons.down {
        directions.right = true;
    }

    if buttons.right {
        directions.down = true;
    } else if buttons.left {
        directions.up = true;
    }

    CoreOverlay {
        directions,
        select: buttons.a,
    }
}
