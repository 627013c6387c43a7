//! Stick-to-direction digitization.
//!
//! The stick angle is measured from the device's "north" (negative Y), split
//! into sixteen π/8 steps, and each step bucket is mapped to one or two
//! direction flags. Step 0 is straight down (`y = -1`), step 8 straight up.
//!
//! ```text
//! step  < 0      ≥ 0
//!  0    down     down
//!  1-2  down+left  down+right
//!  3-4  left     right
//!  5-6  left+up  right+up
//!  7-8  up       up
//!  9-10 up+right up+left
//! 11-12 right    left
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_8};
use std::ops::{BitOr, BitOrAssign};

/// Default displacement needed before the stick produces directions.
pub const DEFAULT_DIGITAL_THRESHOLD: f32 = 0.5;

/// Four-way direction flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Directions {
    pub const NONE: Self = Self::new(false, false, false, false);
    pub const UP: Self = Self::new(true, false, false, false);
    pub const DOWN: Self = Self::new(false, true, false, false);
    pub const LEFT: Self = Self::new(false, false, true, false);
    pub const RIGHT: Self = Self::new(false, false, false, true);

    const fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    const fn with(self, other: Self) -> Self {
        Self::new(
            self.up || other.up,
            self.down || other.down,
            self.left || other.left,
            self.right || other.right,
        )
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    pub fn count(&self) -> usize {
        [self.up, self.down, self.left, self.right]
            .iter()
            .filter(|&&set| set)
            .count()
    }
}

impl BitOr for Directions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

impl BitOrAssign for Directions {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.with(rhs);
    }
}

const D: Directions = Directions::DOWN;
const U: Directions = Directions::UP;
const L: Directions = Directions::LEFT;
const R: Directions = Directions::RIGHT;
const DL: Directions = D.with(L);
const DR: Directions = D.with(R);
const UL: Directions = U.with(L);
const UR: Directions = U.with(R);

const NEGATIVE_STEPS: [Directions; 13] = [D, DL, DL, L, L, UL, UL, U, U, UR, UR, R, R];
const POSITIVE_STEPS: [Directions; 13] = [D, DR, DR, R, R, UR, UR, U, U, UL, UL, L, L];

/// Digitize a normalized stick position.
///
/// Returns [`Directions::NONE`] unless `x² + y² ≥ threshold²`. A centered
/// stick never produces a direction, whatever the threshold.
pub fn digitize(x: f32, y: f32, threshold: f32) -> Directions {
    let magnitude_squared = x * x + y * y;
    if magnitude_squared <= 0.0 || magnitude_squared < threshold * threshold {
        return Directions::NONE;
    }

    let step = (f64::from(y).atan2(f64::from(x)) + FRAC_PI_2) / FRAC_PI_8;
    let table = if step < 0.0 {
        &NEGATIVE_STEPS
    } else {
        &POSITIVE_STEPS
    };
    // Truncation toward zero is the bucketing rule.
    let index = step.abs() as usize;

    table.get(index).copied().unwrap_or(Directions::NONE)
}
