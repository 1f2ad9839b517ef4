//! Aim oscillator
//!
//! Sweeps the aim angle back and forth between the two bounds while the
//! ball is at rest.

use super::state::Aim;
use crate::consts::{ARROW_MAX_ANGLE, ARROW_MIN_ANGLE};

/// Advance the aim by one tick. Returns true if the sweep reversed.
///
/// Overshoot past a bound is reflected back into range, so the angle always
/// stays within `[ARROW_MIN_ANGLE, ARROW_MAX_ANGLE]`. Landing exactly on a
/// bound does not reverse; the next tick does.
pub fn sweep(aim: &mut Aim, speed: f32) -> bool {
    let next = aim.angle + aim.direction * speed;

    let reflected = if next > ARROW_MAX_ANGLE {
        Some(2.0 * ARROW_MAX_ANGLE - next)
    } else if next < ARROW_MIN_ANGLE {
        Some(2.0 * ARROW_MIN_ANGLE - next)
    } else {
        None
    };

    match reflected {
        Some(angle) => {
            // Clamp only matters for a speed wider than the whole range
            aim.angle = angle.clamp(ARROW_MIN_ANGLE, ARROW_MAX_ANGLE);
            aim.direction = -aim.direction;
            true
        }
        None => {
            aim.angle = next;
            false
        }
    }
}
