//! Per-frame motion integration
//!
//! Semi-implicit Euler with a unit timestep: `vel += accel; pos += vel`.
//! Horizontal steering is accelerative with a clamped velocity.

use crate::platform::Direction;
use crate::tuning::{PlayerTuning, StopMode};

use super::body::Body;

/// Below this horizontal speed a coasting body counts as stopped
pub const STOP_EPSILON: f32 = 1e-3;

/// Set horizontal acceleration (and possibly velocity) from the held direction
pub fn steer(body: &mut Body, direction: Option<Direction>, tuning: &PlayerTuning) {
    let step = tuning.accel_step.min(tuning.max_accel);
    match direction {
        Some(Direction::Left) => {
            // Hard reversal
            if body.vel.x > 0.0 {
                body.vel.x = 0.0;
            }
            body.accel.x = if body.vel.x > -tuning.max_velocity {
                -step
            } else {
                0.0
            };
        }
        Some(Direction::Right) => {
            if body.vel.x < 0.0 {
                body.vel.x = 0.0;
            }
            body.accel.x = if body.vel.x < tuning.max_velocity {
                step
            } else {
                0.0
            };
        }
        None => match tuning.stop_mode {
            StopMode::Instant => {
                body.vel.x = 0.0;
                body.accel.x = 0.0;
            }
            StopMode::Coast => {
                // Friction opposes motion and never exceeds the remaining speed
                let speed = body.vel.x.abs();
                if speed > STOP_EPSILON {
                    body.accel.x = -body.vel.x.signum() * tuning.coast_decay.min(speed);
                } else {
                    body.vel.x = 0.0;
                    body.accel.x = 0.0;
                }
            }
        },
    }
}

/// Advance a steered body one frame, clamping horizontal velocity
pub fn integrate_steered(body: &mut Body, tuning: &PlayerTuning) {
    body.vel += body.accel;
    body.vel.x = body.vel.x.clamp(-tuning.max_velocity, tuning.max_velocity);
    body.pos += body.vel;
}

/// Advance a body with no steering one frame
#[inline]
pub fn integrate(body: &mut Body) {
    body.vel += body.accel;
    body.pos += body.vel;
}
