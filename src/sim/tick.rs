//! Per-frame simulation step
//!
//! Fixed order every frame: retire exited bricks, move the player then every
//! brick, poll the row spawner, clamp the player, resolve collisions in store
//! order, refresh the score display.

use super::bounds::{BoundsCheck, Playfield, clamp_to_playfield};
use super::collision::resolve;
use super::state::{Entity, FrameContext, GamePhase, GameState};
use crate::platform::{Direction, InputSource, RandomSource};
use crate::tuning::ScoreAward;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Snapshot an input source
    pub fn poll(source: &impl InputSource) -> Self {
        Self {
            left: source.is_pressed(Direction::Left),
            right: source.is_pressed(Direction::Right),
        }
    }

    /// Held direction; left wins when both are held
    pub fn direction(&self) -> Option<Direction> {
        if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

impl InputSource for TickInput {
    fn is_pressed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// Advance the game by one frame of `dt_ms`
///
/// Does nothing once the game is over. Returns the phase after the frame.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    field: Playfield,
    rng: &mut impl RandomSource,
    dt_ms: f64,
) -> GamePhase {
    if state.phase == GamePhase::GameOver {
        return state.phase;
    }

    state.time_ms += dt_ms;
    state.frame += 1;

    state.obstacles.age(field);

    let ctx = FrameContext {
        direction: input.direction(),
        tuning: &state.tuning,
        score: state.score,
    };
    state.player.integrate(&ctx);
    for brick in state.obstacles.live_mut() {
        brick.integrate(&ctx);
    }

    let rows = &state.tuning.rows;
    if let Some(report) = state
        .spawner
        .maybe_spawn_row(state.time_ms, &mut state.obstacles, field, rows, rng)
    {
        let award = match rows.score {
            ScoreAward::PerRow(points) => points,
            ScoreAward::PerObstacle(points) => points * report.spawned as u64,
            ScoreAward::Disabled => 0,
        };
        state.score += award;
    }

    let player = &mut state.player.body;
    let escape_radius = state.tuning.player.escape_radius;
    if clamp_to_playfield(player, field, escape_radius) == BoundsCheck::OutOfBounds {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over at frame {} with score {}",
            state.frame,
            state.score
        );
    }

    let threshold = state.tuning.collision_threshold;
    let fall_speed = state.tuning.player.fall_speed;
    for brick in state.obstacles.live() {
        resolve(player, &brick.body, threshold, fall_speed);
    }

    let ctx = FrameContext {
        direction: None,
        tuning: &state.tuning,
        score: state.score,
    };
    state.score_display.integrate(&ctx);

    state.phase
}
