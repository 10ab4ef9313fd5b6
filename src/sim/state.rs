//! Game state and entity types
//!
//! One `GameState` per session. It owns the player, the obstacle store and the
//! counters; nothing here is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::bounds::Playfield;
use super::kinematics;
use super::spawner::RowSpawner;
use super::store::ObstacleStore;
use crate::error::ConfigError;
use crate::platform::{Direction, Facing, RenderData, Visual};
use crate::tuning::{RowTuning, Tuning};

/// Coarse session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Terminal; a new session is needed to play again
    GameOver,
}

/// Per-frame inputs every entity may read while integrating
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub direction: Option<Direction>,
    pub tuning: &'a Tuning,
    pub score: u64,
}

/// Fixed behavior shared by everything the frame loop updates and draws
pub trait Entity {
    /// Advance one frame
    fn integrate(&mut self, ctx: &FrameContext<'_>);

    /// Read-only view for the render pass
    fn render_data(&self) -> RenderData;

    /// Whether the entity has fully left the visible playfield
    fn has_exited(&self, _field: Playfield) -> bool {
        false
    }
}

/// The controlled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub facing: Facing,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        let p = &tuning.player;
        Self {
            body: Body::new(p.start, p.size).with_velocity(Vec2::new(0.0, p.fall_speed)),
            facing: Facing::default(),
        }
    }
}

impl Entity for Player {
    fn integrate(&mut self, ctx: &FrameContext<'_>) {
        match ctx.direction {
            Some(Direction::Left) => self.facing = Facing::Left,
            Some(Direction::Right) => self.facing = Facing::Right,
            None => {}
        }
        kinematics::steer(&mut self.body, ctx.direction, &ctx.tuning.player);
        kinematics::integrate_steered(&mut self.body, &ctx.tuning.player);
    }

    fn render_data(&self) -> RenderData {
        RenderData {
            pos: self.body.pos,
            size: self.body.size,
            visual: Visual::Player(self.facing),
        }
    }
}

/// A rising brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub body: Body,
    /// Cleared by the store once the brick has left the playfield
    pub alive: bool,
}

impl Obstacle {
    /// A live brick at `pos`, moving at the configured constant velocity
    pub fn new(pos: Vec2, rows: &RowTuning) -> Self {
        Self {
            body: Body::new(pos, Vec2::splat(rows.brick_size))
                .with_velocity(Vec2::new(0.0, rows.brick_velocity)),
            alive: true,
        }
    }
}

impl Entity for Obstacle {
    fn integrate(&mut self, _ctx: &FrameContext<'_>) {
        kinematics::integrate(&mut self.body);
    }

    fn render_data(&self) -> RenderData {
        RenderData {
            pos: self.body.pos,
            size: self.body.size,
            visual: Visual::Brick,
        }
    }

    /// Bricks travel upward, so they exit once the bottom edge passes the top
    fn has_exited(&self, _field: Playfield) -> bool {
        self.body.bottom() < 0.0
    }
}

/// On-screen score text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDisplay {
    pub pos: Vec2,
    pub value: u64,
}

impl Entity for ScoreDisplay {
    fn integrate(&mut self, ctx: &FrameContext<'_>) {
        self.value = ctx.score;
    }

    fn render_data(&self) -> RenderData {
        RenderData {
            pos: self.pos,
            size: Vec2::ZERO,
            visual: Visual::Score(self.value),
        }
    }
}

/// Complete session state (deterministic given the same inputs and RNG)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    /// Always 1; kept for the HUD
    pub level: u32,
    /// Simulated clock driving the row spawner
    pub time_ms: f64,
    pub frame: u64,
    pub player: Player,
    pub obstacles: ObstacleStore,
    pub score_display: ScoreDisplay,
    pub spawner: RowSpawner,
}

impl GameState {
    /// Fresh session; fails if `tuning` is unusable
    pub fn new(tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let obstacles = ObstacleStore::from_policy(tuning.store)?;
        Ok(Self {
            phase: GamePhase::Playing,
            score: 0,
            level: 1,
            time_ms: 0.0,
            frame: 0,
            player: Player::new(&tuning),
            obstacles,
            score_display: ScoreDisplay {
                pos: tuning.score_position,
                value: 0,
            },
            spawner: RowSpawner::new(tuning.rows.interval_ms),
            tuning,
        })
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
