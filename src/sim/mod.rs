//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Injected RNG only
//! - Stable iteration order (player first, then bricks in store order)
//! - No rendering; entities only describe themselves through `RenderData`

pub mod body;
pub mod bounds;
pub mod collision;
pub mod kinematics;
pub mod spawner;
pub mod state;
pub mod store;
pub mod tick;

pub use body::{Body, Rect};
pub use bounds::{BoundsCheck, Playfield, clamp_to_playfield};
pub use collision::{Contact, Side, resolve};
pub use spawner::{RowReport, RowSpawner, layout_row};
pub use state::{Entity, FrameContext, GamePhase, GameState, Obstacle, Player, ScoreDisplay};
pub use store::{ObstaclePool, ObstacleStore};
pub use tick::{TickInput, tick};
