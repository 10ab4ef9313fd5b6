//! Brickfall - a falling-bricks dodge arcade prototype
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, obstacle lifecycle)
//! - `session`: Frame driver owning the game state and RNG
//! - `platform`: Input/render/randomness seams consumed by the core
//! - `tuning`: Data-driven game balance
//! - `demo`: Autopilot input for headless runs

pub mod demo;
pub mod error;
pub mod platform;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use session::Session;
pub use tuning::{Preset, Tuning};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Nominal downward drift of the player, px/frame
    pub const PLAYER_Y_VELOCITY: f32 = 1.0;
    /// Horizontal velocity cap, px/frame
    pub const MAX_X_VELOCITY: f32 = 8.0;
    /// Horizontal acceleration applied per frame while a direction is held
    pub const X_ACCELERATION: f32 = 1.0;
    /// Friction applied per frame when coasting
    pub const COAST_DECAY: f32 = 0.25;
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 68.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 100.0;

    /// Bricks are square
    pub const BRICK_SIZE: f32 = 64.0;
    /// Bricks rise toward the top of the screen
    pub const BRICK_VELOCITY: f32 = -2.0;
    pub const BRICKS_PER_ROW: usize = 14;

    /// Vertical overlap separating a top landing from a side hit
    pub const COLLISION_THRESHOLD: f32 = 8.0;

    pub const POOL_CAPACITY: usize = 70;

    /// Minimum time between two generated rows
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;
    /// Per-slot fill draw is uniform in `0..=FILL_DRAW_MAX`, filled when > 0
    pub const FILL_DRAW_MAX: u32 = 4;
    pub const MAX_HOLES: usize = 4;
    pub const ROW_SCORE: u64 = 100;

    pub const SCORE_X: f32 = 20.0;
    pub const SCORE_Y: f32 = 44.0;

    /// Display refresh the headless driver simulates
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
