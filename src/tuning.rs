//! Game tuning and variant presets
//!
//! Every constant the simulation reads lives here so the observed variants of
//! the game can be expressed as data instead of forks of the code.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Named tuning variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Pooled bricks, player stops dead when input is released
    #[default]
    Classic,
    /// Freshly allocated bricks, player coasts to a stop
    Coasting,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Classic => "Classic",
            Preset::Coasting => "Coasting",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Preset::Classic),
            "coasting" | "coast" => Some(Preset::Coasting),
            _ => None,
        }
    }
}

/// What happens to horizontal motion when no direction is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StopMode {
    /// Velocity and acceleration snap to zero
    #[default]
    Instant,
    /// Friction decays velocity toward zero over several frames
    Coast,
}

/// How obstacles are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorePolicy {
    /// Fixed-capacity recycling pool
    Pooled { capacity: usize },
    /// Growing collection, dead obstacles are dropped
    Unbounded,
}

impl Default for StorePolicy {
    fn default() -> Self {
        StorePolicy::Pooled {
            capacity: POOL_CAPACITY,
        }
    }
}

/// Score awarded for spawning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreAward {
    /// Fixed amount per generated row
    PerRow(u64),
    /// Fixed amount per obstacle actually spawned
    PerObstacle(u64),
    Disabled,
}

impl Default for ScoreAward {
    fn default() -> Self {
        ScoreAward::PerRow(ROW_SCORE)
    }
}

/// Player tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub size: Vec2,
    pub start: Vec2,
    /// Nominal downward velocity when not riding a brick
    pub fall_speed: f32,
    /// Acceleration magnitude applied while a direction is held
    pub accel_step: f32,
    /// Upper bound on acceleration magnitude
    pub max_accel: f32,
    pub max_velocity: f32,
    pub stop_mode: StopMode,
    /// Friction per frame in [`StopMode::Coast`]
    pub coast_decay: f32,
    /// When set, the player is lost once `center.y - radius` leaves the top
    /// instead of its top edge
    pub escape_radius: Option<f32>,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            fall_speed: PLAYER_Y_VELOCITY,
            accel_step: X_ACCELERATION,
            max_accel: X_ACCELERATION,
            max_velocity: MAX_X_VELOCITY,
            stop_mode: StopMode::Instant,
            coast_decay: COAST_DECAY,
            escape_radius: None,
        }
    }
}

/// Brick row tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RowTuning {
    pub brick_size: f32,
    /// Constant vertical velocity of every brick
    pub brick_velocity: f32,
    /// Fixed slot count; `None` derives it from the playfield width
    pub slots_per_row: Option<usize>,
    pub interval_ms: f64,
    pub fill_draw_max: u32,
    pub max_holes: usize,
    pub score: ScoreAward,
}

impl Default for RowTuning {
    fn default() -> Self {
        Self {
            brick_size: BRICK_SIZE,
            brick_velocity: BRICK_VELOCITY,
            slots_per_row: Some(BRICKS_PER_ROW),
            interval_ms: SPAWN_INTERVAL_MS,
            fill_draw_max: FILL_DRAW_MAX,
            max_holes: MAX_HOLES,
            score: ScoreAward::default(),
        }
    }
}

/// Complete simulation tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub rows: RowTuning,
    pub store: StorePolicy,
    pub collision_threshold: f32,
    pub score_position: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player: PlayerTuning::default(),
            rows: RowTuning::default(),
            store: StorePolicy::default(),
            collision_threshold: COLLISION_THRESHOLD,
            score_position: Vec2::new(SCORE_X, SCORE_Y),
        }
    }
}

impl Tuning {
    /// Tuning for a named variant
    pub fn from_preset(preset: Preset) -> Self {
        let mut tuning = Self::default();
        if preset == Preset::Coasting {
            tuning.player.stop_mode = StopMode::Coast;
            tuning.store = StorePolicy::Unbounded;
        }
        tuning
    }

    /// Parse and validate a JSON tuning document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning ({:?} store)", tuning.store);
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.player;
        ConfigError::require_positive("player width", p.size.x as f64)?;
        ConfigError::require_positive("player height", p.size.y as f64)?;
        ConfigError::require_positive("fall speed", p.fall_speed as f64)?;
        ConfigError::require_positive("max velocity", p.max_velocity as f64)?;
        ConfigError::require_positive("acceleration step", p.accel_step as f64)?;
        ConfigError::require_positive("max acceleration", p.max_accel as f64)?;
        if p.stop_mode == StopMode::Coast {
            ConfigError::require_positive("coast decay", p.coast_decay as f64)?;
        }
        if let Some(radius) = p.escape_radius {
            ConfigError::require_positive("escape radius", radius as f64)?;
        }

        let r = &self.rows;
        ConfigError::require_positive("brick size", r.brick_size as f64)?;
        ConfigError::require_positive("spawn interval", r.interval_ms)?;
        // Bricks rise, so the velocity itself is negative
        ConfigError::require_positive("brick rise speed", -(r.brick_velocity as f64))?;
        if r.slots_per_row == Some(0) {
            return Err(ConfigError::RowLayout("a row needs at least one slot"));
        }
        if r.max_holes == 0 {
            return Err(ConfigError::RowLayout("max holes must leave room for the mandatory gap"));
        }
        if r.fill_draw_max == 0 {
            return Err(ConfigError::RowLayout("fill draw range is empty"));
        }

        ConfigError::require_positive("collision threshold", self.collision_threshold as f64)?;

        if let StorePolicy::Pooled { capacity: 0 } = self.store {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}
