//! Demo mode: a simple AI that plays the game
//!
//! Looks at the nearest brick row below the player and steers toward the
//! closest empty slot.

use crate::platform::{Direction, InputSource};
use crate::sim::GameState;
use crate::sim::spawner::slot_count;
use crate::sim::{Playfield, TickInput};

/// How close to the target slot counts as lined up
const DEADBAND: f32 = 2.0;

/// Steering decisions for one frame, recomputed with [`Autopilot::plan`]
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    held: TickInput,
    target_x: Option<f32>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge the player is currently steering toward
    pub fn target(&self) -> Option<f32> {
        self.target_x
    }

    /// Decide which direction to hold this frame
    pub fn plan(&mut self, state: &GameState, field: Playfield) {
        let player = &state.player.body;
        let rows = &state.tuning.rows;

        // Topmost row that is still at or below the player's feet
        let row_top = state
            .obstacles
            .live()
            .map(|o| o.body.top())
            .filter(|&top| top + state.tuning.collision_threshold >= player.bottom())
            .min_by(|a, b| a.total_cmp(b));

        self.target_x = row_top.and_then(|row_top| {
            let occupied: Vec<f32> = state
                .obstacles
                .live()
                .filter(|o| (o.body.top() - row_top).abs() < 1.0)
                .map(|o| o.body.left())
                .collect();
            (0..slot_count(field, rows))
                .map(|i| rows.brick_size * i as f32)
                .filter(|x| x + player.size.x <= field.width)
                .filter(|x| !occupied.iter().any(|o| (o - x).abs() < 1.0))
                .min_by(|a, b| (a - player.left()).abs().total_cmp(&(b - player.left()).abs()))
        });

        self.held = match self.target_x {
            Some(x) if x > player.left() + DEADBAND => TickInput {
                left: false,
                right: true,
            },
            Some(x) if x < player.left() - DEADBAND => TickInput {
                left: true,
                right: false,
            },
            _ => TickInput::default(),
        };
    }
}

impl InputSource for Autopilot {
    fn is_pressed(&self, direction: Direction) -> bool {
        self.held.is_pressed(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;
    use crate::tuning::Tuning;
    use glam::Vec2;

    const FIELD: Playfield = Playfield {
        width: 896.0,
        height: 600.0,
    };

    fn row_with_gap(state: &mut GameState, gap: usize, y: f32) {
        for i in (0..14).filter(|&i| i != gap) {
            let brick = Obstacle::new(Vec2::new(64.0 * i as f32, y), &state.tuning.rows);
            state.obstacles.acquire(brick);
        }
    }

    #[test]
    fn test_steers_toward_gap() {
        let mut state = GameState::new(Tuning::default()).unwrap();
        row_with_gap(&mut state, 6, 400.0);
        let mut pilot = Autopilot::new();

        pilot.plan(&state, FIELD);
        assert_eq!(pilot.target(), Some(384.0));
        assert!(pilot.is_pressed(Direction::Right));
        assert!(!pilot.is_pressed(Direction::Left));

        state.player.body.pos.x = 700.0;
        pilot.plan(&state, FIELD);
        assert!(pilot.is_pressed(Direction::Left));

        state.player.body.pos.x = 385.0;
        pilot.plan(&state, FIELD);
        assert!(!pilot.is_pressed(Direction::Left));
        assert!(!pilot.is_pressed(Direction::Right));
    }

    #[test]
    fn test_idle_without_bricks() {
        let state = GameState::new(Tuning::default()).unwrap();
        let mut pilot = Autopilot::new();
        pilot.plan(&state, FIELD);
        assert_eq!(pilot.target(), None);
        assert!(!pilot.is_pressed(Direction::Right));
    }
}
