//! Frame driver
//!
//! A `Session` is one play-through: it owns the game state and the RNG, runs
//! one update per display refresh, and reports the end of the game either by
//! its phase or through a one-shot callback.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::ConfigError;
use crate::platform::{InputSource, RandomSource, RenderSink};
use crate::sim::{Entity, GamePhase, GameState, Playfield, TickInput, tick};
use crate::tuning::Tuning;

type GameOverHook = Box<dyn FnOnce(&GameState)>;

/// One game session
pub struct Session<R: RandomSource = Pcg32> {
    state: GameState,
    rng: R,
    on_game_over: Option<GameOverHook>,
}

impl Session<Pcg32> {
    /// Reproducible session
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }

    /// Session seeded from the operating system
    pub fn from_entropy(tuning: Tuning) -> Result<Self, ConfigError> {
        Self::with_rng(tuning, Pcg32::from_os_rng())
    }
}

impl<R: RandomSource> Session<R> {
    pub fn with_rng(tuning: Tuning, rng: R) -> Result<Self, ConfigError> {
        let state = GameState::new(tuning)?;
        log::info!(
            "Session started ({:?} store, {:?} stop)",
            state.tuning.store,
            state.tuning.player.stop_mode
        );
        Ok(Self {
            state,
            rng,
            on_game_over: None,
        })
    }

    /// Register a callback fired once, on the frame the game ends
    pub fn on_game_over(&mut self, hook: impl FnOnce(&GameState) + 'static) {
        self.on_game_over = Some(Box::new(hook));
    }

    /// Run one frame; a no-op after game over
    pub fn update(&mut self, input: &impl InputSource, field: Playfield, dt_ms: f64) -> GamePhase {
        if !self.is_running() {
            return self.state.phase;
        }
        let input = TickInput::poll(input);
        let phase = tick(&mut self.state, &input, field, &mut self.rng, dt_ms);
        if phase == GamePhase::GameOver {
            if let Some(hook) = self.on_game_over.take() {
                hook(&self.state);
            }
        }
        phase
    }

    /// Draw the player, every live brick and the score, in that order
    ///
    /// Read-only; still valid after game over for a final frame.
    pub fn render(&self, sink: &mut impl RenderSink) {
        sink.draw(&self.state.player.render_data());
        for brick in self.state.obstacles.live() {
            sink.draw(&brick.render_data());
        }
        sink.draw(&self.state.score_display.render_data());
    }

    pub fn is_running(&self) -> bool {
        !self.state.is_over()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_MS;
    use crate::platform::{RenderData, Visual};
    use glam::Vec2;
    use std::cell::Cell;
    use std::rc::Rc;

    const FIELD: Playfield = Playfield {
        width: 896.0,
        height: 600.0,
    };

    #[test]
    fn test_render_draws_every_live_entity() {
        let mut session = Session::new(Tuning::default(), 1).unwrap();
        session.update(&TickInput::default(), FIELD, FRAME_MS);

        let mut frame: Vec<RenderData> = Vec::new();
        session.render(&mut frame);
        let bricks = session.state().obstacles.live_count();
        assert_eq!(frame.len(), bricks + 2);
        assert!(matches!(frame[0].visual, Visual::Player(_)));
        assert_eq!(frame.last().map(|d| d.visual), Some(Visual::Score(100)));
        assert!(frame[1..=bricks].iter().all(|d| d.visual == Visual::Brick));
    }

    #[test]
    fn test_game_over_hook_fires_once() {
        let mut tuning = Tuning::default();
        tuning.rows.interval_ms = 1.0e12;
        let mut session = Session::new(tuning, 2).unwrap();
        let fired = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&fired);
        session.on_game_over(move |state| {
            assert_eq!(state.phase, GamePhase::GameOver);
            seen.set(seen.get() + 1);
        });

        // Lift the player off the top edge
        session.state.player.body.pos.y = -1.0;
        session.state.player.body.vel.y = -5.0;
        assert_eq!(
            session.update(&TickInput::default(), FIELD, FRAME_MS),
            GamePhase::GameOver
        );
        assert!(!session.is_running());
        assert_eq!(fired.get(), 1);

        session.update(&TickInput::default(), FIELD, FRAME_MS);
        assert_eq!(fired.get(), 1);

        // A final frame can still be drawn
        let mut frame: Vec<RenderData> = Vec::new();
        session.render(&mut frame);
        assert!(!frame.is_empty());
    }

    #[test]
    fn test_seeded_sessions_match() {
        let mut a = Session::new(Tuning::default(), 77).unwrap();
        let mut b = Session::new(Tuning::default(), 77).unwrap();
        for _ in 0..300 {
            a.update(&TickInput::default(), FIELD, FRAME_MS);
            b.update(&TickInput::default(), FIELD, FRAME_MS);
        }
        let xs: Vec<Vec2> = a.state().obstacles.live().map(|o| o.body.pos).collect();
        let ys: Vec<Vec2> = b.state().obstacles.live().map(|o| o.body.pos).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn test_rejects_invalid_tuning() {
        let mut tuning = Tuning::default();
        tuning.collision_threshold = 0.0;
        assert!(Session::new(tuning, 0).is_err());
    }

    #[test]
    fn test_playfield_may_resize() {
        let mut session = Session::new(Tuning::default(), 5).unwrap();
        session.update(&TickInput::default(), FIELD, FRAME_MS);
        let narrow = Playfield::new(320.0, 600.0);
        let right = TickInput {
            right: true,
            left: false,
        };
        for _ in 0..120 {
            session.update(&right, narrow, FRAME_MS);
            assert!(session.state().player.body.right() <= narrow.width);
        }
    }
}
