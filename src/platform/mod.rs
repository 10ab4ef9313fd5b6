//! Platform abstraction layer
//!
//! The seams the simulation consumes from its host:
//! - Input polling (held directions)
//! - Render sink (read-only draw calls)
//! - Randomness (injected so runs are reproducible)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Horizontal input direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Keyboard (or any other) input polled once per frame
pub trait InputSource {
    fn is_pressed(&self, direction: Direction) -> bool;
}

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

impl Facing {
    /// Animation name the asset service knows this facing by
    pub fn animation(&self) -> &'static str {
        match self {
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// Symbolic visual selector forwarded to the asset service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    Player(Facing),
    Brick,
    /// Score text
    Score(u64),
}

/// Everything a renderer needs to draw one entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderData {
    pub pos: Vec2,
    /// Zero for text
    pub size: Vec2,
    pub visual: Visual,
}

/// Receives one draw call per live entity per frame
pub trait RenderSink {
    fn draw(&mut self, item: &RenderData);
}

/// Collects draw calls, useful for headless runs and tests
impl RenderSink for Vec<RenderData> {
    fn draw(&mut self, item: &RenderData) {
        self.push(*item);
    }
}

/// Uniform randomness
pub trait RandomSource {
    /// Uniform real in `[low, high)`; returns `low` for an empty range
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Uniform index in `0..n`; `n` must be nonzero
    fn below(&mut self, n: usize) -> usize {
        let draw = self.uniform(0.0, n as f64).floor() as usize;
        draw.min(n.saturating_sub(1))
    }
}

impl<R: rand::Rng> RandomSource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high > low {
            self.random_range(low..high)
        } else {
            low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_below_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for n in 1..20 {
            for _ in 0..50 {
                assert!(rng.below(n) < n);
            }
        }
    }

    #[test]
    fn test_uniform_empty_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(rng.uniform(3.0, 3.0), 3.0);
    }

    #[test]
    fn test_seeded_reproducible() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        let xs: Vec<usize> = (0..10).map(|_| a.below(14)).collect();
        let ys: Vec<usize> = (0..10).map(|_| b.below(14)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<RenderData> = Vec::new();
        sink.draw(&RenderData {
            pos: Vec2::ZERO,
            size: Vec2::ZERO,
            visual: Visual::Score(300),
        });
        assert_eq!(sink.len(), 1);
        assert_eq!(Facing::Right.animation(), "right");
    }
}
