//! Rate-limited brick row generation
//!
//! Rows are laid out on a grid of brick-sized slots. Each row keeps one
//! randomly chosen slot empty so it can always be passed, and caps the total
//! number of holes so it never gets too sparse.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Playfield;
use super::state::Obstacle;
use super::store::ObstacleStore;
use crate::platform::RandomSource;
use crate::tuning::RowTuning;

/// What one generated row did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReport {
    /// Slot index that was kept empty
    pub gap: usize,
    /// Slots the layout asked to fill
    pub filled: usize,
    /// Bricks the store accepted
    pub spawned: usize,
}

impl RowReport {
    /// Bricks lost to a saturated pool
    pub fn dropped(&self) -> usize {
        self.filled - self.spawned
    }
}

/// Decide which slots of a row get a brick
///
/// `true` means filled. The mandatory gap counts toward `max_holes`; random
/// holes are only allowed while a hole is still reserved for a gap that comes
/// later in the row.
pub fn layout_row(
    slots: usize,
    rows: &RowTuning,
    rng: &mut impl RandomSource,
) -> (usize, Vec<bool>) {
    let gap = rng.below(slots);
    let mut holes = 0usize;
    let mut layout = Vec::with_capacity(slots);

    for i in 0..slots {
        let filled = if i == gap {
            false
        } else {
            let reserved = usize::from(i < gap);
            if holes + reserved >= rows.max_holes {
                true
            } else {
                rng.below(rows.fill_draw_max as usize + 1) > 0
            }
        };
        if !filled {
            holes += 1;
        }
        layout.push(filled);
    }
    (gap, layout)
}

/// Number of slots across the playfield
pub fn slot_count(field: Playfield, rows: &RowTuning) -> usize {
    rows.slots_per_row
        .unwrap_or_else(|| (field.width / rows.brick_size).floor().max(0.0) as usize)
}

/// Generates at most one row per interval
///
/// The first request after the interval has elapsed (or the very first
/// request) runs immediately and restarts the interval; requests in between
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowSpawner {
    interval_ms: f64,
    last_spawn_ms: Option<f64>,
}

impl RowSpawner {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_spawn_ms: None,
        }
    }

    /// Consume the rate limit if it allows a row at `now_ms`
    pub fn ready(&mut self, now_ms: f64) -> bool {
        let due = match self.last_spawn_ms {
            None => true,
            Some(last) => now_ms - last >= self.interval_ms,
        };
        if due {
            self.last_spawn_ms = Some(now_ms);
        }
        due
    }

    pub fn last_spawn_ms(&self) -> Option<f64> {
        self.last_spawn_ms
    }

    /// Spawn a row just below the playfield if the rate limit allows
    pub fn maybe_spawn_row(
        &mut self,
        now_ms: f64,
        store: &mut ObstacleStore,
        field: Playfield,
        rows: &RowTuning,
        rng: &mut impl RandomSource,
    ) -> Option<RowReport> {
        if !self.ready(now_ms) {
            return None;
        }

        let slots = slot_count(field, rows);
        if slots == 0 {
            log::debug!("Playfield {}px too narrow for a row", field.width);
            return None;
        }

        let (gap, layout) = layout_row(slots, rows, rng);
        let mut report = RowReport {
            gap,
            filled: 0,
            spawned: 0,
        };
        for (i, _) in layout.iter().enumerate().filter(|(_, filled)| **filled) {
            report.filled += 1;
            let pos = Vec2::new(rows.brick_size * i as f32, field.height);
            if store.acquire(Obstacle::new(pos, rows)).is_some() {
                report.spawned += 1;
            }
        }

        if report.dropped() > 0 {
            log::trace!("Store saturated, dropped {} bricks", report.dropped());
        }
        log::debug!(
            "Row at {:.0}ms: gap {}, {}/{} bricks",
            now_ms,
            gap,
            report.spawned,
            slots
        );
        Some(report)
    }
}
