//! Obstacle storage
//!
//! Two policies behind one type: a fixed-capacity recycling pool, or a plain
//! growing collection. Both iterate in slot order, which is the order the
//! collision pass sees bricks in.

use serde::{Deserialize, Serialize};

use super::bounds::Playfield;
use super::state::{Entity, Obstacle};
use crate::error::ConfigError;
use crate::tuning::StorePolicy;

/// Fixed-capacity recycling pool
///
/// Slots are allocated lazily up to `capacity`. A slot becomes reusable the
/// moment its obstacle is marked dead; there is no compaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstaclePool {
    slots: Vec<Obstacle>,
    capacity: usize,
}

impl ObstaclePool {
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Place `obstacle` in the first dead slot, or a new one while below
    /// capacity. Returns the slot index, or `None` when saturated.
    pub fn acquire(&mut self, obstacle: Obstacle) -> Option<usize> {
        if let Some(index) = self.slots.iter().position(|o| !o.alive) {
            self.slots[index] = Obstacle {
                alive: true,
                ..obstacle
            };
            return Some(index);
        }
        if self.slots.len() < self.capacity {
            self.slots.push(Obstacle {
                alive: true,
                ..obstacle
            });
            return Some(self.slots.len() - 1);
        }
        None
    }

    /// Mark every obstacle that has left the playfield as dead
    pub fn age(&mut self, field: Playfield) {
        for obstacle in self.slots.iter_mut().filter(|o| o.alive) {
            if obstacle.has_exited(field) {
                obstacle.alive = false;
            }
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots allocated so far, live or dead
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }
}

/// Where bricks live between spawn and exit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ObstacleStore {
    Pooled(ObstaclePool),
    Unbounded(Vec<Obstacle>),
}

impl ObstacleStore {
    pub fn from_policy(policy: StorePolicy) -> Result<Self, ConfigError> {
        Ok(match policy {
            StorePolicy::Pooled { capacity } => ObstacleStore::Pooled(ObstaclePool::new(capacity)?),
            StorePolicy::Unbounded => ObstacleStore::Unbounded(Vec::new()),
        })
    }

    /// Store a new obstacle; `None` means the spawn was dropped
    pub fn acquire(&mut self, obstacle: Obstacle) -> Option<usize> {
        match self {
            ObstacleStore::Pooled(pool) => pool.acquire(obstacle),
            ObstacleStore::Unbounded(list) => {
                list.push(Obstacle {
                    alive: true,
                    ..obstacle
                });
                Some(list.len() - 1)
            }
        }
    }

    /// Retire obstacles that have left the playfield
    pub fn age(&mut self, field: Playfield) {
        match self {
            ObstacleStore::Pooled(pool) => pool.age(field),
            ObstacleStore::Unbounded(list) => list.retain(|o| !o.has_exited(field)),
        }
    }

    fn slots(&self) -> &[Obstacle] {
        match self {
            ObstacleStore::Pooled(pool) => &pool.slots,
            ObstacleStore::Unbounded(list) => list,
        }
    }

    fn slots_mut(&mut self) -> &mut [Obstacle] {
        match self {
            ObstacleStore::Pooled(pool) => &mut pool.slots,
            ObstacleStore::Unbounded(list) => list,
        }
    }

    /// Live obstacles in slot order
    pub fn live(&self) -> impl Iterator<Item = &Obstacle> {
        self.slots().iter().filter(|o| o.alive)
    }

    pub fn live_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.slots_mut().iter_mut().filter(|o| o.alive)
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// `None` for the unbounded policy
    pub fn capacity(&self) -> Option<usize> {
        match self {
            ObstacleStore::Pooled(pool) => Some(pool.capacity()),
            ObstacleStore::Unbounded(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::RowTuning;
    use glam::Vec2;
    use proptest::prelude::*;

    const FIELD: Playfield = Playfield {
        width: 896.0,
        height: 600.0,
    };

    fn brick(x: f32, y: f32) -> Obstacle {
        Obstacle::new(Vec2::new(x, y), &RowTuning::default())
    }

    fn exited(x: f32) -> Obstacle {
        brick(x, -100.0)
    }

    #[test]
    fn test_pool_saturates() {
        let mut store = ObstacleStore::from_policy(StorePolicy::Pooled { capacity: 2 }).unwrap();
        assert_eq!(store.acquire(brick(0.0, 600.0)), Some(0));
        assert_eq!(store.acquire(brick(64.0, 600.0)), Some(1));
        assert_eq!(store.acquire(brick(128.0, 600.0)), None);
        assert_eq!(store.live_count(), 2);
    }

    #[test]
    fn test_pool_reuses_first_dead_slot() {
        let mut pool = ObstaclePool::new(3).unwrap();
        pool.acquire(brick(0.0, 600.0));
        pool.acquire(exited(64.0));
        pool.acquire(exited(128.0));
        pool.age(FIELD);

        let mut store = ObstacleStore::Pooled(pool);
        assert_eq!(store.live_count(), 1);
        assert_eq!(store.acquire(brick(320.0, 600.0)), Some(1));
        assert_eq!(store.acquire(brick(384.0, 600.0)), Some(2));
        assert_eq!(store.acquire(brick(448.0, 600.0)), None);

        let xs: Vec<f32> = store.live().map(|o| o.body.pos.x).collect();
        assert_eq!(xs, vec![0.0, 320.0, 384.0]);
        if let ObstacleStore::Pooled(pool) = &store {
            assert_eq!(pool.allocated(), 3);
        }
    }

    #[test]
    fn test_reused_slot_is_reset() {
        let mut pool = ObstaclePool::new(1).unwrap();
        let mut old = exited(0.0);
        old.body.vel = Vec2::new(5.0, 5.0);
        pool.acquire(old);
        pool.age(FIELD);
        assert_eq!(pool.acquire(brick(64.0, 600.0)), Some(0));

        let store = ObstacleStore::Pooled(pool);
        let reused = store.live().next().unwrap();
        assert_eq!(reused.body.pos, Vec2::new(64.0, 600.0));
        assert_eq!(reused.body.vel, Vec2::new(0.0, -2.0));
    }

    #[test]
    fn test_pool_rejects_zero_capacity() {
        assert!(matches!(ObstaclePool::new(0), Err(ConfigError::ZeroCapacity)));
    }

    #[test]
    fn test_unbounded_grows_and_drops_dead() {
        let mut store = ObstacleStore::from_policy(StorePolicy::Unbounded).unwrap();
        for i in 0..100 {
            assert!(store.acquire(brick(i as f32, 600.0)).is_some());
        }
        store.acquire(exited(0.0));
        assert_eq!(store.live_count(), 101);
        store.age(FIELD);
        assert_eq!(store.live_count(), 100);
        assert_eq!(store.capacity(), None);
    }

    #[test]
    fn test_live_mut_skips_dead() {
        let mut pool = ObstaclePool::new(2).unwrap();
        pool.acquire(exited(0.0));
        pool.acquire(brick(64.0, 600.0));
        pool.age(FIELD);
        let mut store = ObstacleStore::Pooled(pool);
        for o in store.live_mut() {
            o.body.pos.y -= 10.0;
        }
        let ys: Vec<f32> = store.live().map(|o| o.body.pos.y).collect();
        assert_eq!(ys, vec![590.0]);
    }

    proptest! {
        #[test]
        fn prop_live_never_exceeds_capacity(
            capacity in 1usize..16,
            ops in prop::collection::vec(any::<bool>(), 0..200),
        ) {
            let mut pool = ObstaclePool::new(capacity).unwrap();
            for (i, spawn_exited) in ops.into_iter().enumerate() {
                let y = if spawn_exited { -100.0 } else { 600.0 };
                pool.acquire(brick(i as f32, y));
                if i % 7 == 0 {
                    pool.age(FIELD);
                }
                let live = pool.slots.iter().filter(|o| o.alive).count();
                prop_assert!(live <= capacity);
                prop_assert!(pool.allocated() <= capacity);
            }
        }
    }
}
