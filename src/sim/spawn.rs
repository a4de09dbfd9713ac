//! Time-driven spawning
//!
//! The spawner only decides *what* and *where*. Turning a [`SpawnSpec`] into a
//! live entity is the caller's job, so the spawner never touches the live
//! collections.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{EnemyKind, PowerUpKind, SpawnKind};
use crate::consts::*;
use crate::tuning::Tuning;

/// A request to create one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnSpec {
    pub kind: SpawnKind,
    pub pos: Vec3,
}

/// Last-spawn bookkeeping for one entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTimer {
    last: u64,
}

impl SpawnTimer {
    pub fn new(now: u64) -> Self {
        Self { last: now }
    }

    pub fn is_due(&self, now: u64, interval_ticks: u64) -> bool {
        now.saturating_sub(self.last) >= interval_ticks
    }

    pub fn restart(&mut self, now: u64) {
        self.last = now;
    }
}

/// What the spawner needs to know about the live world
#[derive(Debug, Clone, Copy)]
pub struct SpawnContext {
    pub level: u32,
    /// Multiplier from the level controller (1.0 at level 1)
    pub spawn_rate: f32,
    /// Live regular enemies
    pub live_enemies: usize,
    pub boss_alive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    enemy: SpawnTimer,
    power_up: SpawnTimer,
}

impl Spawner {
    pub fn new(now: u64) -> Self {
        Self {
            enemy: SpawnTimer::new(now),
            power_up: SpawnTimer::new(now),
        }
    }

    /// Ticks between regular enemy spawns at the given spawn rate
    pub fn enemy_interval_ticks(tuning: &Tuning, spawn_rate: f32) -> u64 {
        let rate = if spawn_rate.is_finite() && spawn_rate > 0.0 {
            spawn_rate
        } else {
            1.0
        };
        let secs = (tuning.enemy_interval_secs / rate).max(tuning.min_enemy_interval_secs);
        secs_to_ticks(secs).max(1)
    }

    /// Emit an enemy spec if one is due. A due spawn at the cap (or while a
    /// boss is alive) is dropped, not queued.
    pub fn try_spawn_enemy<R: Rng>(
        &mut self,
        now: u64,
        ctx: &SpawnContext,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<SpawnSpec> {
        let interval = Self::enemy_interval_ticks(tuning, ctx.spawn_rate);
        if !self.enemy.is_due(now, interval) {
            return None;
        }
        self.enemy.restart(now);

        if ctx.boss_alive {
            return None;
        }
        if ctx.live_enemies >= tuning.max_enemies {
            log::debug!("Enemy cap ({}) reached, spawn dropped", tuning.max_enemies);
            return None;
        }

        let kind = pick_enemy_kind(ctx.level, rng);
        Some(SpawnSpec {
            kind: SpawnKind::Enemy(kind),
            pos: random_spawn_position(rng),
        })
    }

    /// Emit a power-up spec (uniform over all kinds) if one is due
    pub fn try_spawn_power_up<R: Rng>(
        &mut self,
        now: u64,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<SpawnSpec> {
        if !self
            .power_up
            .is_due(now, secs_to_ticks(tuning.power_up_interval_secs).max(1))
        {
            return None;
        }
        self.power_up.restart(now);

        let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];
        Some(SpawnSpec {
            kind: SpawnKind::PowerUp(kind),
            pos: random_spawn_position(rng),
        })
    }

    /// The boss enters dead ahead
    pub fn boss_spec() -> SpawnSpec {
        SpawnSpec {
            kind: SpawnKind::Enemy(EnemyKind::Boss),
            pos: Vec3::new(0.0, 0.0, BOSS_SPAWN_Z),
        }
    }

    pub fn reset(&mut self, now: u64) {
        self.enemy.restart(now);
        self.power_up.restart(now);
    }
}

/// Regular enemy kinds allowed at a level
pub fn eligible_kinds(level: u32) -> &'static [EnemyKind] {
    match level {
        0 | 1 => &[EnemyKind::Standard],
        2 => &[EnemyKind::Standard, EnemyKind::Fast],
        _ => &[EnemyKind::Standard, EnemyKind::Fast, EnemyKind::Strong],
    }
}

/// Relative spawn weight; strong enemies get more common past level 3
fn kind_weight(kind: EnemyKind, level: u32) -> u32 {
    match kind {
        EnemyKind::Standard => 6,
        EnemyKind::Fast => 3,
        EnemyKind::Strong => (2 + level.saturating_sub(3)).min(6),
        EnemyKind::Boss => 0,
    }
}

/// Weighted pick among the level's eligible kinds
pub fn pick_enemy_kind<R: Rng>(level: u32, rng: &mut R) -> EnemyKind {
    let kinds = eligible_kinds(level);
    let total: u32 = kinds.iter().map(|&k| kind_weight(k, level)).sum();
    let mut roll = rng.random_range(0..total);
    for &kind in kinds {
        let weight = kind_weight(kind, level);
        if roll < weight {
            return kind;
        }
        roll -= weight;
    }
    EnemyKind::Standard
}

/// Uniform point in the far spawn volume
pub fn random_spawn_position<R: Rng>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.random_range(-SPAWN_HALF_WIDTH..=SPAWN_HALF_WIDTH),
        rng.random_range(-SPAWN_HALF_HEIGHT..=SPAWN_HALF_HEIGHT),
        rng.random_range(SPAWN_Z_FAR..=SPAWN_Z_NEAR),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ctx(level: u32, live_enemies: usize) -> SpawnContext {
        SpawnContext {
            level,
            spawn_rate: 1.0,
            live_enemies,
            boss_alive: false,
        }
    }

    #[test]
    fn test_enemy_spawn_waits_for_interval() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::new(0);

        // 3 seconds at 60 Hz
        assert!(spawner.try_spawn_enemy(179, &ctx(1, 0), &tuning, &mut rng).is_none());
        let spec = spawner.try_spawn_enemy(180, &ctx(1, 0), &tuning, &mut rng).unwrap();
        assert_eq!(spec.kind, SpawnKind::Enemy(EnemyKind::Standard));
        assert!(spawner.try_spawn_enemy(181, &ctx(1, 0), &tuning, &mut rng).is_none());
    }

    #[test]
    fn test_enemy_spawn_dropped_at_cap() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::new(0);

        assert!(spawner.try_spawn_enemy(180, &ctx(1, 10), &tuning, &mut rng).is_none());
        // Dropped, not queued: freeing a slot right after does not release it
        assert!(spawner.try_spawn_enemy(181, &ctx(1, 9), &tuning, &mut rng).is_none());
        assert!(spawner.try_spawn_enemy(360, &ctx(1, 9), &tuning, &mut rng).is_some());
    }

    #[test]
    fn test_boss_suspends_regular_stream() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::new(0);
        let boss_ctx = SpawnContext {
            boss_alive: true,
            ..ctx(4, 0)
        };
        assert!(spawner.try_spawn_enemy(600, &boss_ctx, &tuning, &mut rng).is_none());
    }

    #[test]
    fn test_interval_shrinks_with_rate() {
        let tuning = Tuning::default();
        let base = Spawner::enemy_interval_ticks(&tuning, 1.0);
        let faster = Spawner::enemy_interval_ticks(&tuning, 2.0);
        assert_eq!(base, 180);
        assert_eq!(faster, 90);
        // Floor
        assert_eq!(Spawner::enemy_interval_ticks(&tuning, 1000.0), 24);
    }

    #[test]
    fn test_level_one_only_standard() {
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..200 {
            assert_eq!(pick_enemy_kind(1, &mut rng), EnemyKind::Standard);
        }
    }

    #[test]
    fn test_later_levels_mix_kinds() {
        let mut rng = Pcg32::seed_from_u64(99);
        let picks: Vec<_> = (0..500).map(|_| pick_enemy_kind(3, &mut rng)).collect();
        assert!(picks.contains(&EnemyKind::Fast));
        assert!(picks.contains(&EnemyKind::Strong));
        assert!(!picks.contains(&EnemyKind::Boss));
    }

    #[test]
    fn test_spawn_positions_in_volume() {
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..500 {
            let pos = random_spawn_position(&mut rng);
            assert!(pos.x.abs() <= SPAWN_HALF_WIDTH);
            assert!(pos.y.abs() <= SPAWN_HALF_HEIGHT);
            assert!(pos.z >= SPAWN_Z_FAR && pos.z <= SPAWN_Z_NEAR);
        }
    }

    #[test]
    fn test_power_up_interval() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut spawner = Spawner::new(0);
        assert!(spawner.try_spawn_power_up(599, &tuning, &mut rng).is_none());
        let spec = spawner.try_spawn_power_up(600, &tuning, &mut rng).unwrap();
        assert!(matches!(spec.kind, SpawnKind::PowerUp(_)));
    }
}
