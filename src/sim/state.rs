//! Game state and core simulation types
//!
//! `GameState` is the single simulation context: it owns every live
//! collection plus the spawner, level controller and RNG that act on them.

use glam::{Quat, Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::LevelController;
use super::events::{ContactQueue, GameEvent};
use super::handoff::{SpawnInbox, SpawnMode, SpawnOutcome, SpawnPort, SpawnRequest, spawn_channel};
use super::snapshot::Snapshot;
use super::spawn::{SpawnSpec, Spawner};
use crate::consts::*;
use crate::error::SimError;
use crate::tuning::{EnemyStats, Tuning};
use crate::{aim_direction, aim_rotation, lerp};

/// Stable entity identifier, never reused within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// The ship's fixed id; allocated ids start above it
pub const SHIP_ID: EntityId = EntityId(0);

/// Opaque handle to a renderer-owned visual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualHandle(pub u64);

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Ship destroyed; frozen until reset
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Standard,
    Fast,
    Strong,
    Boss,
}

impl EnemyKind {
    pub fn asset_name(&self) -> &'static str {
        match self {
            EnemyKind::Standard => "standardEnemy",
            EnemyKind::Fast => "fastEnemy",
            EnemyKind::Strong => "strongEnemy",
            EnemyKind::Boss => "bossEnemy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectileKind {
    #[default]
    Laser,
    Missile,
    Plasma,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Shield,
    DoubleFireRate,
    ExtraPoints,
    Healing,
    MultiProjectile,
    DamageBoost,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 6] = [
        PowerUpKind::Shield,
        PowerUpKind::DoubleFireRate,
        PowerUpKind::ExtraPoints,
        PowerUpKind::Healing,
        PowerUpKind::MultiProjectile,
        PowerUpKind::DamageBoost,
    ];

    pub fn asset_name(&self) -> &'static str {
        match self {
            PowerUpKind::Shield => "shieldPowerUp",
            PowerUpKind::DoubleFireRate => "fireRatePowerUp",
            PowerUpKind::ExtraPoints => "pointsPowerUp",
            PowerUpKind::Healing => "healingPowerUp",
            PowerUpKind::MultiProjectile => "multiShotPowerUp",
            PowerUpKind::DamageBoost => "damagePowerUp",
        }
    }
}

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Ship,
    /// Enemy fire; nothing fires these yet
    Enemy(EntityId),
}

/// What a spawn spec turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnKind {
    Enemy(EnemyKind),
    PowerUp(PowerUpKind),
}

impl SpawnKind {
    pub fn asset_name(&self) -> &'static str {
        match self {
            SpawnKind::Enemy(kind) => kind.asset_name(),
            SpawnKind::PowerUp(kind) => kind.asset_name(),
        }
    }
}

/// Anything with an identity and a position in the playfield
pub trait Body {
    fn id(&self) -> EntityId;
    fn pos(&self) -> Vec3;
    fn is_alive(&self) -> bool;
}

/// An enemy flying toward the ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub kind: EnemyKind,
    pub pos: Vec3,
    /// Units per tick along +z
    pub speed: f32,
    pub health: i32,
    pub points: u64,
    pub breach_damage: i32,
    pub alive: bool,
    /// Already took part in a collision this tick
    #[serde(skip)]
    pub engaged: bool,
    #[serde(skip)]
    pub visual: Option<VisualHandle>,
}

impl Enemy {
    pub fn new(id: EntityId, kind: EnemyKind, pos: Vec3, stats: &EnemyStats) -> Self {
        Self {
            id,
            kind,
            pos,
            speed: stats.speed,
            health: stats.health,
            points: stats.points,
            breach_damage: stats.breach_damage,
            alive: true,
            engaged: false,
            visual: None,
        }
    }

    /// Apply damage; returns true if this hit destroyed the enemy
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if !self.alive {
            return false;
        }
        self.health = (self.health - amount.max(0)).max(0);
        if self.health == 0 {
            self.alive = false;
            return true;
        }
        false
    }
}

/// A projectile in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: EntityId,
    pub kind: ProjectileKind,
    pub pos: Vec3,
    /// Unit direction
    pub dir: Vec3,
    /// Units per tick
    pub speed: f32,
    /// Damage fixed at fire time
    pub damage: i32,
    pub owner: Owner,
    pub alive: bool,
}

impl Projectile {
    pub fn new(
        id: EntityId,
        kind: ProjectileKind,
        pos: Vec3,
        dir: Vec3,
        speed: f32,
        damage: i32,
    ) -> Self {
        Self {
            id,
            kind,
            pos,
            dir: dir.normalize_or_zero(),
            speed,
            damage,
            owner: Owner::Ship,
            alive: true,
        }
    }
}

/// A pickup entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: EntityId,
    pub kind: PowerUpKind,
    pub pos: Vec3,
    /// +z drift per tick
    pub speed: f32,
    pub alive: bool,
    #[serde(skip)]
    pub visual: Option<VisualHandle>,
}

impl PowerUp {
    pub fn new(id: EntityId, kind: PowerUpKind, pos: Vec3, speed: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            speed,
            alive: true,
            visual: None,
        }
    }
}

/// Timed ship modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuffKind {
    Shield,
    FireRate,
    MultiShot,
    DamageBoost,
}

impl BuffKind {
    pub const ALL: [BuffKind; 4] = [
        BuffKind::Shield,
        BuffKind::FireRate,
        BuffKind::MultiShot,
        BuffKind::DamageBoost,
    ];
}

/// A buff value and the tick it reverts at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedBuff {
    pub value: f32,
    pub expires_at: u64,
}

/// Active buffs, one slot per kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Buffs {
    shield: Option<TimedBuff>,
    fire_rate: Option<TimedBuff>,
    multi_shot: Option<TimedBuff>,
    damage: Option<TimedBuff>,
}

impl Buffs {
    fn slot_mut(&mut self, kind: BuffKind) -> &mut Option<TimedBuff> {
        match kind {
            BuffKind::Shield => &mut self.shield,
            BuffKind::FireRate => &mut self.fire_rate,
            BuffKind::MultiShot => &mut self.multi_shot,
            BuffKind::DamageBoost => &mut self.damage,
        }
    }

    pub fn get(&self, kind: BuffKind) -> Option<TimedBuff> {
        match kind {
            BuffKind::Shield => self.shield,
            BuffKind::FireRate => self.fire_rate,
            BuffKind::MultiShot => self.multi_shot,
            BuffKind::DamageBoost => self.damage,
        }
    }

    /// Install a buff, replacing any active one of the same kind
    pub fn apply(&mut self, kind: BuffKind, value: f32, expires_at: u64) -> Result<(), SimError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(SimError::InvalidBuffStack { kind, value });
        }
        *self.slot_mut(kind) = Some(TimedBuff { value, expires_at });
        Ok(())
    }

    /// Drop every buff whose expiry has been reached; returns what reverted
    pub fn expire(&mut self, now: u64) -> Vec<BuffKind> {
        let mut expired = Vec::new();
        for kind in BuffKind::ALL {
            let slot = self.slot_mut(kind);
            if slot.is_some_and(|b| now >= b.expires_at) {
                *slot = None;
                expired.push(kind);
            }
        }
        expired
    }

    pub fn shield_active(&self) -> bool {
        self.shield.is_some()
    }

    pub fn multi_shot(&self) -> bool {
        self.multi_shot.is_some()
    }

    /// Fire rate multiplier (1.0 at baseline)
    pub fn fire_rate(&self) -> f32 {
        self.fire_rate.map_or(1.0, |b| b.value)
    }

    /// Damage multiplier (1.0 at baseline)
    pub fn damage(&self) -> f32 {
        self.damage.map_or(1.0, |b| b.value)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spaceship {
    pub pos: Vec3,
    /// Radians, positive = right
    pub yaw: f32,
    /// Radians, positive = up
    pub pitch: f32,
    /// 0..=SHIP_MAX_HEALTH
    pub health: i32,
    /// Ticks until the next shot is allowed
    pub fire_cooldown: u32,
    pub buffs: Buffs,
}

impl Default for Spaceship {
    fn default() -> Self {
        Self {
            pos: Vec3::new(0.0, 0.0, SHIP_START_Z),
            yaw: 0.0,
            pitch: 0.0,
            health: SHIP_MAX_HEALTH,
            fire_cooldown: 0,
            buffs: Buffs::default(),
        }
    }
}

impl Spaceship {
    pub fn rotation(&self) -> Quat {
        aim_rotation(self.yaw, self.pitch)
    }

    /// Unit aim direction
    pub fn aim(&self) -> Vec3 {
        aim_direction(self.yaw, self.pitch)
    }

    /// Turn toward the joystick deflection (with smoothing)
    pub fn steer(&mut self, joystick: Vec2) {
        let joystick = if joystick.is_finite() {
            joystick.clamp(Vec2::splat(-1.0), Vec2::ONE)
        } else {
            Vec2::ZERO
        };
        let yaw_target = self.yaw + joystick.x * STEER_RATE;
        let pitch_target = self.pitch + joystick.y * STEER_RATE;
        self.yaw = lerp(self.yaw, yaw_target, STEER_SMOOTHING).clamp(-MAX_AIM_ANGLE, MAX_AIM_ANGLE);
        self.pitch =
            lerp(self.pitch, pitch_target, STEER_SMOOTHING).clamp(-MAX_AIM_ANGLE, MAX_AIM_ANGLE);
    }

    /// Heal, clamped to max; returns the amount actually restored
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health + amount.max(0)).min(SHIP_MAX_HEALTH);
        self.health - before
    }

    /// Take damage, clamped at zero; returns the amount actually lost
    pub fn damage(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health - amount.max(0)).max(0);
        before - self.health
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }
}

impl Body for Enemy {
    fn id(&self) -> EntityId {
        self.id
    }
    fn pos(&self) -> Vec3 {
        self.pos
    }
    fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Body for Projectile {
    fn id(&self) -> EntityId {
        self.id
    }
    fn pos(&self) -> Vec3 {
        self.pos
    }
    fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Body for PowerUp {
    fn id(&self) -> EntityId {
        self.id
    }
    fn pos(&self) -> Vec3 {
        self.pos
    }
    fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Body for Spaceship {
    fn id(&self) -> EntityId {
        SHIP_ID
    }
    fn pos(&self) -> Vec3 {
        self.pos
    }
    fn is_alive(&self) -> bool {
        !self.is_destroyed()
    }
}

/// Complete session state
#[derive(Debug)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter (the monotonic clock)
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Score
    pub score: u64,
    /// Player ship
    pub ship: Spaceship,
    /// Live enemies (sorted by id)
    pub enemies: Vec<Enemy>,
    /// Live projectiles (sorted by id)
    pub projectiles: Vec<Projectile>,
    /// Live power-ups (sorted by id)
    pub power_ups: Vec<PowerUp>,
    /// Balance data
    pub tuning: Tuning,
    pub spawner: Spawner,
    pub levels: LevelController,
    pub spawn_mode: SpawnMode,
    /// Events raised during the last tick
    pub(crate) events: Vec<GameEvent>,
    pub(crate) contacts: ContactQueue,
    pub(crate) rng: Pcg32,
    /// Boss owed to the spawn path (entered a boss level)
    pub(crate) boss_pending: bool,
    /// Requests waiting for the host (deferred mode)
    pub(crate) outbox: Vec<SpawnRequest>,
    pub(crate) inbox: Option<SpawnInbox>,
    /// Bumped on reset so late spawns from an old session are ignored
    pub(crate) generation: u32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let levels = LevelController::new(&tuning);
        Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Playing,
            score: 0,
            ship: Spaceship::default(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            power_ups: Vec::new(),
            tuning,
            spawner: Spawner::new(0),
            levels,
            spawn_mode: SpawnMode::Immediate,
            events: Vec::new(),
            contacts: ContactQueue::default(),
            rng: Pcg32::seed_from_u64(seed),
            boss_pending: false,
            outbox: Vec::new(),
            inbox: None,
            generation: 0,
            next_id: SHIP_ID.0 + 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn level(&self) -> u32 {
        self.levels.level()
    }

    /// Events raised during the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn live_enemy_count(&self) -> usize {
        self.enemies
            .iter()
            .filter(|e| e.alive && e.kind != EnemyKind::Boss)
            .count()
    }

    pub fn boss_alive(&self) -> bool {
        self.enemies
            .iter()
            .any(|e| e.alive && e.kind == EnemyKind::Boss)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Route spawns through the host's visual factory. The returned port is
    /// handed to whatever thread builds visuals.
    pub fn enable_deferred_spawns(&mut self) -> SpawnPort {
        let (port, inbox) = spawn_channel();
        self.inbox = Some(inbox);
        self.spawn_mode = SpawnMode::Deferred;
        port
    }

    /// Spawn requests the host still has to build visuals for
    pub fn take_spawn_requests(&mut self) -> Vec<SpawnRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Hand a spec to the spawn path for the current mode
    pub(crate) fn request_spawn(&mut self, spec: SpawnSpec) {
        match self.spawn_mode {
            SpawnMode::Immediate => {
                self.materialize(spec, None);
            }
            SpawnMode::Deferred => {
                log::debug!("Requesting {} visual at {:?}", spec.kind.asset_name(), spec.pos);
                self.outbox.push(SpawnRequest {
                    generation: self.generation,
                    spec,
                });
            }
        }
    }

    /// Accept a finished spawn from the host
    pub fn receive_spawn(&mut self, outcome: SpawnOutcome) -> Result<Option<EntityId>, SimError> {
        let SpawnOutcome { request, handle } = outcome;
        if request.generation != self.generation {
            return Err(SimError::StaleSpawn {
                generation: request.generation,
                current: self.generation,
            });
        }
        let Some(handle) = handle else {
            return Err(SimError::AssetUnavailable {
                kind: request.spec.kind,
            });
        };
        Ok(self.materialize(request.spec, Some(handle)))
    }

    /// Turn a spec into a live entity; regular enemies over the cap are dropped
    pub fn materialize(&mut self, spec: SpawnSpec, visual: Option<VisualHandle>) -> Option<EntityId> {
        match spec.kind {
            SpawnKind::Enemy(kind) => {
                if kind != EnemyKind::Boss && self.live_enemy_count() >= self.tuning.max_enemies {
                    log::debug!("Enemy cap reached, dropping {:?} spawn", kind);
                    return None;
                }
                let id = self.next_entity_id();
                let stats = *self.tuning.enemy(kind);
                let mut enemy = Enemy::new(id, kind, spec.pos, &stats);
                enemy.visual = visual;
                self.enemies.push(enemy);
                if kind == EnemyKind::Boss {
                    log::info!("Boss spawned at level {}", self.levels.level());
                    self.events.push(GameEvent::BossSpawned { id });
                } else {
                    log::debug!("Spawned {:?} enemy {:?} at {:?}", kind, id, spec.pos);
                }
                Some(id)
            }
            SpawnKind::PowerUp(kind) => {
                let id = self.next_entity_id();
                let mut power_up = PowerUp::new(id, kind, spec.pos, self.tuning.power_up_drift);
                power_up.visual = visual;
                self.power_ups.push(power_up);
                log::debug!("Spawned {:?} power-up {:?}", kind, id);
                Some(id)
            }
        }
    }

    /// Remove every dead entity from the live collections
    pub fn prune(&mut self) -> usize {
        let before = self.enemies.len() + self.projectiles.len() + self.power_ups.len();
        self.enemies.retain(|e| e.alive);
        self.projectiles.retain(|p| p.alive);
        self.power_ups.retain(|p| p.alive);
        before - (self.enemies.len() + self.projectiles.len() + self.power_ups.len())
    }

    /// Ensure collections are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id);
        self.projectiles.sort_by_key(|p| p.id);
        self.power_ups.sort_by_key(|p| p.id);
    }

    /// Start a fresh session: clears collections, timers, buffs and pending
    /// spawns in one step. The RNG restarts from the seed.
    pub fn reset(&mut self) {
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.ship = Spaceship::default();
        self.enemies.clear();
        self.projectiles.clear();
        self.power_ups.clear();
        self.spawner.reset(0);
        self.levels.reset();
        self.events.clear();
        self.contacts.clear();
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.boss_pending = false;
        self.outbox.clear();
        self.generation = self.generation.wrapping_add(1);
        self.next_id = SHIP_ID.0 + 1;
        log::info!("Session reset (generation {})", self.generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut state = GameState::new(1);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_ne!(a, b);
        assert_ne!(a, SHIP_ID);
    }

    #[test]
    fn test_enemy_damage_clamps_at_zero() {
        let stats = EnemyStats::new(3, 0.05, 30, 20);
        let mut enemy = Enemy::new(EntityId(1), EnemyKind::Strong, Vec3::ZERO, &stats);
        assert!(!enemy.take_damage(2));
        assert_eq!(enemy.health, 1);
        assert!(enemy.take_damage(5));
        assert_eq!(enemy.health, 0);
        assert!(!enemy.alive);
        // Already dead: no second kill
        assert!(!enemy.take_damage(1));
    }

    #[test]
    fn test_ship_heal_and_damage_clamp() {
        let mut ship = Spaceship::default();
        ship.health = 85;
        assert_eq!(ship.heal(30), 15);
        assert_eq!(ship.health, SHIP_MAX_HEALTH);
        assert_eq!(ship.damage(250), SHIP_MAX_HEALTH);
        assert_eq!(ship.health, 0);
        assert!(ship.is_destroyed());
    }

    #[test]
    fn test_steer_clamps_angles() {
        let mut ship = Spaceship::default();
        for _ in 0..10_000 {
            ship.steer(Vec2::new(1.0, -1.0));
        }
        assert!((ship.yaw - MAX_AIM_ANGLE).abs() < 1e-6);
        assert!((ship.pitch + MAX_AIM_ANGLE).abs() < 1e-6);

        ship.steer(Vec2::new(f32::NAN, 0.0));
        assert!(ship.yaw.is_finite());
    }

    #[test]
    fn test_buff_reapply_replaces() {
        let mut buffs = Buffs::default();
        buffs.apply(BuffKind::FireRate, 2.0, 300).unwrap();
        buffs.apply(BuffKind::FireRate, 2.0, 480).unwrap();
        assert_eq!(buffs.fire_rate(), 2.0);
        assert_eq!(buffs.get(BuffKind::FireRate).unwrap().expires_at, 480);

        assert!(buffs.expire(479).is_empty());
        assert_eq!(buffs.expire(480), vec![BuffKind::FireRate]);
        assert_eq!(buffs.fire_rate(), 1.0);
    }

    #[test]
    fn test_buff_rejects_bad_value() {
        let mut buffs = Buffs::default();
        let err = buffs.apply(BuffKind::DamageBoost, f32::NAN, 10).unwrap_err();
        assert!(matches!(err, SimError::InvalidBuffStack { .. }));
        assert_eq!(buffs.damage(), 1.0);
    }

    #[test]
    fn test_materialize_respects_cap() {
        let mut state = GameState::new(7);
        state.tuning.max_enemies = 2;
        let spec = |z| SpawnSpec {
            kind: SpawnKind::Enemy(EnemyKind::Standard),
            pos: Vec3::new(0.0, 0.0, z),
        };
        assert!(state.materialize(spec(-30.0), None).is_some());
        assert!(state.materialize(spec(-31.0), None).is_some());
        assert!(state.materialize(spec(-32.0), None).is_none());
        assert_eq!(state.enemies.len(), 2);

        // Boss ignores the cap
        let boss = SpawnSpec {
            kind: SpawnKind::Enemy(EnemyKind::Boss),
            pos: Vec3::new(0.0, 0.0, BOSS_SPAWN_Z),
        };
        assert!(state.materialize(boss, None).is_some());
        assert!(state.boss_alive());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = GameState::new(3);
        state.score = 420;
        state.time_ticks = 999;
        state.ship.health = 10;
        let id = state.next_entity_id();
        state.projectiles.push(Projectile::new(
            id,
            ProjectileKind::Laser,
            Vec3::ZERO,
            Vec3::NEG_Z,
            0.5,
            1,
        ));
        state.ship.buffs.apply(BuffKind::Shield, 1.0, 2000).unwrap();

        state.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.ship.health, SHIP_MAX_HEALTH);
        assert!(state.projectiles.is_empty());
        assert!(!state.ship.buffs.shield_active());
        assert_eq!(state.level(), 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
