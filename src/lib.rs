//! Star Volley - arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic fixed-tick simulation (spawning, motion, collisions, effects)
//! - `tuning`: Data-driven game balance
//! - `error`: Failures the core reports to its host
//!
//! Rendering, audio, hand tracking and asset loading live outside this crate.
//! They read [`sim::Snapshot`]s and [`sim::GameEvent`]s and feed back
//! [`sim::TickInput`] plus finished spawn visuals.

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::{SimError, TuningError};
pub use tuning::{DifficultyPreset, EnemyStats, Tuning};

use glam::{Quat, Vec3};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Projectiles die once any axis leaves [-BOUNDS, BOUNDS]
    pub const PROJECTILE_BOUNDS: f32 = 50.0;
    /// Enemies at or past this z have reached the ship
    pub const ENEMY_BREACH_Z: f32 = 0.0;
    /// Power-ups at or past this z drifted behind the player
    pub const POWER_UP_PASS_Z: f32 = 1.0;

    /// Spawn volume
    pub const SPAWN_HALF_WIDTH: f32 = 5.0;
    pub const SPAWN_HALF_HEIGHT: f32 = 3.0;
    pub const SPAWN_Z_NEAR: f32 = -20.0;
    pub const SPAWN_Z_FAR: f32 = -50.0;
    /// Boss always enters dead ahead
    pub const BOSS_SPAWN_Z: f32 = -20.0;

    /// Ship defaults
    pub const SHIP_START_Z: f32 = -0.1;
    pub const SHIP_MAX_HEALTH: i32 = 100;
    /// Max yaw/pitch (60 degrees)
    pub const MAX_AIM_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
    /// Joystick rotation per tick at full deflection
    pub const STEER_RATE: f32 = 0.05;
    /// Fraction of the requested rotation applied each tick
    pub const STEER_SMOOTHING: f32 = 0.1;
    /// Projectiles leave this far in front of the ship
    pub const MUZZLE_OFFSET: f32 = 0.5;
    /// Yaw offset between multi-shot projectiles (10 degrees)
    pub const MULTI_SHOT_SPREAD: f32 = 10.0 * std::f32::consts::PI / 180.0;

    /// Convert seconds to whole simulation ticks
    #[inline]
    pub fn secs_to_ticks(secs: f32) -> u64 {
        (secs * TICK_HZ as f32).round().max(0.0) as u64
    }
}

/// Ship orientation for a yaw (positive = right) and pitch (positive = up)
#[inline]
pub fn aim_rotation(yaw: f32, pitch: f32) -> Quat {
    Quat::from_rotation_y(-yaw) * Quat::from_rotation_x(pitch)
}

/// Unit forward vector for a yaw/pitch pair; zero angles look down -z
#[inline]
pub fn aim_direction(yaw: f32, pitch: f32) -> Vec3 {
    aim_rotation(yaw, pitch) * Vec3::NEG_Z
}

/// Yaw/pitch that points along `dir` (inverse of [`aim_direction`])
#[inline]
pub fn angles_toward(dir: Vec3) -> (f32, f32) {
    let dir = dir.normalize_or_zero();
    (dir.x.atan2(-dir.z), dir.y.clamp(-1.0, 1.0).asin())
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
