//! Game balance
//!
//! Every number a designer might want to tweak lives here. Defaults match the
//! shipped game; hosts may override them from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TuningError;
use crate::sim::{EnemyKind, ProjectileKind};

/// Difficulty presets (base enemy spawn interval)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyPreset {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl DifficultyPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPreset::Easy => "Easy",
            DifficultyPreset::Medium => "Medium",
            DifficultyPreset::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(DifficultyPreset::Easy),
            "medium" | "med" => Some(DifficultyPreset::Medium),
            "hard" => Some(DifficultyPreset::Hard),
            _ => None,
        }
    }

    /// Seconds between regular enemy spawns at level 1
    pub fn enemy_interval_secs(&self) -> f32 {
        match self {
            DifficultyPreset::Easy => 5.0,
            DifficultyPreset::Medium => 3.0,
            DifficultyPreset::Hard => 1.5,
        }
    }
}

/// Per-kind enemy stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub health: i32,
    /// Units per tick along +z
    pub speed: f32,
    pub points: u64,
    /// Ship damage when this enemy reaches the player
    pub breach_damage: i32,
}

impl EnemyStats {
    pub const fn new(health: i32, speed: f32, points: u64, breach_damage: i32) -> Self {
        Self {
            health,
            speed,
            points,
            breach_damage,
        }
    }
}

/// Data-driven balance for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Spawning ===
    /// Regular enemy interval at level 1
    pub enemy_interval_secs: f32,
    /// Enemy interval never drops below this
    pub min_enemy_interval_secs: f32,
    pub power_up_interval_secs: f32,
    /// Concurrent enemy cap (boss excluded)
    pub max_enemies: usize,

    // === Levels ===
    /// Points between level thresholds
    pub level_step: u64,
    /// Spawn rate multiplier gained per level
    pub spawn_rate_step: f32,
    /// Every Nth level is a boss level
    pub boss_every: u32,

    // === Enemies ===
    pub standard: EnemyStats,
    pub fast: EnemyStats,
    pub strong: EnemyStats,
    pub boss: EnemyStats,

    // === Weapons ===
    pub weapon: ProjectileKind,
    pub laser_damage: i32,
    pub missile_damage: i32,
    pub plasma_damage: i32,
    /// Units per tick
    pub projectile_speed: f32,
    pub max_projectiles: usize,
    /// Ticks between shots at 1x fire rate
    pub fire_interval_ticks: u32,
    pub multi_shot_count: u32,

    // === Power-ups ===
    /// +z drift per tick
    pub power_up_drift: f32,
    pub buff_secs: f32,
    pub fire_rate_boost: f32,
    pub damage_boost: f32,
    pub extra_points: u64,
    pub heal_amount: i32,

    // === Collision radii ===
    pub hit_radius: f32,
    pub pickup_radius: f32,
    pub shot_pickup_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            enemy_interval_secs: DifficultyPreset::default().enemy_interval_secs(),
            min_enemy_interval_secs: 0.4,
            power_up_interval_secs: 10.0,
            max_enemies: 10,

            level_step: 100,
            spawn_rate_step: 0.5,
            boss_every: 4,

            standard: EnemyStats::new(1, 0.1, 10, 10),
            fast: EnemyStats::new(1, 0.2, 20, 10),
            strong: EnemyStats::new(3, 0.05, 30, 20),
            boss: EnemyStats::new(40, 0.02, 500, 50),

            weapon: ProjectileKind::Laser,
            laser_damage: 1,
            missile_damage: 2,
            plasma_damage: 3,
            projectile_speed: 0.5,
            max_projectiles: 15,
            fire_interval_ticks: 15,
            multi_shot_count: 3,

            power_up_drift: 0.05,
            buff_secs: 5.0,
            fire_rate_boost: 2.0,
            damage_boost: 2.0,
            extra_points: 50,
            heal_amount: 30,

            hit_radius: 0.5,
            pickup_radius: 0.5,
            shot_pickup_radius: 0.3,
        }
    }
}

impl Tuning {
    /// Defaults with the preset's enemy interval
    pub fn with_difficulty(preset: DifficultyPreset) -> Self {
        let mut tuning = Self::default();
        tuning.apply_difficulty(preset);
        tuning
    }

    /// Switch the level-1 enemy interval to a preset, keeping everything else
    pub fn apply_difficulty(&mut self, preset: DifficultyPreset) {
        self.enemy_interval_secs = preset.enemy_interval_secs();
    }

    pub fn enemy(&self, kind: EnemyKind) -> &EnemyStats {
        match kind {
            EnemyKind::Standard => &self.standard,
            EnemyKind::Fast => &self.fast,
            EnemyKind::Strong => &self.strong,
            EnemyKind::Boss => &self.boss,
        }
    }

    pub fn base_damage(&self, kind: ProjectileKind) -> i32 {
        match kind {
            ProjectileKind::Laser => self.laser_damage,
            ProjectileKind::Missile => self.missile_damage,
            ProjectileKind::Plasma => self.plasma_damage,
        }
    }

    /// Parse and validate a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(value: f32, field: &'static str) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }

        positive(self.enemy_interval_secs, "enemy_interval_secs")?;
        positive(self.min_enemy_interval_secs, "min_enemy_interval_secs")?;
        positive(self.power_up_interval_secs, "power_up_interval_secs")?;
        positive(self.projectile_speed, "projectile_speed")?;
        positive(self.buff_secs, "buff_secs")?;
        positive(self.fire_rate_boost, "fire_rate_boost")?;
        positive(self.damage_boost, "damage_boost")?;
        positive(self.hit_radius, "hit_radius")?;
        positive(self.pickup_radius, "pickup_radius")?;
        positive(self.shot_pickup_radius, "shot_pickup_radius")?;
        if !self.spawn_rate_step.is_finite() || self.spawn_rate_step < 0.0 {
            return Err(TuningError::Invalid {
                field: "spawn_rate_step",
                reason: "must be zero or positive",
            });
        }
        if !self.power_up_drift.is_finite() || self.power_up_drift < 0.0 {
            return Err(TuningError::Invalid {
                field: "power_up_drift",
                reason: "must be zero or positive",
            });
        }

        if self.level_step == 0 {
            return Err(TuningError::Invalid {
                field: "level_step",
                reason: "must be at least 1",
            });
        }
        if self.boss_every == 0 {
            return Err(TuningError::Invalid {
                field: "boss_every",
                reason: "must be at least 1",
            });
        }
        if self.multi_shot_count == 0 {
            return Err(TuningError::Invalid {
                field: "multi_shot_count",
                reason: "must be at least 1",
            });
        }

        for (field, stats) in [
            ("standard", &self.standard),
            ("fast", &self.fast),
            ("strong", &self.strong),
            ("boss", &self.boss),
        ] {
            if stats.health <= 0 || !stats.speed.is_finite() || stats.speed < 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "enemy needs positive health and a finite, non-negative speed",
                });
            }
        }
        Ok(())
    }
}
