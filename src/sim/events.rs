//! Gameplay events and the per-tick contact queue
//!
//! Detection code never mutates score or health directly. It appends
//! [`Contact`]s here and the resolver applies them in one pass at the end of
//! the tick, in queue order.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::motion::Breach;
use super::state::{BuffKind, EnemyKind, EntityId, PowerUpKind, ProjectileKind};

/// Things the audio/VFX/HUD layers react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemyDestroyed {
        id: EntityId,
        kind: EnemyKind,
        pos: Vec3,
        points: u64,
    },
    /// Hit but still standing
    EnemyHit {
        id: EntityId,
        kind: EnemyKind,
        remaining_health: i32,
    },
    PowerUpCollected {
        kind: PowerUpKind,
        pos: Vec3,
    },
    ProjectileFired {
        id: EntityId,
        origin: Vec3,
        dir: Vec3,
        kind: ProjectileKind,
    },
    SpaceshipDamaged {
        amount: i32,
        health: i32,
    },
    /// An enemy reached the ship while the shield was up
    ShieldAbsorbed {
        enemy: EntityId,
    },
    BuffExpired {
        kind: BuffKind,
    },
    LevelAdvanced {
        level: u32,
    },
    BossSpawned {
        id: EntityId,
    },
    GameOver {
        score: u64,
    },
}

/// Who picked up a power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collector {
    Ship,
    Projectile(EntityId),
}

/// A detected interaction waiting for the resolver
#[derive(Debug, Clone, PartialEq)]
pub enum Contact {
    EnemyBreach(Breach),
    ProjectileHitEnemy {
        projectile: EntityId,
        /// Damage fixed when the projectile was fired
        damage: i32,
        enemy: EntityId,
    },
    PowerUpCollected {
        power_up: EntityId,
        kind: PowerUpKind,
        pos: Vec3,
        collector: Collector,
    },
}

#[derive(Debug, Default)]
pub struct ContactQueue {
    contacts: Vec<Contact>,
}

impl ContactQueue {
    pub fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Take every queued contact, oldest first
    pub fn drain(&mut self) -> Vec<Contact> {
        std::mem::take(&mut self.contacts)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }
}
