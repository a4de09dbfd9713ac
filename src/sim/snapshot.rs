//! Read-only view of a tick for the render and HUD layers

use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::state::{
    BuffKind, EnemyKind, EntityId, GamePhase, GameState, PowerUpKind, ProjectileKind, SHIP_ID,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewKind {
    Ship,
    Enemy(EnemyKind),
    Projectile(ProjectileKind),
    PowerUp(PowerUpKind),
}

impl ViewKind {
    /// Stable code the renderer switches meshes on
    pub fn code(&self) -> u32 {
        match self {
            ViewKind::Ship => 0,
            ViewKind::Enemy(EnemyKind::Standard) => 10,
            ViewKind::Enemy(EnemyKind::Fast) => 11,
            ViewKind::Enemy(EnemyKind::Strong) => 12,
            ViewKind::Enemy(EnemyKind::Boss) => 13,
            ViewKind::Projectile(ProjectileKind::Laser) => 20,
            ViewKind::Projectile(ProjectileKind::Missile) => 21,
            ViewKind::Projectile(ProjectileKind::Plasma) => 22,
            ViewKind::PowerUp(PowerUpKind::Shield) => 30,
            ViewKind::PowerUp(PowerUpKind::DoubleFireRate) => 31,
            ViewKind::PowerUp(PowerUpKind::ExtraPoints) => 32,
            ViewKind::PowerUp(PowerUpKind::Healing) => 33,
            ViewKind::PowerUp(PowerUpKind::MultiProjectile) => 34,
            ViewKind::PowerUp(PowerUpKind::DamageBoost) => 35,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: ViewKind,
    pub pos: Vec3,
    pub rotation: Quat,
}

/// Buff state for the HUD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffView {
    pub kind: BuffKind,
    pub value: f32,
    pub remaining_ticks: u64,
}

/// Per-instance data laid out for a GPU instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct EntityInstance {
    pub position: [f32; 3],
    pub kind: u32,
    pub rotation: [f32; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub level: u32,
    pub ship_health: i32,
    pub buffs: Vec<BuffView>,
    /// Ship first, then enemies, projectiles, power-ups (each by id)
    pub entities: Vec<EntityView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let now = state.time_ticks;
        let buffs = BuffKind::ALL
            .iter()
            .filter_map(|&kind| {
                state.ship.buffs.get(kind).map(|b| BuffView {
                    kind,
                    value: b.value,
                    remaining_ticks: b.expires_at.saturating_sub(now),
                })
            })
            .collect();

        let mut entities = Vec::with_capacity(
            1 + state.enemies.len() + state.projectiles.len() + state.power_ups.len(),
        );
        entities.push(EntityView {
            id: SHIP_ID,
            kind: ViewKind::Ship,
            pos: state.ship.pos,
            rotation: state.ship.rotation(),
        });
        entities.extend(state.enemies.iter().filter(|e| e.alive).map(|e| EntityView {
            id: e.id,
            kind: ViewKind::Enemy(e.kind),
            pos: e.pos,
            rotation: Quat::IDENTITY,
        }));
        entities.extend(state.projectiles.iter().filter(|p| p.alive).map(|p| EntityView {
            id: p.id,
            kind: ViewKind::Projectile(p.kind),
            pos: p.pos,
            rotation: if p.dir.is_normalized() {
                Quat::from_rotation_arc(Vec3::NEG_Z, p.dir)
            } else {
                Quat::IDENTITY
            },
        }));
        entities.extend(state.power_ups.iter().filter(|p| p.alive).map(|p| EntityView {
            id: p.id,
            kind: ViewKind::PowerUp(p.kind),
            pos: p.pos,
            rotation: Quat::IDENTITY,
        }));

        Self {
            tick: now,
            phase: state.phase,
            score: state.score,
            level: state.level(),
            ship_health: state.ship.health,
            buffs,
            entities,
        }
    }

    pub fn shield_active(&self) -> bool {
        self.buffs.iter().any(|b| b.kind == BuffKind::Shield)
    }

    /// Pack entities for upload; pair with `bytemuck::cast_slice`
    pub fn instances(&self) -> Vec<EntityInstance> {
        self.entities
            .iter()
            .map(|e| EntityInstance {
                position: e.pos.to_array(),
                kind: e.kind.code(),
                rotation: e.rotation.to_array(),
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
