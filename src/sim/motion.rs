//! Per-tick movement
//!
//! Speeds are per-tick deltas. Leaving the playfield only flags an entity
//! dead; pruning happens at the end of the tick.

use serde::{Deserialize, Serialize};

use super::state::{Body, Enemy, EntityId, EnemyKind, GameState, PowerUp, Projectile};
use crate::consts::*;

/// Something the motion system can move
pub trait Moving: Body {
    /// Advance one tick
    fn step(&mut self);
    fn out_of_bounds(&self) -> bool;
    fn kill(&mut self);
}

impl Moving for Enemy {
    fn step(&mut self) {
        self.pos.z += self.speed;
    }
    fn out_of_bounds(&self) -> bool {
        self.pos.z >= ENEMY_BREACH_Z
    }
    fn kill(&mut self) {
        self.alive = false;
    }
}

impl Moving for Projectile {
    fn step(&mut self) {
        self.pos += self.dir * self.speed;
    }
    fn out_of_bounds(&self) -> bool {
        self.pos.abs().max_element() > PROJECTILE_BOUNDS
    }
    fn kill(&mut self) {
        self.alive = false;
    }
}

impl Moving for PowerUp {
    fn step(&mut self) {
        self.pos.z += self.speed;
    }
    fn out_of_bounds(&self) -> bool {
        self.pos.z >= POWER_UP_PASS_Z
    }
    fn kill(&mut self) {
        self.alive = false;
    }
}

/// Move every live body; bodies that leave bounds (or stop being finite) are
/// flagged dead and reported to `on_exit`. Returns how many were flagged.
pub fn advance_bodies<T: Moving>(bodies: &mut [T], mut on_exit: impl FnMut(&T)) -> usize {
    let mut exited = 0;
    for body in bodies.iter_mut().filter(|b| b.is_alive()) {
        body.step();
        if !body.pos().is_finite() || body.out_of_bounds() {
            body.kill();
            on_exit(body);
            exited += 1;
        }
    }
    exited
}

/// An enemy that reached the ship this tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breach {
    pub enemy: EntityId,
    pub kind: EnemyKind,
    pub damage: i32,
}

#[derive(Debug, Default)]
pub struct MotionReport {
    pub breaches: Vec<Breach>,
    /// Projectiles and power-ups that left the playfield
    pub expired: usize,
}

/// Advance every live entity one tick
pub fn advance(state: &mut GameState) -> MotionReport {
    let mut report = MotionReport::default();

    advance_bodies(&mut state.enemies, |enemy| {
        // A non-finite enemy is culled without hurting the ship
        if enemy.pos.is_finite() {
            report.breaches.push(Breach {
                enemy: enemy.id,
                kind: enemy.kind,
                damage: enemy.breach_damage,
            });
        }
    });
    report.expired += advance_bodies(&mut state.projectiles, |_| {});
    report.expired += advance_bodies(&mut state.power_ups, |_| {});

    report
}
