//! Combat and power-up effects
//!
//! Everything that changes score, health or buffs goes through here. The tick
//! calls [`dispatch`] once, after detection, so contacts resolve in the order
//! they were queued.

use glam::Vec3;

use super::events::{Contact, GameEvent};
use super::motion::Breach;
use super::spawn::Spawner;
use super::state::{BuffKind, EntityId, GameState, PowerUpKind, Projectile};
use crate::aim_direction;
use crate::consts::*;

/// Resolve every queued contact, oldest first
pub fn dispatch(state: &mut GameState) {
    for contact in state.contacts.drain() {
        match contact {
            Contact::EnemyBreach(breach) => on_enemy_breach(state, &breach),
            Contact::ProjectileHitEnemy { damage, enemy, .. } => {
                on_projectile_hits_enemy(state, damage, enemy);
            }
            Contact::PowerUpCollected { kind, pos, .. } => {
                // A wrecked ship gains nothing, whoever caught the pickup
                if state.ship.is_destroyed() {
                    continue;
                }
                on_power_up_collected(state, kind, pos);
            }
        }
    }
}

/// Apply a projectile's damage; awards points when the enemy dies
pub fn on_projectile_hits_enemy(state: &mut GameState, damage: i32, enemy_id: EntityId) {
    let Some(enemy) = state.enemies.iter_mut().find(|e| e.id == enemy_id) else {
        return;
    };
    if !enemy.alive {
        return;
    }

    if enemy.take_damage(damage) {
        let (kind, pos, points) = (enemy.kind, enemy.pos, enemy.points);
        state.events.push(GameEvent::EnemyDestroyed {
            id: enemy_id,
            kind,
            pos,
            points,
        });
        award_points(state, points);
    } else {
        state.events.push(GameEvent::EnemyHit {
            id: enemy_id,
            kind: enemy.kind,
            remaining_health: enemy.health,
        });
    }
}

/// An enemy reached the ship: the shield soaks it, otherwise the hull does
pub fn on_enemy_breach(state: &mut GameState, breach: &Breach) {
    if state.ship.buffs.shield_active() {
        state.events.push(GameEvent::ShieldAbsorbed {
            enemy: breach.enemy,
        });
        return;
    }
    let lost = state.ship.damage(breach.damage);
    if lost > 0 {
        state.events.push(GameEvent::SpaceshipDamaged {
            amount: lost,
            health: state.ship.health,
        });
    }
}

/// Apply a collected power-up
pub fn on_power_up_collected(state: &mut GameState, kind: PowerUpKind, pos: Vec3) {
    let expires_at = state.time_ticks + secs_to_ticks(state.tuning.buff_secs);
    let applied = match kind {
        PowerUpKind::Shield => state.ship.buffs.apply(BuffKind::Shield, 1.0, expires_at),
        PowerUpKind::DoubleFireRate => {
            state
                .ship
                .buffs
                .apply(BuffKind::FireRate, state.tuning.fire_rate_boost, expires_at)
        }
        PowerUpKind::MultiProjectile => {
            state.ship.buffs.apply(BuffKind::MultiShot, 1.0, expires_at)
        }
        PowerUpKind::DamageBoost => {
            state
                .ship
                .buffs
                .apply(BuffKind::DamageBoost, state.tuning.damage_boost, expires_at)
        }
        PowerUpKind::ExtraPoints => {
            let bonus = state.tuning.extra_points;
            award_points(state, bonus);
            Ok(())
        }
        PowerUpKind::Healing => {
            state.ship.heal(state.tuning.heal_amount);
            Ok(())
        }
    };

    if let Err(err) = applied {
        log::warn!("{}", err);
        return;
    }
    state.events.push(GameEvent::PowerUpCollected { kind, pos });
}

/// Add to the score and let the level controller react
pub fn award_points(state: &mut GameState, points: u64) {
    state.score = state.score.saturating_add(points);
    for level in state.levels.on_score(state.score) {
        log::info!("Level {} reached at score {}", level, state.score);
        state.events.push(GameEvent::LevelAdvanced { level });
        if state.levels.is_boss_level(level) {
            state.boss_pending = true;
        }
    }
}

/// Revert buffs whose expiry tick has arrived
pub fn expire_buffs(state: &mut GameState) {
    for kind in state.ship.buffs.expire(state.time_ticks) {
        log::debug!("{:?} expired at tick {}", kind, state.time_ticks);
        state.events.push(GameEvent::BuffExpired { kind });
    }
}

/// Fire if the cooldown allows; returns the number of projectiles launched
pub fn fire(state: &mut GameState) -> usize {
    if state.ship.fire_cooldown > 0 || state.ship.is_destroyed() {
        return 0;
    }
    let live = state.projectiles.iter().filter(|p| p.alive).count();
    let room = state.tuning.max_projectiles.saturating_sub(live);
    if room == 0 {
        return 0;
    }

    let wanted = if state.ship.buffs.multi_shot() {
        state.tuning.multi_shot_count as usize
    } else {
        1
    };
    let count = wanted.min(room);

    let kind = state.tuning.weapon;
    // Locked in now; a boost picked up later does not change shots in flight
    let damage = ((state.tuning.base_damage(kind) as f32 * state.ship.buffs.damage()).round()
        as i32)
        .max(1);
    let origin = state.ship.pos + state.ship.aim() * MUZZLE_OFFSET;
    // Centre the fan on the shots actually fired
    let center = (count as f32 - 1.0) / 2.0;

    for i in 0..count {
        let yaw = state.ship.yaw + (i as f32 - center) * MULTI_SHOT_SPREAD;
        let dir = aim_direction(yaw, state.ship.pitch);
        let id = state.next_entity_id();
        state.projectiles.push(Projectile::new(
            id,
            kind,
            origin,
            dir,
            state.tuning.projectile_speed,
            damage,
        ));
        state.events.push(GameEvent::ProjectileFired {
            id,
            origin,
            dir,
            kind,
        });
    }

    let fire_rate = state.ship.buffs.fire_rate();
    state.ship.fire_cooldown = (state.tuning.fire_interval_ticks as f32 / fire_rate).ceil() as u32;
    count
}

/// Issue the boss owed by a freshly entered boss level
pub fn spawn_pending_boss(state: &mut GameState) {
    if !state.boss_pending {
        return;
    }
    // Owed until the current boss is gone
    if state.boss_alive() {
        return;
    }
    state.boss_pending = false;
    state.request_spawn(Spawner::boss_spec());
}
