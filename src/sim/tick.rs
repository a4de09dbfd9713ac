//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::collision::check_collisions;
use super::effects;
use super::events::{Collector, Contact, GameEvent};
use super::motion;
use super::spawn::SpawnContext;
use super::state::{GamePhase, GameState};
use crate::error::SimError;

/// Input commands for a single tick (sampled once per tick)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Joystick deflection, each axis in [-1, 1]
    pub joystick: Vec2,
    /// Fire button held
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by one fixed timestep; returns this tick's events
pub fn tick<'a>(state: &'a mut GameState, input: &TickInput) -> &'a [GameEvent] {
    state.events.clear();

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return &state.events;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return &state.events,
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;
    for enemy in &mut state.enemies {
        enemy.engaged = false;
    }

    receive_spawns(state);
    effects::expire_buffs(state);

    // Player
    state.ship.steer(input.joystick);
    state.ship.fire_cooldown = state.ship.fire_cooldown.saturating_sub(1);
    if input.fire {
        effects::fire(state);
    }

    run_spawner(state);

    let report = motion::advance(state);
    for breach in report.breaches {
        state.contacts.push(Contact::EnemyBreach(breach));
    }

    detect_collisions(state);
    effects::dispatch(state);

    state.prune();
    state.normalize_order();

    if state.ship.is_destroyed() {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over at tick {} (score {}, level {})",
            state.time_ticks,
            state.score,
            state.level()
        );
        state.events.push(GameEvent::GameOver { score: state.score });
    }

    &state.events
}

/// Materialize visuals the host finished since the last tick
fn receive_spawns(state: &mut GameState) {
    let Some(inbox) = state.inbox.as_ref() else {
        return;
    };
    for outcome in inbox.drain() {
        match state.receive_spawn(outcome) {
            Ok(_) => {}
            Err(err @ SimError::StaleSpawn { .. }) => log::debug!("{}", err),
            Err(err) => log::warn!("{}", err),
        }
    }
}

fn run_spawner(state: &mut GameState) {
    let now = state.time_ticks;
    effects::spawn_pending_boss(state);

    let ctx = SpawnContext {
        level: state.level(),
        spawn_rate: state.levels.spawn_rate_multiplier(),
        live_enemies: state.live_enemy_count(),
        boss_alive: state.boss_alive(),
    };
    if let Some(spec) = state
        .spawner
        .try_spawn_enemy(now, &ctx, &state.tuning, &mut state.rng)
    {
        state.request_spawn(spec);
    }
    if let Some(spec) = state
        .spawner
        .try_spawn_power_up(now, &state.tuning, &mut state.rng)
    {
        state.request_spawn(spec);
    }
}

/// Queue contacts for this tick: shots on enemies first, then pickups by the
/// ship, then pickups shot out of the air
fn detect_collisions(state: &mut GameState) {
    let GameState {
        enemies,
        projectiles,
        power_ups,
        ship,
        contacts,
        tuning,
        ..
    } = state;

    check_collisions(
        projectiles.as_mut_slice(),
        enemies.as_mut_slice(),
        tuning.hit_radius,
        |shot, enemy| {
            contacts.push(Contact::ProjectileHitEnemy {
                projectile: shot.id,
                damage: shot.damage,
                enemy: enemy.id,
            });
        },
    );
    check_collisions(
        power_ups.as_mut_slice(),
        std::slice::from_mut(ship),
        tuning.pickup_radius,
        |power_up, _| {
            contacts.push(Contact::PowerUpCollected {
                power_up: power_up.id,
                kind: power_up.kind,
                pos: power_up.pos,
                collector: Collector::Ship,
            });
        },
    );
    check_collisions(
        power_ups.as_mut_slice(),
        projectiles.as_mut_slice(),
        tuning.shot_pickup_radius,
        |power_up, shot| {
            contacts.push(Contact::PowerUpCollected {
                power_up: power_up.id,
                kind: power_up.kind,
                pos: power_up.pos,
                collector: Collector::Projectile(shot.id),
            });
        },
    );
}
