//! End-to-end gameplay scenarios driven through the public API

use glam::{Vec2, Vec3};

use star_volley::SimError;
use star_volley::consts::*;
use star_volley::sim::effects;
use star_volley::sim::{
    BuffKind, Enemy, EnemyKind, GameEvent, GamePhase, GameState, PowerUp, PowerUpKind, Projectile,
    ProjectileKind, SpawnKind, SpawnOutcome, TickInput, VisualHandle, tick,
};

fn idle() -> TickInput {
    TickInput::default()
}

fn add_enemy(state: &mut GameState, kind: EnemyKind, pos: Vec3) {
    let id = state.next_entity_id();
    let stats = *state.tuning.enemy(kind);
    state.enemies.push(Enemy::new(id, kind, pos, &stats));
}

#[test]
fn projectile_destroys_standard_enemy() {
    let mut state = GameState::new(42);
    add_enemy(&mut state, EnemyKind::Standard, Vec3::new(0.0, 0.0, -30.0));
    let id = state.next_entity_id();
    state.projectiles.push(Projectile::new(
        id,
        ProjectileKind::Laser,
        Vec3::new(0.0, 0.0, -30.4),
        Vec3::Z,
        0.5,
        1,
    ));

    let events = tick(&mut state, &idle()).to_vec();
    assert_eq!(state.score, 10);
    assert!(state.enemies.is_empty());
    assert!(state.projectiles.is_empty());
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::EnemyDestroyed {
            kind: EnemyKind::Standard,
            points: 10,
            ..
        }
    )));
}

#[test]
fn aimed_shot_reaches_enemy_ahead() {
    let mut state = GameState::new(42);
    add_enemy(&mut state, EnemyKind::Standard, Vec3::new(0.0, 0.0, -10.0));

    let fire = TickInput {
        fire: true,
        ..Default::default()
    };
    tick(&mut state, &fire);
    for _ in 0..30 {
        tick(&mut state, &idle());
    }
    assert_eq!(state.score, 10);
    assert_eq!(state.ship.health, SHIP_MAX_HEALTH);
}

#[test]
fn healing_pickup_clamps_to_max() {
    let mut state = GameState::new(1);
    state.ship.health = 85;
    let id = state.next_entity_id();
    state.power_ups.push(PowerUp::new(
        id,
        PowerUpKind::Healing,
        Vec3::new(0.0, 0.0, -0.2),
        0.05,
    ));

    let events = tick(&mut state, &idle()).to_vec();
    assert_eq!(state.ship.health, 100);
    assert!(state.power_ups.is_empty());
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::PowerUpCollected {
            kind: PowerUpKind::Healing,
            ..
        }
    )));
}

#[test]
fn second_shield_extends_expiry() {
    let mut state = GameState::new(1);
    effects::on_power_up_collected(&mut state, PowerUpKind::Shield, Vec3::ZERO);
    state.time_ticks = 180;
    effects::on_power_up_collected(&mut state, PowerUpKind::Shield, Vec3::ZERO);

    state.time_ticks = 478;
    tick(&mut state, &idle());
    assert_eq!(state.time_ticks, 479);
    assert!(state.snapshot().shield_active());

    let events = tick(&mut state, &idle()).to_vec();
    assert_eq!(state.time_ticks, 480);
    assert!(!state.ship.buffs.shield_active());
    assert!(events.contains(&GameEvent::BuffExpired {
        kind: BuffKind::Shield
    }));
}

#[test]
fn spawn_at_cap_is_dropped() {
    let mut state = GameState::new(5);
    for i in 0..10 {
        add_enemy(
            &mut state,
            EnemyKind::Standard,
            Vec3::new(i as f32 - 5.0, 0.0, -40.0),
        );
    }
    state.time_ticks = 179;

    tick(&mut state, &idle());
    assert_eq!(state.time_ticks, 180);
    assert_eq!(state.enemies.len(), 10);

    // The timer restarted, so nothing sneaks in on the next tick either
    state.enemies.pop();
    tick(&mut state, &idle());
    assert_eq!(state.enemies.len(), 9);
}

#[test]
fn stray_projectile_is_pruned() {
    let mut state = GameState::new(1);
    let id = state.next_entity_id();
    state.projectiles.push(Projectile::new(
        id,
        ProjectileKind::Laser,
        Vec3::new(0.0, 0.0, -49.6),
        Vec3::NEG_Z,
        0.5,
        1,
    ));

    tick(&mut state, &idle());
    assert!(state.projectiles.is_empty());
}

#[test]
fn enemy_breach_damages_ship_once() {
    let mut state = GameState::new(1);
    add_enemy(&mut state, EnemyKind::Standard, Vec3::new(0.0, 0.0, -0.05));

    let events = tick(&mut state, &idle()).to_vec();
    assert_eq!(state.ship.health, 90);
    assert!(state.enemies.is_empty());
    assert!(events.contains(&GameEvent::SpaceshipDamaged {
        amount: 10,
        health: 90
    }));

    tick(&mut state, &idle());
    assert_eq!(state.ship.health, 90);
}

#[test]
fn breach_kill_is_not_undone_by_shot_healing() {
    let mut state = GameState::new(1);
    state.ship.health = 10;
    add_enemy(&mut state, EnemyKind::Strong, Vec3::new(0.0, 0.0, -0.01));
    let shot = state.next_entity_id();
    state.projectiles.push(Projectile::new(
        shot,
        ProjectileKind::Laser,
        Vec3::new(3.0, 0.0, -10.0),
        Vec3::Z,
        0.5,
        1,
    ));
    let heal = state.next_entity_id();
    state.power_ups.push(PowerUp::new(
        heal,
        PowerUpKind::Healing,
        Vec3::new(3.0, 0.0, -9.55),
        0.05,
    ));

    let events = tick(&mut state, &idle()).to_vec();
    assert_eq!(state.ship.health, 0);
    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(state.power_ups.is_empty());
    assert!(events.contains(&GameEvent::GameOver { score: 0 }));
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::PowerUpCollected { .. })));
}

#[test]
fn deferred_spawn_waits_for_visual() {
    let mut state = GameState::new(9);
    let port = state.enable_deferred_spawns();
    state.time_ticks = 179;

    tick(&mut state, &idle());
    assert!(state.enemies.is_empty());
    let requests = state.take_spawn_requests();
    assert_eq!(requests.len(), 1);
    assert!(matches!(requests[0].spec.kind, SpawnKind::Enemy(_)));

    assert!(port.complete(requests[0], Some(VisualHandle(7))));
    tick(&mut state, &idle());
    assert_eq!(state.enemies.len(), 1);
    assert_eq!(state.enemies[0].visual, Some(VisualHandle(7)));
}

#[test]
fn deferred_spawn_asset_failure_is_skipped() {
    let mut state = GameState::new(9);
    let port = state.enable_deferred_spawns();
    state.time_ticks = 179;
    tick(&mut state, &idle());

    let request = state.take_spawn_requests()[0];
    assert!(port.complete(request, None));
    tick(&mut state, &idle());
    assert!(state.enemies.is_empty());
    assert_eq!(state.phase, GamePhase::Playing);

    let err = state
        .receive_spawn(SpawnOutcome {
            request,
            handle: None,
        })
        .unwrap_err();
    assert_eq!(
        err,
        SimError::AssetUnavailable {
            kind: request.spec.kind
        }
    );
}

#[test]
fn spawn_from_before_reset_is_stale() {
    let mut state = GameState::new(9);
    let port = state.enable_deferred_spawns();
    state.time_ticks = 179;
    tick(&mut state, &idle());
    let request = state.take_spawn_requests()[0];

    state.reset();
    assert!(port.complete(request, Some(VisualHandle(1))));
    tick(&mut state, &idle());
    assert!(state.enemies.is_empty());

    let err = state
        .receive_spawn(SpawnOutcome {
            request,
            handle: Some(VisualHandle(1)),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        SimError::StaleSpawn {
            generation: 0,
            current: 1
        }
    ));
}

#[test]
fn boss_arrives_on_level_four() {
    let mut state = GameState::new(3);
    effects::award_points(&mut state, 300);
    assert_eq!(state.level(), 4);

    let events = tick(&mut state, &idle()).to_vec();
    assert!(state.boss_alive());
    assert!(events.iter().any(|e| matches!(e, GameEvent::BossSpawned { .. })));
    let boss = &state.enemies[0];
    assert_eq!(boss.kind, EnemyKind::Boss);
    assert_eq!(boss.health, 40);

    // Regular stream is suspended while the boss lives
    state.time_ticks = 600;
    tick(&mut state, &idle());
    assert_eq!(state.live_enemy_count(), 0);
    assert_eq!(state.enemies.len(), 1);
}

#[test]
fn extra_points_can_level_up() {
    let mut state = GameState::new(1);
    state.score = 60;
    let id = state.next_entity_id();
    state.power_ups.push(PowerUp::new(
        id,
        PowerUpKind::ExtraPoints,
        Vec3::new(0.0, 0.0, -0.2),
        0.05,
    ));

    let events = tick(&mut state, &idle()).to_vec();
    assert_eq!(state.score, 110);
    assert_eq!(state.level(), 2);
    assert!(events.contains(&GameEvent::LevelAdvanced { level: 2 }));
}

#[test]
fn steering_turns_ship_and_aim() {
    let mut state = GameState::new(1);
    let input = TickInput {
        joystick: Vec2::new(1.0, 0.0),
        ..Default::default()
    };
    for _ in 0..30 {
        tick(&mut state, &input);
    }
    assert!(state.ship.yaw > 0.0);
    assert!(state.ship.aim().x > 0.0);
}
