//! Star Volley headless driver
//!
//! Runs the simulation without a renderer: an autopilot flies the ship, a
//! loader thread stands in for the asset pipeline, and events go to the log.
//!
//! Usage: `star-volley [tuning.json] [seconds] [--seed=N] [--difficulty=easy|medium|hard] [--deferred]`

use std::sync::mpsc;
use std::thread;

use glam::Vec2;

use star_volley::consts::*;
use star_volley::sim::{
    GamePhase, GameEvent, GameState, SpawnKind, SpawnPort, SpawnRequest, TickInput,
    VisualFactory, VisualHandle, tick,
};
use star_volley::{DifficultyPreset, Tuning, angles_toward};

struct Options {
    tuning_path: Option<String>,
    seconds: f32,
    seed: u64,
    difficulty: Option<DifficultyPreset>,
    deferred: bool,
}

fn parse_args() -> Options {
    let mut options = Options {
        tuning_path: None,
        seconds: 60.0,
        seed: 12345,
        difficulty: None,
        deferred: false,
    };
    for arg in std::env::args().skip(1) {
        if arg == "--deferred" {
            options.deferred = true;
        } else if let Some(seed) = arg.strip_prefix("--seed=") {
            match seed.parse() {
                Ok(seed) => options.seed = seed,
                Err(_) => log::warn!("Ignoring bad seed `{}`", seed),
            }
        } else if let Some(name) = arg.strip_prefix("--difficulty=") {
            match DifficultyPreset::from_str(name) {
                Some(preset) => options.difficulty = Some(preset),
                None => log::warn!("Unknown difficulty `{}`", name),
            }
        } else if let Ok(seconds) = arg.parse::<f32>() {
            options.seconds = seconds.max(0.0);
        } else {
            options.tuning_path = Some(arg);
        }
    }
    options
}

/// Stand-in asset pipeline; every 7th build fails
struct FakeLoader {
    built: u64,
}

impl VisualFactory for FakeLoader {
    fn spawn_visual(&mut self, kind: SpawnKind, _pos: glam::Vec3) -> Option<VisualHandle> {
        self.built += 1;
        if self.built.is_multiple_of(7) {
            log::debug!("Loader failed to build {}", kind.asset_name());
            return None;
        }
        Some(VisualHandle(self.built))
    }
}

/// Run the loader on its own thread; requests go in, outcomes come back
/// through the port
fn start_loader(port: SpawnPort) -> (mpsc::Sender<SpawnRequest>, thread::JoinHandle<()>) {
    let (tx, rx) = mpsc::channel::<SpawnRequest>();
    let worker = thread::spawn(move || {
        let mut loader = FakeLoader { built: 0 };
        for request in rx {
            if !port.fulfil(request, &mut loader) {
                break;
            }
        }
    });
    (tx, worker)
}

/// Track the nearest enemy and fire once lined up
fn autopilot(state: &GameState) -> TickInput {
    let ship = state.ship.pos;
    let target = state.enemies.iter().filter(|e| e.alive).min_by(|a, b| {
        a.pos
            .distance_squared(ship)
            .partial_cmp(&b.pos.distance_squared(ship))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let Some(target) = target else {
        return TickInput::default();
    };

    let (yaw, pitch) = angles_toward(target.pos - ship);
    let delta = Vec2::new(yaw - state.ship.yaw, pitch - state.ship.pitch);
    TickInput {
        joystick: (delta * 20.0).clamp(Vec2::splat(-1.0), Vec2::ONE),
        fire: delta.abs().max_element() < 0.05,
        pause: false,
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::ProjectileFired { .. } | GameEvent::EnemyHit { .. } => {
            log::debug!("{:?}", event)
        }
        _ => log::info!("{:?}", event),
    }
}

fn main() {
    env_logger::init();
    let options = parse_args();

    let mut tuning = match &options.tuning_path {
        Some(path) => Tuning::load(path).unwrap_or_else(|err| {
            log::warn!("{}; using default tuning", err);
            Tuning::default()
        }),
        None => Tuning::default(),
    };
    if let Some(preset) = options.difficulty {
        tuning.apply_difficulty(preset);
    }

    log::info!(
        "Star Volley (headless) starting: seed {}, {}s, enemy every {}s, {} spawns",
        options.seed,
        options.seconds,
        tuning.enemy_interval_secs,
        if options.deferred { "deferred" } else { "immediate" }
    );

    let mut state = GameState::with_tuning(options.seed, tuning);
    let loader = options
        .deferred
        .then(|| start_loader(state.enable_deferred_spawns()));

    // Headset frames at 90 Hz drive the 60 Hz simulation
    let frame_dt = 1.0 / 90.0;
    let frames = (options.seconds / frame_dt) as u32;
    let mut accumulator = 0.0;

    for _ in 0..frames {
        accumulator += frame_dt;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = autopilot(&state);
            for event in tick(&mut state, &input) {
                log_event(event);
            }
            accumulator -= SIM_DT;
            substeps += 1;
        }

        if let Some((requests, _)) = &loader {
            for request in state.take_spawn_requests() {
                if requests.send(request).is_err() {
                    log::warn!("Loader thread gone, spawn dropped");
                }
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    if let Some((requests, worker)) = loader {
        drop(requests);
        if worker.join().is_err() {
            log::error!("Loader thread panicked");
        }
    }

    match state.snapshot().to_json() {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Failed to serialize final snapshot: {}", err),
    }
}
