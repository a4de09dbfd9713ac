//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod effects;
pub mod events;
pub mod handoff;
pub mod motion;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Collider, check_collisions, within};
pub use difficulty::LevelController;
pub use events::{Collector, Contact, ContactQueue, GameEvent};
pub use handoff::{
    SpawnInbox, SpawnMode, SpawnOutcome, SpawnPort, SpawnRequest, VisualFactory, spawn_channel,
};
pub use motion::{Breach, MotionReport, Moving, advance, advance_bodies};
pub use snapshot::{BuffView, EntityInstance, EntityView, Snapshot, ViewKind};
pub use spawn::{SpawnContext, SpawnSpec, SpawnTimer, Spawner};
pub use state::{
    Body, BuffKind, Buffs, Enemy, EnemyKind, EntityId, GamePhase, GameState, Owner, PowerUp,
    PowerUpKind, Projectile, ProjectileKind, SHIP_ID, Spaceship, SpawnKind, TimedBuff,
    VisualHandle,
};
pub use tick::{TickInput, tick};
