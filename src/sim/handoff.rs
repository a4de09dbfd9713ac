//! Cross-thread spawn handoff
//!
//! Visuals are built by the host, possibly on a loader thread. The simulation
//! never waits for them: it queues [`SpawnRequest`]s, the host answers through
//! a [`SpawnPort`], and the tick drains whatever has arrived with a
//! non-blocking receive. A late or failed visual just means fewer entities.

use std::sync::mpsc::{self, Receiver, Sender};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::spawn::SpawnSpec;
use super::state::{SpawnKind, VisualHandle};

/// How spawn specs become entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpawnMode {
    /// Same tick, no visual (headless runs and tests)
    #[default]
    Immediate,
    /// Wait for the host to deliver a visual through a [`SpawnPort`]
    Deferred,
}

/// A spec waiting for its visual
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRequest {
    /// Session generation the request was issued in
    pub generation: u32,
    pub spec: SpawnSpec,
}

/// The host's answer to a [`SpawnRequest`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnOutcome {
    pub request: SpawnRequest,
    /// `None` when the asset could not be built
    pub handle: Option<VisualHandle>,
}

/// Builds renderable visuals for spawned entities
pub trait VisualFactory {
    fn spawn_visual(&mut self, kind: SpawnKind, pos: Vec3) -> Option<VisualHandle>;
}

/// Host side of the handoff; may live on any thread
#[derive(Debug, Clone)]
pub struct SpawnPort {
    tx: Sender<SpawnOutcome>,
}

impl SpawnPort {
    /// Deliver an outcome; false if the simulation has gone away
    pub fn complete(&self, request: SpawnRequest, handle: Option<VisualHandle>) -> bool {
        self.tx.send(SpawnOutcome { request, handle }).is_ok()
    }

    /// Build the visual with `factory` and deliver the result
    pub fn fulfil(&self, request: SpawnRequest, factory: &mut impl VisualFactory) -> bool {
        let handle = factory.spawn_visual(request.spec.kind, request.spec.pos);
        self.complete(request, handle)
    }
}

/// Simulation side of the handoff
#[derive(Debug)]
pub struct SpawnInbox {
    rx: Receiver<SpawnOutcome>,
}

impl SpawnInbox {
    /// Everything that has arrived so far; never blocks
    pub fn drain(&self) -> Vec<SpawnOutcome> {
        self.rx.try_iter().collect()
    }
}

pub fn spawn_channel() -> (SpawnPort, SpawnInbox) {
    let (tx, rx) = mpsc::channel();
    (SpawnPort { tx }, SpawnInbox { rx })
}
