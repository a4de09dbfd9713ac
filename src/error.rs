//! Error types
//!
//! Nothing here is fatal to a running session: the tick loop logs these and
//! carries on with fewer entities.

use std::fmt;

use crate::sim::{BuffKind, SpawnKind};

/// Failures inside the simulation core
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// The host could not build a visual for a spawn; the spawn is dropped
    AssetUnavailable { kind: SpawnKind },
    /// A buff was applied with a value that cannot be a multiplier
    InvalidBuffStack { kind: BuffKind, value: f32 },
    /// A spawn finished after the session was reset
    StaleSpawn { generation: u32, current: u32 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetUnavailable { kind } => {
                write!(f, "asset unavailable for {}, spawn skipped", kind.asset_name())
            }
            Self::InvalidBuffStack { kind, value } => {
                write!(f, "invalid {:?} buff value {}", kind, value)
            }
            Self::StaleSpawn {
                generation,
                current,
            } => write!(
                f,
                "spawn from session generation {} arrived during generation {}",
                generation, current
            ),
        }
    }
}

impl std::error::Error for SimError {}

/// Failures loading or validating balance data
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read tuning file: {}", err),
            Self::Parse(err) => write!(f, "malformed tuning JSON: {}", err),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{}`: {}", field, reason),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
