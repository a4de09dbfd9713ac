//! Level progression
//!
//! One level per `level_step` points of cumulative score. Crossing several
//! thresholds with one award advances several levels. There is no last level.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelController {
    level: u32,
    next_threshold: u64,
    step: u64,
    spawn_rate_step: f32,
    boss_every: u32,
}

impl LevelController {
    pub fn new(tuning: &Tuning) -> Self {
        let step = tuning.level_step.max(1);
        Self {
            level: 1,
            next_threshold: step,
            step,
            spawn_rate_step: tuning.spawn_rate_step,
            boss_every: tuning.boss_every.max(1),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Score at which the next level starts
    pub fn next_threshold(&self) -> u64 {
        self.next_threshold
    }

    /// Enemy spawn rate relative to level 1
    pub fn spawn_rate_multiplier(&self) -> f32 {
        1.0 + self.spawn_rate_step * (self.level - 1) as f32
    }

    pub fn is_boss_level(&self, level: u32) -> bool {
        level > 0 && level.is_multiple_of(self.boss_every)
    }

    /// Feed the current score; returns every level entered (in order)
    pub fn on_score(&mut self, score: u64) -> Vec<u32> {
        let mut entered = Vec::new();
        while score >= self.next_threshold {
            self.level += 1;
            self.next_threshold = self.next_threshold.saturating_add(self.step);
            entered.push(self.level);
        }
        entered
    }

    pub fn reset(&mut self) {
        self.level = 1;
        self.next_threshold = self.step;
    }
}
