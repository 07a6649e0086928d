//! Global simulation clock: elapsed time and the user-selected speed multiplier.

use bevy_ecs::prelude::*;
use orrery_config::SimulationConfig;
use tracing::debug;

/// Rejected speed changes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClockError {
    /// The requested multiplier is not one of the presets.
    #[error("speed {0} is not a preset")]
    NotAPreset(f64),
    /// The slider index is past the end of the preset list.
    #[error("preset index {index} out of range (have {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of presets.
        len: usize,
    },
}

/// Process-wide clock. Speed is signed: zero pauses, negative runs time backwards.
#[derive(Resource, Debug, Clone)]
pub struct SimulationClock {
    presets: Vec<f64>,
    default_speed: f64,
    speed: f64,
    real_elapsed: f64,
    sim_elapsed: f64,
}

impl SimulationClock {
    /// A clock running at `default_speed`.
    pub fn new(presets: Vec<f64>, default_speed: f64) -> Self {
        Self {
            presets,
            default_speed,
            speed: default_speed,
            real_elapsed: 0.0,
            sim_elapsed: 0.0,
        }
    }

    /// Presets and starting speed from the simulation settings.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.speed_presets.clone(), config.default_speed)
    }

    /// Current multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Multiplier the session started with.
    pub fn default_speed(&self) -> f64 {
        self.default_speed
    }

    /// Slider values, in slider order.
    pub fn presets(&self) -> &[f64] {
        &self.presets
    }

    /// Slider position of the current speed, if it is a preset.
    pub fn preset_index(&self) -> Option<usize> {
        self.presets.iter().position(|&p| p == self.speed)
    }

    /// True at speed 0, including while a focus flight holds the clock.
    pub fn is_paused(&self) -> bool {
        self.speed == 0.0
    }

    /// Real seconds accumulated by [`advance`](Self::advance).
    pub fn real_elapsed(&self) -> f64 {
        self.real_elapsed
    }

    /// Simulated seconds (real time scaled by speed) accumulated so far.
    pub fn sim_elapsed(&self) -> f64 {
        self.sim_elapsed
    }

    /// Select a preset by value.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), ClockError> {
        if !self.presets.contains(&speed) {
            return Err(ClockError::NotAPreset(speed));
        }
        debug!(from = self.speed, to = speed, "speed changed");
        self.speed = speed;
        Ok(())
    }

    /// Select a preset by slider index, returning the new speed.
    pub fn set_speed_index(&mut self, index: usize) -> Result<f64, ClockError> {
        let speed = *self
            .presets
            .get(index)
            .ok_or(ClockError::IndexOutOfRange {
                index,
                len: self.presets.len(),
            })?;
        self.set_speed(speed)?;
        Ok(speed)
    }

    /// Stop time, returning the speed that was running.
    pub fn pause(&mut self) -> f64 {
        let prior = self.speed;
        self.speed = 0.0;
        prior
    }

    /// Restore a speed previously returned by [`pause`](Self::pause).
    pub fn resume(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Accumulate one frame of `dt` real seconds.
    pub fn advance(&mut self, dt: f32) {
        let dt = f64::from(dt);
        self.real_elapsed += dt;
        self.sim_elapsed += dt * self.speed;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}
