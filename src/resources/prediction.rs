//! Client-side prediction timing.
//!
//! During a rollback the same simulation ticks run again. Cosmetic effects
//! raised from simulation code must only fire on the first pass over a tick,
//! otherwise every replay would flash the sprite again.

use bevy::prelude::*;

/// Tracks which simulation tick is running and whether it is a replay.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionTiming {
    /// Tick currently being simulated.
    pub current_tick: u32,
    /// Highest tick that has already been predicted once.
    pub last_predicted_tick: u32,
    /// True while the client is re-simulating ticks.
    pub in_prediction: bool,
}

impl PredictionTiming {
    /// True outside prediction, and during prediction only for ticks
    /// that have not been simulated before.
    pub fn is_first_time_predicted(&self) -> bool {
        !self.in_prediction || self.current_tick > self.last_predicted_tick
    }

    /// Rewinds to `from_tick` and starts re-simulating.
    pub fn begin_prediction(&mut self, from_tick: u32) {
        self.in_prediction = true;
        self.current_tick = from_tick;
    }

    /// Moves to the next tick, remembering the furthest tick predicted so far.
    pub fn advance_tick(&mut self) {
        if self.in_prediction && self.current_tick > self.last_predicted_tick {
            self.last_predicted_tick = self.current_tick;
        }
        self.current_tick += 1;
    }

    pub fn end_prediction(&mut self) {
        self.in_prediction = false;
    }
}
