use bevy::prelude::*;

/// Hit points of a ship. Damage and healing both raise a color flash.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Health {
    /// Current hitpoints. At 0, the ship sinks.
    pub current: f32,
    /// Maximum hitpoints.
    pub max: f32,
}

impl Health {
    /// Creates a new Health component at full hitpoints.
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Removes up to `amount` hitpoints and returns how many were actually lost.
    pub fn apply_damage(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.current = (self.current - amount.max(0.0)).max(0.0);
        before - self.current
    }

    /// Restores up to `amount` hitpoints and returns how many were actually gained.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.current = (self.current + amount.max(0.0)).min(self.max);
        self.current - before
    }

    /// Returns the ratio of current to max hitpoints (0.0 to 1.0).
    pub fn ratio(&self) -> f32 {
        if self.max > 0.0 {
            (self.current / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Returns true if the ship is destroyed (HP <= 0).
    pub fn is_destroyed(&self) -> bool {
        self.current <= 0.0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}
