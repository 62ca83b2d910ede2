use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{AnimationKey, NetEntity};

/// Request to flash the given entities' sprites with `color`.
///
/// Replicated from the server, or raised locally through
/// [`ColorFlashEffects`](crate::systems::ColorFlashEffects). Never acknowledged.
#[derive(Event, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorFlashEffectEvent {
    /// Tint shown at the start of the flash.
    pub color: Color,
    /// Targets, processed in order.
    pub entities: Vec<NetEntity>,
    /// Flash length in seconds. `None` uses the configured default.
    pub animation_length: Option<f32>,
}

impl ColorFlashEffectEvent {
    pub fn new(color: Color, entities: Vec<NetEntity>, animation_length: Option<f32>) -> Self {
        Self {
            color,
            entities,
            animation_length,
        }
    }
}

/// Emitted when a keyed tint animation reaches its end.
/// Not emitted for animations that were stopped.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TintAnimationCompleted {
    pub entity: Entity,
    pub key: AnimationKey,
}

/// Event emitted when a ship takes damage.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageEvent {
    /// The ship that was hit.
    pub target: Entity,
    /// Hitpoints to remove.
    pub amount: f32,
}

/// Event emitted when a ship is repaired.
#[derive(Event, Debug, Clone, Copy)]
pub struct HealEvent {
    /// The ship being repaired.
    pub target: Entity,
    /// Hitpoints to restore.
    pub amount: f32,
}

/// Event emitted when a ship is destroyed (HP <= 0).
#[derive(Event, Debug)]
pub struct ShipDestroyedEvent {
    /// The entity that was destroyed.
    pub entity: Entity,
}
