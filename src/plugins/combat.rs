use bevy::prelude::*;

use crate::components::Health;
use crate::events::{DamageEvent, HealEvent, ShipDestroyedEvent};
use crate::plugins::color_flash::ColorFlashSet;
use crate::systems::{apply_damage_system, apply_heal_system, sink_destroyed_ships};

/// Plugin that applies damage and healing to ships.
///
/// Runs ahead of [`ColorFlashSet::Requests`] so the flashes it raises
/// are handled in the same frame.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Health>()
            .add_event::<DamageEvent>()
            .add_event::<HealEvent>()
            .add_event::<ShipDestroyedEvent>()
            .add_systems(
                Update,
                (apply_damage_system, apply_heal_system, sink_destroyed_ships)
                    .chain()
                    .before(ColorFlashSet::Requests),
            );
    }
}
