use bevy::prelude::*;

/// Marker component that identifies an entity as a ship.
/// Ships carry a sprite and health, so they are the usual flash targets.
#[derive(Component, Debug, Default)]
pub struct Ship;
