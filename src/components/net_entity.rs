use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Network-stable identifier of an entity.
/// Local `Entity` ids differ between peers; this one does not.
#[derive(
    Component, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Reflect,
)]
#[reflect(Component)]
pub struct NetEntity(pub u32);

impl NetEntity {
    /// Never assigned to an entity, so it never resolves.
    pub const INVALID: NetEntity = NetEntity(0);

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

impl Default for NetEntity {
    fn default() -> Self {
        Self::INVALID
    }
}
