use bevy::prelude::*;

use crate::components::NetEntity;
use crate::resources::NetEntityMap;

/// Registers entities that gained a [`NetEntity`] id.
pub fn register_net_entities(
    mut map: ResMut<NetEntityMap>,
    added: Query<(Entity, &NetEntity), Added<NetEntity>>,
) {
    for (entity, net_entity) in &added {
        if !net_entity.is_valid() {
            warn!("Entity {:?} was given an invalid NetEntity id", entity);
            continue;
        }
        map.insert(*net_entity, entity);
    }
}

/// Drops ids whose component was removed or whose entity was despawned.
pub fn forget_net_entities(
    mut map: ResMut<NetEntityMap>,
    mut removed: RemovedComponents<NetEntity>,
) {
    for entity in removed.read() {
        map.remove_entity(entity);
    }
}
