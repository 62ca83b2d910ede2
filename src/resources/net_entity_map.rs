use bevy::prelude::*;
use bevy::utils::HashMap;

use crate::components::NetEntity;

/// Resolves network-stable ids to local entities and back.
#[derive(Resource, Debug, Default)]
pub struct NetEntityMap {
    by_net: HashMap<NetEntity, Entity>,
    by_entity: HashMap<Entity, NetEntity>,
}

impl NetEntityMap {
    /// Registers a pair, replacing any previous mapping of either side.
    /// Invalid ids are ignored.
    pub fn insert(&mut self, net_entity: NetEntity, entity: Entity) {
        if !net_entity.is_valid() {
            return;
        }
        if let Some(old_entity) = self.by_net.insert(net_entity, entity) {
            self.by_entity.remove(&old_entity);
        }
        if let Some(old_net) = self.by_entity.insert(entity, net_entity) {
            if old_net != net_entity {
                self.by_net.remove(&old_net);
            }
        }
    }

    /// Forgets `entity`. Returns the id it was registered under.
    pub fn remove_entity(&mut self, entity: Entity) -> Option<NetEntity> {
        let net_entity = self.by_entity.remove(&entity)?;
        self.by_net.remove(&net_entity);
        Some(net_entity)
    }

    pub fn entity(&self, net_entity: NetEntity) -> Option<Entity> {
        self.by_net.get(&net_entity).copied()
    }

    pub fn len(&self) -> usize {
        self.by_net.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_net.is_empty()
    }
}
