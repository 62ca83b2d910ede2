use bevy::prelude::*;

use crate::components::{ColorFlashEffect, FlashLifeStage, NetEntity};
use crate::events::ColorFlashEffectEvent;
use crate::plugins::tint_animation::{TintAnimationPlugin, TintAnimationSet};
use crate::resources::{FlashSettings, NetEntityMap, PredictionTiming};
use crate::systems::{
    forget_net_entities, handle_color_flash_events, on_flash_animation_completed,
    register_net_entities,
};

/// Ordering labels for the color flash systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorFlashSet {
    /// `Update`: starts flashes. Systems raising flashes run before this.
    Requests,
    /// `PostUpdate`: restores tints of finished flashes.
    Completion,
}

/// Plugin that turns [`ColorFlashEffectEvent`]s into sprite tint flashes.
///
/// Resources are only initialized when missing, so settings loaded before
/// the plugin is added are kept.
pub struct ColorFlashPlugin;

impl Plugin for ColorFlashPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<TintAnimationPlugin>() {
            app.add_plugins(TintAnimationPlugin);
        }

        app.register_type::<ColorFlashEffect>()
            .register_type::<FlashLifeStage>()
            .register_type::<NetEntity>()
            .add_event::<ColorFlashEffectEvent>()
            .init_resource::<FlashSettings>()
            .init_resource::<PredictionTiming>()
            .init_resource::<NetEntityMap>()
            .configure_sets(
                PostUpdate,
                ColorFlashSet::Completion.after(TintAnimationSet::Advance),
            )
            .add_systems(
                PreUpdate,
                (forget_net_entities, register_net_entities).chain(),
            )
            .add_systems(
                Update,
                handle_color_flash_events.in_set(ColorFlashSet::Requests),
            )
            .add_systems(
                PostUpdate,
                on_flash_animation_completed.in_set(ColorFlashSet::Completion),
            );
    }
}
