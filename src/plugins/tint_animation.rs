use bevy::prelude::*;

use crate::events::TintAnimationCompleted;
use crate::systems::advance_tint_animations;

/// Ordering label for tint playback.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TintAnimationSet {
    /// Advances animators and reports completions.
    Advance,
}

/// Plugin that plays keyed tint tweens on sprites.
///
/// Playback runs in `PostUpdate`, so animators inserted by commands during
/// `Update` already show their first keyframe in the same frame.
pub struct TintAnimationPlugin;

impl Plugin for TintAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TintAnimationCompleted>().add_systems(
            PostUpdate,
            advance_tint_animations.in_set(TintAnimationSet::Advance),
        );
    }
}
