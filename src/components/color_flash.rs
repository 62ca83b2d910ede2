// Color flash tracker for damage / heal visual feedback.

use bevy::prelude::*;

use crate::components::tint_animation::AnimationKey;

/// Key the flash tween plays under on an entity's [`TintAnimator`](crate::components::TintAnimator).
pub const COLOR_FLASH_KEY: AnimationKey = AnimationKey("color-flash-effect");

/// Flash length used when a request does not carry its own (seconds).
/// A little on the long side so the different flash colors stay readable.
pub const DEFAULT_ANIMATION_LENGTH: f32 = 0.30;

/// Where a [`ColorFlashEffect`] is in its life.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum FlashLifeStage {
    /// A flash tween is playing and `color` is authoritative.
    #[default]
    Running,
    /// Completion was handled and removal is queued. Do not trust `color`.
    ShuttingDown,
}

/// Present on an entity while its sprite is mid-flash.
/// Holds the tint the sprite returns to once the flash finishes.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct ColorFlashEffect {
    /// Tint captured before the first overlapping flash began.
    pub color: Color,
    pub stage: FlashLifeStage,
}

impl ColorFlashEffect {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            stage: FlashLifeStage::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.stage == FlashLifeStage::Running
    }

    /// Marks the tracker as pending removal.
    pub fn shut_down(&mut self) {
        self.stage = FlashLifeStage::ShuttingDown;
    }
}

/// Flash colors used by combat feedback.
pub struct FlashColors;

impl FlashColors {
    pub const DAMAGE: Color = Color::srgb(1.0, 0.0, 0.0);
    pub const HEAL: Color = Color::srgb(0.0, 1.0, 0.0);
}
