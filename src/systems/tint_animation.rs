// Tint tween playback.

use bevy::prelude::*;

use crate::components::TintAnimator;
use crate::events::TintAnimationCompleted;

/// Advances every [`TintAnimator`] by the frame delta and writes the sampled
/// tint into the entity's sprite. Animations that finish naturally are
/// reported through [`TintAnimationCompleted`].
pub fn advance_tint_animations(
    time: Res<Time>,
    mut animators: Query<(Entity, &mut TintAnimator, Option<&mut Sprite>)>,
    mut completed: EventWriter<TintAnimationCompleted>,
) {
    let delta = time.delta();

    for (entity, mut animator, sprite) in &mut animators {
        if animator.is_idle() {
            continue;
        }

        let step = animator.advance(delta);

        // An animator without a sprite still runs to completion.
        if let (Some(color), Some(mut sprite)) = (step.color, sprite) {
            sprite.color = color;
        }

        for key in step.finished {
            completed.send(TintAnimationCompleted { entity, key });
        }
    }
}
