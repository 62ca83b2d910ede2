//! Color flash visual feedback.
//!
//! A flash tints a sprite with a color and fades back to the tint it had
//! before. Requests arrive as [`ColorFlashEffectEvent`]s, either replicated
//! from the server or raised locally through [`ColorFlashEffects`]. While a
//! flash plays, the entity carries a [`ColorFlashEffect`] holding the tint to
//! restore. Overlapping flashes keep the first tracker's color so the sprite
//! always ends on its real base tint, never on an earlier flash color.

use std::time::Duration;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::components::{
    ColorFlashEffect, Interpolation, NetEntity, TintAnimation, TintAnimator, TintKeyFrame,
    COLOR_FLASH_KEY,
};
use crate::events::{ColorFlashEffectEvent, TintAnimationCompleted};
use crate::resources::{FlashSettings, NetEntityMap, PredictionTiming, RecipientFilter};

/// Raises color flashes from local simulation code.
#[derive(SystemParam)]
pub struct ColorFlashEffects<'w, 's> {
    timing: Res<'w, PredictionTiming>,
    net_entities: Query<'w, 's, &'static NetEntity>,
    requests: EventWriter<'w, ColorFlashEffectEvent>,
}

impl ColorFlashEffects<'_, '_> {
    /// Flashes `entities` with `color`.
    ///
    /// Does nothing while replaying predicted ticks. Entities without a
    /// [`NetEntity`] id are dropped.
    ///
    /// `filter` names the remote players a server would replicate the flash
    /// to. It usually leaves out the predicting player, who still flashes
    /// here, so the local pass never checks it.
    pub fn raise_effect(
        &mut self,
        color: Color,
        entities: &[Entity],
        _filter: &RecipientFilter,
        animation_length: Option<f32>,
    ) {
        if !self.timing.is_first_time_predicted() {
            return;
        }

        let targets: Vec<NetEntity> = entities
            .iter()
            .filter_map(|&entity| self.net_entities.get(entity).ok().copied())
            .collect();

        if targets.is_empty() {
            return;
        }

        self.requests
            .send(ColorFlashEffectEvent::new(color, targets, animation_length));
    }
}

/// Builds the flash tween: `color` at the start, the sprite's current tint at the end.
/// Returns `None` if there is no sprite to animate.
pub fn flash_animation(color: Color, sprite: Option<&Sprite>, length: Duration) -> Option<TintAnimation> {
    let sprite = sprite?;

    Some(TintAnimation {
        length,
        interpolation: Interpolation::Linear,
        key_frames: vec![
            TintKeyFrame::new(color, 0.0),
            TintKeyFrame::new(sprite.color, length.as_secs_f32()),
        ],
    })
}

/// System that starts (or restarts) a flash on every target of each request.
pub fn handle_color_flash_events(
    mut commands: Commands,
    mut requests: EventReader<ColorFlashEffectEvent>,
    net_entities: Res<NetEntityMap>,
    settings: Res<FlashSettings>,
    mut targets: Query<(
        Option<&mut TintAnimator>,
        Option<&mut Sprite>,
        Option<&mut ColorFlashEffect>,
    )>,
) {
    for request in requests.read() {
        if !settings.enabled {
            continue;
        }

        let length = settings.animation_length(request.animation_length);

        for &net_entity in &request.entities {
            let Some(entity) = net_entities.entity(net_entity) else {
                debug!("Skipping flash for unresolved {:?}", net_entity);
                continue;
            };

            let Ok((mut animator, sprite, effect)) = targets.get_mut(entity) else {
                debug!("Skipping flash for deleted entity {:?}", entity);
                continue;
            };

            // Stop first so the sprite is not left on an interpolated tint.
            // Otherwise the restart could capture a half-faded flash color.
            if let Some(animator) = animator.as_deref_mut() {
                if animator.has_running(COLOR_FLASH_KEY) {
                    animator.stop(COLOR_FLASH_KEY);
                }
            }

            let Some(mut sprite) = sprite else {
                continue;
            };

            // A tracker that is shutting down has its removal queued; its color is not trusted.
            let mut effect = effect.filter(|effect| effect.is_running());
            if let Some(effect) = &effect {
                sprite.color = effect.color;
            }

            let Some(animation) = flash_animation(request.color, Some(&*sprite), length) else {
                continue;
            };

            match effect.as_deref_mut() {
                Some(effect) => effect.color = sprite.color,
                None => {
                    commands
                        .entity(entity)
                        .try_insert(ColorFlashEffect::new(sprite.color));
                }
            }

            match animator.as_deref_mut() {
                Some(animator) => animator.play(animation, COLOR_FLASH_KEY),
                None => {
                    let mut animator = TintAnimator::default();
                    animator.play(animation, COLOR_FLASH_KEY);
                    commands.entity(entity).try_insert(animator);
                }
            }
        }
    }
}

/// System that restores the tracked tint once a flash tween finishes.
pub fn on_flash_animation_completed(
    mut commands: Commands,
    mut completed: EventReader<TintAnimationCompleted>,
    mut effects: Query<(&mut ColorFlashEffect, Option<&mut Sprite>)>,
) {
    for event in completed.read() {
        if event.key != COLOR_FLASH_KEY {
            continue;
        }

        let Ok((mut effect, sprite)) = effects.get_mut(event.entity) else {
            continue;
        };

        if let Some(mut sprite) = sprite {
            sprite.color = effect.color;
        }

        effect.shut_down();
        commands.entity(event.entity).remove::<ColorFlashEffect>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{AnimationKey, FlashLifeStage, Health};
    use crate::plugins::color_flash::ColorFlashPlugin;
    use crate::resources::PlayerId;
    use crate::utils::color::approx_eq;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::time::TimeUpdateStrategy;

    const RED: Color = Color::srgb(1.0, 0.0, 0.0);
    const YELLOW: Color = Color::srgb(1.0, 1.0, 0.0);
    const BLUE: Color = Color::srgb(0.0, 0.0, 1.0);

    /// App stepping 100ms per update, already past the zero-delta first frame.
    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ColorFlashPlugin);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
        app.update();
        app
    }

    fn spawn_target(app: &mut App, id: u32, color: Color) -> Entity {
        app.world_mut()
            .spawn((NetEntity(id), Sprite { color, ..default() }))
            .id()
    }

    fn request(app: &mut App, color: Color, targets: &[u32], length: Option<f32>) {
        let targets = targets.iter().map(|&id| NetEntity(id)).collect();
        app.world_mut()
            .send_event(ColorFlashEffectEvent::new(color, targets, length));
    }

    fn sprite_color(app: &App, entity: Entity) -> Color {
        app.world().get::<Sprite>(entity).unwrap().color
    }

    fn tracker(app: &App, entity: Entity) -> Option<&ColorFlashEffect> {
        app.world().get::<ColorFlashEffect>(entity)
    }

    fn run(app: &mut App, frames: usize) {
        for _ in 0..frames {
            app.update();
        }
    }

    #[test]
    fn test_flash_starts_on_flash_color_and_restores() {
        let mut app = test_app();
        let ship = spawn_target(&mut app, 1, Color::WHITE);

        request(&mut app, RED, &[1], Some(0.3));
        app.update();

        assert_eq!(sprite_color(&app, ship), RED);
        let effect = tracker(&app, ship).expect("Tracker should be attached while flashing");
        assert_eq!(effect.color, Color::WHITE);
        assert_eq!(effect.stage, FlashLifeStage::Running);

        run(&mut app, 4);

        assert_eq!(sprite_color(&app, ship), Color::WHITE);
        assert!(tracker(&app, ship).is_none(), "Tracker should be removed after completion");
        let animator = app.world().get::<TintAnimator>(ship).unwrap();
        assert!(!animator.has_running(COLOR_FLASH_KEY));
    }

    #[test]
    fn test_flash_fades_toward_base_tint() {
        let mut app = test_app();
        let ship = spawn_target(&mut app, 1, Color::WHITE);

        request(&mut app, RED, &[1], Some(0.3));
        run(&mut app, 2);

        let mid = sprite_color(&app, ship).to_srgba();
        assert!((mid.red - 1.0).abs() < 1e-4);
        assert!(mid.green > 0.0 && mid.green < 1.0, "Green should be mid-fade: {}", mid.green);
    }

    #[test]
    fn test_overlapping_flash_restores_original_base() {
        let mut app = test_app();
        let ship = spawn_target(&mut app, 1, Color::WHITE);

        request(&mut app, RED, &[1], Some(0.3));
        run(&mut app, 2);
        assert!(!approx_eq(sprite_color(&app, ship), RED, 1e-3));

        request(&mut app, YELLOW, &[1], Some(0.2));
        app.update();

        assert_eq!(sprite_color(&app, ship), YELLOW);
        assert_eq!(tracker(&app, ship).unwrap().color, Color::WHITE);

        for _ in 0..3 {
            app.update();
            // Yellow -> white never dips in green; a red fade would.
            let color = sprite_color(&app, ship).to_srgba();
            assert!((color.red - 1.0).abs() < 1e-4);
            assert!((color.green - 1.0).abs() < 1e-4);
        }

        assert_eq!(sprite_color(&app, ship), Color::WHITE);
        assert!(tracker(&app, ship).is_none());
    }

    #[test]
    fn test_repeated_target_in_one_request_keeps_base_tint() {
        let mut app = test_app();
        let base = Color::srgb(0.2, 0.4, 0.6);
        let ship = spawn_target(&mut app, 1, base);

        request(&mut app, RED, &[1, 1], Some(0.3));
        app.update();

        assert_eq!(sprite_color(&app, ship), RED);
        assert_eq!(tracker(&app, ship).unwrap().color, base);

        run(&mut app, 4);

        assert_eq!(sprite_color(&app, ship), base);
        assert!(tracker(&app, ship).is_none());
    }

    #[test]
    fn test_two_requests_in_one_frame_keep_base_tint() {
        let mut app = test_app();
        let base = Color::srgb(0.2, 0.4, 0.6);
        let ship = spawn_target(&mut app, 1, base);

        request(&mut app, RED, &[1], Some(0.3));
        request(&mut app, YELLOW, &[1], Some(0.3));
        app.update();

        assert_eq!(sprite_color(&app, ship), YELLOW);
        assert_eq!(tracker(&app, ship).unwrap().color, base);

        run(&mut app, 4);

        assert_eq!(sprite_color(&app, ship), base);
        assert!(tracker(&app, ship).is_none());
    }

    #[test]
    fn test_sequential_flashes_return_to_base() {
        let mut app = test_app();
        let base = Color::srgb(0.2, 0.4, 0.6);
        let ship = spawn_target(&mut app, 1, base);

        for color in [RED, YELLOW, BLUE] {
            request(&mut app, color, &[1], None);
            run(&mut app, 5);
            assert!(tracker(&app, ship).is_none());
        }

        assert_eq!(sprite_color(&app, ship), base);
    }

    #[test]
    fn test_unresolved_and_deleted_targets_are_skipped() {
        let mut app = test_app();
        let gone = spawn_target(&mut app, 1, Color::WHITE);
        let ship = spawn_target(&mut app, 2, Color::WHITE);
        app.update();

        app.world_mut().despawn(gone);
        request(&mut app, RED, &[1, 999, 0, 2], None);
        app.update();

        assert_eq!(sprite_color(&app, ship), RED);
        assert!(tracker(&app, ship).is_some());
    }

    #[test]
    fn test_entity_without_sprite_is_skipped() {
        let mut app = test_app();
        let hulk = app.world_mut().spawn((NetEntity(1), Health::new(40.0))).id();
        let ship = spawn_target(&mut app, 2, Color::WHITE);

        request(&mut app, RED, &[1, 2], None);
        app.update();

        assert!(app.world().get::<ColorFlashEffect>(hulk).is_none());
        assert!(app.world().get::<TintAnimator>(hulk).is_none());
        assert_eq!(app.world().get::<Health>(hulk).unwrap().current, 40.0);
        assert_eq!(sprite_color(&app, ship), RED);
    }

    #[test]
    fn test_stale_tracker_is_not_trusted() {
        let mut app = test_app();
        let ship = spawn_target(&mut app, 1, Color::WHITE);
        app.world_mut().entity_mut(ship).insert(ColorFlashEffect {
            color: BLUE,
            stage: FlashLifeStage::ShuttingDown,
        });

        request(&mut app, RED, &[1], None);
        app.update();

        let effect = tracker(&app, ship).unwrap();
        assert_eq!(effect.color, Color::WHITE);
        assert!(effect.is_running());
        assert_eq!(sprite_color(&app, ship), RED);
    }

    #[test]
    fn test_completion_for_other_key_is_ignored() {
        let mut app = test_app();
        let ship = spawn_target(&mut app, 1, Color::WHITE);
        app.world_mut()
            .entity_mut(ship)
            .insert(ColorFlashEffect::new(BLUE));

        app.world_mut().send_event(TintAnimationCompleted {
            entity: ship,
            key: AnimationKey("bob"),
        });
        app.update();

        assert!(tracker(&app, ship).is_some());
        assert_eq!(sprite_color(&app, ship), Color::WHITE);

        app.world_mut().send_event(TintAnimationCompleted {
            entity: ship,
            key: COLOR_FLASH_KEY,
        });
        app.update();

        assert!(tracker(&app, ship).is_none());
        assert_eq!(sprite_color(&app, ship), BLUE);
    }

    #[test]
    fn test_sprite_removed_mid_flash_still_cleans_up() {
        let mut app = test_app();
        let ship = spawn_target(&mut app, 1, Color::WHITE);

        request(&mut app, RED, &[1], Some(0.2));
        app.update();
        app.world_mut().entity_mut(ship).remove::<Sprite>();
        run(&mut app, 4);

        assert!(tracker(&app, ship).is_none());
    }

    #[test]
    fn test_despawn_mid_flash_is_harmless() {
        let mut app = test_app();
        let ship = spawn_target(&mut app, 1, Color::WHITE);

        request(&mut app, RED, &[1], Some(0.2));
        app.update();
        app.world_mut().despawn(ship);
        run(&mut app, 4);

        request(&mut app, RED, &[1], None);
        app.update();
        assert!(!app.world().entities().contains(ship));
    }

    #[test]
    fn test_disabled_settings_drop_requests() {
        let mut app = test_app();
        app.world_mut().resource_mut::<FlashSettings>().enabled = false;
        let ship = spawn_target(&mut app, 1, Color::WHITE);

        request(&mut app, RED, &[1], None);
        app.update();

        assert_eq!(sprite_color(&app, ship), Color::WHITE);
        assert!(tracker(&app, ship).is_none());
    }

    #[test]
    fn test_local_trigger_flashes_when_first_time_predicted() {
        let mut app = test_app();
        let ship = spawn_target(&mut app, 1, Color::WHITE);

        let _ = app
            .world_mut()
            .run_system_once(move |mut flashes: ColorFlashEffects| {
                flashes.raise_effect(RED, &[ship], &RecipientFilter::Broadcast, None);
            });
        app.update();

        assert_eq!(sprite_color(&app, ship), RED);
        assert!(tracker(&app, ship).is_some());
    }

    #[test]
    fn test_local_trigger_suppressed_during_replay() {
        let mut app = test_app();
        let ship = spawn_target(&mut app, 1, Color::WHITE);
        *app.world_mut().resource_mut::<PredictionTiming>() = PredictionTiming {
            current_tick: 4,
            last_predicted_tick: 9,
            in_prediction: true,
        };

        let _ = app
            .world_mut()
            .run_system_once(move |mut flashes: ColorFlashEffects| {
                flashes.raise_effect(RED, &[ship], &RecipientFilter::Broadcast, None);
            });
        app.update();

        assert_eq!(sprite_color(&app, ship), Color::WHITE);
        assert!(tracker(&app, ship).is_none());
        assert!(app.world().get::<TintAnimator>(ship).is_none());
    }

    #[test]
    fn test_local_trigger_ignores_recipient_filter() {
        let mut app = test_app();
        let ship = spawn_target(&mut app, 1, Color::WHITE);

        // Predicting player 1 replicates only to player 2 but still flashes locally
        let _ = app
            .world_mut()
            .run_system_once(move |mut flashes: ColorFlashEffects| {
                let others = RecipientFilter::Players(vec![PlayerId(2)]);
                flashes.raise_effect(RED, &[ship], &others, None);
            });
        app.update();

        assert_eq!(sprite_color(&app, ship), RED);
        let effect = tracker(&app, ship).expect("Filtered-out predictor should still flash");
        assert_eq!(effect.color, Color::WHITE);
    }

    #[test]
    fn test_flash_animation_requires_sprite() {
        let length = Duration::from_millis(300);
        assert!(flash_animation(RED, None, length).is_none());

        let sprite = Sprite {
            color: Color::WHITE,
            ..default()
        };
        let animation = flash_animation(RED, Some(&sprite), length).unwrap();
        assert_eq!(animation.length, length);
        assert_eq!(animation.interpolation, Interpolation::Linear);
        assert_eq!(
            animation.key_frames,
            vec![
                TintKeyFrame::new(RED, 0.0),
                TintKeyFrame::new(Color::WHITE, length.as_secs_f32()),
            ]
        );
    }
}
