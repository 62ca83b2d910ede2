// Damage and healing with color flash feedback.

use bevy::prelude::*;

use crate::components::{FlashColors, Health, Ship};
use crate::events::{DamageEvent, HealEvent, ShipDestroyedEvent};
use crate::resources::RecipientFilter;
use crate::systems::color_flash::ColorFlashEffects;

/// System that applies damage to ships and flashes them red.
pub fn apply_damage_system(
    mut events: EventReader<DamageEvent>,
    mut ships: Query<&mut Health, With<Ship>>,
    mut flashes: ColorFlashEffects,
) {
    for event in events.read() {
        let Ok(mut health) = ships.get_mut(event.target) else {
            debug!("Damage target {:?} is not a ship", event.target);
            continue;
        };

        let lost = health.apply_damage(event.amount);
        if lost <= 0.0 {
            continue;
        }

        flashes.raise_effect(
            FlashColors::DAMAGE,
            &[event.target],
            &RecipientFilter::Broadcast,
            None,
        );
        info!(
            "Ship {:?} took {:.1} damage ({:.0}/{:.0})",
            event.target, lost, health.current, health.max
        );
    }
}

/// System that repairs ships and flashes them green.
pub fn apply_heal_system(
    mut events: EventReader<HealEvent>,
    mut ships: Query<&mut Health, With<Ship>>,
    mut flashes: ColorFlashEffects,
) {
    for event in events.read() {
        let Ok(mut health) = ships.get_mut(event.target) else {
            debug!("Heal target {:?} is not a ship", event.target);
            continue;
        };

        let gained = health.heal(event.amount);
        if gained <= 0.0 {
            continue;
        }

        flashes.raise_effect(
            FlashColors::HEAL,
            &[event.target],
            &RecipientFilter::Broadcast,
            None,
        );
        info!(
            "Ship {:?} repaired {:.1} ({:.0}/{:.0})",
            event.target, gained, health.current, health.max
        );
    }
}

/// System that despawns ships whose hull is gone.
pub fn sink_destroyed_ships(
    mut commands: Commands,
    ships: Query<(Entity, &Health), (With<Ship>, Changed<Health>)>,
    mut destroyed: EventWriter<ShipDestroyedEvent>,
) {
    for (entity, health) in &ships {
        if health.is_destroyed() {
            commands.entity(entity).despawn_recursive();
            destroyed.send(ShipDestroyedEvent { entity });
            info!("Ship {:?} sank", entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use bevy::time::TimeUpdateStrategy;

    use crate::components::{ColorFlashEffect, NetEntity};
    use crate::plugins::color_flash::ColorFlashPlugin;
    use crate::plugins::combat::CombatPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ColorFlashPlugin);
        app.add_plugins(CombatPlugin);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
        app.update();
        app
    }

    fn spawn_ship(app: &mut App, id: u32, hp: f32) -> Entity {
        let entity = app
            .world_mut()
            .spawn((
                Ship,
                Health::new(hp),
                NetEntity(id),
                Sprite {
                    color: Color::WHITE,
                    ..default()
                },
            ))
            .id();
        app.update();
        entity
    }

    #[test]
    fn test_damage_flashes_red() {
        let mut app = test_app();
        let ship = spawn_ship(&mut app, 1, 100.0);

        app.world_mut().send_event(DamageEvent {
            target: ship,
            amount: 25.0,
        });
        app.update();

        assert_eq!(app.world().get::<Health>(ship).unwrap().current, 75.0);
        assert_eq!(app.world().get::<Sprite>(ship).unwrap().color, FlashColors::DAMAGE);
        let effect = app.world().get::<ColorFlashEffect>(ship).unwrap();
        assert_eq!(effect.color, Color::WHITE);
    }

    #[test]
    fn test_heal_flashes_green() {
        let mut app = test_app();
        let ship = spawn_ship(&mut app, 1, 100.0);
        app.world_mut().get_mut::<Health>(ship).unwrap().current = 50.0;

        app.world_mut().send_event(HealEvent {
            target: ship,
            amount: 20.0,
        });
        app.update();

        assert_eq!(app.world().get::<Health>(ship).unwrap().current, 70.0);
        assert_eq!(app.world().get::<Sprite>(ship).unwrap().color, FlashColors::HEAL);
    }

    #[test]
    fn test_heal_at_full_health_does_not_flash() {
        let mut app = test_app();
        let ship = spawn_ship(&mut app, 1, 100.0);

        app.world_mut().send_event(HealEvent {
            target: ship,
            amount: 20.0,
        });
        app.update();

        assert_eq!(app.world().get::<Sprite>(ship).unwrap().color, Color::WHITE);
        assert!(app.world().get::<ColorFlashEffect>(ship).is_none());
    }

    #[test]
    fn test_lethal_damage_sinks_ship_without_panicking() {
        let mut app = test_app();
        let doomed = spawn_ship(&mut app, 1, 10.0);
        let survivor = spawn_ship(&mut app, 2, 100.0);

        app.world_mut().send_event(DamageEvent {
            target: doomed,
            amount: 50.0,
        });
        app.world_mut().send_event(DamageEvent {
            target: survivor,
            amount: 5.0,
        });
        app.update();

        assert!(!app.world().entities().contains(doomed));
        assert_eq!(
            app.world().get::<Sprite>(survivor).unwrap().color,
            FlashColors::DAMAGE
        );

        let events = app.world().resource::<Events<ShipDestroyedEvent>>();
        let mut reader = events.get_cursor();
        let sunk: Vec<Entity> = reader.read(events).map(|event| event.entity).collect();
        assert_eq!(sunk, vec![doomed]);
    }
}
