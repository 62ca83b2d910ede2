//! Demo scene: a row of ships to hit, repair and sink from the keyboard.

use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::{Health, NetEntity, Ship};
use crate::events::{DamageEvent, HealEvent};
use crate::plugins::color_flash::ColorFlashSet;
use crate::plugins::input::{get_default_input_map, DemoAction};
use crate::resources::{CliArgs, PredictionTiming, RecipientFilter};
use crate::systems::ColorFlashEffects;

/// Ticks re-simulated when a server correction is faked with Tab.
const ROLLBACK_TICKS: u32 = 60;

/// Volley flash color and length, longer than a regular hit.
const VOLLEY_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);
const VOLLEY_LENGTH: f32 = 0.6;

const SHIP_SIZE: Vec2 = Vec2::new(80.0, 40.0);
const SHIP_SPACING: f32 = 120.0;

/// Hands out network ids for demo ships. Zero is reserved as invalid.
#[derive(Resource, Debug)]
struct NetEntityAllocator(u32);

impl Default for NetEntityAllocator {
    fn default() -> Self {
        Self(1)
    }
}

impl NetEntityAllocator {
    fn allocate(&mut self) -> NetEntity {
        let id = NetEntity(self.0);
        self.0 += 1;
        id
    }
}

pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CliArgs>()
            .init_resource::<NetEntityAllocator>()
            .add_systems(Startup, (spawn_camera, spawn_fleet, start_predicting))
            .add_systems(
                Update,
                (fake_rollback, demo_actions, respawn_fleet)
                    .chain()
                    .before(ColorFlashSet::Requests),
            )
            .add_systems(Last, advance_prediction_tick);
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 0.0, 100.0),
        InputManagerBundle::with_map(get_default_input_map()),
    ));
}

fn spawn_fleet(mut commands: Commands, cli: Res<CliArgs>, mut ids: ResMut<NetEntityAllocator>) {
    spawn_ships(&mut commands, cli.ships, &mut ids);
}

fn spawn_ships(commands: &mut Commands, count: usize, ids: &mut NetEntityAllocator) {
    let offset = (count.saturating_sub(1)) as f32 * SHIP_SPACING * 0.5;

    for i in 0..count {
        // Spread base tints so restores are easy to verify by eye.
        let hue = i as f32 / count.max(1) as f32 * 300.0;
        let base = Color::hsl(hue, 0.35, 0.55);

        commands.spawn((
            Name::new(format!("Ship {}", i)),
            Ship,
            Health::default(),
            ids.allocate(),
            Sprite::from_color(base, SHIP_SIZE),
            Transform::from_xyz(i as f32 * SHIP_SPACING - offset, 0.0, 0.0),
        ));
    }

    info!("Spawned {} ships", count);
}

/// The demo client predicts every tick, so replays can be faked.
fn start_predicting(mut timing: ResMut<PredictionTiming>) {
    timing.begin_prediction(1);
}

fn advance_prediction_tick(mut timing: ResMut<PredictionTiming>) {
    timing.advance_tick();
}

fn demo_actions(
    mut commands: Commands,
    actions: Query<&ActionState<DemoAction>>,
    ships: Query<Entity, With<Ship>>,
    mut damage: EventWriter<DamageEvent>,
    mut heal: EventWriter<HealEvent>,
    mut flashes: ColorFlashEffects,
) {
    let Ok(action_state) = actions.get_single() else {
        return;
    };

    let ships: Vec<Entity> = ships.iter().collect();
    let mut rng = rand::thread_rng();

    if action_state.just_pressed(&DemoAction::Damage) {
        if let Some(&target) = ships.choose(&mut rng) {
            damage.send(DamageEvent {
                target,
                amount: rng.gen_range(5.0..20.0),
            });
        }
    }

    if action_state.just_pressed(&DemoAction::Heal) {
        if let Some(&target) = ships.choose(&mut rng) {
            heal.send(HealEvent {
                target,
                amount: rng.gen_range(5.0..15.0),
            });
        }
    }

    if action_state.just_pressed(&DemoAction::Volley) {
        flashes.raise_effect(
            VOLLEY_COLOR,
            &ships,
            &RecipientFilter::Broadcast,
            Some(VOLLEY_LENGTH),
        );
    }

    if action_state.just_pressed(&DemoAction::Sink) {
        if let Some(&target) = ships.choose(&mut rng) {
            commands.entity(target).despawn_recursive();
            info!("Scuttled {:?}", target);
        }
    }
}

fn respawn_fleet(
    mut commands: Commands,
    actions: Query<&ActionState<DemoAction>>,
    ships: Query<(), With<Ship>>,
    cli: Res<CliArgs>,
    mut ids: ResMut<NetEntityAllocator>,
) {
    let Ok(action_state) = actions.get_single() else {
        return;
    };

    if action_state.just_pressed(&DemoAction::Respawn) && ships.is_empty() {
        spawn_ships(&mut commands, cli.ships, &mut ids);
    }
}

fn fake_rollback(
    actions: Query<&ActionState<DemoAction>>,
    mut timing: ResMut<PredictionTiming>,
) {
    let Ok(action_state) = actions.get_single() else {
        return;
    };

    if action_state.just_pressed(&DemoAction::Rollback) {
        let from_tick = timing.current_tick.saturating_sub(ROLLBACK_TICKS);
        timing.begin_prediction(from_tick);
        info!(
            "Replaying ticks {}..{}, local flashes are suppressed",
            from_tick, timing.last_predicted_tick
        );
    }
}
