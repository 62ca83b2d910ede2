use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

#[derive(Actionlike, PartialEq, Eq, Clone, Copy, Hash, Debug, Reflect)]
pub enum DemoAction {
    Damage,
    Heal,
    Volley,
    Sink,
    Respawn,
    Rollback,
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<DemoAction>::default());
    }
}

pub fn get_default_input_map() -> InputMap<DemoAction> {
    let mut input_map = InputMap::default();

    // Combat feedback
    input_map.insert(DemoAction::Damage, KeyCode::Space);
    input_map.insert(DemoAction::Heal, KeyCode::KeyH);
    input_map.insert(DemoAction::Volley, KeyCode::KeyV);

    // Fleet
    input_map.insert(DemoAction::Sink, KeyCode::KeyX);
    input_map.insert(DemoAction::Respawn, KeyCode::KeyR);

    // Prediction (fakes a server correction)
    input_map.insert(DemoAction::Rollback, KeyCode::Tab);

    input_map
}
