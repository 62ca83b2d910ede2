use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use color_flash::plugins::color_flash::ColorFlashPlugin;
use color_flash::plugins::combat::CombatPlugin;
use color_flash::plugins::debug_ui::DebugUiPlugin;
use color_flash::plugins::demo::DemoPlugin;
use color_flash::plugins::input::InputPlugin;
use color_flash::resources::{CliArgs, FlashSettings};

fn main() {
    let cli = CliArgs::parse();

    let mut settings = FlashSettings::load_from_file();
    if let Some(seconds) = cli.flash_length {
        settings.default_animation_length = seconds;
    }
    if cli.no_flash {
        settings.enabled = false;
    }

    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin)
        .insert_resource(settings)
        .insert_resource(cli)
        .add_plugins(InputPlugin)
        .add_plugins(ColorFlashPlugin)
        .add_plugins(CombatPlugin)
        .add_plugins(DemoPlugin)
        .add_plugins(DebugUiPlugin)
        .run();
}
