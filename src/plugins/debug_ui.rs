use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::components::{ColorFlashEffect, Health, Ship};
use crate::resources::{FlashSettings, NetEntityMap, PredictionTiming};

pub struct DebugUiPlugin;

impl Plugin for DebugUiPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }

        app.add_systems(Update, debug_panel);
    }
}

fn debug_panel(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
    timing: Res<PredictionTiming>,
    net_entities: Res<NetEntityMap>,
    mut settings: ResMut<FlashSettings>,
    flashes: Query<&ColorFlashEffect>,
    ships: Query<(&Name, &Health), With<Ship>>,
) {
    egui::Window::new("Flash Debug").show(contexts.ctx_mut(), |ui| {
        if let Some(fps) = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|diag| diag.smoothed())
        {
            ui.label(format!("FPS: {:.1}", fps));
        }

        ui.label(format!("Tick: {}", timing.current_tick));
        ui.label(if timing.is_first_time_predicted() {
            "Prediction: live"
        } else {
            "Prediction: replaying (local flashes suppressed)"
        });

        let active = flashes.iter().filter(|effect| effect.is_running()).count();
        ui.label(format!("Active flashes: {}", active));
        if net_entities.is_empty() {
            ui.label("Networked entities: none");
        } else {
            ui.label(format!("Networked entities: {}", net_entities.len()));
        }

        ui.separator();
        ui.heading("Fleet");
        for (name, health) in &ships {
            ui.add(
                egui::ProgressBar::new(health.ratio())
                    .text(format!("{}: {:.0}/{:.0}", name, health.current, health.max)),
            );
        }

        ui.separator();
        ui.heading("Settings");
        ui.checkbox(&mut settings.enabled, "Flashes enabled");
        ui.add(
            egui::Slider::new(&mut settings.default_animation_length, 0.05..=2.0)
                .text("Flash length (s)"),
        );
        if ui.button("Save settings").clicked() {
            if let Err(e) = settings.save_to_file() {
                error!("{}", e);
            }
        }

        ui.separator();
        ui.label("Space: damage  H: heal  V: volley");
        ui.label("X: sink  R: respawn  Tab: rollback");
    });
}
