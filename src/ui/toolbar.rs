//! Toolbar mit Standard-Geschwindigkeit und Bedienhinweis.

use crate::app::{AppIntent, AppState};

/// Kurzanleitung, auch im Fenstertitel.
pub const HELP_TEXT: &str = "Left click: Add point, Right click: Remove last point / \
Up/Down arrows: Adjust default velocity / Press Enter to save and quit";

/// Obergrenze des Eingabefelds (m/s).
const MAX_VELOCITY_INPUT: f64 = 100.0;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Default velocity:");

            let mut velocity = state.path.default_velocity();
            let response = ui.add(
                egui::DragValue::new(&mut velocity)
                    .speed(state.options.velocity_step)
                    .range(state.path.min_velocity()..=MAX_VELOCITY_INPUT)
                    .fixed_decimals(1)
                    .suffix(" m/s"),
            );
            if response.changed() {
                events.push(AppIntent::SetDefaultVelocityRequested { velocity });
            }

            if ui.button("−").clicked() {
                events.push(AppIntent::DecreaseVelocityRequested);
            }
            if ui.button("+").clicked() {
                events.push(AppIntent::IncreaseVelocityRequested);
            }

            ui.separator();

            if ui
                .add_enabled(!state.path.is_empty(), egui::Button::new("Save and quit"))
                .clicked()
            {
                events.push(AppIntent::SaveAndExitRequested);
            }

            ui.separator();
            ui.label(egui::RichText::new(HELP_TEXT).weak());
        });
    });

    events
}
