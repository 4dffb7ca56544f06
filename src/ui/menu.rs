//! Top-Menü (File, View).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open map... (Ctrl+O)").clicked() {
                    events.push(AppIntent::OpenMapRequested);
                    ui.close();
                }

                ui.separator();

                let has_points = !state.path.is_empty();

                if ui
                    .add_enabled(has_points, egui::Button::new("Save trajectory (Ctrl+S)"))
                    .clicked()
                {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_points, egui::Button::new("Save and quit (Enter)"))
                    .clicked()
                {
                    events.push(AppIntent::SaveAndExitRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                let fit_label = if state.view.background_map.is_some() {
                    "Fit to map (F)"
                } else {
                    "Fit to points (F)"
                };
                if ui.button(fit_label).clicked() {
                    events.push(AppIntent::FitViewRequested);
                    ui.close();
                }

                ui.separator();

                let mut show_labels = state.view.show_labels;
                if ui.checkbox(&mut show_labels, "Point labels").clicked() {
                    events.push(AppIntent::ToggleLabelsRequested);
                }

                let mut show_grid = state.view.show_grid;
                if ui.checkbox(&mut show_grid, "Grid").clicked() {
                    events.push(AppIntent::ToggleGridRequested);
                }
            });
        });
    });

    events
}
