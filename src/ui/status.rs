//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use glam::DVec2;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, hover_world: Option<DVec2>) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Points: {} | Default velocity: {:.1} m/s | Length: {:.2} m",
                state.path.len(),
                state.path.default_velocity(),
                state.path.open_length()
            ));

            ui.separator();

            if let Some(map) = &state.map {
                ui.label(format!(
                    "Map: {} ({} m/px)",
                    map.name, map.meta.resolution
                ));
            } else {
                ui.label("No map loaded");
            }

            ui.separator();

            ui.label(cursor_text(state, hover_world));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.4} m/px",
                state.view.camera.meters_per_pixel
            ));

            // Statusnachricht (z.B. Speichern, Fehler beim Laden)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}

/// Cursor-Anzeige in Weltkoordinaten, über der Map zusätzlich mit Pixel.
pub fn cursor_text(state: &AppState, hover_world: Option<DVec2>) -> String {
    let Some(pos) = hover_world else {
        return "Cursor: -".to_string();
    };
    let pixel = state
        .view
        .background_map
        .as_ref()
        .and_then(|map| map.pixel_at(pos));
    match pixel {
        Some((col, row)) => format!("Cursor: ({:.2}, {:.2}) px [{}, {}]", pos.x, pos.y, col, row),
        None => format!("Cursor: ({:.2}, {:.2})", pos.x, pos.y),
    }
}
