//! Renderer für den Wegpunkt-Pfad: Polylinie, Punkte, Beschriftungen.

use super::types::to_color32;
use super::{RenderContext, RenderScene};

const LABEL_FONT_SIZE: f32 = 12.0;

/// Beschriftung eines Wegpunkts: Index und Geschwindigkeit (`"3:1.5"`).
pub fn label_text(index: usize, velocity: f64) -> String {
    format!("{}:{:.1}", index, velocity)
}

/// Zeichnet den offenen Polygonzug in Klick-Reihenfolge samt Punkten.
pub(crate) fn render_path(painter: &egui::Painter, ctx: &RenderContext, scene: &RenderScene) {
    if scene.points.is_empty() {
        return;
    }
    let options = scene.options;
    let screen: Vec<egui::Pos2> = scene.points.iter().map(|p| ctx.to_screen(*p)).collect();

    if screen.len() >= 2 {
        painter.add(egui::Shape::line(
            screen.clone(),
            egui::Stroke::new(options.path_width_px, to_color32(options.path_color)),
        ));
    }

    let point_color = to_color32(options.point_color);
    let label_color = to_color32(options.label_color);
    let label_offset = egui::vec2(options.point_radius_px + 2.0, -(options.point_radius_px + 2.0));
    let visible = ctx.rect.expand(options.point_radius_px);

    for (index, (pos, velocity)) in screen.iter().zip(scene.velocities).enumerate() {
        if !visible.contains(*pos) {
            continue;
        }
        painter.circle_filled(*pos, options.point_radius_px, point_color);
        if scene.show_labels {
            painter.text(
                *pos + label_offset,
                egui::Align2::LEFT_BOTTOM,
                label_text(index, *velocity),
                egui::FontId::proportional(LABEL_FONT_SIZE),
                label_color,
            );
        }
    }
}
