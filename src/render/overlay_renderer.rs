//! Overlays: Metergitter und gestrichelte Referenz-Mittellinie.

use super::types::to_color32;
use super::RenderContext;
use crate::shared::EditorOptions;
use glam::DVec2;

/// Mindestabstand zweier Gitterlinien in Screen-Pixeln.
const GRID_MIN_SPACING_PX: f64 = 50.0;
const GRID_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(60, 60, 60, 60);
const DASH_LENGTH_PX: f32 = 8.0;
const GAP_LENGTH_PX: f32 = 6.0;

/// Kleinster Wert aus der Reihe 1-2-5 · 10^k, der `min_step` nicht unterschreitet.
pub(crate) fn nice_grid_step(min_step: f64) -> f64 {
    if !(min_step.is_finite() && min_step > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(min_step.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= min_step * (1.0 - 1e-9))
        .unwrap_or(10.0 * magnitude)
}

/// Zeichnet achsenparallele Gitterlinien im sichtbaren Bereich.
pub(crate) fn render_grid(painter: &egui::Painter, ctx: &RenderContext) {
    let step = nice_grid_step(ctx.camera.meters_per_pixel * GRID_MIN_SPACING_PX);
    let world_min = ctx.to_world(ctx.rect.left_bottom());
    let world_max = ctx.to_world(ctx.rect.right_top());
    let stroke = egui::Stroke::new(1.0, GRID_COLOR);

    let mut x = (world_min.x / step).floor() * step;
    while x <= world_max.x {
        let top = ctx.to_screen(DVec2::new(x, world_max.y));
        let bottom = ctx.to_screen(DVec2::new(x, world_min.y));
        painter.line_segment([top, bottom], stroke);
        x += step;
    }

    let mut y = (world_min.y / step).floor() * step;
    while y <= world_max.y {
        let left = ctx.to_screen(DVec2::new(world_min.x, y));
        let right = ctx.to_screen(DVec2::new(world_max.x, y));
        painter.line_segment([left, right], stroke);
        y += step;
    }
}

/// Zeichnet die Mittellinie gestrichelt.
pub(crate) fn render_centerline(
    painter: &egui::Painter,
    ctx: &RenderContext,
    centerline: &[DVec2],
    options: &EditorOptions,
) {
    if centerline.len() < 2 {
        return;
    }
    let screen: Vec<egui::Pos2> = centerline.iter().map(|p| ctx.to_screen(*p)).collect();
    let stroke = egui::Stroke::new(1.0, to_color32(options.centerline_color));
    painter.extend(egui::Shape::dashed_line(
        &screen,
        stroke,
        DASH_LENGTH_PX,
        GAP_LENGTH_PX,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn grid_step_follows_one_two_five() {
        assert_relative_eq!(nice_grid_step(1.0), 1.0);
        assert_relative_eq!(nice_grid_step(1.5), 2.0);
        assert_relative_eq!(nice_grid_step(2.5), 5.0);
        assert_relative_eq!(nice_grid_step(7.0), 10.0);
        assert_relative_eq!(nice_grid_step(0.3), 0.5, epsilon = 1e-12);
        assert_relative_eq!(nice_grid_step(120.0), 200.0, epsilon = 1e-9);
    }

    #[test]
    fn grid_step_handles_degenerate_input() {
        assert_relative_eq!(nice_grid_step(0.0), 1.0);
        assert_relative_eq!(nice_grid_step(f64::NAN), 1.0);
    }
}
