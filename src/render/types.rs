//! Gemeinsame Hilfstypen der Sub-Renderer.

use crate::core::Camera2D;
use glam::DVec2;

/// Abbildung Welt → Bildschirm für einen Frame.
pub(crate) struct RenderContext<'a> {
    pub rect: egui::Rect,
    pub camera: &'a Camera2D,
    pub viewport: DVec2,
}

impl<'a> RenderContext<'a> {
    pub fn new(rect: egui::Rect, camera: &'a Camera2D, viewport: DVec2) -> Self {
        Self {
            rect,
            camera,
            viewport,
        }
    }

    /// Weltkoordinate → absolute egui-Position.
    pub fn to_screen(&self, world: DVec2) -> egui::Pos2 {
        let local = self.camera.world_to_screen(world, self.viewport);
        self.rect.min + egui::vec2(local.x as f32, local.y as f32)
    }

    /// Absolute egui-Position → Weltkoordinate.
    pub fn to_world(&self, pos: egui::Pos2) -> DVec2 {
        let local = pos - self.rect.min;
        self.camera
            .screen_to_world(DVec2::new(f64::from(local.x), f64::from(local.y)), self.viewport)
    }
}

/// RGBA-Float-Farbe aus den Optionen → egui-Farbe.
pub(crate) fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_roundtrip_respects_rect_offset() {
        let camera = Camera2D::new();
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(800.0, 600.0));
        let ctx = RenderContext::new(rect, &camera, DVec2::new(800.0, 600.0));

        let pos = ctx.to_screen(DVec2::ZERO);
        assert_eq!(pos, egui::pos2(410.0, 320.0));

        let back = ctx.to_world(egui::pos2(410.0, 320.0));
        assert!(back.length() < 1e-9);
    }

    #[test]
    fn opaque_colors_convert_exactly() {
        assert_eq!(to_color32([1.0, 0.0, 0.0, 1.0]), egui::Color32::RED);
        assert_eq!(to_color32([0.0, 0.0, 1.0, 1.0]), egui::Color32::BLUE);
    }
}
