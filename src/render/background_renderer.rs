//! Background-Renderer für das Map-Raster.

use super::RenderContext;
use crate::core::{BackgroundMap, WorldBounds};
use glam::DVec2;

/// Renderer für die Background-Map
#[derive(Default)]
pub struct BackgroundRenderer {
    texture: Option<egui::TextureHandle>,
    current_bounds: Option<WorldBounds>,
}

impl BackgroundRenderer {
    /// Lädt das Graustufen-Raster als egui-Textur hoch.
    pub fn upload(&mut self, ctx: &egui::Context, map: &BackgroundMap) {
        let (width, height) = map.dimensions();
        let image = egui::ColorImage::from_gray(
            [width as usize, height as usize],
            map.image().as_raw(),
        );
        log::debug!("Lade Map-Textur hoch: {}x{} Pixel", width, height);

        // NEAREST: einzelne Pixel bleiben beim Hineinzoomen erkennbar
        self.texture = Some(ctx.load_texture(
            "background_map",
            image,
            egui::TextureOptions::NEAREST,
        ));
        self.current_bounds = Some(map.world_bounds());
    }

    /// Verwirft Textur und Platzierung.
    pub fn clear(&mut self) {
        self.texture = None;
        self.current_bounds = None;
    }

    /// Zeichnet die Map an ihrer Weltposition.
    pub fn render(&self, painter: &egui::Painter, ctx: &RenderContext) {
        let (Some(texture), Some(bounds)) = (self.texture.as_ref(), self.current_bounds) else {
            return;
        };

        // Bildzeile 0 liegt oben, also bei max_y
        let top_left = ctx.to_screen(DVec2::new(bounds.min_x, bounds.max_y));
        let bottom_right = ctx.to_screen(DVec2::new(bounds.max_x, bounds.min_y));
        let screen_rect = egui::Rect::from_two_pos(top_left, bottom_right);
        if !screen_rect.intersects(ctx.rect) {
            return;
        }

        painter.image(
            texture.id(),
            screen_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }
}
