//! Viewport-Rendering über den egui-Painter.

mod background_renderer;
mod overlay_renderer;
mod path_renderer;
mod types;

pub use crate::shared::RenderScene;
pub(crate) use background_renderer::BackgroundRenderer;
pub use path_renderer::label_text;
use types::RenderContext;

use crate::core::BackgroundMap;

/// Haupt-Renderer für den Editor-Viewport.
///
/// Hält nur die hochgeladene Map-Textur; alle übrigen Elemente werden
/// pro Frame direkt aus der `RenderScene` gezeichnet.
#[derive(Default)]
pub struct Renderer {
    background_renderer: BackgroundRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer ohne Hintergrund.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt die Map als Textur hoch (ersetzt eine vorhandene).
    pub fn set_background(&mut self, ctx: &egui::Context, map: &BackgroundMap) {
        self.background_renderer.upload(ctx, map);
    }

    /// Entfernt die Map-Textur.
    pub fn clear_background(&mut self) {
        self.background_renderer.clear();
    }

    /// Zeichnet die komplette Szene in `rect`.
    ///
    /// Reihenfolge: Map, Gitter, Mittellinie, Pfad, Punkte, Beschriftungen.
    pub fn render_scene(&self, painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
        let ctx = RenderContext::new(rect, scene.camera, scene.viewport());

        if scene.has_map() {
            self.background_renderer.render(painter, &ctx);
        }
        if scene.show_grid {
            overlay_renderer::render_grid(painter, &ctx);
        }
        if let Some(centerline) = scene.centerline {
            overlay_renderer::render_centerline(painter, &ctx, centerline, scene.options);
        }
        path_renderer::render_path(painter, &ctx, scene);
    }
}
