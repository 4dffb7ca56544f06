//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{BackgroundMap, Camera2D};
use glam::DVec2;

/// Read-only Daten für einen Render-Frame (geliehen aus dem AppState).
pub struct RenderScene<'a> {
    /// Wegpunkte in Klick-Reihenfolge
    pub points: &'a [DVec2],
    /// Geschwindigkeit je Wegpunkt (gleiche Länge wie `points`)
    pub velocities: &'a [f64],
    /// Referenz-Mittellinie (optional)
    pub centerline: Option<&'a [DVec2]>,
    /// Kamera-Zustand für diesen Frame
    pub camera: &'a Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Background-Map (optional)
    pub background_map: Option<&'a BackgroundMap>,
    pub show_labels: bool,
    pub show_grid: bool,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: &'a EditorOptions,
}

impl RenderScene<'_> {
    /// Gibt zurück, ob eine Karte für Rendering vorhanden ist.
    pub fn has_map(&self) -> bool {
        self.background_map.is_some()
    }

    /// Viewport-Größe als DVec2.
    pub fn viewport(&self) -> DVec2 {
        DVec2::new(
            f64::from(self.viewport_size[0]),
            f64::from(self.viewport_size[1]),
        )
    }
}
