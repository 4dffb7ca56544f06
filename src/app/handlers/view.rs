//! Handler für Kamera, Viewport und Overlays.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::camera::set_viewport_size(state, size);
}

/// Verschiebt die Kamera um ein Weltkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt mit optionalem Fokuspunkt im Weltkoordinatensystem.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_world: Option<DVec2>) {
    use_cases::camera::zoom_towards(state, factor, focus_world);
}

/// Passt die Ansicht auf Map bzw. Wegpunkte ein.
pub fn fit_view(state: &mut AppState) {
    use_cases::camera::fit_view(state);
}

/// Schaltet die Punkt-Beschriftungen um.
pub fn toggle_labels(state: &mut AppState) {
    use_cases::camera::toggle_labels(state);
}

/// Schaltet das Gitter um.
pub fn toggle_grid(state: &mut AppState) {
    use_cases::camera::toggle_grid(state);
}
