//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::WorldBounds;
use glam::DVec2;

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_world: Option<DVec2>) {
    state.view.camera.zoom_towards(factor, focus_world);
}

/// Bereich, auf den "Einpassen" zielt: Map, sonst Wegpunkte, sonst Mittellinie.
pub fn fit_target(state: &AppState) -> Option<WorldBounds> {
    if let Some(map) = state.view.background_map.as_ref() {
        return Some(map.world_bounds());
    }
    WorldBounds::from_points(state.path.points()).or_else(|| {
        state
            .view
            .centerline
            .as_deref()
            .and_then(WorldBounds::from_points)
    })
}

/// Passt die Ansicht ein.
///
/// Solange der Viewport noch keine Größe hat, bleibt `pending_fit` gesetzt
/// und wird beim nächsten Resize nachgeholt.
pub fn fit_view(state: &mut AppState) {
    let Some(bounds) = fit_target(state) else {
        state.view.pending_fit = false;
        return;
    };
    let viewport = state.view.viewport();
    state.view.camera.fit_bounds(&bounds, viewport);
    state.view.pending_fit = viewport.x <= 0.0 || viewport.y <= 0.0;
}

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
    if state.view.pending_fit {
        fit_view(state);
    }
}

/// Schaltet die Punkt-Beschriftungen um.
pub fn toggle_labels(state: &mut AppState) {
    state.view.show_labels = !state.view.show_labels;
}

/// Schaltet das Metergitter um.
pub fn toggle_grid(state: &mut AppState) {
    state.view.show_grid = !state.view.show_grid;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fit_without_content_is_noop() {
        let mut state = AppState::new();
        state.view.pending_fit = true;
        fit_view(&mut state);
        assert!(!state.view.pending_fit);
        assert_eq!(state.view.camera.center, DVec2::ZERO);
    }

    #[test]
    fn fit_is_deferred_until_viewport_known() {
        let mut state = AppState::new();
        state.path.append(DVec2::new(0.0, 0.0));
        state.path.append(DVec2::new(90.0, 0.0));
        state.path.append(DVec2::new(90.0, 10.0));

        fit_view(&mut state);
        assert!(state.view.pending_fit);

        set_viewport_size(&mut state, [1000.0, 500.0]);
        assert!(!state.view.pending_fit);
        assert_relative_eq!(state.view.camera.center.x, 45.0);
        assert_relative_eq!(state.view.camera.center.y, 5.0);
        assert_relative_eq!(state.view.camera.meters_per_pixel, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn resize_updates_viewport_size() {
        let mut state = AppState::new();
        set_viewport_size(&mut state, [1920.0, 1080.0]);
        assert_eq!(state.view.viewport_size, [1920.0, 1080.0]);
    }

    #[test]
    fn toggles_flip_flags() {
        let mut state = AppState::new();
        let labels = state.view.show_labels;
        let grid = state.view.show_grid;
        toggle_labels(&mut state);
        toggle_grid(&mut state);
        assert_eq!(state.view.show_labels, !labels);
        assert_eq!(state.view.show_grid, !grid);
    }
}
