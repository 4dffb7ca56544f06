//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene<'_> {
    RenderScene {
        points: state.path.points(),
        velocities: state.path.velocities(),
        centerline: state.view.centerline.as_deref(),
        camera: &state.view.camera,
        viewport_size,
        background_map: state.view.background_map.as_deref(),
        show_labels: state.view.show_labels,
        show_grid: state.view.show_grid,
        options: &state.options,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use glam::DVec2;

    #[test]
    fn build_mirrors_path_and_view_flags() {
        let mut state = AppState::new();
        state.path.append(DVec2::new(1.0, 2.0));
        state.view.show_labels = false;

        let scene = build(&state, [1280.0, 720.0]);

        assert_eq!(scene.points, &[DVec2::new(1.0, 2.0)]);
        assert_eq!(scene.velocities, &[1.0]);
        assert!(!scene.show_labels);
        assert!(!scene.has_map());
        assert!(scene.centerline.is_none());
    }
}
