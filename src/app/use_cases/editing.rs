//! Use-Case-Funktionen für das Bearbeiten des Wegpunkt-Pfads.

use crate::app::AppState;
use glam::DVec2;

/// Hängt einen Wegpunkt mit der aktuellen Standard-Geschwindigkeit an.
pub fn append_waypoint(state: &mut AppState, world_pos: DVec2) {
    if !world_pos.is_finite() {
        log::warn!("Wegpunkt ignoriert: ungültige Position {:?}", world_pos);
        return;
    }
    state.path.append(world_pos);
    log::info!(
        "Wegpunkt {} hinzugefügt: ({:.2}, {:.2}) mit v={:.1}",
        state.path.len() - 1,
        world_pos.x,
        world_pos.y,
        state.path.default_velocity()
    );
}

/// Entfernt den zuletzt angehängten Wegpunkt (No-op bei leerem Pfad).
pub fn remove_last_waypoint(state: &mut AppState) {
    match state.path.remove_last() {
        Some((point, velocity)) => log::info!(
            "Wegpunkt {} entfernt: ({:.2}, {:.2}) v={:.1}",
            state.path.len(),
            point.x,
            point.y,
            velocity
        ),
        None => log::debug!("Kein Wegpunkt zum Entfernen"),
    }
}

/// Ändert die Standard-Geschwindigkeit relativ (untere Grenze: Minimum).
pub fn adjust_default_velocity(state: &mut AppState, delta: f64) {
    let velocity = state.path.adjust_default_velocity(delta);
    log::info!("Standard-Geschwindigkeit: {:.1} m/s", velocity);
}

/// Setzt die Standard-Geschwindigkeit absolut (untere Grenze: Minimum).
pub fn set_default_velocity(state: &mut AppState, velocity: f64) {
    let velocity = state.path.set_default_velocity(velocity);
    log::info!("Standard-Geschwindigkeit: {:.1} m/s", velocity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn append_uses_velocity_at_click_time() {
        let mut state = AppState::new();
        append_waypoint(&mut state, DVec2::new(1.0, 2.0));
        adjust_default_velocity(&mut state, 0.5);
        append_waypoint(&mut state, DVec2::new(3.0, 4.0));

        assert_eq!(state.path.len(), 2);
        assert_relative_eq!(state.path.velocities()[0], 1.0);
        assert_relative_eq!(state.path.velocities()[1], 1.5);
    }

    #[test]
    fn append_ignores_non_finite_positions() {
        let mut state = AppState::new();
        append_waypoint(&mut state, DVec2::new(f64::NAN, 0.0));
        assert!(state.path.is_empty());
    }

    #[test]
    fn remove_last_on_empty_is_noop() {
        let mut state = AppState::new();
        remove_last_waypoint(&mut state);
        assert!(state.path.is_empty());
    }

    #[test]
    fn velocity_never_drops_below_minimum() {
        let mut state = AppState::new();
        for _ in 0..20 {
            adjust_default_velocity(&mut state, -0.1);
        }
        assert_relative_eq!(state.path.default_velocity(), 0.1);

        set_default_velocity(&mut state, -3.0);
        assert_relative_eq!(state.path.default_velocity(), 0.1);
    }
}
