//! Handler für Pfad-Bearbeitung (Wegpunkte, Standard-Geschwindigkeit).

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Hängt einen Wegpunkt an.
pub fn append_waypoint(state: &mut AppState, world_pos: DVec2) {
    use_cases::editing::append_waypoint(state, world_pos);
}

/// Entfernt den letzten Wegpunkt.
pub fn remove_last_waypoint(state: &mut AppState) {
    use_cases::editing::remove_last_waypoint(state);
}

/// Ändert die Standard-Geschwindigkeit relativ.
pub fn adjust_default_velocity(state: &mut AppState, delta: f64) {
    use_cases::editing::adjust_default_velocity(state, delta);
}

/// Setzt die Standard-Geschwindigkeit.
pub fn set_default_velocity(state: &mut AppState, velocity: f64) {
    use_cases::editing::set_default_velocity(state, velocity);
}
