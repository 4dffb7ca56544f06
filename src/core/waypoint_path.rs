//! Editierbarer Fahrpfad: Wegpunkte plus Geschwindigkeitsprofil.

use super::trajectory::{self, TrajectoryError, TrajectorySample};
use crate::shared::{DEFAULT_VELOCITY, MIN_VELOCITY};
use glam::DVec2;

/// Geschlossener Pfad in Klick-Reihenfolge.
///
/// Punkte und Geschwindigkeiten werden nur gemeinsam verändert, beide
/// Listen sind daher immer gleich lang.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointPath {
    points: Vec<DVec2>,
    velocities: Vec<f64>,
    default_velocity: f64,
    min_velocity: f64,
}

impl Default for WaypointPath {
    fn default() -> Self {
        Self::new()
    }
}

impl WaypointPath {
    /// Erstellt einen leeren Pfad mit Standardwerten.
    pub fn new() -> Self {
        Self::with_velocity_limits(DEFAULT_VELOCITY, MIN_VELOCITY)
    }

    /// Erstellt einen leeren Pfad mit eigener Start- und Mindestgeschwindigkeit.
    pub fn with_velocity_limits(default_velocity: f64, min_velocity: f64) -> Self {
        Self {
            points: Vec::new(),
            velocities: Vec::new(),
            default_velocity: default_velocity.max(min_velocity),
            min_velocity,
        }
    }

    /// Hängt einen Wegpunkt mit der aktuellen Standard-Geschwindigkeit an.
    pub fn append(&mut self, point: DVec2) {
        self.points.push(point);
        self.velocities.push(self.default_velocity);
    }

    /// Entfernt den zuletzt gesetzten Wegpunkt.
    ///
    /// Gibt `None` zurück, wenn der Pfad leer ist.
    pub fn remove_last(&mut self) -> Option<(DVec2, f64)> {
        let point = self.points.pop()?;
        let velocity = self.velocities.pop().unwrap_or(self.default_velocity);
        Some((point, velocity))
    }

    /// Setzt die Standard-Geschwindigkeit (mindestens `min_velocity`).
    ///
    /// Bereits gesetzte Wegpunkte behalten ihre Geschwindigkeit.
    pub fn set_default_velocity(&mut self, velocity: f64) -> f64 {
        if velocity.is_finite() {
            self.default_velocity = velocity.max(self.min_velocity);
        }
        self.default_velocity
    }

    /// Verändert die Standard-Geschwindigkeit relativ.
    pub fn adjust_default_velocity(&mut self, delta: f64) -> f64 {
        self.set_default_velocity(self.default_velocity + delta)
    }

    /// Aktuelle Standard-Geschwindigkeit für neue Punkte.
    pub fn default_velocity(&self) -> f64 {
        self.default_velocity
    }

    /// Untergrenze der Standard-Geschwindigkeit.
    pub fn min_velocity(&self) -> f64 {
        self.min_velocity
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Länge des offenen Polygonzugs (entspricht `s` des letzten Punkts).
    pub fn open_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }

    /// Berechnet die Trajektorie für den aktuellen Stand.
    pub fn compute_trajectory(&self) -> Result<Vec<TrajectorySample>, TrajectoryError> {
        trajectory::compute(&self.points, &self.velocities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_append_uses_default_velocity_at_click_time() {
        let mut path = WaypointPath::new();
        path.append(DVec2::new(0.0, 0.0));
        path.adjust_default_velocity(0.5);
        path.append(DVec2::new(1.0, 0.0));

        assert_eq!(path.len(), 2);
        assert_relative_eq!(path.velocities()[0], 1.0);
        assert_relative_eq!(path.velocities()[1], 1.5);
    }

    #[test]
    fn test_remove_last_keeps_lists_in_sync() {
        let mut path = WaypointPath::new();
        path.append(DVec2::new(1.0, 2.0));
        path.set_default_velocity(3.0);
        path.append(DVec2::new(3.0, 4.0));

        let removed = path.remove_last();
        assert_eq!(removed, Some((DVec2::new(3.0, 4.0), 3.0)));
        assert_eq!(path.points(), &[DVec2::new(1.0, 2.0)]);
        assert_eq!(path.velocities(), &[1.0]);
    }

    #[test]
    fn test_remove_last_on_empty_path_is_noop() {
        let mut path = WaypointPath::new();
        assert_eq!(path.remove_last(), None);
        assert!(path.is_empty());
        assert!(path.velocities().is_empty());
    }

    #[test]
    fn test_default_velocity_is_clamped_to_minimum() {
        let mut path = WaypointPath::new();
        for _ in 0..20 {
            path.adjust_default_velocity(-0.1);
        }
        assert_relative_eq!(path.default_velocity(), MIN_VELOCITY);

        path.set_default_velocity(-4.0);
        assert_relative_eq!(path.default_velocity(), MIN_VELOCITY);
    }

    #[test]
    fn test_non_finite_velocity_is_ignored() {
        let mut path = WaypointPath::new();
        path.set_default_velocity(f64::NAN);
        assert_relative_eq!(path.default_velocity(), DEFAULT_VELOCITY);
    }

    #[test]
    fn test_changing_default_does_not_touch_existing_points() {
        let mut path = WaypointPath::new();
        path.append(DVec2::ZERO);
        path.set_default_velocity(5.0);
        assert_eq!(path.velocities(), &[1.0]);
    }

    #[test]
    fn test_open_length_matches_last_arc_length() {
        let mut path = WaypointPath::new();
        path.append(DVec2::new(0.0, 0.0));
        path.append(DVec2::new(3.0, 4.0));
        path.append(DVec2::new(3.0, 10.0));
        assert_relative_eq!(path.open_length(), 11.0);

        let samples = path.compute_trajectory().unwrap();
        assert_relative_eq!(samples[2].s, path.open_length());
    }

    #[test]
    fn test_custom_limits_raise_start_velocity() {
        let path = WaypointPath::with_velocity_limits(0.2, 0.5);
        assert_relative_eq!(path.default_velocity(), 0.5);
        assert_relative_eq!(path.min_velocity(), 0.5);
    }
}
