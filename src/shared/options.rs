//! Zentrale Konfiguration für den Race Waypoint Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Geschwindigkeit ────────────────────────────────────────────────

/// Start-Sollgeschwindigkeit für neue Wegpunkte (m/s).
pub const DEFAULT_VELOCITY: f64 = 1.0;
/// Schrittweite für Pfeil hoch/runter (m/s).
pub const VELOCITY_STEP: f64 = 0.1;
/// Untergrenze der Standard-Geschwindigkeit (m/s).
pub const MIN_VELOCITY: f64 = 0.1;

// ── Ausgabe ────────────────────────────────────────────────────────

/// Wurzelverzeichnis für Ausgaben; darunter ein Ordner pro Map.
pub const OUTPUT_ROOT: &str = "outputs";
/// Dateiname der exportierten Trajektorie.
pub const TRAJECTORY_FILE_NAME: &str = "traj_race_cl.csv";
/// Dateiname der Referenz-Mittellinie im Map-Ordner.
pub const CENTERLINE_FILE_NAME: &str = "centerline";

// ── Darstellung ────────────────────────────────────────────────────

/// Punkt-Radius in Screen-Pixeln.
pub const POINT_RADIUS_PX: f32 = 5.0;
/// Linienstärke des Pfads in Screen-Pixeln.
pub const PATH_WIDTH_PX: f32 = 2.0;
/// Punktfarbe (RGBA: Rot).
pub const POINT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Pfadfarbe (RGBA: Blau).
pub const PATH_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe der Mittellinie (RGBA: Schwarz, halbtransparent).
pub const CENTERLINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
/// Farbe der Punkt-Beschriftung (RGBA: Weiß).
pub const LABEL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Zoom-Schritt bei Mausrad-Scroll.
pub const SCROLL_ZOOM_STEP: f64 = 1.1;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `race_waypoint_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Geschwindigkeit ─────────────────────────────────────────
    /// Start-Sollgeschwindigkeit neuer Wegpunkte
    pub default_velocity: f64,
    /// Schrittweite für Pfeil hoch/runter
    pub velocity_step: f64,
    /// Untergrenze der Standard-Geschwindigkeit
    pub min_velocity: f64,

    // ── Ausgabe ─────────────────────────────────────────────────
    /// Wurzelverzeichnis, darunter `<map_name>/`
    pub output_root: PathBuf,
    /// Dateiname der Trajektorie
    pub trajectory_file_name: String,
    /// Dateiname der Mittellinie
    pub centerline_file_name: String,

    // ── Darstellung ─────────────────────────────────────────────
    pub point_radius_px: f32,
    pub path_width_px: f32,
    pub point_color: [f32; 4],
    pub path_color: [f32; 4],
    pub centerline_color: [f32; 4],
    pub label_color: [f32; 4],
    /// Beschriftung `i:v` an jedem Punkt
    pub show_labels: bool,
    /// Metergitter im Hintergrund
    pub show_grid: bool,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub scroll_zoom_step: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_velocity: DEFAULT_VELOCITY,
            velocity_step: VELOCITY_STEP,
            min_velocity: MIN_VELOCITY,

            output_root: PathBuf::from(OUTPUT_ROOT),
            trajectory_file_name: TRAJECTORY_FILE_NAME.to_string(),
            centerline_file_name: CENTERLINE_FILE_NAME.to_string(),

            point_radius_px: POINT_RADIUS_PX,
            path_width_px: PATH_WIDTH_PX,
            point_color: POINT_COLOR,
            path_color: PATH_COLOR,
            centerline_color: CENTERLINE_COLOR,
            label_color: LABEL_COLOR,
            show_labels: true,
            show_grid: true,
            scroll_zoom_step: SCROLL_ZOOM_STEP,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<EditorOptions>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("race_waypoint_editor"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("race_waypoint_editor.toml")
    }

    /// Korrigiert ungültige Geschwindigkeitswerte auf die Defaults.
    pub fn sanitized(mut self) -> Self {
        if !(self.min_velocity.is_finite() && self.min_velocity > 0.0) {
            log::warn!(
                "min_velocity {} ungültig, verwende {}",
                self.min_velocity,
                MIN_VELOCITY
            );
            self.min_velocity = MIN_VELOCITY;
        }
        if !(self.velocity_step.is_finite() && self.velocity_step > 0.0) {
            log::warn!(
                "velocity_step {} ungültig, verwende {}",
                self.velocity_step,
                VELOCITY_STEP
            );
            self.velocity_step = VELOCITY_STEP;
        }
        if !self.default_velocity.is_finite() {
            self.default_velocity = DEFAULT_VELOCITY;
        }
        self.default_velocity = self.default_velocity.max(self.min_velocity);
        if !(self.scroll_zoom_step.is_finite() && self.scroll_zoom_step > 1.0) {
            self.scroll_zoom_step = SCROLL_ZOOM_STEP;
        }
        self
    }

    /// Ausgabeordner für eine Map: `<output_root>/<map_name>`.
    pub fn output_dir_for(&self, map_name: &str) -> PathBuf {
        self.output_root.join(map_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let mut options = EditorOptions::default();
        options.default_velocity = 2.5;
        options.show_grid = false;
        let text = toml::to_string_pretty(&options).unwrap();
        let back: EditorOptions = toml::from_str(&text).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn test_partial_file_uses_defaults_for_missing_fields() {
        let back: EditorOptions = toml::from_str("velocity_step = 0.5\n").unwrap();
        assert_eq!(back.velocity_step, 0.5);
        assert_eq!(back.default_velocity, DEFAULT_VELOCITY);
        assert_eq!(back.trajectory_file_name, TRAJECTORY_FILE_NAME);
    }

    #[test]
    fn test_sanitize_repairs_velocity_settings() {
        let options = EditorOptions {
            default_velocity: 0.01,
            velocity_step: -1.0,
            min_velocity: 0.0,
            scroll_zoom_step: 0.5,
            ..EditorOptions::default()
        }
        .sanitized();
        assert_eq!(options.min_velocity, MIN_VELOCITY);
        assert_eq!(options.velocity_step, VELOCITY_STEP);
        assert_eq!(options.default_velocity, MIN_VELOCITY);
        assert_eq!(options.scroll_zoom_step, SCROLL_ZOOM_STEP);
    }

    #[test]
    fn test_output_dir_is_per_map() {
        let options = EditorOptions::default();
        assert_eq!(
            options.output_dir_for("levine"),
            PathBuf::from("outputs/levine")
        );
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let options = EditorOptions::load_from_file(Path::new("/nonexistent/opts.toml"));
        assert_eq!(options, EditorOptions::default());
    }
}
