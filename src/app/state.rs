//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{BackgroundMap, Camera2D, MapMetadata, WaypointPath};
use crate::shared::EditorOptions;
use glam::DVec2;
use std::path::PathBuf;
use std::sync::Arc;

/// Ordnername, wenn keine Map geladen ist.
pub const UNNAMED_MAP: &str = "unnamed";

/// Geladene Map-Beschreibung samt Herkunft.
#[derive(Debug, Clone)]
pub struct MapSession {
    /// Pfad der YAML-Datei
    pub yaml_path: PathBuf,
    /// Geprüfte Metadaten
    pub meta: MapMetadata,
    /// Map-Name (Bildname ohne Endung)
    pub name: String,
}

/// View-bezogener Zustand (Kamera, Hintergrund, Overlays)
pub struct ViewState {
    pub camera: Camera2D,
    pub viewport_size: [f32; 2],
    /// Geladenes Map-Raster (Arc für günstige Weitergabe an den Renderer)
    pub background_map: Option<Arc<BackgroundMap>>,
    /// Textur muss neu hochgeladen werden
    pub background_dirty: bool,
    /// Referenz-Mittellinie als gestricheltes Overlay
    pub centerline: Option<Vec<DVec2>>,
    /// Beim nächsten bekannten Viewport einpassen
    pub pending_fit: bool,
    pub show_labels: bool,
    pub show_grid: bool,
}

impl ViewState {
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
            background_map: None,
            background_dirty: false,
            centerline: None,
            pending_fit: false,
            show_labels: options.show_labels,
            show_grid: options.show_grid,
        }
    }

    /// Viewport-Größe als DVec2 für Kamera-Umrechnungen.
    pub fn viewport(&self) -> DVec2 {
        DVec2::new(
            f64::from(self.viewport_size[0]),
            f64::from(self.viewport_size[1]),
        )
    }
}

/// UI-bezogener Zustand (Dialoge, Statuszeile)
#[derive(Default)]
pub struct UiState {
    /// Map-Öffnen-Dialog anzeigen (wird vom Dialog-Code zurückgesetzt)
    pub show_open_map_dialog: bool,
    /// Letzte Statusmeldung für die Statusleiste
    pub status_message: Option<String>,
    /// Pfad der zuletzt geschriebenen Trajektorie
    pub last_saved_path: Option<PathBuf>,
}

/// Gesamter Anwendungszustand
pub struct AppState {
    /// Pfad + Geschwindigkeitsprofil
    pub path: WaypointPath,
    /// Geladene Map (optional)
    pub map: Option<MapSession>,
    pub view: ViewState,
    pub ui: UiState,
    pub options: EditorOptions,
    /// Überschreibt `<output_root>/<map_name>` (CLI `--output-dir`)
    pub output_dir_override: Option<PathBuf>,
    pub command_log: CommandLog,
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren Zustand mit gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            path: WaypointPath::with_velocity_limits(
                options.default_velocity,
                options.min_velocity,
            ),
            map: None,
            view: ViewState::new(&options),
            ui: UiState::default(),
            options,
            output_dir_override: None,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Name der aktuellen Map oder `unnamed`.
    pub fn map_name(&self) -> &str {
        self.map
            .as_ref()
            .map(|m| m.name.as_str())
            .unwrap_or(UNNAMED_MAP)
    }

    /// Ausgabeordner für Trajektorie und Mittellinie.
    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir_override {
            Some(dir) => dir.clone(),
            None => self.options.output_dir_for(self.map_name()),
        }
    }

    /// Zielpfad der Trajektorien-Datei.
    pub fn trajectory_path(&self) -> PathBuf {
        self.output_dir().join(&self.options.trajectory_file_name)
    }

    /// Pfad der Referenz-Mittellinie.
    pub fn centerline_path(&self) -> PathBuf {
        self.output_dir().join(&self.options.centerline_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_output_paths_without_map() {
        let state = AppState::new();
        assert_eq!(state.map_name(), UNNAMED_MAP);
        assert_eq!(
            state.trajectory_path(),
            Path::new("outputs").join("unnamed").join("traj_race_cl.csv")
        );
    }

    #[test]
    fn test_output_dir_override_wins() {
        let mut state = AppState::new();
        state.output_dir_override = Some(PathBuf::from("/tmp/custom"));
        assert_eq!(
            state.centerline_path(),
            PathBuf::from("/tmp/custom/centerline")
        );
    }

    #[test]
    fn test_options_seed_path_velocity() {
        let options = EditorOptions {
            default_velocity: 2.0,
            ..EditorOptions::default()
        };
        let state = AppState::with_options(options);
        assert_eq!(state.path.default_velocity(), 2.0);
    }
}
