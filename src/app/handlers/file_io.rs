//! Handler für Datei-Operationen (Map laden, Trajektorie speichern).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Lädt eine Map-YAML inkl. Bild und Mittellinie.
pub fn load_map(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::map::load_map(state, path)
}

/// Speichert die Trajektorie in den Ausgabeordner.
pub fn save_trajectory(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::file_io::save_trajectory(state)
}
