//! Use-Case-Funktionen für das Laden einer Map (YAML, Raster, Mittellinie).

use crate::app::state::MapSession;
use crate::app::AppState;
use crate::core::{BackgroundMap, MapMetadata};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Öffnet den Map-Auswahl-Dialog.
pub fn request_open_map_dialog(state: &mut AppState) {
    state.ui.show_open_map_dialog = true;
}

/// Lädt eine Map-Beschreibung samt Rasterbild und Mittellinie.
///
/// Nur eine fehlerhafte YAML-Datei bricht ab. Ein nicht lesbares Bild oder
/// eine defekte Mittellinie werden gewarnt; der Editor bleibt benutzbar.
/// Bereits gesetzte Wegpunkte bleiben erhalten.
pub fn load_map(state: &mut AppState, yaml_path: PathBuf) -> Result<()> {
    log::info!("Lade Map: {}", yaml_path.display());

    let meta = match MapMetadata::load(&yaml_path) {
        Ok(meta) => meta,
        Err(e) => {
            state.ui.status_message = Some(format!("Map nicht geladen: {:#}", e));
            return Err(e);
        }
    };

    let name = meta.map_name();
    state.view.background_map = match BackgroundMap::load(&meta) {
        Ok(map) => Some(Arc::new(map)),
        Err(e) => {
            log::warn!("Map-Bild nicht geladen, fahre ohne Hintergrund fort: {:#}", e);
            None
        }
    };
    state.view.background_dirty = true;

    state.map = Some(MapSession {
        yaml_path,
        meta,
        name,
    });

    let centerline_path = state.centerline_path();
    state.view.centerline = match crate::csv::load_centerline(&centerline_path) {
        Ok(points) => points,
        Err(e) => {
            log::warn!("Mittellinie ignoriert: {:#}", e);
            None
        }
    };

    state.view.pending_fit = true;
    super::camera::fit_view(state);

    state.ui.status_message = Some(format!("Map geladen: {}", state.map_name()));
    Ok(())
}
