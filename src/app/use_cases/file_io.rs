//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;

/// Berechnet die Trajektorie und schreibt sie in den Ausgabeordner.
///
/// Bei leerem Pfad wird keine Datei angelegt; die Meldung landet in der
/// Statusleiste und der Fehler geht an den Controller zurück.
pub fn save_trajectory(state: &mut AppState) -> anyhow::Result<()> {
    let samples = match state.path.compute_trajectory() {
        Ok(samples) => samples,
        Err(e) => {
            log::warn!("Speichern abgebrochen: {}", e);
            state.ui.status_message = Some(e.to_string());
            return Err(e.into());
        }
    };

    let path = state.trajectory_path();
    if let Err(e) = crate::csv::save_trajectory(&path, &samples) {
        state.ui.status_message = Some(format!("Speichern fehlgeschlagen: {:#}", e));
        return Err(e);
    }

    state.ui.status_message = Some(format!(
        "{} Punkte gespeichert: {}",
        state.path.len(),
        path.display()
    ));
    state.ui.last_saved_path = Some(path);
    Ok(())
}
