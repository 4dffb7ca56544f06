use crate::app::{AppIntent, UiState};

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Map-Auswahl-Dialog
    if ui_state.show_open_map_dialog {
        ui_state.show_open_map_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Map description", &["yaml", "yml"])
            .pick_file()
        {
            events.push(AppIntent::MapSelected { path });
        }
    }

    events
}
