//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}

/// Öffnet den Map-Dateidialog.
pub fn request_open_map_dialog(state: &mut AppState) {
    use_cases::map::request_open_map_dialog(state);
}
