//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Eingabefeld den Fokus hat, werden keine Shortcuts ausgelöst.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (
        modifiers,
        key_up_pressed,
        key_down_pressed,
        key_enter_pressed,
        key_s_pressed,
        key_o_pressed,
        key_f_pressed,
    ) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::ArrowUp),
            i.key_pressed(egui::Key::ArrowDown),
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::F),
        )
    });

    // Pfeil hoch/runter = Standard-Geschwindigkeit
    if key_up_pressed {
        events.push(AppIntent::IncreaseVelocityRequested);
    }
    if key_down_pressed {
        events.push(AppIntent::DecreaseVelocityRequested);
    }

    // Enter = Speichern und Beenden
    if key_enter_pressed && !modifiers.command {
        events.push(AppIntent::SaveAndExitRequested);
    }

    if modifiers.command && key_s_pressed {
        events.push(AppIntent::SaveRequested);
    }
    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenMapRequested);
    }

    if key_f_pressed && !modifiers.command {
        events.push(AppIntent::FitViewRequested);
    }

    events
}
