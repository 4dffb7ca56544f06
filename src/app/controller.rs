//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Bricht beim ersten fehlgeschlagenen Command ab; nachfolgende Commands
    /// (z.B. `RequestExit` nach fehlgeschlagenem Speichern) laufen nicht mehr.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Pfad-Bearbeitung ===
            AppCommand::AppendWaypoint { world_pos } => {
                handlers::editing::append_waypoint(state, world_pos)
            }
            AppCommand::RemoveLastWaypoint => handlers::editing::remove_last_waypoint(state),
            AppCommand::AdjustDefaultVelocity { delta } => {
                handlers::editing::adjust_default_velocity(state, delta)
            }
            AppCommand::SetDefaultVelocity { velocity } => {
                handlers::editing::set_default_velocity(state, velocity)
            }

            // === Datei-I/O ===
            AppCommand::SaveTrajectory => handlers::file_io::save_trajectory(state)?,
            AppCommand::LoadMap { path } => handlers::file_io::load_map(state, path)?,

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),
            AppCommand::FitView => handlers::view::fit_view(state),
            AppCommand::ToggleLabels => handlers::view::toggle_labels(state),
            AppCommand::ToggleGrid => handlers::view::toggle_grid(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::RequestOpenMapDialog => handlers::dialog::request_open_map_dialog(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene<'a>(
        &self,
        state: &'a AppState,
        viewport_size: [f32; 2],
    ) -> RenderScene<'a> {
        render_scene::build(state, viewport_size)
    }
}
