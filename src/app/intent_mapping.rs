//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::AddPointRequested { world_pos } => {
            vec![AppCommand::AppendWaypoint { world_pos }]
        }
        AppIntent::RemoveLastPointRequested => vec![AppCommand::RemoveLastWaypoint],
        AppIntent::IncreaseVelocityRequested => vec![AppCommand::AdjustDefaultVelocity {
            delta: state.options.velocity_step,
        }],
        AppIntent::DecreaseVelocityRequested => vec![AppCommand::AdjustDefaultVelocity {
            delta: -state.options.velocity_step,
        }],
        AppIntent::SetDefaultVelocityRequested { velocity } => {
            vec![AppCommand::SetDefaultVelocity { velocity }]
        }
        AppIntent::SaveRequested => vec![AppCommand::SaveTrajectory],
        // Beenden nur nach erfolgreichem Speichern: der Controller bricht beim ersten Fehler ab
        AppIntent::SaveAndExitRequested => {
            vec![AppCommand::SaveTrajectory, AppCommand::RequestExit]
        }
        // Gesetzte Punkte gehen beim Beenden nicht verloren
        AppIntent::ExitRequested if !state.path.is_empty() => {
            vec![AppCommand::SaveTrajectory, AppCommand::RequestExit]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OpenMapRequested => vec![AppCommand::RequestOpenMapDialog],
        AppIntent::MapSelected { path } => vec![AppCommand::LoadMap { path }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::FitViewRequested => vec![AppCommand::FitView],
        AppIntent::ToggleLabelsRequested => vec![AppCommand::ToggleLabels],
        AppIntent::ToggleGridRequested => vec![AppCommand::ToggleGrid],
    }
}
