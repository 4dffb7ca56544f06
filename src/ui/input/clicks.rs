//! Klick-Events: Links = Wegpunkt anhängen, Rechts = letzten entfernen.

use super::{screen_pos_to_world, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Klick-Events im Viewport.
    pub(crate) fn handle_clicks(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if ctx.response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                let world_pos =
                    screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
                events.push(AppIntent::AddPointRequested { world_pos });
            }
        } else if ctx.response.clicked_by(egui::PointerButton::Secondary) {
            events.push(AppIntent::RemoveLastPointRequested);
        }
    }
}
