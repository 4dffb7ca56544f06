//! Pointer-Delta-Verarbeitung: Kamera-Pan.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;
use glam::DVec2;

impl InputState {
    /// Verschiebt die Kamera während eines Mittelklick-Drags.
    pub(crate) fn handle_pointer_delta(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.dragged_by(egui::PointerButton::Middle) {
            return;
        }
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        // Screen-Y zeigt nach unten, Welt-Y nach oben
        let mpp = ctx.camera.meters_per_pixel;
        events.push(AppIntent::CameraPan {
            delta: DVec2::new(
                -f64::from(pointer_delta.x) * mpp,
                f64::from(pointer_delta.y) * mpp,
            ),
        });
    }
}
