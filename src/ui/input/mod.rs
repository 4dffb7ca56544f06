//! Viewport-Input-Handling: Maus-Events, Pan, Scroll → AppIntent.
//!
//! Aufgeteilt in Submodule:
//! - `clicks`: Links-/Rechtsklick (Wegpunkt anhängen/entfernen)
//! - `pointer_delta`: Kamera-Pan per Mittelklick-Drag
//! - `zoom`: Scroll-Zoom auf Mausposition

mod clicks;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::{AppIntent, Camera2D};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera2D,
    pub options: &'a EditorOptions,
}

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Default)]
pub struct InputState {
    /// Weltposition unter dem Mauszeiger (für die Status-Bar)
    hover_world: Option<DVec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { hover_world: None }
    }

    /// Weltposition unter dem Mauszeiger im letzten Frame.
    pub fn hover_world(&self) -> Option<DVec2> {
        self.hover_world
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Tastatur-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(ui));

        self.hover_world = response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, response, viewport_size, camera));

        self.handle_clicks(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> DVec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        DVec2::new(f64::from(local.x), f64::from(local.y)),
        DVec2::new(f64::from(viewport_size[0]), f64::from(viewport_size[1])),
    )
}
