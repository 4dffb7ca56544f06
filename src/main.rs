//! Race Waypoint Editor.
//!
//! Interaktiver Editor für geschlossene Rennlinien auf einer Occupancy-Map.
//! Exportiert die Trajektorie (s, x, y, psi, kappa, vx, ax) als CSV.

use clap::Parser;
use eframe::egui;
use race_waypoint_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use std::path::PathBuf;

/// Kommandozeile
#[derive(Parser, Debug)]
#[command(version, about = "Interaktiver Editor für geschlossene Rennlinien")]
struct Cli {
    /// Map-Beschreibung (ROS map_server YAML)
    map_yaml: Option<PathBuf>,

    /// Ausgabeordner (statt <output_root>/<map_name>)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Pfad zur Optionen-Datei (TOML)
    #[arg(long)]
    options: Option<PathBuf>,
}

fn main() -> Result<(), eframe::Error> {
    AppRunner::run(Cli::parse())
}

struct AppRunner;

impl AppRunner {
    fn run(cli: Cli) -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Race Waypoint Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title(window_title(None)),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Race Waypoint Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new(cli)))),
        )
    }
}

fn window_title(map_name: Option<&str>) -> String {
    match map_name {
        Some(name) => format!("{} - {}", name, ui::HELP_TEXT),
        None => format!("Race Waypoint Editor - {}", ui::HELP_TEXT),
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
    /// Beim ersten Frame abzuarbeitende Intents (z.B. Map aus der CLI)
    startup_events: Vec<AppIntent>,
    current_title: String,
    /// Fenster-Schließen wurde bereits einmal abgefangen
    close_attempted: bool,
}

impl EditorApp {
    fn new(cli: Cli) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = cli.options.unwrap_or_else(EditorOptions::config_path);
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(editor_options);
        state.output_dir_override = cli.output_dir;

        let startup_events = cli
            .map_yaml
            .map(|path| vec![AppIntent::MapSelected { path }])
            .unwrap_or_default();

        Self {
            state,
            controller: AppController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
            startup_events,
            current_title: window_title(None),
            close_attempted: false,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = std::mem::take(&mut self.startup_events);
        if let Some(intent) = self.intercept_close_request(ctx) {
            events.push(intent);
        }
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.sync_background_upload(ctx);
        self.sync_window_title(ctx);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state, self.input.hover_world());
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(205)))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.options,
                ));

                let painter = ui.painter_at(rect);
                let scene = self
                    .controller
                    .build_render_scene(&self.state, viewport_size);
                self.renderer.render_scene(&painter, rect, &scene);

                if self.state.map.is_none() && self.state.path.is_empty() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "No map loaded. Use File → Open map",
                        egui::FontId::proportional(20.0),
                        egui::Color32::DARK_GRAY,
                    );
                }
            });

        events
    }

    /// Fängt das Schließen über den Fensterrahmen ab und leitet es durch
    /// den regulären Exit-Flow, damit gesetzte Punkte gespeichert werden.
    ///
    /// Schlägt das Speichern fehl, schließt ein zweiter Versuch ohne Speichern.
    fn intercept_close_request(&mut self, ctx: &egui::Context) -> Option<AppIntent> {
        if !ctx.input(|i| i.viewport().close_requested()) {
            return None;
        }
        if self.close_attempted || self.state.path.is_empty() {
            log::info!("Fenster wird geschlossen");
            return None;
        }
        self.close_attempted = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        Some(AppIntent::ExitRequested)
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn sync_background_upload(&mut self, ctx: &egui::Context) {
        if !self.state.view.background_dirty {
            return;
        }
        self.state.view.background_dirty = false;

        if let Some(bg_map) = self.state.view.background_map.as_deref() {
            self.renderer.set_background(ctx, bg_map);
            log::info!("Background-Map in Renderer hochgeladen");
        } else {
            self.renderer.clear_background();
            log::info!("Background-Map aus Renderer entfernt");
        }
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = window_title(self.state.map.as_ref().map(|m| m.name.as_str()));
        if title != self.current_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.current_title = title;
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || self.state.should_exit || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }
}
