use glam::DVec2;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Linksklick im Viewport: Wegpunkt anhängen
    AddPointRequested { world_pos: DVec2 },
    /// Rechtsklick im Viewport: letzten Wegpunkt entfernen
    RemoveLastPointRequested,
    /// Pfeil hoch: Standard-Geschwindigkeit erhöhen
    IncreaseVelocityRequested,
    /// Pfeil runter: Standard-Geschwindigkeit verringern
    DecreaseVelocityRequested,
    /// Standard-Geschwindigkeit direkt setzen (Eingabefeld)
    SetDefaultVelocityRequested { velocity: f64 },
    /// Trajektorie speichern (Ctrl+S)
    SaveRequested,
    /// Trajektorie speichern und beenden (Enter)
    SaveAndExitRequested,
    /// Anwendung ohne Speichern beenden
    ExitRequested,
    /// Map-Auswahldialog öffnen
    OpenMapRequested,
    /// Map-YAML wurde im Dialog oder per CLI gewählt
    MapSelected { path: PathBuf },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: DVec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f64,
        focus_world: Option<DVec2>,
    },
    /// Ansicht auf Map (oder Wegpunkte) einpassen
    FitViewRequested,
    /// Punkt-Beschriftungen ein/aus
    ToggleLabelsRequested,
    /// Gitter ein/aus
    ToggleGridRequested,
}
