use glam::DVec2;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Wegpunkt mit aktueller Standard-Geschwindigkeit anhängen
    AppendWaypoint { world_pos: DVec2 },
    /// Letzten Wegpunkt entfernen
    RemoveLastWaypoint,
    /// Standard-Geschwindigkeit relativ ändern
    AdjustDefaultVelocity { delta: f64 },
    /// Standard-Geschwindigkeit setzen
    SetDefaultVelocity { velocity: f64 },
    /// Trajektorie berechnen und schreiben
    SaveTrajectory,
    /// Anwendung beenden
    RequestExit,
    /// Map-Dateidialog anfordern
    RequestOpenMapDialog,
    /// Map-YAML laden (inkl. Bild und Mittellinie)
    LoadMap { path: PathBuf },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Delta verschieben
    PanCamera { delta: DVec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f64,
        focus_world: Option<DVec2>,
    },
    /// Ansicht einpassen
    FitView,
    /// Punkt-Beschriftungen umschalten
    ToggleLabels,
    /// Gitter umschalten
    ToggleGrid,
}
