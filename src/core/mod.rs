//! Core-Domänentypen: Pfad, Trajektorien-Geometrie, Map, Kamera.

pub mod background_map;
pub mod camera;
pub mod map_meta;
/// Trajektorien-Berechnung (Bogenlänge, Heading, Krümmung)
///
/// Reine Funktionen ohne Seiteneffekte; Export über `csv::writer`.
pub mod trajectory;
pub mod waypoint_path;

pub use background_map::{BackgroundMap, WorldBounds};
pub use camera::Camera2D;
pub use map_meta::MapMetadata;
pub use trajectory::{compute, TrajectoryError, TrajectorySample};
pub use waypoint_path::WaypointPath;
