//! Race Waypoint Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod csv;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, MapSession, UiState, ViewState};
pub use core::{
    compute, BackgroundMap, Camera2D, MapMetadata, TrajectoryError, TrajectorySample,
    WaypointPath, WorldBounds,
};
pub use csv::{load_centerline, parse_centerline, save_trajectory, write_trajectory_csv};
pub use shared::{EditorOptions, RenderScene};
