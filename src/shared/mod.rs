//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die von mehreren Layern (app, render, ui) gemeinsam
//! genutzt werden, ohne dass diese voneinander abhängen.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{DEFAULT_VELOCITY, MIN_VELOCITY, VELOCITY_STEP};
pub use render_scene::RenderScene;
