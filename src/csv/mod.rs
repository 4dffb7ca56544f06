//! Flat-File-I/O: Trajektorien-Export und Mittellinien-Import.

pub mod reader;
pub mod writer;

pub use reader::{load_centerline, parse_centerline};
pub use writer::{save_trajectory, write_trajectory_csv};
