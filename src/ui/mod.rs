//! UI-Komponenten: Menü, Toolbar, Status-Bar, Input-Handling, Dialoge.

pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Panels erzeugen ausschließlich `AppIntent`s; der State wird nur über
/// den Controller verändert.
pub mod menu;
pub mod status;
pub mod toolbar;

pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use menu::render_menu;
pub use status::render_status_bar;
pub use toolbar::{render_toolbar, HELP_TEXT};
