//! Terminal UI: start screen with previous results, the 3x3 board with a
//! cursor, and the rematch prompt.

mod app;
pub mod board_widget;
mod game_view;
mod setup_view;

pub use app::{App, Screen};
