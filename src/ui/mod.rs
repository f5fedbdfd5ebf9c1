//! Terminal UI for playing Hex with two players at one keyboard.

mod app;
mod game_view;

pub use app::App;
