//! Core Hex game logic: the board-as-graph, players, turn-taking game state
//! and the text diagram of a board.

mod board;
mod player;
mod render;
mod state;

pub use board::{BoardState, Cell, HexBoard, Sentinel, MAX_EXTENT};
pub use player::Player;
pub use render::{column_header, glyph, link_line, row_prefix, CELL_SEPARATOR};
pub use state::GameState;
