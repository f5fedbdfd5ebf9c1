//! # Hex
//!
//! The connection game Hex on an `N x N` rhombic grid. The board is kept as
//! an undirected graph over the cells plus four sentinel vertices for the
//! sides; a stone is linked to same-colored neighbors when placed, and a
//! player has won once their two sentinels are connected.
//!
//! ## Modules
//!
//! - [`graph`]: Undirected graph and the reachability query
//! - [`game`]: Board, players, turn-taking game state, text diagram
//! - [`session`]: Move sources, renderers and the game driver loop
//! - [`ui`]: Terminal UI
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: Where log output goes for each front end
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod graph;
pub mod logging;
pub mod session;
pub mod ui;
