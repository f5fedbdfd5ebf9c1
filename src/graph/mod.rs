//! Simple undirected graph over a fixed set of vertices, plus the
//! reachability query used for win detection.

mod search;
mod undirected;

pub use search::is_connected;
pub use undirected::{Edge, UndirectedGraph, Vertex};
