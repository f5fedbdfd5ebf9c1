use crate::error::{BoardError, MoveError};
use crate::graph::{self, UndirectedGraph, Vertex};

/// Occupancy of a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Red,
    Blue,
    Empty,
}

/// Outcome of the board as of the last move. Both wins are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardState {
    RedWins,
    BlueWins,
    InProgress,
}

impl BoardState {
    pub fn is_terminal(self) -> bool {
        self != BoardState::InProgress
    }
}

/// The four synthetic vertices standing for the board's sides.
///
/// They occupy the last four vertex ids, in this order. Top and Bottom are
/// Red's goal sides, Left and Right are Blue's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    Top,
    Bottom,
    Left,
    Right,
}

impl Sentinel {
    pub const ALL: [Sentinel; 4] = [
        Sentinel::Top,
        Sentinel::Bottom,
        Sentinel::Left,
        Sentinel::Right,
    ];

    /// Fixed color of the sentinel
    pub fn cell(self) -> Cell {
        match self {
            Sentinel::Top | Sentinel::Bottom => Cell::Red,
            Sentinel::Left | Sentinel::Right => Cell::Blue,
        }
    }

    fn offset(self) -> usize {
        match self {
            Sentinel::Top => 0,
            Sentinel::Bottom => 1,
            Sentinel::Left => 2,
            Sentinel::Right => 3,
        }
    }
}

/// Largest extent a board can be built with.
pub const MAX_EXTENT: usize = 1000;

/// Hex board of extent `N`: an `N x N` rhombus of cells plus four sentinels.
///
/// Cell `(x, y)` is vertex `y * N + x`. Placing a stone links it to every
/// already-placed neighbor (or sentinel) of the same color, so each player's
/// chains are exactly the connected components of the graph. Blue wins once
/// Left reaches Right, Red once Top reaches Bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBoard {
    extent: usize,
    graph: UndirectedGraph,
    cells: Vec<Cell>,
    state: BoardState,
}

impl HexBoard {
    /// Create an empty board of the given extent, `1..=MAX_EXTENT`.
    pub fn new(extent: usize) -> Result<Self, BoardError> {
        if extent == 0 {
            return Err(BoardError::InvalidExtent(extent));
        }
        if extent > MAX_EXTENT {
            return Err(BoardError::ExtentTooLarge(extent));
        }
        let vertex_count = extent * extent + Sentinel::ALL.len();

        let mut cells = vec![Cell::Empty; vertex_count];
        for sentinel in Sentinel::ALL {
            cells[extent * extent + sentinel.offset()] = sentinel.cell();
        }

        Ok(HexBoard {
            extent,
            graph: UndirectedGraph::new(vertex_count),
            cells,
            state: BoardState::InProgress,
        })
    }

    /// Side length of the grid
    pub fn extent(&self) -> usize {
        self.extent
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    /// Read-only view of the connectivity graph.
    pub fn graph(&self) -> &UndirectedGraph {
        &self.graph
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Vertex id of a sentinel.
    pub fn sentinel(&self, sentinel: Sentinel) -> Vertex {
        self.extent * self.extent + sentinel.offset()
    }

    /// Vertex id of cell `(x, y)`, or `None` if off the board.
    pub fn vertex(&self, x: usize, y: usize) -> Option<Vertex> {
        (x < self.extent && y < self.extent).then(|| y * self.extent + x)
    }

    /// State of cell `(x, y)`, or `None` if off the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.vertex(x, y).map(|v| self.cells[v])
    }

    /// Every grid cell in row-major order as `(x, y, cell)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let extent = self.extent;
        self.cells[..extent * extent]
            .iter()
            .enumerate()
            .map(move |(v, &cell)| (v % extent, v / extent, cell))
    }

    /// True if every grid cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, _, cell)| cell != Cell::Empty)
    }

    /// Whether two vertices are joined by a chain of same-colored stones.
    pub fn is_connected(&self, a: Vertex, b: Vertex) -> bool {
        graph::is_connected(&self.graph, a, b)
    }

    /// Place a stone. Returns false, leaving the board untouched, if the
    /// coordinates are off the board or the cell is occupied.
    pub fn make_move(&mut self, x: usize, y: usize, is_red: bool) -> bool {
        self.try_move(x, y, is_red).is_ok()
    }

    /// Place a stone, reporting why a move was refused.
    ///
    /// The board does not refuse moves once the game is decided; the state
    /// simply stays terminal. Callers stop requesting moves at that point.
    pub fn try_move(&mut self, x: usize, y: usize, is_red: bool) -> Result<(), MoveError> {
        let Some(vertex) = self.vertex(x, y) else {
            tracing::debug!(x, y, extent = self.extent, "rejected move off the board");
            return Err(MoveError::InvalidCoordinate {
                x,
                y,
                extent: self.extent,
            });
        };
        if self.cells[vertex] != Cell::Empty {
            tracing::debug!(x, y, "rejected move on occupied cell");
            return Err(MoveError::CellOccupied { x, y });
        }

        self.cells[vertex] = if is_red { Cell::Red } else { Cell::Blue };
        let linked = self.link(x, y);
        tracing::debug!(x, y, is_red, linked, "placed stone");

        self.check_board_state();
        Ok(())
    }

    /// Candidate neighbors of `(x, y)`: the six hex neighbors, with sides of
    /// the board replaced by the matching sentinel.
    fn candidate_neighbors(&self, x: usize, y: usize) -> Vec<Vertex> {
        let last = self.extent - 1;
        let index = |x: usize, y: usize| y * self.extent + x;
        let mut candidates = Vec::with_capacity(6);

        if x == 0 {
            candidates.push(self.sentinel(Sentinel::Left));
        } else {
            candidates.push(index(x - 1, y));
            if y < last {
                candidates.push(index(x - 1, y + 1));
            }
        }

        if x == last {
            candidates.push(self.sentinel(Sentinel::Right));
        } else {
            candidates.push(index(x + 1, y));
            if y > 0 {
                candidates.push(index(x + 1, y - 1));
            }
        }

        if y == 0 {
            candidates.push(self.sentinel(Sentinel::Top));
        } else {
            candidates.push(index(x, y - 1));
        }

        if y == last {
            candidates.push(self.sentinel(Sentinel::Bottom));
        } else {
            candidates.push(index(x, y + 1));
        }

        candidates
    }

    /// Link the stone at `(x, y)` to same-colored candidates. Returns the
    /// number of edges added.
    fn link(&mut self, x: usize, y: usize) -> usize {
        let vertex = y * self.extent + x;
        let color = self.cells[vertex];
        if color == Cell::Empty {
            return 0;
        }

        let mut linked = 0;
        for neighbor in self.candidate_neighbors(x, y) {
            if self.cells[neighbor] == color && self.graph.add_edge(vertex, neighbor) {
                linked += 1;
            }
        }
        linked
    }

    /// Blue's connection is tested before Red's.
    fn check_board_state(&mut self) {
        if self.state.is_terminal() {
            return;
        }

        if self.is_connected(self.sentinel(Sentinel::Left), self.sentinel(Sentinel::Right)) {
            self.state = BoardState::BlueWins;
        } else if self.is_connected(self.sentinel(Sentinel::Top), self.sentinel(Sentinel::Bottom))
        {
            self.state = BoardState::RedWins;
        }

        if self.state.is_terminal() {
            tracing::info!(state = ?self.state, "game decided");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn board(extent: usize) -> HexBoard {
        HexBoard::new(extent).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        for extent in 1..=8 {
            let board = board(extent);
            assert_eq!(board.state(), BoardState::InProgress);
            assert_eq!(board.edge_count(), 0);
            assert_eq!(board.graph().vertex_count(), extent * extent + 4);
            assert_eq!(board.cells().count(), extent * extent);
            assert!(board.cells().all(|(_, _, cell)| cell == Cell::Empty));
        }
    }

    #[test]
    fn test_zero_extent_rejected() {
        assert_eq!(HexBoard::new(0), Err(BoardError::InvalidExtent(0)));
    }

    #[test]
    fn test_huge_extent_rejected() {
        for extent in [MAX_EXTENT + 1, 1 << 20, usize::MAX] {
            assert_eq!(HexBoard::new(extent), Err(BoardError::ExtentTooLarge(extent)));
        }
    }

    #[test]
    fn test_blue_connection_checked_before_red() {
        let mut board = board(3);
        let left = board.sentinel(Sentinel::Left);
        let right = board.sentinel(Sentinel::Right);
        let top = board.sentinel(Sentinel::Top);
        let bottom = board.sentinel(Sentinel::Bottom);
        assert!(board.graph.add_edge(left, right));
        assert!(board.graph.add_edge(top, bottom));

        board.check_board_state();
        assert_eq!(board.state(), BoardState::BlueWins);
    }

    #[test]
    fn test_sentinel_layout() {
        let board = board(3);
        assert_eq!(board.sentinel(Sentinel::Top), 9);
        assert_eq!(board.sentinel(Sentinel::Bottom), 10);
        assert_eq!(board.sentinel(Sentinel::Left), 11);
        assert_eq!(board.sentinel(Sentinel::Right), 12);
        assert_eq!(board.vertex(2, 1), Some(5));
        assert_eq!(board.vertex(3, 0), None);
        assert_eq!(board.cell(0, 3), None);
    }

    #[test]
    fn test_make_move() {
        let mut board = board(3);
        assert!(board.make_move(1, 2, true));
        assert_eq!(board.cell(1, 2), Some(Cell::Red));
        assert!(board.make_move(2, 0, false));
        assert_eq!(board.cell(2, 0), Some(Cell::Blue));
        assert_eq!(board.state(), BoardState::InProgress);
    }

    #[test]
    fn test_rejected_moves_leave_board_unchanged() {
        let mut board = board(3);
        board.make_move(1, 1, true);
        board.make_move(0, 0, false);
        let before = board.clone();

        for _ in 0..3 {
            assert!(!board.make_move(3, 0, true));
            assert!(!board.make_move(0, 3, false));
            assert!(!board.make_move(usize::MAX, usize::MAX, true));
            assert!(!board.make_move(1, 1, false));
            assert!(!board.make_move(0, 0, true));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_try_move_reports_reason() {
        let mut board = board(2);
        assert_eq!(
            board.try_move(2, 0, true),
            Err(MoveError::InvalidCoordinate { x: 2, y: 0, extent: 2 })
        );
        board.try_move(1, 0, true).unwrap();
        assert_eq!(
            board.try_move(1, 0, false),
            Err(MoveError::CellOccupied { x: 1, y: 0 })
        );
    }

    #[test]
    fn test_links_only_same_color() {
        let mut board = board(3);
        board.make_move(1, 1, true);
        assert_eq!(board.edge_count(), 0);

        // Blue next to Red: no edge
        board.make_move(0, 1, false);
        assert_eq!(board.edge_count(), 1); // to the Left sentinel only
        assert!(board.graph().are_adjacent(3, board.sentinel(Sentinel::Left)));
        assert!(!board.graph().are_adjacent(3, 4));

        // Red above: one edge to (1, 1) and one to Top
        board.make_move(1, 0, true);
        assert!(board.graph().are_adjacent(1, 4));
        assert!(board.graph().are_adjacent(1, board.sentinel(Sentinel::Top)));
        assert_eq!(board.edge_count(), 3);
    }

    #[test]
    fn test_hex_neighborhood() {
        // All six neighbors of the center of a 3x3 board are Red
        let mut board = board(3);
        for (x, y) in [(0, 1), (0, 2), (2, 1), (2, 0), (1, 0), (1, 2)] {
            board.make_move(x, y, true);
        }
        let before = board.edge_count();
        board.make_move(1, 1, true);
        assert_eq!(board.edge_count() - before, 6);

        // The other two corners are not neighbors of the center
        assert!(!board.graph().are_adjacent(4, 0));
        assert!(!board.graph().are_adjacent(4, 8));
    }

    #[test]
    fn test_two_by_two_red_wins() {
        let mut board = board(2);
        assert!(board.make_move(0, 0, true));
        assert_eq!(board.state(), BoardState::InProgress);
        assert!(board.make_move(1, 1, true));
        assert_eq!(board.state(), BoardState::InProgress);
        assert!(board.make_move(0, 1, true));
        assert_eq!(board.state(), BoardState::RedWins);
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = board(1);
        assert!(board.make_move(0, 0, true));
        assert_eq!(board.state(), BoardState::RedWins);

        let mut board = HexBoard::new(1).unwrap();
        assert!(board.make_move(0, 0, false));
        assert_eq!(board.state(), BoardState::BlueWins);
    }

    #[test]
    fn test_blue_row_wins() {
        let mut board = board(4);
        for x in 0..4 {
            assert_eq!(board.state(), BoardState::InProgress);
            board.make_move(x, 2, false);
        }
        assert_eq!(board.state(), BoardState::BlueWins);
    }

    #[test]
    fn test_anti_diagonal_is_not_connected() {
        // (x, y) and (x + 1, y + 1) are not neighbors on this grid
        let mut board = board(3);
        for i in 0..3 {
            board.make_move(i, i, true);
        }
        assert_eq!(board.state(), BoardState::InProgress);
        assert_eq!(board.edge_count(), 2);
    }

    #[test]
    fn test_skewed_diagonal_connects() {
        // (x, y) touches (x - 1, y + 1)
        let mut board = board(3);
        board.make_move(2, 0, false);
        board.make_move(1, 1, false);
        board.make_move(0, 2, false);
        assert_eq!(board.state(), BoardState::BlueWins);
    }

    #[test]
    fn test_full_board_red_saturation() {
        for extent in 1..=12 {
            let mut board = board(extent);
            for y in 0..extent {
                for x in 0..extent {
                    assert!(board.make_move(x, y, true));
                }
            }
            assert_eq!(board.state(), BoardState::RedWins);
            assert!(board.is_full());
            assert!(board.is_connected(
                board.sentinel(Sentinel::Top),
                board.sentinel(Sentinel::Bottom)
            ));
            // 3N^2 - 4N + 1 links between cells, plus N each to Top and Bottom
            let interior = 3 * extent * extent + 1 - 4 * extent;
            assert_eq!(board.edge_count(), interior + 2 * extent);
        }
    }

    #[test]
    fn test_state_is_monotonic() {
        let mut board = board(3);
        for y in 0..3 {
            board.make_move(0, y, true);
        }
        assert_eq!(board.state(), BoardState::RedWins);

        for x in 1..3 {
            for y in 0..3 {
                board.make_move(x, y, false);
                assert_eq!(board.state(), BoardState::RedWins);
            }
        }
    }

    #[test]
    fn test_random_fill_always_has_winner() {
        let mut rng = StdRng::seed_from_u64(7);
        for extent in 1..=9 {
            for _ in 0..20 {
                let mut board = board(extent);
                let mut order: Vec<(usize, usize)> = (0..extent)
                    .flat_map(|y| (0..extent).map(move |x| (x, y)))
                    .collect();
                order.shuffle(&mut rng);

                for (turn, &(x, y)) in order.iter().enumerate() {
                    assert!(board.make_move(x, y, turn % 2 == 1));
                }
                // Hex cannot end in a draw
                assert!(board.state().is_terminal());

                let blue = board.is_connected(
                    board.sentinel(Sentinel::Left),
                    board.sentinel(Sentinel::Right),
                );
                let red = board.is_connected(
                    board.sentinel(Sentinel::Top),
                    board.sentinel(Sentinel::Bottom),
                );
                assert!(blue != red);
            }
        }
    }

    #[test]
    fn test_edges_only_join_equal_colors() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut board = board(7);
        let mut order: Vec<(usize, usize)> = (0..7)
            .flat_map(|y| (0..7).map(move |x| (x, y)))
            .collect();
        order.shuffle(&mut rng);
        for (turn, &(x, y)) in order.iter().enumerate() {
            board.make_move(x, y, turn % 2 == 0);
        }

        for v in 0..board.graph().vertex_count() {
            for n in board.graph().neighbors(v) {
                assert_eq!(board.cells[v], board.cells[n]);
                assert_ne!(board.cells[v], Cell::Empty);
            }
        }
    }
}
