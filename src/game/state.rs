use super::{HexBoard, Player};
use crate::error::{BoardError, MoveError};

/// A game in progress: the board plus whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: HexBoard,
    current_player: Player,
    move_count: usize,
    last_move: Option<(usize, usize)>,
}

impl GameState {
    /// Create initial game state on an empty board
    pub fn new(extent: usize) -> Result<Self, BoardError> {
        Ok(GameState {
            board: HexBoard::new(extent)?,
            current_player: Player::Blue, // first player
            move_count: 0,
            last_move: None,
        })
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &HexBoard {
        &self.board
    }

    /// Winner, once the board is decided
    pub fn winner(&self) -> Option<Player> {
        Player::from_board_state(self.board.state())
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.board.state().is_terminal()
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Empty cells, row-major. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        if self.is_terminal() {
            return Vec::new();
        }

        self.board
            .cells()
            .filter(|&(_, _, cell)| cell == super::Cell::Empty)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// Place the current player's stone and pass the turn.
    pub fn apply_move_mut(&mut self, x: usize, y: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.try_move(x, y, self.current_player.is_red())?;
        self.move_count += 1;
        self.last_move = Some((x, y));
        self.current_player = self.current_player.other();

        Ok(())
    }
}
