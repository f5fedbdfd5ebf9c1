use super::board::{BoardState, Cell};

/// The two sides. Blue moves first and connects Left to Right; Red moves
/// second and connects Top to Bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Blue,
    Red,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }

    pub fn is_red(self) -> bool {
        self == Player::Red
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Blue => Cell::Blue,
            Player::Red => Cell::Red,
        }
    }

    /// Winner of a decided board, if any.
    pub fn from_board_state(state: BoardState) -> Option<Player> {
        match state {
            BoardState::BlueWins => Some(Player::Blue),
            BoardState::RedWins => Some(Player::Red),
            BoardState::InProgress => None,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Blue => "Blue",
            Player::Red => "Red",
        }
    }

    /// Seat label used by the console session ("First" / "Second").
    pub fn seat(self) -> &'static str {
        match self {
            Player::Blue => "First",
            Player::Red => "Second",
        }
    }
}
