use std::path::PathBuf;

/// Errors that can occur when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board extent must be at least 1 (got {0})")]
    InvalidExtent(usize),

    #[error("board extent {0} exceeds the maximum of {max}", max = crate::game::MAX_EXTENT)]
    ExtentTooLarge(usize),
}

/// Reasons a move is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("({x}, {y}) is outside the {extent}x{extent} board")]
    InvalidCoordinate { x: usize, y: usize, extent: usize },

    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: usize, y: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur while driving a game session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("move source closed before the game finished")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        assert_eq!(
            BoardError::InvalidExtent(0).to_string(),
            "board extent must be at least 1 (got 0)"
        );
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidCoordinate { x: 5, y: 0, extent: 3 };
        assert_eq!(err.to_string(), "(5, 0) is outside the 3x3 board");

        let err = MoveError::CellOccupied { x: 1, y: 2 };
        assert_eq!(err.to_string(), "cell (1, 2) is already occupied");
    }

    #[test]
    fn test_extent_too_large_display() {
        assert_eq!(
            BoardError::ExtentTooLarge(1001).to_string(),
            "board extent 1001 exceeds the maximum of 1000"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.size must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.size must be >= 1"
        );
    }
}
