use std::collections::VecDeque;

use super::MoveSource;
use crate::error::{MoveError, SessionError};
use crate::game::GameState;

/// Plays a fixed list of moves in order, regardless of whose turn it is.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoveSource {
    moves: VecDeque<(usize, usize)>,
    rejections: usize,
}

impl ScriptedMoveSource {
    pub fn new(moves: impl IntoIterator<Item = (usize, usize)>) -> Self {
        ScriptedMoveSource {
            moves: moves.into_iter().collect(),
            rejections: 0,
        }
    }

    /// Moves not yet played
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    /// How many scripted moves were refused
    pub fn rejections(&self) -> usize {
        self.rejections
    }
}

impl MoveSource for ScriptedMoveSource {
    fn next_move(&mut self, _state: &GameState) -> Result<(usize, usize), SessionError> {
        self.moves.pop_front().ok_or(SessionError::InputClosed)
    }

    fn rejected(
        &mut self,
        _state: &GameState,
        _mv: (usize, usize),
        _err: &MoveError,
    ) -> Result<(), SessionError> {
        self.rejections += 1;
        Ok(())
    }
}
