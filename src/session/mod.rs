//! Game session driver: pulls moves from a [`MoveSource`], applies them to a
//! [`GameState`] and reports progress through a [`Renderer`] until one side
//! connects its edges.

mod console;
mod scripted;

pub use console::{ConsoleMoveSource, ConsoleRenderer};
pub use scripted::ScriptedMoveSource;

use crate::error::{MoveError, SessionError};
use crate::game::{GameState, Player};

/// Something that supplies moves for the player to move.
pub trait MoveSource {
    /// Next `(x, y)` for `state.current_player()`.
    fn next_move(&mut self, state: &GameState) -> Result<(usize, usize), SessionError>;

    /// Called when the last move returned by `next_move` was refused. The
    /// turn has not passed, and the driver asks again afterwards.
    fn rejected(
        &mut self,
        _state: &GameState,
        _mv: (usize, usize),
        _err: &MoveError,
    ) -> Result<(), SessionError> {
        Ok(())
    }
}

/// Observer that displays the game as it progresses.
pub trait Renderer {
    /// Show the current position.
    fn render(&mut self, state: &GameState) -> Result<(), SessionError>;

    /// Report the winner once the game is decided.
    fn announce(&mut self, winner: Player) -> Result<(), SessionError>;
}

/// One move source per side.
pub struct Seats<B, R> {
    pub blue: B,
    pub red: R,
}

impl<B: MoveSource, R: MoveSource> MoveSource for Seats<B, R> {
    fn next_move(&mut self, state: &GameState) -> Result<(usize, usize), SessionError> {
        match state.current_player() {
            Player::Blue => self.blue.next_move(state),
            Player::Red => self.red.next_move(state),
        }
    }

    fn rejected(
        &mut self,
        state: &GameState,
        mv: (usize, usize),
        err: &MoveError,
    ) -> Result<(), SessionError> {
        match state.current_player() {
            Player::Blue => self.blue.rejected(state, mv, err),
            Player::Red => self.red.rejected(state, mv, err),
        }
    }
}

/// Drive `state` to completion and return the winner.
///
/// The position is rendered once up front and again after every accepted
/// move. Refused moves are reported back to the source and requested again.
pub fn play(
    state: &mut GameState,
    source: &mut dyn MoveSource,
    renderer: &mut dyn Renderer,
) -> Result<Player, SessionError> {
    renderer.render(state)?;

    loop {
        if let Some(winner) = state.winner() {
            tracing::info!(winner = winner.name(), moves = state.move_count(), "session finished");
            renderer.announce(winner)?;
            return Ok(winner);
        }

        let player = state.current_player();
        loop {
            let (x, y) = source.next_move(state)?;
            match state.apply_move_mut(x, y) {
                Ok(()) => break,
                Err(err) => {
                    tracing::debug!(player = player.name(), x, y, %err, "move refused");
                    source.rejected(state, (x, y), &err)?;
                }
            }
        }

        renderer.render(state)?;
    }
}
