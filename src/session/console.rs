use std::io::{BufRead, Write};

use super::{MoveSource, Renderer};
use crate::error::{MoveError, SessionError};
use crate::game::{GameState, Player};

/// Reads moves as `x y` lines from a text stream, prompting on `output`.
pub struct ConsoleMoveSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleMoveSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleMoveSource { input, output }
    }

    fn read_coordinates(&mut self) -> Result<Option<(usize, usize)>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(parse_move(&line))
    }
}

/// Parse `"x y"`. Anything else, including negative numbers, is `None`.
fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    match parts.next() {
        Some(_) => None,
        None => Some((x, y)),
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleMoveSource<R, W> {
    fn next_move(&mut self, state: &GameState) -> Result<(usize, usize), SessionError> {
        write!(
            self.output,
            "{} Player enter your move (x y): ",
            state.current_player().seat()
        )?;
        self.output.flush()?;

        loop {
            if let Some(mv) = self.read_coordinates()? {
                writeln!(self.output)?;
                return Ok(mv);
            }
            writeln!(self.output, "illegal move try again")?;
            self.output.flush()?;
        }
    }

    fn rejected(
        &mut self,
        _state: &GameState,
        _mv: (usize, usize),
        _err: &MoveError,
    ) -> Result<(), SessionError> {
        writeln!(self.output, "illegal move try again")?;
        self.output.flush()?;
        Ok(())
    }
}

/// Prints the text diagram of the board after every move.
pub struct ConsoleRenderer<W> {
    output: W,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(output: W) -> Self {
        ConsoleRenderer { output }
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, state: &GameState) -> Result<(), SessionError> {
        writeln!(self.output, "{}", state.board())?;
        self.output.flush()?;
        Ok(())
    }

    fn announce(&mut self, winner: Player) -> Result<(), SessionError> {
        writeln!(self.output, "{} Player wins", winner.seat())?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::play;
    use std::io::Cursor;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("3 4\n"), Some((3, 4)));
        assert_eq!(parse_move("  0\t12  "), Some((0, 12)));
        assert_eq!(parse_move("-1 2"), None);
        assert_eq!(parse_move("1"), None);
        assert_eq!(parse_move("a b"), None);
        assert_eq!(parse_move("1 2 3"), None);
        assert_eq!(parse_move(""), None);
    }

    #[test]
    fn test_prompts_until_parseable() {
        let state = GameState::new(3).unwrap();
        let mut output = Vec::new();
        let mut source = ConsoleMoveSource::new(Cursor::new("oops\n-1 0\n2 1\n"), &mut output);

        assert_eq!(source.next_move(&state).unwrap(), (2, 1));
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("First Player enter your move (x y): "));
        assert_eq!(text.matches("illegal move try again").count(), 2);
    }

    #[test]
    fn test_end_of_input() {
        let state = GameState::new(3).unwrap();
        let mut source = ConsoleMoveSource::new(Cursor::new(""), Vec::new());
        assert!(matches!(
            source.next_move(&state),
            Err(SessionError::InputClosed)
        ));
    }

    #[test]
    fn test_console_game() {
        let input = "0 0\n0 0\n1 0\n0 1\n1 1\n";
        let mut prompts = Vec::new();
        let mut screen = Vec::new();

        let mut state = GameState::new(2).unwrap();
        let mut source = ConsoleMoveSource::new(Cursor::new(input), &mut prompts);
        let mut renderer = ConsoleRenderer::new(&mut screen);
        let winner = play(&mut state, &mut source, &mut renderer).unwrap();
        assert_eq!(winner, Player::Red);

        let prompts = String::from_utf8(prompts).unwrap();
        assert_eq!(prompts.matches("illegal move try again").count(), 1);
        assert!(prompts.contains("Second Player enter your move (x y): "));

        let screen = String::from_utf8(screen).unwrap();
        assert!(screen.starts_with("  0   1\n0  . - .\n"));
        assert!(screen.ends_with("Second Player wins\n"));
        assert!(screen.contains("0  O - X\n"));
    }
}
