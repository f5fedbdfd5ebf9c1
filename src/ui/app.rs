use crate::error::{BoardError, MoveError};
use crate::game::GameState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    cursor: (usize, usize),
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(extent: usize) -> Result<Self, BoardError> {
        Ok(App {
            game_state: GameState::new(extent)?,
            cursor: (extent / 2, extent / 2), // Start in middle
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        let last = self.game_state.board().extent() - 1;
        let (x, y) = self.cursor;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => self.cursor.0 = x.saturating_sub(1),
            KeyCode::Right => self.cursor.0 = (x + 1).min(last),
            KeyCode::Up => self.cursor.1 = y.saturating_sub(1),
            KeyCode::Down => self.cursor.1 = (y + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_stone();
            }
            KeyCode::Char('r') => {
                // Reset game on a board of the same size
                let extent = last + 1;
                if let Ok(state) = GameState::new(extent) {
                    self.game_state = state;
                    self.cursor = (extent / 2, extent / 2);
                    self.message = Some("New game started!".to_string());
                }
            }
            _ => {}
        }
    }

    /// Place the current player's stone under the cursor
    fn place_stone(&mut self) {
        let (x, y) = self.cursor;

        match self.game_state.apply_move_mut(x, y) {
            Ok(()) => {
                if let Some(winner) = self.game_state.winner() {
                    tracing::info!(winner = winner.name(), "game over");
                    self.message = Some(format!("{} Player ({}) wins!", winner.seat(), winner.name()));
                }
            }
            Err(MoveError::CellOccupied { .. }) => {
                self.message = Some("Cell is already taken!".to_string());
            }
            Err(MoveError::InvalidCoordinate { .. }) => {
                self.message = Some("Invalid cell!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.cursor, &self.message);
    }
}
