use crate::game::{
    column_header, glyph, link_line, row_prefix, Cell, GameState, HexBoard, Player, CELL_SEPARATOR,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: (usize, usize),
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state.board(), cursor, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Blue => Color::Blue,
        Player::Red => Color::Red,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: ratatui::layout::Rect) {
    let player = game_state.current_player();

    let status = match game_state.winner() {
        Some(winner) => format!("Game Over  |  {} wins", winner.name()),
        None => format!(
            "{} Player: {} ({})  |  Move {}",
            player.seat(),
            player.name(),
            glyph(player.to_cell()),
            game_state.move_count() + 1
        ),
    };
    let color = player_color(game_state.winner().unwrap_or(player));

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Hex"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &HexBoard,
    cursor: (usize, usize),
    area: ratatui::layout::Rect,
) {
    let extent = board.extent();
    let mut lines = Vec::new();

    // Column numbers along Red's top side, row numbers along Blue's left side
    lines.push(Line::from(Span::styled(
        column_header(extent),
        Style::default().fg(Color::Red),
    )));

    for y in 0..extent {
        if y > 0 {
            lines.push(Line::from(Span::styled(
                link_line(extent, y),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let mut spans = vec![Span::styled(row_prefix(y), Style::default().fg(Color::Blue))];
        for x in 0..extent {
            if x > 0 {
                spans.push(Span::styled(CELL_SEPARATOR, Style::default().fg(Color::DarkGray)));
            }
            let cell = board.cell(x, y).unwrap_or(Cell::Empty);
            let mut style = match cell {
                Cell::Empty => Style::default().fg(Color::DarkGray),
                Cell::Red => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                Cell::Blue => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            };
            if (x, y) == cursor {
                style = style.fg(Color::Cyan).add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(glyph(cell).to_string(), style));
        }
        lines.push(Line::from(spans));
    }

    let board_widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from(vec![
        Span::raw("Arrows: Move  |  Enter: Place  |  R: Restart  |  Q: Quit   "),
        Span::styled("O", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Span::raw(" left-right  "),
        Span::styled("X", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" top-bottom"),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
