//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, NameEntry, Screen};
use crate::games::tictactoe::{Coordinate, Mark, SIZE, Snapshot, Token};

/// Draws the whole screen from the application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board or name form
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let help = match app.screen() {
        Screen::Names(entry) => {
            draw_names(frame, chunks[1], entry);
            "Tab: switch field | Enter: next/start | Esc: quit"
        }
        Screen::Playing(game) => {
            draw_board(frame, chunks[1], &game.board().snapshot(), app.cursor());
            "Arrows + Enter or 1-9: move | R: new game when over | Q: quit"
        }
    };

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_names(frame: &mut Frame, area: Rect, entry: &NameEntry) {
    let form = centered(area, 40, 6);
    let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).split(form);

    let labels = ["Player One (X)", "Player Two (O)"];
    for (i, (label, text)) in labels.iter().zip(entry.fields()).enumerate() {
        let style = if i == entry.focus() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let field = Paragraph::new(text.as_str())
            .block(Block::default().borders(Borders::ALL).title(*label))
            .style(style);
        frame.render_widget(field, rows[i]);
    }
}

const CELL_WIDTH: u16 = 5;

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Coordinate) {
    let size = SIZE as u16;
    let board_area = centered(area, CELL_WIDTH * size + size - 1, size * 2 - 1);
    let grid = Style::default().fg(Color::DarkGray);
    let separator = vec!["─".repeat(CELL_WIDTH as usize); SIZE].join("┼");

    let mut lines = Vec::with_capacity(SIZE * 2 - 1);
    for (row, marks) in snapshot.iter().enumerate() {
        if row > 0 {
            lines.push(Line::styled(separator.clone(), grid));
        }
        let mut spans = Vec::with_capacity(SIZE * 2 - 1);
        for (col, mark) in marks.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", grid));
            }
            let selected = cursor.row() == row && cursor.col() == col;
            spans.push(cell_span(*mark, selected));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), board_area);
}

fn cell_span(mark: Mark, selected: bool) -> Span<'static> {
    let style = mark.token().map(token_style).unwrap_or_default();
    let style = if selected {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };
    Span::styled(format!("  {}  ", mark), style)
}

fn token_style(token: Token) -> Style {
    let color = match token {
        Token::X => Color::Blue,
        Token::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_name_form_renders_labels() {
        let app = App::new(Some("Ada".into()), None, false);
        let text = screen_text(&app);
        assert!(text.contains("Player One (X)"));
        assert!(text.contains("Ada"));
    }

    #[test]
    fn test_board_shows_marks_and_status() {
        let mut app = App::new(Some("Ada".into()), Some("Grace".into()), false);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('9'));

        let text = screen_text(&app);
        assert!(text.contains("  X  │     │"));
        assert!(text.contains("│  O  "));
        assert!(text.contains("Ada's turn (X)"));
    }

    #[test]
    fn test_tokens_styled_and_cursor_highlighted() {
        let mut app = App::new(None, None, false);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('5'));

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let buffer = terminal.backend().buffer();

        let center = buffer
            .content()
            .iter()
            .find(|cell| cell.symbol() == "X" && cell.fg == Color::Blue)
            .expect("X drawn in its token colour");
        assert!(center.modifier.contains(Modifier::BOLD | Modifier::REVERSED));
    }
}
