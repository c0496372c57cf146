//! TUI rendering with ratatui
//!
//! Home screen, board, keyboard and end-of-game modals.

use super::app::{App, MessageStyle, Overlay, Screen};
use crate::core::{CellColor, KeyHint};
use crate::engine::{KEYBOARD_ROWS, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::Home => render_home(f, app, f.area()),
        Screen::Game => render_game(f, app, f.area()),
    }

    if app.screen == Screen::Game
        && let Some(overlay) = app.overlay
    {
        render_overlay(f, app, overlay);
    }
}

/// Style for a board cell
#[must_use]
pub fn cell_style(color: CellColor, active: bool) -> Style {
    let base = match color {
        CellColor::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        CellColor::PresentElsewhere => Style::default().fg(Color::Black).bg(Color::Yellow),
        CellColor::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellColor::Default => Style::default().fg(Color::White),
    };
    let base = base.add_modifier(Modifier::BOLD);

    if active {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

/// Style for a keyboard key
#[must_use]
pub fn key_style(hint: KeyHint) -> Style {
    match hint {
        KeyHint::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        KeyHint::PresentElsewhere => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        KeyHint::Absent => Style::default().fg(Color::DarkGray),
        KeyHint::Unused => Style::default().fg(Color::White).bg(Color::Rgb(60, 60, 60)),
    }
}

/// One line per grid row, with a blank line between rows
#[must_use]
pub fn board_lines(app: &App) -> Vec<Line<'static>> {
    let game = &app.game;
    let mut lines = Vec::with_capacity(game.max_tries() * 2);

    for (row, cells) in game.grid().rows().enumerate() {
        let mut spans = Vec::with_capacity(cells.len() * 2);
        for (col, cell) in cells.iter().enumerate() {
            let label = cell.map_or_else(
                || "   ".to_string(),
                |letter| format!(" {} ", char::from(letter).to_ascii_uppercase()),
            );
            let style = cell_style(game.cell_color(row, col), game.is_active_cell(row, col));
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        spans.pop();

        if row > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// QWERTY rows tinted by keyboard hints; ENTER and CLEAR flank the last row
#[must_use]
pub fn keyboard_lines(app: &App) -> Vec<Line<'static>> {
    let hints = app.game.keyboard();
    let last = KEYBOARD_ROWS.len() - 1;

    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = Vec::new();
            if i == last {
                spans.push(Span::styled(" ENTER ", key_style(KeyHint::Unused)));
                spans.push(Span::raw(" "));
            }
            for letter in row.chars() {
                spans.push(Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    key_style(hints.hint(letter)),
                ));
                spans.push(Span::raw(" "));
            }
            if i == last {
                spans.push(Span::styled(" CLEAR ", key_style(KeyHint::Unused)));
            } else {
                spans.pop();
            }
            Line::from(spans)
        })
        .collect()
}

fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .split(area);

    let content = vec![
        Line::from(Span::styled(
            "W O R D L E",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Guess the hidden word in {} tries.",
            app.config.max_tries
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter ", key_style(KeyHint::Correct)),
            Span::raw(" play    "),
            Span::styled(" q ", key_style(KeyHint::Unused)),
            Span::raw(" quit"),
        ]),
    ];

    let home = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(home, centered_rect(60, chunks[1]));
}

fn render_game(f: &mut Frame, app: &App, area: Rect) {
    let board_height = u16::try_from(app.game.max_tries() * 2 + 1).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Message
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(f, chunks[0]);

    let board = Paragraph::new(board_lines(app)).alignment(Alignment::Center);
    f.render_widget(board, chunks[1]);

    let keyboard = Paragraph::new(keyboard_lines(app))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(keyboard, chunks[2]);

    render_message(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let Some(message) = &app.message else {
        return;
    };
    let style = match message.style {
        MessageStyle::Info => Style::default().fg(Color::White),
        MessageStyle::Success => Style::default().fg(Color::Green),
        MessageStyle::Error => Style::default().fg(Color::Red),
    };

    let paragraph = Paragraph::new(message.text.as_str())
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let help = match game.status() {
        Status::Playing => format!(
            "Try {}/{} | Enter: submit | Backspace: clear | Esc: menu | Ctrl-C: quit",
            game.completed_rows() + 1,
            game.max_tries()
        ),
        Status::Won => "n: new game | s: share | Esc: menu | q: quit".to_string(),
        Status::Lost => "n: new game | Esc: menu | q: quit".to_string(),
    };

    let status = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

fn render_overlay(f: &mut Frame, app: &App, overlay: Overlay) {
    let (title, color, mut lines) = match overlay {
        Overlay::Won => (
            " Hooray! ",
            Color::Green,
            vec![
                Line::from(format!(
                    "You won in {}/{}!",
                    app.game.completed_rows(),
                    app.game.max_tries()
                )),
                Line::from(""),
                Line::from("s: share | n: new game | Esc: close | q: quit"),
            ],
        ),
        Overlay::Lost => (
            " Meh ",
            Color::Red,
            vec![
                Line::from("Try again tomorrow!"),
                Line::from(format!(
                    "The word was {}",
                    app.game.word().text().to_uppercase()
                )),
                Line::from(""),
                Line::from("n: new game | Esc: close | q: quit"),
            ],
        ),
        Overlay::Share => {
            let text = app.shared.clone().unwrap_or_default();
            let mut lines: Vec<Line> = text.lines().map(|l| Line::from(l.to_string())).collect();
            lines.push(Line::from(""));
            lines.push(Line::from("Printed to your terminal when you quit"));
            lines.push(Line::from("Esc: back"));
            (" Share your score ", Color::Cyan, lines)
        }
    };
    lines.insert(0, Line::from(""));

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_popup(70, height, f.area());
    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area)[1]
}

fn centered_popup(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    centered_rect(percent_x, vertical[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GameConfig, MAX_TRIES};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        App::new(vec!["hello".to_string()], GameConfig::default()).unwrap()
    }

    fn press(app: &mut App, codes: &str) {
        for c in codes.chars() {
            let code = match c {
                '\n' => KeyCode::Enter,
                '\u{1b}' => KeyCode::Esc,
                c => KeyCode::Char(c),
            };
            app.handle_key(code, KeyModifiers::NONE);
        }
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn tallest_board_draws_in_small_terminal() {
        let config = GameConfig::default().with_max_tries(MAX_TRIES);
        let mut app = App::new(vec!["hello".to_string()], config).unwrap();
        press(&mut app, "\nworld\n");
        assert_eq!(app.game.completed_rows(), 1);
        assert!(!draw(&app).trim().is_empty());
    }

    #[test]
    fn home_screen_shows_title() {
        let text = draw(&app());
        assert!(text.contains("W O R D L E"));
        assert!(text.contains("6 tries"));
    }

    #[test]
    fn game_screen_shows_board_and_keyboard() {
        let mut app = app();
        press(&mut app, "\nwor");
        let text = draw(&app);
        assert!(text.contains(" W   O   R "));
        assert!(text.contains("ENTER"));
        assert!(text.contains("CLEAR"));
        assert!(text.contains("Try 1/6"));
    }

    #[test]
    fn win_modal_is_drawn() {
        let mut app = app();
        press(&mut app, "\nhello\n");
        let text = draw(&app);
        assert!(text.contains("Hooray!"));
        assert!(text.contains("You won in 1/6!"));
    }

    #[test]
    fn loss_modal_reveals_word() {
        let mut app = app();
        press(&mut app, "\n");
        for _ in 0..6 {
            press(&mut app, "world\n");
        }
        let text = draw(&app);
        assert!(text.contains("The word was HELLO"));
    }

    #[test]
    fn board_has_row_per_try() {
        let app = app();
        // rows plus blank separators
        assert_eq!(board_lines(&app).len(), 11);
        assert_eq!(keyboard_lines(&app).len(), 3);
    }

    #[test]
    fn active_cell_is_highlighted() {
        let style = cell_style(CellColor::Default, true);
        assert!(style.add_modifier.contains(Modifier::REVERSED));
        assert!(!cell_style(CellColor::Correct, false)
            .add_modifier
            .contains(Modifier::REVERSED));
    }
}
