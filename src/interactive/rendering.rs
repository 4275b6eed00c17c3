//! TUI rendering with ratatui
//!
//! The letter grid, the hint-colored keyboard and the message log.

use super::app::{App, MessageStyle};
use crate::core::{LetterFeedback, WORD_LENGTH};
use crate::game::{MAX_ATTEMPTS, Outcome};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const GREEN: Color = Color::Rgb(106, 170, 100);
const YELLOW: Color = Color::Rgb(201, 180, 88);
const GRAY: Color = Color::Rgb(120, 124, 126);

/// Style for a tile or key with the given feedback
#[must_use]
pub fn tile_style(tag: Option<LetterFeedback>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match tag {
        Some(LetterFeedback::Correct) => base.fg(Color::White).bg(GREEN),
        Some(LetterFeedback::Present) => base.fg(Color::White).bg(YELLOW),
        Some(LetterFeedback::Absent) => base.fg(Color::White).bg(GRAY),
        None => base.fg(Color::White).bg(Color::DarkGray),
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                           // Header
            Constraint::Length(MAX_ATTEMPTS as u16 * 2 + 1), // Grid
            Constraint::Length(7),                           // Keyboard
            Constraint::Min(4),                              // Messages
            Constraint::Length(3),                           // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
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
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in 0..MAX_ATTEMPTS {
        let spans: Vec<Span> = if let Some((word, feedback)) = session.rows().get(row) {
            word.text()
                .chars()
                .zip(feedback.iter())
                .flat_map(|(letter, tag)| tile(letter, tile_style(Some(tag))))
                .collect()
        } else {
            let is_input_row =
                row == session.current_attempt_index() && !session.is_terminal();
            let typed: Vec<char> = if is_input_row {
                app.input_buffer.chars().collect()
            } else {
                Vec::new()
            };
            (0..WORD_LENGTH)
                .flat_map(|i| {
                    let letter = typed.get(i).copied().unwrap_or(' ');
                    tile(letter, tile_style(None))
                })
                .collect()
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len() * 2);

    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .chars()
            .flat_map(|letter| tile(letter, tile_style(app.session.key_hint(letter))))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.pop();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let attempt_text = match app.session.outcome() {
        Outcome::InProgress => format!(
            "Attempt {}/{MAX_ATTEMPTS}",
            app.session.current_attempt_index() + 1
        ),
        Outcome::Won => "Solved!".to_string(),
        Outcome::Lost => "Out of guesses".to_string(),
    };
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.is_terminal() {
        "Enter: New Game | Esc: Quit"
    } else {
        "Enter: Guess | Ctrl-N: New | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Word;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app(secret: &str) -> App {
        let config =
            GameConfig::new(Vec::new(), Some(Word::new(secret).unwrap()), Some(0)).unwrap();
        App::new(config).unwrap()
    }

    #[test]
    fn tile_styles_follow_feedback() {
        assert_eq!(tile_style(Some(LetterFeedback::Correct)).bg, Some(GREEN));
        assert_eq!(tile_style(Some(LetterFeedback::Present)).bg, Some(YELLOW));
        assert_eq!(tile_style(Some(LetterFeedback::Absent)).bg, Some(GRAY));
        assert_eq!(tile_style(None).bg, Some(Color::DarkGray));
    }

    #[test]
    fn renders_fresh_game() {
        let text = screen(&app("bread"));
        assert!(text.contains("WORDLE"));
        assert!(text.contains("Attempt 1/6"));
        assert!(text.contains("Keyboard"));
    }

    #[test]
    fn renders_guess_and_typing() {
        let mut app = app("bread");
        app.input_buffer = "TABLE".to_string();
        app.submit();
        app.input_buffer = "BR".to_string();

        let text = screen(&app);
        assert!(text.contains(" T   A   B   L   E "));
        assert!(text.contains(" B   R "));
        assert!(text.contains("Attempt 2/6"));
    }

    #[test]
    fn renders_finished_game() {
        let mut app = app("bread");
        app.input_buffer = "BREAD".to_string();
        app.submit();

        let text = screen(&app);
        assert!(text.contains("Solved!"));
        assert!(text.contains("Enter: New Game"));
    }
}
