//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::WORD_LENGTH;
use crate::game::{GameError, GameSession, Statistics, TurnStatus};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app and start its first game
    ///
    /// # Errors
    ///
    /// Returns an error if the config has no word to pick.
    pub fn new(mut config: GameConfig) -> Result<Self, GameError> {
        let session = config.new_session()?;

        Ok(Self {
            config,
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Type a 5 letter word and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Type a letter into the current row
    pub fn add_letter(&mut self, letter: char) {
        if self.session.is_terminal()
            || !letter.is_ascii_alphabetic()
            || self.input_buffer.len() >= WORD_LENGTH
        {
            return;
        }
        self.input_buffer.push(letter.to_ascii_uppercase());
    }

    pub fn remove_letter(&mut self) {
        self.input_buffer.pop();
    }

    #[must_use]
    pub fn is_word_complete(&self) -> bool {
        self.input_buffer.len() == WORD_LENGTH
    }

    /// Submit the current row to the session
    pub fn submit(&mut self) {
        let result = match self.session.submit_guess(&self.input_buffer) {
            Ok(result) => result,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();

        match result.status {
            TurnStatus::Won { attempts_used } => {
                self.stats.record(&self.session);
                let celebration = match attempts_used {
                    1 => "🎯 HOLE IN ONE! You guessed it in 1 attempt.".to_string(),
                    n => format!("🎉 You guessed correctly! It took you {n} attempts."),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
            }
            TurnStatus::Lost { secret } => {
                self.stats.record(&self.session);
                self.add_message(
                    &format!("You ran out of guesses. The word was: {secret}"),
                    MessageStyle::Error,
                );
                self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
            }
            TurnStatus::InProgress { .. } => {}
        }
    }

    /// Abandon the current game and start another
    pub fn new_game(&mut self) {
        match self.config.new_session() {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            _ if self.session.is_terminal() => match key.code {
                KeyCode::Enter | KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char(c) => self.add_letter(c),
            KeyCode::Backspace => self.remove_letter(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterFeedback, Word};
    use crate::game::{MAX_ATTEMPTS, Outcome};

    fn app(secret: &str) -> App {
        let config =
            GameConfig::new(Vec::new(), Some(Word::new(secret).unwrap()), Some(0)).unwrap();
        App::new(config).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_fills_at_most_five_letters() {
        let mut app = app("sport");
        for c in "shirts".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "SHIRT");
        assert!(app.is_word_complete());

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "SHIR");
        assert!(!app.is_word_complete());
    }

    #[test]
    fn non_letters_ignored() {
        let mut app = app("sport");
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn incomplete_word_warns() {
        let mut app = app("sport");
        type_word(&mut app, "spo");

        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Please enter a 5 letter word");
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.input_buffer, "SPO");
        assert_eq!(app.session.current_attempt_index(), 0);
    }

    #[test]
    fn guess_updates_session_and_clears_input() {
        let mut app = app("bread");
        type_word(&mut app, "table");

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.current_attempt_index(), 1);
        assert_eq!(app.session.key_hint('B'), Some(LetterFeedback::Present));
    }

    #[test]
    fn win_then_new_game() {
        let mut app = app("bread");
        type_word(&mut app, "table");
        type_word(&mut app, "bread");

        assert_eq!(app.session.outcome(), Outcome::Won);
        assert_eq!(app.stats.games_won, 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("It took you 2 attempts"))
        );

        // Letters are ignored once the game is over
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.outcome(), Outcome::InProgress);
        assert_eq!(app.session.current_attempt_index(), 0);
    }

    #[test]
    fn loss_reveals_word() {
        let mut app = app("bread");
        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut app, "sport");
        }

        assert_eq!(app.session.outcome(), Outcome::Lost);
        assert_eq!(app.stats.games_played, 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "You ran out of guesses. The word was: BREAD")
        );
    }

    #[test]
    fn quit_keys() {
        let mut app = app("bread");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app("bread");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_n_restarts_mid_game() {
        let mut app = app("bread");
        type_word(&mut app, "table");
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert_eq!(app.session.current_attempt_index(), 0);
        assert_eq!(app.stats.games_played, 0);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app("bread");
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
