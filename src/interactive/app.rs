//! TUI application state and logic

use crate::core::Key;
use crate::engine::{ConfigError, GameConfig, GameEngine, Outcome, Status};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Game,
}

/// Modal drawn over the game screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Won,
    Lost,
    Share,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
///
/// Owns the current [`GameEngine`]; starting a new game replaces it.
pub struct App {
    pub words: Vec<String>,
    pub config: GameConfig,
    pub game: GameEngine,
    pub screen: Screen,
    pub overlay: Option<Overlay>,
    pub message: Option<Message>,
    pub should_quit: bool,
    /// Last share text requested, printed once the terminal is restored
    pub shared: Option<String>,
}

impl App {
    /// Build the app and its first game
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `words` or `config` cannot start a game.
    pub fn new(words: Vec<String>, config: GameConfig) -> Result<Self, ConfigError> {
        let game = GameEngine::initialize(&words, config.clone())?;

        Ok(Self {
            words,
            config,
            game,
            screen: Screen::Home,
            overlay: None,
            message: None,
            should_quit: false,
            shared: None,
        })
    }

    pub fn new_game(&mut self) {
        match GameEngine::initialize(&self.words, self.config.clone()) {
            Ok(game) => {
                self.game = game;
                self.screen = Screen::Game;
                self.overlay = None;
                self.set_message(
                    &format!("New game! Guess the {}-letter word.", self.game.word_len()),
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                error!(%err, "could not start a new game");
                self.set_message(&format!("Cannot start a game: {err}"), MessageStyle::Error);
            }
        }
    }

    pub fn set_message(&mut self, text: &str, style: MessageStyle) {
        self.message = Some(Message {
            text: text.to_string(),
            style,
        });
    }

    /// Forward one key to the engine and react to the transition
    pub fn press(&mut self, key: Key) {
        match self.game.submit_key(key) {
            Outcome::Ignored if key == Key::Submit && self.game.status() == Status::Playing => {
                self.set_message("Not enough letters", MessageStyle::Error);
            }
            Outcome::Won => {
                self.overlay = Some(Overlay::Won);
                self.set_message("Hooray, you won!", MessageStyle::Success);
            }
            Outcome::Lost => {
                self.overlay = Some(Overlay::Lost);
                self.set_message(
                    &format!(
                        "Meh. The word was {}",
                        self.game.word().text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
            }
            Outcome::Advanced => {
                let left = self.game.remaining_tries();
                self.set_message(
                    &format!("{left} {} left", if left == 1 { "try" } else { "tries" }),
                    MessageStyle::Info,
                );
            }
            Outcome::Typed | Outcome::Erased | Outcome::Ignored => {}
        }
    }

    /// Capture the share text and show it
    pub fn share(&mut self) {
        let text = self.game.share_text();
        debug!(rows = self.game.completed_rows(), "share requested");
        self.shared = Some(text);
        self.overlay = Some(Overlay::Share);
        self.set_message(
            "Score ready to share - it will be printed when you quit",
            MessageStyle::Success,
        );
    }

    /// Dispatch a key press for the current screen and overlay
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match (self.screen, self.overlay) {
            (Screen::Home, _) => self.handle_home_key(code),
            (Screen::Game, Some(overlay)) => self.handle_overlay_key(overlay, code),
            (Screen::Game, None) => self.handle_game_key(code),
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.game.status().is_over() {
                    self.new_game();
                } else {
                    self.screen = Screen::Game;
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_overlay_key(&mut self, overlay: Overlay, code: KeyCode) {
        match (overlay, code) {
            (Overlay::Won, KeyCode::Char('s')) => self.share(),
            (Overlay::Won | Overlay::Lost, KeyCode::Char('n')) => self.new_game(),
            (Overlay::Won | Overlay::Lost, KeyCode::Char('q')) => self.should_quit = true,
            (Overlay::Share, KeyCode::Esc | KeyCode::Enter) => {
                self.overlay = Some(Overlay::Won);
            }
            (_, KeyCode::Esc) => self.overlay = None,
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        if self.game.status().is_over() {
            // Board stays visible after closing the modal
            match code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('s') if self.game.status() == Status::Won => self.share(),
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc => self.screen = Screen::Home,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Esc => self.screen = Screen::Home,
            KeyCode::Enter => self.press(Key::Submit),
            KeyCode::Backspace | KeyCode::Delete => self.press(Key::Backspace),
            KeyCode::Char(c) => self.press(Key::Letter(c)),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// Returns the last share text the player asked for, so the caller can hand
/// it to stdout once the terminal is back to normal.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Option<String>> {
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
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.shared)
}
