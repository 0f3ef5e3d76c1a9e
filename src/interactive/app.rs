//! TUI application state and logic

use crate::core::{Code, CodeError, Mode};
use crate::game::{GameSession, GameStatus};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 10;

/// Application state
pub struct App {
    pub session: GameSession,
    pub mode: Mode,
    pub length: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    WinCelebration,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl App {
    /// Create the app with a freshly generated secret
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if `length` is outside 4-8.
    pub fn new(mode: Mode, length: usize) -> Result<Self, CodeError> {
        let session = GameSession::with_generated(mode, length)?;

        let rules = match mode {
            Mode::Standard => "Digits may repeat. ⚫ exact, ⚪ right digit wrong place.",
            Mode::Unique => "All digits distinct. ⚫ exact, 🔶 digit one place off.",
        };

        Ok(Self {
            session,
            mode,
            length,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Welcome! I picked a secret {length}-digit code."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: rules.to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guess,
        })
    }

    /// Score the current input buffer as a guess
    pub fn handle_guess(&mut self) {
        let input = self.input_buffer.clone();
        self.input_buffer.clear();

        let code = match Code::new(&input) {
            Ok(code) if code.len() == self.length => code,
            Ok(code) => {
                self.add_message(
                    &format!("Guess must be {} digits, got {}", self.length, code.len()),
                    MessageStyle::Error,
                );
                return;
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let feedback = match self.session.play_turn(code) {
            Ok(turn) => turn.feedback(),
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        if self.session.status() == GameStatus::Won {
            let attempts = self.session.attempts();
            self.stats.total_games += 1;
            self.stats.games_won += 1;
            if attempts <= MAX_GUESSES {
                self.stats.guess_distribution[attempts] += 1;
            }

            self.input_mode = InputMode::WinCelebration;

            let celebration = match attempts {
                1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 | 6 => "🎉 NICE WORK! 🎉",
                _ => "🎊 CRACKED! 🎊",
            };

            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else if self.session.attempts() >= MAX_GUESSES {
            self.stats.total_games += 1;
            self.input_mode = InputMode::GameOver;

            self.add_message(
                &format!("Out of guesses! The secret was {}.", self.session.secret()),
                MessageStyle::Error,
            );
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else {
            let left = MAX_GUESSES - self.session.attempts();
            let detail = match self.mode {
                Mode::Standard => format!(
                    "{} exact, {} misplaced. {left} guesses left.",
                    feedback.exact(),
                    feedback.number()
                ),
                Mode::Unique => format!(
                    "{} exact, {} close. {left} guesses left.",
                    feedback.exact(),
                    feedback.close()
                ),
            };
            self.add_message(&detail, MessageStyle::Info);
        }
    }

    /// Start a fresh game with a new secret
    pub fn new_game(&mut self) {
        // Length was validated at startup, so regeneration cannot fail
        if let Ok(session) = GameSession::with_generated(self.mode, self.length) {
            self.session = session;
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        self.add_message("New game started! Enter your first guess.", MessageStyle::Info);
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

    /// Guesses remaining in the current game
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.session.attempts())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::WinCelebration | InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {}
                },
                InputMode::Guess => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char(c) => {
                        if c.is_ascii_digit() && app.input_buffer.len() < app.length {
                            app.input_buffer.push(c);
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.handle_guess();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
