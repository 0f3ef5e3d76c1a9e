//! A single Mastermind game
//!
//! Owns the secret for one game and records each turn's guess and feedback.
//! Persistence, transport, and multi-game orchestration stay outside.

use crate::core::{Code, CodeError, Feedback, FeedbackError, Mode};
use crate::generator;
use std::fmt;

/// One recorded turn: the guess and the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTurn {
    guess: Code,
    feedback: Feedback,
}

impl GameTurn {
    /// The guess the player submitted
    #[must_use]
    pub fn guess(&self) -> &Code {
        &self.guess
    }

    /// The feedback the guess earned
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
}

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The guess could not be scored against the secret
    Feedback(FeedbackError),
    /// The game is already won; no further turns are accepted
    Finished,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feedback(e) => write!(f, "{e}"),
            Self::Finished => write!(f, "Game is already won"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Feedback(e) => Some(e),
            Self::Finished => None,
        }
    }
}

impl From<FeedbackError> for SessionError {
    fn from(e: FeedbackError) -> Self {
        Self::Feedback(e)
    }
}

/// A single in-memory game session
///
/// The secret is fixed at creation and never exposed through gameplay; turn
/// history accumulates until the guess matches every position.
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: Mode,
    secret: Code,
    history: Vec<GameTurn>,
    status: GameStatus,
}

impl GameSession {
    /// Start a game with a known secret
    #[must_use]
    pub fn new(mode: Mode, secret: Code) -> Self {
        Self {
            mode,
            secret,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Start a game with a freshly generated secret
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if `length` is outside 4-8.
    pub fn with_generated(mode: Mode, length: usize) -> Result<Self, CodeError> {
        Ok(Self::new(mode, generator::generate(mode, length)?))
    }

    /// Score a guess, record the turn, and update the game status
    ///
    /// # Errors
    /// Returns `SessionError::Finished` if the game is already won, or a
    /// wrapped `LengthMismatch` if the guess has the wrong length.
    pub fn play_turn(&mut self, guess: Code) -> Result<&GameTurn, SessionError> {
        if self.status == GameStatus::Won {
            return Err(SessionError::Finished);
        }

        let feedback = Feedback::score(self.mode, &self.secret, &guess)?;

        if feedback.is_win(self.secret.len()) {
            self.status = GameStatus::Won;
        }

        self.history.push(GameTurn { guess, feedback });
        Ok(self.history.last().expect("turn just pushed"))
    }

    /// The game mode
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The hidden code
    ///
    /// Callers rendering a loss reveal it; gameplay paths must not.
    #[must_use]
    pub fn secret(&self) -> &Code {
        &self.secret
    }

    /// Code length for this game
    #[must_use]
    pub fn length(&self) -> usize {
        self.secret.len()
    }

    /// All recorded turns, oldest first
    #[must_use]
    pub fn history(&self) -> &[GameTurn] {
        &self.history
    }

    /// Number of guesses made so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Current status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(secret: &str) -> GameSession {
        GameSession::new(Mode::Standard, Code::new(secret).unwrap())
    }

    #[test]
    fn turns_accumulate_with_feedback() {
        let mut game = session("1234");

        let turn = game.play_turn(Code::new("1243").unwrap()).unwrap();
        assert_eq!(turn.feedback().exact(), 2);
        assert_eq!(turn.feedback().number(), 2);

        game.play_turn(Code::new("5678").unwrap()).unwrap();

        assert_eq!(game.attempts(), 2);
        assert_eq!(game.history()[0].guess().text(), "1243");
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn winning_guess_flips_status() {
        let mut game = session("1234");

        let turn = game.play_turn(Code::new("1234").unwrap()).unwrap();
        assert!(turn.feedback().is_win(4));
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn finished_game_rejects_further_turns() {
        let mut game = session("1234");
        game.play_turn(Code::new("1234").unwrap()).unwrap();

        let result = game.play_turn(Code::new("1234").unwrap());
        assert_eq!(result, Err(SessionError::Finished));
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn wrong_length_guess_is_not_recorded() {
        let mut game = session("1234");

        let result = game.play_turn(Code::new("12345").unwrap());
        assert!(matches!(
            result,
            Err(SessionError::Feedback(FeedbackError::LengthMismatch { .. }))
        ));
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn generated_session_matches_requested_shape() {
        let game = GameSession::with_generated(Mode::Unique, 5).unwrap();
        assert_eq!(game.length(), 5);
        assert_eq!(game.mode(), Mode::Unique);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn generated_session_rejects_bad_length() {
        assert!(GameSession::with_generated(Mode::Standard, 9).is_err());
    }

    #[test]
    fn unique_mode_close_matches_recorded() {
        let mut game = GameSession::new(Mode::Unique, Code::new("1234").unwrap());
        let turn = game.play_turn(Code::new("2143").unwrap()).unwrap();
        assert_eq!(turn.feedback().close(), 4);
        assert_eq!(turn.feedback().number(), 0);
    }
}
