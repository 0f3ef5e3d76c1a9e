//! Game session bookkeeping
//!
//! Turn history and win status for a single game; the caller decides what
//! to do with either.

mod session;

pub use session::{GameSession, GameStatus, GameTurn, SessionError};
