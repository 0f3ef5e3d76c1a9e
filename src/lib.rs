//! Mastermind Engine
//!
//! A Mastermind game engine: feedback scoring for two game modes, secret
//! generation, a minimax code breaker, and interactive play.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_engine::core::{Code, Feedback, Mode};
//!
//! // Create codes
//! let secret = Code::new("1234").unwrap();
//! let guess = Code::new("1243").unwrap();
//!
//! // Score the guess
//! let feedback = Feedback::score(Mode::Standard, &secret, &guess).unwrap();
//! assert_eq!(feedback.exact(), 2);
//! assert_eq!(feedback.number(), 2);
//! ```

// Core domain types
pub mod core;

// Secret generation
pub mod generator;

// Game session bookkeeping
pub mod game;

// Code-breaking algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
