//! Simple interactive CLI mode
//!
//! Text-based play against a generated secret without the TUI.

use crate::core::{Code, Mode};
use crate::game::{GameSession, GameStatus};
use crate::output::formatters::feedback_pegs;
use colored::Colorize;
use std::io::{self, Write};

/// Guess cap per game in the interactive surfaces
pub const MAX_GUESSES: usize = 10;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a
/// fresh secret cannot be generated for the requested length.
pub fn run_simple(mode: Mode, length: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Mastermind - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I picked a secret {length}-digit code in {mode} mode.");
    match mode {
        Mode::Standard => println!("Digits may repeat. Feedback: exact and number matches."),
        Mode::Unique => println!("All digits are distinct. Feedback: exact and close matches."),
    }
    println!("You have {MAX_GUESSES} guesses.\n");
    println!("Commands: 'quit' to exit, 'new' for a new game, 'reveal' to give up\n");

    let mut game = new_game(mode, length)?;

    loop {
        let prompt = format!(
            "Guess {}/{MAX_GUESSES} ({length} digits)",
            game.attempts() + 1
        );
        let input = get_user_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game = new_game(mode, length)?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            "reveal" | "give up" => {
                println!(
                    "\nThe secret was {}. Better luck next time!\n",
                    game.secret().text().bright_yellow().bold()
                );
                game = new_game(mode, length)?;
                continue;
            }
            _ => {}
        }

        let guess = match Code::new(&input) {
            Ok(code) if code.len() == length => code,
            Ok(code) => {
                println!(
                    "❌ Guess must be {length} digits, got {}\n",
                    code.len()
                );
                continue;
            }
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        let turn = match game.play_turn(guess) {
            Ok(turn) => turn,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        let feedback = turn.feedback();
        println!(
            "   {}  {}",
            feedback_pegs(feedback),
            format!("{feedback}").bright_black()
        );

        if game.status() == GameStatus::Won {
            print_win_banner(&game);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game = new_game(mode, length)?;
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        } else if game.attempts() >= MAX_GUESSES {
            println!(
                "\n{}",
                format!(
                    "❌ Out of guesses! The secret was {}",
                    game.secret().text()
                )
                .red()
                .bold()
            );
            game = new_game(mode, length)?;
            println!("\n🔄 New game started!\n");
        } else {
            println!();
        }
    }
}

fn new_game(mode: Mode, length: usize) -> Result<GameSession, String> {
    GameSession::with_generated(mode, length).map_err(|e| e.to_string())
}

fn print_win_banner(game: &GameSession) {
    let attempts = game.attempts();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  C O D E   C R A C K E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match attempts {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding deduction!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 | 6 => ("👍 Solved!", "Got it!"),
        _ => ("✓ Complete!", "Success!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Code found in {} {}",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, turn) in game.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            turn.guess().text().bright_white().bold(),
            feedback_pegs(turn.feedback())
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
