//! Round orchestration and the game loop.

mod console;
mod round;

pub use console::{Console, ScriptedConsole};
pub use round::{judge_round, play_round, Choice, RoundResult, CHOICE_PROMPT};

use rand::Rng;

use crate::config::GameSettings;
use crate::error::GameError;

/// Final tally handed to the output boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    pub score: u32,
    pub rounds: u32,
}

/// Runs the full game: `settings.rounds` rounds in strict sequence.
///
/// The loop carries an explicit `(round, score)` state pair instead of
/// recursing. The first round error aborts the run and propagates; no
/// partial report is produced on failure.
pub fn run_game<R, C>(
    settings: &GameSettings,
    rng: &mut R,
    console: &mut C,
) -> Result<GameReport, GameError>
where
    R: Rng + ?Sized,
    C: Console + ?Sized,
{
    console.write_line(&format!(
        "The game will consist of {} rounds.",
        settings.rounds
    ));

    let mut score = 0;
    let mut round = 1;
    while round <= settings.rounds {
        score += play_round(settings, rng, console, round)?;
        console.write_line(&format!("Score so far: {}", score));
        log::debug!("Round {} done, score {}", round, score);
        round += 1;
    }

    console.write_line(&format!(
        "\n--- Game over! ---\nFinal score: {} / {}",
        score, settings.rounds
    ));

    Ok(GameReport {
        score,
        rounds: settings.rounds,
    })
}
