//! One round: two cars, one question, one point at stake.

use std::cmp::Ordering;

use rand::Rng;

use super::console::Console;
use crate::config::GameSettings;
use crate::engine::{compare_cars, generate_car};
use crate::error::GameError;
use crate::models::Car;

/// The prompt shown before every answer.
pub const CHOICE_PROMPT: &str = "Which car is worth more? (a/b): ";

/// The two answers a player can give.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    A,
    B,
}

impl Choice {
    /// Parses a raw response. The input is trimmed and case-folded
    /// first; anything but `a` or `b` is rejected with the raw
    /// response preserved in the error.
    pub fn parse(input: &str) -> Result<Choice, GameError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Choice::A),
            "b" => Ok(Choice::B),
            _ => Err(GameError::InvalidChoice {
                input: input.to_string(),
            }),
        }
    }
}

/// Outcome of judging one round. Lives only until its point is folded
/// into the running score.
#[derive(Debug, Clone, Copy)]
pub struct RoundResult {
    pub car_a: Car,
    pub car_b: Car,
    pub choice: Choice,
    pub verdict: Ordering,
    pub correct: bool,
}

/// Judges a choice against the valuation engine's verdict.
///
/// A tie cannot be gotten wrong: when the cars are equally valuable,
/// any choice counts as correct.
pub fn judge_round(car_a: Car, car_b: Car, choice: Choice) -> RoundResult {
    let verdict = compare_cars(&car_a, &car_b);
    let correct = match verdict {
        Ordering::Equal => true,
        Ordering::Greater => choice == Choice::A,
        Ordering::Less => choice == Choice::B,
    };

    RoundResult {
        car_a,
        car_b,
        choice,
        verdict,
        correct,
    }
}

/// Plays one round and returns the point earned (1 or 0).
///
/// A malformed answer or a console fault is fatal and propagates; the
/// round is not retried.
pub fn play_round<R, C>(
    settings: &GameSettings,
    rng: &mut R,
    console: &mut C,
    round: u32,
) -> Result<u32, GameError>
where
    R: Rng + ?Sized,
    C: Console + ?Sized,
{
    let car_a = generate_car(settings, rng);
    let car_b = generate_car(settings, rng);

    console.write_line(&format!("\n--- Round {} ---", round));
    console.write_line(&format!("A: {}", car_a));
    console.write_line(&format!("B: {}", car_b));

    let answer = console.read_line(CHOICE_PROMPT)?;
    let choice = Choice::parse(&answer)?;

    let result = judge_round(car_a, car_b, choice);
    if result.correct {
        console.write_line("Correct!");
    } else {
        let right = if result.verdict == Ordering::Greater { "A" } else { "B" };
        console.write_line(&format!("Wrong! The right answer was {}.", right));
    }

    Ok(u32::from(result.correct))
}
