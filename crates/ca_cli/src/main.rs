//! Car Appraiser CLI
//!
//! Loads the game settings, wires the real console and a seeded RNG,
//! and drives the game loop. This is the only place that inspects
//! error kinds to pick a user-facing message.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ca_core::{load_settings, run_game, ConfigError, Console, GameError};

#[derive(Parser)]
#[command(name = "car_appraiser")]
#[command(about = "Guess which car is worth more", long_about = None)]
struct Cli {
    /// Path to the game settings JSON file
    #[arg(long, default_value = "settings.json")]
    config: PathBuf,

    /// RNG seed for a reproducible session (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

/// Real console: owns stdin/stdout for the process lifetime and is
/// released by `Drop` on both the success and the failure path.
struct StdConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdConsole {
    fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) {
        // A dead stdout is not worth aborting a round over
        let _ = writeln!(self.stdout, "{}", line);
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.stdout, "{}", prompt)?;
        self.stdout.flush()?;

        let mut line = String::new();
        let read = self.stdin.lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let settings = match load_settings(&cli.config) {
        Ok(settings) => settings,
        Err(err) => return report_config_error(&err),
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::debug!("RNG seed: {}", seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut console = StdConsole::new();

    console.write_line("--- Car Appraiser ---");
    match run_game(&settings, &mut rng, &mut console) {
        Ok(report) => {
            log::info!("Game finished: {} / {}", report.score, report.rounds);
            ExitCode::SUCCESS
        }
        Err(err) => report_game_error(&err),
    }
}

fn report_config_error(err: &ConfigError) -> ExitCode {
    let kind = match err {
        ConfigError::NotFound { .. } => "ConfigNotFound",
        ConfigError::Read { .. } => "ConfigReadError",
        ConfigError::Parse { .. } => "JsonParseError",
        ConfigError::Validate { .. } => "ValidateConfigError",
    };
    eprintln!("Could not load game settings [{}]: {}", kind, err);
    ExitCode::FAILURE
}

fn report_game_error(err: &GameError) -> ExitCode {
    let kind = match err {
        GameError::InvalidChoice { .. } => "InvalidChoiceInput",
        GameError::Io(_) => "IoError",
    };
    eprintln!("\nGame aborted [{}]: {}", kind, err);
    ExitCode::FAILURE
}
