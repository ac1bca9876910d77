//! Game configuration: loading, parsing and validation.
//!
//! The pipeline is strictly sequential and short-circuits on the first
//! failure: read the file as text, parse it as JSON, check the shape and
//! the semantic range invariants. Either a fully valid [`GameSettings`]
//! comes out, or exactly one [`ConfigError`] — no partial configuration
//! is ever returned.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

/// How much of a malformed document the parse error echoes back.
const SNIPPET_LEN: usize = 120;

/// Bounds for random car generation.
///
/// Invariant after validation: both ranges are non-empty (`min <= max`),
/// years lie in 1900..=2100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarGenerationSettings {
    pub min_year: i32,
    pub max_year: i32,
    pub min_mileage: u32,
    pub max_mileage: u32,
}

/// Validated game configuration. Created once at startup, read-only for
/// the rest of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub rounds: u32,
    /// Advisory threshold carried in the contract; scoring does not use it.
    pub score_threshold: f64,
    pub car_generation: CarGenerationSettings,
}

impl CarGenerationSettings {
    fn validate(&self) -> Result<(), String> {
        if !(1900..=2100).contains(&self.min_year) {
            return Err(format!(
                "carGeneration.minYear must be in 1900..=2100, got {}",
                self.min_year
            ));
        }
        if !(1900..=2100).contains(&self.max_year) {
            return Err(format!(
                "carGeneration.maxYear must be in 1900..=2100, got {}",
                self.max_year
            ));
        }
        if self.min_year > self.max_year {
            return Err(format!(
                "carGeneration.minYear {} exceeds maxYear {}",
                self.min_year, self.max_year
            ));
        }
        if self.min_mileage > self.max_mileage {
            return Err(format!(
                "carGeneration.minMileage {} exceeds maxMileage {}",
                self.min_mileage, self.max_mileage
            ));
        }
        Ok(())
    }
}

impl GameSettings {
    /// Checks the semantic refinements on top of the structural shape.
    /// The first violated field aborts the whole validation.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=1000).contains(&self.rounds) {
            return Err(format!("rounds must be in 1..=1000, got {}", self.rounds));
        }
        if self.score_threshold < 0.0 {
            return Err(format!(
                "scoreThreshold must be >= 0, got {}",
                self.score_threshold
            ));
        }
        self.car_generation.validate()
    }
}

/// Loads and validates game settings from a JSON file.
///
/// Pipeline: read -> parse -> validate. Each stage returns a typed
/// [`ConfigError`] and later stages never run after a failure.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<GameSettings, ConfigError> {
    let text = read_config(path.as_ref())?;
    let value = parse_config(&text)?;
    let settings = validate_config(value, &text)?;
    log::info!("Loaded game settings: {} rounds", settings.rounds);
    Ok(settings)
}

fn display_path(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|err| {
        let path = display_path(path);
        if err.kind() == ErrorKind::NotFound {
            ConfigError::NotFound { path }
        } else {
            ConfigError::Read {
                path,
                code: err.raw_os_error().unwrap_or(-1),
                message: err.to_string(),
            }
        }
    })
}

fn parse_config(text: &str) -> Result<serde_json::Value, ConfigError> {
    serde_json::from_str(text).map_err(|err| ConfigError::Parse {
        snippet: snippet(text),
        message: err.to_string(),
    })
}

fn validate_config(
    value: serde_json::Value,
    raw: &str,
) -> Result<GameSettings, ConfigError> {
    let settings: GameSettings =
        serde_json::from_value(value).map_err(|err| ConfigError::Validate {
            message: err.to_string(),
            input: raw.trim().to_string(),
        })?;
    settings.validate().map_err(|message| ConfigError::Validate {
        message,
        input: raw.trim().to_string(),
    })?;
    Ok(settings)
}

fn snippet(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(SNIPPET_LEN) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
