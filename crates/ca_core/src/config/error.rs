use thiserror::Error;

/// Everything that can go wrong while loading the settings file.
///
/// The taxonomy is closed: one variant per pipeline stage, produced at
/// most once per run and consumed by the top-level handler only.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("failed to read config {path} (os error {code}): {message}")]
    Read {
        path: String,
        code: i32,
        message: String,
    },

    #[error("invalid JSON in config: {message}")]
    Parse { snippet: String, message: String },

    #[error("invalid game settings: {message}")]
    Validate { message: String, input: String },
}
