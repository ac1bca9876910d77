use thiserror::Error;

/// Errors that can end a running game.
///
/// Both variants are fatal: the loop aborts on the first one and no
/// final report is produced.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("invalid choice: expected 'a' or 'b', got {input:?}")]
    InvalidChoice { input: String },

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
