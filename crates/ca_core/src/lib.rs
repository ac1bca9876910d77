//! # ca_core - Car Appraisal Game Core
//!
//! This library provides the core of the "guess which car is worth more"
//! console game: configuration loading and validation, random car
//! generation, a deterministic valuation engine and the round-based
//! game loop.
//!
//! ## Features
//! - 100% deterministic valuation (same cars = same verdict)
//! - Closed, typed error taxonomy for configuration failures
//! - Injectable console and randomness capabilities for testing

pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod models;

// Re-export the main API surface
pub use config::{load_settings, CarGenerationSettings, ConfigError, GameSettings};
pub use error::{GameError, Result};
pub use game::{run_game, Console, GameReport};
pub use models::{Brand, Car, Engine};
