//! Game data models.

mod car;

pub use car::{Brand, Car, Engine, ALL_BRANDS, ALL_ENGINES};
