//! Car generation and valuation.

pub mod generator;
pub mod valuation;

pub use generator::generate_car;
pub use valuation::{brand_rank, compare_cars, engine_rank, value_score};
