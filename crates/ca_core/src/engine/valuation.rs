//! Deterministic car valuation.
//!
//! Every car gets a scalar worth from a weighted sum of its specs, and
//! cars compare by that scalar. The relation is a total preorder: ties
//! happen exactly when the scalars coincide (a newer low-prestige car
//! can match an older high-prestige one).

use std::cmp::Ordering;

use crate::models::{Brand, Car, Engine};

// Scores are kept in tenths of a point so the mileage term needs no
// fractional arithmetic: one point of the reference weighting equals
// ten score units here. Ordering is unchanged.
const BASE_YEAR: i32 = 1990;
const YEAR_WEIGHT: i64 = 10_000;
const MILEAGE_BENCHMARK: i64 = 500_000;
const BRAND_WEIGHT: i64 = 10_000;
const ENGINE_WEIGHT: i64 = 5_000;

/// Brand prestige rank: higher is worth more.
pub fn brand_rank(brand: Brand) -> i64 {
    match brand {
        Brand::Ford => 1,
        Brand::Audi => 2,
        Brand::Bmw => 3,
    }
}

/// Engine desirability rank: higher is worth more.
pub fn engine_rank(engine: Engine) -> i64 {
    match engine {
        Engine::Electric => 1,
        Engine::Petrol => 2,
        Engine::Diesel => 3,
    }
}

/// Scalar worth of a car, in tenths of a point.
///
/// Years before the base year and mileages past the benchmark
/// contribute nothing rather than going negative.
pub fn value_score(car: &Car) -> i64 {
    let year_score = i64::from((car.year - BASE_YEAR).max(0)) * YEAR_WEIGHT;
    let mileage_score = (MILEAGE_BENCHMARK - i64::from(car.mileage)).max(0);
    let brand_score = brand_rank(car.brand) * BRAND_WEIGHT;
    let engine_score = engine_rank(car.engine) * ENGINE_WEIGHT;

    year_score + mileage_score + brand_score + engine_score
}

/// Total order over cars: `Greater` means `a` is worth more than `b`.
///
/// Deterministic and side-effect-free; same pair, same verdict.
pub fn compare_cars(a: &Car, b: &Car) -> Ordering {
    value_score(a).cmp(&value_score(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ALL_BRANDS, ALL_ENGINES};
    use proptest::prelude::*;

    fn car(brand: Brand, engine: Engine, year: i32, mileage: u32) -> Car {
        Car {
            brand,
            engine,
            year,
            mileage,
        }
    }

    fn arb_car() -> impl Strategy<Value = Car> {
        (
            0usize..ALL_BRANDS.len(),
            0usize..ALL_ENGINES.len(),
            1900i32..=2100,
            0u32..=600_000,
        )
            .prop_map(|(b, e, year, mileage)| car(ALL_BRANDS[b], ALL_ENGINES[e], year, mileage))
    }

    #[test]
    fn test_newer_year_wins() {
        let newer = car(Brand::Ford, Engine::Electric, 2020, 100_000);
        let older = car(Brand::Ford, Engine::Electric, 2019, 100_000);
        assert_eq!(compare_cars(&newer, &older), Ordering::Greater);
    }

    #[test]
    fn test_brand_and_engine_outrank_ford_electric() {
        // Same year and mileage: only prestige differs
        let bmw_diesel = car(Brand::Bmw, Engine::Diesel, 2000, 0);
        let ford_electric = car(Brand::Ford, Engine::Electric, 2000, 0);
        assert_eq!(compare_cars(&bmw_diesel, &ford_electric), Ordering::Greater);
    }

    #[test]
    fn test_lower_mileage_wins() {
        let fresh = car(Brand::Audi, Engine::Petrol, 2010, 50_000);
        let worn = car(Brand::Audi, Engine::Petrol, 2010, 250_000);
        assert_eq!(compare_cars(&fresh, &worn), Ordering::Greater);
    }

    #[test]
    fn test_identical_cars_are_equal() {
        let a = car(Brand::Bmw, Engine::Diesel, 2015, 80_000);
        assert_eq!(compare_cars(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_distinct_cars_can_tie() {
        // brand gap (1 rank * 10000) exactly offsets engine gap (2 ranks * 5000)
        let bmw_electric = car(Brand::Bmw, Engine::Electric, 2010, 90_000);
        let audi_diesel = car(Brand::Audi, Engine::Diesel, 2010, 90_000);
        assert_eq!(compare_cars(&bmw_electric, &audi_diesel), Ordering::Equal);
    }

    #[test]
    fn test_pre_base_year_contributes_nothing() {
        let a = car(Brand::Ford, Engine::Petrol, 1950, 100_000);
        let b = car(Brand::Ford, Engine::Petrol, 1989, 100_000);
        assert_eq!(compare_cars(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_mileage_past_benchmark_contributes_nothing() {
        let a = car(Brand::Ford, Engine::Petrol, 2000, 500_000);
        let b = car(Brand::Ford, Engine::Petrol, 2000, 550_000);
        assert_eq!(compare_cars(&a, &b), Ordering::Equal);
    }

    proptest! {
        #[test]
        fn prop_comparison_is_antisymmetric(a in arb_car(), b in arb_car()) {
            prop_assert_eq!(compare_cars(&a, &b), compare_cars(&b, &a).reverse());
        }

        #[test]
        fn prop_comparison_is_transitive(a in arb_car(), b in arb_car(), c in arb_car()) {
            if compare_cars(&a, &b) == Ordering::Greater
                && compare_cars(&b, &c) == Ordering::Greater
            {
                prop_assert_eq!(compare_cars(&a, &c), Ordering::Greater);
            }
        }

        #[test]
        fn prop_equal_scores_mean_equal_cars(a in arb_car(), b in arb_car()) {
            prop_assert_eq!(
                compare_cars(&a, &b) == Ordering::Equal,
                value_score(&a) == value_score(&b)
            );
        }
    }
}
