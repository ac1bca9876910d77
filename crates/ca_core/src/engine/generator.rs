//! Random car generation within validated configuration bounds.

use rand::Rng;

use crate::config::GameSettings;
use crate::models::{Car, ALL_BRANDS, ALL_ENGINES};

/// Generates one car with uniformly random specs.
///
/// Brand and engine are uniform picks over the closed sets; year and
/// mileage are uniform draws over the inclusive configured ranges.
/// Bounds come from a validated [`GameSettings`], so every range is
/// non-empty and `gen_range` cannot panic.
pub fn generate_car<R: Rng + ?Sized>(settings: &GameSettings, rng: &mut R) -> Car {
    let bounds = &settings.car_generation;

    let brand = ALL_BRANDS[rng.gen_range(0..ALL_BRANDS.len())];
    let engine = ALL_ENGINES[rng.gen_range(0..ALL_ENGINES.len())];
    let year = rng.gen_range(bounds.min_year..=bounds.max_year);
    let mileage = rng.gen_range(bounds.min_mileage..=bounds.max_mileage);

    Car {
        brand,
        engine,
        year,
        mileage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarGenerationSettings;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn settings(min_year: i32, max_year: i32, min_mileage: u32, max_mileage: u32) -> GameSettings {
        GameSettings {
            rounds: 1,
            score_threshold: 0.0,
            car_generation: CarGenerationSettings {
                min_year,
                max_year,
                min_mileage,
                max_mileage,
            },
        }
    }

    #[test]
    fn test_generated_cars_stay_in_bounds() {
        let settings = settings(1995, 2024, 10_000, 300_000);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..10_000 {
            let car = generate_car(&settings, &mut rng);
            assert!((1995..=2024).contains(&car.year));
            assert!((10_000..=300_000).contains(&car.mileage));
            assert!(ALL_BRANDS.contains(&car.brand));
            assert!(ALL_ENGINES.contains(&car.engine));
        }
    }

    #[test]
    fn test_degenerate_bounds_pin_year_and_mileage() {
        let settings = settings(2000, 2000, 0, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..100 {
            let car = generate_car(&settings, &mut rng);
            assert_eq!(car.year, 2000);
            assert_eq!(car.mileage, 0);
        }
    }

    #[test]
    fn test_same_seed_same_cars() {
        let settings = settings(1995, 2024, 0, 300_000);
        let mut a = ChaCha8Rng::seed_from_u64(123);
        let mut b = ChaCha8Rng::seed_from_u64(123);

        for _ in 0..50 {
            assert_eq!(generate_car(&settings, &mut a), generate_car(&settings, &mut b));
        }
    }

    proptest! {
        #[test]
        fn prop_bounds_hold_for_any_valid_settings(
            min_year in 1900i32..=2100,
            year_span in 0i32..=200,
            min_mileage in 0u32..=400_000,
            mileage_span in 0u32..=100_000,
            seed in any::<u64>(),
        ) {
            let max_year = (min_year + year_span).min(2100);
            let max_mileage = min_mileage + mileage_span;
            let settings = settings(min_year, max_year, min_mileage, max_mileage);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            for _ in 0..40 {
                let car = generate_car(&settings, &mut rng);
                prop_assert!((min_year..=max_year).contains(&car.year));
                prop_assert!((min_mileage..=max_mileage).contains(&car.mileage));
            }
        }
    }
}
