use serde::{Deserialize, Serialize};
use std::fmt;

/// Car brand. The set is closed; the valuation engine ranks it by
/// prestige (BMW > Audi > Ford).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    #[serde(rename = "BMW")]
    Bmw,
    Audi,
    Ford,
}

/// Engine type. The set is closed; the valuation engine ranks it by
/// desirability (diesel > petrol > electric).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Diesel,
    Petrol,
    Electric,
}

/// Every brand the generator can pick from.
pub const ALL_BRANDS: [Brand; 3] = [Brand::Bmw, Brand::Audi, Brand::Ford];

/// Every engine the generator can pick from.
pub const ALL_ENGINES: [Engine; 3] = [Engine::Diesel, Engine::Petrol, Engine::Electric];

/// One car as shown to the player during a round.
///
/// No identity beyond its fields: two cars with identical fields are
/// interchangeable. Never mutated after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub brand: Brand,
    pub engine: Engine,
    pub year: i32,
    pub mileage: u32,
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Brand::Bmw => "BMW",
            Brand::Audi => "Audi",
            Brand::Ford => "Ford",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Engine::Diesel => "diesel",
            Engine::Petrol => "petrol",
            Engine::Electric => "electric",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}, {}, {} km", self.brand, self.year, self.engine, self.mileage)
    }
}
