use serde::{Deserialize, Serialize};
use std::fmt;

/// Planet category. Serialized as its variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanetType {
    Gas,
    Terrestrial,
    Ocean,
}

impl PlanetType {
    pub const ALL: [PlanetType; 3] = [PlanetType::Gas, PlanetType::Terrestrial, PlanetType::Ocean];

    pub fn name(&self) -> &'static str {
        match self {
            PlanetType::Gas => "Gas",
            PlanetType::Terrestrial => "Terrestrial",
            PlanetType::Ocean => "Ocean",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A planet inside a galaxy. `x` and `y` are local to the galaxy.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub planet_type: PlanetType,
    pub has_event: bool,
    pub has_component: bool,
    pub crystals: u32,
    pub fuel: u32,
    /// Filled in by whoever consumes the dataset; always empty here.
    pub visited_by: Vec<String>,
}

impl Planet {
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
