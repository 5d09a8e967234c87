use serde::{Deserialize, Serialize};

use super::planet::Planet;

/// A galaxy on the 30x30 map with its planets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Galaxy {
    pub name: String,
    /// Map coordinate, `[x, y]`.
    pub pos: [f64; 2],
    pub planets: Vec<Planet>,
}

impl Galaxy {
    pub fn position(&self) -> (f64, f64) {
        (self.pos[0], self.pos[1])
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }
}
