//! Dataset generator
//!
//! Builds the galaxy list with independent random draws per field. The
//! weight tables are turned into distributions once, when the generator is
//! created.

use log::{debug, info, trace};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::constants::{
    COMPONENT_PROBABILITY, CRYSTAL_WEIGHTS, EVENT_PROBABILITY, FUEL_WEIGHTS, GALAXY_COUNT,
    GALAXY_NAMES, GALAXY_POS_RANGE, PLANET_COORD_RANGE, PLANET_COUNT_WEIGHTS, PLANET_NAMES,
    PLANET_RADIUS_RANGE,
};
use crate::models::errors::GenResult;
use crate::models::galaxy::Galaxy;
use crate::models::planet::{Planet, PlanetType};

/// A value table with its relative weights, ready for sampling.
struct WeightedTable<T: Copy> {
    values: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T: Copy> WeightedTable<T> {
    fn new(table: &[(T, f64)]) -> GenResult<Self> {
        let index = WeightedIndex::new(table.iter().map(|&(_, w)| w))?;
        Ok(WeightedTable {
            values: table.iter().map(|&(v, _)| v).collect(),
            index,
        })
    }

    fn sample(&self, rng: &mut StdRng) -> T {
        self.values[self.index.sample(rng)]
    }
}

/// Check that a weight table can be sampled from: non-empty, no negative
/// or non-finite weights, and a positive total.
pub fn validate_weights<T: Copy>(table: &[(T, f64)]) -> GenResult<()> {
    WeightedTable::new(table).map(|_| ())
}

/// Round to 2 decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn uniform(rng: &mut StdRng, range: (f64, f64)) -> f64 {
    round2(rng.gen_range(range.0..=range.1))
}

fn pick_name(rng: &mut StdRng, catalog: &[&str]) -> String {
    catalog[rng.gen_range(0..catalog.len())].to_string()
}

pub struct Generator {
    rng: StdRng,
    planet_counts: WeightedTable<usize>,
    crystals: WeightedTable<u32>,
    fuel: WeightedTable<u32>,
}

impl Generator {
    /// Create a generator. Without a seed the RNG is seeded from system
    /// entropy and every run differs.
    pub fn new(seed: Option<u64>) -> GenResult<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Generator {
            rng,
            planet_counts: WeightedTable::new(&PLANET_COUNT_WEIGHTS)?,
            crystals: WeightedTable::new(&CRYSTAL_WEIGHTS)?,
            fuel: WeightedTable::new(&FUEL_WEIGHTS)?,
        })
    }

    /// Generate the full dataset of `GALAXY_COUNT` galaxies.
    pub fn generate(&mut self) -> Vec<Galaxy> {
        let galaxies: Vec<Galaxy> = (0..GALAXY_COUNT).map(|_| self.generate_galaxy()).collect();
        let planets: usize = galaxies.iter().map(Galaxy::planet_count).sum();
        info!("generated {} galaxies with {} planets", galaxies.len(), planets);
        galaxies
    }

    pub fn generate_galaxy(&mut self) -> Galaxy {
        let name = pick_name(&mut self.rng, &GALAXY_NAMES);
        let pos = [
            uniform(&mut self.rng, GALAXY_POS_RANGE),
            uniform(&mut self.rng, GALAXY_POS_RANGE),
        ];
        let count = self.planet_counts.sample(&mut self.rng);
        debug!("galaxy {} at {:?} with {} planets", name, pos, count);

        let planets = (0..count).map(|_| self.generate_planet()).collect();
        Galaxy { name, pos, planets }
    }

    pub fn generate_planet(&mut self) -> Planet {
        let rng = &mut self.rng;
        let name = pick_name(rng, &PLANET_NAMES);
        let x = uniform(rng, PLANET_COORD_RANGE);
        let y = uniform(rng, PLANET_COORD_RANGE);
        let radius = uniform(rng, PLANET_RADIUS_RANGE);
        let has_event = rng.gen_bool(EVENT_PROBABILITY);
        let has_component = rng.gen_bool(COMPONENT_PROBABILITY);
        let crystals = self.crystals.sample(rng);
        let fuel = self.fuel.sample(rng);
        let planet_type = PlanetType::ALL[rng.gen_range(0..PlanetType::ALL.len())];
        trace!("planet {} ({}) at ({}, {})", name, planet_type, x, y);

        Planet {
            name,
            x,
            y,
            radius,
            planet_type,
            has_event,
            has_component,
            crystals,
            fuel,
            visited_by: Vec::new(),
        }
    }
}

/// Generate a dataset from an entropy-seeded generator.
pub fn generate() -> GenResult<Vec<Galaxy>> {
    Ok(Generator::new(None)?.generate())
}
