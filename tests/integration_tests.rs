use galaxygen::models::constants::{GALAXY_COUNT, GALAXY_NAMES, PLANET_NAMES};
use galaxygen::models::position::{distance, within_radius};
use galaxygen::{from_json, generate, to_json, Galaxy, Generator, PlanetType};

fn all_planets(galaxies: &[Galaxy]) -> impl Iterator<Item = &galaxygen::Planet> {
    galaxies.iter().flat_map(|g| g.planets.iter())
}

#[test]
fn generates_ninety_galaxies() {
    let galaxies = generate().unwrap();
    assert_eq!(galaxies.len(), 90);
    assert_eq!(GALAXY_COUNT, 90);
}

#[test]
fn every_record_is_in_range() {
    let galaxies = Generator::new(Some(2024)).unwrap().generate();

    for galaxy in &galaxies {
        assert!(GALAXY_NAMES.contains(&galaxy.name.as_str()));
        assert_eq!(galaxy.pos.len(), 2);
        assert!(galaxy.pos.iter().all(|&c| (0.0..=30.0).contains(&c)));
        assert!((1..=6).contains(&galaxy.planet_count()));
    }

    for planet in all_planets(&galaxies) {
        assert!(PLANET_NAMES.contains(&planet.name.as_str()));
        assert!((0.0..=100.0).contains(&planet.x));
        assert!((0.0..=100.0).contains(&planet.y));
        assert!((1.0..=10.0).contains(&planet.radius));
        assert!(PlanetType::ALL.contains(&planet.planet_type));
        assert!(planet.crystals <= 3);
        assert!(planet.fuel <= 1);
        assert!(planet.visited_by.is_empty());
    }
}

#[test]
fn same_seed_same_dataset() {
    let a = Generator::new(Some(100)).unwrap().generate();
    let b = Generator::new(Some(100)).unwrap().generate();
    assert_eq!(a, b);
}

#[test]
fn unseeded_runs_differ() {
    let a = generate().unwrap();
    let b = generate().unwrap();
    assert_eq!(a.len(), b.len());
    assert_ne!(a, b, "two unseeded runs should not match");
}

#[test]
fn event_and_component_rates() {
    let mut generator = Generator::new(Some(9)).unwrap();
    let planets: Vec<_> = (0..20_000).map(|_| generator.generate_planet()).collect();
    let n = planets.len() as f64;

    let events = planets.iter().filter(|p| p.has_event).count() as f64 / n;
    let components = planets.iter().filter(|p| p.has_component).count() as f64 / n;

    assert!((events - 0.10).abs() < 0.015, "event rate {}", events);
    assert!((components - 0.125).abs() < 0.015, "component rate {}", components);
}

#[test]
fn crystals_and_fuel_favor_zero() {
    let mut generator = Generator::new(Some(5)).unwrap();
    let planets: Vec<_> = (0..20_000).map(|_| generator.generate_planet()).collect();
    let n = planets.len() as f64;

    let no_crystals = planets.iter().filter(|p| p.crystals == 0).count() as f64 / n;
    let no_fuel = planets.iter().filter(|p| p.fuel == 0).count() as f64 / n;

    assert!((no_crystals - 0.6).abs() < 0.02, "crystals==0 rate {}", no_crystals);
    assert!((no_fuel - 0.95).abs() < 0.01, "fuel==0 rate {}", no_fuel);
}

#[test]
fn all_planet_types_appear() {
    let galaxies = Generator::new(Some(77)).unwrap().generate();
    for t in PlanetType::ALL {
        assert!(all_planets(&galaxies).any(|p| p.planet_type == t), "{} missing", t);
    }
}

#[test]
fn dataset_round_trips_through_json() {
    let galaxies = Generator::new(Some(31)).unwrap().generate();
    let json = to_json(&galaxies).unwrap();
    let parsed = from_json(&json).unwrap();
    assert_eq!(parsed, galaxies);
    assert_eq!(to_json(&parsed).unwrap(), json);
}

#[test]
fn galaxy_distances_on_the_map() {
    let galaxies = Generator::new(Some(8)).unwrap().generate();
    let first = galaxies[0].position();
    for galaxy in &galaxies {
        let d = distance(first, galaxy.position());
        // the map is 30x30
        assert!(d <= 30.0 * 2f64.sqrt() + 1e-9);
        assert!(within_radius(first, galaxy.position(), d));
    }
    for planet in all_planets(&galaxies) {
        assert!(distance((0.0, 0.0), planet.position()) <= 100.0 * 2f64.sqrt() + 1e-9);
    }
}
