/// Number of galaxies in a generated dataset.
pub const GALAXY_COUNT: usize = 90;

/// Galaxy `pos` components are drawn from this closed range.
pub const GALAXY_POS_RANGE: (f64, f64) = (0.0, 30.0);
/// Planet `x` and `y` are drawn from this closed range.
pub const PLANET_COORD_RANGE: (f64, f64) = (0.0, 100.0);
pub const PLANET_RADIUS_RANGE: (f64, f64) = (1.0, 10.0);

pub const EVENT_PROBABILITY: f64 = 1.0 / 10.0;
pub const COMPONENT_PROBABILITY: f64 = 1.0 / 8.0;

/// Planets per galaxy as (count, weight). Weights are relative and are
/// normalized by their sum, which is 1.2 here.
pub const PLANET_COUNT_WEIGHTS: [(usize, f64); 6] =
    [(1, 0.2), (2, 0.2), (3, 0.2), (4, 0.4), (5, 0.1), (6, 0.1)];

pub const CRYSTAL_WEIGHTS: [(u32, f64); 4] = [(0, 0.6), (1, 0.2), (2, 0.15), (3, 0.05)];

pub const FUEL_WEIGHTS: [(u32, f64); 2] = [(0, 0.95), (1, 0.05)];

/// Galaxy name catalog. Repeated entries are intentional: they are drawn
/// twice as often.
pub const GALAXY_NAMES: [&str; 45] = [
    "Andromeda", "Milky Way", "Triangulum", "Whirlpool", "Sombrero",
    "Pinwheel", "Cartwheel", "Tuscana", "Centaurus", "Virgo",
    "Hercules", "Draco", "Phoenix", "Lynx", "Sculptor",
    "Fornax", "Aquarius", "Pegasus", "Ursa Major", "Ursa Minor",
    "Cassiopeia", "Perseus", "Orion", "Cygnus", "Leo",
    "Taurus", "Scorpius", "Sagittarius", "Capricornus", "Aquila",
    "Canis Major", "Canis Minor", "Bootes", "Lyra", "Crux",
    "Pavo", "Phoenix", "Hydra", "Columba", "Lupus",
    "Centaurus", "Ara", "Vulpecula", "Serpens", "Aquila",
];

/// Planet name catalog, duplicates included.
pub const PLANET_NAMES: [&str; 50] = [
    "Zyphor", "Krypton", "Blargon", "Xandar", "Vulcan",
    "Naboo", "Hoth", "Tatooine", "Dagobah", "Endor",
    "Mustafar", "Jakku", "Kashyyyk", "Coruscant", "Bespin",
    "Dantooine", "Geonosis", "Ryloth", "Mon Cala", "Lothal",
    "Felucia", "Zonama Sekot", "Alderaan", "Bespin", "Jakku",
    "Kessel", "Mandalore", "Raxus Prime", "Sullust", "Tatooine",
    "Yavin", "Dathomir", "Korriban", "Balmorra", "Zakuul",
    "Zakuul", "Korriban", "Taris", "Naboo", "Hoth",
    "Rishi", "Lothal", "Bespin", "Dantooine", "Geonosis",
    "Ryloth", "Mon Cala", "Felucia", "Alderaan", "Kashyyyk",
];
