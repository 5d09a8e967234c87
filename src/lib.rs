//! Galaxy dataset generator
//!
//! Produces a synthetic list of galaxies, each holding a handful of planets
//! with randomized attributes, and prints it as JSON. The output is meant
//! for seeding a game map or a test fixture.
//!
//! # Modules
//!
//! - [`models`] - Data records, catalogs and weight tables
//! - [`services`] - The dataset generator
//! - [`io`] - JSON encoding and output abstractions
//! - [`cli`] - Command-line parsing
//!
//! # Example
//!
//! ```rust
//! use galaxygen::{Generator, to_json};
//!
//! let mut generator = Generator::new(Some(42)).unwrap();
//! let galaxies = generator.generate();
//! assert_eq!(galaxies.len(), 90);
//! let json = to_json(&galaxies).unwrap();
//! assert!(json.starts_with('['));
//! ```

pub mod cli;
pub mod io;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use io::{from_json, to_json};
pub use models::errors::{GenError, GenResult};
pub use models::galaxy::Galaxy;
pub use models::planet::{Planet, PlanetType};
pub use services::generator::{generate, Generator};
