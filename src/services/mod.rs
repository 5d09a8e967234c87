//! Services
//!
//! Everything that produces data lives here.

pub mod generator;
