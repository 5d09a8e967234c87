//! Domain models
//!
//! Plain data records for the generated dataset plus the fixed catalogs
//! and weight tables the generator draws from.

pub mod constants;
pub mod errors;
pub mod galaxy;
pub mod planet;
pub mod position;
