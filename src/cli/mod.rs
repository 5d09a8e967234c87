//! Command-line parsing

pub mod args;
