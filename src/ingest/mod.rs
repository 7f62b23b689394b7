mod models;
mod parser;

pub use parser::{parse_records, parse_report};

/// Seed dataset shipped with the binary.
pub const SEED_CSV: &str = include_str!("../../data/housing.csv");
