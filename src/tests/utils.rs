use crate::domain::HousingRecord;
use crate::ingest::{parse_records, SEED_CSV};

/// Parses the bundled seed dataset, the same input the binary uses by default.
pub fn seed_records() -> Vec<HousingRecord> {
    parse_records(SEED_CSV)
}
