use crate::analytics::group_by;
use crate::domain::{AvailabilityStatus, HousingRecord};
use serde::Serialize;

/// One slice of the availability donut.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityShare {
    pub status: String,
    pub count: usize,
    pub percentage: f64,
    pub color: &'static str,
}

/// Share of units per availability label, in first-appearance order.
pub fn availability_analysis(records: &[&HousingRecord]) -> Vec<AvailabilityShare> {
    let total = records.len() as f64;

    group_by(records, |r| r.available_units.clone())
        .into_iter()
        .map(|(status, group)| {
            let color = AvailabilityStatus::from_label(&status).color();
            AvailabilityShare {
                count: group.len(),
                percentage: group.len() as f64 / total * 100.0,
                color,
                status,
            }
        })
        .collect()
}
