use crate::analytics::mean;
use crate::domain::{HousingRecord, STATUS_AVAILABLE, STATUS_SOLD_OUT};
use serde::Serialize;
use std::collections::HashSet;

/// Headline numbers for the stat cards.
///
/// Averages are `NaN` when there is nothing to average; the templates show
/// a placeholder for those.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_projects: usize,
    pub total_units: u64,
    pub average_price: f64,
    pub available_units: usize,
    pub sold_out_units: usize,
    pub avg_monthly_payment: f64,
    pub total_counties: usize,
}

pub fn summary_stats(records: &[&HousingRecord]) -> SummaryStats {
    let projects: HashSet<&str> = records.iter().map(|r| r.project_name.as_str()).collect();
    let counties: HashSet<&str> = records.iter().map(|r| r.county.as_str()).collect();

    let count_status = |label: &str| records.iter().filter(|r| r.available_units == label).count();

    SummaryStats {
        total_projects: projects.len(),
        total_units: records.iter().map(|r| r.unit_weight()).sum(),
        average_price: mean(records.iter().map(|r| r.price)),
        available_units: count_status(STATUS_AVAILABLE),
        sold_out_units: count_status(STATUS_SOLD_OUT),
        avg_monthly_payment: mean(records.iter().filter_map(|r| r.monthly_payment)),
        total_counties: counties.len(),
    }
}
