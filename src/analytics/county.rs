use crate::analytics::{group_by, mean};
use crate::domain::HousingRecord;
use serde::Serialize;
use std::collections::HashSet;

/// How many counties the chart shows.
pub const TOP_COUNTIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyStats {
    pub county: String,
    pub total_projects: usize,
    pub total_units: u64,
    pub avg_price: f64,
}

/// Ordering for the county chart. Every key sorts descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CountySortKey {
    #[default]
    Projects,
    Units,
    Price,
}

impl CountySortKey {
    pub fn description(&self) -> &'static str {
        match self {
            CountySortKey::Projects => "number of projects",
            CountySortKey::Units => "total units",
            CountySortKey::Price => "average price",
        }
    }
}

/// Per-county figures in first-appearance order. Sorting is left to
/// [`sorted_counties`] so any key can be applied without regrouping.
pub fn county_distribution(records: &[&HousingRecord]) -> Vec<CountyStats> {
    group_by(records, |r| r.county.clone())
        .into_iter()
        .map(|(county, group)| {
            let projects: HashSet<&str> = group.iter().map(|r| r.project_name.as_str()).collect();
            CountyStats {
                county,
                total_projects: projects.len(),
                total_units: group.iter().map(|r| r.unit_weight()).sum(),
                avg_price: mean(group.iter().map(|r| r.price)),
            }
        })
        .collect()
}

/// Stable descending sort on the chosen key; ties keep input order.
pub fn sorted_counties(counties: &[CountyStats], key: CountySortKey) -> Vec<CountyStats> {
    let mut sorted = counties.to_vec();
    match key {
        CountySortKey::Projects => sorted.sort_by(|a, b| b.total_projects.cmp(&a.total_projects)),
        CountySortKey::Units => sorted.sort_by(|a, b| b.total_units.cmp(&a.total_units)),
        CountySortKey::Price => sorted.sort_by(|a, b| b.avg_price.total_cmp(&a.avg_price)),
    }
    sorted
}

pub fn top_counties(counties: &[CountyStats], key: CountySortKey, n: usize) -> Vec<CountyStats> {
    let mut sorted = sorted_counties(counties, key);
    sorted.truncate(n);
    sorted
}
