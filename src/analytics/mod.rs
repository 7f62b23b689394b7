//! Summary views computed from a filtered set of listings.
//!
//! Every view takes the filtered records and is computed from scratch; no
//! view depends on another.

pub mod availability;
pub mod bedrooms;
pub mod county;
pub mod price;
pub mod stats;

pub use availability::{availability_analysis, AvailabilityShare};
pub use bedrooms::{bedroom_analysis, BedroomStats};
pub use county::{county_distribution, top_counties, CountySortKey, CountyStats, TOP_COUNTIES};
pub use price::{price_by_category, CategoryPrice};
pub use stats::{summary_stats, SummaryStats};

use crate::domain::{apply_filter, FilterOptions, FilterSpec, HousingRecord};
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

/// Arithmetic mean, `NaN` for an empty input.
pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    sum / n as f64
}

/// Groups records by `key`, keeping groups in first-appearance order.
pub(crate) fn group_by<'a, K, F>(records: &[&'a HousingRecord], key: F) -> Vec<(K, Vec<&'a HousingRecord>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&HousingRecord) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a HousingRecord>)> = Vec::new();

    for &record in records {
        let k = key(record);
        match index.get(&k) {
            Some(&i) => groups[i].1.push(record),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![record]));
            }
        }
    }

    groups
}

/// Figures for the bottom row of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Highlights {
    pub most_active_county: Option<String>,
    pub most_active_projects: usize,
    /// Largest declared project size, if any row declares one.
    pub largest_project_units: Option<u32>,
}

impl Highlights {
    pub fn compute(records: &[&HousingRecord], counties: &[CountyStats]) -> Self {
        // Ties go to the first county seen.
        let busiest = counties.iter().fold(None::<&CountyStats>, |best, c| match best {
            Some(b) if b.total_projects >= c.total_projects => Some(b),
            _ => Some(c),
        });

        Highlights {
            most_active_county: busiest.map(|c| c.county.clone()),
            most_active_projects: busiest.map(|c| c.total_projects).unwrap_or(0),
            largest_project_units: records.iter().filter_map(|r| r.total_units).max(),
        }
    }
}

/// Everything the dashboard shows for one filter state.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard<'a> {
    pub filter: FilterSpec,
    pub options: FilterOptions,
    pub sort_key: CountySortKey,
    /// Size of the unfiltered set.
    pub record_count: usize,
    #[serde(skip)]
    pub records: Vec<&'a HousingRecord>,

    pub stats: SummaryStats,
    pub price_by_category: Vec<CategoryPrice>,
    pub counties: Vec<CountyStats>,
    pub top_counties: Vec<CountyStats>,
    pub bedrooms: Vec<BedroomStats>,
    pub availability: Vec<AvailabilityShare>,
    pub highlights: Highlights,
}

impl<'a> Dashboard<'a> {
    /// Filters the full record set and computes every view.
    pub fn build(all: &'a [HousingRecord], filter: &FilterSpec, sort_key: CountySortKey) -> Self {
        let records = apply_filter(all, filter);
        debug!(
            total = all.len(),
            matched = records.len(),
            ?filter,
            "Building dashboard"
        );

        let counties = county_distribution(&records);

        Dashboard {
            filter: filter.clone(),
            options: FilterOptions::from_records(all),
            sort_key,
            record_count: all.len(),
            stats: summary_stats(&records),
            price_by_category: price_by_category(&records),
            top_counties: top_counties(&counties, sort_key, TOP_COUNTIES),
            bedrooms: bedroom_analysis(&records),
            availability: availability_analysis(&records),
            highlights: Highlights::compute(&records, &counties),
            counties,
            records,
        }
    }
}
