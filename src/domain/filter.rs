// src/domain/filter.rs

use crate::domain::record::HousingRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// The dashboard filters. An empty field is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub county: String,
    pub category: String,
    /// Matched against `available_units`.
    pub status: String,
    /// Case-insensitive substring of project name or location.
    pub search: String,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.county.is_empty()
            && self.category.is_empty()
            && self.status.is_empty()
            && self.search.is_empty()
    }

    /// True when the record satisfies every active filter.
    pub fn matches(&self, record: &HousingRecord) -> bool {
        let county_ok = self.county.is_empty() || self.county == record.county;
        let category_ok = self.category.is_empty() || self.category == record.category.as_str();
        let status_ok = self.status.is_empty() || self.status == record.available_units;

        county_ok && category_ok && status_ok && self.matches_search(record)
    }

    fn matches_search(&self, record: &HousingRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.project_name.to_lowercase().contains(&needle)
            || record.location.to_lowercase().contains(&needle)
    }
}

/// Evaluates the filter against the full record set.
/// Borrows the records; the source set is never touched.
pub fn apply_filter<'a>(records: &'a [HousingRecord], filter: &FilterSpec) -> Vec<&'a HousingRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Distinct values offered by the filter panel, sorted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterOptions {
    pub counties: Vec<String>,
    pub categories: Vec<String>,
    pub statuses: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[HousingRecord]) -> Self {
        let mut counties = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut statuses = BTreeSet::new();

        for r in records {
            counties.insert(r.county.clone());
            categories.insert(r.category.as_str().to_string());
            statuses.insert(r.available_units.clone());
        }

        FilterOptions {
            counties: counties.into_iter().collect(),
            categories: categories.into_iter().collect(),
            statuses: statuses.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(county: &str, location: &str, project: &str, unit_type: &str, status: &str) -> HousingRecord {
        HousingRecord::new(
            county.to_string(),
            location.to_string(),
            project.to_string(),
            "Ongoing".to_string(),
            None,
            unit_type.to_string(),
            status.to_string(),
            1_000_000.0,
            None,
        )
    }

    fn sample() -> Vec<HousingRecord> {
        vec![
            record("Kiambu", "Ruiru", "Boma Yangu Ruiru", "1 Room Social", "Available"),
            record("Kiambu", "Thika", "Thika Heights", "2 Bedroom Unit Market", "Sold Out"),
            record("Nairobi", "Pangani", "Pangani Estate", "Studio Unit Affordable", "Available"),
            record("Lamu", "Mokowe", "Boma Yangu Mokowe", "Duplex", "Reserved"),
        ]
    }

    #[test]
    fn empty_filter_is_identity() {
        let records = sample();
        let filter = FilterSpec::default();
        assert!(filter.is_empty());

        let out = apply_filter(&records, &filter);
        assert_eq!(out.len(), records.len());
        for (a, b) in out.iter().zip(records.iter()) {
            assert!(std::ptr::eq(*a, b));
        }
    }

    #[test]
    fn county_match_is_exact() {
        let records = sample();
        let filter = FilterSpec {
            county: "Kiambu".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filter(&records, &filter).len(), 2);

        let lower = FilterSpec {
            county: "kiambu".to_string(),
            ..Default::default()
        };
        assert!(apply_filter(&records, &lower).is_empty());
    }

    #[test]
    fn category_and_status_filters() {
        let records = sample();
        let filter = FilterSpec {
            category: "Other".to_string(),
            ..Default::default()
        };
        let out = apply_filter(&records, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].unit_type, "Duplex");

        let filter = FilterSpec {
            status: "Sold Out".to_string(),
            ..Default::default()
        };
        let out = apply_filter(&records, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].project_name, "Thika Heights");
    }

    #[test]
    fn search_hits_project_or_location() {
        let records = sample();
        let by_name = FilterSpec {
            search: "BOMA yangu".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filter(&records, &by_name).len(), 2);

        let by_location = FilterSpec {
            search: "pang".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filter(&records, &by_location).len(), 1);
    }

    #[test]
    fn filters_are_anded() {
        let records = sample();
        let filter = FilterSpec {
            county: "Kiambu".to_string(),
            status: "Available".to_string(),
            search: "thika".to_string(),
            ..Default::default()
        };
        assert!(apply_filter(&records, &filter).is_empty());
    }

    #[test]
    fn options_are_sorted_and_distinct() {
        let records = sample();
        let options = FilterOptions::from_records(&records);
        assert_eq!(options.counties, vec!["Kiambu", "Lamu", "Nairobi"]);
        assert_eq!(options.categories, vec!["Affordable", "Market", "Other", "Social"]);
        assert_eq!(options.statuses, vec!["Available", "Reserved", "Sold Out"]);
    }
}
