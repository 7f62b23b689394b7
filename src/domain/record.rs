// src/domain/record.rs

use crate::domain::logic::{classify_bedrooms, classify_category};
use serde::Serialize;
use std::fmt;

/// Availability label that counts as open stock.
pub const STATUS_AVAILABLE: &str = "Available";
/// Availability label for fully sold projects.
pub const STATUS_SOLD_OUT: &str = "Sold Out";

const COLOR_BLUE: &str = "#2563EB";
const COLOR_GREEN: &str = "#059669";
const COLOR_ORANGE: &str = "#EA580C";
const COLOR_RED: &str = "#DC2626";
const COLOR_GRAY: &str = "#6B7280";

/// Pricing tier of a unit type, derived from its free-text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Social,
    Affordable,
    Market,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Social => "Social",
            Category::Affordable => "Affordable",
            Category::Market => "Market",
            Category::Other => "Other",
        }
    }

    /// Chart color for the category. `Other` shares the neutral fallback.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Social => COLOR_BLUE,
            Category::Affordable => COLOR_GREEN,
            Category::Market => COLOR_ORANGE,
            Category::Other => COLOR_GRAY,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known availability labels. Anything else is `Other` and keeps the
/// neutral color; the raw label stays on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    Available,
    SoldOut,
    Other,
}

impl AvailabilityStatus {
    pub fn from_label(label: &str) -> Self {
        match label {
            STATUS_AVAILABLE => AvailabilityStatus::Available,
            STATUS_SOLD_OUT => AvailabilityStatus::SoldOut,
            _ => AvailabilityStatus::Other,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => COLOR_GREEN,
            AvailabilityStatus::SoldOut => COLOR_RED,
            AvailabilityStatus::Other => COLOR_GRAY,
        }
    }
}

/// One unit-type row of a housing project, normalized from the CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousingRecord {
    // === Project identity ===
    pub county: String,
    pub location: String,
    pub project_name: String,
    pub project_status: String,
    /// Declared once per project in the source sheet, usually absent.
    pub total_units: Option<u32>,

    // === Unit details ===
    pub unit_type: String,
    pub available_units: String,
    pub price: f64,
    pub monthly_payment: Option<f64>,

    // === Derived from unit_type ===
    pub category: Category,
    pub bedrooms: Option<u8>,
}

impl HousingRecord {
    /// Builds a record from already-coerced fields. The derived fields are
    /// always computed here so they can never drift from `unit_type`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        county: String,
        location: String,
        project_name: String,
        project_status: String,
        total_units: Option<u32>,
        unit_type: String,
        available_units: String,
        price: f64,
        monthly_payment: Option<f64>,
    ) -> Self {
        let category = classify_category(&unit_type);
        let bedrooms = classify_bedrooms(&unit_type);

        HousingRecord {
            county,
            location,
            project_name,
            project_status,
            total_units,
            unit_type,
            available_units,
            price,
            monthly_payment,
            category,
            bedrooms,
        }
    }

    /// Records kept in the working set have a county and a positive price.
    pub fn is_listable(&self) -> bool {
        !self.county.is_empty() && self.price > 0.0
    }

    /// Unit count contributed to totals: the declared project total, or 1.
    pub fn unit_weight(&self) -> u64 {
        match self.total_units {
            Some(n) if n > 0 => u64::from(n),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(unit_type: &str, price: f64) -> HousingRecord {
        HousingRecord::new(
            "Nairobi".to_string(),
            "Pangani".to_string(),
            "Pangani Estate".to_string(),
            "Ongoing".to_string(),
            None,
            unit_type.to_string(),
            "Available".to_string(),
            price,
            None,
        )
    }

    #[test]
    fn derived_fields_follow_unit_type() {
        let r = record("2 Bedroom Unit Market", 3_600_000.0);
        assert_eq!(r.category, Category::Market);
        assert_eq!(r.bedrooms, Some(2));
    }

    #[test]
    fn listable_requires_county_and_positive_price() {
        assert!(record("Studio", 1.0).is_listable());
        assert!(!record("Studio", 0.0).is_listable());

        let mut no_county = record("Studio", 10.0);
        no_county.county.clear();
        assert!(!no_county.is_listable());
    }

    #[test]
    fn unit_weight_defaults_to_one() {
        let mut r = record("Studio", 1.0);
        assert_eq!(r.unit_weight(), 1);
        r.total_units = Some(0);
        assert_eq!(r.unit_weight(), 1);
        r.total_units = Some(420);
        assert_eq!(r.unit_weight(), 420);
    }

    #[test]
    fn unknown_status_uses_fallback_color() {
        assert_eq!(AvailabilityStatus::from_label("Available").color(), "#059669");
        assert_eq!(AvailabilityStatus::from_label("Sold Out").color(), "#DC2626");
        assert_eq!(AvailabilityStatus::from_label("Reserved"), AvailabilityStatus::Other);
        assert_eq!(AvailabilityStatus::Other.color(), Category::Other.color());
    }
}
