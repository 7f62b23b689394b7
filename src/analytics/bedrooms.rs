use crate::analytics::{group_by, mean};
use crate::domain::HousingRecord;
use serde::Serialize;

/// Display grouping for the bedroom chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BedroomBucket {
    Studio,
    /// 1 to 3 bedrooms.
    Bedrooms(u8),
    FourPlus,
    /// Unit types only described as "N room" in a form the classifier missed.
    Rooms(u8),
    Unknown,
}

impl BedroomBucket {
    pub fn for_record(record: &HousingRecord) -> Self {
        match record.bedrooms {
            Some(0) => BedroomBucket::Studio,
            Some(n @ 1..=3) => BedroomBucket::Bedrooms(n),
            Some(_) => BedroomBucket::FourPlus,
            None => Self::from_room_label(&record.unit_type),
        }
    }

    fn from_room_label(unit_type: &str) -> Self {
        if !unit_type.to_lowercase().contains("room") {
            return BedroomBucket::Unknown;
        }
        ['1', '2', '3']
            .iter()
            .zip(1u8..)
            .find(|(digit, _)| unit_type.contains(**digit))
            .map(|(_, n)| BedroomBucket::Rooms(n))
            .unwrap_or(BedroomBucket::Unknown)
    }

    pub fn label(&self) -> String {
        match self {
            BedroomBucket::Studio => "Studio".to_string(),
            BedroomBucket::Bedrooms(1) => "1 Bedroom".to_string(),
            BedroomBucket::Bedrooms(n) => format!("{n} Bedrooms"),
            BedroomBucket::FourPlus => "4+ Bedrooms".to_string(),
            BedroomBucket::Rooms(1) => "1 Room".to_string(),
            BedroomBucket::Rooms(n) => format!("{n} Rooms"),
            BedroomBucket::Unknown => "Unknown".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BedroomStats {
    pub label: String,
    pub count: usize,
    pub avg_price: f64,
    /// 0 when no unit in the bucket lists a monthly payment.
    pub avg_monthly_payment: f64,
}

/// Unit counts and pricing per bedroom bucket, largest bucket first.
/// Records that fit no bucket are left out.
pub fn bedroom_analysis(records: &[&HousingRecord]) -> Vec<BedroomStats> {
    let mut rows: Vec<BedroomStats> = group_by(records, BedroomBucket::for_record)
        .into_iter()
        .filter(|(bucket, _)| *bucket != BedroomBucket::Unknown)
        .map(|(bucket, group)| {
            let payments: Vec<f64> = group.iter().filter_map(|r| r.monthly_payment).collect();
            BedroomStats {
                label: bucket.label(),
                count: group.len(),
                avg_price: mean(group.iter().map(|r| r.price)),
                avg_monthly_payment: if payments.is_empty() {
                    0.0
                } else {
                    mean(payments.into_iter())
                },
            }
        })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}
