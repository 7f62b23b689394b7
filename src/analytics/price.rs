use crate::analytics::{group_by, mean};
use crate::domain::{Category, HousingRecord};
use serde::Serialize;

/// One bar of the price-by-category chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPrice {
    pub category: Category,
    pub avg_price: f64,
    pub count: usize,
    pub color: &'static str,
}

/// Average price per category, cheapest first.
pub fn price_by_category(records: &[&HousingRecord]) -> Vec<CategoryPrice> {
    let mut rows: Vec<CategoryPrice> = group_by(records, |r| r.category)
        .into_iter()
        .map(|(category, group)| CategoryPrice {
            category,
            avg_price: mean(group.iter().map(|r| r.price)),
            count: group.len(),
            color: category.color(),
        })
        .collect();

    rows.sort_by(|a, b| a.avg_price.total_cmp(&b.avg_price));
    rows
}
