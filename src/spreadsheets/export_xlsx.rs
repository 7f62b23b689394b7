use crate::analytics::Dashboard;
use crate::errors::AppResult;
use rust_xlsxwriter::{Workbook, Worksheet};

const LISTING_HEADERS: [&str; 11] = [
    "County",
    "Location",
    "Project",
    "Project Status",
    "Total Units",
    "Unit Type",
    "Availability",
    "Price (KES)",
    "Monthly Payment (KES)",
    "Category",
    "Bedrooms",
];

/// Builds a workbook with the filtered listings and the summary figures.
pub fn export_dashboard_xlsx(dashboard: &Dashboard, generated_at: &str) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    let listings = workbook.add_worksheet();
    listings.set_name("Listings")?;
    write_listings(listings, dashboard)?;

    let summary = workbook.add_worksheet();
    summary.set_name("Summary")?;
    write_summary(summary, dashboard, generated_at)?;

    Ok(workbook.save_to_buffer()?)
}

fn write_listings(sheet: &mut Worksheet, dashboard: &Dashboard) -> AppResult<()> {
    for (col, header) in LISTING_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (i, record) in dashboard.records.iter().enumerate() {
        let r = (i + 1) as u32;

        sheet.write_string(r, 0, &record.county)?;
        sheet.write_string(r, 1, &record.location)?;
        sheet.write_string(r, 2, &record.project_name)?;
        sheet.write_string(r, 3, &record.project_status)?;
        if let Some(units) = record.total_units {
            sheet.write_number(r, 4, f64::from(units))?;
        }
        sheet.write_string(r, 5, &record.unit_type)?;
        sheet.write_string(r, 6, &record.available_units)?;
        sheet.write_number(r, 7, record.price)?;
        if let Some(payment) = record.monthly_payment {
            sheet.write_number(r, 8, payment)?;
        }
        sheet.write_string(r, 9, record.category.as_str())?;
        if let Some(bedrooms) = record.bedrooms {
            sheet.write_number(r, 10, f64::from(bedrooms))?;
        }
    }

    Ok(())
}

fn write_summary(sheet: &mut Worksheet, dashboard: &Dashboard, generated_at: &str) -> AppResult<()> {
    let stats = &dashboard.stats;
    let rows: [(&str, f64); 7] = [
        ("Total Projects", stats.total_projects as f64),
        ("Total Units", stats.total_units as f64),
        ("Average Price (KES)", stats.average_price),
        ("Available", stats.available_units as f64),
        ("Sold Out", stats.sold_out_units as f64),
        ("Average Monthly Payment (KES)", stats.avg_monthly_payment),
        ("Counties", stats.total_counties as f64),
    ];

    sheet.write_string(0, 0, "Metric")?;
    sheet.write_string(0, 1, "Value")?;

    for (i, (label, value)) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, *label)?;
        // Empty averages stay blank rather than writing NaN.
        if value.is_finite() {
            sheet.write_number(r, 1, *value)?;
        }
    }

    let footer = (rows.len() + 2) as u32;
    sheet.write_string(footer, 0, "Generated")?;
    sheet.write_string(footer, 1, generated_at)?;

    Ok(())
}
