use crate::analytics::{BedroomStats, CategoryPrice, CountySortKey, CountyStats, Dashboard};
use crate::domain::{FilterOptions, FilterSpec};
use crate::templates::components::{bar_row, chart_card, donut_chart, empty_state, stat_card};
use crate::templates::desktop_layout;
use crate::templates::format::{compact_amount, grouped, kes};
use maud::{html, Markup};

pub const DASHBOARD_TITLE: &str = "Housing Projects Dashboard";

// Cycled across bedroom buckets.
const BEDROOM_COLORS: [&str; 5] = ["#2563EB", "#059669", "#EA580C", "#9333EA", "#C2410C"];

pub fn dashboard_page(dashboard: &Dashboard, generated_at: &str) -> Markup {
    desktop_layout(
        DASHBOARD_TITLE,
        generated_at,
        html! {
            main {
                (filter_panel(&dashboard.filter, &dashboard.options, dashboard.records.len(), dashboard.record_count))
                (stat_cards(dashboard))

                div class="grid grid-2" {
                    (chart_card(
                        "Price Distribution by Category",
                        "Average prices across housing categories",
                        price_bars(&dashboard.price_by_category),
                    ))
                    (chart_card(
                        "Unit Availability Status",
                        "Current availability across all units",
                        if dashboard.availability.is_empty() { empty_state() } else { donut_chart(&dashboard.availability) },
                    ))
                }

                div class="grid grid-2" {
                    (chart_card(
                        "County Distribution",
                        &format!("Top counties by {}", dashboard.sort_key.description()),
                        county_bars(&dashboard.top_counties, dashboard.sort_key),
                    ))
                    (chart_card(
                        "Bedroom Analysis",
                        "Unit count and pricing by bedroom configuration",
                        bedroom_bars(&dashboard.bedrooms),
                    ))
                }

                (highlight_cards(dashboard))
            }
        },
    )
}

pub fn filter_panel(filter: &FilterSpec, options: &FilterOptions, matched: usize, total: usize) -> Markup {
    let shown = |value: &str| -> String {
        if value.is_empty() {
            "All".to_string()
        } else {
            value.to_string()
        }
    };

    html! {
        section class="card" style="margin-bottom: 2rem;" {
            dl class="filters" {
                div { dt { "County" } dd { (shown(&filter.county)) } }
                div { dt { "Category" } dd { (shown(&filter.category)) } }
                div { dt { "Status" } dd { (shown(&filter.status)) } }
                div { dt { "Search" } dd { (shown(&filter.search)) } }
            }
            @if filter.is_empty() {
                p class="stat-subtitle" { "No filters applied." }
            }
            p class="stat-subtitle" {
                "Showing " strong { (matched) } " of " (total) " listings across "
                (options.counties.len()) " counties. "
                "Categories: " (options.categories.join(", ")) ". "
                "Statuses: " (options.statuses.join(", ")) "."
            }
        }
    }
}

fn stat_cards(dashboard: &Dashboard) -> Markup {
    let stats = &dashboard.stats;
    html! {
        div class="grid grid-4" {
            (stat_card("Total Projects", &stats.total_projects.to_string(), "Across Kenya"))
            (stat_card(
                "Total Housing Units",
                &grouped(stats.total_units),
                &format!("In {} counties", stats.total_counties),
            ))
            (stat_card("Average Price", &kes(stats.average_price), "Per unit"))
            (stat_card(
                "Available Units",
                &stats.available_units.to_string(),
                &format!("{} sold out", stats.sold_out_units),
            ))
        }
    }
}

fn price_bars(rows: &[CategoryPrice]) -> Markup {
    let max = rows.iter().map(|r| r.avg_price).fold(0.0, f64::max);
    html! {
        @if rows.is_empty() {
            (empty_state())
        }
        @for row in rows {
            (bar_row(
                row.category.as_str(),
                &format!("{} ({} units)", kes(row.avg_price), row.count),
                row.avg_price,
                max,
                row.color,
            ))
        }
    }
}

fn county_bars(rows: &[CountyStats], key: CountySortKey) -> Markup {
    let metric = |c: &CountyStats| -> f64 {
        match key {
            CountySortKey::Projects => c.total_projects as f64,
            CountySortKey::Units => c.total_units as f64,
            CountySortKey::Price => c.avg_price,
        }
    };
    let max = rows.iter().map(|c| metric(c)).fold(0.0, f64::max);

    html! {
        @if rows.is_empty() {
            (empty_state())
        }
        @for row in rows {
            (bar_row(
                &row.county,
                &format!(
                    "{} projects · {} units · avg {}",
                    row.total_projects,
                    grouped(row.total_units),
                    kes(row.avg_price)
                ),
                metric(row),
                max,
                "#2563EB",
            ))
        }
    }
}

fn bedroom_bars(rows: &[BedroomStats]) -> Markup {
    let max_count = rows.iter().map(|r| r.count as f64).fold(0.0, f64::max);
    let max_price = rows.iter().map(|r| r.avg_price).fold(0.0, f64::max);

    html! {
        @if rows.is_empty() {
            (empty_state())
        } @else {
            div class="grid grid-2" style="margin-bottom: 0;" {
                div {
                    h4 { "Unit Count by Bedroom Type" }
                    @for (i, row) in rows.iter().enumerate() {
                        (bar_row(&row.label, &format!("{} units", row.count), row.count as f64, max_count, BEDROOM_COLORS[i % BEDROOM_COLORS.len()]))
                    }
                }
                div {
                    h4 { "Average Price by Bedroom Type" }
                    @for (i, row) in rows.iter().enumerate() {
                        (bar_row(
                            &row.label,
                            &format!("KES {} · ~{}/month", compact_amount(row.avg_price), compact_amount(row.avg_monthly_payment)),
                            row.avg_price,
                            max_price,
                            BEDROOM_COLORS[i % BEDROOM_COLORS.len()],
                        ))
                    }
                }
            }
        }
    }
}

fn highlight_cards(dashboard: &Dashboard) -> Markup {
    let highlights = &dashboard.highlights;
    let monthly = dashboard.stats.avg_monthly_payment;
    let monthly = if monthly.is_nan() {
        kes(monthly)
    } else {
        format!("KES {:.0}K", monthly / 1_000.0)
    };

    html! {
        div class="grid grid-3" {
            (stat_card("Average Monthly Payment", &monthly, "Based on available data"))
            (stat_card(
                "Most Active County",
                highlights.most_active_county.as_deref().unwrap_or("N/A"),
                &format!("{} projects", highlights.most_active_projects),
            ))
            (stat_card(
                "Largest Project",
                &highlights
                    .largest_project_units
                    .map(|n| grouped(u64::from(n)))
                    .unwrap_or_else(|| "N/A".to_string()),
                "Units in single project",
            ))
        }
    }
}
