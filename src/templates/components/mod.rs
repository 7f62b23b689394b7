use maud::{html, Markup};

pub mod donut;

pub use donut::donut_chart;

use crate::templates::format::bar_width;

pub fn stat_card(title: &str, value: &str, subtitle: &str) -> Markup {
    html! {
        div class="card stat-card" {
            h3 class="stat-title" { (title) }
            div class="stat-value" { (value) }
            p class="stat-subtitle" { (subtitle) }
        }
    }
}

pub fn chart_card(title: &str, subtitle: &str, body: Markup) -> Markup {
    html! {
        section class="card chart-card" {
            h2 { (title) }
            p class="chart-subtitle" { (subtitle) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Labelled horizontal bar. `value` is scaled against `max`.
pub fn bar_row(label: &str, caption: &str, value: f64, max: f64, color: &str) -> Markup {
    html! {
        div class="bar-row" {
            div class="bar-labels" {
                span class="bar-label" { (label) }
                span class="bar-caption" { (caption) }
            }
            div class="bar-track" {
                div class="bar-fill" style=(format!("width: {}; background-color: {color};", bar_width(value, max))) {}
            }
        }
    }
}

/// Rendered when a chart has nothing to show for the current filters.
pub fn empty_state() -> Markup {
    html! {
        p class="empty" { "No listings match the current filters." }
    }
}
