use crate::analytics::AvailabilityShare;
use crate::templates::format::{grouped, percent};
use maud::{html, Markup};
use std::f64::consts::PI;

// Matches the `r` attribute below.
const RADIUS: f64 = 70.0;

/// Donut of availability shares. Each slice is a dashed circle stroke
/// offset by the slices before it, starting at twelve o'clock.
pub fn donut_chart(shares: &[AvailabilityShare]) -> Markup {
    let circumference = 2.0 * PI * RADIUS;
    let total: usize = shares.iter().map(|s| s.count).sum();

    let mut offset = 0.0;
    let slices: Vec<(String, String, &str)> = shares
        .iter()
        .map(|share| {
            let length = share.percentage / 100.0 * circumference;
            let dash = format!("{:.3} {:.3}", length, circumference - length);
            let dash_offset = format!("{:.3}", -offset);
            offset += length;
            (dash, dash_offset, share.color)
        })
        .collect();

    html! {
        div class="donut" {
            svg width="200" height="200" viewBox="0 0 200 200" {
                g transform="rotate(-90 100 100)" {
                    @for (dash, dash_offset, color) in &slices {
                        circle cx="100" cy="100" r="70" fill="none"
                            stroke=(color) stroke-width="28"
                            stroke-dasharray=(dash) stroke-dashoffset=(dash_offset) {}
                    }
                }
                text x="100" y="98" text-anchor="middle" class="donut-total" { (grouped(total as u64)) }
                text x="100" y="118" text-anchor="middle" class="donut-caption" { "unit types" }
            }
            ul class="legend" {
                @for share in shares {
                    li {
                        span class="swatch" style=(format!("background-color: {};", share.color)) {}
                        span class="legend-label" { (share.status) }
                        span class="legend-value" { (share.count) " (" (percent(share.percentage)) ")" }
                    }
                }
            }
        }
    }
}
