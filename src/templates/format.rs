// templates/format.rs

/// Shown in place of averages over an empty set.
pub const PLACEHOLDER: &str = "N/A";

/// Short money figure: `1.2M`, `15K` or `640`.
pub fn compact_amount(value: f64) -> String {
    if value.is_nan() {
        return PLACEHOLDER.to_string();
    }
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else {
        grouped(value.round().max(0.0) as u64)
    }
}

/// `KES 1.2M`, or the placeholder when there is no value.
pub fn kes(value: f64) -> String {
    if value.is_nan() {
        PLACEHOLDER.to_string()
    } else {
        format!("KES {}", compact_amount(value))
    }
}

/// Thousands separators: `12345` -> `12,345`.
pub fn grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Bar width as a percentage of the largest value, for inline styles.
pub fn bar_width(value: f64, max: f64) -> String {
    if max > 0.0 && value.is_finite() {
        format!("{:.1}%", (value / max * 100.0).clamp(0.0, 100.0))
    } else {
        "0%".to_string()
    }
}
