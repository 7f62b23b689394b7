// parser.rs
use crate::domain::HousingRecord;
use crate::ingest::models::*;
use tracing::{debug, info};

const CURRENCY_PREFIX: &str = "KES";
const NOT_APPLICABLE: &str = "#";

/// Parses the listings sheet into records, dropping rows without a county or
/// a positive price. Never fails; see [`parse_report`] for the drop counts.
pub fn parse_records(text: &str) -> Vec<HousingRecord> {
    parse_report(text).0
}

/// Same as [`parse_records`], also returning what was kept and dropped.
pub fn parse_report(text: &str) -> (Vec<HousingRecord>, ParseStats) {
    let mut stats = ParseStats::default();
    let mut records = Vec::new();

    // First non-blank line is the header.
    let data_lines = text.lines().filter(|l| !l.trim().is_empty()).skip(1);

    for (line_no, line) in data_lines.enumerate() {
        stats.rows_seen += 1;

        let record = row_to_record(&split_line(line));
        if record.is_listable() {
            records.push(record);
        } else {
            stats.rows_dropped += 1;
            debug!(
                row = line_no + 1,
                county = %record.county,
                price = record.price,
                "Dropping row without county or price"
            );
        }
    }

    stats.records_kept = records.len();
    info!(
        rows = stats.rows_seen,
        kept = stats.records_kept,
        dropped = stats.rows_dropped,
        "Parsed housing listings"
    );

    (records, stats)
}

/// Splits one line on commas. Double quotes toggle quoted mode and are
/// removed; commas inside quotes stay in the value. Values are trimmed.
pub fn split_line(line: &str) -> RawRow {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    RawRow::new(fields)
}

/// Coerces a split row. Unusable numerics become 0 (price) or `None`.
pub fn row_to_record(row: &RawRow) -> HousingRecord {
    HousingRecord::new(
        row.get(COL_COUNTY).to_string(),
        row.get(COL_LOCATION).to_string(),
        row.get(COL_PROJECT_NAME).to_string(),
        row.get(COL_PROJECT_STATUS).to_string(),
        parse_count(row.get(COL_TOTAL_UNITS)),
        row.get(COL_UNIT_TYPE).to_string(),
        row.get(COL_AVAILABLE_UNITS).to_string(),
        parse_amount(row.get(COL_PRICE)).unwrap_or(0.0),
        parse_amount(row.get(COL_MONTHLY_PAYMENT)).filter(|v| *v != 0.0),
    )
}

/// Reads a money value such as `"KES 2,000,000.00"`.
/// Returns `None` for blanks, the `#` marker and anything non-numeric.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = strip_artifacts(raw);
    let number = match cleaned.get(..CURRENCY_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(CURRENCY_PREFIX) => {
            cleaned[CURRENCY_PREFIX.len()..].trim()
        }
        _ => cleaned.as_str(),
    };

    if number.is_empty() || number == NOT_APPLICABLE {
        return None;
    }
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Reads a whole unit count such as `"1,200"`.
pub fn parse_count(raw: &str) -> Option<u32> {
    let cleaned = strip_artifacts(raw);
    if cleaned.is_empty() || cleaned == NOT_APPLICABLE {
        return None;
    }

    cleaned.parse::<u32>().ok().or_else(|| {
        // "1200.00" style counts truncate.
        cleaned
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0 && *v <= f64::from(u32::MAX))
            .map(|v| v.trunc() as u32)
    })
}

fn strip_artifacts(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '"' && *c != ',')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    const HEADER: &str = "COUNTY, LOCATION, PROJECT NAME, PROJECT STATUS, TOTAL UNITS per Project, UNITS, AVAILABLE UNITS, PRICE (KES), TPS per Month (KES)";

    #[test]
    fn parses_quoted_currency_row() {
        let text = format!(
            "{HEADER}\nCounty, Town, Project, Ongoing,, 2 Bedroom Unit Affordable, Available, \"KES 2,000,000.00\", \"KES 14,450.00\"\n"
        );
        let records = parse_records(&text);
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.county, "County");
        assert_eq!(r.location, "Town");
        assert_eq!(r.project_name, "Project");
        assert_eq!(r.project_status, "Ongoing");
        assert_eq!(r.total_units, None);
        assert_eq!(r.unit_type, "2 Bedroom Unit Affordable");
        assert_eq!(r.available_units, "Available");
        assert_eq!(r.price, 2_000_000.0);
        assert_eq!(r.monthly_payment, Some(14_450.0));
        assert_eq!(r.category, Category::Affordable);
        assert_eq!(r.bedrooms, Some(2));
    }

    #[test]
    fn quoted_commas_are_literal() {
        let row = split_line("a, \"b, c\" ,d");
        assert_eq!(row.fields, vec!["a", "b, c", "d"]);
    }

    #[test]
    fn tabs_and_spaces_are_trimmed() {
        let row = split_line("Kiambu,\tRuiru ,  Estate\t, Ongoing");
        assert_eq!(row.get(0), "Kiambu");
        assert_eq!(row.get(1), "Ruiru");
        assert_eq!(row.get(2), "Estate");
        assert_eq!(row.get(3), "Ongoing");
        assert_eq!(row.get(9), "");
    }

    #[test]
    fn sentinel_or_blank_price_drops_row() {
        let text = format!(
            "{HEADER}\nA, B, C, Ongoing,, Studio, Available, \"#\", \"\"\nA, B, C, Ongoing,, Studio, Available, , \n"
        );
        let (records, stats) = parse_report(&text);
        assert!(records.is_empty());
        assert_eq!(stats.rows_seen, 2);
        assert_eq!(stats.rows_dropped, 2);
    }

    #[test]
    fn short_rows_do_not_panic() {
        let text = format!("{HEADER}\nKiambu, Ruiru\nKiambu\n");
        let (records, stats) = parse_report(&text);
        assert!(records.is_empty());
        assert_eq!(stats.rows_seen, 2);
    }

    #[test]
    fn crlf_and_blank_lines_are_tolerated() {
        let text = format!(
            "\r\n{HEADER}\r\n\r\nLamu, Mokowe, Mokowe Estate, Ongoing,, 1 Room Social, Available, \"KES 640,000.00\", \"KES 3,800.00\"\r\n   \r\n"
        );
        let records = parse_records(&text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].monthly_payment, Some(3_800.0));
        assert_eq!(records[0].available_units, "Available");
    }

    #[test]
    fn missing_monthly_payment_is_absent() {
        let text = format!(
            "{HEADER}\nNairobi, Pangani, Pangani, Ongoing,, Duplex, Available, \"KES 9,000,000.00\", \"\"\n"
        );
        let records = parse_records(&text);
        assert_eq!(records[0].monthly_payment, None);
        assert_eq!(records[0].bedrooms, None);
        assert_eq!(records[0].category, Category::Other);
    }

    #[test]
    fn amount_parsing() {
        assert_eq!(parse_amount("KES 640,000.00"), Some(640_000.0));
        assert_eq!(parse_amount("\"KES 3,800.00\""), Some(3_800.0));
        assert_eq!(parse_amount("kes 10"), Some(10.0));
        assert_eq!(parse_amount("1500000"), Some(1_500_000.0));
        assert_eq!(parse_amount("#"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("KES"), None);
        assert_eq!(parse_amount("TBA"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn count_parsing() {
        assert_eq!(parse_count("1,200"), Some(1_200));
        assert_eq!(parse_count("\"420\""), Some(420));
        assert_eq!(parse_count("96.0"), Some(96));
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("#"), None);
        assert_eq!(parse_count("-5"), None);
    }

    #[test]
    fn total_units_column_is_read() {
        let text = format!(
            "{HEADER}\nKiambu, Ruiru, Ruiru Estate, Ongoing, \"1,050\", 1 Room Social, Available, \"KES 640,000.00\", #\n"
        );
        let records = parse_records(&text);
        assert_eq!(records[0].total_units, Some(1_050));
        assert_eq!(records[0].monthly_payment, None);
    }
}
