use serde::Serialize;

// row
//  ├── county
//  ├── location
//  ├── project_name
//  ├── project_status
//  ├── total_units      (project level, mostly blank)
//  ├── unit_type
//  ├── available_units
//  ├── price            ("KES 2,000,000.00")
//  └── monthly_payment  ("KES 14,450.00", "" or "#")

/// Column positions in the source sheet.
pub const COL_COUNTY: usize = 0;
pub const COL_LOCATION: usize = 1;
pub const COL_PROJECT_NAME: usize = 2;
pub const COL_PROJECT_STATUS: usize = 3;
pub const COL_TOTAL_UNITS: usize = 4;
pub const COL_UNIT_TYPE: usize = 5;
pub const COL_AVAILABLE_UNITS: usize = 6;
pub const COL_PRICE: usize = 7;
pub const COL_MONTHLY_PAYMENT: usize = 8;

/// A split but uncoerced CSV line. Short lines leave the trailing
/// columns empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawRow {
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field at `index`, or "" when the row is too short.
    pub fn get(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Counts gathered while loading a sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Non-blank data lines, header excluded.
    pub rows_seen: usize,
    pub records_kept: usize,
    pub rows_dropped: usize,
}
