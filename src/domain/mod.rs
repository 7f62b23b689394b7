pub mod filter;
pub mod logic;
pub mod record;

pub use filter::{apply_filter, FilterOptions, FilterSpec};
pub use record::{AvailabilityStatus, Category, HousingRecord, STATUS_AVAILABLE, STATUS_SOLD_OUT};
