//! Statistics computed over the typed records.

pub mod depreciation;
pub mod price_change;
pub mod sales_ratio;
