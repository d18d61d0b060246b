use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::config::DEPRECIATION_YEARS;
use crate::data::records::{DepreciationRecord, PURCHASE_DATE};
use crate::error::{AnalysisError, Result};

/// Purchase dates are `MM/DD/YY` or `MM/DD/YYYY`.  The 2-digit form goes
/// first since `%Y` would read "21" as the year 21.
const DATE_FORMATS: [&str; 2] = ["%m/%d/%y", "%m/%d/%Y"];

/// One projected Porsche value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepreciationRow {
    #[serde(rename = "Original Purchase Date")]
    pub original_purchase_date: NaiveDate,
    #[serde(rename = "Depreciated Date")]
    pub depreciated_date: NaiveDate,
    #[serde(rename = "Original Sale Price")]
    pub original_sale_price: f64,
    #[serde(rename = "Depreciated Value")]
    pub depreciated_value: f64,
}

/// Value after `years` of compound depreciation at `annual_rate`.
pub fn calculate_depreciation(price: f64, years: u32, annual_rate: f64) -> f64 {
    price * (1.0 - annual_rate).powi(years as i32)
}

pub fn parse_purchase_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Project each record's value [`DEPRECIATION_YEARS`] after purchase.
///
/// Feb 29 purchases land on Feb 28 of the target year.
pub fn aggregate_depreciation(records: &[DepreciationRecord]) -> Result<Vec<DepreciationRow>> {
    records
        .iter()
        .enumerate()
        .map(|(row, r)| {
            let invalid = || AnalysisError::InvalidDate {
                row,
                column: PURCHASE_DATE.to_string(),
                value: r.purchase_date.clone(),
            };
            let purchased = parse_purchase_date(&r.purchase_date).ok_or_else(invalid)?;
            let depreciated_date = purchased
                .checked_add_months(Months::new(12 * DEPRECIATION_YEARS))
                .ok_or_else(invalid)?;

            Ok(DepreciationRow {
                original_purchase_date: purchased,
                depreciated_date,
                original_sale_price: r.sale_price,
                depreciated_value: round_cents(calculate_depreciation(
                    r.sale_price,
                    DEPRECIATION_YEARS,
                    r.annual_rate,
                )),
            })
        })
        .collect()
}
