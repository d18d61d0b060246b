//! Typed views over a [`SalesTable`], one per analysis.

use super::model::{CellValue, SalesTable};
use crate::error::{AnalysisError, Result};

// Dataset column headers, spelled exactly as in the CSV export.

/// Postal code; integer or text depending on how the export was written.
pub const ZIPCODE: &str = "zipcode";
pub const SALE_PRICE: &str = "Sale Price";
pub const RESELL_PRICE: &str = "Resell Price";
/// Manufacturer, matched exactly by the Porsche filter.
pub const MAKE: &str = "Make";
/// Fraction lost per year, e.g. `0.15`.
pub const DEPRECIATION_RATE: &str = "Annual Depreciation Rate";
/// Despite the name, holds `MM/DD/YYYY` as well as `MM/DD/YY` dates.
pub const PURCHASE_DATE: &str = "MM/DD/YY Purchase Date";
pub const TOP_SPEED: &str = "Top Speed";
/// Boolean column (`True`/`False`).
pub const IS_NEW_CAR: &str = "is_new_car";

/// A row as it comes out of the file: the zip code may be an integer or text.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPriceRecord {
    pub zipcode: CellValue,
    pub sale_price: f64,
    pub resell_price: f64,
}

/// A row whose zip code has been normalized to text.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub zipcode: String,
    pub sale_price: f64,
    pub resell_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepreciationRecord {
    pub make: String,
    pub sale_price: f64,
    pub annual_rate: f64,
    pub purchase_date: String,
}

/// Only the columns the price/speed ranking reads; `Make` is not required.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioRecord {
    pub sale_price: f64,
    pub top_speed: f64,
    pub is_new_car: bool,
}

fn number(row: usize, column: &str, cell: &CellValue) -> Result<f64> {
    cell.as_f64().ok_or_else(|| AnalysisError::InvalidNumber {
        row,
        column: column.to_string(),
        value: cell.to_string(),
    })
}

fn boolean(row: usize, column: &str, cell: &CellValue) -> Result<bool> {
    cell.as_bool().ok_or_else(|| AnalysisError::InvalidBool {
        row,
        column: column.to_string(),
        value: cell.to_string(),
    })
}

impl SalesTable {
    /// Extract the columns used by the price-difference analysis.
    pub fn price_records(&self) -> Result<Vec<RawPriceRecord>> {
        let zip_idx = self.column_index(ZIPCODE)?;
        let sale_idx = self.column_index(SALE_PRICE)?;
        let resell_idx = self.column_index(RESELL_PRICE)?;

        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                Ok(RawPriceRecord {
                    zipcode: row[zip_idx].clone(),
                    sale_price: number(i, SALE_PRICE, &row[sale_idx])?,
                    resell_price: number(i, RESELL_PRICE, &row[resell_idx])?,
                })
            })
            .collect()
    }

    pub fn depreciation_records(&self) -> Result<Vec<DepreciationRecord>> {
        let make_idx = self.column_index(MAKE)?;
        let sale_idx = self.column_index(SALE_PRICE)?;
        let rate_idx = self.column_index(DEPRECIATION_RATE)?;
        let date_idx = self.column_index(PURCHASE_DATE)?;

        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                Ok(DepreciationRecord {
                    make: row[make_idx].to_string(),
                    sale_price: number(i, SALE_PRICE, &row[sale_idx])?,
                    annual_rate: number(i, DEPRECIATION_RATE, &row[rate_idx])?,
                    purchase_date: row[date_idx].to_string(),
                })
            })
            .collect()
    }

    pub fn ratio_records(&self) -> Result<Vec<RatioRecord>> {
        let sale_idx = self.column_index(SALE_PRICE)?;
        let speed_idx = self.column_index(TOP_SPEED)?;
        let new_idx = self.column_index(IS_NEW_CAR)?;

        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                Ok(RatioRecord {
                    sale_price: number(i, SALE_PRICE, &row[sale_idx])?,
                    top_speed: number(i, TOP_SPEED, &row[speed_idx])?,
                    is_new_car: boolean(i, IS_NEW_CAR, &row[new_idx])?,
                })
            })
            .collect()
    }
}
