//! End-to-end compositions of the data and analysis stages, one per binary.

use crate::analysis::depreciation::{aggregate_depreciation, DepreciationRow};
use crate::analysis::price_change::{calculate_price_differences, PriceChangeStats};
use crate::analysis::sales_ratio::{sales_ratio, set_top_10, RatioRow};
use crate::data::filter::{filter_by_zipcode, filter_porsche, normalize_zipcodes};
use crate::data::model::{CellValue, SalesTable};
use crate::data::records::ZIPCODE;
use crate::error::Result;

pub const PRICE_DIFFERENCE: &str = "price_difference";

/// Normalize zip codes, keep the `"00"..="19"` band and summarise the
/// resell-minus-sale price differences.
pub fn price_difference_analysis(table: &SalesTable) -> Result<PriceChangeStats> {
    let raw = table.price_records()?;
    let normalized = normalize_zipcodes(&raw);
    let in_band: Vec<_> = filter_by_zipcode(&normalized)
        .into_iter()
        .map(|(_, record)| record)
        .collect();
    log::info!("{} of {} sales fall in the zip band", in_band.len(), raw.len());

    calculate_price_differences(&in_band)
}

/// The zip-band rows of `table` in zip order, with normalized zip codes and a
/// `price_difference` column appended.
pub fn zip_band_table(table: &SalesTable) -> Result<SalesTable> {
    let zip_idx = table.column_index(ZIPCODE)?;
    let normalized = normalize_zipcodes(&table.price_records()?);

    let mut in_band = SalesTable::new(table.columns.clone());
    let mut differences = Vec::new();
    for (source_idx, record) in filter_by_zipcode(&normalized) {
        let mut row = table.rows[source_idx].clone();
        row[zip_idx] = CellValue::String(record.zipcode);
        in_band.push_row(row);
        differences.push(CellValue::Float(record.resell_price - record.sale_price));
    }
    Ok(in_band.with_column(PRICE_DIFFERENCE, differences))
}

/// Porsche sales projected [`crate::config::DEPRECIATION_YEARS`] ahead.
pub fn porsche_depreciation(table: &SalesTable) -> Result<Vec<DepreciationRow>> {
    let porsches = filter_porsche(&table.depreciation_records()?);
    log::info!("Found {} Porsche sales", porsches.len());
    aggregate_depreciation(&porsches)
}

/// Used cars ranked by price / top speed.
pub fn top_price_speed_ratio(table: &SalesTable) -> Result<Vec<RatioRow>> {
    let rated = sales_ratio(&table.ratio_records()?);
    Ok(set_top_10(&rated))
}
