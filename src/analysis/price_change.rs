use crate::data::records::PriceRecord;
use crate::error::{AnalysisError, Result};

/// Summary of resell-minus-sale price differences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChangeStats {
    pub average: f64,
    pub median: f64,
    pub absolute_average: f64,
    pub absolute_median: f64,
}

/// Signed `resell_price - sale_price` per record, in input order.
pub fn price_differences(records: &[PriceRecord]) -> Vec<f64> {
    records
        .iter()
        .map(|r| r.resell_price - r.sale_price)
        .collect()
}

pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput { statistic: "mean" });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Middle value; the mean of the two central values for an even count.
pub fn median(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput { statistic: "median" });
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Compute signed and absolute average/median price changes.
///
/// Fails with [`AnalysisError::EmptyInput`] when `records` is empty.
pub fn calculate_price_differences(records: &[PriceRecord]) -> Result<PriceChangeStats> {
    let deltas = price_differences(records);
    let absolute: Vec<f64> = deltas.iter().map(|d| d.abs()).collect();

    let stats = PriceChangeStats {
        average: mean(&deltas)?,
        median: median(&deltas)?,
        absolute_average: mean(&absolute)?,
        absolute_median: median(&absolute)?,
    };
    log::debug!("Price change over {} records: {stats:?}", deltas.len());
    Ok(stats)
}
