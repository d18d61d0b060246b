//! Fixed settings shared by the binaries.

use std::path::PathBuf;

/// Dataset file name used when `CAR_SALES_DATASET` is not set.
pub const DEFAULT_DATASET: &str = "car_sales_dataset.csv";

/// Environment variable overriding the dataset location.
pub const DATASET_ENV: &str = "CAR_SALES_DATASET";

/// Width zip codes are left-padded to.
pub const ZIP_WIDTH: usize = 5;

/// Inclusive zip-prefix band kept by the price-difference analysis.
pub const ZIP_PREFIX_LOW: &str = "00";
pub const ZIP_PREFIX_HIGH: &str = "19";
pub const ZIP_PREFIX_LEN: usize = 2;

pub const PRICE_BANNER_WIDTH: usize = 60;
pub const DEPRECIATION_BANNER_WIDTH: usize = 55;
pub const RATIO_BANNER_WIDTH: usize = 45;

/// Years a Porsche is depreciated over.
pub const DEPRECIATION_YEARS: u32 = 3;

/// Number of cars shown in the price/speed ranking.
pub const TOP_N: usize = 10;

/// Rows visible at once in the table viewer.
pub const VIEWER_MAX_ROWS: usize = 25;

/// Resolve the dataset path: `$CAR_SALES_DATASET` or [`DEFAULT_DATASET`].
pub fn dataset_path() -> PathBuf {
    std::env::var_os(DATASET_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_path_honours_override() {
        std::env::remove_var(DATASET_ENV);
        assert_eq!(dataset_path(), PathBuf::from(DEFAULT_DATASET));

        std::env::set_var(DATASET_ENV, "/data/sales.csv");
        assert_eq!(dataset_path(), PathBuf::from("/data/sales.csv"));

        std::env::set_var(DATASET_ENV, "");
        assert_eq!(dataset_path(), PathBuf::from(DEFAULT_DATASET));
        std::env::remove_var(DATASET_ENV);
    }
}
