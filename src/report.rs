//! Fixed-width text reports written to stdout.
//!
//! Every report has a `write_*` function generic over [`Write`] so the exact
//! bytes can be captured, and a `print_*` wrapper that targets stdout.

use std::io::{self, Write};

use crate::analysis::depreciation::DepreciationRow;
use crate::analysis::price_change::PriceChangeStats;
use crate::analysis::sales_ratio::RatioRow;
use crate::config::{
    DEPRECIATION_BANNER_WIDTH, DEPRECIATION_YEARS, PRICE_BANNER_WIDTH, RATIO_BANNER_WIDTH, TOP_N,
};

const PRICE_TITLE: &str = "                Price Difference Analysis                ";
const PRICE_LABEL_WIDTH: usize = 20;
const PRICE_VALUE_WIDTH: usize = 13;
const DEPRECIATION_COLUMN_WIDTH: usize = 26;
const RATIO_COLUMN_WIDTH: usize = 15;

fn banner(width: usize) -> String {
    "=".repeat(width)
}

fn dollars(value: f64) -> String {
    format!("${value:.2}")
}

// ---------------------------------------------------------------------------
// Price difference analysis
// ---------------------------------------------------------------------------

pub fn write_price_results<W: Write>(out: &mut W, stats: &PriceChangeStats) -> io::Result<()> {
    let rule = banner(PRICE_BANNER_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{PRICE_TITLE}")?;
    writeln!(out, "{rule}")?;
    for (label, value) in [
        ("Average:", stats.average),
        ("Median:", stats.median),
        ("Average Absolute:", stats.absolute_average),
        ("Median Absolute:", stats.absolute_median),
    ] {
        writeln!(
            out,
            "{label:<lw$}${value:>vw$.2}",
            lw = PRICE_LABEL_WIDTH,
            vw = PRICE_VALUE_WIDTH
        )?;
    }
    writeln!(out, "{rule}")
}

pub fn print_results(stats: &PriceChangeStats) -> io::Result<()> {
    write_price_results(&mut io::stdout().lock(), stats)
}

// ---------------------------------------------------------------------------
// Porsche depreciation
// ---------------------------------------------------------------------------

pub fn write_depreciation<W: Write>(out: &mut W, rows: &[DepreciationRow]) -> io::Result<()> {
    let w = DEPRECIATION_COLUMN_WIDTH;
    writeln!(out, "Depreciated Values after {DEPRECIATION_YEARS} Years:")?;
    writeln!(out, "{}", banner(DEPRECIATION_BANNER_WIDTH))?;
    writeln!(
        out,
        "{:<w$}{:<w$}{:<w$}{}",
        "Original Purchase Date", "Original Sale Price", "Depreciated Date", "Depreciated Value"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<w$}{:<w$}{:<w$}{}",
            row.original_purchase_date.format("%Y-%m-%d").to_string(),
            dollars(row.original_sale_price),
            row.depreciated_date.format("%Y-%m-%d").to_string(),
            dollars(row.depreciated_value),
        )?;
    }
    Ok(())
}

pub fn print_depreciation(rows: &[DepreciationRow]) -> io::Result<()> {
    write_depreciation(&mut io::stdout().lock(), rows)
}

// ---------------------------------------------------------------------------
// Price / top-speed ranking
// ---------------------------------------------------------------------------

pub fn write_top_10<W: Write>(out: &mut W, rows: &[RatioRow]) -> io::Result<()> {
    let w = RATIO_COLUMN_WIDTH;
    writeln!(out, "Top {TOP_N} Cars by Price to Speed Ratio:")?;
    writeln!(out, "{}", banner(RATIO_BANNER_WIDTH))?;
    writeln!(out, "{:<w$}{:<w$}{:<w$}", "Sale Price", "Top Speed", "Ratio")?;
    for row in rows {
        writeln!(
            out,
            "{:<w$}{:<w$}{:<w$}",
            dollars(row.sale_price),
            row.top_speed.to_string(),
            format!("{:.3}", row.ratio),
        )?;
    }
    Ok(())
}

pub fn print_top_10(rows: &[RatioRow]) -> io::Result<()> {
    write_top_10(&mut io::stdout().lock(), rows)
}
