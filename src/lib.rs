//! Analyses over a used-car sales dataset.
//!
//! * price change of resales within the `00`–`19` zip band
//! * three-year depreciation of Porsche sales
//! * used cars ranked by price / top speed
//!
//! plus a table viewer window for inspecting intermediate results.

pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod state;
pub mod ui;

pub use error::{AnalysisError, Result};
