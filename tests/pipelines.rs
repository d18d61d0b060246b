use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use used_car_sales::data::loader::load_file;
use used_car_sales::data::model::{CellValue, SalesTable};
use used_car_sales::pipeline;
use used_car_sales::report;
use used_car_sales::AnalysisError;

const SALES_CSV: &str = "\
zipcode,Make,Sale Price,Resell Price,Annual Depreciation Rate,MM/DD/YY Purchase Date,Top Speed,is_new_car
20123,Toyota,9000,9999,0.2,04/20/2020,120,False
1234,Porsche,50000,52000,0.1,01/01/2020,180,False
123,BMW,100,150,0.15,02/15/2020,150,True
98101,Porsche,60000,58000,0.12,03/10/2020,190,False
15123,Honda,300,350,0.1,06/01/2019,130,False
05001,Ford,200,180,0.1,07/04/2021,110,False
";

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn load(contents: &str) -> SalesTable {
    let file = write_csv(contents);
    load_file(file.path()).unwrap()
}

#[test]
fn price_difference_over_zip_band() {
    let table = load(SALES_CSV);
    let stats = pipeline::price_difference_analysis(&table).unwrap();

    // In band: 01234 (+2000), 00123 (+50), 15123 (+50), 05001 (-20)
    assert!((stats.average - 520.0).abs() < 1e-9);
    assert_eq!(stats.median, 50.0);
    assert!((stats.absolute_average - 530.0).abs() < 1e-9);
    assert_eq!(stats.absolute_median, 50.0);

    let mut out = Vec::new();
    report::write_price_results(&mut out, &stats).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Average:            $       520.00"));
    assert!(out.contains("Median Absolute:    $        50.00"));
}

#[test]
fn zip_band_table_is_sorted_and_padded() {
    let table = load(SALES_CSV);
    let view = pipeline::zip_band_table(&table).unwrap();

    let zip_idx = view.column_index("zipcode").unwrap();
    let diff_idx = view.column_index(pipeline::PRICE_DIFFERENCE).unwrap();
    assert_eq!(diff_idx, table.columns.len());
    let zips: Vec<String> = view.rows.iter().map(|r| r[zip_idx].to_string()).collect();
    assert_eq!(zips, vec!["00123", "01234", "05001", "15123"]);
    assert_eq!(view.rows[0][diff_idx], CellValue::Float(50.0));
    assert_eq!(view.rows[2][diff_idx], CellValue::Float(-20.0));

    // Source table keeps its raw zip codes.
    assert_eq!(table.rows[1][zip_idx], CellValue::Integer(1234));
}

#[test]
fn empty_zip_band_fails() {
    let table = load("zipcode,Sale Price,Resell Price\n20123,100,110\n99999,5,6\n");
    let err = pipeline::price_difference_analysis(&table).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyInput { .. }));
}

#[test]
fn missing_price_column_fails() {
    let table = load("zipcode,Sale Price\n01234,100\n");
    let err = pipeline::price_difference_analysis(&table).unwrap_err();
    assert!(matches!(err, AnalysisError::MissingColumn(ref c) if c == "Resell Price"));
}

#[test]
fn missing_file_fails() {
    assert!(load_file(Path::new("no/such/car_sales_dataset.csv")).is_err());
}

#[test]
fn porsche_depreciation_report() {
    let table = load(SALES_CSV);
    let rows = pipeline::porsche_depreciation(&table).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].depreciated_value, 36450.0);
    assert_eq!(rows[1].depreciated_value, 40888.32);

    let mut out = Vec::new();
    report::write_depreciation(&mut out, &rows).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("2023-01-01                $36450.00"));
    assert!(out.contains("2023-03-10                $40888.32"));
}

#[test]
fn used_cars_ranked_by_price_per_speed() {
    let table = load(SALES_CSV);
    let top = pipeline::top_price_speed_ratio(&table).unwrap();

    // The BMW is new and excluded.
    let prices: Vec<f64> = top.iter().map(|r| r.sale_price).collect();
    assert_eq!(prices, vec![60000.0, 50000.0, 9000.0, 300.0, 200.0]);

    let mut out = Vec::new();
    report::write_top_10(&mut out, &top).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("$60000.00      190            315.789        "));
}

#[test]
fn ranking_works_without_make_column() {
    let table = load("Sale Price,Top Speed,is_new_car\n10000,120,False\n15000,130,False\n12000,110,True\n");
    let top = pipeline::top_price_speed_ratio(&table).unwrap();

    let prices: Vec<f64> = top.iter().map(|r| r.sale_price).collect();
    assert_eq!(prices, vec![15000.0, 10000.0]);
}
