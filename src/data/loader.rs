use std::path::Path;

use serde_json::Value as JsonValue;

use super::model::{CellValue, SalesTable};
use crate::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sales table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row followed by one record per line
/// * `.json` – `[{ "zipcode": 1234, "Sale Price": 9500.0, ... }, ...]`
pub fn load_file(path: &Path) -> Result<SalesTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => return Err(AnalysisError::UnsupportedExtension(other.to_string())),
    };

    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        table.len(),
        table.columns,
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<SalesTable> {
    let reader = csv::Reader::from_path(path)?;
    read_csv(reader)
}

/// Parse CSV from any reader; every cell is type-inferred.
pub fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<SalesTable> {
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let mut table = SalesTable::new(headers);

    for result in reader.records() {
        let record = result?;
        table.push_row(record.iter().map(CellValue::infer).collect());
    }

    Ok(table)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (`df.to_json(orient='records')`).  Columns appear in
/// order of first occurrence; keys missing from a record become `Null`.
fn load_json(path: &Path) -> Result<SalesTable> {
    let text = std::fs::read_to_string(path)?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let records = match root {
        JsonValue::Array(records) => records,
        other => vec![other],
    };

    let mut columns: Vec<String> = Vec::new();
    for rec in &records {
        if let Some(obj) = rec.as_object() {
            for key in obj.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
    }

    let mut table = SalesTable::new(columns);
    for rec in &records {
        let row = table
            .columns
            .iter()
            .map(|col| {
                rec.get(col)
                    .map(CellValue::from_json)
                    .unwrap_or(CellValue::Null)
            })
            .collect();
        table.push_row(row);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn read_csv_infers_columns_and_types() {
        let data = "column1,column2\n1,2\n3,4";
        let table = read_csv(csv::Reader::from_reader(data.as_bytes())).unwrap();

        assert_eq!(table.columns, vec!["column1", "column2"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1][0], CellValue::Integer(3));
    }

    #[test]
    fn load_file_reads_csv_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "column1,column2\n1,2\n3,4").unwrap();

        let table = load_file(file.path()).unwrap();
        assert_eq!(table.columns, vec!["column1", "column2"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn load_file_reads_json_records() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"zipcode": 1234, "Make": "Porsche"}}, {{"zipcode": "00501", "Top Speed": 150.5}}]"#
        )
        .unwrap();

        let table = load_file(file.path()).unwrap();
        assert_eq!(table.columns, vec!["zipcode", "Make", "Top Speed"]);
        assert_eq!(table.rows[0][0], CellValue::Integer(1234));
        assert_eq!(table.rows[0][2], CellValue::Null);
        assert_eq!(table.rows[1][0], CellValue::String("00501".to_string()));
        assert_eq!(table.rows[1][2], CellValue::Float(150.5));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("sales.xlsx")).unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedExtension(ref e) if e == "xlsx"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_file(Path::new("definitely_not_here.csv")).is_err());
    }
}
