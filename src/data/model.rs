use std::fmt;

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// CellValue – a single cell of the sales table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring the dtypes a CSV column infers to.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Infer the type of a raw text cell.
    ///
    /// Order matters: `"01234"` parses as the integer 1234, exactly like a
    /// dataframe reader would, which is why zip codes need re-padding later.
    pub fn infer(s: &str) -> Self {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        match s {
            "true" | "True" | "TRUE" => CellValue::Bool(true),
            "false" | "False" | "FALSE" => CellValue::Bool(false),
            _ => CellValue::String(s.to_string()),
        }
    }

    pub(crate) fn from_json(val: &JsonValue) -> Self {
        match val {
            JsonValue::String(s) => CellValue::String(s.clone()),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    CellValue::Float(f)
                } else {
                    CellValue::String(n.to_string())
                }
            }
            JsonValue::Bool(b) => CellValue::Bool(*b),
            JsonValue::Null => CellValue::Null,
            other => CellValue::String(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// SalesTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// A rectangular table: ordered column names and one `Vec<CellValue>` per row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SalesTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding short rows with `Null` and dropping extra cells.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Null);
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, or [`AnalysisError::MissingColumn`].
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| AnalysisError::MissingColumn(name.to_string()))
    }

    /// Return a copy of the table with an extra column appended.
    pub fn with_column(&self, name: &str, values: Vec<CellValue>) -> Self {
        let mut columns = self.columns.clone();
        columns.push(name.to_string());
        let rows = self
            .rows
            .iter()
            .zip(values.into_iter().chain(std::iter::repeat(CellValue::Null)))
            .map(|(row, value)| {
                let mut row = row.clone();
                row.push(value);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Build a table from typed rows via their `Serialize` impl.
    ///
    /// Each row must serialize to a JSON object; field order becomes column
    /// order.
    pub fn from_serializable<T: Serialize>(items: &[T]) -> Result<Self> {
        let mut table = SalesTable::default();
        for item in items {
            let obj = match serde_json::to_value(item)? {
                JsonValue::Object(obj) => obj,
                other => {
                    table.push_row(vec![CellValue::from_json(&other)]);
                    continue;
                }
            };
            if table.columns.is_empty() {
                table.columns = obj.keys().cloned().collect();
            }
            let row = table
                .columns
                .iter()
                .map(|col| obj.get(col).map(CellValue::from_json).unwrap_or(CellValue::Null))
                .collect();
            table.push_row(row);
        }
        Ok(table)
    }
}
