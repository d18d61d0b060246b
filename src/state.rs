use crate::config::VIEWER_MAX_ROWS;
use crate::data::model::SalesTable;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// What the table viewer shows, independent of rendering.
pub struct ViewerState {
    /// Table being displayed.
    pub table: SalesTable,

    /// Window title.
    pub title: String,
}

impl ViewerState {
    pub fn new(title: impl Into<String>, table: SalesTable) -> Self {
        Self {
            table,
            title: title.into(),
        }
    }

    /// Rows visible without scrolling: all of them, capped at
    /// [`VIEWER_MAX_ROWS`].
    pub fn visible_rows(&self) -> usize {
        self.table.len().min(VIEWER_MAX_ROWS)
    }

    /// Text of every cell in a row, in column order.
    pub fn row_labels(&self, index: usize) -> Vec<String> {
        self.table
            .rows
            .get(index)
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .unwrap_or_default()
    }

    /// Status line shown above the grid.
    pub fn summary(&self) -> String {
        format!(
            "{} rows × {} columns",
            self.table.len(),
            self.table.columns.len()
        )
    }
}
