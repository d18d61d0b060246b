use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Table grid (central panel)
// ---------------------------------------------------------------------------

/// Render the table with a header row and no row numbers.  The scroll area is
/// sized to the capped visible row count; further rows scroll.
pub fn table_grid(ui: &mut Ui, state: &ViewerState) {
    let table = &state.table;
    if table.columns.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data to display");
        });
        return;
    }

    let text_height = ui.text_style_height(&egui::TextStyle::Body);
    let row_height = text_height + ui.spacing().item_spacing.y;
    let visible_height = row_height * state.visible_rows() as f32;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(60.0).resizable(true), table.columns.len())
        .min_scrolled_height(visible_height)
        .max_scroll_height(visible_height)
        .header(row_height, |mut header| {
            for name in &table.columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, table.len(), |mut row| {
                let labels = state.row_labels(row.index());
                for label in labels {
                    row.col(|ui: &mut Ui| {
                        ui.label(label);
                    });
                }
            });
        });
}
