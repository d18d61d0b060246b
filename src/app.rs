use eframe::egui;

use crate::data::model::SalesTable;
use crate::state::ViewerState;
use crate::ui::table;

pub const WINDOW_TITLE: &str = "DataFrame Viewer";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TableViewerApp {
    pub state: ViewerState,
}

impl TableViewerApp {
    pub fn new(table: SalesTable) -> Self {
        Self {
            state: ViewerState::new(WINDOW_TITLE, table),
        }
    }
}

impl eframe::App for TableViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and row / column counts ----
        egui::TopBottomPanel::top("summary_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong(&self.state.title);
                ui.separator();
                ui.label(self.state.summary());
            });
        });

        // ---- Central panel: grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::table_grid(ui, &self.state);
        });
    }
}

/// Open a resizable window showing `table` and block until it is closed.
pub fn display_table(table: SalesTable) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([400.0, 200.0])
            .with_resizable(true),
        ..Default::default()
    };

    log::info!("Opening table viewer with {} rows", table.len());
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(TableViewerApp::new(table)))),
    )
}
