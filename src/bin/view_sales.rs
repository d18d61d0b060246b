use anyhow::{bail, Context};
use used_car_sales::data::model::SalesTable;
use used_car_sales::{app, config, data::loader, pipeline};

/// `view-sales [zip|porsche|ratio]` – which result to show, `zip` by default.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let which = std::env::args().nth(1).unwrap_or_else(|| "zip".to_string());

    let path = config::dataset_path();
    let table = loader::load_file(&path)
        .with_context(|| format!("loading {}", path.display()))?;

    let view = match which.as_str() {
        "zip" => pipeline::zip_band_table(&table).context("filtering zip band")?,
        "porsche" => {
            let rows = pipeline::porsche_depreciation(&table).context("projecting depreciation")?;
            SalesTable::from_serializable(&rows)?
        }
        "ratio" => {
            let rows = pipeline::top_price_speed_ratio(&table).context("ranking price/speed ratio")?;
            SalesTable::from_serializable(&rows)?
        }
        other => bail!("unknown view '{other}', expected zip, porsche or ratio"),
    };

    app::display_table(view).map_err(|e| {
        log::error!("Table viewer failed: {e}");
        anyhow::anyhow!("table viewer failed: {e}")
    })
}
