use anyhow::Context;
use used_car_sales::{config, data::loader, pipeline, report};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = config::dataset_path();
    let table = loader::load_file(&path)
        .with_context(|| format!("loading {}", path.display()))?;

    let rows = pipeline::porsche_depreciation(&table).context("projecting depreciation")?;

    report::print_depreciation(&rows).context("writing report")?;
    Ok(())
}
