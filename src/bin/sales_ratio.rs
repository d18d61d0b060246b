use anyhow::Context;
use used_car_sales::{config, data::loader, pipeline, report};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = config::dataset_path();
    let table = loader::load_file(&path)
        .with_context(|| format!("loading {}", path.display()))?;

    let top = pipeline::top_price_speed_ratio(&table).context("ranking price/speed ratio")?;

    report::print_top_10(&top).context("writing report")?;
    Ok(())
}
