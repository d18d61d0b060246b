use anyhow::Context;
use used_car_sales::{config, data::loader, pipeline, report};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = config::dataset_path();
    let table = loader::load_file(&path)
        .with_context(|| format!("loading {}", path.display()))?;

    let stats = pipeline::price_difference_analysis(&table)
        .context("computing price differences")?;

    report::print_results(&stats).context("writing report")?;
    Ok(())
}
