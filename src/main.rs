use std::path::Path;

use anyhow::Context;

use queueing_report::chart::{self, ChartStyle};
use queueing_report::data::loader;

/// Fixed dataset location and chart output directory.
const DATA_FILE: &str = "data.txt";
const OUTPUT_DIR: &str = "result";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let table = loader::load_file(Path::new(DATA_FILE))
        .with_context(|| format!("loading '{DATA_FILE}'"))?;

    let charts = chart::render(&table, Path::new(OUTPUT_DIR), &ChartStyle::default())
        .with_context(|| format!("rendering charts into '{OUTPUT_DIR}'"))?;

    println!("Rendered {} charts into '{OUTPUT_DIR}'", charts.len());
    Ok(())
}
