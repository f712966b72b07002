use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

use queueing_report::data::model::{Metric, MetricSet};
use queueing_report::sim::Simulation;
use queueing_report::theory;

const CHANNELS: usize = 3;
const MU: f64 = 0.2;
const SEED: u64 = 42;
const REQUESTS_PER_POINT: u64 = 200_000;
const OUTPUT: &str = "data.txt";

fn main() -> Result<()> {
    env_logger::init();

    // λ sweep: 0.1 … 1.0.
    let lambdas: Vec<f64> = (1..=10).map(|i| i as f64 * 0.1).collect();

    let file = File::create(OUTPUT).with_context(|| format!("creating '{OUTPUT}'"))?;
    let mut out = BufWriter::new(file);

    for (i, &lambda) in lambdas.iter().enumerate() {
        let theory = theory::metrics(lambda, MU, CHANNELS as u32);
        let report = Simulation::new(CHANNELS, MU, SEED + i as u64)
            .run(lambda, REQUESTS_PER_POINT)
            .with_context(|| format!("simulating λ = {lambda}"))?;
        let exp = report.metrics();

        writeln!(out, "{}", format_line(lambda, MU, &theory, &exp))?;
        print_comparison(lambda, &theory, &exp);
    }
    out.flush()?;

    println!(
        "Wrote {} sample points ({CHANNELS} channels, μ = {MU}) to '{OUTPUT}'",
        lambdas.len()
    );
    Ok(())
}

/// One dataset line: λ, μ, the five theory values, the five experiment
/// values — decimal-comma formatted, space-separated.
fn format_line(lambda: f64, mu: f64, theory: &MetricSet, exp: &MetricSet) -> String {
    let mut fields = vec![lambda, mu];
    fields.extend(Metric::ALL.iter().map(|&m| theory.get(m)));
    fields.extend(Metric::ALL.iter().map(|&m| exp.get(m)));

    fields
        .iter()
        .map(|&v| decimal_comma(v))
        .collect::<Vec<_>>()
        .join(" ")
}

fn decimal_comma(v: f64) -> String {
    format!("{v:.4}").replace('.', ",")
}

fn print_comparison(lambda: f64, theory: &MetricSet, exp: &MetricSet) {
    println!("λ = {lambda:.1}");
    println!("| metric | theory  | experiment | delta   |");
    println!("|--------|---------|------------|---------|");
    for &metric in &Metric::ALL {
        let t = theory.get(metric);
        let e = exp.get(metric);
        println!(
            "| {:<6} | {:>7.4} | {:>10.4} | {:>7.4} |",
            metric.code(),
            t,
            e,
            t - e
        );
    }
    println!();
}
