use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use thiserror::Error;

use crate::data::model::{MeasurementTable, Metric};

use super::style::ChartStyle;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("dataset contains no rows")]
    EmptyTable,

    #[error("creating output directory")]
    Io(#[from] std::io::Error),

    #[error("drawing '{file}': {message}")]
    Draw { file: String, message: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Render one comparison chart per metric into `out_dir`.
///
/// The directory is created recursively if missing. Charts are numbered
/// `p-1.png` … `p-5.png` in [`Metric::ALL`] order and silently overwrite
/// earlier output. Returns the written paths in that order.
///
/// An empty table is rejected up front; nothing is written in that case.
pub fn render(
    table: &MeasurementTable,
    out_dir: &Path,
    style: &ChartStyle,
) -> Result<Vec<PathBuf>, RenderError> {
    let Some(first) = table.rows().first() else {
        return Err(RenderError::EmptyTable);
    };
    fs::create_dir_all(out_dir)?;

    // Captions use the service rate of the first row; the dataset is
    // expected to keep μ constant.
    let mu = first.mu;
    if table.rows().iter().any(|r| (r.mu - mu).abs() > 1e-9) {
        log::warn!("service rate μ varies across rows; captions use μ = {mu} from the first row");
    }

    let mut written = Vec::with_capacity(Metric::ALL.len());
    for (i, &metric) in Metric::ALL.iter().enumerate() {
        let path = out_dir.join(format!("p-{}.png", i + 1));
        draw_metric(table, metric, mu, &path, style).map_err(|e| RenderError::Draw {
            file: path.display().to_string(),
            message: e.to_string(),
        })?;
        log::info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

// ---------------------------------------------------------------------------
// Single-chart drawing
// ---------------------------------------------------------------------------

fn draw_metric(
    table: &MeasurementTable,
    metric: Metric,
    mu: f64,
    path: &Path,
    style: &ChartStyle,
) -> Result<(), Box<dyn std::error::Error>> {
    let theory: Vec<(f64, f64)> = table
        .rows()
        .iter()
        .map(|r| (r.lambda, r.theory.get(metric)))
        .collect();
    let exp: Vec<(f64, f64)> = table
        .rows()
        .iter()
        .map(|r| (r.lambda, r.exp.get(metric)))
        .collect();

    let x_range = padded_range(theory.iter().map(|p| p.0));
    let y_range = padded_range(theory.iter().chain(exp.iter()).map(|p| p.1));

    let root = BitMapBackend::new(path, style.size).into_drawing_area();
    root.fill(&WHITE)?;

    let caption = format!("{} ({}), μ = {}", metric.title(), metric.code(), mu);
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, style.caption_font)
        .margin(40)
        .x_label_area_size(100)
        .y_label_area_size(130)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Arrival rate λ")
        .y_desc(metric.title())
        .x_label_style(style.label_font)
        .y_label_style(style.label_font)
        .bold_line_style(BLACK.mix(style.grid_opacity * 0.5))
        .light_line_style(BLACK.mix(style.grid_opacity * 0.15))
        .draw()?;

    let theory_color = style.theory_color;
    let exp_color = style.experiment_color;
    let line_width = style.line_width;

    chart
        .draw_series(LineSeries::new(
            theory.iter().copied(),
            theory_color.stroke_width(line_width),
        ))?
        .label("Theory")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 40, y)], theory_color.stroke_width(line_width))
        });
    chart.draw_series(
        theory
            .iter()
            .map(|&pt| Circle::new(pt, style.marker_radius, theory_color.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(
            exp.iter().copied(),
            exp_color.stroke_width(line_width),
        ))?
        .label("Experiment")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 40, y)], exp_color.stroke_width(line_width))
        });
    // Hollow markers: outline only, in the series colour.
    chart.draw_series(exp.iter().map(|&pt| {
        Circle::new(pt, style.marker_radius, exp_color.stroke_width(line_width))
    }))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.4))
        .label_font(style.label_font)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Axis range spanning the data with 5% headroom; a flat series still gets
/// a non-degenerate range.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    let span = max - min;
    let pad = if span.abs() < f64::EPSILON {
        max.abs().max(1.0) * 0.05
    } else {
        span * 0.05
    };
    (min - pad)..(max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{MeasurementRow, MetricSet};

    fn sample_table() -> MeasurementTable {
        let rows = [0.3, 0.5, 0.8]
            .iter()
            .map(|&lambda| {
                let set = MetricSet {
                    p0: 0.2 / lambda,
                    pn: 0.1 * lambda,
                    q: 1.0 - 0.1 * lambda,
                    a: lambda,
                    k: 2.0 * lambda,
                };
                MeasurementRow {
                    lambda,
                    mu: 0.2,
                    theory: set,
                    exp: set,
                }
            })
            .collect();
        MeasurementTable::from_rows(rows)
    }

    fn small_style() -> ChartStyle {
        ChartStyle {
            size: (400, 260),
            line_width: 1,
            marker_radius: 2,
            label_font: ("sans-serif", 10),
            caption_font: ("sans-serif", 12),
            ..ChartStyle::default()
        }
    }

    #[test]
    fn writes_five_numbered_charts() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("result");

        let written = render(&sample_table(), &out, &small_style()).expect("render");

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["p-1.png", "p-2.png", "p-3.png", "p-4.png", "p-5.png"]);
        for path in &written {
            let meta = std::fs::metadata(path).expect("chart file exists");
            assert!(meta.len() > 0);
        }
    }

    #[test]
    fn rerender_overwrites_existing_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("result");
        let table = sample_table();
        let style = small_style();

        render(&table, &out, &style).expect("first render");
        render(&table, &out, &style).expect("second render");

        let count = std::fs::read_dir(&out).expect("read dir").count();
        assert_eq!(count, 5);
    }

    #[test]
    fn empty_table_is_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let table = MeasurementTable::from_rows(Vec::new());

        let err = render(&table, dir.path(), &small_style()).unwrap_err();
        assert!(matches!(err, RenderError::EmptyTable));
    }

    #[test]
    fn padded_range_handles_flat_series() {
        let range = padded_range([0.5, 0.5, 0.5].into_iter());
        assert!(range.start < 0.5 && range.end > 0.5);
    }
}
