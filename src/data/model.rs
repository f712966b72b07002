use std::fmt;

// ---------------------------------------------------------------------------
// Metric – the five performance indicators of the queueing system
// ---------------------------------------------------------------------------

/// One of the five performance metrics recorded for the queueing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Idle probability.
    P0,
    /// Blocking (loss) probability.
    Pn,
    /// Relative throughput.
    Q,
    /// Absolute throughput.
    A,
    /// Mean number of busy channels.
    K,
}

impl Metric {
    /// All metrics in chart order; the `p-1` … `p-5` output numbering
    /// follows this array.
    pub const ALL: [Metric; 5] = [Metric::P0, Metric::Pn, Metric::Q, Metric::A, Metric::K];

    /// Short code used in the dataset column naming.
    pub fn code(self) -> &'static str {
        match self {
            Metric::P0 => "P0",
            Metric::Pn => "Pn",
            Metric::Q => "Q",
            Metric::A => "A",
            Metric::K => "k",
        }
    }

    /// Human-readable title used for the y-axis and chart caption.
    pub fn title(self) -> &'static str {
        match self {
            Metric::P0 => "Idle probability",
            Metric::Pn => "Blocking probability",
            Metric::Q => "Relative throughput",
            Metric::A => "Absolute throughput",
            Metric::K => "Mean number of busy channels",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ---------------------------------------------------------------------------
// MetricSet – the five values of one kind (theory or experiment)
// ---------------------------------------------------------------------------

/// The five metric values of one kind for a single arrival-rate sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSet {
    pub p0: f64,
    pub pn: f64,
    pub q: f64,
    pub a: f64,
    pub k: f64,
}

impl MetricSet {
    /// Value for a given metric code.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::P0 => self.p0,
            Metric::Pn => self.pn,
            Metric::Q => self.q,
            Metric::A => self.a,
            Metric::K => self.k,
        }
    }
}

// ---------------------------------------------------------------------------
// MeasurementRow / MeasurementTable
// ---------------------------------------------------------------------------

/// One record per arrival-rate sample (one line of the source file).
#[derive(Debug, Clone)]
pub struct MeasurementRow {
    /// Arrival rate λ – the independent variable.
    pub lambda: f64,
    /// Service rate μ – expected constant across rows, not enforced.
    pub mu: f64,
    /// Theoretical (Erlang-B) values.
    pub theory: MetricSet,
    /// Experimentally measured values.
    pub exp: MetricSet,
}

/// The full dataset, held in memory for the duration of a run.
///
/// Rows are sorted ascending by λ at construction and never mutated
/// afterwards. Duplicate λ values are kept as-is.
#[derive(Debug, Clone)]
pub struct MeasurementTable {
    rows: Vec<MeasurementRow>,
}

impl MeasurementTable {
    /// Build a table from unordered rows.
    ///
    /// The sort is stable: rows with equal λ keep their input order.
    pub fn from_rows(mut rows: Vec<MeasurementRow>) -> Self {
        rows.sort_by(|a, b| a.lambda.total_cmp(&b.lambda));
        MeasurementTable { rows }
    }

    pub fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no samples.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Service rate taken from the first (lowest-λ) row, if any.
    pub fn first_mu(&self) -> Option<f64> {
        self.rows.first().map(|r| r.mu)
    }
}
