use crate::data::model::MetricSet;

// ---------------------------------------------------------------------------
// Closed-form metrics of an n-channel loss system (Erlang B)
// ---------------------------------------------------------------------------

/// Theoretical performance metrics for an n-channel queueing system with
/// rejections, offered load ρ = λ/μ:
///
/// * `p0 = 1 / Σ_{i=0..n} ρ^i / i!`  – idle probability
/// * `pn = (ρ^n / n!) · p0`          – blocking probability
/// * `q  = 1 − pn`                   – relative throughput
/// * `a  = λ · q`                    – absolute throughput
/// * `k  = ρ · q`                    – mean number of busy channels
pub fn metrics(lambda: f64, mu: f64, channels: u32) -> MetricSet {
    let rho = lambda / mu;

    let norm: f64 = (0..=channels)
        .map(|i| rho.powi(i as i32) / factorial(i))
        .sum();
    let p0 = 1.0 / norm;
    let pn = rho.powi(channels as i32) / factorial(channels) * p0;
    let q = 1.0 - pn;

    MetricSet {
        p0,
        pn,
        q,
        a: lambda * q,
        k: rho * q,
    }
}

fn factorial(k: u32) -> f64 {
    (1..=k).map(f64::from).product()
}
