use anyhow::{ensure, Context, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Exp};

use crate::data::model::MetricSet;

// ---------------------------------------------------------------------------
// Event-driven loss-system simulation
// ---------------------------------------------------------------------------

/// An n-channel queueing system with rejections and no waiting room,
/// driven in virtual time: exponential interarrival and service times.
///
/// Runs are deterministic for a given seed.
#[derive(Debug, Clone)]
pub struct Simulation {
    channels: usize,
    mu: f64,
    seed: u64,
}

/// Raw counters collected over one run.
#[derive(Debug, Clone, Copy)]
pub struct SimReport {
    pub lambda: f64,
    pub mu: f64,
    pub arrivals: u64,
    pub served: u64,
    pub rejected: u64,
    /// Sum of all service durations across channels.
    pub busy_time: f64,
    /// Time during which every channel was free.
    pub idle_time: f64,
    /// Start of the run to the later of last arrival and last departure.
    pub horizon: f64,
}

impl Simulation {
    pub fn new(channels: usize, mu: f64, seed: u64) -> Self {
        Simulation { channels, mu, seed }
    }

    /// Drive the system through `requests` arrivals at arrival rate
    /// `lambda` and report the collected counters.
    pub fn run(&self, lambda: f64, requests: u64) -> Result<SimReport> {
        ensure!(requests > 0, "at least one request is required");
        let interarrival = Exp::new(lambda).context("arrival rate must be positive")?;
        let service = Exp::new(self.mu).context("service rate must be positive")?;
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut busy_until = vec![0f64; self.channels];
        let mut now = 0.0;
        let mut served = 0u64;
        let mut rejected = 0u64;
        let mut busy_time = 0.0;

        // Busy intervals arrive ordered by start time, so the union of
        // "at least one channel busy" can be merged on the fly.
        let mut covered_end = 0.0;
        let mut union_busy = 0.0;

        for _ in 0..requests {
            now += interarrival.sample(&mut rng);

            match busy_until.iter_mut().find(|end| **end <= now) {
                Some(slot) => {
                    let duration = service.sample(&mut rng);
                    *slot = now + duration;
                    served += 1;
                    busy_time += duration;

                    let end = now + duration;
                    if now >= covered_end {
                        union_busy += duration;
                        covered_end = end;
                    } else if end > covered_end {
                        union_busy += end - covered_end;
                        covered_end = end;
                    }
                }
                None => rejected += 1,
            }
        }

        let horizon = covered_end.max(now);
        log::debug!(
            "λ = {lambda}: {served} served, {rejected} rejected over {horizon:.1} time units"
        );

        Ok(SimReport {
            lambda,
            mu: self.mu,
            arrivals: requests,
            served,
            rejected,
            busy_time,
            idle_time: horizon - union_busy,
            horizon,
        })
    }
}

impl SimReport {
    /// Experimental metric values in the dataset's column convention:
    /// idle fraction, rejection fraction, served fraction, absolute
    /// throughput, time-averaged busy channels.
    pub fn metrics(&self) -> MetricSet {
        let arrivals = self.arrivals as f64;
        let q = self.served as f64 / arrivals;

        MetricSet {
            p0: self.idle_time / self.horizon,
            pn: self.rejected as f64 / arrivals,
            q,
            a: self.lambda * q,
            k: self.busy_time / self.horizon,
        }
    }
}
