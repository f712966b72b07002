//! Comparison-chart report generator for a multi-channel queueing system
//! with rejections (M/M/n loss system).
//!
//! Pipeline:
//! ```text
//!  data.txt ──▶ data::loader ──▶ MeasurementTable ──▶ chart::render ──▶ result/p-*.png
//! ```
//!
//! The [`theory`] and [`sim`] modules re-create the dataset from first
//! principles: closed-form Erlang-B values on one side, an event-driven
//! simulation on the other (see `src/bin/generate_sample.rs`).

pub mod chart;
pub mod data;
pub mod sim;
pub mod theory;
