/// Data layer: core types and dataset loading.
///
/// Architecture:
/// ```text
///  data.txt (12 columns, decimal comma)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → MeasurementRow
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ MeasurementTable │  rows sorted ascending by λ
///   └─────────────────┘
/// ```
pub mod loader;
pub mod model;
