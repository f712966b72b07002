/// Chart layer: fixed styling and the five-chart renderer.
pub mod render;
pub mod style;

pub use render::{render, RenderError};
pub use style::ChartStyle;
