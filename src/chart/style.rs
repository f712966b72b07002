use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Chart styling
// ---------------------------------------------------------------------------

/// Theoretical series colour (solid markers).
pub const NAVY: RGBColor = RGBColor(0, 0, 128);
/// Experimental series colour (hollow markers).
pub const CRIMSON: RGBColor = RGBColor(220, 20, 60);

/// Styling for the comparison charts.
///
/// Passed explicitly into [`render`](super::render::render) instead of
/// living in process-global state, so repeated or parallel invocations
/// never interfere with each other.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Output bitmap size in pixels.
    pub size: (u32, u32),
    /// Colour of the "theory" series.
    pub theory_color: RGBColor,
    /// Colour of the "experiment" series.
    pub experiment_color: RGBColor,
    /// Stroke width of series lines and marker outlines.
    pub line_width: u32,
    /// Marker radius in pixels.
    pub marker_radius: i32,
    /// Opacity of the mesh grid lines.
    pub grid_opacity: f64,
    pub label_font: (&'static str, u32),
    pub caption_font: (&'static str, u32),
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            // 10 × 6 inches at 300 dpi.
            size: (3000, 1800),
            theory_color: NAVY,
            experiment_color: CRIMSON,
            line_width: 6,
            marker_radius: 12,
            grid_opacity: 0.3,
            label_font: ("sans-serif", 40),
            caption_font: ("sans-serif", 56),
        }
    }
}
