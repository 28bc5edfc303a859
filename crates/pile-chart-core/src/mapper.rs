// File: crates/pile-chart-core/src/mapper.rs
// Summary: Projection from the normalized data domain into plot pixels, plus label box layout.

use crate::geometry::PlotRect;
use crate::model::DataPoint;
use crate::types::{AXIS_MAX, LABEL_GAP, LABEL_PADDING, LABEL_TEXT_HEIGHT};

/// Project a reading into pixel coordinates within `plot`.
///
/// Linear on both axes; pixel y grows downward while data y grows upward, so
/// the y term is inverted. Values outside [0, 10] land outside the plot
/// rectangle on purpose: visible overflow signals bad input.
pub fn map_point(point: &DataPoint, plot: &PlotRect) -> (f32, f32) {
    let px = plot.left + ((point.x / AXIS_MAX) as f32) * plot.width;
    let py = plot.top + plot.height - ((point.y / AXIS_MAX) as f32) * plot.height;
    (px, py)
}

/// Pixel position of the grid/tick line for division `i` of the x axis.
pub fn grid_x(plot: &PlotRect, i: u32, divisions: u32) -> f32 {
    plot.left + (i as f32 / divisions as f32) * plot.width
}

/// Pixel position of the grid/tick line for division `i` of the y axis.
/// Division 0 is the bottom edge, matching the inverted data axis.
pub fn grid_y(plot: &PlotRect, i: u32, divisions: u32) -> f32 {
    plot.top + plot.height - (i as f32 / divisions as f32) * plot.height
}

/// Highlight box behind a point label, anchored up-and-right of the marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl LabelBox {
    /// Layout for a marker at `(px, py)` whose label text measures `text_width`.
    pub fn for_marker(px: f32, py: f32, text_width: f32) -> Self {
        Self {
            left: px + LABEL_GAP,
            top: py - LABEL_TEXT_HEIGHT - LABEL_PADDING - LABEL_GAP,
            width: text_width + LABEL_PADDING * 2.0,
            height: LABEL_TEXT_HEIGHT + LABEL_PADDING * 2.0,
        }
    }

    /// Top-left corner of the text inside the box.
    pub fn text_origin(&self) -> (f32, f32) {
        (self.left + LABEL_PADDING, self.top + LABEL_PADDING)
    }
}
