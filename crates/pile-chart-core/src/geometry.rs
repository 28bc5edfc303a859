// File: crates/pile-chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::{PlotMargins, RenderRegion};

/// Inner plot rectangle of a chart region, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotRect {
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Derive the plot rectangle by applying fractional margins to a region.
    pub fn from_region(region: &RenderRegion, margins: &PlotMargins) -> Self {
        Self {
            left: region.x + region.width * margins.left,
            top: region.y + region.height * margins.top,
            width: region.width * (1.0 - margins.left - margins.right),
            height: region.height * (1.0 - margins.top - margins.bottom),
        }
    }

    pub fn right(&self) -> f32 { self.left + self.width }
    pub fn bottom(&self) -> f32 { self.top + self.height }
}
