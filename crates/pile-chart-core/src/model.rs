// File: crates/pile-chart-core/src/model.rs
// Summary: Data model for readings, chart configuration, and page metadata.

use std::fmt;

/// One measured pile-displacement reading, in the normalized [0, 10] domain.
///
/// Values outside the domain are kept as entered; the renderer draws them
/// outside the plot rectangle so a data-entry mistake stays visible instead
/// of being clamped away.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self { label: label.into(), x, y }
    }

    /// Whether both coordinates lie inside the normalized domain.
    pub fn in_range(&self) -> bool {
        (0.0..=crate::types::AXIS_MAX).contains(&self.x)
            && (0.0..=crate::types::AXIS_MAX).contains(&self.y)
    }
}

/// Pile size class. Selects the footer asset and the depth annotation;
/// together with the scale ratio it selects the background asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileSize {
    /// 0.3 m pile.
    M030,
    /// 0.5 m pile.
    M050,
}

impl PileSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PileSize::M030 => "0.3M",
            PileSize::M050 => "0.5M",
        }
    }

    /// Depth annotation shown in the second title line of the export page.
    pub fn depth_annotation(&self) -> &'static str {
        match self {
            PileSize::M030 => "(embedment depth not exceeding 3 m)",
            PileSize::M050 => "(embedment depth not exceeding 5 m)",
        }
    }
}

impl fmt::Display for PileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical configuration selecting the reference chart assets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChartConfig {
    pub pile_size: PileSize,
    pub scale_ratio: String,
}

impl ChartConfig {
    pub fn new(pile_size: PileSize, scale_ratio: impl Into<String>) -> Self {
        Self { pile_size, scale_ratio: scale_ratio.into() }
    }
}

/// Descriptive text stamped onto the export page. Validated (if at all) by
/// the caller; this core stamps the strings verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub project_number: String,
    pub date: String,
}

impl PageMetadata {
    pub fn new(project_number: impl Into<String>, date: impl Into<String>) -> Self {
        Self { project_number: project_number.into(), date: date.into() }
    }
}
