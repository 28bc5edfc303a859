// File: crates/pile-chart-core/src/error.rs
// Summary: Error types for asset resolution, loading, rendering, and export.

use thiserror::Error;

use crate::model::PileSize;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The requested (pile size, scale ratio) pair has no asset mapping.
    /// Fatal to the render attempt; never substituted with a default image.
    #[error("no reference chart for pile size {pile_size} at scale {scale_ratio}")]
    UnknownConfiguration { pile_size: PileSize, scale_ratio: String },

    /// An image asset could not be fetched or decoded.
    #[error("asset '{id}' failed to load: {reason}")]
    AssetLoad { id: String, reason: String },

    /// Render or export requested outside the `Ready` state.
    #[error("chart not ready: {reason}")]
    NotReady { reason: &'static str },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("image encode failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
