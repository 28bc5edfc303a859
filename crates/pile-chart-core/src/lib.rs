// File: crates/pile-chart-core/src/lib.rs
// Summary: Core library entry point; exports the public API for chart rendering and export.

pub mod assets;
pub mod chart;
pub mod error;
pub mod export;
pub mod geometry;
pub mod mapper;
pub mod model;
pub mod page;
pub mod render;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod types;

pub use assets::{resolve_background, resolve_footer, AssetId, AssetKind, AssetRequest, AssetSource, DirAssetSource};
pub use chart::{ChartState, LoadOutcome, PileChart};
pub use error::{ChartError, ChartResult};
pub use export::ExportedDocument;
pub use geometry::PlotRect;
pub use mapper::map_point;
pub use model::{ChartConfig, DataPoint, PageMetadata, PileSize};
pub use render::{render_chart, RenderOptions};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{PlotMargins, RenderRegion, BACKGROUND_MARGINS};
