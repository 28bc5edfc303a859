// File: crates/pile-chart-core/src/assets.rs
// Summary: Configuration-to-asset resolution and keyed image caches.
// Notes:
// - Resolution is a pure lookup over a closed table and fails closed:
//   an undeclared (pile size, scale ratio) pair is an error, never a
//   substituted default image.
// - Caches are owned by the chart component; completion of a load is
//   applied only if its id still matches the current target (staleness
//   guard for superseded configuration changes).

use std::collections::HashMap;
use std::path::PathBuf;

use skia_safe as skia;

use crate::error::{ChartError, ChartResult};
use crate::model::PileSize;

/// Scale ratios with a pre-rendered background per pile size.
pub const SCALE_RATIOS: [&str; 5] = ["1:150", "1:100", "1:75", "1:50", "1:30"];

/// Identifier of a raster asset, relative to the asset root.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which of the two chart assets a request refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Background,
    Footer,
}

/// A pending load issued by `PileChart::set_config`. The embedding layer
/// fetches the bytes and reports back via `complete_asset_load`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRequest {
    pub kind: AssetKind,
    pub id: AssetId,
}

/// Background image for a (pile size, scale ratio) pair.
/// Fails closed with `UnknownConfiguration` for pairs outside the table.
pub fn resolve_background(pile_size: PileSize, scale_ratio: &str) -> ChartResult<AssetId> {
    if !SCALE_RATIOS.contains(&scale_ratio) {
        return Err(ChartError::UnknownConfiguration {
            pile_size,
            scale_ratio: scale_ratio.to_string(),
        });
    }
    let suffix = scale_ratio.replace(':', "_");
    let path = match pile_size {
        PileSize::M030 => format!("03M/3M-{suffix}.jpg"),
        PileSize::M050 => format!("05M/5M-{suffix}.jpg"),
    };
    Ok(AssetId(path))
}

/// Footer image for a pile size. Total over the enum.
pub fn resolve_footer(pile_size: PileSize) -> AssetId {
    let path = match pile_size {
        PileSize::M030 => "Footer/Latter3m.jpg",
        PileSize::M050 => "Footer/Latter5m.jpg",
    };
    AssetId(path.to_string())
}

/// Byte-level access to the fixed asset directory. The core never walks the
/// filesystem itself; tests substitute synthetic sources.
pub trait AssetSource {
    fn fetch(&self, id: &AssetId) -> std::io::Result<Vec<u8>>;
}

/// Loads assets from a directory on disk.
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssetSource {
    fn fetch(&self, id: &AssetId) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.root.join(id.as_str()))
    }
}

/// Decode encoded image bytes (JPEG/PNG) into a Skia image.
pub fn decode_image(id: &AssetId, bytes: &[u8]) -> ChartResult<skia::Image> {
    let data = skia::Data::new_copy(bytes);
    skia::Image::from_encoded(data).ok_or_else(|| ChartError::AssetLoad {
        id: id.to_string(),
        reason: "unsupported or corrupt image data".to_string(),
    })
}

/// Decoded images keyed by asset id. Revisiting a configuration whose assets
/// were already loaded is a hit and issues no new request.
#[derive(Default)]
pub struct AssetCache {
    entries: HashMap<AssetId, skia::Image>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &AssetId) -> Option<&skia::Image> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &AssetId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn insert(&mut self, id: AssetId, image: skia::Image) {
        tracing::debug!(asset = %id, "asset cached");
        self.entries.insert(id, image);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
