// File: crates/pile-chart-core/src/chart.rs
// Summary: Chart component: reading list, configuration, asset lifecycle, preview and export.
// Notes:
// - Single-threaded. The embedding layer performs the actual byte loads and
//   reports them back; a completion whose id no longer matches the current
//   target is discarded, so a superseded configuration change can never
//   overwrite a newer asset.
// - Rendering is pull-based: the embedder re-renders the preview after a
//   load applies or after any change to points/metadata while `Ready`.

use skia_safe as skia;

use crate::assets::{
    self, AssetCache, AssetId, AssetKind, AssetRequest, AssetSource,
};
use crate::error::{ChartError, ChartResult};
use crate::export::{self, ExportedDocument};
use crate::model::{ChartConfig, DataPoint, PageMetadata};
use crate::page;
use crate::render::{render_chart, RenderOptions};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{PREVIEW_HEIGHT, PREVIEW_REGION, PREVIEW_WIDTH};

/// Lifecycle of a chart instance. `Ready` is entered only once both assets
/// for the current configuration are cached; export outside `Ready` is
/// rejected, not queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartState {
    Idle,
    AssetsLoading,
    Ready,
    Exporting,
}

/// Result of reporting a finished asset load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The asset was decoded and cached for the current configuration.
    Applied,
    /// The configuration changed while the load was in flight; discarded.
    Stale,
}

pub struct PileChart {
    points: Vec<DataPoint>,
    metadata: PageMetadata,
    config: Option<ChartConfig>,
    background_id: Option<AssetId>,
    footer_id: Option<AssetId>,
    backgrounds: AssetCache,
    footers: AssetCache,
    background_failure: Option<(String, String)>,
    footer_failure: Option<(String, String)>,
    exporting: bool,
    shaper: TextShaper,
    theme: Theme,
}

impl PileChart {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            metadata: PageMetadata::default(),
            config: None,
            background_id: None,
            footer_id: None,
            backgrounds: AssetCache::new(),
            footers: AssetCache::new(),
            background_failure: None,
            footer_failure: None,
            exporting: false,
            shaper: TextShaper::new(),
            theme: Theme::reference(),
        }
    }

    pub fn state(&self) -> ChartState {
        if self.exporting {
            return ChartState::Exporting;
        }
        if self.config.is_none() {
            return ChartState::Idle;
        }
        if self.assets_ready() {
            ChartState::Ready
        } else {
            ChartState::AssetsLoading
        }
    }

    // ---- readings & metadata -------------------------------------------------

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<DataPoint>) {
        self.points = points;
    }

    pub fn add_point(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    /// Remove by entry order. Returns `None` when the index is out of bounds.
    pub fn remove_point(&mut self, index: usize) -> Option<DataPoint> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    pub fn set_metadata(&mut self, metadata: PageMetadata) {
        self.metadata = metadata;
    }

    pub fn config(&self) -> Option<&ChartConfig> {
        self.config.as_ref()
    }

    // ---- asset lifecycle -----------------------------------------------------

    /// Select a configuration. Resolves both asset ids (failing closed on an
    /// undeclared pair) and returns the loads the embedder must perform;
    /// assets already cached from an earlier visit are not requested again.
    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<Vec<AssetRequest>> {
        let background_id = assets::resolve_background(config.pile_size, &config.scale_ratio)?;
        let footer_id = assets::resolve_footer(config.pile_size);

        self.background_id = Some(background_id);
        self.footer_id = Some(footer_id);
        self.background_failure = None;
        self.footer_failure = None;
        self.config = Some(config);

        Ok(self.pending_requests())
    }

    /// Loads still outstanding for the current configuration.
    pub fn pending_requests(&self) -> Vec<AssetRequest> {
        let mut requests = Vec::new();
        if let Some(id) = &self.background_id {
            if !self.backgrounds.contains(id) {
                requests.push(AssetRequest { kind: AssetKind::Background, id: id.clone() });
            }
        }
        if let Some(id) = &self.footer_id {
            if !self.footers.contains(id) {
                requests.push(AssetRequest { kind: AssetKind::Footer, id: id.clone() });
            }
        }
        requests
    }

    /// Report a finished load. Stale completions (the configuration moved on)
    /// are discarded; failures are recorded and keep the chart out of `Ready`
    /// until the configuration changes or a retry succeeds.
    pub fn complete_asset_load(
        &mut self,
        request: &AssetRequest,
        result: std::io::Result<Vec<u8>>,
    ) -> ChartResult<LoadOutcome> {
        let current = match request.kind {
            AssetKind::Background => self.background_id.as_ref(),
            AssetKind::Footer => self.footer_id.as_ref(),
        };
        if current != Some(&request.id) {
            tracing::debug!(asset = %request.id, "discarding stale asset load");
            return Ok(LoadOutcome::Stale);
        }

        let bytes = match result {
            Ok(bytes) => bytes,
            Err(err) => {
                let reason = err.to_string();
                self.record_failure(request.kind, &request.id, &reason);
                return Err(ChartError::AssetLoad { id: request.id.to_string(), reason });
            }
        };
        let image = match assets::decode_image(&request.id, &bytes) {
            Ok(image) => image,
            Err(err) => {
                if let ChartError::AssetLoad { reason, .. } = &err {
                    self.record_failure(request.kind, &request.id, reason);
                }
                return Err(err);
            }
        };

        match request.kind {
            AssetKind::Background => {
                self.backgrounds.insert(request.id.clone(), image);
                self.background_failure = None;
            }
            AssetKind::Footer => {
                self.footers.insert(request.id.clone(), image);
                self.footer_failure = None;
            }
        }
        Ok(LoadOutcome::Applied)
    }

    /// Issue and complete every pending load against `source` in one pass.
    pub fn load_assets(&mut self, source: &dyn AssetSource) -> ChartResult<()> {
        for request in self.pending_requests() {
            let fetched = source.fetch(&request.id);
            self.complete_asset_load(&request, fetched)?;
        }
        Ok(())
    }

    // ---- rendering & export --------------------------------------------------

    /// Render the on-screen preview surface and return it as PNG bytes.
    pub fn render_preview(&self) -> ChartResult<Vec<u8>> {
        self.render_preview_with(&RenderOptions::default())
    }

    pub fn render_preview_with(&self, opts: &RenderOptions) -> ChartResult<Vec<u8>> {
        let (background, _, _) = self.ready_assets()?;
        let mut surface = skia::surfaces::raster_n32_premul((PREVIEW_WIDTH, PREVIEW_HEIGHT))
            .ok_or(ChartError::Surface { width: PREVIEW_WIDTH, height: PREVIEW_HEIGHT })?;
        let canvas = surface.canvas();
        canvas.clear(self.theme.page_background);
        render_chart(canvas, &PREVIEW_REGION, &self.points, background, &self.shaper, &self.theme, opts);
        let image = surface.image_snapshot();
        export::encode_png(&image)
    }

    /// Render the full export page and return it as PNG bytes. Same gating
    /// as `export_document`; useful for an export preview.
    pub fn render_page_with(&self, opts: &RenderOptions) -> ChartResult<Vec<u8>> {
        let image = self.compose_page_image(opts)?;
        export::encode_png(&image)
    }

    /// Compose the page and serialize it as a single-page A4 PDF.
    pub fn export_document(&mut self) -> ChartResult<ExportedDocument> {
        self.ready_assets()?;
        self.exporting = true;
        let result = self.export_inner();
        self.exporting = false;
        result
    }

    fn export_inner(&self) -> ChartResult<ExportedDocument> {
        if self.points.is_empty() {
            tracing::warn!("exporting with zero readings; page will carry the scaffold only");
        }
        let image = self.compose_page_image(&RenderOptions::default())?;
        let filename = export::suggested_filename(&self.metadata.project_number);
        let bytes = export::export_pdf(&image, filename.trim_end_matches(".pdf"))?;
        Ok(ExportedDocument { bytes, filename })
    }

    fn compose_page_image(&self, opts: &RenderOptions) -> ChartResult<skia::Image> {
        let (background, footer, config) = self.ready_assets()?;
        let mut surface = page::compose_page_surface(
            &self.points,
            config,
            &self.metadata,
            background,
            footer,
            &self.shaper,
            &self.theme,
            opts,
        )?;
        Ok(surface.image_snapshot())
    }

    // ---- helpers -------------------------------------------------------------

    fn assets_ready(&self) -> bool {
        match (&self.background_id, &self.footer_id) {
            (Some(bg), Some(ft)) => self.backgrounds.contains(bg) && self.footers.contains(ft),
            _ => false,
        }
    }

    fn record_failure(&mut self, kind: AssetKind, id: &AssetId, reason: &str) {
        let entry = Some((id.to_string(), reason.to_string()));
        match kind {
            AssetKind::Background => self.background_failure = entry,
            AssetKind::Footer => self.footer_failure = entry,
        }
    }

    /// Both current assets, or the error that explains why the chart is not
    /// `Ready`. A recorded load failure wins over a plain "still loading" so
    /// the caller sees the root cause.
    fn ready_assets(&self) -> ChartResult<(&skia::Image, &skia::Image, &ChartConfig)> {
        let config = self
            .config
            .as_ref()
            .ok_or(ChartError::NotReady { reason: "no configuration selected" })?;
        if let Some((id, reason)) = self.background_failure.as_ref().or(self.footer_failure.as_ref()) {
            return Err(ChartError::AssetLoad { id: id.clone(), reason: reason.clone() });
        }
        let background = self
            .background_id
            .as_ref()
            .and_then(|id| self.backgrounds.get(id))
            .ok_or(ChartError::NotReady { reason: "background asset is still loading" })?;
        let footer = self
            .footer_id
            .as_ref()
            .and_then(|id| self.footers.get(id))
            .ok_or(ChartError::NotReady { reason: "footer asset is still loading" })?;
        Ok((background, footer, config))
    }
}

impl Default for PileChart {
    fn default() -> Self {
        Self::new()
    }
}
