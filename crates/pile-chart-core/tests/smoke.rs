// File: crates/pile-chart-core/tests/smoke.rs
// Purpose: End-to-end preview rendering: smoke, determinism, marker placement.

use skia_safe as skia;

use pile_chart_core::assets::AssetSource;
use pile_chart_core::export::encode_png;
use pile_chart_core::geometry::PlotRect;
use pile_chart_core::mapper::map_point;
use pile_chart_core::types::{BACKGROUND_MARGINS, PREVIEW_REGION};
use pile_chart_core::{
    AssetId, ChartConfig, DataPoint, PageMetadata, PileChart, PileSize, RenderOptions,
};

struct WhiteAssets;

impl AssetSource for WhiteAssets {
    fn fetch(&self, _id: &AssetId) -> std::io::Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((64, 64)).expect("raster surface");
        surface.canvas().clear(skia::Color::WHITE);
        let image = surface.image_snapshot();
        Ok(encode_png(&image).expect("png encode"))
    }
}

fn ready_chart(points: Vec<DataPoint>) -> PileChart {
    let mut chart = PileChart::new();
    chart.set_metadata(PageMetadata::new("108-1", "2025-03-02"));
    chart.set_points(points);
    chart
        .set_config(ChartConfig::new(PileSize::M030, "1:30"))
        .expect("declared configuration resolves");
    chart.load_assets(&WhiteAssets).expect("synthetic assets load");
    chart
}

/// Marker fill from `Theme::reference()`, as decoded RGBA.
const MARKER_RGBA: image::Rgba<u8> = image::Rgba([0x1e, 0x40, 0xaf, 255]);

#[test]
fn render_smoke_png() {
    let chart = ready_chart(vec![DataPoint::new("No. 1", 2.0, 3.0)]);
    let bytes = chart.render_preview().expect("render should succeed");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn rendering_is_deterministic() {
    let chart = ready_chart(vec![
        DataPoint::new("No. 1", 2.0, 3.0),
        DataPoint::new("No. 2", 8.0, 9.0),
    ]);
    // Labels off: glyph rasterization depends on installed fonts, the rest
    // of the pass must be byte-identical.
    let opts = RenderOptions { draw_labels: false };
    let first = chart.render_preview_with(&opts).unwrap();
    let second = chart.render_preview_with(&opts).unwrap();
    assert_eq!(first, second, "same input must produce identical bytes");
}

#[test]
fn markers_land_where_the_projection_says() {
    let chart = ready_chart(vec![DataPoint::new("No. 1", 5.0, 5.0)]);
    let bytes = chart
        .render_preview_with(&RenderOptions { draw_labels: false })
        .unwrap();
    let img = image::load_from_memory(&bytes).expect("decode preview").to_rgba8();

    let plot = PlotRect::from_region(&PREVIEW_REGION, &BACKGROUND_MARGINS);
    let (px, py) = map_point(&DataPoint::new("No. 1", 5.0, 5.0), &plot);
    assert_eq!(*img.get_pixel(px as u32, py as u32), MARKER_RGBA);

    // Just off the marker there is plain background.
    assert_ne!(*img.get_pixel(px as u32 + 20, py as u32), MARKER_RGBA);
}

#[test]
fn out_of_range_reading_renders_outside_the_plot() {
    // x=11 overflows the domain; the marker is drawn right of the plot
    // rectangle instead of being clamped or dropped.
    let point = DataPoint::new("No. 9", 11.0, 5.0);
    let chart = ready_chart(vec![point.clone()]);
    let bytes = chart
        .render_preview_with(&RenderOptions { draw_labels: false })
        .expect("overflow must not abort the render");
    let img = image::load_from_memory(&bytes).expect("decode preview").to_rgba8();

    let plot = PlotRect::from_region(&PREVIEW_REGION, &BACKGROUND_MARGINS);
    let (px, py) = map_point(&point, &plot);
    assert!(px > plot.right());
    assert_eq!(*img.get_pixel(px as u32, py as u32), MARKER_RGBA);
}

#[test]
fn permuting_points_leaves_marker_pixels_in_place() {
    let a = DataPoint::new("No. 1", 2.0, 3.0);
    let b = DataPoint::new("No. 2", 8.0, 9.0);
    let opts = RenderOptions { draw_labels: false };

    let forward = ready_chart(vec![a.clone(), b.clone()])
        .render_preview_with(&opts)
        .unwrap();
    let reversed = ready_chart(vec![b, a])
        .render_preview_with(&opts)
        .unwrap();

    // Markers do not overlap here, so the painter's order cannot show:
    // the two renders are pixel-identical.
    let fwd = image::load_from_memory(&forward).unwrap().to_rgba8();
    let rev = image::load_from_memory(&reversed).unwrap().to_rgba8();
    assert_eq!(fwd.as_raw(), rev.as_raw());
}
