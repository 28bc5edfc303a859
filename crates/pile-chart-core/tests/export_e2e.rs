// File: crates/pile-chart-core/tests/export_e2e.rs
// Purpose: Full export scenario: page composition, marker placement on the page, PDF delivery.

use skia_safe as skia;

use pile_chart_core::assets::{AssetKind, AssetSource};
use pile_chart_core::export::encode_png;
use pile_chart_core::geometry::PlotRect;
use pile_chart_core::mapper::map_point;
use pile_chart_core::page::page_chart_region;
use pile_chart_core::types::{BACKGROUND_MARGINS, PAGE_SCALE};
use pile_chart_core::{
    AssetId, ChartConfig, DataPoint, PageMetadata, PileChart, PileSize, RenderOptions,
};

const FOOTER_GRAY: skia::Color = skia::Color::new(0xffb4b4b4);

fn solid_png(color: skia::Color) -> Vec<u8> {
    let mut surface = skia::surfaces::raster_n32_premul((64, 64)).expect("raster surface");
    surface.canvas().clear(color);
    let image = surface.image_snapshot();
    encode_png(&image).expect("png encode")
}

/// White backgrounds, gray footers, so the composed page regions are telling.
struct TwoToneAssets;

impl AssetSource for TwoToneAssets {
    fn fetch(&self, id: &AssetId) -> std::io::Result<Vec<u8>> {
        if id.as_str().starts_with("Footer/") {
            Ok(solid_png(FOOTER_GRAY))
        } else {
            Ok(solid_png(skia::Color::WHITE))
        }
    }
}

fn scenario_chart(points: Vec<DataPoint>) -> PileChart {
    let mut chart = PileChart::new();
    chart.set_metadata(PageMetadata::new("333-333", "2025-01-15"));
    chart.set_points(points);
    chart
        .set_config(ChartConfig::new(PileSize::M030, "1:30"))
        .expect("declared configuration resolves");
    chart.load_assets(&TwoToneAssets).expect("synthetic assets load");
    chart
}

fn page_pixel(img: &image::RgbaImage, logical_x: f32, logical_y: f32) -> image::Rgba<u8> {
    *img.get_pixel((logical_x * PAGE_SCALE) as u32, (logical_y * PAGE_SCALE) as u32)
}

#[test]
fn export_scenario_produces_one_page_with_both_markers() {
    let points = vec![
        DataPoint::new("A1", 2.0, 3.0),
        DataPoint::new("A2", 8.0, 9.0),
    ];
    let mut chart = scenario_chart(points.clone());

    // Page raster: markers sit exactly where the projection predicts.
    let png = chart
        .render_page_with(&RenderOptions { draw_labels: false })
        .expect("page render");
    let img = image::load_from_memory(&png).expect("decode page").to_rgba8();

    let plot = PlotRect::from_region(&page_chart_region(), &BACKGROUND_MARGINS);
    let marker = image::Rgba([0x1e, 0x40, 0xaf, 255]);
    for point in &points {
        let (px, py) = map_point(point, &plot);
        assert_eq!(page_pixel(&img, px, py), marker, "marker for {}", point.label);
    }

    // Metadata boxes carry their fixed fills at the fixed positions.
    assert_eq!(page_pixel(&img, 780.0, 18.0), image::Rgba([0xff, 0xff, 0x00, 255]));
    assert_eq!(page_pixel(&img, 780.0, 45.0), image::Rgba([0x90, 0xee, 0x90, 255]));

    // Footer image stretched below the chart.
    assert_eq!(page_pixel(&img, 397.0, 875.0), image::Rgba([0xb4, 0xb4, 0xb4, 255]));

    // The document itself: one PDF under the project-derived name.
    let doc = chart.export_document().expect("export succeeds");
    assert!(doc.bytes.starts_with(b"%PDF"));
    assert!(doc.bytes.len() > 1_000, "document should embed the page raster");
    assert_eq!(doc.filename, "plot-333-333.pdf");
}

#[test]
fn empty_export_still_carries_the_scaffold() {
    // Blocking an empty export is the caller's job; if invoked anyway the
    // page must carry its furniture rather than come out blank.
    let mut chart = scenario_chart(Vec::new());

    let png = chart
        .render_page_with(&RenderOptions { draw_labels: false })
        .expect("scaffold render");
    let img = image::load_from_memory(&png).expect("decode page").to_rgba8();

    assert_eq!(page_pixel(&img, 780.0, 18.0), image::Rgba([0xff, 0xff, 0x00, 255]));
    assert_eq!(page_pixel(&img, 397.0, 875.0), image::Rgba([0xb4, 0xb4, 0xb4, 255]));

    // No marker where a reading would have been (the spot is a grid
    // intersection, so only the light grid color may show).
    let plot = PlotRect::from_region(&page_chart_region(), &BACKGROUND_MARGINS);
    let (px, py) = map_point(&DataPoint::new("A1", 2.0, 3.0), &plot);
    assert_ne!(page_pixel(&img, px, py), image::Rgba([0x1e, 0x40, 0xaf, 255]));

    let doc = chart.export_document().expect("scaffold export");
    assert!(doc.bytes.starts_with(b"%PDF"));
}

#[test]
fn filename_falls_back_when_the_project_number_is_blank() {
    let mut chart = scenario_chart(vec![DataPoint::new("A1", 2.0, 3.0)]);
    chart.set_metadata(PageMetadata::new("  ", "2025-01-15"));
    let doc = chart.export_document().expect("export succeeds");
    assert_eq!(doc.filename, "plot-untitled.pdf");
}

#[test]
fn both_assets_load_for_the_scenario_configuration() {
    let mut chart = PileChart::new();
    let requests = chart
        .set_config(ChartConfig::new(PileSize::M030, "1:30"))
        .unwrap();
    let kinds: Vec<AssetKind> = requests.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![AssetKind::Background, AssetKind::Footer]);
    assert_eq!(requests[0].id.as_str(), "03M/3M-1_30.jpg");
    assert_eq!(requests[1].id.as_str(), "Footer/Latter3m.jpg");
}
