// File: crates/pile-chart-core/src/page.rs
// Summary: Fixed A4-portrait page composition: title, metadata boxes, chart, footer image.
// Notes: all positions are constants tied to the 794x1122 logical page; there
// is no dynamic layout or flow.

use chrono::NaiveDate;
use skia_safe as skia;

use crate::error::{ChartError, ChartResult};
use crate::model::{ChartConfig, DataPoint, PageMetadata};
use crate::render::{render_chart, RenderOptions};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{RenderRegion, PAGE_HEIGHT, PAGE_SCALE, PAGE_WIDTH};

const TITLE: &str = "D/C RATIO - PRESTRESS PILE SIZE I-0.22";

const TITLE_FONT_SIZE: f32 = 13.0;
const SUBTITLE_FONT_SIZE: f32 = 11.0;
const TITLE_BASELINE: f32 = 55.0;
const SUBTITLE_BASELINE: f32 = 70.0;

const META_BOX_WIDTH: f32 = 130.0;
const META_BOX_HEIGHT: f32 = 22.0;
const META_BOX_RIGHT_INSET: f32 = 140.0;
const META_TEXT_INSET: f32 = 8.0;
const META_FONT_SIZE: f32 = 11.0;
const DATE_BOX_TOP: f32 = 15.0;
const PROJECT_BOX_TOP: f32 = 42.0;

const CHART_WIDTH_FRACTION: f32 = 0.75;
const CHART_MAX_SIDE: f32 = 550.0;
const CHART_TOP: f32 = 130.0;

const FOOTER_WIDTH_FRACTION: f32 = 0.9;
const FOOTER_HEIGHT: f32 = 150.0;
const FOOTER_GAP: f32 = 20.0;

/// Chart region on the logical page. Square, centered horizontally.
pub fn page_chart_region() -> RenderRegion {
    let side = (PAGE_WIDTH * CHART_WIDTH_FRACTION).min(CHART_MAX_SIDE);
    RenderRegion::new((PAGE_WIDTH - side) / 2.0, CHART_TOP, side, side)
}

/// Compose the full page in logical units onto `canvas`.
///
/// With zero points this still produces the complete scaffold (title, boxes,
/// chart backgrounds, footer) so an accidental empty export is recognizable
/// rather than blank.
pub fn compose_page(
    canvas: &skia::Canvas,
    points: &[DataPoint],
    config: &ChartConfig,
    metadata: &PageMetadata,
    background: &skia::Image,
    footer: &skia::Image,
    shaper: &TextShaper,
    theme: &Theme,
    opts: &RenderOptions,
) {
    canvas.clear(theme.page_background);

    draw_title(canvas, config, shaper, theme);
    draw_metadata_boxes(canvas, metadata, shaper, theme);

    let region = page_chart_region();
    render_chart(canvas, &region, points, background, shaper, theme, opts);

    draw_footer(canvas, &region, footer);
}

/// Compose the page onto a fresh raster surface at the export DPI scale.
pub fn compose_page_surface(
    points: &[DataPoint],
    config: &ChartConfig,
    metadata: &PageMetadata,
    background: &skia::Image,
    footer: &skia::Image,
    shaper: &TextShaper,
    theme: &Theme,
    opts: &RenderOptions,
) -> ChartResult<skia::Surface> {
    let width = (PAGE_WIDTH * PAGE_SCALE) as i32;
    let height = (PAGE_HEIGHT * PAGE_SCALE) as i32;
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or(ChartError::Surface { width, height })?;

    let canvas = surface.canvas();
    canvas.save();
    canvas.scale((PAGE_SCALE, PAGE_SCALE));
    compose_page(canvas, points, config, metadata, background, footer, shaper, theme, opts);
    canvas.restore();

    Ok(surface)
}

// ---- helpers ----------------------------------------------------------------

fn draw_title(canvas: &skia::Canvas, config: &ChartConfig, shaper: &TextShaper, theme: &Theme) {
    let cx = PAGE_WIDTH / 2.0;
    shaper.draw_centered(canvas, TITLE, cx, TITLE_BASELINE, TITLE_FONT_SIZE, theme.title_text, true);
    shaper.draw_centered(
        canvas,
        config.pile_size.depth_annotation(),
        cx,
        SUBTITLE_BASELINE,
        SUBTITLE_FONT_SIZE,
        theme.title_text,
        false,
    );
}

fn draw_metadata_boxes(canvas: &skia::Canvas, metadata: &PageMetadata, shaper: &TextShaper, theme: &Theme) {
    // Metadata strings are stamped verbatim; a malformed date is the caller's
    // data, we only flag it.
    if NaiveDate::parse_from_str(&metadata.date, "%Y-%m-%d").is_err() {
        tracing::warn!(date = %metadata.date, "page date is not an ISO calendar date");
    }

    draw_meta_box(
        canvas,
        shaper,
        theme,
        theme.date_box_fill,
        DATE_BOX_TOP,
        &format!("Date: {}", metadata.date),
    );
    draw_meta_box(
        canvas,
        shaper,
        theme,
        theme.project_box_fill,
        PROJECT_BOX_TOP,
        &format!("Plot no.: {}", metadata.project_number),
    );
}

fn draw_meta_box(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    fill_color: skia::Color,
    top: f32,
    text: &str,
) {
    let left = PAGE_WIDTH - META_BOX_RIGHT_INSET;
    let rect = skia::Rect::from_xywh(left, top, META_BOX_WIDTH, META_BOX_HEIGHT);

    let mut fill = skia::Paint::default();
    fill.set_color(fill_color);
    canvas.draw_rect(rect, &fill);

    let mut border = skia::Paint::default();
    border.set_color(theme.box_border);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    canvas.draw_rect(rect, &border);

    shaper.draw_left(
        canvas,
        text,
        left + META_TEXT_INSET,
        top + META_BOX_HEIGHT - 7.0,
        META_FONT_SIZE,
        theme.box_text,
        false,
    );
}

fn draw_footer(canvas: &skia::Canvas, chart_region: &RenderRegion, footer: &skia::Image) {
    let width = PAGE_WIDTH * FOOTER_WIDTH_FRACTION;
    let rect = skia::Rect::from_xywh(
        (PAGE_WIDTH - width) / 2.0,
        chart_region.y + chart_region.height + FOOTER_GAP,
        width,
        FOOTER_HEIGHT,
    );
    canvas.draw_image_rect(footer, None, rect, &skia::Paint::default());
}
