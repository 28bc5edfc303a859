// File: crates/pile-chart-core/src/render.rs
// Summary: Region-parameterized chart pass: background image, grid, ticks, markers, labels.
// Notes:
// - Preview and export call this same routine with different regions; the
//   draw path must never read fixed surface dimensions.
// - Layering order is fixed: plot fill, reference image, grid, ticks,
//   markers, labels. Later points paint over earlier ones (painter's
//   algorithm); no collision avoidance for overlapping labels.

use skia_safe as skia;

use crate::geometry::PlotRect;
use crate::mapper::{grid_x, grid_y, map_point, LabelBox};
use crate::model::DataPoint;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{
    RenderRegion, BACKGROUND_MARGINS, GRID_DIVISIONS, LABEL_FONT_SIZE, MARKER_RADIUS,
    TICK_FONT_SIZE,
};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Draw tick numerals and point labels. Disabled by snapshot tests to
    /// keep pixel output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true }
    }
}

/// Draw the full chart into `region` of `canvas`.
///
/// Deterministic: identical `(points, region, background)` input produces
/// identical pixels.
pub fn render_chart(
    canvas: &skia::Canvas,
    region: &RenderRegion,
    points: &[DataPoint],
    background: &skia::Image,
    shaper: &TextShaper,
    theme: &Theme,
    opts: &RenderOptions,
) {
    let plot = PlotRect::from_region(region, &BACKGROUND_MARGINS);

    draw_backdrop(canvas, region, background, theme);
    draw_grid(canvas, &plot, theme);
    if opts.draw_labels {
        draw_ticks(canvas, &plot, shaper, theme);
    }
    draw_points(canvas, &plot, points, shaper, theme, opts);
}

// ---- helpers ----------------------------------------------------------------

fn draw_backdrop(canvas: &skia::Canvas, region: &RenderRegion, background: &skia::Image, theme: &Theme) {
    let rect = skia::Rect::from_xywh(region.x, region.y, region.width, region.height);

    let mut fill = skia::Paint::default();
    fill.set_color(theme.plot_background);
    canvas.draw_rect(rect, &fill);

    // Reference image stretched to the full region; the plot margins encode
    // where its grid artwork sits.
    canvas.draw_image_rect(background, None, rect, &skia::Paint::default());
}

fn draw_grid(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for i in 0..=GRID_DIVISIONS {
        let x = grid_x(plot, i, GRID_DIVISIONS);
        canvas.draw_line((x, plot.top), (x, plot.bottom()), &paint);
    }
    for i in 0..=GRID_DIVISIONS {
        let y = grid_y(plot, i, GRID_DIVISIONS);
        canvas.draw_line((plot.left, y), (plot.right(), y), &paint);
    }
}

fn draw_ticks(canvas: &skia::Canvas, plot: &PlotRect, shaper: &TextShaper, theme: &Theme) {
    for i in 0..=GRID_DIVISIONS {
        let text = i.to_string();
        let x = grid_x(plot, i, GRID_DIVISIONS);
        shaper.draw_centered(canvas, &text, x, plot.bottom() + 25.0, TICK_FONT_SIZE, theme.tick_label, false);
        let y = grid_y(plot, i, GRID_DIVISIONS);
        shaper.draw_right(canvas, &text, plot.left - 10.0, y + 5.0, TICK_FONT_SIZE, theme.tick_label, false);
    }
}

fn draw_points(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    points: &[DataPoint],
    shaper: &TextShaper,
    theme: &Theme,
    opts: &RenderOptions,
) {
    let mut marker = skia::Paint::default();
    marker.set_color(theme.marker);
    marker.set_anti_alias(true);

    let mut label_fill = skia::Paint::default();
    label_fill.set_color(theme.label_fill);

    let mut label_border = skia::Paint::default();
    label_border.set_color(theme.label_border);
    label_border.set_style(skia::paint::Style::Stroke);
    label_border.set_stroke_width(1.0);

    for point in points {
        if !point.in_range() {
            tracing::warn!(label = %point.label, x = point.x, y = point.y, "reading outside the 0-10 domain; drawn outside the plot");
        }
        let (px, py) = map_point(point, plot);

        canvas.draw_circle((px, py), MARKER_RADIUS, &marker);

        if !opts.draw_labels {
            continue;
        }
        let text_width = shaper.measure_width(&point.label, LABEL_FONT_SIZE, true);
        let lb = LabelBox::for_marker(px, py, text_width);
        let rect = skia::Rect::from_xywh(lb.left, lb.top, lb.width, lb.height);
        canvas.draw_rect(rect, &label_fill);
        canvas.draw_rect(rect, &label_border);
        let (tx, ty) = lb.text_origin();
        shaper.draw_top_left(canvas, &point.label, tx, ty, LABEL_FONT_SIZE, theme.label_text, true);
    }
}
