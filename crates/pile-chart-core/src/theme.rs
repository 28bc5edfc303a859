// File: crates/pile-chart-core/src/theme.rs
// Summary: Fixed palette of the reference document (markers, labels, grid, page furniture).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub page_background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub tick_label: skia::Color,
    pub marker: skia::Color,
    pub label_fill: skia::Color,
    pub label_border: skia::Color,
    pub label_text: skia::Color,
    pub title_text: skia::Color,
    pub box_border: skia::Color,
    pub box_text: skia::Color,
    pub date_box_fill: skia::Color,
    pub project_box_fill: skia::Color,
}

impl Theme {
    /// Palette matched to the printed reference chart.
    pub fn reference() -> Self {
        Self {
            page_background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0xd1, 0xd5, 0xdb),
            tick_label: skia::Color::from_argb(255, 0, 0, 0),
            marker: skia::Color::from_argb(255, 0x1e, 0x40, 0xaf),
            label_fill: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            label_border: skia::Color::from_argb(255, 0, 0, 0),
            label_text: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
            title_text: skia::Color::from_argb(255, 0, 0, 0),
            box_border: skia::Color::from_argb(255, 0, 0, 0),
            box_text: skia::Color::from_argb(255, 0, 0, 0),
            date_box_fill: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            project_box_fill: skia::Color::from_argb(255, 0x90, 0xee, 0x90),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::reference()
    }
}
