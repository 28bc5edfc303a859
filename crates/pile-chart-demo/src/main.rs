// File: crates/pile-chart-demo/src/main.rs
// Summary: Demo loads displacement readings from CSV, fabricates placeholder reference
// assets, renders the preview PNG, and exports the A4 PDF document.

use anyhow::{Context, Result};
use pile_chart_core::{
    ChartConfig, DataPoint, DirAssetSource, PageMetadata, PileChart, PileSize,
};
use skia_safe as skia;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let _ = pile_chart_core::telemetry::init_default_tracing();

    // Accept a readings CSV from CLI or fall back to a built-in sample.
    let points = match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            let points = load_readings_csv(&path)
                .with_context(|| format!("failed to load readings '{}'", path.display()))?;
            println!("Loaded {} readings from {}", points.len(), path.display());
            points
        }
        None => sample_readings(),
    };

    let config = ChartConfig::new(PileSize::M030, "1:30");
    let metadata = PageMetadata::new("333-333", chrono::Local::now().format("%Y-%m-%d").to_string());

    // The real deployment ships pre-rendered reference sheets; the demo
    // fabricates stand-ins so it runs from a clean checkout.
    let asset_root = PathBuf::from("target/demo-assets");
    write_placeholder_assets(&asset_root, &config)?;

    let mut chart = PileChart::new();
    chart.set_points(points);
    chart.set_metadata(metadata);
    chart.set_config(config)?;
    chart.load_assets(&DirAssetSource::new(&asset_root))?;

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir)?;

    let preview = chart.render_preview()?;
    let preview_path = out_dir.join("preview.png");
    std::fs::write(&preview_path, preview)?;
    println!("Wrote {}", preview_path.display());

    let doc = chart.export_document()?;
    let pdf_path = out_dir.join(&doc.filename);
    std::fs::write(&pdf_path, doc.bytes)?;
    println!("Wrote {}", pdf_path.display());

    Ok(())
}

fn sample_readings() -> Vec<DataPoint> {
    vec![
        DataPoint::new("No. 1", 2.0, 3.0),
        DataPoint::new("No. 2", 4.5, 5.2),
        DataPoint::new("No. 3", 8.0, 9.0),
        DataPoint::new("No. 4", 6.3, 2.8),
    ]
}

/// Load readings from a CSV with label/x/y columns (header names are probed
/// loosely; `horizontal`/`vertical` are accepted for x/y).
fn load_readings_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_label = idx(&["label", "no", "point"]);
    let i_x = idx(&["x", "horizontal"]);
    let i_y = idx(&["y", "vertical"]);
    if i_x.is_none() || i_y.is_none() {
        anyhow::bail!("could not find x/y columns in {:?}", headers);
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok())
        };
        let label = i_label
            .and_then(|ix| rec.get(ix))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("No. {}", row + 1));
        if let (Some(x), Some(y)) = (parse(i_x), parse(i_y)) {
            out.push(DataPoint::new(label, x, y));
        }
    }
    Ok(out)
}

/// Write stand-in background and footer sheets for `config` under `root`.
fn write_placeholder_assets(root: &Path, config: &ChartConfig) -> Result<()> {
    let background_id = pile_chart_core::resolve_background(config.pile_size, &config.scale_ratio)?;
    let footer_id = pile_chart_core::resolve_footer(config.pile_size);

    write_sheet(&root.join(background_id.as_str()), 800, 800, false)?;
    write_sheet(&root.join(footer_id.as_str()), 1200, 220, true)?;
    Ok(())
}

fn write_sheet(path: &Path, width: i32, height: i32, ruled: bool) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .context("failed to create raster surface")?;
    let canvas = surface.canvas();
    canvas.clear(skia::Color::from_argb(255, 0xfb, 0xfa, 0xf5));

    let mut frame = skia::Paint::default();
    frame.set_color(skia::Color::from_argb(255, 0x94, 0xa3, 0xb8));
    frame.set_style(skia::paint::Style::Stroke);
    frame.set_stroke_width(3.0);
    canvas.draw_rect(
        skia::Rect::from_xywh(4.0, 4.0, width as f32 - 8.0, height as f32 - 8.0),
        &frame,
    );

    if ruled {
        let mut rule = skia::Paint::default();
        rule.set_color(skia::Color::from_argb(255, 0xcb, 0xd5, 0xe1));
        rule.set_stroke_width(1.0);
        for i in 1..5 {
            let y = height as f32 * (i as f32 / 5.0);
            canvas.draw_line((12.0, y), (width as f32 - 12.0, y), &rule);
        }
    }

    let image = surface.image_snapshot();
    let bytes = pile_chart_core::export::encode_png(&image)
        .context("failed to encode placeholder sheet")?;
    std::fs::write(path, bytes)?;
    println!("Wrote placeholder {}", path.display());
    Ok(())
}
