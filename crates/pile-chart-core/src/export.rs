// File: crates/pile-chart-core/src/export.rs
// Summary: Serializes a composed page surface into a single-page A4 PDF (and PNG bytes).

use skia_safe as skia;
use skia::pdf;

use crate::error::{ChartError, ChartResult};
use crate::types::{A4_HEIGHT_PT, A4_WIDTH_PT};

/// Finished export: document bytes plus the delivery filename.
#[derive(Clone, Debug)]
pub struct ExportedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Encode an image snapshot as PNG bytes.
pub fn encode_png(image: &skia::Image) -> ChartResult<Vec<u8>> {
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(ChartError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

/// Flatten the page raster onto one fixed-size A4 portrait PDF page.
pub fn export_pdf(page_image: &skia::Image, title: &str) -> ChartResult<Vec<u8>> {
    let mut bytes: Vec<u8> = Vec::new();
    {
        let mut metadata = pdf::Metadata::default();
        metadata.title = title.to_string();

        let mut document = pdf::new_document(&mut bytes, Some(&metadata))
            .begin_page((A4_WIDTH_PT, A4_HEIGHT_PT), None);
        let canvas = document.canvas();
        canvas.draw_image_rect(
            page_image,
            None,
            skia::Rect::from_wh(A4_WIDTH_PT, A4_HEIGHT_PT),
            &skia::Paint::default(),
        );
        document.end_page().close();
    }
    if bytes.is_empty() {
        return Err(ChartError::Encode);
    }
    Ok(bytes)
}

/// Delivery filename derived from the project identifier.
pub fn suggested_filename(project_number: &str) -> String {
    let trimmed = project_number.trim();
    if trimmed.is_empty() {
        "plot-untitled.pdf".to_string()
    } else {
        format!("plot-{trimmed}.pdf")
    }
}
