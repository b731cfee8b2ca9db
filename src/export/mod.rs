pub mod download;
pub mod svg;

use crate::error::ExportResult;
use crate::surface::DrawingSurface;

/// Serialize the surface to SVG and hand it to the user as `filename`.
///
/// Returns `Ok(false)` if the user cancelled a native save dialog.
pub fn export_surface(surface: &DrawingSurface, filename: &str) -> ExportResult<bool> {
    let document = surface.export_svg()?;
    log::debug!(
        "Exporting {} bytes of SVG ({} strokes)",
        document.len(),
        surface.history().undo_len()
    );
    download::save(filename, &document, svg::MIME_TYPE)
}
