//! Hands an exported document to the user: a browser download on the web,
//! a save dialog on native.

use crate::error::ExportResult;

/// Offer `contents` to the user under `filename`.
///
/// Returns `Ok(false)` when the user cancelled.
#[cfg(not(target_arch = "wasm32"))]
pub fn save(filename: &str, contents: &str, _mime_type: &str) -> ExportResult<bool> {
    let extension = std::path::Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default();

    let dialog = rfd::FileDialog::new()
        .set_title("Export drawing")
        .set_file_name(filename)
        .add_filter("Vector image", &[extension.as_str()]);

    match dialog.save_file() {
        Some(path) => {
            write_file(&path, contents)?;
            log::info!("Exported drawing to {:?}", path);
            Ok(true)
        }
        None => {
            log::debug!("Export cancelled");
            Ok(false)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write_file(path: &std::path::Path, contents: &str) -> ExportResult<()> {
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub use web::save;

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::error::{ExportError, ExportResult};
    use wasm_bindgen::{JsCast, JsValue};

    fn js_err(err: JsValue) -> ExportError {
        ExportError::Web(format!("{:?}", err))
    }

    /// Object URL that is revoked when dropped, whichever way `save` exits.
    struct ObjectUrl(String);

    impl ObjectUrl {
        fn new(blob: &web_sys::Blob) -> ExportResult<Self> {
            web_sys::Url::create_object_url_with_blob(blob)
                .map(Self)
                .map_err(js_err)
        }
    }

    impl Drop for ObjectUrl {
        fn drop(&mut self) {
            if let Err(err) = web_sys::Url::revoke_object_url(&self.0) {
                log::warn!("Failed to revoke object URL: {:?}", err);
            }
        }
    }

    /// Trigger a browser download. The browser owns the save prompt, so a
    /// cancelled download still reports `Ok(true)` here.
    pub fn save(filename: &str, contents: &str, mime_type: &str) -> ExportResult<bool> {
        let window = web_sys::window().ok_or_else(|| ExportError::Web("No window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| ExportError::Web("No document".into()))?;

        let blob_parts = js_sys::Array::new();
        blob_parts.push(&JsValue::from_str(contents));

        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);

        let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options)
            .map_err(js_err)?;
        let url = ObjectUrl::new(&blob)?;

        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ExportError::Web("Created element is not an anchor".into()))?;

        anchor.set_href(&url.0);
        anchor.set_download(filename);
        anchor.click();

        log::info!("Triggered download of {}", filename);
        Ok(true)
    }
}
