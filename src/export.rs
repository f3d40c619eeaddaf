use crate::error::DoodleResult;
use crate::surface::Surface;

/// Name the exported drawing is saved under.
pub const EXPORT_FILENAME: &str = "my_doodle.png";
pub const PNG_MIME: &str = "image/png";

/// An encoded drawing, ready to be saved or downloaded.
#[derive(Clone, PartialEq, Eq)]
pub struct Export {
    filename: String,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for Export {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Export")
            .field("filename", &self.filename)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl Export {
    pub fn encode(surface: &Surface, filename: impl Into<String>) -> DoodleResult<Self> {
        Ok(Self {
            filename: filename.into(),
            bytes: surface.encode_png()?,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime(&self) -> &'static str {
        PNG_MIME
    }

    /// Write the file into `dir`, returning the full path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, dir: &std::path::Path) -> DoodleResult<std::path::PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        log::info!("Exported {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }

    /// Hand the file to the browser as a download.
    #[cfg(target_arch = "wasm32")]
    pub fn download(&self) -> DoodleResult<()> {
        use crate::error::DoodleError;
        use wasm_bindgen::JsCast as _;

        let js_err = |err: wasm_bindgen::JsValue| DoodleError::Download(format!("{err:?}"));

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| DoodleError::Download("no document".to_owned()))?;

        let blob_parts = js_sys::Array::new();
        blob_parts.push(&js_sys::Uint8Array::from(self.bytes.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(PNG_MIME);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &options)
            .map_err(js_err)?;

        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;
        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| DoodleError::Download("element is not an anchor".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(&self.filename);
        anchor.click();

        web_sys::Url::revoke_object_url(&url).ok();
        log::info!("Downloaded {} ({} bytes)", self.filename, self.bytes.len());
        Ok(())
    }
}
