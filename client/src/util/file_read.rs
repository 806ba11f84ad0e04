//! Browser file handles and their byte reads.
//!
//! TRADE-OFFS
//! ==========
//! The `web_sys::File` handle only exists in the hydrated browser build. On
//! the server the type carries metadata alone and is never constructed, since
//! drag and input events never fire during SSR.

#[cfg(test)]
#[path = "file_read_test.rs"]
mod file_read_test;

/// Error returned by [`PickedFile::read_bytes`].
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The browser rejected the `arrayBuffer()` read.
    #[error("file could not be read: {0}")]
    Browser(String),
}

/// A file handed over by the drop zone or the file picker.
#[derive(Clone, Debug)]
pub struct PickedFile {
    pub name: String,
    pub size: u64,
    #[cfg(feature = "hydrate")]
    handle: web_sys::File,
}

#[cfg(feature = "hydrate")]
impl PickedFile {
    pub fn from_handle(handle: web_sys::File) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = handle.size() as u64;
        Self { name: handle.name(), size, handle }
    }

    /// Read the whole file into memory.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Browser`] when the underlying promise rejects.
    pub async fn read_bytes(&self) -> Result<Vec<u8>, ReadError> {
        let buffer = wasm_bindgen_futures::JsFuture::from(self.handle.array_buffer())
            .await
            .map_err(|e| ReadError::Browser(format!("{e:?}")))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// Collect every entry of a browser `FileList`, in order.
#[cfg(feature = "hydrate")]
pub fn files_of(list: Option<web_sys::FileList>) -> Vec<PickedFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(PickedFile::from_handle)
        .collect()
}

/// Human-readable file size for the selected-file line.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    match bytes {
        b if b >= MB => format!("{:.1} MB", to_f64(b) / to_f64(MB)),
        b if b >= KB => format!("{:.1} KB", to_f64(b) / to_f64(KB)),
        b => format!("{b} B"),
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(n: u64) -> f64 {
    n as f64
}
