//! File parts for multipart uploads

use std::path::Path;

use lookcircuit_domain::{LookCircuitError, Result};
use reqwest::multipart::{Form, Part};

/// A single file field of a multipart body
///
/// Holds the bytes in memory so the form can be rebuilt for every attempt.
#[derive(Clone)]
pub struct FilePart {
    field: String,
    file_name: String,
    mime: String,
    bytes: Vec<u8>,
}

impl FilePart {
    /// Part named `field` holding `bytes` as `file_name` with type `mime`
    pub fn new(
        field: impl Into<String>,
        file_name: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self { field: field.into(), file_name: file_name.into(), mime: mime.into(), bytes }
    }

    /// Photo part for the face upload: file name `photo.<ext>`, `image/png`
    /// for `.png` files and `image/jpeg` for everything else.
    pub fn photo(field: impl Into<String>, path: &Path, bytes: Vec<u8>) -> Self {
        let ext = path.extension().and_then(|ext| ext.to_str()).unwrap_or("jpg");
        let mime = if ext.eq_ignore_ascii_case("png") { "image/png" } else { "image/jpeg" };
        Self::new(field, format!("photo.{ext}"), mime, bytes)
    }

    /// Form field name
    pub fn field(&self) -> &str {
        &self.field
    }

    /// File name sent in the part header
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// MIME type of the part
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Payload size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the payload has no bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Build a fresh form holding this part
    pub fn to_form(&self) -> Result<Form> {
        let part = Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.mime)
            .map_err(|err| LookCircuitError::Internal(format!("invalid upload MIME type: {err}")))?;
        Ok(Form::new().part(self.field.clone(), part))
    }
}

impl std::fmt::Debug for FilePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilePart")
            .field("field", &self.field)
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}
