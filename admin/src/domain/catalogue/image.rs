//! Binary image attachments sent with multipart forms.

use std::fmt;
use std::path::Path;

/// An image file to upload alongside form fields.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    file_name: String,
    content_type: &'static str,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Wrap raw bytes, inferring the MIME type from the file extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name);
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// File name reported to the server.
    pub fn file_name(&self) -> &str {
        self.file_name.as_str()
    }

    /// MIME type inferred from the extension.
    pub const fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// Raw file content.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("avif") => "image/avif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("banarasi.JPG", "image/jpeg")]
    #[case("kanjivaram.png", "image/png")]
    #[case("swatch.webp", "image/webp")]
    #[case("notes", "application/octet-stream")]
    fn infers_content_type(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(ImageUpload::new(name, vec![1, 2, 3]).content_type(), expected);
    }

    #[test]
    fn debug_omits_bytes() {
        let upload = ImageUpload::new("a.png", vec![0; 4096]);
        assert!(format!("{upload:?}").contains("len: 4096"));
    }
}
