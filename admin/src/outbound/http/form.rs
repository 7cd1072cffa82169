//! Multipart form assembly for image-bearing resources.
//!
//! Absent fields are skipped entirely so partial updates leave the stored
//! values untouched.

use reqwest::multipart::{Form, Part};

use crate::domain::{ApiError, ImageUpload};

/// Ordered text and file fields for a multipart body.
#[derive(Debug, Default)]
pub(crate) struct MultipartFields {
    text: Vec<(&'static str, String)>,
    files: Vec<(&'static str, ImageUpload)>,
}

impl MultipartFields {
    /// Add `name` when `value` is present.
    pub(crate) fn text(mut self, name: &'static str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.text.push((name, value.to_string()));
        }
        self
    }

    /// Add an image part when `upload` is present.
    pub(crate) fn file(mut self, name: &'static str, upload: Option<&ImageUpload>) -> Self {
        if let Some(upload) = upload {
            self.files.push((name, upload.clone()));
        }
        self
    }

    #[cfg(test)]
    fn names(&self) -> Vec<&'static str> {
        self.text
            .iter()
            .map(|(name, _)| *name)
            .chain(self.files.iter().map(|(name, _)| *name))
            .collect()
    }

    pub(crate) fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in self.text {
            form = form.text(name, value);
        }
        for (name, upload) in self.files {
            let part = Part::bytes(upload.bytes().to_vec())
                .file_name(upload.file_name().to_owned())
                .mime_str(upload.content_type())
                .map_err(|error| {
                    ApiError::invalid_request(format!("invalid image content type: {error}"))
                })?;
            form = form.part(name, part);
        }
        Ok(form)
    }
}
