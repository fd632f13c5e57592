use std::path::Path;

use reqwest::multipart::{Form, Part};

use super::ApiError;

/// A file attached to a multipart request (images, videos, resumes)
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = guess_mime(&file_name).map(str::to_string);
        Self {
            file_name,
            bytes,
            mime,
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            ApiError::InvalidRequest(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub fn into_part(self) -> Result<Part, ApiError> {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        match self.mime {
            Some(mime) => part
                .mime_str(&mime)
                .map_err(|e| ApiError::InvalidRequest(format!("Invalid MIME type {}: {}", mime, e))),
            None => Ok(part),
        }
    }
}

/// MIME type for the upload kinds the backend accepts
pub fn guess_mime(file_name: &str) -> Option<&'static str> {
    let ext = Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => return None,
    };
    Some(mime)
}

/// Builder for multipart bodies that skips empty optional fields
pub(crate) struct FormBuilder {
    form: Form,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self { form: Form::new() }
    }

    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.form = self.form.text(name, value.into());
        self
    }

    pub fn opt_text(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    pub fn file(mut self, name: &'static str, file: Option<FileUpload>) -> Result<Self, ApiError> {
        if let Some(file) = file {
            self.form = self.form.part(name, file.into_part()?);
        }
        Ok(self)
    }

    pub fn build(self) -> Form {
        self.form
    }
}
