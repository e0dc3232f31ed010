use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    #[error("Couldn't encode QR code: {0}")]
    QrEncode(String),
    #[error("Failed to load document {path}: {reason}")]
    DocumentLoad { path: String, reason: String },
    #[error("Failed to render page {page}: {reason}")]
    PageRender { page: u32, reason: String },
    #[error("Project data not found")]
    ProjectsNotFound,
    #[error("Couldn't parse project data: {0}")]
    ProjectsParse(String),
}

impl From<qrcode::types::QrError> for SiteError {
    fn from(value: qrcode::types::QrError) -> Self {
        Self::QrEncode(value.to_string())
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(value: serde_json::Error) -> Self {
        Self::ProjectsParse(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
