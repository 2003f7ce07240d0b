use uuid::Uuid;

/// Issues short-lived upload URLs for post images.
///
/// The core only hands the resulting URL string back to the client; producing
/// and honoring the URL is the storage gateway's business.
pub trait UploadUrlIssuer: Send + Sync {
    fn issue_upload_url(&self, post_id: Uuid, file_name: &str) -> Result<String, UploadUrlError>;
}

/// Upload URL issuance errors.
#[derive(Debug, thiserror::Error)]
pub enum UploadUrlError {
    #[error("Failed to sign upload URL: {0}")]
    Signing(String),
}
