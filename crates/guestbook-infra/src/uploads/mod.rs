//! Upload URL issuance.

mod signed_url;

pub use signed_url::{SignedUploadUrlIssuer, UploadConfig};
