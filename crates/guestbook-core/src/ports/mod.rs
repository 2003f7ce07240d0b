//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod uploads;

pub use repository::PostRepository;
pub use uploads::{UploadUrlError, UploadUrlIssuer};
