//! # Guestbook Core
//!
//! The domain layer of the guestbook service.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::ServiceError;
pub use service::GuestBookService;
