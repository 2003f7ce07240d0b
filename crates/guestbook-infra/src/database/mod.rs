//! Database connection management.

mod connections;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::{DatabaseConfig, DatabaseConnections};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
