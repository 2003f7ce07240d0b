//! SeaORM entities.

pub mod row;
