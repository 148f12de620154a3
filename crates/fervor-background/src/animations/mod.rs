//! Blob simulation.

pub mod blob;
pub mod field;
