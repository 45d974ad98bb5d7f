//! Models module for schema_map
//!
//! This module defines what a mappable model is and how it may name its table.

#[doc(hidden)]
pub mod capability;
pub mod model;

// Re-export key types
pub use model::{Model, TableName};
