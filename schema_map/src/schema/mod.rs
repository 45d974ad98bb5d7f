//! Schema module for schema_map
//!
//! This module derives table schemas from model descriptors.

pub mod classify;
pub mod field;
pub mod naming;
pub mod parser;
pub mod types;

// Re-export key types
pub use classify::classify;
pub use field::extract_fields;
pub use naming::resolve_table_name;
pub use parser::{parse, SchemaParser};
pub use types::{Field, Schema, StorageType};
