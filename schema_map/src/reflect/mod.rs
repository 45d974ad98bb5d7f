//! Reflection layer for schema_map
//!
//! Rust has no runtime reflection, so type shape is described by
//! [`TypeInfo`] and [`TypeDescriptor`] values. `#[derive(Model)]` generates
//! them for structs, and [`Reflect`] provides them for the supported
//! standard library, chrono and uuid types.

pub mod impls;
pub mod types;

// Re-export key types
pub use types::{Kind, Member, Reflect, Tags, TypeDescriptor, TypeInfo};
