//! Maps Rust types to column storage types

use crate::error::{Error, Result};
use crate::reflect::{Kind, TypeInfo};
use crate::schema::types::StorageType;

/// Get the storage type for a member type
///
/// Fails with [`Error::UnsupportedType`] for anything without a mapping,
/// including structs that are not calendar timestamps.
pub fn classify(info: &TypeInfo) -> Result<StorageType> {
    let storage_type = match info.kind() {
        Kind::Bool => StorageType::Bool,
        Kind::I8
        | Kind::I16
        | Kind::I32
        | Kind::Isize
        | Kind::U8
        | Kind::U16
        | Kind::U32
        | Kind::Usize => StorageType::Integer,
        Kind::I64 | Kind::U64 => StorageType::BigInt,
        Kind::F32 | Kind::F64 => StorageType::Real,
        Kind::Str => StorageType::Text,
        Kind::Array | Kind::Slice => StorageType::Blob,
        Kind::Struct if info.is_timestamp() => StorageType::DateTime,
        kind => {
            return Err(Error::UnsupportedType {
                name: info.name().to_string(),
                kind,
            })
        }
    };

    Ok(storage_type)
}
