//! Type definitions for derived table schemas

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::Result;
use crate::reflect::TypeDescriptor;

/// Column storage type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    Bool,
    Integer,
    BigInt,
    Real,
    Text,
    Blob,
    DateTime,
}

impl StorageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Bool => "bool",
            StorageType::Integer => "integer",
            StorageType::BigInt => "bigint",
            StorageType::Real => "real",
            StorageType::Text => "text",
            StorageType::Blob => "blob",
            StorageType::DateTime => "datetime",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a column of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    #[serde(rename = "type")]
    storage_type: StorageType,
    tag: String,
}

impl Field {
    pub fn new(name: impl Into<String>, storage_type: StorageType, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            storage_type,
            tag: tag.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn storage_type(&self) -> StorageType {
        self.storage_type
    }

    /// The annotation value, empty when the member carried none
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Represents a table derived from a model
///
/// Built once by [`SchemaParser::parse`](crate::schema::SchemaParser::parse)
/// and read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    #[serde(skip)]
    model: TypeDescriptor,
    name: String,
    fields: Vec<Field>,
    #[serde(skip)]
    field_names: Vec<String>,
    #[serde(skip)]
    field_map: HashMap<String, usize>,
}

impl Schema {
    /// Assemble a schema; `fields` must have unique names
    pub(crate) fn new(model: TypeDescriptor, name: String, fields: Vec<Field>) -> Self {
        let field_names: Vec<String> = fields.iter().map(|f| f.name.clone()).collect();
        let field_map = field_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Self {
            model,
            name,
            fields,
            field_names,
            field_map,
        }
    }

    /// Descriptor of the type this schema was derived from
    pub fn model(&self) -> &TypeDescriptor {
        &self.model
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in declaration order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Column names, parallel to [`fields`](Self::fields)
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// Look up a column by name
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.field_map.get(name).map(|&i| &self.fields[i])
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize the table name and its columns as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
