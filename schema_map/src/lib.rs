//! schema_map: the metadata-mapping layer of an object-relational mapper
//!
//! schema_map derives a table schema from a Rust struct: a table name, the
//! ordered columns with their storage types, and the per-column annotations.
//! SQL generation and persistence build on the [`Schema`] it returns.
//!
//! ```ignore
//! use schema_map::{Model, TableName};
//!
//! #[derive(Model)]
//! #[schema_map(custom_table_name)]
//! pub struct User {
//!     #[tag(orm = "PRIMARY KEY")]
//!     pub name: String,
//!     pub age: i32,
//! }
//!
//! impl TableName for User {
//!     fn table_name(&self) -> String {
//!         "Users".to_string()
//!     }
//! }
//!
//! let schema = schema_map::parse(&user)?;
//! assert_eq!(schema.name(), "Users");
//! assert_eq!(schema.field_names(), ["name", "age"]);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod reflect;
pub mod schema;
pub mod utils;

// Re-export main types for easier access
pub use config::Config;
pub use error::{Error, Result};
pub use models::{Model, TableName};
pub use reflect::{Kind, Member, Reflect, Tags, TypeDescriptor, TypeInfo};
pub use schema::{parse, Field, Schema, SchemaParser, StorageType};
pub use schema_map_macros::Model;

/// Load a configuration file, initialize logging from it, and build a parser
pub fn init(config_path: &str) -> Result<SchemaParser> {
    let config = config::load_from_file(config_path)?;
    utils::logging::init_logging(&config.logging)?;
    Ok(SchemaParser::new(&config))
}
