//! Table name resolution

use crate::models::Model;
use crate::utils::naming::bare_type_name;

/// Resolve the table name of a model
///
/// A model with the [`TableName`](crate::models::TableName) capability names
/// its own table; any other model uses its bare type name.
pub fn resolve_table_name<M: Model + ?Sized>(model: &M) -> String {
    match model.as_table_name() {
        Some(named) => named.table_name(),
        None => bare_type_name(M::descriptor().name()),
    }
}
