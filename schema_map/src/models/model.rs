//! Model traits for schema_map
//!
//! Implemented by `#[derive(Model)]`, or by hand for types whose descriptor
//! is assembled at runtime.

use std::rc::Rc;
use std::sync::Arc;

use crate::reflect::TypeDescriptor;

/// A type that can be mapped to a table
pub trait Model {
    /// Describe the type and its members
    fn descriptor() -> TypeDescriptor;

    /// The custom table naming capability, if this model has one
    fn as_table_name(&self) -> Option<&dyn TableName> {
        None
    }
}

/// A model that provides its own table name
///
/// ```ignore
/// #[derive(Model)]
/// #[schema_map(custom_table_name)]
/// pub struct User {
///     #[tag(orm = "PRIMARY KEY")]
///     pub name: String,
/// }
///
/// impl TableName for User {
///     fn table_name(&self) -> String {
///         "Users".to_string()
///     }
/// }
/// ```
pub trait TableName {
    fn table_name(&self) -> String;
}

macro_rules! model_through {
    ($($ptr:ty),+ $(,)?) => {
        $(
            impl<M: Model + ?Sized> Model for $ptr {
                fn descriptor() -> TypeDescriptor {
                    M::descriptor()
                }

                fn as_table_name(&self) -> Option<&dyn TableName> {
                    (**self).as_table_name()
                }
            }
        )+
    };
}

model_through!(&M, &mut M, Box<M>, Rc<M>, Arc<M>);
