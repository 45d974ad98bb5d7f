//! Detects the `TableName` capability on concrete model types
//!
//! `#[derive(Model)]` calls `(&&Capability(self)).table_name_capability()`.
//! Method resolution tries the `&Capability<T>` impl first, which only
//! applies when `T: TableName`; otherwise it falls through to the impl on
//! `Capability<T>`, which reports no capability.

use super::TableName;

/// Borrowed model wrapper used for capability dispatch
pub struct Capability<'a, T: ?Sized>(pub &'a T);

/// Selected when the model implements `TableName`
pub trait ViaTableName<'a> {
    fn table_name_capability(&self) -> Option<&'a dyn TableName>;
}

impl<'a, T: TableName> ViaTableName<'a> for &Capability<'a, T> {
    fn table_name_capability(&self) -> Option<&'a dyn TableName> {
        Some(self.0)
    }
}

/// Fallback for models without a custom table name
pub trait WithoutTableName<'a> {
    fn table_name_capability(&self) -> Option<&'a dyn TableName>;
}

impl<'a, T: ?Sized> WithoutTableName<'a> for Capability<'a, T> {
    fn table_name_capability(&self) -> Option<&'a dyn TableName> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named;

    impl TableName for Named {
        fn table_name(&self) -> String {
            "named".to_string()
        }
    }

    struct Unnamed;

    #[test]
    fn implementing_type_is_detected() {
        let found = (&&Capability(&Named)).table_name_capability();
        assert_eq!(found.map(|n| n.table_name()), Some("named".to_string()));
    }

    #[test]
    fn other_types_fall_back() {
        let found = (&&Capability(&Unnamed)).table_name_capability();
        assert!(found.is_none());
    }
}
