//! Field extraction from struct descriptors

use std::collections::HashSet;
use tracing::trace;

use crate::error::{Error, Result};
use crate::reflect::TypeDescriptor;
use crate::schema::classify::classify;
use crate::schema::types::Field;

/// Extract the columns of a struct descriptor in declaration order
///
/// Embedded and non-exported members are skipped. The tag of each field is
/// the value stored under `tag_key`, or empty.
pub fn extract_fields(descriptor: &TypeDescriptor, tag_key: &str) -> Result<Vec<Field>> {
    let mut fields = Vec::with_capacity(descriptor.members().len());
    let mut seen = HashSet::new();

    for (index, member) in descriptor.members().iter().enumerate() {
        if member.is_embedded() || !member.is_exported() {
            trace!(
                index,
                member = member.name(),
                embedded = member.is_embedded(),
                exported = member.is_exported(),
                "Skipping member"
            );
            continue;
        }

        if !seen.insert(member.name()) {
            return Err(Error::InvalidModel(format!(
                "{} declares member {} more than once",
                descriptor.name(),
                member.name()
            )));
        }

        let storage_type = classify(&member.type_info())?;
        let tag = member.tags().lookup(tag_key).unwrap_or_default();
        let field = Field::new(member.name(), storage_type, tag);

        trace!(index, field = ?field, "Extracted field");
        fields.push(field);
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{Kind, Member, Reflect, TypeInfo};
    use crate::schema::types::StorageType;
    use pretty_assertions::assert_eq;

    #[test]
    fn skips_embedded_and_private_members() {
        let descriptor = TypeDescriptor::new("Account", Kind::Struct)
            .member(Member::new("Base", || TypeInfo::new("Base", Kind::Struct)).embedded())
            .member(Member::new("Id", i64::type_info).tag("orm", "PRIMARY KEY"))
            .member(Member::new("secret", String::type_info).private())
            .member(Member::new("Email", String::type_info));

        let fields = extract_fields(&descriptor, "orm").unwrap();

        assert_eq!(
            fields,
            vec![
                Field::new("Id", StorageType::BigInt, "PRIMARY KEY"),
                Field::new("Email", StorageType::Text, ""),
            ]
        );
    }

    #[test]
    fn reads_only_the_requested_tag_key() {
        let descriptor = TypeDescriptor::new("User", Kind::Struct)
            .member(Member::new("Name", String::type_info).tag("json", "name"));

        let fields = extract_fields(&descriptor, "orm").unwrap();
        assert_eq!(fields[0].tag(), "");

        let fields = extract_fields(&descriptor, "json").unwrap();
        assert_eq!(fields[0].tag(), "name");
    }

    #[test]
    fn unsupported_member_aborts_extraction() {
        let descriptor = TypeDescriptor::new("User", Kind::Struct)
            .member(Member::new("Name", String::type_info))
            .member(Member::new("Nickname", Option::<String>::type_info));

        let err = extract_fields(&descriptor, "orm").unwrap_err();
        assert!(matches!(err, Error::UnsupportedType { kind: Kind::Option, .. }));
    }

    #[test]
    fn excluded_members_are_never_classified() {
        let descriptor = TypeDescriptor::new("User", Kind::Struct)
            .member(Member::new("cache", || TypeInfo::opaque("RefCell<u8>")).private())
            .member(Member::new("Name", String::type_info));

        let fields = extract_fields(&descriptor, "orm").unwrap();
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn duplicate_member_names_are_invalid() {
        let descriptor = TypeDescriptor::new("User", Kind::Struct)
            .member(Member::new("Name", String::type_info))
            .member(Member::new("Name", String::type_info));

        let err = extract_fields(&descriptor, "orm").unwrap_err();
        assert!(matches!(err, Error::InvalidModel(_)));
    }
}
