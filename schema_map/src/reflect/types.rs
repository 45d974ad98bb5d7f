//! Type descriptors used in place of runtime reflection

use indexmap::IndexMap;
use std::any::type_name;
use std::fmt;

use crate::utils::naming::bare_type_name;

/// The shape of a Rust type, as far as column mapping is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    Str,
    /// Fixed-length sequence
    Array,
    /// Variable-length sequence
    Slice,
    Tuple,
    Unit,
    Option,
    Map,
    /// Raw pointer
    Pointer,
    /// Struct with named fields
    Struct,
    Enum,
    /// Anything the reflection layer knows only by name
    Opaque,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::I128 => "i128",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::U128 => "u128",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Char => "char",
            Kind::Str => "str",
            Kind::Array => "array",
            Kind::Slice => "slice",
            Kind::Tuple => "tuple",
            Kind::Unit => "unit",
            Kind::Option => "option",
            Kind::Map => "map",
            Kind::Pointer => "pointer",
            Kind::Struct => "struct",
            Kind::Enum => "enum",
            Kind::Opaque => "opaque",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name and kind of a single type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    name: String,
    kind: Kind,
    timestamp: bool,
}

impl TypeInfo {
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            timestamp: false,
        }
    }

    /// Type info for `T`, named by its path-less type name
    pub fn of<T: ?Sized>(kind: Kind) -> Self {
        Self::new(bare_type_name(type_name::<T>()), kind)
    }

    /// Type info for a struct that represents a calendar timestamp
    pub fn timestamp_of<T: ?Sized>() -> Self {
        Self {
            timestamp: true,
            ..Self::of::<T>(Kind::Struct)
        }
    }

    /// Type info for a type known only by its name
    pub fn opaque(name: impl Into<String>) -> Self {
        Self::new(name, Kind::Opaque)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_timestamp(&self) -> bool {
        self.timestamp
    }
}

/// Types that can describe their own shape
pub trait Reflect {
    fn type_info() -> TypeInfo;
}

/// Annotations attached to a member, in declaration order
///
/// Mirrors a struct tag: each key maps to a literal string value. A key that
/// is present with an empty value is distinct from an absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(IndexMap<String, String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an annotation; a repeated key is ignored, so the first value wins
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_insert_with(|| value.into());
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One member of a struct descriptor
#[derive(Debug, Clone)]
pub struct Member {
    name: String,
    type_info: fn() -> TypeInfo,
    exported: bool,
    embedded: bool,
    tags: Tags,
}

impl Member {
    /// Create an exported, non-embedded member with no annotations
    pub fn new(name: impl Into<String>, type_info: fn() -> TypeInfo) -> Self {
        Self {
            name: name.into(),
            type_info,
            exported: true,
            embedded: false,
            tags: Tags::new(),
        }
    }

    /// Mark the member as not publicly visible
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Mark the member as composed into the struct without its own column
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Attach an annotation
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Describe the member's type
    pub fn type_info(&self) -> TypeInfo {
        (self.type_info)()
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }
}

/// Describes a type together with its members
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: String,
    kind: Kind,
    members: Vec<Member>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            members: Vec::new(),
        }
    }

    /// Append a member; declaration order is preserved
    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Whether the descriptor is a record-like struct
    pub fn is_struct(&self) -> bool {
        self.kind == Kind::Struct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_distinguish_empty_from_absent() {
        let member = Member::new("id", i64::type_info)
            .tag("orm", "")
            .tag("json", "id");

        assert_eq!(member.tags().lookup("orm"), Some(""));
        assert_eq!(member.tags().lookup("json"), Some("id"));
        assert_eq!(member.tags().lookup("db"), None);
    }

    #[test]
    fn repeated_tag_key_keeps_first_value() {
        let mut tags = Tags::new();
        tags.insert("a", "1");
        tags.insert("b", "2");
        tags.insert("a", "3");

        let pairs: Vec<_> = tags.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
        assert_eq!(tags.lookup("a"), Some("1"));
    }

    #[test]
    fn member_builder_flags() {
        let member = Member::new("inner", || TypeInfo::opaque("Inner")).private().embedded();

        assert!(!member.is_exported());
        assert!(member.is_embedded());
        assert_eq!(member.type_info().kind(), Kind::Opaque);
    }

    #[test]
    fn descriptor_keeps_member_order() {
        let descriptor = TypeDescriptor::new("User", Kind::Struct)
            .member(Member::new("b", bool::type_info))
            .member(Member::new("a", String::type_info));

        let names: Vec<_> = descriptor.members().iter().map(Member::name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(descriptor.is_struct());
    }

    #[test]
    fn timestamp_info_is_a_struct() {
        let info = TypeInfo::timestamp_of::<std::time::SystemTime>();

        assert_eq!(info.name(), "SystemTime");
        assert_eq!(info.kind(), Kind::Struct);
        assert!(info.is_timestamp());
    }
}
