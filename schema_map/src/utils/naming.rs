//! Naming utilities for schema_map

use once_cell::sync::Lazy;
use regex::Regex;

/// Module path prefixes such as `alloc::vec::`
static PATH_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:[A-Za-z_][A-Za-z0-9_]*::)+").expect("path prefix pattern is valid")
});

/// Strip module paths from a type name, including inside generic arguments
///
/// `alloc::vec::Vec<chrono::offset::utc::Utc>` becomes `Vec<Utc>`.
pub fn bare_type_name(name: &str) -> String {
    PATH_PREFIX.replace_all(name, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_module_paths() {
        assert_eq!(bare_type_name("User"), "User");
        assert_eq!(bare_type_name("app::models::User"), "User");
        assert_eq!(bare_type_name("alloc::vec::Vec<u8>"), "Vec<u8>");
        assert_eq!(
            bare_type_name("std::collections::hash::map::HashMap<alloc::string::String, i32>"),
            "HashMap<String, i32>"
        );
        assert_eq!(bare_type_name("&[u8]"), "&[u8]");
        assert_eq!(bare_type_name("*const core::ffi::c_void"), "*const c_void");
    }
}
