//! Casing transforms for entity, module and identifier names.

use heck::{ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

/// Naming convention applied to a raw entity or module name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    /// `comment_list`
    Snake,
    /// `CommentList`, used for exported identifiers
    UpperCamel,
    /// `commentList`
    Camel,
}

impl Casing {
    /// Transform `name` into this casing.
    pub fn apply(self, name: &str) -> String {
        match self {
            Casing::Snake => name.to_snake_case(),
            Casing::UpperCamel => name.to_upper_camel_case(),
            Casing::Camel => name.to_lower_camel_case(),
        }
    }
}

/// Convert `name` to the given casing (e.g., `cased("commentList", Casing::Snake)` -> `"comment_list"`)
pub fn cased(name: &str, casing: Casing) -> String {
    casing.apply(name)
}
