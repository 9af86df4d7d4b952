//! Diagnostic wording shared by the derive pass and runtime validation, so a
//! rule reads the same wherever it fires.

use std::fmt::Display;

pub const ASYMMETRIC_LINK: &str = "asymmetric objects can only reference embedded object classes";

pub const ASYMMETRIC_TARGET: &str =
    "standard and embedded objects cannot reference asymmetric objects";

pub const BACKLINK_ORIGIN: &str = "backlink origin property must exist on the target class and \
     be an object link, or collection of object links, back to the declaring class";

pub const EMBEDDED_PRIMARY_KEY: &str = "embedded object is not allowed to have a primary key";

#[must_use]
pub fn multiple_primary_keys(class: &str, count: usize) -> String {
    format!("only one primary key is allowed per object class; '{class}' declares {count}")
}

#[must_use]
pub fn embedded_primary_key(class: &str) -> String {
    format!("{EMBEDDED_PRIMARY_KEY} ('{class}')")
}

#[must_use]
pub fn primary_key_type(property: &str, found: impl Display, allowed: impl Display) -> String {
    format!("primary key '{property}' is of type {found} but must be one of {allowed}")
}

#[must_use]
pub fn index_type(property: &str, found: impl Display, allowed: impl Display) -> String {
    format!("indexed property '{property}' is of type {found} but must be one of {allowed}")
}

#[must_use]
pub fn full_text_type(property: &str, found: impl Display, allowed: impl Display) -> String {
    format!("full-text property '{property}' is of type {found} but must be one of {allowed}")
}

#[must_use]
pub fn index_and_full_text(property: &str) -> String {
    format!("full-text and index markers cannot be combined on property '{property}'")
}

#[must_use]
pub fn primary_key_and_full_text(property: &str) -> String {
    format!("primary key and full-text markers cannot be combined on property '{property}'")
}

#[must_use]
pub fn marker_on_collection(marker: &str, property: &str) -> String {
    format!("{marker} marker is not allowed on collection property '{property}'")
}

#[must_use]
pub fn duplicate_name(name: &str, previous: &str) -> String {
    format!(
        "persisted and public names must be unique; '{name}' is already used by property '{previous}'"
    )
}

/// Render a type list as `[a, b, c]`.
pub fn type_list<T: Display>(types: impl IntoIterator<Item = T>) -> String {
    let items = types
        .into_iter()
        .map(|ty| ty.to_string())
        .collect::<Vec<_>>();

    format!("[{}]", items.join(", "))
}
