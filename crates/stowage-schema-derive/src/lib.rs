//! ## Crate layout
//! - `classify`: maps declared field types to persisted property shapes.
//! - `collect`: walks a struct's fields into an ordered property table.
//! - `emit`: emits the schema descriptor, accessors, factory, link checks and
//!   registration for a validated table.
//! - `node`: darling-parsed `#[object]` and `#[persisted]` attributes.
//! - `validate`: per-property and whole-table rules.

mod classify;
mod collect;
mod emit;
mod helper;
mod node;
mod validate;

use proc_macro::TokenStream;

///
/// Prelude
///

mod prelude {
    pub use crate::helper::*;
    pub use darling::{Error as DarlingError, FromDeriveInput, FromField, util::Flag};
    pub use proc_macro2::{Span, TokenStream};
    pub use quote::{ToTokens, format_ident, quote, quote_spanned};
    pub use stowage_schema::{
        types::{ClassKind, CollectionType, PropertyType},
        validate::{naming, rules},
    };
    pub use syn::{Ident, LitStr, Path, Type, spanned::Spanned};
}

/// Derive the persisted-object companion for a struct.
///
/// ```ignore
/// #[derive(Object, Default)]
/// #[object(name = "Person")]
/// pub struct Person {
///     #[persisted(primary_key)]
///     id: i64,
///     #[persisted(full_text)]
///     name: String,
///     tags: Vec<String>,
/// }
/// ```
#[proc_macro_derive(Object, attributes(object, persisted))]
pub fn derive_object(input: TokenStream) -> TokenStream {
    emit::derive_object(input.into()).into()
}
