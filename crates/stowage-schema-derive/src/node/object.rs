use crate::{node::PersistedField, prelude::*};
use darling::{ast::Data, error::Accumulator};
use syn::{Generics, ext::IdentExt};

///
/// ObjectInput
///
/// A struct deriving `Object`, with its `#[object(...)]` options.
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(object), supports(struct_named))]
pub struct ObjectInput {
    pub ident: Ident,
    pub generics: Generics,
    pub data: Data<(), PersistedField>,

    #[darling(default)]
    pub name: Option<LitStr>,

    #[darling(default)]
    pub kind: ClassKind,

    #[darling(default)]
    pub constructor: Option<Path>,
}

impl ObjectInput {
    /// Schema-level class name: the `name` option, else the struct ident.
    pub fn class_name(&self) -> String {
        self.name
            .as_ref()
            .map_or_else(|| self.ident.unraw().to_string(), LitStr::value)
    }

    /// Span diagnostics about the class name point at.
    pub fn class_name_span(&self) -> Span {
        self.name
            .as_ref()
            .map_or_else(|| self.ident.span(), LitStr::span)
    }

    /// Declared fields in source order.
    pub fn fields(&self) -> Vec<&PersistedField> {
        match &self.data {
            Data::Struct(fields) => fields.iter().collect(),
            Data::Enum(_) => Vec::new(),
        }
    }

    /// Shape rules darling cannot express: persisted classes are concrete.
    pub fn validate_shape(&self, acc: &mut Accumulator) {
        if !self.generics.params.is_empty() {
            acc.push(error_at(
                self.generics.span(),
                format!(
                    "object class '{}' cannot be generic; the schema is fixed at compile time",
                    self.ident
                ),
            ));
        }
    }
}
