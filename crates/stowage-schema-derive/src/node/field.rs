use crate::prelude::*;
use syn::ext::IdentExt;

///
/// PersistedField
///
/// One named field and its `#[persisted(...)]` options. Parsing only records
/// which markers are present; combination rules are applied by validation.
///

#[derive(Debug, FromField)]
#[darling(attributes(persisted))]
pub struct PersistedField {
    pub ident: Option<Ident>,
    pub ty: Type,

    #[darling(default)]
    pub primary_key: Flag,

    #[darling(default)]
    pub index: Flag,

    #[darling(default)]
    pub full_text: Flag,

    #[darling(default)]
    pub ignore: Flag,

    /// Persisted-name override; the field name then becomes the public name.
    #[darling(default)]
    pub name: Option<LitStr>,

    #[darling(default)]
    pub alias: Option<LitStr>,

    /// Origin property on the target class of a `Backlinks<T>` field.
    #[darling(default)]
    pub backlink: Option<LitStr>,
}

impl PersistedField {
    pub fn markers(&self) -> Markers {
        Markers {
            primary_key: flag_span(&self.primary_key),
            indexed: flag_span(&self.index),
            full_text: flag_span(&self.full_text),
        }
    }

    pub fn is_ignored(&self) -> bool {
        self.ignore.is_present()
    }

    /// Spans of every option other than `ignore`.
    pub fn option_spans(&self) -> Vec<Span> {
        let markers = self.markers();
        let literals = [&self.name, &self.alias, &self.backlink]
            .into_iter()
            .flatten()
            .map(LitStr::span);

        [markers.primary_key, markers.indexed, markers.full_text]
            .into_iter()
            .flatten()
            .chain(literals)
            .collect()
    }

    /// Resolve the persisted and public names for the field named `ident`.
    pub fn names(&self, ident: &Ident) -> Names {
        let field = ident.unraw().to_string();
        let (persisted, persisted_span) = match &self.name {
            Some(lit) => (lit.value(), lit.span()),
            None => (field.clone(), ident.span()),
        };
        let public = match (&self.alias, &self.name) {
            (Some(alias), _) => Some((alias.value(), alias.span())),
            (None, Some(_)) => Some((field, ident.span())),
            (None, None) => None,
        }
        .filter(|(public, _)| *public != persisted);

        Names {
            persisted,
            persisted_span,
            public,
        }
    }
}

fn flag_span(flag: &Flag) -> Option<Span> {
    flag.is_present().then(|| flag.span())
}

///
/// Markers
/// schema markers present on a field, with the span of each
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Markers {
    pub primary_key: Option<Span>,
    pub indexed: Option<Span>,
    pub full_text: Option<Span>,
}

impl Markers {
    pub const fn is_primary_key(&self) -> bool {
        self.primary_key.is_some()
    }

    pub const fn is_indexed(&self) -> bool {
        self.indexed.is_some()
    }

    pub const fn is_full_text(&self) -> bool {
        self.full_text.is_some()
    }

    /// Present markers with their attribute spelling.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, Span)> {
        [
            ("primary key", self.primary_key),
            ("index", self.indexed),
            ("full-text", self.full_text),
        ]
        .into_iter()
        .filter_map(|(marker, span)| span.map(|span| (marker, span)))
    }
}

///
/// Names
///

#[derive(Clone, Debug)]
pub struct Names {
    pub persisted: String,
    pub persisted_span: Span,
    pub public: Option<(String, Span)>,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{Field, parse_quote};

    fn field(field: Field) -> PersistedField {
        PersistedField::from_field(&field).expect("field options parse")
    }

    #[test]
    fn records_markers_without_judging_them() {
        let parsed = field(parse_quote! {
            #[persisted(primary_key, full_text, index)]
            pub title: f64
        });
        let markers = parsed.markers();

        assert!(markers.is_primary_key());
        assert!(markers.is_indexed());
        assert!(markers.is_full_text());
        assert_eq!(markers.present().count(), 3);
    }

    #[test]
    fn unrelated_attributes_are_inert() {
        let parsed = field(parse_quote! {
            #[doc = "shown in docs"]
            #[allow(dead_code)]
            count: i64
        });

        assert_eq!(parsed.markers().present().count(), 0);
        assert!(parsed.option_spans().is_empty());
        assert!(!parsed.is_ignored());
    }

    #[test]
    fn name_override_makes_field_name_public() {
        let parsed = field(parse_quote! {
            #[persisted(name = "mail")]
            email: String
        });
        let names = parsed.names(&format_ident!("email"));

        assert_eq!(names.persisted, "mail");
        assert_eq!(names.public.map(|(name, _)| name).as_deref(), Some("email"));
    }

    #[test]
    fn alias_wins_and_raw_idents_are_unraw() {
        let parsed = field(parse_quote! {
            #[persisted(alias = "kind")]
            r#type: String
        });
        let names = parsed.names(parsed.ident.as_ref().expect("named"));

        assert_eq!(names.persisted, "type");
        assert_eq!(names.public.map(|(name, _)| name).as_deref(), Some("kind"));
    }

    #[test]
    fn alias_equal_to_persisted_name_is_dropped() {
        let parsed = field(parse_quote! {
            #[persisted(alias = "age")]
            age: i32
        });

        assert!(parsed.names(&format_ident!("age")).public.is_none());
    }
}
