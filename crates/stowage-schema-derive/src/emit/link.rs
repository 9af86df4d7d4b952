use crate::{
    collect::{Property, PropertyTable},
    prelude::*,
};

/// Cross-class rules, checked when the constants are evaluated against the
/// target's generated companion. Each failure is a compile error at the
/// offending field's type.
pub fn link_checks(table: &PropertyTable) -> TokenStream {
    let checks = table
        .properties
        .iter()
        .filter_map(|property| link_check(table, property));

    quote!(#(#checks)*)
}

fn link_check(table: &PropertyTable, property: &Property) -> Option<TokenStream> {
    let target = property.shape.target.as_ref()?;
    let span = target.span();
    let object = to_object(&resolve_self(target, &table.ident));
    let kind = table.kind;

    let containment = format!(
        "{}: '{}.{}'",
        if kind.is_asymmetric() {
            rules::ASYMMETRIC_LINK
        } else {
            rules::ASYMMETRIC_TARGET
        },
        table.class,
        property.name
    );

    let backlink = property.origin.as_ref().map(|origin| {
        let class = to_str_lit(&table.class);
        let message = format!(
            "{}: '{}.{}' expects origin '{}'",
            rules::BACKLINK_ORIGIN,
            table.class,
            property.name,
            origin.value()
        );

        quote_spanned! {origin.span()=>
            ::core::assert!(#object::SCHEMA.links_back(#origin, #class), "{}", #message);
        }
    });

    Some(quote_spanned! {span=>
        const _: () = {
            ::core::assert!(#kind.may_link_to(#object::CLASS_KIND), "{}", #containment);
            #backlink
        };
    })
}

// Checks live outside the impl, where `Self` is not in scope.
fn resolve_self(target: &Type, ident: &Ident) -> Type {
    match target {
        Type::Path(path) if path.qself.is_none() && path.path.is_ident("Self") => {
            syn::parse_quote!(#ident)
        }
        _ => target.clone(),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collect::collect, node::ObjectInput};
    use syn::{DeriveInput, parse_quote};

    fn checks(input: DeriveInput) -> String {
        let object = ObjectInput::from_derive_input(&input).expect("parses");
        let mut acc = DarlingError::accumulator();
        let table = collect(&object, &mut acc);
        acc.finish().expect("collects");

        link_checks(&table).to_string()
    }

    #[test]
    fn asymmetric_links_must_reach_embedded_classes() {
        let tokens = checks(parse_quote! {
            #[object(kind = "asymmetric")]
            struct Event {
                location: Option<Location>,
            }
        });

        assert!(tokens.contains("ClassKind :: Asymmetric . may_link_to"));
        assert!(tokens.contains(rules::ASYMMETRIC_LINK));
    }

    #[test]
    fn backlinks_check_their_origin_and_self_is_named() {
        let tokens = checks(parse_quote! {
            struct Node {
                parent: Option<Box<Self>>,
                #[persisted(backlink = "parent")]
                children: Backlinks<Self>,
            }
        });

        assert!(!tokens.contains("Self"));
        assert!(tokens.contains("links_back (\"parent\" , \"Node\")"));
        assert!(tokens.contains(rules::ASYMMETRIC_TARGET));
    }

    #[test]
    fn scalar_classes_need_no_checks() {
        let tokens = checks(parse_quote! {
            struct Plain {
                id: i64,
                tags: Vec<String>,
            }
        });

        assert!(tokens.is_empty());
    }
}
