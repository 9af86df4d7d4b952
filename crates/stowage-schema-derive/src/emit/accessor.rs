use crate::{
    collect::{Property, PropertyTable},
    prelude::*,
};
use syn::ext::IdentExt;

fn getter_ident(property: &Property) -> Ident {
    format_ident!("__stowage_get_{}", property.ident.unraw())
}

fn setter_ident(property: &Property) -> Ident {
    format_ident!("__stowage_set_{}", property.ident.unraw())
}

/// Get/set functions for every property, emitted into a hidden inherent impl
/// so they can read private fields.
pub fn accessor_fns(table: &PropertyTable) -> TokenStream {
    let class = to_str_lit(&table.class);
    let fns = table.properties.iter().map(|property| {
        let field = &property.ident;
        let field_ty = &property.field_ty;
        let name = to_str_lit(&property.name);
        let getter = getter_ident(property);
        let setter = setter_ident(property);

        let get = quote! {
            fn #getter(obj: &Self) -> &(dyn ::core::any::Any + 'static) {
                &obj.#field
            }
        };

        // computed backlinks have no setter
        if property.is_computed() {
            return get;
        }

        quote! {
            #get

            fn #setter(
                obj: &mut Self,
                value: ::std::boxed::Box<dyn ::core::any::Any>,
            ) -> ::core::result::Result<(), ::stowage::schema::access::AccessError> {
                obj.#field = ::stowage::schema::access::downcast_value::<#field_ty>(#class, #name, value)?;

                ::core::result::Result::Ok(())
            }
        }
    });

    quote!(#(#fns)*)
}

/// The `ACCESSORS` table, in schema order.
pub fn accessors(table: &PropertyTable) -> TokenStream {
    let class = to_str_lit(&table.class);

    quote_slice(&table.properties, |property| {
        let name = to_str_lit(&property.name);
        let public_name = to_str_lit(property.public_name());
        let getter = getter_ident(property);
        let setter = if property.is_computed() {
            quote!(None)
        } else {
            let setter = setter_ident(property);
            quote!(Some(Self::#setter))
        };

        quote! {
            ::stowage::schema::access::Accessor::new(#class, #name, #public_name, Self::#getter, #setter)
        }
    })
}

/// `PRIMARY_KEY` points into `ACCESSORS` at the key's slot.
pub fn primary_key(table: &PropertyTable) -> TokenStream {
    match table.primary_key_index() {
        Some(index) => quote!(Some(&Self::ACCESSORS[#index])),
        None => quote!(None),
    }
}
