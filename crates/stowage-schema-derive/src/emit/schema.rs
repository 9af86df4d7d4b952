use crate::{
    collect::{Property, PropertyTable},
    prelude::*,
};

/// The `ClassSchema` literal, with rows in declaration order.
pub fn class_schema(table: &PropertyTable) -> TokenStream {
    let name = to_str_lit(&table.class);
    let kind = table.kind;
    let primary_key = quote_option(
        table
            .primary_key_index()
            .map(|index| &table.properties[index].name),
        |name| to_str_lit(name),
    );
    let properties = quote_slice(&table.properties, property_row);

    quote! {
        ::stowage::schema::node::ClassSchema {
            name: #name,
            kind: #kind,
            primary_key: #primary_key,
            properties: #properties,
        }
    }
}

fn property_row(property: &Property) -> TokenStream {
    let shape = &property.shape;
    let name = to_str_lit(&property.name);
    let public_name = to_str_lit(property.public_name());
    let ty = shape.ty;
    let collection = shape.collection;
    let nullable = shape.nullable();
    let primary_key = property.markers.is_primary_key();
    let indexed = property.markers.is_indexed();
    let full_text_indexed = property.markers.is_full_text();

    // resolving the target's class name also proves the target is an object
    let link_target = quote_option(shape.target.as_ref(), |target| {
        let object = to_object(target);
        quote_spanned!(target.span()=> #object::CLASS_NAME)
    });
    let link_origin_property = quote_option(property.origin.as_ref(), |origin| quote!(#origin));

    quote! {
        ::stowage::schema::node::SchemaProperty {
            name: #name,
            public_name: #public_name,
            ty: #ty,
            collection: #collection,
            link_target: #link_target,
            link_origin_property: #link_origin_property,
            nullable: #nullable,
            primary_key: #primary_key,
            indexed: #indexed,
            full_text_indexed: #full_text_indexed,
        }
    }
}

/// Persisted names of properties stored through a wider representation.
pub fn adapted_properties(table: &PropertyTable) -> TokenStream {
    let adapted = table.adapted().map(|property| &property.name).collect::<Vec<_>>();

    quote_slice(&adapted, |name| to_str_lit(name))
}
