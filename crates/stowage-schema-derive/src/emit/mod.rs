mod accessor;
mod factory;
mod link;
mod registration;
mod schema;

use crate::{
    collect::{PropertyTable, collect},
    node::ObjectInput,
    prelude::*,
    validate::validate,
};
use syn::DeriveInput;

// derive_object
pub fn derive_object(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    expand(&input).unwrap_or_else(DarlingError::write_errors)
}

/// Collect, validate, then synthesize. Any diagnostic stops synthesis for the
/// class; all diagnostics from collection and validation are reported.
pub fn expand(input: &DeriveInput) -> Result<TokenStream, DarlingError> {
    let object = ObjectInput::from_derive_input(input)?;

    let mut acc = DarlingError::accumulator();
    object.validate_shape(&mut acc);
    let table = collect(&object, &mut acc);
    validate(&table, &mut acc);
    acc.finish()?;

    Ok(ObjectGen::new(&object, &table).to_token_stream())
}

///
/// ObjectGen
///
/// Emits the companion of one validated class.
///

pub struct ObjectGen<'a> {
    object: &'a ObjectInput,
    table: &'a PropertyTable,
}

impl<'a> ObjectGen<'a> {
    pub const fn new(object: &'a ObjectInput, table: &'a PropertyTable) -> Self {
        Self { object, table }
    }
}

impl ToTokens for ObjectGen<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let table = self.table;
        let ident = &table.ident;
        let class = to_str_lit(&table.class);
        let kind = table.kind;

        let accessor_fns = accessor::accessor_fns(table);
        let accessors = accessor::accessors(table);
        let primary_key = accessor::primary_key(table);
        let schema = schema::class_schema(table);
        let adapted = schema::adapted_properties(table);
        let factory = factory::factory(self.object);
        let link_checks = link::link_checks(table);
        let registration = registration::registration(ident);

        tokens.extend(quote! {
            #[doc(hidden)]
            #[allow(clippy::ptr_arg, clippy::trivially_copy_pass_by_ref)]
            impl #ident {
                #accessor_fns
            }

            impl ::stowage::schema::object::Object for #ident {
                const CLASS_NAME: &'static str = #class;
                const CLASS_KIND: ::stowage::schema::types::ClassKind = #kind;
                const SCHEMA: &'static ::stowage::schema::node::ClassSchema = &#schema;
                const ACCESSORS: &'static [::stowage::schema::access::Accessor<Self>] = #accessors;
                const PRIMARY_KEY: ::core::option::Option<&'static ::stowage::schema::access::Accessor<Self>> = #primary_key;
                const ADAPTED_PROPERTIES: &'static [&'static str] = #adapted;

                fn new_instance() -> Self {
                    #factory
                }
            }

            #link_checks

            #registration
        });
    }
}

///
/// TESTS
///
