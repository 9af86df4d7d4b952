use crate::{node::ObjectInput, prelude::*};

/// Body of `new_instance`: the named constructor, else the class's
/// zero-argument default. A missing constructor is reported at the class.
pub fn factory(object: &ObjectInput) -> TokenStream {
    match &object.constructor {
        Some(path) => quote_spanned!(path.span()=> #path()),
        None => quote_spanned! {object.ident.span()=>
            <Self as ::stowage::schema::object::DefaultConstructor>::construct()
        },
    }
}
