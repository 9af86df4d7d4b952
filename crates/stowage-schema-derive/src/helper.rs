use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

// Quoting helpers

/// Quote an `Option`, applying the transform to the inner value when present.
pub fn quote_option<T, F>(opt: Option<&T>, transform: F) -> TokenStream
where
    F: FnOnce(&T) -> TokenStream,
{
    if let Some(v) = opt {
        let transformed = transform(v);
        quote!(Some(#transformed))
    } else {
        quote!(None)
    }
}

/// Quote a slice by transforming each element and returning a token array.
pub fn quote_slice<T, F>(vec: &[T], transform: F) -> TokenStream
where
    F: Fn(&T) -> TokenStream,
{
    let items: Vec<TokenStream> = vec
        .iter()
        .map(transform)
        .filter(|ts| !ts.is_empty())
        .collect();

    quote! {
        &[#(#items),*]
    }
}

// Transform helpers

/// Quote a string as a string literal token.
pub fn to_str_lit(s: &str) -> TokenStream {
    quote!(#s)
}

/// Resolve an object type to its associated `Object` impl.
pub fn to_object<T: ToTokens>(t: &T) -> TokenStream {
    quote! { <#t as ::stowage::schema::object::Object> }
}

// Diagnostic helpers

/// A diagnostic anchored at `span`.
pub fn error_at(span: proc_macro2::Span, message: impl std::fmt::Display) -> darling::Error {
    syn::Error::new(span, message).into()
}
