use crate::prelude::*;

/// Register the class in the process-wide table at startup.
pub fn registration(ident: &Ident) -> TokenStream {
    quote! {
        #[cfg(not(target_arch = "wasm32"))]
        #[::stowage::__reexports::ctor::ctor(unsafe, anonymous, crate_path = ::stowage::__reexports::ctor)]
        fn __ctor() {
            ::stowage::schema::build::register::<#ident>();
        }
    }
}
