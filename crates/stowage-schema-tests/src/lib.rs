//! Object classes exercising every derive path, with the tests that read
//! their generated companions back through the schema, accessor and registry
//! surfaces.

pub mod test;

pub(crate) mod prelude {
    pub use stowage::prelude::*;
    #[cfg(test)]
    pub use stowage::schema::{access::AccessError, build::RegistryError};
    pub use std::{
        collections::{BTreeMap, BTreeSet, HashMap, HashSet},
        marker::PhantomData,
    };
}

/// Assert that a schema row matches the expected type and collection.
#[macro_export]
macro_rules! assert_property {
    ($schema:expr, $name:literal, $ty:expr, $collection:expr) => {{
        let property = $schema
            .property($name)
            .unwrap_or_else(|| panic!("missing property '{}'", $name));
        assert_eq!(property.ty, $ty, "type of '{}'", $name);
        assert_eq!(property.collection, $collection, "collection of '{}'", $name);
        property
    }};
}
