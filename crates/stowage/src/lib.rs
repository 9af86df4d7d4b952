//! ## Crate layout
//! - `schema`: the schema model, companion trait, accessors, registry and
//!   whole-schema validation.
//! - `Object`: the companion trait, and the derive that synthesizes it.
//!
//! `prelude` brings the derive and the types used in field declarations
//! into scope.

pub use stowage_schema as schema;
pub use stowage_schema::object::Object;
pub use stowage_schema_derive::Object;

/// re-exports
///
/// generated code reaches its dependencies through here, so users do not
/// have to add them to their own Cargo.toml
pub mod __reexports {
    pub use ctor;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Object,
        schema::{
            build::{companion_of, create_instance_of, get_schema, lookup},
            object::Backlinks,
            types::{ClassKind, CollectionType, PropertyType},
            value::{Decimal128, Mixed, ObjectId, Timestamp, Uuid},
        },
    };
}
