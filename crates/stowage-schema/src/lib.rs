//! ## Crate layout
//! - `access`: generic property accessors used by runtimes to get/set fields.
//! - `build`: the process-wide registration table and validate-once access.
//! - `error`: route-aware error aggregation shared by validation passes.
//! - `node`: the schema descriptor model (`ClassSchema`, `SchemaProperty`).
//! - `object`: the companion trait every derived class implements.
//! - `types`: closed enumerations (property, collection and class kinds).
//! - `validate`: whole-schema validation over registered classes.
//! - `value`: persisted value types that have no std counterpart.

pub mod access;
pub mod build;
pub mod error;
pub mod node;
pub mod object;
pub mod types;
pub mod validate;
pub mod value;

/// Maximum length for schema class names.
pub const MAX_CLASS_NAME_LEN: usize = 57;

/// Maximum length for persisted and public property names.
pub const MAX_PROPERTY_NAME_LEN: usize = 63;

use crate::{access::AccessError, build::RegistryError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        access::{AccessError, Accessor},
        err,
        error::ErrorTree,
        node::*,
        object::{Backlinks, Object},
        types::{ClassKind, CollectionType, PropertyType},
        value::{Decimal128, Mixed, ObjectId, Timestamp, Uuid},
    };
    pub use serde::Serialize;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    AccessError(#[from] AccessError),

    #[error(transparent)]
    RegistryError(#[from] RegistryError),
}
