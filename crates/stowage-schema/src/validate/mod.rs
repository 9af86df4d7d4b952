//! Whole-schema validation over registered object classes.

pub mod class;
pub mod link;
pub mod naming;
pub mod rules;

use crate::{build::Registry, prelude::*};
use std::collections::BTreeMap;

/// Validate everything in `registry`, including class name conflicts
/// recorded at registration time.
pub fn validate_registry(registry: &Registry) -> Result<(), ErrorTree> {
    let mut errors = ErrorTree::new();

    for conflict in registry.conflicts() {
        err!(
            errors.child(conflict.class),
            "class name is registered by both '{}' and '{}'",
            conflict.first,
            conflict.second
        );
    }

    errors.append(validate_schemas(registry.schemas()));

    errors.result()
}

/// Validate a set of class schemas, in two phases: each class on its own,
/// then the links between them. Routes are `Class` or `Class.property`.
pub fn validate_schemas(schemas: impl IntoIterator<Item = &'static ClassSchema>) -> ErrorTree {
    let classes = schemas
        .into_iter()
        .map(|schema| (schema.name, schema))
        .collect::<BTreeMap<_, _>>();
    let mut errors = ErrorTree::new();

    // Phase 1: local invariants.
    for schema in classes.values() {
        class::validate_class(schema, errors.child(schema.name));
    }

    // Phase 2: cross-class invariants.
    for schema in classes.values() {
        link::validate_links(schema, &classes, errors.child(schema.name));
    }

    errors
}

///
/// TESTS
///
