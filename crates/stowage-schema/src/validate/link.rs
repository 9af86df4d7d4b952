use crate::{prelude::*, validate::rules};
use std::collections::BTreeMap;

// Validate every link held by `schema` against the rest of the schema set.
pub fn validate_links(
    schema: &ClassSchema,
    classes: &BTreeMap<&'static str, &'static ClassSchema>,
    errs: &mut ErrorTree,
) {
    for property in schema {
        if !property.ty.is_link() {
            continue;
        }
        let errs = errs.child(property.name);

        let Some(target_name) = property.link_target else {
            err!(errs, "link property '{}' has no target class", property.name);
            continue;
        };
        let Some(target) = classes.get(target_name) else {
            err!(
                errs,
                "link target '{target_name}' is not a registered object class"
            );
            continue;
        };

        if !schema.kind.may_link_to(target.kind) {
            let message = if schema.kind.is_asymmetric() {
                rules::ASYMMETRIC_LINK
            } else {
                rules::ASYMMETRIC_TARGET
            };
            err!(
                errs,
                "{message}: '{}' ({}) links to '{}' ({})",
                schema.name,
                schema.kind,
                target.name,
                target.kind
            );
        }

        if property.ty.is_linking_objects() {
            validate_backlink(schema, property, target, errs);
        }
    }
}

// Backlinks are computed, so they must be a plain non-null property whose
// origin links back at the declaring class.
fn validate_backlink(
    schema: &ClassSchema,
    property: &SchemaProperty,
    target: &ClassSchema,
    errs: &mut ErrorTree,
) {
    if property.collection.is_collection() || property.nullable {
        err!(
            errs,
            "backlink property '{}' cannot be nullable or inside a collection",
            property.name
        );
    }

    match property.link_origin_property {
        Some(origin) if target.links_back(origin, schema.name) => {}
        Some(origin) => err!(
            errs,
            "{}: '{}.{origin}' does not link to '{}'",
            rules::BACKLINK_ORIGIN,
            target.name,
            schema.name
        ),
        None => err!(errs, "backlink property '{}' has no origin property", property.name),
    }
}

///
/// TESTS
///
