use crate::{
    prelude::*,
    validate::{
        naming::{UniqueNames, validate_class_name, validate_property_name},
        rules,
    },
};

// Validate one class in isolation: per-property rules first, then the
// whole-table rules.
pub fn validate_class(schema: &ClassSchema, errs: &mut ErrorTree) {
    errs.add_result(validate_class_name(schema.name));

    for property in schema {
        validate_property(property, errs.child(property.name));
    }

    validate_primary_key(schema, errs);
    validate_unique_names(schema, errs);
}

// Marker/type compatibility for a single property.
pub fn validate_property(property: &SchemaProperty, errs: &mut ErrorTree) {
    let name = property.name;
    errs.add_result(validate_property_name(name));
    if property.has_public_name() {
        errs.add_result(validate_property_name(property.public_name));
    }

    if property.collection.is_collection() {
        for (set, marker) in [
            (property.primary_key, "primary key"),
            (property.indexed, "index"),
            (property.full_text_indexed, "full-text"),
        ] {
            if set {
                err!(errs, "{}", rules::marker_on_collection(marker, name));
            }
        }

        return;
    }

    if property.primary_key && !property.ty.supports_primary_key() {
        err!(
            errs,
            "{}",
            rules::primary_key_type(
                name,
                property.ty,
                rules::type_list(PropertyType::PRIMARY_KEY_TYPES)
            )
        );
    }
    if property.indexed && !property.ty.supports_index() {
        err!(
            errs,
            "{}",
            rules::index_type(name, property.ty, rules::type_list(PropertyType::INDEXABLE_TYPES))
        );
    }
    if property.full_text_indexed && !property.ty.supports_full_text() {
        err!(
            errs,
            "{}",
            rules::full_text_type(
                name,
                property.ty,
                rules::type_list(PropertyType::FULL_TEXT_TYPES)
            )
        );
    }
    if property.indexed && property.full_text_indexed {
        err!(errs, "{}", rules::index_and_full_text(name));
    }
    if property.primary_key && property.full_text_indexed {
        err!(errs, "{}", rules::primary_key_and_full_text(name));
    }
}

// At most one primary key, none on embedded classes, and the class-level
// reference must agree with the property markers.
fn validate_primary_key(schema: &ClassSchema, errs: &mut ErrorTree) {
    let keys = schema.iter().filter(|p| p.primary_key).collect::<Vec<_>>();

    if keys.len() > 1 {
        err!(errs, "{}", rules::multiple_primary_keys(schema.name, keys.len()));
    }
    if schema.kind.is_embedded() && !keys.is_empty() {
        err!(errs, "{}", rules::embedded_primary_key(schema.name));
    }

    match (schema.primary_key, keys.as_slice()) {
        (None, []) => {}
        (Some(name), _) if keys.iter().any(|p| p.name == name) => {}
        (Some(name), _) => err!(
            errs,
            "primary key reference '{name}' does not name a primary key property"
        ),
        (None, _) => err!(errs, "primary key property is not referenced by the class"),
    }
}

// Persisted and public names share one namespace per class. The location is
// the property slot, so a property never collides with itself.
fn validate_unique_names(schema: &ClassSchema, errs: &mut ErrorTree) {
    let mut names = UniqueNames::new();

    for (index, property) in schema.iter().enumerate() {
        let mut check = |name: &str| {
            if let Err(previous) = names.check(name, index) {
                let previous = schema.properties[previous].name;
                err!(
                    errs.child(property.name),
                    "{}",
                    rules::duplicate_name(name, previous)
                );
            }
        };

        check(property.name);
        if property.has_public_name() {
            check(property.public_name);
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn check(schema: &ClassSchema) -> ErrorTree {
        let mut errs = ErrorTree::new();
        validate_class(schema, &mut errs);

        errs
    }

    #[test]
    fn accepts_a_well_formed_class() {
        const PERSON: ClassSchema = ClassSchema {
            name: "Person",
            kind: ClassKind::Standard,
            primary_key: Some("id"),
            properties: &[
                SchemaProperty {
                    primary_key: true,
                    ..SchemaProperty::new("id", PropertyType::Int)
                },
                SchemaProperty {
                    full_text_indexed: true,
                    ..SchemaProperty::new("name", PropertyType::String)
                },
                SchemaProperty {
                    collection: CollectionType::List,
                    ..SchemaProperty::new("tags", PropertyType::String)
                },
            ],
        };

        assert!(check(&PERSON).is_empty());
    }

    #[test]
    fn two_primary_keys_report_once() {
        const TWO_KEYS: ClassSchema = ClassSchema {
            name: "TwoKeys",
            kind: ClassKind::Standard,
            primary_key: Some("a"),
            properties: &[
                SchemaProperty {
                    primary_key: true,
                    ..SchemaProperty::new("a", PropertyType::Int)
                },
                SchemaProperty {
                    primary_key: true,
                    ..SchemaProperty::new("b", PropertyType::String)
                },
            ],
        };

        let messages = check(&TWO_KEYS).messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("only one primary key"));
    }

    #[test]
    fn embedded_class_rejects_primary_key() {
        const ADDRESS: ClassSchema = ClassSchema {
            name: "Address",
            kind: ClassKind::Embedded,
            primary_key: Some("id"),
            properties: &[SchemaProperty {
                primary_key: true,
                ..SchemaProperty::new("id", PropertyType::Int)
            }],
        };

        let messages = check(&ADDRESS).messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains(rules::EMBEDDED_PRIMARY_KEY));
    }

    #[test]
    fn marker_and_type_conflicts_accumulate() {
        const BAD: ClassSchema = ClassSchema {
            name: "Bad",
            kind: ClassKind::Standard,
            primary_key: Some("score"),
            properties: &[
                SchemaProperty {
                    primary_key: true,
                    ..SchemaProperty::new("score", PropertyType::Double)
                },
                SchemaProperty {
                    indexed: true,
                    full_text_indexed: true,
                    ..SchemaProperty::new("title", PropertyType::String)
                },
                SchemaProperty {
                    full_text_indexed: true,
                    ..SchemaProperty::new("count", PropertyType::Int)
                },
                SchemaProperty {
                    indexed: true,
                    collection: CollectionType::Set,
                    ..SchemaProperty::new("labels", PropertyType::String)
                },
            ],
        };

        let errs = check(&BAD);
        let routes = errs
            .flatten()
            .into_iter()
            .map(|(route, _)| route)
            .collect::<Vec<_>>();

        assert_eq!(routes, ["count", "labels", "score", "title"]);
    }

    #[test]
    fn alias_collision_names_both_properties() {
        const ALIASED: ClassSchema = ClassSchema {
            name: "Aliased",
            kind: ClassKind::Standard,
            primary_key: None,
            properties: &[
                SchemaProperty {
                    public_name: "label",
                    ..SchemaProperty::new("title", PropertyType::String)
                },
                SchemaProperty::new("label", PropertyType::String),
            ],
        };

        let flat = check(&ALIASED).flatten();
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].0, "label");
        assert!(flat[0].1.contains("'title'"));
    }

    #[test]
    fn revalidation_is_idempotent() {
        const ONE: ClassSchema = ClassSchema {
            name: "One",
            kind: ClassKind::Standard,
            primary_key: None,
            properties: &[SchemaProperty {
                public_name: "one",
                ..SchemaProperty::new("one", PropertyType::Int)
            }],
        };

        assert!(check(&ONE).is_empty());
        assert!(check(&ONE).is_empty());
    }
}
