use crate::{collect::PropertyTable, prelude::*};
use darling::error::Accumulator;
use naming::UniqueNames;

pub fn validate_class_name(table: &PropertyTable, acc: &mut Accumulator) {
    if let Err(msg) = naming::validate_class_name(&table.class) {
        acc.push(error_at(table.class_span, msg));
    }
}

/// At most one primary key per class, and none on embedded classes.
pub fn validate_primary_key(table: &PropertyTable, acc: &mut Accumulator) {
    let keys = table.primary_keys().collect::<Vec<_>>();

    if keys.len() > 1 {
        acc.push(error_at(
            table.class_span,
            rules::multiple_primary_keys(&table.class, keys.len()),
        ));
    }

    if table.kind.is_embedded() {
        for key in keys {
            let span = key.markers.primary_key.unwrap_or(key.name_span);
            acc.push(error_at(span, rules::embedded_primary_key(&table.class)));
        }
    }
}

/// Persisted and public names share one namespace per class. A name is keyed
/// by its declaring field, so re-checking a declaration never collides.
pub fn validate_unique_names(table: &PropertyTable, acc: &mut Accumulator) {
    let mut names = UniqueNames::new();

    for property in &table.properties {
        let public = property
            .public_name
            .as_ref()
            .map(|(name, span)| (name.as_str(), *span));

        for (name, span) in std::iter::once((property.name.as_str(), property.name_span)).chain(public)
        {
            if let Err(previous) = names.check(name, property.slot) {
                let previous = table
                    .properties
                    .iter()
                    .find(|p| p.slot == previous)
                    .map_or(name, |p| p.name.as_str());

                acc.push(error_at(span, rules::duplicate_name(name, previous)));
            }
        }
    }
}
