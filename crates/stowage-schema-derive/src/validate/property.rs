use crate::{collect::Property, prelude::*};
use darling::error::Accumulator;

/// Per-property rules: names, marker/type compatibility, marker
/// combinations and link nullability.
pub fn validate_property(property: &Property, acc: &mut Accumulator) {
    validate_names(property, acc);
    validate_markers(property, acc);
    validate_link_nullability(property, acc);
}

fn validate_names(property: &Property, acc: &mut Accumulator) {
    if let Err(msg) = naming::validate_property_name(&property.name) {
        acc.push(error_at(property.name_span, msg));
    }
    if let Some((public, span)) = &property.public_name
        && let Err(msg) = naming::validate_property_name(public)
    {
        acc.push(error_at(*span, msg));
    }
}

fn validate_markers(property: &Property, acc: &mut Accumulator) {
    let name = &property.name;
    let markers = &property.markers;
    let ty = property.shape.ty;

    // markers describe the declared type itself, never a collection element
    if property.shape.collection.is_collection() {
        for (marker, span) in markers.present() {
            acc.push(error_at(span, rules::marker_on_collection(marker, name)));
        }

        return;
    }

    if let Some(span) = markers.primary_key
        && !ty.supports_primary_key()
    {
        acc.push(error_at(
            span,
            rules::primary_key_type(
                name,
                ty,
                rules::type_list(PropertyType::PRIMARY_KEY_TYPES),
            ),
        ));
    }
    if let Some(span) = markers.indexed
        && !ty.supports_index()
    {
        acc.push(error_at(
            span,
            rules::index_type(name, ty, rules::type_list(PropertyType::INDEXABLE_TYPES)),
        ));
    }
    if let Some(span) = markers.full_text
        && !ty.supports_full_text()
    {
        acc.push(error_at(
            span,
            rules::full_text_type(name, ty, rules::type_list(PropertyType::FULL_TEXT_TYPES)),
        ));
    }

    if let (Some(_), Some(span)) = (markers.indexed, markers.full_text) {
        acc.push(error_at(span, rules::index_and_full_text(name)));
    }
    if let (Some(_), Some(span)) = (markers.primary_key, markers.full_text) {
        acc.push(error_at(span, rules::primary_key_and_full_text(name)));
    }
}

fn validate_link_nullability(property: &Property, acc: &mut Accumulator) {
    let shape = &property.shape;
    if !shape.ty.is_object() {
        return;
    }

    let name = &property.name;
    let message = match (shape.collection, shape.optional) {
        (CollectionType::None, false) => {
            format!("object link '{name}' must be declared as `Option<T>`")
        }
        (CollectionType::List | CollectionType::Set, true) => {
            format!("list and set elements of object link '{name}' cannot be nullable")
        }
        (CollectionType::Dictionary, false) => {
            format!("dictionary values of object link '{name}' must be declared as `Option<T>`")
        }
        _ => return,
    };

    acc.push(error_at(property.field_ty.span(), message));
}
