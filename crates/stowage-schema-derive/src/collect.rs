use crate::{
    classify::{Classified, Shape, classify},
    node::{Markers, ObjectInput, PersistedField},
    prelude::*,
};
use darling::error::Accumulator;

///
/// Property
///
/// One persisted property together with the declaration it came from, so
/// the synthesizer can re-emit accessor references.
///

#[derive(Clone, Debug)]
pub struct Property {
    /// Position of the declaring field in the struct.
    pub slot: usize,

    pub ident: Ident,
    pub field_ty: Type,

    pub name: String,
    pub name_span: Span,
    pub public_name: Option<(String, Span)>,

    pub shape: Shape,
    pub markers: Markers,

    /// Origin property of a backlink on its target class.
    pub origin: Option<LitStr>,
}

impl Property {
    pub fn public_name(&self) -> &str {
        self.public_name.as_ref().map_or("", |(name, _)| name.as_str())
    }

    pub const fn is_computed(&self) -> bool {
        self.shape.ty.is_linking_objects()
    }
}

///
/// PropertyTable
///
/// The ordered properties of one class. Order is declaration order and is
/// carried unchanged into the synthesized schema.
///

#[derive(Clone, Debug)]
pub struct PropertyTable {
    pub ident: Ident,
    pub class: String,
    pub class_span: Span,
    pub kind: ClassKind,
    pub properties: Vec<Property>,
}

impl PropertyTable {
    pub fn primary_keys(&self) -> impl Iterator<Item = &Property> {
        self.properties
            .iter()
            .filter(|property| property.markers.is_primary_key())
    }

    /// Index of the single primary key, if exactly one is declared.
    pub fn primary_key_index(&self) -> Option<usize> {
        let mut keys = self
            .properties
            .iter()
            .enumerate()
            .filter(|(_, property)| property.markers.is_primary_key());

        match (keys.next(), keys.next()) {
            (Some((index, _)), None) => Some(index),
            _ => None,
        }
    }

    pub fn adapted(&self) -> impl Iterator<Item = &Property> {
        self.properties
            .iter()
            .filter(|property| property.shape.adapted)
    }
}

/// Walk the declared fields in source order and build the property table.
/// Fields that cannot be resolved are reported and left out of the table.
pub fn collect(object: &ObjectInput, acc: &mut Accumulator) -> PropertyTable {
    let class = object.class_name();
    let mut properties = Vec::new();

    for (slot, field) in object.fields().into_iter().enumerate() {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        if field.is_ignored() {
            for span in field.option_spans() {
                acc.push(error_at(
                    span,
                    format!("ignored field '{ident}' cannot carry other persistence options"),
                ));
            }
            continue;
        }

        let shape = match classify(&field.ty) {
            Ok(Classified::Property(shape)) => shape,
            Ok(Classified::Skip) => {
                for span in field.option_spans() {
                    acc.push(error_at(
                        span,
                        format!(
                            "field '{ident}' is not persisted and cannot carry persistence options"
                        ),
                    ));
                }
                continue;
            }
            Err(err) => {
                acc.push(error_at(
                    field.ty.span(),
                    format!("cannot persist field '{ident}' of class '{class}': {err}"),
                ));
                continue;
            }
        };

        if let Some(property) = resolve(slot, ident, field, shape, acc) {
            properties.push(property);
        }
    }

    PropertyTable {
        ident: object.ident.clone(),
        class,
        class_span: object.class_name_span(),
        kind: object.kind,
        properties,
    }
}

// Attach names, markers and the backlink origin to a classified field.
fn resolve(
    slot: usize,
    ident: &Ident,
    field: &PersistedField,
    shape: Shape,
    acc: &mut Accumulator,
) -> Option<Property> {
    let origin = match (shape.ty.is_linking_objects(), &field.backlink) {
        (true, Some(origin)) => Some(origin.clone()),
        (true, None) => {
            acc.push(error_at(
                field.ty.span(),
                format!(
                    "backlink field '{ident}' needs its origin property: #[persisted(backlink = \"...\")]"
                ),
            ));
            return None;
        }
        (false, Some(origin)) => {
            acc.push(error_at(
                origin.span(),
                "`backlink` is only valid on `Backlinks<T>` fields",
            ));
            return None;
        }
        (false, None) => None,
    };

    let names = field.names(ident);

    Some(Property {
        slot,
        ident: ident.clone(),
        field_ty: field.ty.clone(),
        name: names.persisted,
        name_span: names.persisted_span,
        public_name: names.public,
        shape,
        markers: field.markers(),
        origin,
    })
}

///
/// TESTS
///
