use crate::prelude::*;

///
/// SchemaProperty
///
/// One persisted property of one class. `nullable` describes the element when
/// the property is a collection. `public_name` is empty when the property has
/// no alias.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct SchemaProperty {
    pub name: &'static str,

    #[serde(skip_serializing_if = "is_blank")]
    pub public_name: &'static str,

    pub ty: PropertyType,
    pub collection: CollectionType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_target: Option<&'static str>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_origin_property: Option<&'static str>,

    pub nullable: bool,
    pub primary_key: bool,
    pub indexed: bool,
    pub full_text_indexed: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_blank(s: &&'static str) -> bool {
    s.is_empty()
}

impl SchemaProperty {
    /// A plain, non-null, unmarked property of the given type.
    #[must_use]
    pub const fn new(name: &'static str, ty: PropertyType) -> Self {
        Self {
            name,
            public_name: "",
            ty,
            collection: CollectionType::None,
            link_target: None,
            link_origin_property: None,
            nullable: false,
            primary_key: false,
            indexed: false,
            full_text_indexed: false,
        }
    }

    #[must_use]
    pub const fn has_public_name(&self) -> bool {
        !self.public_name.is_empty()
    }

    /// The name callers use: the alias when present, else the persisted name.
    #[must_use]
    pub const fn public_or_persisted_name(&self) -> &'static str {
        if self.has_public_name() {
            self.public_name
        } else {
            self.name
        }
    }

    /// Backlinks are computed from the origin side and never written directly.
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        self.ty.is_linking_objects()
    }

    /// True when either the persisted or the public name equals `name`.
    #[must_use]
    pub const fn answers_to(&self, name: &str) -> bool {
        str_eq(self.name, name) || (self.has_public_name() && str_eq(self.public_name, name))
    }

    /// True when this is a forward object link (or a collection of them) to `class`.
    #[must_use]
    pub const fn links_to(&self, class: &str) -> bool {
        if !self.ty.is_object() {
            return false;
        }

        match self.link_target {
            Some(target) => str_eq(target, class),
            None => false,
        }
    }
}
