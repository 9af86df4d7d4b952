use crate::prelude::*;

///
/// ClassSchema
///
/// The synthesized, immutable descriptor of one object class. Property order
/// is declaration order and is significant for index-based storage layouts.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ClassSchema {
    pub name: &'static str,
    pub kind: ClassKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<&'static str>,

    pub properties: &'static [SchemaProperty],
}

impl ClassSchema {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'static, SchemaProperty> {
        self.properties.iter()
    }

    /// Look up a property by its persisted name.
    #[must_use]
    pub const fn property(&self, name: &str) -> Option<&'static SchemaProperty> {
        let properties = self.properties;
        let mut i = 0;
        while i < properties.len() {
            if str_eq(properties[i].name, name) {
                return Some(&properties[i]);
            }
            i += 1;
        }

        None
    }

    /// Look up a property by persisted or public name, returning its slot.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<(usize, &'static SchemaProperty)> {
        self.properties
            .iter()
            .enumerate()
            .find(|(_, p)| p.answers_to(name))
    }

    #[must_use]
    pub const fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    #[must_use]
    pub fn primary_key_property(&self) -> Option<&'static SchemaProperty> {
        self.primary_key.and_then(|name| self.property(name))
    }

    /// True when `origin` exists and is an object link (or collection of object
    /// links) pointing back at `class`.
    #[must_use]
    pub const fn links_back(&self, origin: &str, class: &str) -> bool {
        match self.property(origin) {
            Some(property) => property.links_to(class),
            None => false,
        }
    }

    /// Names of every class this one links to, in declaration order.
    pub fn link_targets(&self) -> impl Iterator<Item = (&'static SchemaProperty, &'static str)> {
        self.properties
            .iter()
            .filter_map(|p| p.link_target.map(|target| (p, target)))
    }
}

impl<'a> IntoIterator for &'a ClassSchema {
    type Item = &'static SchemaProperty;
    type IntoIter = std::slice::Iter<'static, SchemaProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

///
/// TESTS
///
