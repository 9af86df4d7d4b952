use crate::{
    access::{AccessError, erased_get, erased_new, erased_set},
    prelude::*,
};
use std::{
    any::{Any, TypeId},
    collections::{BTreeMap, HashMap},
    fmt,
};

type ErasedGet =
    for<'a> fn(&'a (dyn Any + 'static), &str) -> Result<&'a (dyn Any + 'static), AccessError>;
type ErasedSet = fn(&mut (dyn Any + 'static), &str, Box<dyn Any>) -> Result<(), AccessError>;

///
/// Registration
///
/// Everything the runtime needs about one class, without naming its type.
///

#[derive(Clone, Copy)]
pub struct Registration {
    pub schema: &'static ClassSchema,
    pub type_id: TypeId,
    pub type_name: &'static str,
    pub adapted_properties: &'static [&'static str],
    new_instance: fn() -> Box<dyn Any>,
    get: ErasedGet,
    set: ErasedSet,
}

impl Registration {
    #[must_use]
    pub fn of<T: Object>() -> Self {
        Self {
            schema: T::SCHEMA,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            adapted_properties: T::ADAPTED_PROPERTIES,
            new_instance: erased_new::<T>,
            get: erased_get::<T>,
            set: erased_set::<T>,
        }
    }

    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        self.schema.name
    }

    #[must_use]
    pub const fn kind(&self) -> ClassKind {
        self.schema.kind
    }

    #[must_use]
    pub fn new_instance(&self) -> Box<dyn Any> {
        (self.new_instance)()
    }

    pub fn get<'a>(
        &self,
        obj: &'a (dyn Any + 'static),
        property: &str,
    ) -> Result<&'a (dyn Any + 'static), AccessError> {
        (self.get)(obj, property)
    }

    pub fn set(
        &self,
        obj: &mut (dyn Any + 'static),
        property: &str,
        value: Box<dyn Any>,
    ) -> Result<(), AccessError> {
        (self.set)(obj, property, value)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("class", &self.schema.name)
            .field("type_name", &self.type_name)
            .field("kind", &self.schema.kind)
            .finish_non_exhaustive()
    }
}

///
/// NameConflict
/// two distinct types registered under one class name
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NameConflict {
    pub class: &'static str,
    pub first: &'static str,
    pub second: &'static str,
}

///
/// Registry
///

#[derive(Debug, Default)]
pub struct Registry {
    classes: BTreeMap<&'static str, Registration>,
    by_type: HashMap<TypeId, &'static str>,
    conflicts: Vec<NameConflict>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a registration. Returns false when the same type was already
    /// present; a different type under a taken class name is kept aside, once,
    /// as a conflict for validation to report.
    pub fn insert(&mut self, registration: Registration) -> bool {
        let class = registration.class_name();

        if let Some(existing) = self.classes.get(class) {
            if existing.type_id == registration.type_id {
                return false;
            }
            let conflict = NameConflict {
                class,
                first: existing.type_name,
                second: registration.type_name,
            };
            if self.conflicts.contains(&conflict) {
                return false;
            }
            self.conflicts.push(conflict);

            return true;
        }

        self.by_type.insert(registration.type_id, class);
        self.classes.insert(class, registration);

        true
    }

    #[must_use]
    pub fn get(&self, class: &str) -> Option<&Registration> {
        self.classes.get(class)
    }

    #[must_use]
    pub fn get_by_type(&self, type_id: TypeId) -> Option<&Registration> {
        self.by_type
            .get(&type_id)
            .and_then(|class| self.classes.get(class))
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Registrations ordered by class name.
    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.classes.values()
    }

    pub fn schemas(&self) -> impl Iterator<Item = &'static ClassSchema> + '_ {
        self.classes.values().map(|registration| registration.schema)
    }

    #[must_use]
    pub fn conflicts(&self) -> &[NameConflict] {
        &self.conflicts
    }
}

///
/// TESTS
///
