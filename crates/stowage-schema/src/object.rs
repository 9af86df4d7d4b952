use crate::{build::Registration, prelude::*};
use std::fmt;

///
/// Object
///
/// The companion metadata of a persisted class. Implemented by
/// `#[derive(Object)]`; the runtime reads it and never mutates it.
///

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a persisted object class",
    label = "object links must point at a class deriving `Object`",
    note = "derive `Object` on `{Self}`, or use one of the supported property types"
)]
pub trait Object: Sized + 'static {
    /// Schema-level class name; may differ from the Rust type name.
    const CLASS_NAME: &'static str;

    const CLASS_KIND: ClassKind;

    const SCHEMA: &'static ClassSchema;

    /// One accessor per schema property, in schema order.
    const ACCESSORS: &'static [Accessor<Self>];

    const PRIMARY_KEY: Option<&'static Accessor<Self>>;

    /// Persisted names whose declared Rust type is adapted to and from the
    /// storage representation (narrow integers and `char`).
    const ADAPTED_PROPERTIES: &'static [&'static str];

    /// Zero-argument factory used to materialise a bare instance before it is
    /// hydrated from storage.
    fn new_instance() -> Self;

    #[must_use]
    fn schema() -> &'static ClassSchema {
        Self::SCHEMA
    }

    /// Resolve an accessor by persisted or public name.
    #[must_use]
    fn accessor(name: &str) -> Option<&'static Accessor<Self>> {
        Self::ACCESSORS.iter().find(|a| a.answers_to(name))
    }

    #[must_use]
    fn is_adapted(name: &str) -> bool {
        Self::ADAPTED_PROPERTIES.contains(&name)
    }

    #[must_use]
    fn registration() -> Registration {
        Registration::of::<Self>()
    }
}

///
/// DefaultConstructor
///
/// The zero-argument constructor used by generated factories when no
/// explicit `constructor` is named on the class.
///

#[diagnostic::on_unimplemented(
    message = "`{Self}` has no zero-argument constructor",
    label = "persisted classes must be constructible without arguments",
    note = "implement `Default` for `{Self}`, or name a constructor with `#[object(constructor = \"...\")]`"
)]
pub trait DefaultConstructor: Sized {
    fn construct() -> Self;
}

impl<T: Default> DefaultConstructor for T {
    fn construct() -> Self {
        T::default()
    }
}

///
/// Backlinks
///
/// A computed, read-only collection of the objects whose origin property
/// links to the owner. The storage runtime fills it; it is never persisted.
///

pub struct Backlinks<T> {
    resolved: Vec<T>,
}

impl<T> Backlinks<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resolved: Vec::new(),
        }
    }

    /// Used by runtimes once the origin objects are known.
    #[must_use]
    pub const fn from_resolved(resolved: Vec<T>) -> Self {
        Self { resolved }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.resolved.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.resolved.iter()
    }
}

// Manual impls avoid a spurious `T: Default` bound.
impl<T> Default for Backlinks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Backlinks<T> {
    fn clone(&self) -> Self {
        Self {
            resolved: self.resolved.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Backlinks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.resolved).finish()
    }
}

impl<T: PartialEq> PartialEq for Backlinks<T> {
    fn eq(&self, other: &Self) -> bool {
        self.resolved == other.resolved
    }
}

impl<'a, T> IntoIterator for &'a Backlinks<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.resolved.iter()
    }
}
