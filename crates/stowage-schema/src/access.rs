use crate::prelude::*;
use std::{any::Any, fmt};
use thiserror::Error as ThisError;

///
/// AccessError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum AccessError {
    #[error("instance is not of class '{class}'")]
    InstanceMismatch { class: &'static str },

    #[error("property '{class}.{property}' is computed and cannot be written")]
    ReadOnly {
        class: &'static str,
        property: &'static str,
    },

    #[error("property '{class}.{property}' expects a value of type '{expected}'")]
    TypeMismatch {
        class: &'static str,
        property: &'static str,
        expected: &'static str,
    },

    #[error("class '{class}' has no property named '{property}'")]
    UnknownProperty {
        class: &'static str,
        property: String,
    },
}

/// Getter half of an accessor.
pub type Getter<T> = fn(&T) -> &(dyn Any + 'static);

/// Setter half of an accessor; absent for computed properties.
pub type Setter<T> = fn(&mut T, Box<dyn Any>) -> Result<(), AccessError>;

///
/// Accessor
///
/// Generated get/set dispatch for one property of `T`. Values cross the
/// boundary untyped; `read` and `write` recover the static type.
///

pub struct Accessor<T: 'static> {
    pub class: &'static str,
    pub name: &'static str,
    pub public_name: &'static str,
    pub get: Getter<T>,
    pub set: Option<Setter<T>>,
}

impl<T: 'static> Accessor<T> {
    #[must_use]
    pub const fn new(
        class: &'static str,
        name: &'static str,
        public_name: &'static str,
        get: Getter<T>,
        set: Option<Setter<T>>,
    ) -> Self {
        Self {
            class,
            name,
            public_name,
            get,
            set,
        }
    }

    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.set.is_none()
    }

    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || (!self.public_name.is_empty() && self.public_name == name)
    }

    pub fn get<'a>(&self, obj: &'a T) -> &'a (dyn Any + 'static) {
        (self.get)(obj)
    }

    /// Read the property as `V`, or `None` when `V` is not the declared type.
    pub fn read<'a, V: Any>(&self, obj: &'a T) -> Option<&'a V> {
        self.get(obj).downcast_ref::<V>()
    }

    pub fn set(&self, obj: &mut T, value: Box<dyn Any>) -> Result<(), AccessError> {
        let Some(set) = self.set else {
            return Err(AccessError::ReadOnly {
                class: self.class,
                property: self.name,
            });
        };

        set(obj, value)
    }

    pub fn write<V: Any>(&self, obj: &mut T, value: V) -> Result<(), AccessError> {
        self.set(obj, Box::new(value))
    }
}

// fn pointers are Copy regardless of T, so these are implemented by hand.
impl<T: 'static> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Accessor<T> {}

impl<T: 'static> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("class", &self.class)
            .field("name", &self.name)
            .field("public_name", &self.public_name)
            .field("read_only", &self.is_read_only())
            .finish()
    }
}

/// Unbox a setter argument into the declared property type.
/// Called by generated setters.
pub fn downcast_value<V: Any>(
    class: &'static str,
    property: &'static str,
    value: Box<dyn Any>,
) -> Result<V, AccessError> {
    value
        .downcast::<V>()
        .map(|boxed| *boxed)
        .map_err(|_| AccessError::TypeMismatch {
            class,
            property,
            expected: std::any::type_name::<V>(),
        })
}

///
/// Type-erased dispatch
///
/// Monomorphised per class when a `Registration` is built, so the registry can
/// reach accessors and factories without knowing the concrete type.
///

pub(crate) fn erased_get<'a, T: Object>(
    obj: &'a (dyn Any + 'static),
    property: &str,
) -> Result<&'a (dyn Any + 'static), AccessError> {
    let obj = obj
        .downcast_ref::<T>()
        .ok_or(AccessError::InstanceMismatch {
            class: T::CLASS_NAME,
        })?;
    let accessor = find_accessor::<T>(property)?;

    Ok(accessor.get(obj))
}

pub(crate) fn erased_set<T: Object>(
    obj: &mut (dyn Any + 'static),
    property: &str,
    value: Box<dyn Any>,
) -> Result<(), AccessError> {
    let obj = obj
        .downcast_mut::<T>()
        .ok_or(AccessError::InstanceMismatch {
            class: T::CLASS_NAME,
        })?;
    let accessor = find_accessor::<T>(property)?;

    accessor.set(obj, value)
}

pub(crate) fn erased_new<T: Object>() -> Box<dyn Any> {
    Box::new(T::new_instance())
}

fn find_accessor<T: Object>(property: &str) -> Result<&'static Accessor<T>, AccessError> {
    T::accessor(property).ok_or_else(|| AccessError::UnknownProperty {
        class: T::CLASS_NAME,
        property: property.to_string(),
    })
}
