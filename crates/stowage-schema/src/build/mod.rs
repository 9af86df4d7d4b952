mod registry;

pub use registry::*;

use crate::{prelude::*, validate::validate_registry};
use std::{
    any::{Any, TypeId},
    sync::{
        LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard,
        atomic::{AtomicBool, Ordering},
    },
};
use thiserror::Error as ThisError;

///
/// RegistryError
///

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("no object class named '{0}' is registered")]
    UnknownClass(String),

    #[error("type '{0}' is not registered as an object class")]
    UnregisteredType(&'static str),

    #[error("schema validation failed:\n{0}")]
    Validation(ErrorTree),
}

///
/// REGISTRY
/// class name -> registration, filled by generated constructors at startup
///

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

static REGISTRY_VALIDATED: AtomicBool = AtomicBool::new(false);

/// Acquire a write guard to the global registry.
pub fn registry_write() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY
        .write()
        .expect("registry RwLock poisoned while acquiring write lock")
}

// registry_read
// reads the registry directly without validation
pub(crate) fn registry_read() -> RwLockReadGuard<'static, Registry> {
    REGISTRY
        .read()
        .expect("registry RwLock poisoned while acquiring read lock")
}

/// Register `T` in the global table. Repeated registration of the same type
/// is a no-op.
pub fn register<T: Object>() {
    let registration = T::registration();
    let inserted = {
        let mut registry = registry_write();
        let inserted = registry.insert(registration);
        // cleared before readers can see the new class
        if inserted {
            REGISTRY_VALIDATED.store(false, Ordering::Release);
        }
        inserted
    };

    if inserted {
        tracing::debug!(
            class = registration.class_name(),
            kind = %registration.schema.kind,
            properties = registration.schema.len(),
            "registered object class"
        );
    }
}

/// Read the global registry, validating it once per set of registrations.
pub fn get_schema() -> Result<RwLockReadGuard<'static, Registry>, RegistryError> {
    let registry = registry_read();
    if !REGISTRY_VALIDATED.load(Ordering::Acquire) {
        if let Err(errors) = validate_registry(&registry) {
            tracing::warn!(errors = errors.len(), "object schema failed validation");
            return Err(RegistryError::Validation(errors));
        }
        REGISTRY_VALIDATED.store(true, Ordering::Release);
    }

    Ok(registry)
}

/// Companion lookup by Rust type.
pub fn companion_of<T: Object>() -> Result<Registration, RegistryError> {
    registry_read()
        .get_by_type(TypeId::of::<T>())
        .copied()
        .ok_or(RegistryError::UnregisteredType(std::any::type_name::<T>()))
}

/// Companion lookup by schema class name.
pub fn lookup(class: &str) -> Result<Registration, RegistryError> {
    registry_read()
        .get(class)
        .copied()
        .ok_or_else(|| RegistryError::UnknownClass(class.to_string()))
}

/// Materialise a bare instance of the named class.
pub fn create_instance_of(class: &str) -> Result<Box<dyn Any>, RegistryError> {
    lookup(class).map(|registration| registration.new_instance())
}

///
/// TESTS
///
