use crate::prelude::*;

///
/// Counter
/// has no `Default`; materialised through a named constructor
///

#[derive(Debug, Object)]
#[object(constructor = "Counter::unnamed")]
pub struct Counter {
    #[persisted(primary_key)]
    pub name: String,

    pub count: i64,
}

impl Counter {
    #[must_use]
    pub fn unnamed() -> Self {
        Self {
            name: "unnamed".to_string(),
            count: 1,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_uses_the_named_constructor() {
        let counter = Counter::new_instance();

        assert_eq!(counter.name, "unnamed");
        assert_eq!(counter.count, 1);
    }

    #[test]
    fn string_primary_key() {
        assert_eq!(Counter::SCHEMA.primary_key, Some("name"));
        assert_eq!(
            Counter::SCHEMA.primary_key_property().map(|p| p.ty),
            Some(PropertyType::String)
        );
    }
}
