use crate::{MAX_CLASS_NAME_LEN, MAX_PROPERTY_NAME_LEN};
use std::collections::HashMap;

/// Ensure class names are non-empty, ASCII, and within the maximum length.
pub fn validate_class_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("class name is empty".to_string());
    }
    if name.len() > MAX_CLASS_NAME_LEN {
        return Err(format!(
            "class name '{name}' exceeds max length {MAX_CLASS_NAME_LEN}"
        ));
    }
    if !name.is_ascii() {
        return Err(format!("class name '{name}' must be ASCII"));
    }

    Ok(())
}

/// Ensure persisted/public property names are non-empty, ASCII, and within
/// the maximum length.
pub fn validate_property_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("property name is empty".to_string());
    }
    if name.len() > MAX_PROPERTY_NAME_LEN {
        return Err(format!(
            "property name '{name}' exceeds max length {MAX_PROPERTY_NAME_LEN}"
        ));
    }
    if !name.is_ascii() {
        return Err(format!("property name '{name}' must be ASCII"));
    }

    Ok(())
}

///
/// UniqueNames
///
/// Tracks persisted and public names within one class. `L` identifies the
/// declaration a name came from; seeing a name again from the same
/// declaration is not a collision.
///

#[derive(Debug)]
pub struct UniqueNames<L> {
    seen: HashMap<String, L>,
}

impl<L: Copy + PartialEq> UniqueNames<L> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            seen: HashMap::new(),
        }
    }

    /// Record `name` for `location`, returning the earlier declaration on a
    /// collision. The first declaration keeps ownership of the name.
    pub fn check(&mut self, name: &str, location: L) -> Result<(), L> {
        match self.seen.get(name) {
            Some(previous) if *previous != location => Err(*previous),
            Some(_) => Ok(()),
            None => {
                self.seen.insert(name.to_string(), location);
                Ok(())
            }
        }
    }
}

impl<L: Copy + PartialEq> Default for UniqueNames<L> {
    fn default() -> Self {
        Self::new()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn rejects_empty_long_and_non_ascii_names() {
        assert!(validate_class_name("").is_err());
        assert!(validate_class_name(&"A".repeat(MAX_CLASS_NAME_LEN + 1)).is_err());
        assert!(validate_class_name("Café").is_err());
        assert!(validate_class_name("Person").is_ok());

        assert!(validate_property_name("").is_err());
        assert!(validate_property_name(&"a".repeat(MAX_PROPERTY_NAME_LEN)).is_ok());
    }

    #[test]
    fn same_declaration_is_not_a_collision() {
        let mut names = UniqueNames::new();

        assert_eq!(names.check("id", 0), Ok(()));
        assert_eq!(names.check("id", 0), Ok(()));
        assert_eq!(names.check("id", 3), Err(0));
    }

    proptest! {
        #[test]
        fn collisions_match_distinct_declarations(names in prop::collection::vec("[a-c]{1,2}", 0..12)) {
            let mut unique = UniqueNames::new();
            let mut seen = HashSet::new();

            for (index, name) in names.iter().enumerate() {
                let collided = unique.check(name, index).is_err();
                prop_assert_eq!(collided, !seen.insert(name.clone()));

                // a recheck of the same declaration never adds an error
                if !collided {
                    prop_assert!(unique.check(name, index).is_ok());
                }
            }
        }
    }
}
