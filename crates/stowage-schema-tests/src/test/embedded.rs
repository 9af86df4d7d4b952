use crate::prelude::*;

///
/// Address
///

#[derive(Clone, Debug, Default, Object, PartialEq)]
#[object(kind = "embedded")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postcode: Option<String>,
}

///
/// Contact
///

#[derive(Debug, Default, Object)]
pub struct Contact {
    #[persisted(primary_key)]
    pub id: ObjectId,

    pub home: Option<Address>,
    pub previous: Vec<Address>,
}

///
/// Reading
/// append-only sensor data
///

#[derive(Debug, Default, Object)]
#[object(kind = "asymmetric")]
pub struct Reading {
    #[persisted(primary_key)]
    pub id: Uuid,

    pub taken_at: Timestamp,
    pub value: f64,
    pub site: Option<Address>,
    pub raw: Option<Vec<u8>>,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_property;

    #[test]
    fn embedded_classes_have_no_primary_key() {
        assert_eq!(Address::CLASS_KIND, ClassKind::Embedded);
        assert_eq!(Address::SCHEMA.primary_key, None);
        assert!(Address::PRIMARY_KEY.is_none());
    }

    #[test]
    fn links_to_embedded_classes() {
        let home = assert_property!(Contact::SCHEMA, "home", PropertyType::Object, CollectionType::None);
        assert_eq!(home.link_target, Some("Address"));
        assert!(home.nullable);

        let previous = assert_property!(
            Contact::SCHEMA,
            "previous",
            PropertyType::Object,
            CollectionType::List
        );
        assert_eq!(previous.link_target, Some("Address"));
        assert!(!previous.nullable);
    }

    #[test]
    fn asymmetric_classes_link_to_embedded_objects() {
        assert_eq!(Reading::CLASS_KIND, ClassKind::Asymmetric);
        assert_eq!(Reading::SCHEMA.primary_key, Some("id"));

        let targets = Reading::SCHEMA
            .link_targets()
            .map(|(property, target)| (property.name, target))
            .collect::<Vec<_>>();
        assert_eq!(targets, [("site", "Address")]);

        let raw = assert_property!(Reading::SCHEMA, "raw", PropertyType::Binary, CollectionType::None);
        assert!(raw.nullable);
        assert_property!(Reading::SCHEMA, "value", PropertyType::Double, CollectionType::None);
    }

    #[test]
    fn embedded_values_are_written_through_accessors() {
        let mut contact = Contact::new_instance();
        let address = Address {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            postcode: None,
        };

        Contact::accessor("home")
            .expect("home accessor")
            .write(&mut contact, Some(address.clone()))
            .expect("write home");

        assert_eq!(contact.home, Some(address));
    }
}
