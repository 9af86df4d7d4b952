//! Runtime lookups through the process-wide registration table, which every
//! class in this crate joins at startup.

#[cfg(test)]
mod tests {
    use crate::{
        prelude::*,
        test::{
            backlink::{Owner, Pet},
            catalog::Item,
            constructor::Counter,
            embedded::{Address, Contact, Reading},
            person::Person,
            tree::Node,
        },
    };
    use stowage::schema::{build::register, validate::validate_schemas};

    const CLASSES: [&str; 9] = [
        "Address",
        "CatalogItem",
        "Contact",
        "Counter",
        "Node",
        "Owner",
        "Person",
        "Pet",
        "Reading",
    ];

    #[test]
    fn every_class_is_registered_and_valid() {
        let registry = get_schema().expect("fixture schema is valid");

        for class in CLASSES {
            assert!(registry.contains(class), "'{class}' is not registered");
        }
        assert!(registry.conflicts().is_empty());
    }

    #[test]
    fn fixture_schemas_validate_together() {
        let errors = validate_schemas([
            Address::SCHEMA,
            Contact::SCHEMA,
            Counter::SCHEMA,
            Item::SCHEMA,
            Node::SCHEMA,
            Owner::SCHEMA,
            Person::SCHEMA,
            Pet::SCHEMA,
            Reading::SCHEMA,
        ]);

        assert!(errors.is_empty(), "{errors}");
    }

    #[test]
    fn backlinks_without_their_origin_class_fail_validation() {
        let errors = validate_schemas([Pet::SCHEMA]);

        assert!(!errors.is_empty());
        assert!(errors.to_string().contains("Owner"), "{errors}");
    }

    #[test]
    fn registering_again_is_a_no_op() {
        let before = get_schema().expect("valid").len();

        register::<Person>();
        register::<Person>();

        assert_eq!(get_schema().expect("valid").len(), before);
        assert!(get_schema().expect("valid").conflicts().is_empty());
    }

    #[test]
    fn lookup_by_class_name_and_type() {
        let by_name = lookup("CatalogItem").expect("catalog item");
        let by_type = companion_of::<Item>().expect("catalog item");

        assert_eq!(by_name.type_id, by_type.type_id);
        assert_eq!(by_name.kind(), ClassKind::Standard);
        assert_eq!(by_name.schema, Item::SCHEMA);
        assert_eq!(by_name.adapted_properties, ["grade", "stock"]);
    }

    #[test]
    fn unknown_classes_are_reported() {
        assert!(matches!(
            lookup("Missing"),
            Err(RegistryError::UnknownClass(class)) if class == "Missing"
        ));
        assert!(create_instance_of("Missing").is_err());
    }

    #[test]
    fn instances_are_created_by_class_name() {
        let instance = create_instance_of("Counter").expect("counter");
        let counter = instance.downcast::<Counter>().expect("a Counter");

        assert_eq!(counter.name, "unnamed");
    }

    #[test]
    fn erased_accessors_dispatch_by_property_name() {
        let registration = lookup("Person").expect("person");
        let mut instance = registration.new_instance();

        registration
            .set(&mut *instance, "years", Box::new(30u8))
            .expect("write age");
        let age = registration.get(&*instance, "age").expect("read age");
        assert_eq!(age.downcast_ref::<u8>(), Some(&30));

        assert_eq!(
            registration.set(&mut *instance, "missing", Box::new(0i64)),
            Err(AccessError::UnknownProperty {
                class: "Person",
                property: "missing".to_string(),
            })
        );
    }

    #[test]
    fn erased_accessors_check_the_instance_class() {
        let registration = lookup("Person").expect("person");
        let counter: Box<dyn std::any::Any> = Box::new(Counter::unnamed());

        assert!(matches!(
            registration.get(&*counter, "id"),
            Err(AccessError::InstanceMismatch { class: "Person" })
        ));
    }
}
