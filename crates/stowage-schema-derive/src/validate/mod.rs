//! Rules over one collected class. Every violation is pushed to the
//! accumulator so a single compile reports all of them.

pub mod property;
pub mod table;

use crate::collect::PropertyTable;
use darling::error::Accumulator;

/// Per-property rules first, then the whole-table rules.
pub fn validate(table: &PropertyTable, acc: &mut Accumulator) {
    table::validate_class_name(table, acc);

    for property in &table.properties {
        property::validate_property(property, acc);
    }

    table::validate_primary_key(table, acc);
    table::validate_unique_names(table, acc);
}

///
/// TESTS
///
