use crate::prelude::*;
use darling::FromMeta;
use derive_more::{Display, FromStr};
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};

///
/// PropertyType
///
/// Closed set of persisted value kinds. Every integer width collapses to `Int`.
///

#[derive(Clone, Copy, Debug, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
pub enum PropertyType {
    Any,
    Binary,
    Bool,
    Decimal128,
    Double,
    Float,
    Int,
    LinkingObjects,
    Object,
    ObjectId,
    String,
    Timestamp,
    Uuid,
}

impl PropertyType {
    pub const PRIMARY_KEY_TYPES: &'static [Self] =
        &[Self::Int, Self::String, Self::ObjectId, Self::Uuid];

    pub const INDEXABLE_TYPES: &'static [Self] = &[
        Self::Bool,
        Self::Int,
        Self::String,
        Self::Timestamp,
        Self::ObjectId,
        Self::Uuid,
        Self::Any,
    ];

    pub const FULL_TEXT_TYPES: &'static [Self] = &[Self::String];

    #[must_use]
    pub const fn supports_primary_key(self) -> bool {
        matches!(self, Self::Int | Self::String | Self::ObjectId | Self::Uuid)
    }

    #[must_use]
    pub const fn supports_index(self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Int
                | Self::String
                | Self::Timestamp
                | Self::ObjectId
                | Self::Uuid
                | Self::Any
        )
    }

    #[must_use]
    pub const fn supports_full_text(self) -> bool {
        matches!(self, Self::String)
    }

    /// Object links and backlinks both carry a link target.
    #[must_use]
    pub const fn is_link(self) -> bool {
        matches!(self, Self::Object | Self::LinkingObjects)
    }

    #[must_use]
    pub const fn is_object(self) -> bool {
        matches!(self, Self::Object)
    }

    #[must_use]
    pub const fn is_linking_objects(self) -> bool {
        matches!(self, Self::LinkingObjects)
    }
}

impl ToTokens for PropertyType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ident = format_ident!("{self}");

        tokens.extend(quote!(::stowage::schema::types::PropertyType::#ident));
    }
}

///
/// CollectionType
///

#[derive(
    Clone, Copy, Debug, Default, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum CollectionType {
    #[default]
    None,
    List,
    Set,
    Dictionary,
}

impl CollectionType {
    #[must_use]
    pub const fn is_collection(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl ToTokens for CollectionType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ident = format_ident!("{self}");

        tokens.extend(quote!(::stowage::schema::types::CollectionType::#ident));
    }
}

///
/// ClassKind
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq, Serialize)]
pub enum ClassKind {
    #[default]
    Standard,
    Embedded,
    Asymmetric,
}

impl ClassKind {
    #[must_use]
    pub const fn is_embedded(self) -> bool {
        matches!(self, Self::Embedded)
    }

    #[must_use]
    pub const fn is_asymmetric(self) -> bool {
        matches!(self, Self::Asymmetric)
    }

    /// Asymmetric classes may only link to embedded classes, and nothing else
    /// may link to an asymmetric class.
    #[must_use]
    pub const fn may_link_to(self, target: Self) -> bool {
        if self.is_asymmetric() {
            target.is_embedded()
        } else {
            !target.is_asymmetric()
        }
    }

    /// Parse the lowercase attribute spelling (`standard`, `embedded`, `asymmetric`).
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "standard" | "Standard" => Some(Self::Standard),
            "embedded" | "Embedded" => Some(Self::Embedded),
            "asymmetric" | "Asymmetric" => Some(Self::Asymmetric),
            _ => None,
        }
    }
}

impl FromMeta for ClassKind {
    fn from_string(s: &str) -> Result<Self, darling::Error> {
        Self::from_name(s).ok_or_else(|| darling::Error::unknown_value(s))
    }
}

impl ToTokens for ClassKind {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ident = format_ident!("{self}");

        tokens.extend(quote!(::stowage::schema::types::ClassKind::#ident));
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_type_tables_agree_with_predicates() {
        for ty in PropertyType::PRIMARY_KEY_TYPES {
            assert!(ty.supports_primary_key(), "{ty} should be a primary key type");
        }
        for ty in PropertyType::INDEXABLE_TYPES {
            assert!(ty.supports_index(), "{ty} should be indexable");
        }
        assert!(!PropertyType::Double.supports_index());
        assert!(!PropertyType::Timestamp.supports_primary_key());
        assert!(!PropertyType::Any.supports_full_text());
    }

    #[test]
    fn asymmetric_containment() {
        use ClassKind::*;

        assert!(Asymmetric.may_link_to(Embedded));
        assert!(!Asymmetric.may_link_to(Standard));
        assert!(!Asymmetric.may_link_to(Asymmetric));
        assert!(Standard.may_link_to(Embedded));
        assert!(Embedded.may_link_to(Standard));
        assert!(!Standard.may_link_to(Asymmetric));
        assert!(!Embedded.may_link_to(Asymmetric));
    }

    #[test]
    fn class_kind_parses_attribute_spelling() {
        assert_eq!(ClassKind::from_name("embedded"), Some(ClassKind::Embedded));
        assert_eq!(ClassKind::from_name("realm"), None);
    }

    #[test]
    fn tokens_use_facade_paths() {
        let ty = PropertyType::ObjectId;
        let tokens = quote!(#ty).to_string();
        assert!(tokens.contains("PropertyType :: ObjectId"), "{tokens}");
    }
}
