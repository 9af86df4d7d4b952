use crate::prelude::*;
use syn::{GenericArgument, PathArguments, TypePath};

///
/// Shape
///
/// The persisted shape of one declared field type.
///

#[derive(Clone, Debug)]
pub struct Shape {
    pub ty: PropertyType,
    pub collection: CollectionType,

    /// Declared `Option` on the property, or on the element of a collection.
    pub optional: bool,

    /// Target class of an object link or backlink.
    pub target: Option<Type>,

    /// Narrow integers and `char` are stored as the 64-bit integer kind.
    pub adapted: bool,
}

impl Shape {
    const fn scalar(ty: PropertyType, collection: CollectionType, optional: bool) -> Self {
        Self {
            ty,
            collection,
            optional,
            target: None,
            adapted: false,
        }
    }

    /// `Mixed` carries its own null, so it is always reported nullable.
    pub fn nullable(&self) -> bool {
        self.optional || self.ty == PropertyType::Any
    }
}

///
/// Classified
///

#[derive(Clone, Debug)]
pub enum Classified {
    Property(Shape),
    /// Not stored state.
    Skip,
}

///
/// Wrapper
/// generic types the classifier looks through
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
enum Wrapper {
    Backlinks,
    Boxed,
    List,
    Map,
    Optional,
    Phantom,
    Set,
}

impl Wrapper {
    fn from_ident(ident: &str) -> Option<Self> {
        let wrapper = match ident {
            "Backlinks" => Self::Backlinks,
            "Box" => Self::Boxed,
            "Vec" => Self::List,
            "HashMap" | "BTreeMap" => Self::Map,
            "Option" => Self::Optional,
            "PhantomData" => Self::Phantom,
            "HashSet" | "BTreeSet" => Self::Set,
            _ => return None,
        };

        Some(wrapper)
    }

    const fn is_collection(self) -> bool {
        matches!(self, Self::List | Self::Map | Self::Set)
    }
}

/// Classify a declared field type. Errors are anchored at the offending
/// (sub)type and describe why it cannot be persisted.
pub fn classify(ty: &Type) -> Result<Classified, DarlingError> {
    let ty = peel(ty);
    let Some((wrapper, args)) = wrapper_of(ty) else {
        return value(ty, CollectionType::None, false).map(Classified::Property);
    };

    let shape = match wrapper {
        Wrapper::Phantom => return Ok(Classified::Skip),
        Wrapper::Backlinks => {
            let target = single_arg(ty, &args)?;
            Shape {
                target: Some(object_target(target)?.clone()),
                ..Shape::scalar(PropertyType::LinkingObjects, CollectionType::None, false)
            }
        }
        Wrapper::Optional => {
            let inner = peel(single_arg(ty, &args)?);
            match wrapper_of(inner) {
                Some((wrapper, _)) if wrapper.is_collection() && !is_bytes(inner) => {
                    return Err(DarlingError::custom(
                        "collections cannot be nullable; use an empty collection instead",
                    )
                    .with_span(ty));
                }
                _ => value(inner, CollectionType::None, true)?,
            }
        }
        Wrapper::List if is_bytes(ty) => {
            Shape::scalar(PropertyType::Binary, CollectionType::None, false)
        }
        Wrapper::List => element(single_arg(ty, &args)?, CollectionType::List)?,
        Wrapper::Set => element(single_arg(ty, &args)?, CollectionType::Set)?,
        Wrapper::Map => {
            let [key, item] = args.as_slice() else {
                return Err(DarlingError::custom("expected a key and a value type").with_span(ty));
            };
            if !is_string(key) {
                return Err(
                    DarlingError::custom("dictionary keys must be `String`").with_span(*key)
                );
            }
            element(item, CollectionType::Dictionary)?
        }
        Wrapper::Boxed => value(ty, CollectionType::None, false)?,
    };

    Ok(Classified::Property(shape))
}

// A collection element may be optional once before its value type.
fn element(ty: &Type, collection: CollectionType) -> Result<Shape, DarlingError> {
    let ty = peel(ty);
    match wrapper_of(ty) {
        Some((Wrapper::Optional, args)) => value(single_arg(ty, &args)?, collection, true),
        _ => value(ty, collection, false),
    }
}

// A value is a primitive, a byte blob, or an object link.
fn value(ty: &Type, collection: CollectionType, optional: bool) -> Result<Shape, DarlingError> {
    let ty = peel(ty);

    if let Some((wrapper, args)) = wrapper_of(ty) {
        return match wrapper {
            Wrapper::List if is_bytes(ty) => {
                Ok(Shape::scalar(PropertyType::Binary, collection, optional))
            }
            Wrapper::Boxed => Ok(link(
                object_target(single_arg(ty, &args)?)?,
                collection,
                optional,
            )),
            Wrapper::Optional => {
                Err(DarlingError::custom("nested `Option` is not supported").with_span(ty))
            }
            Wrapper::Backlinks => Err(DarlingError::custom(
                "`Backlinks` must be a plain field, not nullable or inside a collection",
            )
            .with_span(ty)),
            Wrapper::Phantom => {
                Err(DarlingError::custom("`PhantomData` cannot be persisted").with_span(ty))
            }
            Wrapper::List | Wrapper::Map | Wrapper::Set => {
                Err(DarlingError::custom("nested collections are not supported").with_span(ty))
            }
        };
    }

    let path = plain_path(ty)?;
    let ident = path
        .segments
        .last()
        .map(|segment| segment.ident.to_string())
        .unwrap_or_default();

    if let Some((primitive, adapted)) = primitive(&ident) {
        return Ok(Shape {
            adapted,
            ..Shape::scalar(primitive, collection, optional)
        });
    }
    if is_unsupported_primitive(&ident) {
        return Err(DarlingError::custom(format!(
            "`{ident}` cannot be persisted; integers are stored as 64-bit signed values"
        ))
        .with_span(ty));
    }

    Ok(link(ty, collection, optional))
}

fn link(target: &Type, collection: CollectionType, optional: bool) -> Shape {
    Shape {
        target: Some(target.clone()),
        ..Shape::scalar(PropertyType::Object, collection, optional)
    }
}

// Persisted primitives by type name, with whether the value is adapted.
fn primitive(ident: &str) -> Option<(PropertyType, bool)> {
    let primitive = match ident {
        "bool" => (PropertyType::Bool, false),
        "i8" | "i16" | "i32" | "u8" | "u16" | "u32" | "char" => (PropertyType::Int, true),
        "i64" => (PropertyType::Int, false),
        "f32" => (PropertyType::Float, false),
        "f64" => (PropertyType::Double, false),
        "String" => (PropertyType::String, false),
        "Timestamp" => (PropertyType::Timestamp, false),
        "Decimal128" => (PropertyType::Decimal128, false),
        "ObjectId" => (PropertyType::ObjectId, false),
        "Uuid" => (PropertyType::Uuid, false),
        "Mixed" => (PropertyType::Any, false),
        _ => return None,
    };

    Some(primitive)
}

fn is_unsupported_primitive(ident: &str) -> bool {
    matches!(
        ident,
        "u64" | "u128" | "i128" | "usize" | "isize" | "str"
    )
}

// Object link targets must be concrete, non-generic paths.
fn object_target(ty: &Type) -> Result<&Type, DarlingError> {
    let ty = peel(ty);
    plain_path(ty)?;

    if wrapper_of(ty).is_some() {
        return Err(DarlingError::custom("expected an object class").with_span(ty));
    }

    Ok(ty)
}

fn plain_path(ty: &Type) -> Result<&syn::Path, DarlingError> {
    let unsupported = || {
        DarlingError::custom(
            "unsupported field type; expected a primitive, a collection, or an object class",
        )
        .with_span(ty)
    };

    let Type::Path(TypePath { qself: None, path }) = ty else {
        return Err(unsupported());
    };
    if path
        .segments
        .iter()
        .any(|segment| !segment.arguments.is_none())
    {
        return Err(unsupported());
    }

    Ok(path)
}

fn wrapper_of(ty: &Type) -> Option<(Wrapper, Vec<&Type>)> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    let segment = path.segments.last()?;
    let wrapper = Wrapper::from_ident(&segment.ident.to_string())?;

    let args: Vec<&Type> = match &segment.arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    Some((wrapper, args))
}

fn single_arg<'a>(ty: &Type, args: &[&'a Type]) -> Result<&'a Type, DarlingError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(DarlingError::custom("expected exactly one type argument").with_span(ty)),
    }
}

fn peel(mut ty: &Type) -> &Type {
    loop {
        ty = match ty {
            Type::Group(group) => &group.elem,
            Type::Paren(paren) => &paren.elem,
            _ => return ty,
        };
    }
}

fn is_named(ty: &Type, name: &str) -> bool {
    matches!(
        peel(ty),
        Type::Path(TypePath { qself: None, path }) if path.is_ident(name)
    )
}

fn is_string(ty: &Type) -> bool {
    matches!(
        peel(ty),
        Type::Path(TypePath { qself: None, path })
            if path.segments.last().is_some_and(|s| s.ident == "String" && s.arguments.is_none())
    )
}

// `Vec<u8>` is the blob form, not a list of bytes.
fn is_bytes(ty: &Type) -> bool {
    match wrapper_of(ty) {
        Some((Wrapper::List, args)) => matches!(args.as_slice(), [arg] if is_named(arg, "u8")),
        _ => false,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn shape(ty: Type) -> Shape {
        match classify(&ty) {
            Ok(Classified::Property(shape)) => shape,
            Ok(Classified::Skip) => panic!("unexpected skip"),
            Err(err) => panic!("unexpected error: {err}"),
        }
    }

    fn rejects(ty: Type) -> String {
        match classify(&ty) {
            Err(err) => err.to_string(),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn primitives_collapse_integer_widths() {
        for ty in [parse_quote!(i8), parse_quote!(u32), parse_quote!(char)] {
            let shape = shape(ty);
            assert_eq!(shape.ty, PropertyType::Int);
            assert!(shape.adapted);
        }

        let native = shape(parse_quote!(i64));
        assert_eq!(native.ty, PropertyType::Int);
        assert!(!native.adapted);
        assert_eq!(shape(parse_quote!(f32)).ty, PropertyType::Float);
        assert_eq!(shape(parse_quote!(stowage::schema::value::Uuid)).ty, PropertyType::Uuid);
    }

    #[test]
    fn options_and_blobs() {
        let name = shape(parse_quote!(Option<String>));
        assert_eq!(name.ty, PropertyType::String);
        assert!(name.nullable());

        let blob = shape(parse_quote!(Option<Vec<u8>>));
        assert_eq!(blob.ty, PropertyType::Binary);
        assert_eq!(blob.collection, CollectionType::None);
        assert!(blob.nullable());

        assert!(shape(parse_quote!(Mixed)).nullable());
    }

    #[test]
    fn collections_carry_their_element() {
        let tags = shape(parse_quote!(Vec<String>));
        assert_eq!((tags.ty, tags.collection), (PropertyType::String, CollectionType::List));

        let scores = shape(parse_quote!(BTreeSet<Option<i64>>));
        assert_eq!(scores.collection, CollectionType::Set);
        assert!(scores.nullable());

        let owners = shape(parse_quote!(HashMap<String, Option<Person>>));
        assert_eq!((owners.ty, owners.collection), (PropertyType::Object, CollectionType::Dictionary));
        assert!(owners.optional);
        assert!(owners.target.is_some());
    }

    #[test]
    fn links_and_backlinks_keep_their_target() {
        let boxed = shape(parse_quote!(Option<Box<Node>>));
        assert_eq!(boxed.ty, PropertyType::Object);
        assert_eq!(boxed.target, Some(parse_quote!(Node)));

        let pets = shape(parse_quote!(Backlinks<Pet>));
        assert_eq!(pets.ty, PropertyType::LinkingObjects);
        assert_eq!(pets.target, Some(parse_quote!(Pet)));
        assert!(!pets.nullable());
    }

    #[test]
    fn phantom_data_is_not_stored() {
        let ty: Type = parse_quote!(std::marker::PhantomData<u8>);
        assert!(matches!(classify(&ty), Ok(Classified::Skip)));
    }

    #[test]
    fn unsupported_shapes_are_errors() {
        assert!(rejects(parse_quote!(u64)).contains("64-bit"));
        assert!(rejects(parse_quote!(Option<Vec<String>>)).contains("cannot be nullable"));
        assert!(rejects(parse_quote!(Vec<Vec<String>>)).contains("nested collections"));
        assert!(rejects(parse_quote!(Option<Option<i64>>)).contains("nested `Option`"));
        assert!(rejects(parse_quote!(HashMap<i64, String>)).contains("keys must be `String`"));
        assert!(rejects(parse_quote!(Vec<Backlinks<Pet>>)).contains("`Backlinks`"));
        assert!(rejects(parse_quote!(&'static str)).contains("unsupported field type"));
        assert!(rejects(parse_quote!((i64, i64))).contains("unsupported field type"));
        assert!(rejects(parse_quote!(Wrapper<i64>)).contains("unsupported field type"));
    }
}
