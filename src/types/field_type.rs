//! Field types, i.e., the types a parameter of a method can have.
use std::fmt::Display;

use crate::{Error, Result, macros::see_jvm_spec};

/// A primitive type in Java.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PrimitiveType {
    /// The `boolean` type.
    #[display("boolean")]
    Boolean,
    /// The `char` type.
    #[display("char")]
    Char,
    /// The `float` type.
    #[display("float")]
    Float,
    /// The `double` type.
    #[display("double")]
    Double,
    /// The `byte` type.
    #[display("byte")]
    Byte,
    /// The `short` type.
    #[display("short")]
    Short,
    /// The `int` type.
    #[display("int")]
    Int,
    /// The `long` type.
    #[display("long")]
    Long,
}

impl PrimitiveType {
    /// Gets the primitive type denoted by a descriptor character.
    #[must_use]
    pub const fn from_descriptor(descriptor: char) -> Option<Self> {
        match descriptor {
            'Z' => Some(Self::Boolean),
            'C' => Some(Self::Char),
            'F' => Some(Self::Float),
            'D' => Some(Self::Double),
            'B' => Some(Self::Byte),
            'S' => Some(Self::Short),
            'I' => Some(Self::Int),
            'J' => Some(Self::Long),
            _ => None,
        }
    }

    /// Returns the descriptor character of the primitive type.
    #[must_use]
    pub const fn descriptor(self) -> char {
        match self {
            Self::Boolean => 'Z',
            Self::Char => 'C',
            Self::Float => 'F',
            Self::Double => 'D',
            Self::Byte => 'B',
            Self::Short => 'S',
            Self::Int => 'I',
            Self::Long => 'J',
        }
    }

    /// Returns the number of operand stack slots a value of this type occupies.
    #[must_use]
    pub const fn slot_width(self) -> usize {
        match self {
            Self::Long | Self::Double => 2,
            _ => 1,
        }
    }
}

/// A field type borrowed from a descriptor.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum FieldType<'a> {
    /// A primitive type.
    Base(PrimitiveType),
    /// A class type, holding its binary name (e.g., `java/lang/String`).
    Object(&'a str),
    /// An array type with the given element type.
    Array(Box<FieldType<'a>>),
}

impl<'a> FieldType<'a> {
    /// Parses a single type token such as `I`, `Ljava/lang/String;`, or `[[D`.
    /// The whole token must be consumed.
    /// # Errors
    /// - [`Error::MalformedDescriptor`] if `token` is not exactly one field type.
    pub fn parse(token: &'a str) -> Result<Self> {
        let dimensions = token.bytes().take_while(|it| *it == b'[').count();
        let element = &token[dimensions..];
        let mut chars = element.chars();
        let element_type = match chars.next() {
            Some('L') => match chars.as_str().split_once(';') {
                Some((binary_name, "")) => Self::Object(binary_name),
                Some((_, rest)) => Err(Error::malformed(
                    token,
                    token.len() - rest.len(),
                    "unexpected characters after class type",
                ))?,
                None => Err(Error::malformed(token, token.len(), "unterminated class type"))?,
            },
            Some(c) if chars.as_str().is_empty() => PrimitiveType::from_descriptor(c)
                .map(Self::Base)
                .ok_or_else(|| Error::malformed(token, dimensions, "unknown primitive type"))?,
            Some(_) => Err(Error::malformed(
                token,
                dimensions + 1,
                "unexpected characters after primitive type",
            ))?,
            None => Err(Error::malformed(token, dimensions, "missing element type"))?,
        };
        Ok(Self::array_of(element_type, dimensions))
    }

    /// Creates an array type with `dimensions` dimensions of `element_type`.
    #[must_use]
    pub fn array_of(element_type: Self, dimensions: usize) -> Self {
        (0..dimensions).fold(element_type, |it, _| it.into_array_type())
    }

    /// Wraps the type into a one-dimension-deeper array type.
    #[must_use]
    pub fn into_array_type(self) -> Self {
        Self::Array(Box::new(self))
    }

    /// Checks whether the type is a class or an array type.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        !matches!(self, Self::Base(_))
    }

    /// Returns the number of array dimensions, `0` for non-array types.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        match self {
            Self::Array(inner) => 1 + inner.dimensions(),
            _ => 0,
        }
    }

    /// Returns the number of operand stack slots a value of this type occupies.
    #[must_use]
    pub fn slot_width(&self) -> usize {
        match self {
            Self::Base(it) => it.slot_width(),
            Self::Object(_) | Self::Array(_) => 1,
        }
    }
}

impl Display for FieldType<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(it) => it.fmt(f),
            Self::Object(binary_name) => write!(f, "{}", binary_name.replace('/', ".")),
            Self::Array(inner) => write!(f, "{inner}[]"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    use crate::tests::arb_field_type_token;

    proptest! {
        #[test]
        fn primitive_descriptor(prim in any::<PrimitiveType>()) {
            prop_assert_eq!(PrimitiveType::from_descriptor(prim.descriptor()), Some(prim));
        }

        #[test]
        fn array_dimensions(token in arb_field_type_token()) {
            let field_type = FieldType::parse(&token).expect("Failed to parse field type");
            let dimensions = token.bytes().take_while(|it| *it == b'[').count();
            prop_assert_eq!(field_type.dimensions(), dimensions);
        }
    }

    #[test]
    fn parse_class_type() {
        assert_eq!(
            FieldType::parse("Ljava/lang/String;"),
            Ok(FieldType::Object("java/lang/String"))
        );
    }

    #[test]
    fn parse_nested_array() {
        let field_type = FieldType::parse("[[J").expect("Failed to parse field type");
        assert_eq!(
            field_type,
            FieldType::array_of(FieldType::Base(PrimitiveType::Long), 2)
        );
        assert_eq!(field_type.slot_width(), 1);
        assert_eq!(field_type.to_string(), "long[][]");
    }

    #[test]
    fn display_class_type() {
        let field_type = FieldType::parse("[Ljava/util/Map$Entry;").expect("Failed to parse");
        assert_eq!(field_type.to_string(), "java.util.Map$Entry[]");
    }

    #[test]
    fn wide_primitives() {
        assert_eq!(PrimitiveType::Long.slot_width(), 2);
        assert_eq!(PrimitiveType::Double.slot_width(), 2);
        assert_eq!(PrimitiveType::Int.slot_width(), 1);
    }

    #[test]
    fn missing_semicolon() {
        assert!(matches!(
            FieldType::parse("Ljava/lang/Object"),
            Err(Error::MalformedDescriptor { .. })
        ));
    }

    #[test]
    fn trailing_characters() {
        assert!(FieldType::parse("Ljava/lang/Object;I").is_err());
        assert!(FieldType::parse("II").is_err());
    }

    #[test]
    fn void_is_not_a_field_type() {
        assert!(FieldType::parse("V").is_err());
        assert!(FieldType::parse("[V").is_err());
    }

    #[test]
    fn incomplete_array() {
        assert!(FieldType::parse("[[").is_err());
        assert!(FieldType::parse("").is_err());
    }
}
