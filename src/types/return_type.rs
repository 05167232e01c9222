//! Return types of methods.
use std::fmt::Display;

use crate::Result;

use super::field_type::FieldType;

/// Denotes the return type of a method.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum ReturnType<'a> {
    /// The method returns a specific type.
    Some(FieldType<'a>),
    /// The return type of the method is `void`.
    Void,
}

impl<'a> ReturnType<'a> {
    /// Parses a return type token, i.e., a field type token or `V`.
    /// # Errors
    /// - [`Error::MalformedDescriptor`](crate::Error::MalformedDescriptor) if `token` is neither
    ///   `V` nor exactly one field type.
    pub fn parse(token: &'a str) -> Result<Self> {
        if token == "V" {
            Ok(Self::Void)
        } else {
            FieldType::parse(token).map(Self::Some)
        }
    }

    /// Returns the number of operand stack slots the returned value occupies.
    #[must_use]
    pub fn slot_width(&self) -> usize {
        match self {
            Self::Some(it) => it.slot_width(),
            Self::Void => 0,
        }
    }
}

impl Display for ReturnType<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnType::Some(t) => t.fmt(f),
            ReturnType::Void => write!(f, "void"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::PrimitiveType;

    #[test]
    fn void() {
        assert_eq!(ReturnType::parse("V"), Ok(ReturnType::Void));
        assert_eq!(ReturnType::Void.slot_width(), 0);
        assert_eq!(ReturnType::Void.to_string(), "void");
    }

    #[test]
    fn wide_return_type() {
        let return_type = ReturnType::parse("D").expect("Failed to parse return type");
        assert_eq!(return_type, ReturnType::Some(FieldType::Base(PrimitiveType::Double)));
        assert_eq!(return_type.slot_width(), 2);
    }

    #[test]
    fn too_many_return_types() {
        assert!(ReturnType::parse("VV").is_err());
        assert!(ReturnType::parse("IJ").is_err());
    }

    #[test]
    fn missing_return_type() {
        assert!(ReturnType::parse("").is_err());
    }
}
