//! Module containing the JVM type tokens found in method descriptors.
pub mod field_type;
pub mod return_type;

pub use field_type::{FieldType, PrimitiveType};
pub use return_type::ReturnType;

/// Determines whether the type token denotes a reference type, i.e., a class or an array.
#[must_use]
pub fn is_reference_type(token: &str) -> bool {
    token.starts_with(['L', '['])
}

/// Returns the number of operand stack slots a value of the type token occupies.
/// `long` and `double` take two slots, while any other type takes one.
#[must_use]
pub fn num_slots_for_type(token: &str) -> usize {
    match token {
        "J" | "D" => 2,
        _ => 1,
    }
}
