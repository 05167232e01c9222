#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::module_name_repetitions)]
#![deny(rustdoc::broken_intra_doc_links)]

//! A small library to tokenize JVM method descriptors such as `(ILjava/lang/String;[D)V` and to
//! compute where each argument of a call sits on the operand stack.
//!
//! ```
//! use jvm_descriptor::DescriptorParser;
//!
//! # fn main() -> Result<(), jvm_descriptor::Error> {
//! let parser = DescriptorParser::new("(IJLjava/lang/String;)V")?;
//! assert_eq!(parser.num_parameters()?, 3);
//! assert_eq!(parser.parameter(1)?, "J");
//! assert_eq!(parser.return_type()?, "V");
//! assert_eq!(parser.slots_from_top_of_stack(0)?, 3);
//! # Ok(())
//! # }
//! ```

pub mod descriptor;
mod errors;
pub(crate) mod macros;
pub mod types;

pub use descriptor::{
    DescriptorParser,
    invocation::{CallSite, num_parameters_for_invocation},
    parameters::Parameters,
};
pub use errors::{Error, Result};
pub use types::{is_reference_type, num_slots_for_type};

/// Test utilities
#[cfg(test)]
pub(crate) mod tests;
