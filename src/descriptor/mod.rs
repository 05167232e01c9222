//! Parsing of method descriptors.
use std::{str::FromStr, sync::OnceLock};

use crate::{
    Error, Result,
    macros::see_jvm_spec,
    types::{FieldType, ReturnType},
};

pub mod invocation;
pub mod offsets;
pub mod parameters;

use offsets::ParameterOffsets;
use parameters::Parameters;

/// A parser over a single method descriptor, e.g., `(ILjava/lang/String;[D)V`.
///
/// The parameter section is tokenized lazily, so grammar violations in it are reported by the
/// query that runs into them rather than on construction.
/// The operand stack offsets of the parameters are computed by the first query that needs them
/// and are shared by all later queries, including those from other threads.
#[doc = see_jvm_spec!(4, 3, 3)]
#[derive(Debug, Clone, derive_more::Display)]
#[display("{descriptor}")]
pub struct DescriptorParser {
    descriptor: String,
    offsets: OnceLock<ParameterOffsets>,
}

impl DescriptorParser {
    /// Creates a parser over `descriptor`.
    /// # Errors
    /// - [`Error::InvalidArgument`] if `descriptor` does not start with `(`.
    pub fn new<S: Into<String>>(descriptor: S) -> Result<Self> {
        let descriptor = descriptor.into();
        if !descriptor.starts_with('(') {
            return Err(Error::InvalidArgument { descriptor });
        }
        Ok(Self {
            descriptor,
            offsets: OnceLock::new(),
        })
    }

    /// Returns the underlying descriptor.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.descriptor
    }

    /// Returns a fresh cursor over the parameter type tokens, from the first parameter on.
    #[must_use]
    pub fn parameters(&self) -> Parameters<'_> {
        Parameters::new(&self.descriptor)
    }

    /// Returns the parameter types, decoded.
    pub fn parameter_types(&self) -> impl Iterator<Item = Result<FieldType<'_>>> + '_ {
        self.parameters()
            .map(|token| token.and_then(FieldType::parse))
    }

    /// Returns the return type token, i.e., everything after the last `)`.
    /// # Errors
    /// - [`Error::MalformedDescriptor`] if the descriptor has no `)`.
    pub fn return_type(&self) -> Result<&str> {
        self.descriptor
            .rfind(')')
            .map(|end_of_params| &self.descriptor[end_of_params + 1..])
            .ok_or_else(|| {
                Error::malformed(&self.descriptor, self.descriptor.len(), "missing ')'")
            })
    }

    /// Returns the return type, decoded.
    /// # Errors
    /// - [`Error::MalformedDescriptor`] if the descriptor has no `)` or the return type token
    ///   is invalid.
    pub fn parsed_return_type(&self) -> Result<ReturnType<'_>> {
        self.return_type().and_then(ReturnType::parse)
    }

    /// Counts the parameters.
    /// # Errors
    /// - [`Error::MalformedDescriptor`] if the parameter section is malformed.
    pub fn num_parameters(&self) -> Result<usize> {
        itertools::process_results(self.parameters(), |tokens| tokens.count())
    }

    /// Returns the type token of the parameter at `index`, counting from `0`.
    /// # Errors
    /// - [`Error::MalformedDescriptor`] if the parameter section is malformed up to `index`.
    /// - [`Error::IndexOutOfRange`] if there are not more than `index` parameters.
    pub fn parameter(&self, index: usize) -> Result<&str> {
        let mut count = 0;
        for token in self.parameters() {
            let token = token?;
            if count == index {
                return Ok(token);
            }
            count += 1;
        }
        Err(self.index_out_of_range(index, count))
    }

    /// Returns the operand stack offsets of the parameters, computing them on first use.
    /// # Errors
    /// - [`Error::MalformedDescriptor`] if the parameter section is malformed.
    pub fn parameter_offsets(&self) -> Result<&ParameterOffsets> {
        if let Some(offsets) = self.offsets.get() {
            return Ok(offsets);
        }
        let offsets = ParameterOffsets::compute(self.parameters())?;
        Ok(self.offsets.get_or_init(|| offsets))
    }

    /// Returns the number of slots between the top of the operand stack and the parameter at
    /// `index`, assuming all the arguments are pushed in order with the first one deepest.
    /// The last parameter is always `0` slots from the top.
    /// # Errors
    /// - [`Error::MalformedDescriptor`] if the parameter section is malformed.
    /// - [`Error::IndexOutOfRange`] if there are not more than `index` parameters.
    pub fn slots_from_top_of_stack(&self, index: usize) -> Result<usize> {
        let offsets = self.parameter_offsets()?;
        offsets
            .slots_from_top_of_stack(index)
            .ok_or_else(|| self.index_out_of_range(index, offsets.len()))
    }

    /// Returns the number of operand stack slots taken by all the arguments.
    /// # Errors
    /// - [`Error::MalformedDescriptor`] if the parameter section is malformed.
    pub fn total_argument_slots(&self) -> Result<usize> {
        self.parameter_offsets()
            .map(ParameterOffsets::total_argument_slots)
    }

    fn index_out_of_range(&self, index: usize, count: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            count,
            descriptor: self.descriptor.clone(),
        }
    }
}

impl FromStr for DescriptorParser {
    type Err = Error;

    fn from_str(descriptor: &str) -> Result<Self> {
        Self::new(descriptor)
    }
}

impl TryFrom<String> for DescriptorParser {
    type Error = Error;

    fn try_from(descriptor: String) -> Result<Self> {
        Self::new(descriptor)
    }
}

impl TryFrom<&str> for DescriptorParser {
    type Error = Error;

    fn try_from(descriptor: &str) -> Result<Self> {
        Self::new(descriptor)
    }
}
