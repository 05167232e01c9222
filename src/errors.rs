/// An error that occurs when parsing or querying a method descriptor.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum Error {
    /// The input cannot be a method descriptor since it does not start with `(`.
    #[error("Bad method signature: {descriptor}")]
    InvalidArgument {
        /// The rejected input.
        descriptor: String,
    },
    /// The descriptor violates the descriptor grammar.
    #[error("Invalid method signature {descriptor} at position {position}: {reason}")]
    MalformedDescriptor {
        /// The descriptor being parsed.
        descriptor: String,
        /// The byte offset where the violation was detected.
        position: usize,
        /// What was wrong.
        reason: &'static str,
    },
    /// A parameter index is not smaller than the number of parameters.
    #[error("Asked for parameter {index} of {descriptor}, which has {count} parameter(s)")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of parameters in the descriptor.
        count: usize,
        /// The descriptor being queried.
        descriptor: String,
    },
    /// The call site could not produce a descriptor in the given context.
    #[error("Cannot resolve the descriptor of the call site")]
    UnresolvedCallSite,
}

impl Error {
    pub(crate) fn malformed(descriptor: &str, position: usize, reason: &'static str) -> Self {
        log::debug!("Malformed descriptor {descriptor:?} at {position}: {reason}");
        Self::MalformedDescriptor {
            descriptor: descriptor.to_owned(),
            position,
            reason,
        }
    }
}

/// A specialized [`Result`](std::result::Result) for descriptor operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
