//! Bridging method descriptors to call sites in bytecode.
use std::borrow::Cow;

use crate::{Error, Result};

use super::DescriptorParser;

/// A call site, such as an `invoke*` instruction, whose method descriptor is known once the
/// symbols it refers to are resolved in a `C`, typically a constant pool.
pub trait CallSite<C: ?Sized> {
    /// Resolves the descriptor of the invoked method, or returns [`None`] if it cannot be
    /// resolved in `context`.
    fn resolve_descriptor<'a>(&'a self, context: &'a C) -> Option<Cow<'a, str>>;
}

/// Counts the parameters passed by `call_site`.
/// # Errors
/// - [`Error::UnresolvedCallSite`] if the descriptor of the call site cannot be resolved.
/// - Any error from [`DescriptorParser::new`] and [`DescriptorParser::num_parameters`] on the
///   resolved descriptor.
pub fn num_parameters_for_invocation<S, C>(call_site: &S, context: &C) -> Result<usize>
where
    S: CallSite<C> + ?Sized,
    C: ?Sized,
{
    let descriptor = call_site
        .resolve_descriptor(context)
        .ok_or(Error::UnresolvedCallSite)?;
    DescriptorParser::new(descriptor.into_owned())?.num_parameters()
}
