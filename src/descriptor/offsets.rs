//! Operand stack offsets of method parameters.
use crate::{Result, types::num_slots_for_type};

use super::parameters::Parameters;

/// The cumulative operand stack widths of the parameters of a method.
///
/// Entry `i` is the total number of slots taken by parameters `0..=i`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ParameterOffsets {
    cumulative_widths: Vec<usize>,
    total_argument_slots: usize,
}

impl ParameterOffsets {
    /// Builds the table in a single pass over `parameters`.
    /// # Errors
    /// Any error produced by the tokenizer.
    pub(super) fn compute(parameters: Parameters<'_>) -> Result<Self> {
        let cumulative_widths: Vec<usize> = itertools::process_results(parameters, |tokens| {
            tokens
                .map(num_slots_for_type)
                .scan(0, |total, width| {
                    *total += width;
                    Some(*total)
                })
                .collect()
        })?;
        let total_argument_slots = cumulative_widths.last().copied().unwrap_or(0);
        log::trace!(
            "Computed offsets of {} parameter(s) taking {total_argument_slots} slot(s)",
            cumulative_widths.len()
        );
        Ok(Self {
            cumulative_widths,
            total_argument_slots,
        })
    }

    /// The number of slots taken by all the parameters.
    #[must_use]
    pub fn total_argument_slots(&self) -> usize {
        self.total_argument_slots
    }

    /// The cumulative widths, one entry per parameter.
    #[must_use]
    pub fn cumulative_widths(&self) -> &[usize] {
        &self.cumulative_widths
    }

    /// The number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cumulative_widths.len()
    }

    /// Checks whether the method takes no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cumulative_widths.is_empty()
    }

    /// The number of slots between the top of the stack and the parameter at `index`, or
    /// [`None`] if there is no such parameter.
    #[must_use]
    pub fn slots_from_top_of_stack(&self, index: usize) -> Option<usize> {
        self.cumulative_widths
            .get(index)
            .map(|width| self.total_argument_slots - width)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn offsets(descriptor: &str) -> ParameterOffsets {
        ParameterOffsets::compute(Parameters::new(descriptor)).expect("Failed to compute offsets")
    }

    #[test]
    fn wide_parameters() {
        let offsets = offsets("(IJD)V");
        assert_eq!(offsets.cumulative_widths(), &[1, 3, 5]);
        assert_eq!(offsets.total_argument_slots(), 5);
        assert_eq!(offsets.slots_from_top_of_stack(0), Some(4));
        assert_eq!(offsets.slots_from_top_of_stack(1), Some(2));
        assert_eq!(offsets.slots_from_top_of_stack(2), Some(0));
        assert_eq!(offsets.slots_from_top_of_stack(3), None);
    }

    #[test]
    fn arrays_take_one_slot() {
        let offsets = offsets("([J[DLjava/lang/Long;)V");
        assert_eq!(offsets.cumulative_widths(), &[1, 2, 3]);
    }

    #[test]
    fn no_parameters() {
        let offsets = offsets("()J");
        assert!(offsets.is_empty());
        assert_eq!(offsets.total_argument_slots(), 0);
        assert_eq!(offsets.slots_from_top_of_stack(0), None);
    }

    #[test]
    fn malformed_parameters() {
        assert!(ParameterOffsets::compute(Parameters::new("(ILjava/lang)V")).is_err());
    }
}
