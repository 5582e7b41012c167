//! A sorted permutation of slot indexes with an external comparator.

use crate::internal::TableValidationError;
use std::cmp::Ordering;

/// A permutation of slot indexes kept sorted under a caller-supplied
/// ordering.
///
/// The table does not store keys. Every comparison goes through a closure,
/// so one table can index either half of an externally owned pair store.
#[derive(Clone, Debug, Default)]
pub(crate) struct SortedTable {
    slots: Vec<usize>,
}

impl SortedTable {
    /// Builds the identity permutation of `[0, len)` and sorts it.
    ///
    /// The sort is stable, so runs of equal elements stay in ascending slot
    /// order. `find_index` relies on this to resolve duplicates to the
    /// earliest slot.
    pub(crate) fn build<F>(len: usize, mut cmp: F) -> Self
    where
        F: FnMut(usize, usize) -> Ordering,
    {
        let mut slots: Vec<usize> = (0..len).collect();
        slots.sort_by(|&a, &b| cmp(a, b));
        Self { slots }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Finds the slot matching a probe via lower-bound binary search.
    ///
    /// `probe_cmp(slot)` must return the ordering of the probe relative to
    /// the element stored at `slot`. Returns the first matching slot in
    /// sorted order, or `None` if nothing compares equal.
    pub(crate) fn find_index<F>(&self, mut probe_cmp: F) -> Option<usize>
    where
        F: FnMut(usize) -> Ordering,
    {
        // partition_point returns the first sorted position whose element
        // is not less than the probe. That position is one past the end
        // when the probe is greater than every element, or when the table
        // is empty, so the fetch has to be guarded.
        let pos = self
            .slots
            .partition_point(|&slot| probe_cmp(slot) == Ordering::Greater);
        let &slot = self.slots.get(pos)?;
        (probe_cmp(slot) == Ordering::Equal).then_some(slot)
    }

    pub(crate) fn validate<F>(
        &self,
        expected_len: usize,
        mut cmp: F,
    ) -> Result<(), TableValidationError>
    where
        F: FnMut(usize, usize) -> Ordering,
    {
        if self.len() != expected_len {
            return Err(TableValidationError::new(format!(
                "expected length {expected_len}, was {}",
                self.len()
            )));
        }

        // The table must be a permutation of 0..len.
        let mut seen = self.slots.clone();
        seen.sort_unstable();
        for (i, slot) in seen.iter().enumerate() {
            if *slot != i {
                return Err(TableValidationError::new(format!(
                    "expected slot at sorted position {i} to be {i}, \
                     was {slot}"
                )));
            }
        }

        // Sorted, with runs of equal elements in ascending slot order.
        for pair in self.slots.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            match cmp(a, b) {
                Ordering::Less => {}
                Ordering::Equal if a < b => {}
                Ordering::Equal => {
                    return Err(TableValidationError::new(format!(
                        "equal elements out of slot order: \
                         {a} sorts before {b}"
                    )));
                }
                Ordering::Greater => {
                    return Err(TableValidationError::new(format!(
                        "elements out of order: slot {a} sorts after \
                         slot {b}"
                    )));
                }
            }
        }

        Ok(())
    }
}
