//! Error types for this crate.

use std::fmt;

/// An insertion was rejected because the map was dehydrated.
///
/// A dehydrated [`BiSortedMap`] has its lookup indexes built and does not
/// accept new pairs. The rejected pair is carried inside the error so the
/// caller can recover it, [`hydrate`] the map, and retry.
///
/// [`BiSortedMap`]: crate::BiSortedMap
/// [`hydrate`]: crate::BiSortedMap::hydrate
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InsertError<K, V> {
    key: K,
    value: V,
}

impl<K, V> InsertError<K, V> {
    /// Creates a new `InsertError`.
    #[doc(hidden)]
    pub fn __internal_new(key: K, value: V) -> Self {
        InsertError { key, value }
    }

    /// Returns the key of the rejected pair.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value of the rejected pair.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Converts self into the rejected pair.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Display for InsertError<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "cannot insert ({:?}, {:?}) into a dehydrated map; \
             call hydrate() first",
            self.key, self.value
        )
    }
}

impl<K: fmt::Debug, V: fmt::Debug> std::error::Error for InsertError<K, V> {}
