use super::{tables::BiSortedMapTables, IntoIter, Iter};
use crate::{errors::InsertError, internal::ValidationError};
use derive_where::derive_where;
use equivalent::Comparable;
use std::{cmp::Ordering, fmt};

/// A bidirectional map for lookups by key and by value.
///
/// Pairs are stored exactly once, in insertion order, in an append-only
/// backing store. Each direction gets a permutation of slot indexes into
/// that store, sorted by key on one side and by value on the other, so no
/// second copy of any key or value is ever stored.
///
/// The map is always in one of two states:
///
/// - **Hydrated** (the initial state): the indexes are absent and
///   [`insert`](Self::insert) is legal.
/// - **Dehydrated**: the indexes are built, lookups run in O(log n), and
///   inserts are rejected until [`hydrate`](Self::hydrate) discards the
///   indexes again.
///
/// [`find_value`](Self::find_value) and [`find_key`](Self::find_key)
/// dehydrate the map on the first use after a mutation, which is why they
/// take `&mut self`. Once the map is dehydrated,
/// [`get_value`](Self::get_value) and [`get_key`](Self::get_key) perform
/// the same lookups through a shared reference.
///
/// # Duplicates
///
/// Duplicate keys (and duplicate values) are accepted. Lookups resolve to
/// the first-inserted pair among equals, and this is guaranteed: the index
/// sort is stable over insertion order.
///
/// # Examples
///
/// ```
/// use twindex::BiSortedMap;
///
/// let mut map = BiSortedMap::new();
/// map.insert("ar", "Arabic").unwrap();
/// map.insert("fi", "Finnish").unwrap();
///
/// assert_eq!(map.find_value("fi"), Some(&"Finnish"));
/// assert_eq!(map.find_key(&"Arabic"), Some(&"ar"));
/// assert_eq!(map.find_value("sv"), None);
/// ```
#[derive_where(Default)]
#[derive(Clone)]
pub struct BiSortedMap<K, V> {
    items: Vec<(K, V)>,
    // None while hydrated. Some(tables) is the dehydrated state, and the
    // tables are always permutations of 0..items.len().
    tables: Option<BiSortedMapTables>,
}

impl<K, V> BiSortedMap<K, V> {
    /// Creates a new, empty map in the hydrated state.
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new(), tables: None }
    }

    /// Creates a new, empty map with space for `capacity` pairs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity), tables: None }
    }

    /// Returns the currently allocated capacity of the backing store.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns true if the map contains no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of pairs in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Empties the map and returns it to the hydrated state.
    pub fn clear(&mut self) {
        self.items.clear();
        self.tables = None;
    }

    /// Appends a pair to the map.
    ///
    /// Fails if the map is dehydrated, handing the rejected pair back
    /// inside the error and leaving the map untouched. On success returns
    /// the map itself so inserts can be chained.
    ///
    /// Duplicate keys and values are accepted; see the type-level docs for
    /// how lookups resolve them.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindex::BiSortedMap;
    ///
    /// let mut map = BiSortedMap::new();
    /// map.insert(1, "one")?.insert(2, "two")?;
    /// assert_eq!(map.len(), 2);
    /// # Ok::<(), twindex::errors::InsertError<i32, &str>>(())
    /// ```
    pub fn insert(
        &mut self,
        key: K,
        value: V,
    ) -> Result<&mut Self, InsertError<K, V>> {
        if self.tables.is_some() {
            return Err(InsertError::__internal_new(key, value));
        }
        self.items.push((key, value));
        Ok(self)
    }

    /// Discards the lookup indexes, making the map mutable again.
    ///
    /// The backing store is untouched. Idempotent.
    pub fn hydrate(&mut self) {
        self.tables = None;
    }

    /// Returns true if the lookup indexes are currently built.
    #[inline]
    pub fn is_dehydrated(&self) -> bool {
        self.tables.is_some()
    }

    /// Iterates over the pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.items)
    }
}

impl<K: Ord, V: Ord> BiSortedMap<K, V> {
    /// Builds the lookup indexes if they are not already built.
    ///
    /// Idempotent: dehydrating a dehydrated map is a no-op, so the relative
    /// order of equal keys (and equal values) inside the indexes never
    /// changes once built.
    pub fn dehydrate(&mut self) {
        if self.tables.is_none() {
            self.tables = Some(BiSortedMapTables::build(&self.items));
        }
    }

    /// Looks up the value for a key, dehydrating the map first if needed.
    ///
    /// Accepts the key type itself or any probe type [`Comparable`] to it,
    /// for example `&str` against `String` keys.
    ///
    /// This takes `&mut self` because the first lookup after a mutation
    /// builds the indexes. Use [`get_value`](Self::get_value) for lookups
    /// through a shared reference once the map is dehydrated.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindex::BiSortedMap;
    ///
    /// let mut map = BiSortedMap::new();
    /// map.insert("key1".to_owned(), 2).unwrap();
    ///
    /// // An owned key and a borrowed probe find the same pair.
    /// assert_eq!(map.find_value(&"key1".to_owned()), Some(&2));
    /// assert_eq!(map.find_value("key1"), Some(&2));
    /// ```
    pub fn find_value<Q>(&mut self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Comparable<K>,
    {
        let Self { items, tables } = self;
        let tables =
            tables.get_or_insert_with(|| BiSortedMapTables::build(items));
        let slot = tables
            .key_to_item
            .find_index(|slot| key.compare(&items[slot].0))?;
        Some(&items[slot].1)
    }

    /// Looks up the key for a value, dehydrating the map first if needed.
    ///
    /// The mirror image of [`find_value`](Self::find_value): same implicit
    /// dehydration, same probe flexibility, over the value index instead.
    pub fn find_key<Q>(&mut self, value: &Q) -> Option<&K>
    where
        Q: ?Sized + Comparable<V>,
    {
        let Self { items, tables } = self;
        let tables =
            tables.get_or_insert_with(|| BiSortedMapTables::build(items));
        let slot = tables
            .value_to_item
            .find_index(|slot| value.compare(&items[slot].1))?;
        Some(&items[slot].0)
    }

    /// Looks up the value for a key through a shared reference.
    ///
    /// The map must already be dehydrated: a shared reference cannot build
    /// the indexes. Call [`dehydrate`](Self::dehydrate) once after the last
    /// mutation, then share the map freely, including across threads.
    ///
    /// # Panics
    ///
    /// Panics if the map is hydrated.
    pub fn get_value<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Comparable<K>,
    {
        let slot = self
            .tables_or_panic()
            .key_to_item
            .find_index(|slot| key.compare(&self.items[slot].0))?;
        Some(&self.items[slot].1)
    }

    /// Looks up the key for a value through a shared reference.
    ///
    /// # Panics
    ///
    /// Panics if the map is hydrated.
    pub fn get_key<Q>(&self, value: &Q) -> Option<&K>
    where
        Q: ?Sized + Comparable<V>,
    {
        let slot = self
            .tables_or_panic()
            .value_to_item
            .find_index(|slot| value.compare(&self.items[slot].1))?;
        Some(&self.items[slot].0)
    }

    fn tables_or_panic(&self) -> &BiSortedMapTables {
        match &self.tables {
            Some(tables) => tables,
            None => panic!(
                "lookup through a shared reference requires a dehydrated \
                 map; call dehydrate() first"
            ),
        }
    }

    /// Checks general invariants of the map.
    ///
    /// The code always upholds these invariants, but it's useful to have an
    /// explicit check for tests.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError> {
        let Some(tables) = &self.tables else {
            // Hydrated: there are no indexes to check.
            return Ok(());
        };
        tables.validate(&self.items)?;

        // Every pair must be reachable in both directions, landing on an
        // equal key (resp. value) -- with duplicates, not necessarily on
        // its own slot.
        for (i, (key, value)) in self.items.iter().enumerate() {
            let Some(slot) = tables
                .key_to_item
                .find_index(|slot| key.cmp(&self.items[slot].0))
            else {
                return Err(ValidationError::general(format!(
                    "pair at slot {i} is unreachable through the key index"
                )));
            };
            if self.items[slot].0.cmp(key) != Ordering::Equal {
                return Err(ValidationError::general(format!(
                    "key lookup for slot {i} landed on unequal slot {slot}"
                )));
            }

            let Some(slot) = tables
                .value_to_item
                .find_index(|slot| value.cmp(&self.items[slot].1))
            else {
                return Err(ValidationError::general(format!(
                    "pair at slot {i} is unreachable through the value index"
                )));
            };
            if self.items[slot].1.cmp(value) != Ordering::Equal {
                return Err(ValidationError::general(format!(
                    "value lookup for slot {i} landed on unequal slot {slot}"
                )));
            }
        }

        Ok(())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BiSortedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.items.iter().map(|(k, v)| (k, v))).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for BiSortedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        // Hydration state is derived data: two maps holding the same pairs
        // in the same insertion order are equal even if only one of them
        // has built its indexes.
        self.items == other.items
    }
}

impl<K: Eq, V: Eq> Eq for BiSortedMap<K, V> {}

impl<K, V> FromIterator<(K, V)> for BiSortedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect(), tables: None }
    }
}

/// Appends every pair from the iterator.
///
/// # Panics
///
/// Panics if the map is dehydrated. This is the same misuse
/// [`BiSortedMap::insert`] reports as an error, but `Extend` has no way to
/// return one.
impl<K, V> Extend<(K, V)> for BiSortedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        if self.tables.is_some() {
            panic!("cannot extend a dehydrated map; call hydrate() first");
        }
        self.items.extend(iter);
    }
}

impl<'a, K, V> IntoIterator for &'a BiSortedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for BiSortedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items)
    }
}
