use crate::{internal::ValidationError, support::sorted_table::SortedTable};

/// The two lookup indexes of a dehydrated map.
///
/// Invariant: both tables are permutations of slot indexes into the same
/// backing store, one sorted by key and one sorted by value.
#[derive(Clone, Debug)]
pub(super) struct BiSortedMapTables {
    pub(super) key_to_item: SortedTable,
    pub(super) value_to_item: SortedTable,
}

impl BiSortedMapTables {
    pub(super) fn build<K: Ord, V: Ord>(items: &[(K, V)]) -> Self {
        Self {
            key_to_item: SortedTable::build(items.len(), |a, b| {
                items[a].0.cmp(&items[b].0)
            }),
            value_to_item: SortedTable::build(items.len(), |a, b| {
                items[a].1.cmp(&items[b].1)
            }),
        }
    }

    pub(super) fn validate<K: Ord, V: Ord>(
        &self,
        items: &[(K, V)],
    ) -> Result<(), ValidationError> {
        self.key_to_item
            .validate(items.len(), |a, b| items[a].0.cmp(&items[b].0))
            .map_err(|error| ValidationError::Table {
                name: "key_to_item",
                error,
            })?;
        self.value_to_item
            .validate(items.len(), |a, b| items[a].1.cmp(&items[b].1))
            .map_err(|error| ValidationError::Table {
                name: "value_to_item",
                error,
            })?;

        Ok(())
    }
}
