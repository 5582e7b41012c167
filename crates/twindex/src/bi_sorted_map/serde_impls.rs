use super::BiSortedMap;
use serde_core::{
    de::{SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{fmt, marker::PhantomData};

/// A `BiSortedMap` serializes to the sequence of its pairs, in insertion
/// order.
///
/// Serializing as a sequence rather than as a map keeps non-string keys
/// representable in formats like JSON, and preserves duplicate entries.
/// The indexes are not serialized; they are rebuilt on the first lookup
/// after deserialization.
///
/// # Examples
///
/// ```
/// use twindex::BiSortedMap;
///
/// let mut map = BiSortedMap::new();
/// map.insert("a".to_owned(), 1).unwrap();
/// map.insert("b".to_owned(), 2).unwrap();
///
/// let serialized = serde_json::to_string(&map).unwrap();
/// assert_eq!(serialized, r#"[["a",1],["b",2]]"#);
/// ```
impl<K: Serialize, V: Serialize> Serialize for BiSortedMap<K, V> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// The `Deserialize` impl for `BiSortedMap` produces a hydrated map,
/// preserving the order and multiplicity of the serialized pairs.
impl<'de, K, V> Deserialize<'de> for BiSortedMap<K, V>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor { _marker: PhantomData })
    }
}

struct SeqVisitor<K, V> {
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<'de, K, V> Visitor<'de> for SeqVisitor<K, V>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = BiSortedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of pairs representing a BiSortedMap")
    }

    fn visit_seq<A: SeqAccess<'de>>(
        self,
        mut seq: A,
    ) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(pair) = seq.next_element()? {
            items.push(pair);
        }

        // Collecting produces a hydrated map, so duplicates and order are
        // kept exactly as serialized.
        Ok(items.into_iter().collect())
    }
}
