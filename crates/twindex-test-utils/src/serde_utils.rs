use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use twindex::BiSortedMap;

/// Asserts that a map round-trips through serde_json, and that
/// serialization is insensitive to hydration state.
pub fn assert_serialize_roundtrip<K, V>(pairs: Vec<(K, V)>)
where
    K: Clone + fmt::Debug + Ord + Serialize + DeserializeOwned,
    V: Clone + fmt::Debug + Ord + Serialize + DeserializeOwned,
{
    let mut map: BiSortedMap<K, V> = pairs.clone().into_iter().collect();

    let hydrated_json = serde_json::to_string(&map).unwrap();
    map.dehydrate();
    let dehydrated_json = serde_json::to_string(&map).unwrap();
    assert_eq!(hydrated_json, dehydrated_json, "indexes are not serialized");

    let deserialized: BiSortedMap<K, V> =
        serde_json::from_str(&hydrated_json).unwrap();
    assert!(
        !deserialized.is_dehydrated(),
        "deserialization produces a hydrated map"
    );
    assert_eq!(map, deserialized, "pairs survive the round trip");

    // The pairs must come back in insertion order with duplicates intact.
    let roundtripped: Vec<(K, V)> = deserialized.into_iter().collect();
    assert_eq!(pairs, roundtripped);
}
