use proptest::prelude::*;
use test_strategy::{proptest, Arbitrary};
use twindex::{bi_sorted_map, BiSortedMap};
use twindex_test_utils::{
    eq_props::{assert_eq_props, assert_ne_props},
    naive_map::NaiveBiMap,
    test_pair::{key_strategy, value_strategy, Host, HostRef},
};

#[test]
fn empty_map() {
    let mut map = BiSortedMap::<String, u32>::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert!(!map.is_dehydrated());
    assert_eq!(map.find_value("anything"), None);
    assert_eq!(map.find_key(&7), None);
    // Looking up an empty map still freezes it.
    assert!(map.is_dehydrated());
    map.validate().expect("map should be valid");
}

#[test]
fn lookup_scenarios() {
    let mut map = BiSortedMap::new();
    assert_eq!(map.len(), 0);

    map.insert("key", "value").unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.find_value("key"), Some(&"value"));

    map.hydrate();
    map.insert("key1", "value2").unwrap().insert("key2", "value1").unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map.find_value("key2"), Some(&"value1"));
    assert_eq!(map.find_key("value2"), Some(&"key1"));
    map.validate().expect("map should be valid");
}

#[test]
fn insert_rejected_while_dehydrated() {
    let mut map = BiSortedMap::new();
    map.insert(1u8, 'a').unwrap();
    assert_eq!(map.find_value(&1), Some(&'a'));

    // The lookup dehydrated the map, so the next insert must fail and
    // hand the pair back.
    let error = map.insert(2, 'b').unwrap_err();
    assert_eq!(error.key(), &2);
    assert_eq!(error.value(), &'b');
    assert_eq!(error.into_pair(), (2, 'b'));
    assert_eq!(map.len(), 1, "rejected insert leaves the map untouched");

    // Hydrating makes the map mutable again, and later lookups observe
    // the new pair.
    map.hydrate();
    assert!(!map.is_dehydrated());
    map.insert(2, 'b').unwrap();
    assert_eq!(map.find_value(&2), Some(&'b'));
    assert_eq!(map.find_key(&'a'), Some(&1));
}

#[test]
fn insert_chains() {
    let mut map = BiSortedMap::new();
    map.insert(1u8, 'a')
        .and_then(|map| map.insert(2, 'b'))
        .and_then(|map| map.insert(3, 'c'))
        .unwrap();
    assert_eq!(map.len(), 3);
}

#[test]
fn dehydrate_is_idempotent() {
    let mut map = BiSortedMap::new();
    map.insert(3u32, "three").unwrap();
    map.insert(1, "one").unwrap();
    map.insert(2, "two").unwrap();

    map.dehydrate();
    let first: Vec<_> =
        [1, 2, 3, 4].iter().map(|k| map.get_value(k).copied()).collect();
    map.dehydrate();
    let second: Vec<_> =
        [1, 2, 3, 4].iter().map(|k| map.get_value(k).copied()).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![Some("one"), Some("two"), Some("three"), None]);
    map.validate().expect("map should be valid");
}

#[test]
fn duplicate_keys_and_values_resolve_to_first_inserted() {
    let mut map = BiSortedMap::new();
    map.insert("dup", 1).unwrap();
    map.insert("dup", 2).unwrap();
    map.insert("other", 3).unwrap();

    assert_eq!(map.find_value("dup"), Some(&1));
    map.validate().expect("map should be valid");

    // The same policy applies to duplicate values.
    map.hydrate();
    map.insert("late", 1).unwrap();
    assert_eq!(map.find_key(&1), Some(&"dup"));
    map.validate().expect("map should be valid");
}

#[test]
fn clear_resets_everything() {
    let mut map = BiSortedMap::new();
    map.insert(1u8, 'a').unwrap();
    assert_eq!(map.find_value(&1), Some(&'a'));
    assert!(map.is_dehydrated());

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert!(!map.is_dehydrated(), "clearing rehydrates the map");
    assert_eq!(map.find_value(&1), None);

    // A cleared map accepts inserts again without an explicit hydrate().
    map.clear();
    map.insert(2, 'b').unwrap();
    assert_eq!(map.find_value(&2), Some(&'b'));
}

#[test]
fn shared_lookups_on_a_dehydrated_map() {
    let mut map = BiSortedMap::new();
    map.insert("k".to_owned(), 10u32).unwrap();
    map.dehydrate();

    let shared = &map;
    assert_eq!(shared.get_value("k"), Some(&10));
    assert_eq!(shared.get_key(&10), Some(&"k".to_owned()));
    assert_eq!(shared.get_value("missing"), None);
}

#[test]
#[should_panic(expected = "requires a dehydrated map")]
fn shared_lookup_panics_while_hydrated() {
    let mut map = BiSortedMap::new();
    map.insert(1u8, 2u8).unwrap();
    let _ = map.get_value(&1);
}

#[test]
fn transparent_probes() {
    let mut map = BiSortedMap::new();
    map.insert("key1".to_owned(), 2u32).unwrap();

    // Borrowed and owned probes are interchangeable.
    assert_eq!(map.find_value("key1"), Some(&2));
    assert_eq!(map.find_value(&"key1".to_owned()), Some(&2));

    let mut hosts = BiSortedMap::new();
    hosts.insert(Host::new("example.com", "db1"), 5432u16).unwrap();
    hosts.insert(Host::new("example.com", "web1"), 443).unwrap();

    // A field-by-field probe avoids building an owned Host for the
    // lookup.
    let probe = HostRef { domain: "example.com", name: "web1" };
    assert_eq!(hosts.find_value(&probe), Some(&443));
    assert_eq!(
        hosts.find_value(&Host::new("example.com", "web1")),
        Some(&443)
    );
    assert_eq!(
        hosts.find_value(&HostRef { domain: "example.com", name: "gone" }),
        None
    );
}

#[test]
fn debug_impl() {
    let mut map = BiSortedMap::new();
    map.insert(1u8, 'a').unwrap();
    map.insert(20, 'b').unwrap();
    assert_eq!(format!("{map:?}"), "{1: 'a', 20: 'b'}");

    // Dehydration does not change the rendering.
    map.dehydrate();
    assert_eq!(format!("{map:?}"), "{1: 'a', 20: 'b'}");
}

#[test]
fn eq_examples() {
    let mut map1 = BiSortedMap::new();
    let mut map2 = BiSortedMap::new();
    assert_eq_props(&map1, &map2);

    map1.insert("a", 1).unwrap();
    assert_ne_props(&map1, &map2);

    map2.insert("a", 1).unwrap();
    assert_eq_props(&map1, &map2);

    // Hydration state is not part of equality.
    map1.dehydrate();
    assert_eq_props(&map1, &map2);
    map1.hydrate();

    // Insertion order is.
    map1.insert("b", 2).unwrap().insert("c", 3).unwrap();
    map2.insert("c", 3).unwrap().insert("b", 2).unwrap();
    assert_ne_props(&map1, &map2);
}

#[test]
fn iteration_in_insertion_order() {
    let map: BiSortedMap<_, _> =
        vec![(3u8, 'c'), (1, 'a'), (2, 'b'), (1, 'z')].into_iter().collect();

    let pairs: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs, vec![(3, 'c'), (1, 'a'), (2, 'b'), (1, 'z')]);
    assert_eq!(map.iter().len(), 4);

    let borrowed: Vec<_> = (&map).into_iter().collect();
    assert_eq!(borrowed.len(), 4);

    let owned: Vec<_> = map.into_iter().collect();
    assert_eq!(owned, vec![(3, 'c'), (1, 'a'), (2, 'b'), (1, 'z')]);
}

#[test]
fn extend_appends_pairs() {
    let mut map = BiSortedMap::new();
    map.insert(1u8, 'a').unwrap();
    map.extend(vec![(2, 'b'), (3, 'c')]);
    assert_eq!(map.len(), 3);
    assert_eq!(map.find_value(&3), Some(&'c'));
}

#[test]
#[should_panic(expected = "cannot extend a dehydrated map")]
fn extend_panics_while_dehydrated() {
    let mut map = BiSortedMap::new();
    map.insert(1u8, 'a').unwrap();
    map.dehydrate();
    map.extend(vec![(2, 'b')]);
}

mod macro_tests {
    use super::*;

    #[test]
    fn macro_basic() {
        let mut map = bi_sorted_map! {
            "mon" => 1,
            "tue" => 2,
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map.find_value("tue"), Some(&2));
        assert_eq!(map.find_key(&1), Some(&"mon"));
    }

    #[test]
    fn macro_empty() {
        let empty: BiSortedMap<u8, char> = bi_sorted_map! {};
        assert!(empty.is_empty());
    }

    #[test]
    fn macro_without_trailing_comma() {
        let map = bi_sorted_map! { 1u8 => 'a' };
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn macro_keeps_duplicates() {
        let mut map = bi_sorted_map! {
            "dup" => 1,
            "dup" => 2,
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map.find_value("dup"), Some(&1));
    }
}

#[derive(Debug, Arbitrary)]
enum Operation {
    // Make inserts more common so the maps fill up.
    #[weight(4)]
    Insert(
        #[strategy(key_strategy())] u8,
        #[strategy(value_strategy())] char,
    ),
    #[weight(3)]
    FindValue(#[strategy(key_strategy())] u8),
    #[weight(3)]
    FindKey(#[strategy(value_strategy())] char),
    Dehydrate,
    Hydrate,
    Clear,
}

#[proptest(cases = 64)]
fn proptest_ops(
    #[strategy(prop::collection::vec(any::<Operation>(), 0..512))] ops: Vec<
        Operation,
    >,
) {
    let mut map = BiSortedMap::<u8, char>::new();
    let mut naive = NaiveBiMap::new();

    // Perform the operations on both maps, checking that they agree after
    // every step.
    for op in ops {
        match op {
            Operation::Insert(key, value) => {
                let map_res =
                    map.insert(key, value).map(|_| ()).map_err(|e| e.into_pair());
                let naive_res =
                    naive.insert(key, value).map_err(|e| e.into_pair());
                assert_eq!(map_res, naive_res, "insert outcomes agree");
            }
            Operation::FindValue(key) => {
                assert_eq!(map.find_value(&key).copied(), naive.find_value(key));
            }
            Operation::FindKey(value) => {
                assert_eq!(map.find_key(&value).copied(), naive.find_key(value));
            }
            Operation::Dehydrate => {
                map.dehydrate();
                naive.dehydrate();
            }
            Operation::Hydrate => {
                map.hydrate();
                naive.hydrate();
            }
            Operation::Clear => {
                map.clear();
                naive.clear();
            }
        }

        assert_eq!(map.len(), naive.len());
        assert_eq!(map.is_dehydrated(), naive.is_dehydrated());
        map.validate().expect("map should be valid");
    }
}

#[proptest(cases = 32)]
fn proptest_round_trip(
    #[strategy(prop::collection::btree_map(any::<u32>(), any::<u32>(), 0..64))]
    by_key: std::collections::BTreeMap<u32, u32>,
) {
    // The generator guarantees unique keys; drop duplicate values so the
    // round-trip property holds in both directions.
    let mut seen_values = std::collections::BTreeSet::new();
    let pairs: Vec<(u32, u32)> =
        by_key.into_iter().filter(|(_, v)| seen_values.insert(*v)).collect();

    let mut map: BiSortedMap<u32, u32> = pairs.clone().into_iter().collect();
    for (key, value) in &pairs {
        assert_eq!(map.find_value(key), Some(value));
        assert_eq!(map.find_key(value), Some(key));
    }
    assert_eq!(map.len(), pairs.len());
    map.validate().expect("map should be valid");
}

#[proptest(cases = 32)]
fn proptest_eq_ignores_hydration(
    #[strategy(prop::collection::vec(any::<(u8, char)>(), 0..32))] pairs: Vec<
        (u8, char),
    >,
) {
    let map1: BiSortedMap<u8, char> = pairs.clone().into_iter().collect();
    let mut map2: BiSortedMap<u8, char> = pairs.into_iter().collect();
    map2.dehydrate();

    // Same pairs, same order, different hydration state: equal.
    assert_eq_props(map1, map2);
}

#[cfg(feature = "serde")]
mod serde_tests {
    use test_strategy::proptest;
    use twindex::BiSortedMap;
    use twindex_test_utils::serde_utils::assert_serialize_roundtrip;

    #[proptest]
    fn proptest_serialize_roundtrip(pairs: Vec<(u8, String)>) {
        assert_serialize_roundtrip(pairs);
    }

    #[test]
    fn serialize_format() {
        let mut map = BiSortedMap::new();
        map.insert("b".to_owned(), 2u32).unwrap();
        map.insert("a".to_owned(), 1).unwrap();
        // Insertion order, not sorted order.
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"[["b",2],["a",1]]"#
        );
    }
}

#[cfg(feature = "proptest")]
#[proptest(cases = 16)]
fn proptest_arbitrary_map(mut map: BiSortedMap<u8, char>) {
    // The arbitrarily generated map must be valid as-is.
    map.validate().expect("map should be valid");
    assert_eq!(map.is_empty(), map.len() == 0);

    // Every held pair resolves in both directions -- to some pair with an
    // equal key (resp. value), since duplicates may shadow it.
    let pairs: Vec<(u8, char)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    for (key, value) in pairs {
        assert!(map.find_value(&key).is_some());
        assert!(map.find_key(&value).is_some());
    }
    map.validate().expect("map should be valid");
}
