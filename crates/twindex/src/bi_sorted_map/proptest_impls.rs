use super::BiSortedMap;
use proptest::{collection::vec, prelude::*};
use std::fmt;

/// Generates maps with arbitrary contents and an arbitrary hydration
/// state.
impl<K, V> Arbitrary for BiSortedMap<K, V>
where
    K: Arbitrary + Ord + fmt::Debug + 'static,
    V: Arbitrary + Ord + fmt::Debug + 'static,
{
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (vec(any::<(K, V)>(), 0..64), any::<bool>())
            .prop_map(|(pairs, dehydrated)| {
                let mut map: BiSortedMap<K, V> = pairs.into_iter().collect();
                if dehydrated {
                    map.dehydrate();
                }
                map
            })
            .boxed()
    }
}
