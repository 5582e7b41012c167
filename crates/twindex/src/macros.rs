// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Macros for this crate.

/// Creates a [`BiSortedMap`](crate::BiSortedMap) from a list of pairs.
///
/// The map is returned in the hydrated state. Duplicate keys and values
/// are kept, like repeated [`insert`](crate::BiSortedMap::insert) calls.
///
/// # Examples
///
/// ```
/// use twindex::bi_sorted_map;
///
/// let mut map = bi_sorted_map! {
///     "mon" => 1,
///     "tue" => 2,
/// };
///
/// assert_eq!(map.find_value("tue"), Some(&2));
/// assert_eq!(map.find_key(&1), Some(&"mon"));
/// ```
#[macro_export]
macro_rules! bi_sorted_map {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::BiSortedMap::new();
        $(
            // A map under construction is hydrated, so insertion cannot
            // fail.
            let _ = map.insert($key, $value);
        )*
        map
    }};
}
