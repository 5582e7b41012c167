// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A bidirectional map backed by twin sorted indexes over a single store.
//!
//! # Motivation
//!
//! Mapping codes to display names, ports to service names, or interned ids
//! to symbols usually starts as an ordinary map:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let map: HashMap<String, u16> = HashMap::new();
//! ```
//!
//! The reverse question -- which key maps to this value? -- then needs
//! either a linear scan or a second map holding its own copy of every key
//! and value, kept consistent with the first one by hand.
//!
//! [`BiSortedMap`] answers lookups in both directions while storing each
//! pair exactly once. Pairs live in an append-only store, and each
//! direction gets a sorted permutation of slot indexes into that store.
//! Building the permutations is deferred until the first lookup (the map
//! "dehydrates"); from then on the map is frozen and every lookup is a
//! binary search. [`hydrate`](BiSortedMap::hydrate) throws the indexes away
//! and makes the map mutable again.
//!
//! ```
//! use twindex::BiSortedMap;
//!
//! let mut ports = BiSortedMap::new();
//! ports.insert("ssh", 22).unwrap();
//! ports.insert("https", 443).unwrap();
//!
//! // The first lookup freezes the map.
//! assert_eq!(ports.find_value("https"), Some(&443));
//! assert_eq!(ports.find_key(&22), Some(&"ssh"));
//! assert!(ports.is_dehydrated());
//!
//! // Frozen maps reject inserts until hydrated again.
//! assert!(ports.insert("smtp", 25).is_err());
//! ports.hydrate();
//! ports.insert("smtp", 25).unwrap();
//! ```
//!
//! Lookups accept any probe type that implements [`Comparable`] against the
//! stored type, so a map with `String` keys can be queried with a `&str`
//! without allocating:
//!
//! ```
//! use twindex::BiSortedMap;
//!
//! let mut map = BiSortedMap::new();
//! map.insert("key1".to_owned(), 2).unwrap();
//! assert_eq!(map.find_value("key1"), Some(&2));
//! ```

#![warn(missing_docs)]

pub mod bi_sorted_map;
pub mod errors;
#[doc(hidden)]
pub mod internal;
mod macros;
mod support;

pub use bi_sorted_map::{BiSortedMap, IntoIter, Iter};
// The probe traits come from the `equivalent` crate; re-exported so custom
// probe types can be written against this crate alone.
pub use equivalent::{Comparable, Equivalent};
