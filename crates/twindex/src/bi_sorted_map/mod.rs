// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A bidirectional map with a sorted index per direction.
//!
//! For more information, see [`BiSortedMap`].

pub(crate) mod imp;
mod iter;
#[cfg(feature = "proptest")]
mod proptest_impls;
#[cfg(feature = "serde")]
mod serde_impls;
mod tables;

pub use imp::BiSortedMap;
pub use iter::{IntoIter, Iter};
