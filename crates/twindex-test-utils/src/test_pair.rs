use proptest::prelude::*;
use std::cmp::Ordering;
use twindex::{Comparable, Equivalent};

/// Key domain for property tests: all of `u8`, small enough that
/// generated sequences collide often.
pub fn key_strategy() -> impl Strategy<Value = u8> {
    any::<u8>()
}

/// Value domain for property tests: eight characters, so values collide
/// even more often than keys.
pub fn value_strategy() -> impl Strategy<Value = char> {
    proptest::char::range('a', 'h')
}

/// An owned host key with a borrowed probe form.
///
/// Ordered by domain first, then name.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Host {
    pub domain: String,
    pub name: String,
}

impl Host {
    pub fn new(domain: impl Into<String>, name: impl Into<String>) -> Self {
        Self { domain: domain.into(), name: name.into() }
    }
}

/// A borrowed probe for [`Host`] keys.
///
/// Orders identically to `Host`, so lookups can be made without building
/// an owned key.
#[derive(Clone, Copy, Debug)]
pub struct HostRef<'a> {
    pub domain: &'a str,
    pub name: &'a str,
}

impl Equivalent<Host> for HostRef<'_> {
    fn equivalent(&self, other: &Host) -> bool {
        self.domain == other.domain && self.name == other.name
    }
}

impl Comparable<Host> for HostRef<'_> {
    fn compare(&self, other: &Host) -> Ordering {
        (self.domain, self.name)
            .cmp(&(other.domain.as_str(), other.name.as_str()))
    }
}
