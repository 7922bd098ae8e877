//! # Conversions
//!
//! Bridges between [`Maybe`] and the representations of absence found
//! elsewhere: `std::option::Option` (the Rust nullable), iterators and
//! serialized data.
//!
//! This is the only module that looks at an input and decides whether it
//! means "no value". Every other constructor assumes presence.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::maybe::Maybe;

/// Adaptive lift: turns a possibly-absent value into a [`Maybe`], mapping
/// absence to empty.
///
/// ```
/// use maybe_type::{Maybe, ToMaybe};
///
/// assert_eq!(None::<&str>.to_maybe(), Maybe::empty());
/// assert_eq!(Some("x").to_maybe(), Maybe::create("x"));
/// ```
pub trait ToMaybe {
    type Item;

    fn to_maybe(self) -> Maybe<Self::Item>;
}

impl<T> ToMaybe for Option<T> {
    type Item = T;

    fn to_maybe(self) -> Maybe<T> {
        Maybe::from_nullable(self)
    }
}

impl<'a, T> ToMaybe for &'a Option<T> {
    type Item = &'a T;

    fn to_maybe(self) -> Maybe<&'a T> {
        Maybe::from_nullable(self.as_ref())
    }
}

impl<T> Maybe<T> {
    /// Empty for `None`, present for `Some`.
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::create(value),
            None => Maybe::empty(),
        }
    }

    pub fn into_nullable(self) -> Option<T> {
        self.slot
    }

    pub fn as_nullable(&self) -> Option<&T> {
        self.slot.as_ref()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_nullable()
    }
}

/// First-element lookups over any iterator.
pub trait MaybeIteratorExt: Iterator + Sized {
    /// The first element, or empty if there is none.
    fn first_maybe(mut self) -> Maybe<Self::Item> {
        Maybe::from_nullable(self.next())
    }

    /// The first element matching `predicate`. Stops at the first match.
    fn first_maybe_where<P>(mut self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::from_nullable(self.find(predicate))
    }
}

impl<I: Iterator> MaybeIteratorExt for I {}

/// Serializes as a nullable `T`: `null` when empty.
impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.slot.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Maybe::from_nullable)
    }
}
