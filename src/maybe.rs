//! # Maybe Module
//!
//! The optional value type at the heart of the crate.
//!
//! A [`Maybe<T>`] is either empty or holds exactly one `T`. It is built once
//! and never mutated afterwards; every combinator returns a new value.
//!
//! ## Construction
//!
//! - [`Maybe::create`] / [`Maybe::from_value`] always wrap their argument.
//! - [`Maybe::empty`] / [`Maybe::from_empty`] never touch `T` at all.
//! - [`Maybe::from_nullable`] (see `conversions`) is the only constructor
//!   that inspects its input for absence.
//!
//! ## Example
//!
//! ```
//! use maybe_type::{Maybe, MaybeError};
//!
//! let name = Maybe::create("foo");
//! assert!(name.has_value());
//! assert_eq!(name.value(), Ok(&"foo"));
//!
//! let nobody: Maybe<&str> = Maybe::empty();
//! assert_eq!(nobody.value(), Err(MaybeError::AbsentValue));
//! assert_eq!(nobody.value_or_else("anonymous"), "anonymous");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::MaybeError;

/// Hash fed to the hasher for every empty value.
const EMPTY_HASH: u64 = 0;

/// The untyped empty value.
///
/// `Nothing` converts into a `Maybe<T>` of any `T`, which lets code return
/// "no value" without naming the payload type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nothing;

impl Nothing {
    /// Wraps `value` unconditionally.
    pub fn create<T>(value: T) -> Maybe<T> {
        Maybe::create(value)
    }

    /// The empty value for `T`.
    pub const fn empty<T>() -> Maybe<T> {
        Maybe::empty()
    }
}

/// A value of type `T`, or nothing.
#[derive(Clone, Copy)]
pub struct Maybe<T> {
    pub(crate) slot: Option<T>,
}

impl<T> Maybe<T> {
    /// The canonical empty value. Does not construct a `T`.
    pub const fn empty() -> Self {
        Maybe { slot: None }
    }

    /// Wraps `value`. Never checks it for absence.
    pub const fn create(value: T) -> Self {
        Maybe { slot: Some(value) }
    }

    /// Same as [`create`](Maybe::create).
    pub fn from_value(value: T) -> Self {
        Self::create(value)
    }

    /// The empty value, from the untyped [`Nothing`].
    pub fn from_empty(_: Nothing) -> Self {
        Self::empty()
    }

    /// True when a payload is present.
    pub fn has_value(&self) -> bool {
        self.slot.is_some()
    }

    /// True when there is no payload.
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Borrows the payload.
    ///
    /// Fails with [`MaybeError::AbsentValue`] when empty. Prefer
    /// [`fold`](Maybe::fold), [`value_or_else`](Maybe::value_or_else) or
    /// iteration when absence is an expected case.
    pub fn value(&self) -> Result<&T, MaybeError> {
        self.slot.as_ref().ok_or(MaybeError::AbsentValue)
    }

    /// Moves the payload out, failing with [`MaybeError::AbsentValue`] when empty.
    pub fn into_value(self) -> Result<T, MaybeError> {
        self.slot.ok_or(MaybeError::AbsentValue)
    }

    /// The payload, or `T::default()` when empty.
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.slot.unwrap_or_default()
    }

    /// The payload, or `fallback` when empty.
    pub fn value_or_else(self, fallback: T) -> T {
        self.slot.unwrap_or(fallback)
    }

    /// Views the payload by reference so combinators can run without
    /// consuming `self`.
    pub fn as_ref(&self) -> Maybe<&T> {
        Maybe {
            slot: self.slot.as_ref(),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Nothing> for Maybe<T> {
    fn from(nothing: Nothing) -> Self {
        Self::from_empty(nothing)
    }
}

impl<T: PartialEq> PartialEq for Maybe<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.slot, &other.slot) {
            (Some(left), Some(right)) => left == right,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.slot {
            Some(value) => value.hash(state),
            None => EMPTY_HASH.hash(state),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("Empty"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(value) => write!(f, "Some({})", value),
            None => write!(f, "Empty"),
        }
    }
}
