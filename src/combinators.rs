//! Combinators over [`Maybe`].
//!
//! All of them are total: an empty receiver short-circuits without calling
//! the supplied closure, and none of them can fail.

use crate::maybe::Maybe;

impl<T> Maybe<T> {
    /// Maps the payload.
    ///
    /// The result is always present when the receiver is. Use
    /// [`select_nullable`](Maybe::select_nullable) when the mapping itself
    /// may produce no value.
    #[must_use]
    pub fn select<R, F>(self, selector: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        Maybe {
            slot: self.slot.map(selector),
        }
    }

    /// Maps the payload and collapses a `None` result to empty.
    #[must_use]
    pub fn select_nullable<R, F>(self, selector: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Option<R>,
    {
        Maybe::from_nullable(self.slot.and_then(selector))
    }

    /// Binds the payload to a function returning another `Maybe`.
    #[must_use]
    pub fn select_many<R, F>(self, selector: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        match self.slot {
            Some(value) => selector(value),
            None => Maybe::empty(),
        }
    }

    /// Keeps the payload only if `predicate` holds for it.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Maybe {
            slot: self.slot.filter(predicate),
        }
    }

    /// Runs `action` once with the payload, or not at all.
    pub fn for_each<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        if let Some(value) = self.slot {
            action(value);
        }
    }

    /// Collapses both states into an `R`.
    ///
    /// ```
    /// use maybe_type::Maybe;
    ///
    /// let greeting = Maybe::create("ada").fold(|| "hello?".to_string(), |n| format!("hello {}", n));
    /// assert_eq!(greeting, "hello ada");
    /// ```
    pub fn fold<R, E, F>(self, on_empty: E, on_value: F) -> R
    where
        E: FnOnce() -> R,
        F: FnOnce(T) -> R,
    {
        match self.slot {
            Some(value) => on_value(value),
            None => on_empty(),
        }
    }

    /// True when empty, otherwise `predicate` applied to the payload.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.slot.as_ref().map_or(true, predicate)
    }

    /// True when a payload is present.
    pub fn any(&self) -> bool {
        self.has_value()
    }

    /// False when empty, otherwise `predicate` applied to the payload.
    pub fn any_where<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.slot.as_ref().map_or(false, predicate)
    }

    /// Substitutes `default` for an empty receiver.
    #[must_use]
    pub fn default_if_empty(self, default: T) -> Self {
        match self.slot {
            Some(_) => self,
            None => Maybe::create(default),
        }
    }

    /// Pairs two payloads. Empty if either side is.
    #[must_use]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two payloads with `combiner`. Empty if either side is, in
    /// which case `combiner` is never called.
    #[must_use]
    pub fn zip_with<U, R, F>(self, other: Maybe<U>, combiner: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self.slot, other.slot) {
            (Some(left), Some(right)) => Maybe::create(combiner(left, right)),
            _ => Maybe::empty(),
        }
    }

    /// Like [`zip_with`](Maybe::zip_with), collapsing a `None` result to empty.
    #[must_use]
    pub fn zip_with_nullable<U, R, F>(self, other: Maybe<U>, combiner: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> Option<R>,
    {
        match (self.slot, other.slot) {
            (Some(left), Some(right)) => Maybe::from_nullable(combiner(left, right)),
            _ => Maybe::empty(),
        }
    }
}
