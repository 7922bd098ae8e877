use quickcheck::{Arbitrary, Gen, QuickCheck};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use crate::maybe::Maybe;

// Generate random present or empty values
impl<T: Arbitrary> Arbitrary for Maybe<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        Maybe::from_nullable(Option::<T>::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.slot.shrink().map(Maybe::from_nullable))
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn halve_even(x: i32) -> Maybe<i32> {
    if x % 2 == 0 {
        Maybe::create(x / 2)
    } else {
        Maybe::empty()
    }
}

fn positive(x: i32) -> Maybe<i32> {
    Maybe::create(x).filter(|v| *v > 0)
}

// Property: Create(v) holds v
fn prop_create_holds_value(v: i32) -> bool {
    let m = Maybe::create(v);
    m.has_value() && m.value() == Ok(&v)
}

// Property: Equality mirrors payload equality
fn prop_equality_mirrors_payload(a: i32, b: i32) -> bool {
    (Maybe::create(a) == Maybe::create(b)) == (a == b)
        && Maybe::create(a) != Maybe::empty()
        && Maybe::<i32>::empty() == Maybe::empty()
}

// Property: Equal values hash equally
fn prop_hash_consistent(a: Maybe<i32>, b: Maybe<i32>) -> bool {
    a != b || hash_of(&a) == hash_of(&b)
}

// Property: Mapping identity changes nothing
fn prop_select_identity(m: Maybe<i32>) -> bool {
    m.select(|x| x) == m
}

// Property: Mapping composes
fn prop_select_composition(m: Maybe<i32>) -> bool {
    let f = |x: i32| x.wrapping_mul(3);
    let g = |x: i32| x.wrapping_sub(7);
    m.select(f).select(g) == m.select(|x| g(f(x)))
}

// Property: Create is a left identity for bind
fn prop_bind_left_identity(v: i32) -> bool {
    Maybe::create(v).select_many(halve_even) == halve_even(v)
}

// Property: Create is a right identity for bind
fn prop_bind_right_identity(m: Maybe<i32>) -> bool {
    m.select_many(Maybe::create) == m
}

// Property: Bind is associative
fn prop_bind_associative(m: Maybe<i32>) -> bool {
    m.select_many(halve_even).select_many(positive)
        == m.select_many(|x| halve_even(x).select_many(positive))
}

// Property: Fold picks the branch matching the state
fn prop_fold_total(m: Maybe<i32>) -> bool {
    let folded = m.fold(|| None, Some);
    folded == m.into_nullable()
}

// Property: Zip with an empty side is empty
fn prop_zip_short_circuits(m: Maybe<i32>) -> bool {
    m.zip(Maybe::<i32>::empty()).is_empty() && Maybe::<i32>::empty().zip(m).is_empty()
}

// Property: Iteration yields at most one element and is repeatable
fn prop_iteration_restartable(m: Maybe<i32>) -> bool {
    let first: Vec<&i32> = m.iter().collect();
    let second: Vec<&i32> = m.iter().collect();
    first == second && first.len() == usize::from(m.has_value())
}

// Property: Vacuous truth on empty, predicate on present
fn prop_all_any_agree(m: Maybe<i32>) -> bool {
    let p = |x: &i32| *x > 0;
    match m.value() {
        Ok(v) => m.all(p) == p(v) && m.any_where(p) == p(v) && m.any(),
        Err(_) => m.all(p) && !m.any_where(p) && !m.any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_holds_value() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_create_holds_value as fn(i32) -> bool);
    }

    #[test]
    fn test_equality_mirrors_payload() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_equality_mirrors_payload as fn(i32, i32) -> bool);
    }

    #[test]
    fn test_hash_consistent() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_hash_consistent as fn(Maybe<i32>, Maybe<i32>) -> bool);
    }

    #[test]
    fn test_functor_laws() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_select_identity as fn(Maybe<i32>) -> bool);
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_select_composition as fn(Maybe<i32>) -> bool);
    }

    #[test]
    fn test_monad_laws() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_bind_left_identity as fn(i32) -> bool);
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_bind_right_identity as fn(Maybe<i32>) -> bool);
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_bind_associative as fn(Maybe<i32>) -> bool);
    }

    #[test]
    fn test_fold_total() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_fold_total as fn(Maybe<i32>) -> bool);
    }

    #[test]
    fn test_zip_short_circuits() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_zip_short_circuits as fn(Maybe<i32>) -> bool);
    }

    #[test]
    fn test_iteration_restartable() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_iteration_restartable as fn(Maybe<i32>) -> bool);
    }

    #[test]
    fn test_all_any_agree() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_all_any_agree as fn(Maybe<i32>) -> bool);
    }
}
