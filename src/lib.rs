//! An explicit optional value type, [`Maybe<T>`], with a small library of
//! combinators for working with it compositionally.

pub mod error;
pub mod maybe;
mod combinators;
pub mod iter;
pub mod conversions;

#[cfg(test)]
mod property_tests;

pub use error::*;
pub use maybe::*;
pub use iter::*;
pub use conversions::*;
