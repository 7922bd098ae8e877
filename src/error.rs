use thiserror::Error;

/// The one way an optional value can be misused: reading a payload that
/// is not there.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MaybeError {
    #[error("Option does not have a value")]
    AbsentValue,
}
