use alloc::string::String;

use thiserror::Error;

/// Failure of [`crate::format`] to produce a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A `Display` or `Debug` implementation reported an error.
    #[error("formatting failed: {0}")]
    Fmt(#[from] core::fmt::Error),
    /// The second formatting pass produced a different length than the first
    /// pass measured.
    #[error("formatted length changed between passes: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Length measured by the first pass.
        expected: usize,
        /// Length produced by the second pass.
        actual: usize,
    },
}

/// A narrowing conversion that would lose information.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{value} does not fit in {target} without loss of precision")]
pub struct CastError {
    pub(crate) value: String,
    pub(crate) target: &'static str,
}

impl CastError {
    /// The rejected value, rendered as text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Name of the type the value did not fit in.
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }
}
