//! Error kinds for the KZG core.
//!
//! Every variant here is a caller-fault or implementation-bug condition —
//! never a recoverable runtime state. A failed verification is not one of
//! these: `verify` returns `bool`, reserving `Result` for malformed inputs.

#![forbid(unsafe_code)]

/// Errors raised by setup, commit, witness, and verify.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum KzgError {
    /// `setup(t)` was called with `t < 1`.
    #[error("invalid degree bound: {0} (must be >= 1)")]
    InvalidDegree(usize),

    /// An operation needs more SRS terms than the commit key provides.
    #[error("commit key too small: need {needed} terms, have {have}")]
    KeyTooSmall {
        /// Terms the operation required.
        needed: usize,
        /// Terms actually present in the key.
        have: usize,
    },

    /// The coefficient-vector length disagrees with the declared degree bound.
    #[error("degree mismatch: polynomial has {actual} coefficients, key declares {expected}")]
    DegreeMismatch {
        /// Expected length (the commit key's degree bound).
        expected: usize,
        /// Actual length of the supplied polynomial.
        actual: usize,
    },

    /// Synthetic division left a nonzero remainder. Cannot happen for a
    /// correct `p` and `v = p(z)`; indicates an implementation bug.
    #[error("synthetic division left a nonzero remainder (implementation bug)")]
    DivisionRemainder,
}
