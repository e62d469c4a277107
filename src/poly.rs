//! Reversed-storage polynomial type.
//!
//! Index `i` holds the coefficient of `x^(t-1-i)`: the highest-degree
//! coefficient sits at position 0, the constant term at position `t-1`.
//! This ordering is an invariant of the whole crate — fixing it here, at
//! the type level, is what keeps `commit`, `evaluate`, and `witness` from
//! drifting out of sync with each other.

#![forbid(unsafe_code)]

use ark_ff::{One, Zero};

use crate::F;

/// A polynomial in reversed (high-to-low) coefficient storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    /// `coeffs[i]` is the coefficient of `x^(degree_bound - 1 - i)`.
    coeffs: Vec<F>,
}

impl Polynomial {
    /// Build a polynomial from coefficients already in reversed (high-to-low)
    /// order. `coeffs[0]` is the leading (highest-degree) coefficient.
    pub fn from_reversed_coeffs(coeffs: Vec<F>) -> Self {
        Self { coeffs }
    }

    /// Build a polynomial from coefficients in the conventional low-to-high
    /// order (`coeffs[0]` is the constant term) and store them reversed.
    pub fn from_coeffs_low_to_high(mut coeffs: Vec<F>) -> Self {
        coeffs.reverse();
        Self { coeffs }
    }

    /// Declared degree bound `t` (the length of the coefficient vector).
    pub fn degree_bound(&self) -> usize {
        self.coeffs.len()
    }

    /// Read-only access to the reversed-storage coefficients.
    pub fn as_reversed_slice(&self) -> &[F] {
        &self.coeffs
    }

    /// Mutable access to the reversed-storage coefficients, used by
    /// `witness` to perform its in-place subtraction and synthetic division.
    pub(crate) fn as_reversed_mut_slice(&mut self) -> &mut [F] {
        &mut self.coeffs
    }

    /// Evaluate `p(z)` via the reversed-storage Horner recurrence (§4.3):
    /// maintain `acc = 1`; for `i = 1..t`, `v += p[t-i] * acc; acc *= z`.
    pub fn evaluate(&self, z: F) -> F {
        let t = self.coeffs.len();
        let mut acc = F::one();
        let mut v = F::zero();
        for i in 1..=t {
            v += self.coeffs[t - i] * acc;
            acc *= z;
        }
        v
    }

    /// True iff every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }
}
