//! Opening proof construction (§4.4): witness for `p(z) = v`.
//!
//! `q(x) = (p(x) - v) / (x - z)` has no remainder exactly when `v = p(z)`;
//! computing `q` via the high-to-low synthetic-division recurrence and
//! checking that the final remainder is zero is the proof's own
//! correctness check (W-DIV) — no separate assertion needed beyond it.

#![forbid(unsafe_code)]

use ark_bn254::{G1Affine, G1Projective};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::Zero;

use crate::error::KzgError;
use crate::poly::Polynomial;
use crate::setup::CommitKey;
use crate::F;

/// An opening proof: the evaluation point, `V = p(z)·G₁`, and a commitment
/// to the quotient polynomial `q(x) = (p(x) - p(z)) / (x - z)`.
///
/// `v` is carried only as the group element `V` (W-EVAL) — callers who need
/// the raw scalar recompute it from `Evaluate` themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Witness {
    /// The evaluation point.
    pub z: F,
    /// `V = p(z)·G₁`.
    pub v: G1Affine,
    /// `W = q(α)·G₁`.
    pub w: G1Affine,
}

/// Produce an opening proof for `p` at `z`.
///
/// Mutates `poly` in place: on return its reversed-storage buffer holds the
/// quotient `q`'s coefficients, one shorter than `p`'s (W-MUT). Callers that
/// still need `p` afterwards must clone it first.
///
/// # Errors
/// `KeyTooSmall` if `key` cannot supply the `t - 1` bases `q` needs, or the
/// single G1 base (`τ.g1[0]`) that `V` is built from.
/// `DivisionRemainder` if the synthetic division leaves a nonzero remainder
/// (unreachable for a correctly computed `v`; signals an implementation bug).
pub fn witness(key: &CommitKey, poly: &mut Polynomial, z: F) -> Result<Witness, KzgError> {
    if key.g1_powers().is_empty() {
        return Err(KzgError::KeyTooSmall { needed: 1, have: 0 });
    }

    let v_scalar = poly.evaluate(z);
    let t = poly.degree_bound();

    if t == 0 {
        return Err(KzgError::DegreeMismatch { expected: 1, actual: 0 });
    }
    if t - 1 > key.g1_powers().len() {
        return Err(KzgError::KeyTooSmall { needed: t - 1, have: key.g1_powers().len() });
    }

    let coeffs = poly.as_reversed_mut_slice();

    // p'(x) = p(x) - v has z as a root; only the constant term (last slot
    // in reversed storage) changes.
    coeffs[t - 1] -= v_scalar;

    // Synthetic division of p' by (x - z), high-to-low (coeffs[0] is the
    // leading term): q[0] = coeffs[0]; q[i] = coeffs[i] + z * q[i-1]. The
    // first t-1 entries of q are the quotient's reversed coefficients; the
    // last entry is the remainder, which must be zero since z is a root.
    let mut q = vec![F::zero(); t];
    q[0] = coeffs[0];
    for i in 1..t {
        q[i] = coeffs[i] + z * q[i - 1];
    }
    let remainder = q[t - 1];
    if !remainder.is_zero() {
        return Err(KzgError::DivisionRemainder);
    }

    q.truncate(t - 1);
    *poly = Polynomial::from_reversed_coeffs(q);
    let quotient_coeffs = poly.as_reversed_slice();

    let q_bases = &key.g1_powers()[..t - 1];
    let nonzero_bases: Vec<G1Affine> = q_bases
        .iter()
        .zip(quotient_coeffs.iter())
        .filter(|(_, s)| !s.is_zero())
        .map(|(b, _)| *b)
        .collect();
    let nonzero_scalars: Vec<F> =
        quotient_coeffs.iter().filter(|s| !s.is_zero()).copied().collect();

    let w = if nonzero_bases.is_empty() {
        G1Affine::identity()
    } else {
        G1Projective::msm(&nonzero_bases, &nonzero_scalars)
            .expect("bases and scalars have matching length by construction")
            .into_affine()
    };

    // V = v*G1, using tau.g1[0] as the base (W-EVAL).
    let v = (key.g1_powers()[0].into_group() * v_scalar).into_affine();

    Ok(Witness { z, v, w })
}
