//! Commitment (§4.2): `C = Σ p[i] · g1[t-1-i]`.
//!
//! `p` is stored high-to-low (`poly.rs`); `g1[t-1-i]` is therefore α's power
//! matching the degree of `p[i]`. Zero coefficients are skipped before the
//! scalar multiplication, mirroring the teacher's streaming aggregator —
//! here it's just a cheap early-out rather than a tiling optimization.

#![forbid(unsafe_code)]

use ark_bn254::{G1Affine, G1Projective};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::Zero;

use crate::error::KzgError;
use crate::poly::Polynomial;
use crate::setup::CommitKey;

/// A commitment to a polynomial: `C = p(α)·G1`, computed without ever
/// evaluating `p` at α directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commitment(pub G1Affine);

/// Commit to `poly` under `key`.
///
/// # Errors
/// `DegreeMismatch` if `poly`'s length disagrees with `key`'s degree bound
/// (§4.2 requires `|p| == t`, i.e. `key.degree_bound() + 1 == t`... see
/// `KeyTooSmall` below for the precise bound check).
pub fn commit(key: &CommitKey, poly: &Polynomial) -> Result<Commitment, KzgError> {
    let t = poly.degree_bound();
    if t == 0 {
        return Err(KzgError::DegreeMismatch { expected: key.g1_powers().len(), actual: 0 });
    }
    if t > key.g1_powers().len() {
        return Err(KzgError::KeyTooSmall { needed: t, have: key.g1_powers().len() });
    }

    let coeffs = poly.as_reversed_slice();
    let bases = &key.g1_powers()[..t];

    // bases[t-1-i] pairs with coeffs[i]; reverse the coefficients once so
    // bases and scalars line up index-for-index for the MSM call.
    let scalars: Vec<_> = coeffs.iter().rev().copied().collect();

    let nonzero_bases: Vec<G1Affine> = bases
        .iter()
        .zip(scalars.iter())
        .filter(|(_, s)| !s.is_zero())
        .map(|(b, _)| *b)
        .collect();
    let nonzero_scalars: Vec<_> = scalars.iter().filter(|s| !s.is_zero()).copied().collect();

    if nonzero_bases.is_empty() {
        return Ok(Commitment(G1Affine::identity()));
    }

    let acc = G1Projective::msm(&nonzero_bases, &nonzero_scalars)
        .expect("bases and scalars have matching length by construction");

    Ok(Commitment(acc.into_affine()))
}
