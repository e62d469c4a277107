//! Opening verification (§4.5): the single pairing check that binds
//! `C` and `(z, V, W)` together without the verifier ever seeing `p`.
//!
//! `e(C, G₂) == e(W, α·G₂ - z·G₂) · e(V, G₂)` is rearranged into
//! `e(C, G₂) · e(-W, α·G₂ - z·G₂) · e(-V, G₂) == 1` and evaluated as one
//! multi-Miller-loop plus a single final exponentiation — the same
//! batching shape the teacher used to check several openings at once,
//! specialized here to one.

#![forbid(unsafe_code)]

use ark_bn254::Bn254;
use ark_ec::pairing::Pairing;
use ark_ec::CurveGroup;
use ark_ff::Zero;

use crate::commit::Commitment;
use crate::error::KzgError;
use crate::setup::CommitKey;
use crate::witness::Witness;

/// Check that `witness` proves `commitment` opens correctly.
///
/// Returns `Ok(true)`/`Ok(false)` rather than failing the process on a bad
/// proof — rejection is an ordinary outcome of verification, not an error.
///
/// # Errors
/// `KeyTooSmall` if `key` has fewer than 2 G2 powers (α·G2 is `g2[1]`).
pub fn verify(key: &CommitKey, commitment: Commitment, witness: Witness) -> Result<bool, KzgError> {
    if key.g2_powers().len() < 2 {
        return Err(KzgError::KeyTooSmall { needed: 2, have: key.g2_powers().len() });
    }

    let g2_gen = key.g2_powers()[0].into_group();
    let alpha_g2 = key.g2_powers()[1].into_group();

    // alpha*G2 - z*G2
    let alpha_minus_z_g2 = (alpha_g2 - g2_gen * witness.z).into_affine();
    let neg_w = (-witness.w.into_group()).into_affine();
    let neg_v = (-witness.v.into_group()).into_affine();

    let result = Bn254::multi_pairing(
        [commitment.0, neg_w, neg_v],
        [key.g2_powers()[0], alpha_minus_z_g2, key.g2_powers()[0]],
    );

    let accepted = result.is_zero();
    if !accepted {
        tracing::debug!("KZG opening rejected: pairing check failed");
    }

    Ok(accepted)
}
