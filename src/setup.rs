//! Trusted-setup key generation (§4.1).
//!
//! Samples the toxic-waste scalar α, emits its group images in both source
//! groups, and zeroizes α before returning.

#![forbid(unsafe_code)]

use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{CurveGroup, Group};
use ark_ff::{One, UniformRand};
use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::KzgError;

/// The structured reference string: `g1[i] = α^i · G1`, `g2[i] = α^i · G2`.
///
/// `|g1| == |g2| == t + 1`. Read-only after construction; safe to share
/// across concurrent commit/witness/verify calls (e.g. behind an `Arc`).
#[derive(Debug, Clone)]
pub struct CommitKey {
    g1: Vec<G1Affine>,
    g2: Vec<G2Affine>,
}

impl CommitKey {
    /// `τ.g1`, the G1 powers of α, index 0 first.
    pub fn g1_powers(&self) -> &[G1Affine] {
        &self.g1
    }

    /// `τ.g2`, the G2 powers of α, index 0 first.
    pub fn g2_powers(&self) -> &[G2Affine] {
        &self.g2
    }

    /// The maximum degree bound this key supports (`t` in §4.1).
    pub fn degree_bound(&self) -> usize {
        self.g1.len().saturating_sub(1)
    }
}

/// Holds α and its running power while §4.1's ladder is being computed.
/// Zeroized on drop so the secret does not linger in memory after `setup`
/// returns — only the group images in `CommitKey` escape this function.
#[derive(Zeroize, ZeroizeOnDrop)]
struct ToxicWaste {
    alpha: Fr,
    acc: Fr,
}

/// Sample α ← Fr uniformly from a CSPRNG and emit the commit key
/// `τ = ({α^i·G1}, {α^i·G2})` for `i = 0..=t`.
///
/// α is never logged, never returned, and is zeroized before this function
/// returns — this is the "trusted setup ceremony" secret.
///
/// # Errors
/// `InvalidDegree` if `t < 1`.
pub fn setup(t: usize) -> Result<CommitKey, KzgError> {
    if t < 1 {
        return Err(KzgError::InvalidDegree(t));
    }

    let mut secret = ToxicWaste { alpha: Fr::rand(&mut OsRng), acc: Fr::one() };

    let g1_gen = G1Projective::generator();
    let g2_gen = G2Projective::generator();

    let mut g1 = Vec::with_capacity(t + 1);
    let mut g2 = Vec::with_capacity(t + 1);

    for i in 0..=t {
        if i > 0 {
            secret.acc *= secret.alpha;
        }
        g1.push((g1_gen * secret.acc).into_affine());
        g2.push((g2_gen * secret.acc).into_affine());
    }

    tracing::debug!(degree_bound = t, "generated KZG commit key");

    Ok(CommitKey { g1, g2 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::pairing::Pairing;
    use ark_bn254::Bn254;

    #[test]
    fn rejects_zero_degree() {
        assert_eq!(setup(0), Err(KzgError::InvalidDegree(0)));
    }

    #[test]
    fn key_has_degree_plus_one_terms() {
        let key = setup(5).unwrap();
        assert_eq!(key.g1_powers().len(), 6);
        assert_eq!(key.g2_powers().len(), 6);
        assert_eq!(key.degree_bound(), 5);
    }

    #[test]
    fn first_powers_are_the_generators() {
        let key = setup(3).unwrap();
        assert_eq!(key.g1_powers()[0], G1Projective::generator().into_affine());
        assert_eq!(key.g2_powers()[0], G2Projective::generator().into_affine());
    }

    #[test]
    fn g1_and_g2_powers_agree_under_pairing() {
        // e(g1[1], g2[0]) == e(g1[0], g2[1]) should hold since both equal e(G1,G2)^alpha.
        let key = setup(4).unwrap();
        let lhs = Bn254::pairing(key.g1_powers()[1], key.g2_powers()[0]);
        let rhs = Bn254::pairing(key.g1_powers()[0], key.g2_powers()[1]);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn two_setups_produce_independent_keys() {
        let a = setup(2).unwrap();
        let b = setup(2).unwrap();
        // Astronomically unlikely to collide on a random alpha.
        assert_ne!(a.g1_powers(), b.g1_powers());
    }
}
