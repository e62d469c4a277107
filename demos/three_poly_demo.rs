//! End-to-end worked example (scenario S4): commit to two random degree-99
//! polynomials A and B, their product C = A·B, derive a shared evaluation
//! point via Fiat–Shamir over the three commitments, open all three at that
//! point, and verify every opening.
//!
//! This is a usage sketch, not part of the core — the core's five
//! procedures and the Fiat–Shamir derivation are the library surface; this
//! binary just wires them together the way a downstream caller would.

use ark_ff::{UniformRand, Zero};
use kzg10_core::{commit, fiat_shamir_point, setup, witness, verify, Polynomial, F};
use rand::rngs::OsRng;
use tracing_subscriber::EnvFilter;

fn random_coeffs(len: usize, rng: &mut impl rand::RngCore) -> Vec<F> {
    (0..len).map(|_| F::rand(rng)).collect()
}

/// Multiply two polynomials given in reversed (high-to-low) storage,
/// returning the product in the same storage convention.
fn multiply_reversed(a: &[F], b: &[F]) -> Vec<F> {
    let deg_a = a.len() - 1;
    let deg_b = b.len() - 1;
    let mut forward = vec![F::zero(); deg_a + deg_b + 1];
    for (ia, &ca) in a.iter().enumerate() {
        let pow_a = deg_a - ia;
        for (ib, &cb) in b.iter().enumerate() {
            let pow_b = deg_b - ib;
            forward[pow_a + pow_b] += ca * cb;
        }
    }
    forward.into_iter().rev().collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let t = 100;
    let key = setup(2 * t)?;
    tracing::info!(degree_bound = 2 * t, "generated commit key");

    let mut rng = OsRng;
    let a_coeffs = random_coeffs(t, &mut rng);
    let b_coeffs = random_coeffs(t, &mut rng);
    let c_coeffs = multiply_reversed(&a_coeffs, &b_coeffs);

    let mut poly_a = Polynomial::from_reversed_coeffs(a_coeffs);
    let mut poly_b = Polynomial::from_reversed_coeffs(b_coeffs);
    let mut poly_c = Polynomial::from_reversed_coeffs(c_coeffs);

    let comm_a = commit(&key, &poly_a)?;
    let comm_b = commit(&key, &poly_b)?;
    let comm_c = commit(&key, &poly_c)?;
    tracing::info!("committed to A, B, and C = A*B");

    let z = fiat_shamir_point(comm_a, comm_b, comm_c);
    tracing::info!(?z, "derived evaluation point via Fiat-Shamir");

    let witness_a = witness(&key, &mut poly_a, z)?;
    let witness_b = witness(&key, &mut poly_b, z)?;
    let witness_c = witness(&key, &mut poly_c, z)?;

    let ok_a = verify(&key, comm_a, witness_a)?;
    let ok_b = verify(&key, comm_b, witness_b)?;
    let ok_c = verify(&key, comm_c, witness_c)?;

    println!("verify(A) = {ok_a}");
    println!("verify(B) = {ok_b}");
    println!("verify(C) = {ok_c}");

    if !(ok_a && ok_b && ok_c) {
        return Err("one or more openings failed to verify".into());
    }

    Ok(())
}
