//! Crate root: public surface and core aliases.
//!
//! This module centralizes the curve/scalar-field aliases and re-exports the
//! submodules that implement the KZG (Kate–Zaverucha–Goldberg) polynomial
//! commitment scheme: trusted-setup key generation, commitment, evaluation,
//! opening-proof construction, pairing-based verification, and the
//! Fiat–Shamir challenge used to make three simultaneous openings
//! non-interactive.
//!
//! ## Invariants
//!
//! - **Field & curve.** The scalar field is `ark_bn254::Fr` (`F` in this
//!   crate); source groups are `ark_bn254::G1Affine`/`G2Affine` (`G1`/`G2`).
//!   We **forbid unsafe** throughout the crate.
//! - **Reversed polynomial storage.** [`poly::Polynomial`] stores
//!   coefficients highest-degree-first; index `i` holds the coefficient of
//!   `x^(t-1-i)`. `commit`, `evaluate`, and `witness` are all specified
//!   against this convention — see `poly`'s module docs.
//! - **Toxic waste.** [`setup::setup`] samples its secret scalar from a
//!   CSPRNG and zeroizes it before returning; only its group images escape
//!   the function.
//! - **Binding-only.** This is the deterministic KZG variant: no hiding, no
//!   blinding, no batch/multi-point opening. See `SPEC_FULL.md` for the full
//!   list of non-goals.
//!
//! If any invariant is violated at runtime, the failure mode is a precise
//! [`error::KzgError`], never undefined behavior. Verification rejection is
//! not an error — [`verify::verify`] returns a `bool`.

#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms)]

/// Commitment construction (`Commit`, §4.2).
pub mod commit;
/// `KzgError`, the shared error kind for setup/commit/witness/verify.
pub mod error;
/// The reversed-storage polynomial type and `Evaluate` (§4.3).
pub mod poly;
/// Trusted-setup key generation (`Setup`, §4.1).
pub mod setup;
/// Fiat–Shamir challenge derivation (§4.6).
pub mod transcript;
/// Pairing-based opening verification (`Verify`, §4.5).
pub mod verify;
/// Opening-proof construction (`Witness`, §4.4).
pub mod witness;

/// Scalar field used across the crate (BN254).
pub type F = ark_bn254::Fr;

/// G1 affine group element used for commitments and witnesses.
pub type G1 = ark_bn254::G1Affine;

/// G2 affine group element used for the commit key's second source group.
pub type G2 = ark_bn254::G2Affine;

pub use crate::commit::{commit, Commitment};
pub use crate::error::KzgError;
pub use crate::poly::Polynomial;
pub use crate::setup::{setup, CommitKey};
pub use crate::transcript::{fiat_shamir_point, fiat_shamir_point_legacy, fiat_shamir_point_with_context};
pub use crate::verify::verify;
pub use crate::witness::{witness, Witness};
